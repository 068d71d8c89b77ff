#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{PhysicsError, PhysicsResult};
use crate::systems::body::{Body, BodyLike};

/// Manages all dynamic boxes in the simulation
pub struct BodySystem {
    bodies: Vec<(u32, Body)>,
    next_id: u32,
}

pub struct SpawnResult {
    pub id: u32,
}

/// Per-frame counters from `BodySystem::update`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub updated: u32,
    pub ground_hits: u32,
}

impl BodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a body and hand out its id (ids start at 1, never reused until `clear`)
    pub fn add_body(&mut self, body: Body) -> SpawnResult {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        log::debug!("spawned body {id} at {:?}", body.position());
        self.bodies.push((id, body));
        SpawnResult { id }
    }

    /// Remove a body by ID.
    pub fn remove_body(&mut self, id: u32) -> PhysicsResult<Body> {
        let idx = self
            .bodies
            .iter()
            .position(|(body_id, _)| *body_id == id)
            .ok_or(PhysicsError::UnknownBody(id))?;
        let (_, body) = self.bodies.swap_remove(idx);
        log::debug!("removed body {id}");
        Ok(body)
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|(body_id, _)| *body_id == id)
            .map(|(_, body)| body)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies
            .iter_mut()
            .find(|(body_id, _)| *body_id == id)
            .map(|(_, body)| body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Body)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    /// Remove all bodies and restart ids at 1
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Integrate every body one frame against `ground`.
    ///
    /// The ground is only borrowed, so it is frozen for the whole pass.
    pub fn update<G: BodyLike + Sync + ?Sized>(&mut self, ground: &G) -> StepReport {
        #[cfg(feature = "parallel")]
        let ground_hits = self
            .bodies
            .par_iter_mut()
            .map(|(_, body)| body.update(ground))
            .filter(|hit| *hit)
            .count();

        #[cfg(not(feature = "parallel"))]
        let ground_hits = self
            .bodies
            .iter_mut()
            .map(|(_, body)| body.update(ground))
            .filter(|hit| *hit)
            .count();

        StepReport {
            updated: self.bodies.len() as u32,
            ground_hits: ground_hits as u32,
        }
    }

    /// First body (in storage order) for which `collides` holds
    pub fn first_hit<F>(&self, collides: F) -> Option<u32>
    where
        F: Fn(&Body) -> bool,
    {
        self.bodies
            .iter()
            .find(|(_, body)| collides(body))
            .map(|(id, _)| *id)
    }
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}
