use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) player_ms: f64,
    pub(super) bodies_ms: f64,
    pub(super) body_count: u32,
    pub(super) bodies_updated: u32,
    pub(super) ground_hits: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn player_ms(&self) -> f64 { self.player_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_ms(&self) -> f64 { self.bodies_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn bodies_updated(&self) -> u32 { self.bodies_updated }
    #[wasm_bindgen(getter)]
    pub fn ground_hits(&self) -> u32 { self.ground_hits }
}
