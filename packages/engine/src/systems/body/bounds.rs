use crate::core::Vec3;

/// Face positions of an axis-aligned box
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub back: f32,
    pub front: f32,
}

impl Bounds {
    /// Box of size `width × height × depth` centered on `center`
    #[inline]
    pub fn from_center(center: Vec3, width: f32, height: f32, depth: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y - height / 2.0,
            top: center.y + height / 2.0,
            back: center.z - depth / 2.0,
            front: center.z + depth / 2.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.left, self.right, self.bottom, self.top, self.back, self.front]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.left + self.right) * 0.5,
            (self.bottom + self.top) * 0.5,
            (self.back + self.front) * 0.5,
        )
    }
}

/// Anything a dynamic body can be tested against.
///
/// Implementors must report bounds consistent with their own geometry; the
/// integrator never checks them again.
pub trait BodyLike {
    fn bounds(&self) -> Bounds;
}

impl BodyLike for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

impl<T: BodyLike + ?Sized> BodyLike for &T {
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }
}
