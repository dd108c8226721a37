//! Primitive trait and Hit record for ray-object intersection.

use crate::{Material, Ray};
use glint_math::Vec3;

/// Result of intersecting a ray with a primitive.
///
/// `t = +inf` is the "no intersection" sentinel; any finite `t` is a
/// candidate hit. The normal is only meaningful for finite `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray
    pub t: f32,
    /// Unit surface normal at the hit point
    pub normal: Vec3,
}

impl Hit {
    /// The sentinel returned when a ray misses.
    pub const NO_HIT: Hit = Hit {
        t: f32::INFINITY,
        normal: Vec3::ZERO,
    };

    pub fn new(t: f32, normal: Vec3) -> Self {
        Self { t, normal }
    }

    /// True unless this is the `NO_HIT` sentinel.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t.is_finite()
    }
}

/// Trait for shapes that can be hit by rays.
///
/// Implementations are immutable after construction and shared read-only
/// across render threads.
pub trait Primitive: Send + Sync {
    /// Intersect a ray with this primitive.
    ///
    /// Returns the nearest hit in front of the ray origin, or `Hit::NO_HIT`.
    fn intersect(&self, ray: &Ray) -> Hit;

    /// Get the material used to shade this primitive.
    fn material(&self) -> &Material;
}
