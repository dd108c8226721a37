//! Infinite plane primitive.

use crate::{Hit, Material, Primitive, Ray};
use glint_math::{Interval, Vec3};

/// Rays closer to parallel than this are treated as missing the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` with unit normal `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. `normal` must be non-zero; it is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        debug_assert!(normal.length_squared() > 0.0, "plane normal must be non-zero");
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }
}

impl Primitive for Plane {
    /// The stored normal is returned as-is; back-facing hits are handled by
    /// the shading step, same as for spheres.
    fn intersect(&self, ray: &Ray) -> Hit {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return Hit::NO_HIT;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !Interval::FORWARD.surrounds(t) {
            return Hit::NO_HIT;
        }

        Hit::new(t, self.normal)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
