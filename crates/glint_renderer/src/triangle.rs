//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{Hit, Material, Primitive, Ray};
use glint_math::{Interval, Vec3};

/// A single-sided-normal triangle.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, counter-clockwise winding)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        debug_assert!(normal.length_squared() > 0.0, "triangle is degenerate");

        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize(),
            material,
        }
    }

    /// Get the unit face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Primitive for Triangle {
    fn intersect(&self, ray: &Ray) -> Hit {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return Hit::NO_HIT;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return Hit::NO_HIT;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return Hit::NO_HIT;
        }

        let t = f * edge2.dot(q);
        if !Interval::FORWARD.surrounds(t) {
            return Hit::NO_HIT;
        }

        Hit::new(t, self.normal)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
