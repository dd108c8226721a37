//! Sphere primitive for ray tracing.

use crate::{Hit, Material, Primitive, Ray};
use glint_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Primitive for Sphere {
    /// Solve |O + tD - C|^2 = r^2 for t.
    ///
    /// Takes the smaller root, falling back to the larger one when the smaller
    /// lies behind the origin. When the discriminant is exactly zero the
    /// normal is flipped; this treats the tangent case as "origin inside"
    /// and is not a general inside test.
    fn intersect(&self, ray: &Ray) -> Hit {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Hit::NO_HIT;
        }
        let tangent = discriminant == 0.0;

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);

        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        let t = if near < 0.0 { far } else { near };
        if t < 0.0 {
            return Hit::NO_HIT;
        }

        let normal = (ray.at(t) - self.center).normalize();
        if tangent {
            Hit::new(t, -normal)
        } else {
            Hit::new(t, normal)
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
