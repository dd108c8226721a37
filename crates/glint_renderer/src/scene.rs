//! Scene container and the shading engine.
//!
//! A `Scene` owns its primitives and lights and is read-only once built.
//! `trace` finds the nearest surface along a ray and shades it with a
//! Phong-style local model using a single selected light.

use crate::{Hit, Light, Material, Plane, Primitive, Ray, Sphere, Triangle};
use glint_core::{LoadResult, ObjectDescription, SceneDescription};
use glint_math::{Color, Vec3};

/// A renderable scene: primitives, lights and the eye point.
pub struct Scene {
    objects: Vec<Box<dyn Primitive>>,
    lights: Vec<Light>,
    eye: Vec3,
    light_index: usize,
}

impl Scene {
    /// Create an empty scene with the eye at the origin.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            eye: Vec3::ZERO,
            light_index: 0,
        }
    }

    /// Build a renderable scene from a description.
    ///
    /// The description is run through `glint_core::validate` first, so a
    /// hand-built description with a bad primitive is an error rather than a
    /// failed assertion.
    pub fn from_description(desc: &SceneDescription) -> LoadResult<Self> {
        glint_core::validate(desc)?;

        let mut scene = Self::new();
        scene.set_eye(desc.eye());

        for object in &desc.objects {
            let material = Material::from(object.material());
            let primitive: Box<dyn Primitive> = match object {
                ObjectDescription::Sphere {
                    position, radius, ..
                } => Box::new(Sphere::new(Vec3::from_array(*position), *radius, material)),
                ObjectDescription::Plane { point, normal, .. } => Box::new(Plane::new(
                    Vec3::from_array(*point),
                    Vec3::from_array(*normal),
                    material,
                )),
                ObjectDescription::Triangle { vertices, .. } => {
                    let [v0, v1, v2] = (*vertices).map(Vec3::from_array);
                    Box::new(Triangle::new(v0, v1, v2, material))
                }
            };
            scene.add_object(primitive);
        }

        for light in &desc.lights {
            scene.add_light(Light::from(light));
        }

        log::debug!(
            "Built scene '{}': {} objects, {} lights",
            desc.name,
            scene.object_count(),
            scene.light_count()
        );

        Ok(scene)
    }

    /// Add an object to the scene. No deduplication is done.
    pub fn add_object(&mut self, object: Box<dyn Primitive>) {
        self.objects.push(object);
    }

    /// Add a copy of a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Set the eye (camera origin). Last write wins.
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// Get the eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Choose which light is used for shading (default 0).
    ///
    /// Only one light ever contributes; the others are ignored.
    pub fn select_light(&mut self, index: usize) {
        self.light_index = index;
    }

    /// Get the light used for shading, if it exists.
    pub fn selected_light(&self) -> Option<&Light> {
        self.lights.get(self.light_index)
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the nearest primitive hit by `ray`.
    ///
    /// Uses strict `<`, so on equal distances the earlier primitive wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(&dyn Primitive, Hit)> {
        let mut min_hit = Hit::NO_HIT;
        let mut closest: Option<&dyn Primitive> = None;

        for object in &self.objects {
            let hit = object.intersect(ray);
            if hit.t < min_hit.t {
                min_hit = hit;
                closest = Some(object.as_ref());
            }
        }

        closest.map(|object| (object, min_hit))
    }

    /// Compute the color seen along `ray`.
    ///
    /// Returns black on a miss. The result is not clamped and may contain
    /// negative or >1 channels: the diffuse and specular dot products are
    /// used as-is and the specular term has no shininess exponent.
    pub fn trace(&self, ray: &Ray) -> Color {
        let Some((object, hit)) = self.closest_hit(ray) else {
            return Color::ZERO;
        };

        let material = object.material();
        let point = ray.at(hit.t);
        let n = hit.normal;
        let v = (-ray.direction()).normalize();

        let ambient = material.color * material.ka;

        let Some(light) = self.selected_light() else {
            return ambient;
        };

        let l = (light.position - point).normalize();

        // Use the light direction mirrored through the surface when the
        // normal faces away from the viewer
        let cos_theta = if n.dot(v) > 0.0 { l.dot(n) } else { n.dot(-l) };
        let diffuse = cos_theta * material.color * light.color * material.kd;

        let r = (2.0 * n.dot(l) * n - l).normalize();
        let specular = r.dot(v) * light.color * material.ks;

        ambient + diffuse + specular
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
