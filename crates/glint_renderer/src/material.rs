//! Surface materials and point lights.

use glint_core::{LightDescription, MaterialDescription};
use glint_math::{Color, Vec3};

/// Phong-style reflectance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color
    pub color: Color,
    /// Ambient coefficient
    pub ka: f32,
    /// Diffuse coefficient
    pub kd: f32,
    /// Specular coefficient
    pub ks: f32,
}

impl Material {
    pub fn new(color: Color, ka: f32, kd: f32, ks: f32) -> Self {
        Self { color, ka, kd, ks }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::splat(0.5), 0.2, 0.7, 0.5)
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Self::new(desc.color(), desc.ka, desc.kd, desc.ks)
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

impl From<&LightDescription> for Light {
    fn from(desc: &LightDescription) -> Self {
        Self::new(desc.position(), desc.color())
    }
}
