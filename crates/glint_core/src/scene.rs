//! Scene description types.
//!
//! These mirror the JSON scene format one to one. Vectors are stored as
//! plain `[f32; 3]` arrays so the file format stays independent of the math
//! library; accessors convert them to `Vec3`.

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Default output resolution when a scene file does not specify one.
pub const DEFAULT_IMAGE_SIZE: u32 = 400;

/// Phong-style reflectance parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Base color (RGB, 0-1)
    pub color: [f32; 3],
    /// Ambient coefficient
    pub ka: f32,
    /// Diffuse coefficient
    pub kd: f32,
    /// Specular coefficient
    pub ks: f32,
}

impl MaterialDescription {
    pub fn color(&self) -> Color {
        Color::from_array(self.color)
    }
}

/// A point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    #[serde(default = "white")]
    pub color: [f32; 3],
}

impl LightDescription {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn color(&self) -> Color {
        Color::from_array(self.color)
    }
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// A renderable object, tagged by `"type"` in the scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDescription {
    Sphere {
        position: [f32; 3],
        radius: f32,
        material: MaterialDescription,
    },
    /// Infinite plane through `point` with the given normal.
    Plane {
        point: [f32; 3],
        normal: [f32; 3],
        material: MaterialDescription,
    },
    Triangle {
        vertices: [[f32; 3]; 3],
        material: MaterialDescription,
    },
}

impl ObjectDescription {
    /// Get the material of this object.
    pub fn material(&self) -> &MaterialDescription {
        match self {
            Self::Sphere { material, .. }
            | Self::Plane { material, .. }
            | Self::Triangle { material, .. } => material,
        }
    }

    /// Short name of the object type, as written in the scene file.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Plane { .. } => "plane",
            Self::Triangle { .. } => "triangle",
        }
    }
}

/// Output image settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }
}

/// A complete scene file: eye point, output size, lights and objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    /// Camera origin
    #[serde(default)]
    pub eye: [f32; 3],

    #[serde(default)]
    pub image: ImageSettings,

    /// Lights in file order. Shading only uses one of them.
    #[serde(default)]
    pub lights: Vec<LightDescription>,

    /// Objects in file order
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.eye)
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
