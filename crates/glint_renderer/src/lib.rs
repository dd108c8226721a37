//! glint Renderer - CPU ray tracing with Phong-style shading
//!
//! Casts one ray per pixel from the scene's eye, finds the nearest
//! primitive and shades it with ambient, diffuse and specular terms from a
//! single light. No shadows, reflections or anti-aliasing.

mod bucket;
mod hit;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use hit::{Hit, Primitive};
pub use material::{Light, Material};
pub use plane::Plane;
pub use renderer::{color_to_rgb8, Image, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export common math types from glint_math
pub use glint_math::{Color, Ray, Vec3};
