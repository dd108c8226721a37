//! glint Core - Scene descriptions for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ObjectDescription`,
//!   `MaterialDescription`, `LightDescription`
//! - **JSON loading**: parsing and validation of scene files
//!
//! The types here are renderer-agnostic; `glint_renderer` turns them into
//! intersectable primitives.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let desc = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} objects, {} lights",
//!     desc.object_count(),
//!     desc.light_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, validate, LoadError, LoadResult};
pub use scene::{
    ImageSettings, LightDescription, MaterialDescription, ObjectDescription, SceneDescription,
};
