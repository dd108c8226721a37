//! Scene file loading.
//!
//! Reads a JSON scene description, validates it and reports anything the
//! renderer cannot handle as a [`LoadError`].

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::scene::{ObjectDescription, SceneDescription};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {kind} at objects[{index}]: {reason}")]
    InvalidObject {
        index: usize,
        kind: &'static str,
        reason: String,
    },

    #[error("Invalid light at lights[{index}]: {reason}")]
    InvalidLight { index: usize, reason: String },

    #[error("Invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("Eye position is not finite")]
    InvalidEye,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
///
/// The scene name defaults to the file stem when the file does not set one.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&content)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} objects, {} lights",
        scene.name,
        path.display(),
        scene.object_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(content: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(content)?;
    validate(&scene)?;

    match scene.light_count() {
        0 => log::warn!("Scene has no lights; only ambient shading will be visible"),
        1 => {}
        n => log::warn!("Scene has {} lights; only the first one is used for shading", n),
    }

    Ok(scene)
}

/// Check that a scene description is renderable.
///
/// Rejects non-finite coordinates, non-positive sphere radii, zero plane
/// normals, degenerate triangles and empty images.
pub fn validate(scene: &SceneDescription) -> LoadResult<()> {
    if scene.image.width == 0 || scene.image.height == 0 {
        return Err(LoadError::InvalidImageSize {
            width: scene.image.width,
            height: scene.image.height,
        });
    }

    if !scene.eye().is_finite() {
        return Err(LoadError::InvalidEye);
    }

    for (index, light) in scene.lights.iter().enumerate() {
        if !light.position().is_finite() || !light.color().is_finite() {
            return Err(LoadError::InvalidLight {
                index,
                reason: "position and color must be finite".to_string(),
            });
        }
    }

    for (index, object) in scene.objects.iter().enumerate() {
        if let Err(reason) = validate_object(object) {
            return Err(LoadError::InvalidObject {
                index,
                kind: object.kind(),
                reason,
            });
        }
    }

    Ok(())
}

fn validate_object(object: &ObjectDescription) -> Result<(), String> {
    let material = object.material();
    let coefficients = [material.ka, material.kd, material.ks];
    if !material.color().is_finite() || coefficients.iter().any(|k| !k.is_finite()) {
        return Err("material values must be finite".to_string());
    }

    match object {
        ObjectDescription::Sphere {
            position, radius, ..
        } => {
            if !Vec3::from_array(*position).is_finite() {
                return Err("position must be finite".to_string());
            }
            if !radius.is_finite() || *radius <= 0.0 {
                return Err(format!("radius must be positive, got {}", radius));
            }
        }
        ObjectDescription::Plane { point, normal, .. } => {
            let normal = Vec3::from_array(*normal);
            if !Vec3::from_array(*point).is_finite() || !normal.is_finite() {
                return Err("point and normal must be finite".to_string());
            }
            if normal.length_squared() == 0.0 {
                return Err("normal must be non-zero".to_string());
            }
        }
        ObjectDescription::Triangle { vertices, .. } => {
            let [v0, v1, v2] = (*vertices).map(Vec3::from_array);
            if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
                return Err("vertices must be finite".to_string());
            }
            if (v1 - v0).cross(v2 - v0).length_squared() == 0.0 {
                return Err("vertices are collinear".to_string());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "eye": [200, 200, 1000],
        "image": { "width": 64, "height": 48 },
        "lights": [
            { "position": [-200, 600, 1500], "color": [1.0, 1.0, 1.0] }
        ],
        "objects": [
            {
                "type": "sphere",
                "position": [90, 320, 100],
                "radius": 50,
                "material": { "color": [0.0, 0.0, 1.0], "ka": 0.2, "kd": 0.7, "ks": 0.5, "n": 64 }
            },
            {
                "type": "plane",
                "point": [0, 0, -200],
                "normal": [0, 0, 1],
                "material": { "color": [0.8, 0.8, 0.8], "ka": 0.2, "kd": 0.8, "ks": 0.0 }
            },
            {
                "type": "triangle",
                "vertices": [[0, 0, 0], [100, 0, 0], [0, 100, 0]],
                "material": { "color": [1.0, 0.0, 0.0], "ka": 0.2, "kd": 0.7, "ks": 0.3 }
            }
        ]
    }"#;

    fn sphere_scene(radius: &str) -> String {
        format!(
            r#"{{
                "lights": [{{ "position": [0, 0, 0] }}],
                "objects": [{{
                    "type": "sphere", "position": [0, 0, -5], "radius": {},
                    "material": {{ "color": [1, 1, 1], "ka": 0.1, "kd": 0.5, "ks": 0.5 }}
                }}]
            }}"#,
            radius
        )
    }

    #[test]
    fn test_load_complete_scene() {
        let scene = load_scene_from_str(SCENE).unwrap();

        assert_eq!(scene.eye(), Vec3::new(200.0, 200.0, 1000.0));
        assert_eq!(scene.image.width, 64);
        assert_eq!(scene.image.height, 48);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.object_count(), 3);

        let kinds: Vec<_> = scene.objects.iter().map(|o| o.kind()).collect();
        assert_eq!(kinds, ["sphere", "plane", "triangle"]);
    }

    #[test]
    fn test_reject_non_positive_radius() {
        for radius in ["0", "-1.5"] {
            match load_scene_from_str(&sphere_scene(radius)) {
                Err(LoadError::InvalidObject { index, kind, .. }) => {
                    assert_eq!(index, 0);
                    assert_eq!(kind, "sphere");
                }
                other => panic!("expected InvalidObject, got {:?}", other),
            }
        }

        assert!(load_scene_from_str(&sphere_scene("2")).is_ok());
    }

    #[test]
    fn test_reject_zero_plane_normal() {
        let json = r#"{
            "objects": [{
                "type": "plane", "point": [0, 0, 0], "normal": [0, 0, 0],
                "material": { "color": [1, 1, 1], "ka": 0.1, "kd": 0.5, "ks": 0.5 }
            }]
        }"#;

        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::InvalidObject { kind: "plane", .. })
        ));
    }

    #[test]
    fn test_reject_degenerate_triangle() {
        let json = r#"{
            "objects": [{
                "type": "triangle", "vertices": [[0, 0, 0], [1, 1, 1], [2, 2, 2]],
                "material": { "color": [1, 1, 1], "ka": 0.1, "kd": 0.5, "ks": 0.5 }
            }]
        }"#;

        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::InvalidObject { kind: "triangle", .. })
        ));
    }

    #[test]
    fn test_reject_empty_image() {
        let json = r#"{ "image": { "width": 0, "height": 10 } }"#;

        assert!(matches!(
            load_scene_from_str(json),
            Err(LoadError::InvalidImageSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_unknown_object_type() {
        let json = r#"{ "objects": [{ "type": "torus" }] }"#;

        assert!(matches!(load_scene_from_str(json), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = std::env::temp_dir().join(format!("glint_loader_{}.json", std::process::id()));
        fs::write(&path, SCENE).unwrap();

        let scene = load_scene(&path).unwrap();
        fs::remove_file(&path).ok();

        // No name in the file, so it comes from the file stem
        assert!(scene.name.starts_with("glint_loader_"));
        assert_eq!(scene.object_count(), 3);
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene("/nonexistent/glint/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
