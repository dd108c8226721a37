//! Render loop and image output.
//!
//! One ray per pixel from the scene's eye through the pixel center on the
//! z = 0 plane. Image row 0 is the top of the scene's y-up axis.

use std::path::Path;

use crate::{Ray, Scene};
use glint_math::{clamp_color, Color, Interval, Vec3};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render buckets in parallel with rayon
    pub parallel: bool,
    /// Edge length of a bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// A writable image the render loop can target.
pub trait Image {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Store the color at (x, y), with (0, 0) the top-left pixel.
    fn set(&mut self, x: u32, y: u32, color: Color);
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Row-major offset of (x, y), computed in `usize` so large images don't overflow.
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Convert to 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Write the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

impl Image for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let to_byte = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

impl Scene {
    /// Build the primary ray for pixel (x, y) of a `height` tall image.
    pub fn primary_ray(&self, x: u32, y: u32, height: u32) -> Ray {
        let pixel = Vec3::new(
            x as f32 + 0.5,
            (height - 1 - y) as f32 + 0.5,
            0.0,
        );
        Ray::through(self.eye(), pixel)
    }

    /// Trace and clamp a single pixel.
    pub fn render_pixel(&self, x: u32, y: u32, height: u32) -> Color {
        clamp_color(self.trace(&self.primary_ray(x, y, height)))
    }

    /// Render the scene into `image`, one pixel at a time in row-major order.
    pub fn render<I: Image + ?Sized>(&self, image: &mut I) {
        let (width, height) = (image.width(), image.height());
        log::debug!("Rendering {}x{} sequentially", width, height);

        for y in 0..height {
            for x in 0..width {
                let color = self.render_pixel(x, y, height);
                image.set(x, y, color);
            }
        }
    }

    /// Render to a new buffer using `config`.
    pub fn render_with(&self, width: u32, height: u32, config: &RenderConfig) -> ImageBuffer {
        if config.parallel {
            self.render_parallel(width, height, config.bucket_size)
        } else {
            let mut image = ImageBuffer::new(width, height);
            self.render(&mut image);
            image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Material, Sphere};

    /// Eye above the 2x2 image plane, looking down -Z.
    fn eye() -> Vec3 {
        Vec3::new(1.0, 1.0, 10.0)
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(-1.0, 0.5, 3.0)), [0, 127, 255]);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 6);

        image.set(2, 1, Color::X);
        assert_eq!(image.get(2, 1), Color::X);
        assert_eq!(image.pixels[5], Color::X);
        assert_eq!(image.to_rgb8()[15..18], [255, 0, 0]);
    }

    #[test]
    fn test_pixel_index_past_u32_range() {
        // 70000 x 70000 pixels is more than u32::MAX; no pixels are allocated here
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(0, 1), 70_000);
        assert_eq!(image.index(69_999, 69_999), 70_000usize * 70_000 - 1);
    }

    #[test]
    fn test_primary_ray_flips_rows() {
        let mut scene = Scene::new();
        scene.set_eye(Vec3::new(0.5, 0.5, 1.0));

        // Row 0 is the top of the y-up image plane: pixel center (0.5, 3.5, 0)
        let top = scene.primary_ray(0, 0, 4);
        assert_eq!(top.origin(), scene.eye());
        assert!((top.direction() - Vec3::new(0.0, 3.0, -1.0).normalize()).length() < 1e-6);

        // Last row is the bottom: pixel center (0.5, 0.5, 0)
        let bottom = scene.primary_ray(0, 3, 4);
        assert!((bottom.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_top_left_pixel_is_max_y() {
        let mut scene = Scene::new();
        scene.set_eye(eye());
        // Small sphere on the line from the eye through (0.5, 1.5, 0),
        // which is the center of pixel (0, 0)
        let through_top_left = Vec3::new(0.5, 1.5, 0.0) - eye();
        scene.add_object(Box::new(Sphere::new(
            eye() + 2.0 * through_top_left,
            0.3,
            Material::new(Color::X, 1.0, 0.0, 0.0),
        )));
        scene.add_light(Light::new(eye(), Color::ONE));

        let mut image = ImageBuffer::new(2, 2);
        scene.render(&mut image);

        assert_eq!(image.get(0, 0), Color::X);
        assert_eq!(image.get(1, 0), Color::ZERO);
        assert_eq!(image.get(0, 1), Color::ZERO);
        assert_eq!(image.get(1, 1), Color::ZERO);
    }

    #[test]
    fn test_render_clamps_channels() {
        let mut scene = Scene::new();
        scene.set_eye(eye());
        // Large sphere filling the view, with coefficients that overshoot
        scene.add_object(Box::new(Sphere::new(
            Vec3::new(1.0, 1.0, -20.0),
            10.0,
            Material::new(Color::new(1.0, 0.8, 0.6), 0.8, 1.0, 1.0),
        )));
        scene.add_light(Light::new(eye(), Color::ONE));

        let raw = scene.trace(&scene.primary_ray(0, 0, 2));
        assert!(raw.max_element() > 1.0);

        let mut image = ImageBuffer::new(2, 2);
        scene.render(&mut image);

        for y in 0..2 {
            for x in 0..2 {
                let c = image.get(x, y);
                assert!(c.cmpge(Color::ZERO).all() && c.cmple(Color::ONE).all());
                // Every pixel hits the sphere independently
                assert!(c.max_element() > 0.0);
                assert_eq!(c, clamp_color(scene.trace(&scene.primary_ray(x, y, 2))));
            }
        }
    }

    #[test]
    fn test_negative_shading_clamps_to_black() {
        let mut scene = Scene::new();
        scene.set_eye(eye());
        scene.add_object(Box::new(Sphere::new(
            Vec3::new(1.0, 1.0, -20.0),
            10.0,
            Material::new(Color::ONE, 0.0, 1.0, 0.0),
        )));
        // Behind the sphere, so L.N < 0 on the visible side
        scene.add_light(Light::new(Vec3::new(1.0, 1.0, -100.0), Color::ONE));

        let mut image = ImageBuffer::new(2, 2);
        scene.render(&mut image);

        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_light_on_hit_point_stores_black() {
        let eye = Vec3::new(0.5, 0.5, 10.0);
        let mut scene = Scene::new();
        scene.set_eye(eye);
        scene.add_object(Box::new(Sphere::new(
            Vec3::new(0.5, 0.5, -5.0),
            1.0,
            Material::default(),
        )));
        // Exactly where the single pixel's ray hits, so L has zero length
        scene.add_light(Light::new(Vec3::new(0.5, 0.5, -4.0), Color::ONE));

        assert!(scene.trace(&scene.primary_ray(0, 0, 1)).is_nan());

        let mut image = ImageBuffer::new(1, 1);
        scene.render(&mut image);

        let c = image.get(0, 0);
        assert!(!c.is_nan());
        assert!(c.cmpge(Color::ZERO).all() && c.cmple(Color::ONE).all());
        assert_eq!(color_to_rgb8(c), [0, 0, 0]);
    }

    #[test]
    fn test_render_with_sequential() {
        let mut scene = Scene::new();
        scene.set_eye(eye());

        let config = RenderConfig {
            parallel: false,
            ..Default::default()
        };
        let image = scene.render_with(4, 3, &config);

        assert_eq!((image.width, image.height), (4, 3));
        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
    }
}
