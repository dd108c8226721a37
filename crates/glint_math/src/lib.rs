// Re-export glam for convenience
pub use glam::*;

// glint math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (linear RGB, typically 0-1 but shading may leave that range)
pub type Color = Vec3;

/// Clamp every channel of a color to [0, 1]. NaN channels become 0.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}
