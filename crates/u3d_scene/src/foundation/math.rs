//! Math types and color helpers
//!
//! Provides the fundamental math types shared by the model and scene layers.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// RGBA color helpers
///
/// Colors are plain `Vec3`/`Vec4` values: RGB where alpha is irrelevant to the
/// consumer, RGBA where it matters. Components are linear floats in [0, 1].
pub mod color {
    use super::{Vec3, Vec4};

    /// Fully transparent black, used to blank out unused material slots.
    pub const TRANSPARENT: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black, the fallback for unreferenced vertex colors.
    pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

    /// Drops the alpha component.
    pub fn to_rgb(color: Vec4) -> Vec3 {
        color.xyz()
    }

    /// Replaces the alpha component.
    pub fn with_alpha(color: Vec4, alpha: f32) -> Vec4 {
        Vec4::new(color.x, color.y, color.z, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb() {
        let rgba = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color::to_rgb(rgba), Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_color_with_alpha() {
        let rgba = color::with_alpha(color::WHITE, 0.25);
        assert_eq!(rgba, Vec4::new(1.0, 1.0, 1.0, 0.25));
    }
}
