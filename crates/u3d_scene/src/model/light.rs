//! Light resources of the parsed model

use crate::foundation::math::Vec3;

/// A light resource.
///
/// Ambient lights contribute to a scene-wide accumulator during a build and
/// never become entities; the other kinds map to light entities in the output
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LightSource {
    /// Omnipresent base illumination
    Ambient {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
    },
    /// Parallel rays, position-independent
    Directional {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
    },
    /// Radiates from a position with distance falloff
    Point {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
        /// Constant, linear, and quadratic falloff coefficients
        attenuation: [f32; 3],
    },
    /// Cone of light with distance falloff
    Spot {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
        /// Constant, linear, and quadratic falloff coefficients
        attenuation: [f32; 3],
        /// Cone cutoff angle in degrees
        cut_off_angle: f32,
    },
}
