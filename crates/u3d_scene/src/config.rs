//! Builder configuration: visualization modes and style parameters

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec4;

/// Visualization modes selectable by the viewer.
///
/// Every mode is representable in a document's view settings; only a subset has
/// a defined encoding for every geometry kind. Modes without an encoding for a
/// kind are rejected with [`crate::SceneError::UnsupportedMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualizationMode {
    /// Filled faces with resolved materials
    Solid,
    /// Filled faces with superimposed edges
    SolidWireframe,
    /// Filled faces at reduced opacity
    Transparent,
    /// Transparent faces with superimposed edges
    TransparentWireframe,
    /// Axis-aligned bounding box, edges only
    BoundingBox,
    /// Axis-aligned bounding box, translucent faces only
    TransparentBoundingBox,
    /// Translucent bounding box with outlined edges
    TransparentBoundingBoxOutline,
    /// Edges only
    Wireframe,
    /// Shaded edges
    ShadedWireframe,
    /// Edges with hidden-line removal
    HiddenWireframe,
    /// Vertices only
    Vertices,
    /// Vertices colored from the model's per-vertex data
    ShadedVertices,
    /// Monochrome illustration rendering
    Illustration,
    /// Filled faces with silhouette outline
    SolidOutline,
    /// Shaded illustration rendering
    ShadedIllustration,
}

impl VisualizationMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Solid,
        Self::SolidWireframe,
        Self::Transparent,
        Self::TransparentWireframe,
        Self::BoundingBox,
        Self::TransparentBoundingBox,
        Self::TransparentBoundingBoxOutline,
        Self::Wireframe,
        Self::ShadedWireframe,
        Self::HiddenWireframe,
        Self::Vertices,
        Self::ShadedVertices,
        Self::Illustration,
        Self::SolidOutline,
        Self::ShadedIllustration,
    ];
}

/// Style parameters accompanying a visualization mode.
///
/// These are plain values handed over by the host viewer; they are not read
/// from any file by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    /// Tint for edges, points, and bounding boxes
    pub auxiliary_color: Vec4,
    /// Face color for modes that override materials
    pub face_color: Vec4,
    /// Opacity in [0, 1] for transparent bounding-box faces
    pub opacity: f32,
    /// Fixed point size in pixels for vertex rendering
    pub point_size: f32,
    /// Normal-smoothing crease angle in degrees (accepted, not exercised by
    /// the covered encodings)
    pub crease_angle: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            auxiliary_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            face_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            opacity: 0.5,
            point_size: 1.0,
            crease_angle: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_list_is_complete() {
        assert_eq!(VisualizationMode::ALL.len(), 15);
        // No duplicates
        for (i, a) in VisualizationMode::ALL.iter().enumerate() {
            for b in &VisualizationMode::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_style_default_opacity_in_range() {
        let style = SceneStyle::default();
        assert!((0.0..=1.0).contains(&style.opacity));
        assert!(style.point_size > 0.0);
    }
}
