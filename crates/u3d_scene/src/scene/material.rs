//! Material descriptors and render state for render units

use std::sync::Arc;

use crate::foundation::math::{color, Vec4};
use crate::model::{AlphaFunction, ImageData};

/// Surface shading of a render unit.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceMaterial {
    /// Fixed ambient/diffuse/specular colors
    Flat {
        /// Ambient color (RGBA)
        ambient: Vec4,
        /// Diffuse color (RGBA)
        diffuse: Vec4,
        /// Specular color (RGBA)
        specular: Vec4,
    },
    /// Interpolated per-vertex colors from the unit's color attribute
    VertexColor,
    /// Diffuse texture; ambient and specular stay neutral
    Textured {
        /// Decoded image, shared with every unit binding the same texture
        image: Arc<ImageData>,
    },
}

/// Alpha-test render state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaTest {
    /// Comparison function
    pub function: AlphaFunction,
    /// Reference value compared against fragment alpha
    pub reference: f32,
}

/// Complete material and render-state description of one render unit.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    /// Surface shading
    pub surface: SurfaceMaterial,
    /// Optional alpha-test state
    pub alpha_test: Option<AlphaTest>,
    /// Fixed point size in pixels for point topology
    pub point_size: Option<f32>,
    /// Disable back-face culling
    pub double_sided: bool,
    /// Enable alpha blending
    pub alpha_blending: bool,
}

impl MaterialDescriptor {
    /// A flat-colored material.
    pub fn flat(ambient: Vec4, diffuse: Vec4, specular: Vec4, alpha_blending: bool) -> Self {
        Self {
            surface: SurfaceMaterial::Flat {
                ambient,
                diffuse,
                specular,
            },
            alpha_test: None,
            point_size: None,
            double_sided: false,
            alpha_blending,
        }
    }

    /// A per-vertex-color material.
    pub fn vertex_color() -> Self {
        Self {
            surface: SurfaceMaterial::VertexColor,
            alpha_test: None,
            point_size: None,
            double_sided: false,
            alpha_blending: false,
        }
    }

    /// A textured material; ambient and specular are neutral.
    pub fn textured(image: Arc<ImageData>, alpha_blending: bool) -> Self {
        Self {
            surface: SurfaceMaterial::Textured { image },
            alpha_test: None,
            point_size: None,
            double_sided: false,
            alpha_blending,
        }
    }

    /// The flat material used for auxiliary-colored edges and vertices:
    /// ambient carries the tint, diffuse and specular are fully transparent.
    pub fn auxiliary(auxiliary_color: Vec4) -> Self {
        Self::flat(auxiliary_color, color::TRANSPARENT, color::TRANSPARENT, false)
    }

    /// Attaches alpha-test state.
    #[must_use]
    pub fn with_alpha_test(mut self, function: AlphaFunction, reference: f32) -> Self {
        self.alpha_test = Some(AlphaTest {
            function,
            reference,
        });
        self
    }

    /// Sets the fixed point size.
    #[must_use]
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = Some(point_size);
        self
    }

    /// Disables back-face culling.
    #[must_use]
    pub fn with_double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}
