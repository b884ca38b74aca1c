//! Shader and material resources of the parsed model

use crate::foundation::math::Vec4;

/// Alpha-test comparison functions.
///
/// A fragment passes when `fragment_alpha <op> reference` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaFunction {
    /// Never passes
    Never,
    /// Passes when alpha < reference
    Less,
    /// Passes when alpha == reference
    Equal,
    /// Passes when alpha <= reference
    LessOrEqual,
    /// Passes when alpha > reference
    Greater,
    /// Passes when alpha != reference
    NotEqual,
    /// Passes when alpha >= reference
    GreaterOrEqual,
    /// Always passes
    Always,
}

/// A texture bound to a shader channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBinding {
    /// Name of the texture resource
    pub texture_name: String,
    /// Shader channel the texture is bound to
    pub channel: u32,
}

/// A shader resource.
///
/// Shaders tie together texture bindings, the per-vertex-color switch,
/// alpha-test state, and the referenced material.
#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    /// Bound textures; only the first binding is consulted by resolution
    pub texture_bindings: Vec<TextureBinding>,
    /// Use interpolated per-vertex colors instead of the material
    pub use_vertex_color: bool,
    /// Alpha test switch
    pub alpha_test_enabled: bool,
    /// Alpha-test comparison function
    pub alpha_test_function: AlphaFunction,
    /// Alpha-test reference value
    pub alpha_test_reference: f32,
    /// Name of the referenced material resource
    pub material_name: String,
}

impl Shader {
    /// A minimal opaque shader referencing the given material.
    pub fn flat(material_name: impl Into<String>) -> Self {
        Self {
            texture_bindings: Vec::new(),
            use_vertex_color: false,
            alpha_test_enabled: false,
            alpha_test_function: AlphaFunction::Always,
            alpha_test_reference: 0.0,
            material_name: material_name.into(),
        }
    }
}

/// A material resource: the classic ambient/diffuse/specular triple.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialResource {
    /// Ambient color (RGBA)
    pub ambient: Vec4,
    /// Diffuse color (RGBA)
    pub diffuse: Vec4,
    /// Specular color (RGBA)
    pub specular: Vec4,
}
