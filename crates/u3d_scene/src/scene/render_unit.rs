//! Renderable units: packed geometry plus material state
//!
//! A [`RenderUnit`] is what the host renderer consumes: one primitive topology,
//! one or more byte buffers with attribute views into them, an optional index
//! list, and a material descriptor. Buffer layout is exact: component counts
//! times 4-byte floats, natural packing, no alignment padding.

use super::material::MaterialDescriptor;

/// Primitive topology of a render unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Point list
    Points,
    /// Line list (2 indices/vertices per segment)
    Lines,
    /// Triangle list (3 indices/vertices per face)
    Triangles,
}

/// Attribute meanings understood by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSemantic {
    /// Vertex position (always present)
    Position,
    /// Vertex normal
    Normal,
    /// Vertex color
    Color,
    /// Texture coordinate
    TexCoord,
}

/// A typed view into one of a unit's byte buffers.
///
/// All attributes are tightly packed f32 data; `components` counts floats per
/// vertex, `byte_stride` is the distance between consecutive vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Meaning of the attribute
    pub semantic: AttributeSemantic,
    /// Index into [`GeometryData::buffers`]
    pub buffer: usize,
    /// Floats per vertex
    pub components: u32,
    /// Offset of the first element in bytes
    pub byte_offset: u32,
    /// Distance between consecutive vertices in bytes
    pub byte_stride: u32,
    /// Number of vertices
    pub count: u32,
}

/// Packed geometry for one render unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Primitive topology
    pub topology: PrimitiveTopology,
    /// Raw vertex data, one or more buffers
    pub buffers: Vec<Vec<u8>>,
    /// Attribute views into the buffers
    pub attributes: Vec<VertexAttribute>,
    /// Optional index list
    pub indices: Option<Vec<u32>>,
}

impl GeometryData {
    /// Creates empty geometry with the given topology.
    pub fn new(topology: PrimitiveTopology) -> Self {
        Self {
            topology,
            buffers: Vec::new(),
            attributes: Vec::new(),
            indices: None,
        }
    }

    /// Appends a buffer and returns its index.
    pub fn push_buffer(&mut self, data: Vec<u8>) -> usize {
        self.buffers.push(data);
        self.buffers.len() - 1
    }

    /// Appends an attribute view.
    pub fn push_attribute(&mut self, attribute: VertexAttribute) {
        self.attributes.push(attribute);
    }

    /// The attribute with the given semantic, if present.
    pub fn attribute(&self, semantic: AttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }

    /// Number of vertices, taken from the position attribute.
    pub fn vertex_count(&self) -> u32 {
        self.attribute(AttributeSemantic::Position)
            .map_or(0, |a| a.count)
    }

    /// Number of indices, zero when the unit is non-indexed.
    pub fn index_count(&self) -> u32 {
        self.indices.as_ref().map_or(0, |i| i.len() as u32)
    }
}

/// One renderable unit handed to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderUnit {
    /// Packed geometry
    pub geometry: GeometryData,
    /// Material and render state
    pub material: MaterialDescriptor,
}
