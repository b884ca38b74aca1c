//! Byte-buffer packing helpers shared by the geometry encoder
//!
//! Attribute data is packed as tightly as the float components allow: a
//! 3-component attribute occupies 12 bytes per vertex, with no padding between
//! vertices or between interleaved attributes.

use crate::foundation::math::Vec3;
use crate::scene::{AttributeSemantic, GeometryData, PrimitiveTopology, VertexAttribute};

/// Size of one f32 component in bytes.
pub const FLOAT_SIZE: u32 = std::mem::size_of::<f32>() as u32;

/// Casts a float slice to its little-endian byte representation.
pub fn pack_floats(floats: &[f32]) -> Vec<u8> {
    bytemuck::cast_slice(floats).to_vec()
}

/// Packs 3-component vectors into a tight 12-byte-stride buffer.
pub fn pack_vec3s(values: &[Vec3]) -> Vec<u8> {
    let mut floats = Vec::with_capacity(values.len() * 3);
    for value in values {
        floats.extend_from_slice(value.as_slice());
    }
    pack_floats(&floats)
}

/// Adds a dedicated buffer holding one tightly packed 3-component attribute.
pub fn push_vec3_attribute(
    geometry: &mut GeometryData,
    semantic: AttributeSemantic,
    values: &[Vec3],
) {
    let buffer = geometry.push_buffer(pack_vec3s(values));
    geometry.push_attribute(VertexAttribute {
        semantic,
        buffer,
        components: 3,
        byte_offset: 0,
        byte_stride: 3 * FLOAT_SIZE,
        count: values.len() as u32,
    });
}

/// Point-list geometry over raw positions, the shared base of every
/// vertices-only encoding.
pub fn position_point_list(positions: &[Vec3]) -> GeometryData {
    let mut geometry = GeometryData::new(PrimitiveTopology::Points);
    push_vec3_attribute(&mut geometry, AttributeSemantic::Position, positions);
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_vec3s_layout() {
        let values = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let bytes = pack_vec3s(&values);
        assert_eq!(bytes.len(), 2 * 3 * FLOAT_SIZE as usize);

        let floats: &[f32] = bytemuck::cast_slice(&bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_position_point_list_attribute() {
        let geometry = position_point_list(&[Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0)]);
        assert_eq!(geometry.topology, PrimitiveTopology::Points);

        let position = geometry.attribute(AttributeSemantic::Position).unwrap();
        assert_eq!(position.components, 3);
        assert_eq!(position.byte_offset, 0);
        assert_eq!(position.byte_stride, 12);
        assert_eq!(position.count, 2);
        assert!(geometry.indices.is_none());
    }
}
