//! Axis-aligned bounding boxes
//!
//! The corner numbering is fixed and renderers depend on it: corners 0..=3 walk
//! the low-Z face counter-clockwise starting at (min, min, min), corners 4..=7
//! repeat the ordering at max-Z. The edge and face tables below index into that
//! numbering.

use crate::foundation::math::Vec3;

/// Axis-aligned bounding box over a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

/// Index pairs forming the 12 wire edges: the low-Z ring, the high-Z ring, and
/// the four verticals.
pub const WIRE_EDGES: [u32; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, //
    4, 5, 5, 6, 6, 7, 7, 4, //
    0, 4, 1, 5, 2, 6, 3, 7,
];

/// Index triples triangulating the 6 faces as 12 triangles.
pub const SOLID_FACE_TRIANGLES: [u32; 36] = [
    0, 1, 2, // bottom
    2, 3, 0, //
    4, 5, 6, // top
    6, 7, 4, //
    0, 1, 5, // side 1
    0, 4, 5, //
    1, 2, 6, // side 2
    1, 5, 6, //
    2, 3, 7, // side 3
    2, 6, 7, //
    3, 0, 4, // side 4
    3, 7, 4,
];

impl BoundingBox {
    /// Creates a box from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Component-wise min/max over a point set; `None` for an empty set.
    ///
    /// The reduction is seeded with the first point and is associative, so the
    /// order of the remaining points does not affect the result.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;

        let mut min = first;
        let mut max = first;
        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);

            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        Some(Self { min, max })
    }

    /// The 8 corners in the fixed numbering.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_box() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_single_point_box() {
        let p = Vec3::new(1.5, -2.0, 0.25);
        let bounds = BoundingBox::from_points(&[p]).unwrap();
        assert_eq!(bounds.min, p);
        assert_eq!(bounds.max, p);
    }

    #[test]
    fn test_min_max_component_wise() {
        let points = [
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(-2.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
        ];
        let bounds = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bounds.min, Vec3::new(-2.0, -1.0, -4.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 3.0, 5.0));
        assert!(bounds.min.x <= bounds.max.x);
        assert!(bounds.min.y <= bounds.max.y);
        assert!(bounds.min.z <= bounds.max.z);
    }

    #[test]
    fn test_order_independence() {
        let a = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 0.0, 9.0),
            Vec3::new(4.0, -2.0, 1.0),
        ];
        let mut b = a;
        b.reverse();
        assert_eq!(
            BoundingBox::from_points(&a),
            BoundingBox::from_points(&b)
        );
    }

    #[test]
    fn test_corner_numbering() {
        let bounds = BoundingBox::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        let corners = bounds.corners();

        // Low-Z ring
        assert_eq!(corners[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(corners[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(corners[2], Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(corners[3], Vec3::new(0.0, 2.0, 0.0));
        // High-Z ring repeats the ordering
        assert_eq!(corners[4], Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(corners[7], Vec3::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_edge_and_face_tables() {
        assert_eq!(WIRE_EDGES.len(), 24); // 12 edges
        assert_eq!(SOLID_FACE_TRIANGLES.len(), 36); // 12 triangles

        // Every corner participates in exactly 3 edges.
        for corner in 0..8u32 {
            let degree = WIRE_EDGES.iter().filter(|&&i| i == corner).count();
            assert_eq!(degree, 3, "corner {corner}");
        }

        // All indices stay within the corner array.
        assert!(WIRE_EDGES.iter().all(|&i| i < 8));
        assert!(SOLID_FACE_TRIANGLES.iter().all(|&i| i < 8));
    }
}
