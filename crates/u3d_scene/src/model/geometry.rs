//! Geometry resources: meshes, point sets, and line sets
//!
//! Geometry stores attribute arrays (positions, normals, diffuse colors,
//! texture coordinates) and primitives referencing them by index. The decoder
//! guarantees that primitive indices stay within the bounds of the arrays a
//! primitive actually uses; the optional arrays may be entirely absent, in
//! which case the indexed accessors return zero vectors.

use std::collections::HashMap;

use crate::foundation::math::{Vec2, Vec3, Vec4};

/// A geometry resource, classified by primitive structure.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Triangle mesh
    Mesh(MeshGeometry),
    /// Point set
    PointSet(PointSetGeometry),
    /// Line set
    LineSet(LineSetGeometry),
}

impl Geometry {
    /// True when the geometry has no primitives to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Mesh(mesh) => mesh.is_empty(),
            Self::PointSet(points) => points.is_empty(),
            Self::LineSet(lines) => lines.is_empty(),
        }
    }
}

/// One corner of a triangle, indexing into the mesh attribute arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleVertex {
    /// Index into the position array
    pub position: u32,
    /// Index into the normal array
    pub normal: u32,
    /// Index into the diffuse-color array
    pub diffuse_color: u32,
    /// Index into the texture-coordinate array
    pub texture_coord: u32,
}

/// A mesh triangle with its attribute flags and shader reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// The three corners
    pub vertices: [TriangleVertex; 3],
    /// Triangle uses texture coordinates
    pub has_texture: bool,
    /// Triangle uses per-vertex diffuse colors
    pub has_diffuse: bool,
    /// Triangle uses specular shading
    pub has_specular: bool,
    /// Shading group referencing a shader
    pub shading_id: u32,
}

/// Triangle mesh geometry.
#[derive(Debug, Clone, Default)]
pub struct MeshGeometry {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Vertex normals (optional array)
    pub normals: Vec<Vec3>,
    /// Per-vertex diffuse colors (optional array)
    pub diffuse_colors: Vec<Vec4>,
    /// Texture coordinates (optional array)
    pub texture_coords: Vec<Vec2>,
    /// Triangles
    pub triangles: Vec<Triangle>,
    /// Shading id → shader name
    pub shaders: HashMap<u32, String>,
}

impl MeshGeometry {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.triangles.is_empty()
    }

    /// Position by index.
    pub fn position(&self, index: u32) -> Vec3 {
        self.positions
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec3::zeros)
    }

    /// Normal by index; zero vector when the array is absent.
    pub fn normal(&self, index: u32) -> Vec3 {
        self.normals
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec3::zeros)
    }

    /// Diffuse color by index; zero vector when the array is absent.
    pub fn diffuse_color(&self, index: u32) -> Vec4 {
        self.diffuse_colors
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec4::zeros)
    }

    /// Texture coordinate by index; zero vector when the array is absent.
    pub fn texture_coord(&self, index: u32) -> Vec2 {
        self.texture_coords
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec2::zeros)
    }

    /// Shader name for a shading id.
    pub fn shader_name(&self, shading_id: u32) -> Option<&str> {
        self.shaders.get(&shading_id).map(String::as_str)
    }
}

/// One point of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Index into the position array
    pub position: u32,
    /// Index into the diffuse-color array
    pub diffuse_color: u32,
}

/// Point-set geometry.
#[derive(Debug, Clone, Default)]
pub struct PointSetGeometry {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Diffuse colors referenced by points
    pub diffuse_colors: Vec<Vec4>,
    /// Points
    pub points: Vec<Point>,
}

impl PointSetGeometry {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Diffuse color by index; zero vector when absent.
    pub fn diffuse_color(&self, index: u32) -> Vec4 {
        self.diffuse_colors
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec4::zeros)
    }

    /// Points referencing the given position index, in declaration order.
    pub fn points_at_vertex(&self, vertex_index: u32) -> impl Iterator<Item = &Point> {
        self.points
            .iter()
            .filter(move |point| point.position == vertex_index)
    }
}

/// One segment of a line set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// First endpoint's position index
    pub position1: u32,
    /// Second endpoint's position index
    pub position2: u32,
    /// First endpoint's diffuse-color index
    pub diffuse_color1: u32,
    /// Second endpoint's diffuse-color index
    pub diffuse_color2: u32,
    /// Shading group referencing a shader
    pub shading_id: u32,
}

/// Line-set geometry.
#[derive(Debug, Clone, Default)]
pub struct LineSetGeometry {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Diffuse colors referenced by line endpoints
    pub diffuse_colors: Vec<Vec4>,
    /// Line segments
    pub lines: Vec<Line>,
    /// Shading id → shader name
    pub shaders: HashMap<u32, String>,
}

impl LineSetGeometry {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.lines.is_empty()
    }

    /// Position by index.
    pub fn position(&self, index: u32) -> Vec3 {
        self.positions
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec3::zeros)
    }

    /// Diffuse color by index; zero vector when absent.
    pub fn diffuse_color(&self, index: u32) -> Vec4 {
        self.diffuse_colors
            .get(index as usize)
            .copied()
            .unwrap_or_else(Vec4::zeros)
    }

    /// Lines touching the given position index, in declaration order.
    pub fn lines_at_vertex(&self, vertex_index: u32) -> impl Iterator<Item = &Line> {
        self.lines
            .iter()
            .filter(move |line| line.position1 == vertex_index || line.position2 == vertex_index)
    }

    /// Shader name for a shading id.
    pub fn shader_name(&self, shading_id: u32) -> Option<&str> {
        self.shaders.get(&shading_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(p1: u32, p2: u32, c1: u32, c2: u32, shading_id: u32) -> Line {
        Line {
            position1: p1,
            position2: p2,
            diffuse_color1: c1,
            diffuse_color2: c2,
            shading_id,
        }
    }

    #[test]
    fn test_mesh_empty() {
        let mesh = MeshGeometry::default();
        assert!(mesh.is_empty());

        let mesh = MeshGeometry {
            positions: vec![Vec3::zeros()],
            ..Default::default()
        };
        // Positions without triangles still render nothing.
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_mesh_optional_arrays_zero_fill() {
        let mesh = MeshGeometry {
            positions: vec![Vec3::new(1.0, 2.0, 3.0)],
            triangles: Vec::new(),
            ..Default::default()
        };
        assert_eq!(mesh.position(0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal(0), Vec3::zeros());
        assert_eq!(mesh.diffuse_color(5), Vec4::zeros());
        assert_eq!(mesh.texture_coord(0), Vec2::zeros());
    }

    #[test]
    fn test_points_at_vertex() {
        let set = PointSetGeometry {
            positions: vec![Vec3::zeros(); 3],
            diffuse_colors: vec![Vec4::zeros(); 2],
            points: vec![
                Point {
                    position: 1,
                    diffuse_color: 0,
                },
                Point {
                    position: 2,
                    diffuse_color: 1,
                },
                Point {
                    position: 1,
                    diffuse_color: 1,
                },
            ],
        };

        let touching: Vec<_> = set.points_at_vertex(1).collect();
        assert_eq!(touching.len(), 2);
        assert_eq!(touching[0].diffuse_color, 0);

        assert_eq!(set.points_at_vertex(0).count(), 0);
    }

    #[test]
    fn test_lines_at_vertex() {
        let set = LineSetGeometry {
            positions: vec![Vec3::zeros(); 3],
            diffuse_colors: vec![Vec4::zeros(); 3],
            lines: vec![line(0, 1, 0, 1, 0), line(1, 2, 1, 2, 0), line(2, 0, 2, 0, 1)],
            shaders: HashMap::new(),
        };

        assert_eq!(set.lines_at_vertex(1).count(), 2);
        assert_eq!(set.lines_at_vertex(0).count(), 2);
        let first = set.lines_at_vertex(1).next().unwrap();
        assert_eq!(first.position1, 0);
    }

    #[test]
    fn test_shader_lookup() {
        let mut shaders = HashMap::new();
        shaders.insert(3, "paint".to_string());
        let set = LineSetGeometry {
            shaders,
            ..Default::default()
        };
        assert_eq!(set.shader_name(3), Some("paint"));
        assert_eq!(set.shader_name(4), None);
    }
}
