//! The renderable output model
//!
//! A build produces a [`Scene`]: an owned tree of [`SceneNode`]s plus the
//! accumulated ambient light color. Each parent exclusively owns its children;
//! the whole tree is handed to the caller by value and discarded wholesale when
//! the caller rebuilds under a different mode or style.

mod bounds;
mod material;
mod render_unit;

pub use bounds::{BoundingBox, SOLID_FACE_TRIANGLES, WIRE_EDGES};
pub use material::{AlphaTest, MaterialDescriptor, SurfaceMaterial};
pub use render_unit::{
    AttributeSemantic, GeometryData, PrimitiveTopology, RenderUnit, VertexAttribute,
};

use crate::foundation::math::{Mat4, Vec3};

/// What a scene node contributes to rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNodeContent {
    /// Pure grouping anchor
    Group,
    /// Transform applied to the node's subtree
    Transform(Mat4),
    /// Renderable geometry with material state
    Renderable(RenderUnit),
    /// A non-ambient light
    Light(LightEntity),
}

/// A light entity in the output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LightEntity {
    /// Parallel-ray light
    Directional {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
    },
    /// Positional light with falloff
    Point {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
        /// Constant, linear, quadratic falloff
        attenuation: [f32; 3],
    },
    /// Cone light with falloff
    Spot {
        /// Light color (RGB)
        color: Vec3,
        /// Intensity multiplier
        intensity: f32,
        /// Constant, linear, quadratic falloff
        attenuation: [f32; 3],
        /// Cone cutoff angle in degrees
        cut_off_angle: f32,
    },
}

/// A node of the built scene tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Source node name, for lookup and debugging; synthesized wrapper nodes
    /// carry no name
    pub name: Option<String>,
    /// Rendering contribution
    pub content: SceneNodeContent,
    /// Owned children
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates a childless, unnamed node.
    pub fn new(content: SceneNodeContent) -> Self {
        Self {
            name: None,
            content,
            children: Vec::new(),
        }
    }

    /// Creates an unnamed grouping node.
    pub fn group() -> Self {
        Self::new(SceneNodeContent::Group)
    }

    /// Creates an unnamed transform node.
    pub fn transform(matrix: Mat4) -> Self {
        Self::new(SceneNodeContent::Transform(matrix))
    }

    /// Tags the node with its source node name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends an owned child.
    pub fn push_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Depth-first iteration over the subtree, this node included.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of renderable units in the subtree.
    pub fn render_unit_count(&self) -> usize {
        self.descendants()
            .filter(|node| matches!(node.content, SceneNodeContent::Renderable(_)))
            .count()
    }

    /// Number of light entities in the subtree.
    pub fn light_count(&self) -> usize {
        self.descendants()
            .filter(|node| matches!(node.content, SceneNodeContent::Light(_)))
            .count()
    }

    /// Finds the first descendant tagged with the given source name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.descendants()
            .find(|node| node.name.as_deref() == Some(name))
    }
}

/// Depth-first scene node iterator.
pub struct Descendants<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A complete build result.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Root of the output tree; `None` when the root node resolved to nothing
    pub root: Option<SceneNode>,
    /// Sum of all ambient light contributions encountered during the build
    pub ambient_light: Vec3,
}

impl Scene {
    /// An empty scene.
    pub fn empty() -> Self {
        Self {
            root: None,
            ambient_light: Vec3::zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_order_and_counts() {
        let mut root = SceneNode::group().named("root");
        let mut left = SceneNode::transform(Mat4::identity()).named("left");
        left.push_child(SceneNode::new(SceneNodeContent::Light(
            LightEntity::Directional {
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 1.0,
            },
        )));
        root.push_child(left);
        root.push_child(SceneNode::group().named("right"));

        let names: Vec<_> = root
            .descendants()
            .map(|n| n.name.as_deref().unwrap_or("-"))
            .collect();
        assert_eq!(names, ["root", "left", "-", "right"]);

        assert_eq!(root.light_count(), 1);
        assert_eq!(root.render_unit_count(), 0);
        assert!(root.find("right").is_some());
        assert!(root.find("missing").is_none());
    }
}
