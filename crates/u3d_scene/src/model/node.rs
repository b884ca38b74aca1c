//! Scene graph nodes of the parsed model

use std::collections::HashMap;

use crate::foundation::math::Mat4;

/// Node categories in the model's hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Untyped node, acts purely as a grouping anchor
    Unknown,
    /// Grouping node, optionally carrying a child transform
    Group,
    /// Node referencing a geometry resource
    Model,
    /// Node referencing a light resource
    Light,
    /// Camera/view definition; never rendered
    View,
}

/// Transform a node applies to its children.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildTransform {
    /// One matrix applied to all children
    Constant(Mat4),
    /// One matrix per named child
    PerChild(HashMap<String, Mat4>),
}

/// A node in the model's hierarchical scene description.
///
/// Nodes reference their children and resources by name; the containing
/// [`ModelStore`](crate::model::ModelStore) resolves the names.
#[derive(Debug, Clone)]
pub struct Node {
    /// Identity name, unique within the store
    pub name: String,
    /// Node category
    pub kind: NodeKind,
    /// Ordered child node names
    pub children: Vec<String>,
    /// Optional transform applied to children
    pub child_transform: Option<ChildTransform>,
    /// Resource name, used by `Model` and `Light` nodes
    pub resource: Option<String>,
}

impl Node {
    /// Creates a resource-less node of the given kind.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
            child_transform: None,
            resource: None,
        }
    }

    /// Appends child node names.
    #[must_use]
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Sets a constant transform shared by all children.
    #[must_use]
    pub fn with_constant_transform(mut self, matrix: Mat4) -> Self {
        self.child_transform = Some(ChildTransform::Constant(matrix));
        self
    }

    /// Sets per-child transforms.
    #[must_use]
    pub fn with_per_child_transforms(mut self, transforms: HashMap<String, Mat4>) -> Self {
        self.child_transform = Some(ChildTransform::PerChild(transforms));
        self
    }

    /// Sets the referenced resource name.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// The constant child transform, if one is declared.
    pub fn constant_child_transform(&self) -> Option<&Mat4> {
        match &self.child_transform {
            Some(ChildTransform::Constant(matrix)) => Some(matrix),
            _ => None,
        }
    }

    /// The transform for one named child under a per-child declaration.
    ///
    /// A child missing from the per-child map gets the identity matrix.
    pub fn child_transform_for(&self, child_name: &str) -> Option<Mat4> {
        match &self.child_transform {
            Some(ChildTransform::PerChild(map)) => {
                Some(map.get(child_name).copied().unwrap_or_else(Mat4::identity))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_constant_transform_lookup() {
        let matrix = Mat4::new_translation(&Vec3::new(1.0, 2.0, 3.0));
        let node = Node::new("group", NodeKind::Group).with_constant_transform(matrix);

        assert_eq!(node.constant_child_transform(), Some(&matrix));
        assert_eq!(node.child_transform_for("anything"), None);
    }

    #[test]
    fn test_per_child_transform_lookup() {
        let matrix = Mat4::new_scaling(2.0);
        let mut map = HashMap::new();
        map.insert("left".to_string(), matrix);

        let node = Node::new("group", NodeKind::Group)
            .with_children(["left", "right"])
            .with_per_child_transforms(map);

        assert!(node.constant_child_transform().is_none());
        assert_eq!(node.child_transform_for("left"), Some(matrix));
        // Children without an entry fall back to identity.
        assert_eq!(node.child_transform_for("right"), Some(Mat4::identity()));
    }

    #[test]
    fn test_node_without_transform() {
        let node = Node::new("plain", NodeKind::Unknown);
        assert!(node.constant_child_transform().is_none());
        assert!(node.child_transform_for("x").is_none());
    }
}
