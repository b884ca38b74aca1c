//! The parsed model-data source
//!
//! A [`ModelStore`] holds every resource decoded from a document's 3D
//! annotation: the node graph plus geometry, light, shader, material, and
//! texture resources, all addressed by name. The store is written once by the
//! decoder and is read-only for the lifetime of every scene build; resources
//! may be referenced by any number of nodes and are never copied or mutated by
//! the builder.

mod geometry;
mod light;
mod node;
mod shader;
mod texture;

pub use geometry::{
    Geometry, Line, LineSetGeometry, MeshGeometry, Point, PointSetGeometry, Triangle,
    TriangleVertex,
};
pub use light::LightSource;
pub use node::{ChildTransform, Node, NodeKind};
pub use shader::{AlphaFunction, MaterialResource, Shader, TextureBinding};
pub use texture::ImageData;

use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed storage for every resource of one parsed 3D annotation.
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    nodes: HashMap<String, Node>,
    geometries: HashMap<String, Geometry>,
    lights: HashMap<String, LightSource>,
    shaders: HashMap<String, Shader>,
    materials: HashMap<String, MaterialResource>,
    textures: HashMap<String, Arc<ImageData>>,
}

impl ModelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under its own name.
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.name.clone(), node);
    }

    /// Inserts a geometry resource.
    pub fn insert_geometry(&mut self, name: impl Into<String>, geometry: Geometry) {
        self.geometries.insert(name.into(), geometry);
    }

    /// Inserts a light resource.
    pub fn insert_light(&mut self, name: impl Into<String>, light: LightSource) {
        self.lights.insert(name.into(), light);
    }

    /// Inserts a shader resource.
    pub fn insert_shader(&mut self, name: impl Into<String>, shader: Shader) {
        self.shaders.insert(name.into(), shader);
    }

    /// Inserts a material resource.
    pub fn insert_material(&mut self, name: impl Into<String>, material: MaterialResource) {
        self.materials.insert(name.into(), material);
    }

    /// Inserts a decoded texture.
    pub fn insert_texture(&mut self, name: impl Into<String>, image: ImageData) {
        self.textures.insert(name.into(), Arc::new(image));
    }

    /// Node by name.
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Geometry resource by name.
    pub fn get_geometry(&self, name: &str) -> Option<&Geometry> {
        self.geometries.get(name)
    }

    /// Light resource by name.
    pub fn get_light(&self, name: &str) -> Option<&LightSource> {
        self.lights.get(name)
    }

    /// Shader resource by name.
    pub fn get_shader(&self, name: &str) -> Option<&Shader> {
        self.shaders.get(name)
    }

    /// Material resource by name.
    pub fn get_material(&self, name: &str) -> Option<&MaterialResource> {
        self.materials.get(name)
    }

    /// Decoded texture by name.
    ///
    /// The image is shared; every material binding the same name receives a
    /// clone of one `Arc`.
    pub fn get_texture(&self, name: &str) -> Option<Arc<ImageData>> {
        self.textures.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec4;

    #[test]
    fn test_store_lookup() {
        let mut store = ModelStore::new();
        store.insert_node(Node::new("root", NodeKind::Group));
        store.insert_material(
            "gold",
            MaterialResource {
                ambient: Vec4::zeros(),
                diffuse: Vec4::new(1.0, 0.8, 0.2, 1.0),
                specular: Vec4::zeros(),
            },
        );

        assert!(store.get_node("root").is_some());
        assert!(store.get_node("missing").is_none());
        assert!(store.get_material("gold").is_some());
        assert!(store.get_geometry("gold").is_none());
    }

    #[test]
    fn test_textures_are_shared() {
        let mut store = ModelStore::new();
        store.insert_texture("decal", ImageData::solid_color(2, 2, [0, 0, 0, 255]));

        let a = store.get_texture("decal").unwrap();
        let b = store.get_texture("decal").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
