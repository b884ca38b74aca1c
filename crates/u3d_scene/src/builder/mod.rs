//! Scene building
//!
//! [`SceneBuilder`] walks the model's node graph depth-first and assembles the
//! output tree: structural and transform nodes from groups, renderable units
//! from model nodes, light entities from light nodes. All per-build state
//! (ambient accumulator, cycle-guard memo, texture memo) lives in an explicit
//! [`BuildContext`] created fresh for every build, so concurrent builds over
//! one shared store are independent.

mod buffer;
mod geometry_encoder;
mod light_aggregator;
mod material_resolver;

pub use geometry_encoder::encode as encode_geometry;
pub use light_aggregator::aggregate as aggregate_light;
pub use material_resolver::{resolve as resolve_material, TextureMemo};

use std::collections::HashSet;

use crate::config::{SceneStyle, VisualizationMode};
use crate::error::SceneError;
use crate::foundation::math::Vec3;
use crate::model::{ModelStore, Node, NodeKind};
use crate::scene::{Scene, SceneNode, SceneNodeContent};

/// Transient state of one build.
#[derive(Debug)]
pub struct BuildContext {
    /// Running sum of ambient light contributions
    ambient: Vec3,
    /// Names already visited; guards against cycles in the node graph
    visited: HashSet<String>,
    /// Per-build texture resolution memo
    textures: TextureMemo,
}

impl BuildContext {
    fn new() -> Self {
        Self {
            ambient: Vec3::zeros(),
            visited: HashSet::new(),
            textures: TextureMemo::new(),
        }
    }
}

/// Builds renderable scene trees from a model store.
///
/// A builder is a plain value holding the visualization mode and style; one
/// builder may run any number of builds, each producing a brand-new tree that
/// the caller owns exclusively.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    mode: VisualizationMode,
    style: SceneStyle,
}

impl SceneBuilder {
    /// Creates a builder for the given mode and style.
    pub fn new(mode: VisualizationMode, style: SceneStyle) -> Self {
        Self { mode, style }
    }

    /// The active visualization mode.
    pub fn mode(&self) -> VisualizationMode {
        self.mode
    }

    /// The active style parameters.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Builds the scene rooted at `root_node_name`.
    ///
    /// A missing root, or a root resolving to no visual representation, yields
    /// `Scene { root: None, .. }`, absence rather than an error. The only fatal
    /// failure is an unsupported (geometry kind, mode) combination.
    pub fn build(&self, store: &ModelStore, root_node_name: &str) -> Result<Scene, SceneError> {
        let mut ctx = BuildContext::new();

        let mut roots = self.visit(store, root_node_name, &mut ctx)?;
        let root = match roots.len() {
            0 => None,
            1 => roots.pop(),
            // A dropped root with several surviving children needs one carrier.
            _ => {
                let mut group = SceneNode::group();
                group.children = roots;
                Some(group)
            }
        };

        Ok(Scene {
            root,
            ambient_light: ctx.ambient,
        })
    }

    /// Visits one node; returns the nodes it contributes to its parent.
    ///
    /// Usually zero or one node; a dropped model node contributes its
    /// surviving children directly.
    fn visit(
        &self,
        store: &ModelStore,
        name: &str,
        ctx: &mut BuildContext,
    ) -> Result<Vec<SceneNode>, SceneError> {
        if !ctx.visited.insert(name.to_string()) {
            log::warn!("node {name:?} already processed, skipping (cycle in node graph?)");
            return Ok(Vec::new());
        }

        let Some(node) = store.get_node(name) else {
            log::warn!("node {name:?} not found in model store, skipping");
            return Ok(Vec::new());
        };

        match node.kind {
            // A view defines a camera, never scene content.
            NodeKind::View => Ok(Vec::new()),

            NodeKind::Unknown => {
                let mut built = SceneNode::group().named(&node.name);
                self.attach_children(store, node, &mut built, ctx)?;
                Ok(vec![built])
            }

            NodeKind::Group => {
                let mut built = match node.constant_child_transform() {
                    Some(matrix) => SceneNode::transform(*matrix),
                    None => SceneNode::group(),
                }
                .named(&node.name);
                self.attach_children(store, node, &mut built, ctx)?;
                Ok(vec![built])
            }

            NodeKind::Model => {
                let encoded = self.encode_model(store, node, ctx)?;
                match encoded {
                    Some(built) => {
                        let mut built = built.named(&node.name);
                        self.attach_children(store, node, &mut built, ctx)?;
                        Ok(vec![built])
                    }
                    None => {
                        // The node itself is dropped, but its children remain
                        // in the output, keeping their declared transforms.
                        let children = self.build_children(store, node, ctx)?;
                        if children.is_empty() {
                            return Ok(Vec::new());
                        }
                        if let Some(matrix) = node.constant_child_transform() {
                            let mut carrier = SceneNode::transform(*matrix);
                            carrier.children = children;
                            return Ok(vec![carrier]);
                        }
                        Ok(children)
                    }
                }
            }

            NodeKind::Light => {
                let Some(resource_name) = node.resource.as_deref() else {
                    return Ok(Vec::new());
                };
                let Some(light) = store.get_light(resource_name) else {
                    log::warn!("light resource {resource_name:?} not found, skipping");
                    return Ok(Vec::new());
                };
                match light_aggregator::aggregate(light, &mut ctx.ambient) {
                    Some(entity) => {
                        let mut built =
                            SceneNode::new(SceneNodeContent::Light(entity)).named(&node.name);
                        self.attach_children(store, node, &mut built, ctx)?;
                        Ok(vec![built])
                    }
                    // Ambient lights contribute to the accumulator only.
                    None => Ok(Vec::new()),
                }
            }
        }
    }

    fn encode_model(
        &self,
        store: &ModelStore,
        node: &Node,
        ctx: &mut BuildContext,
    ) -> Result<Option<SceneNode>, SceneError> {
        let Some(resource_name) = node.resource.as_deref() else {
            return Ok(None);
        };
        let Some(geometry) = store.get_geometry(resource_name) else {
            log::warn!("geometry resource {resource_name:?} not found, skipping");
            return Ok(None);
        };
        geometry_encoder::encode(geometry, self.mode, &self.style, store, &mut ctx.textures)
    }

    fn attach_children(
        &self,
        store: &ModelStore,
        node: &Node,
        parent: &mut SceneNode,
        ctx: &mut BuildContext,
    ) -> Result<(), SceneError> {
        let children = self.build_children(store, node, ctx)?;
        parent.children.extend(children);
        Ok(())
    }

    /// Builds a node's children, applying per-child transforms.
    ///
    /// A per-child matrix wraps the child in one anonymous transform node; the
    /// constant-transform case is already captured on the parent itself.
    /// Children building to nothing are omitted without interrupting siblings.
    fn build_children(
        &self,
        store: &ModelStore,
        node: &Node,
        ctx: &mut BuildContext,
    ) -> Result<Vec<SceneNode>, SceneError> {
        let mut out = Vec::new();
        for child_name in &node.children {
            for built in self.visit(store, child_name, ctx)? {
                match node.child_transform_for(child_name) {
                    Some(matrix) => {
                        let mut wrapper = SceneNode::transform(matrix);
                        wrapper.push_child(built);
                        out.push(wrapper);
                    }
                    None => out.push(built),
                }
            }
        }
        Ok(out)
    }
}
