//! # u3d_scene
//!
//! Builds renderable scene trees from the parsed 3D model data embedded in a
//! document's 3D annotation.
//!
//! The input is a read-only [`model::ModelStore`]: a node graph plus geometry,
//! light, shader, material, and texture resources, all addressed by name and
//! produced by an external decoder. The output is a [`scene::Scene`]: an owned
//! tree of structural, transform, renderable, and light nodes with exactly
//! packed vertex/index buffers, ready for upload by a host renderer.
//!
//! Every build is a pure function of (store, root node name, visualization
//! mode, style). Switching modes means building again and discarding the
//! previous tree; nothing is patched in place.
//!
//! ## Example
//!
//! ```
//! use u3d_scene::builder::SceneBuilder;
//! use u3d_scene::config::{SceneStyle, VisualizationMode};
//! use u3d_scene::model::{ModelStore, Node, NodeKind};
//!
//! let mut store = ModelStore::new();
//! store.insert_node(Node::new("root", NodeKind::Group));
//!
//! let builder = SceneBuilder::new(VisualizationMode::Wireframe, SceneStyle::default());
//! let scene = builder.build(&store, "root").unwrap();
//! assert!(scene.root.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod builder;
pub mod config;
pub mod foundation;
pub mod model;
pub mod scene;

mod error;

pub use error::{GeometryKind, ResourceKind, SceneError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::builder::SceneBuilder;
    pub use crate::config::{SceneStyle, VisualizationMode};
    pub use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
    pub use crate::model::{Geometry, LightSource, ModelStore, Node, NodeKind, Shader};
    pub use crate::scene::{Scene, SceneNode, SceneNodeContent};
    pub use crate::SceneError;
}
