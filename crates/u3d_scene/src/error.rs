//! Scene building errors

use thiserror::Error;

use crate::config::VisualizationMode;

/// Resource categories addressable by name in a model store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Scene graph node
    Node,
    /// Mesh, point-set, or line-set geometry
    Geometry,
    /// Light resource
    Light,
    /// Shader resource
    Shader,
    /// Material resource
    Material,
    /// Decoded texture image
    Texture,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Node => "node",
            Self::Geometry => "geometry",
            Self::Light => "light",
            Self::Shader => "shader",
            Self::Material => "material",
            Self::Texture => "texture",
        };
        f.write_str(name)
    }
}

/// Geometry kinds, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// Triangle mesh
    Mesh,
    /// Point set
    PointSet,
    /// Line set
    LineSet,
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Mesh => "mesh",
            Self::PointSet => "point set",
            Self::LineSet => "line set",
        };
        f.write_str(name)
    }
}

/// Scene building errors
///
/// Two classes: `MissingResource` is an external-data failure, degraded by the
/// builder to "the affected renderable unit is absent" with a logged
/// diagnostic. `UnsupportedMode` is a contract breach and aborts the build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A named resource was not present in the model store
    #[error("{kind} resource not found: {name:?}")]
    MissingResource {
        /// Category of the missing resource
        kind: ResourceKind,
        /// The unresolved name
        name: String,
    },

    /// The visualization mode has no defined encoding for this geometry kind
    #[error("visualization mode {mode:?} is not supported for {kind} geometry")]
    UnsupportedMode {
        /// The geometry kind being encoded
        kind: GeometryKind,
        /// The active visualization mode
        mode: VisualizationMode,
    },
}

impl SceneError {
    /// Shorthand for a [`SceneError::MissingResource`].
    pub fn missing(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self::MissingResource {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::missing(ResourceKind::Shader, "chrome");
        assert_eq!(err.to_string(), "shader resource not found: \"chrome\"");

        let err = SceneError::UnsupportedMode {
            kind: GeometryKind::Mesh,
            mode: VisualizationMode::Illustration,
        };
        assert!(err.to_string().contains("mesh"));
        assert!(err.to_string().contains("Illustration"));
    }
}
