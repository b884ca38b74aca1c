//! Shader → material resolution
//!
//! Maps a shader resource to a material descriptor: per-vertex color, flat
//! ambient/diffuse/specular from the referenced material, or a textured
//! surface from the shader's *first* texture binding; later bindings are
//! intentionally ignored. Alpha-test state transfers one-to-one.
//!
//! Every name lookup is explicit: a missing shader, material, or texture is a
//! [`SceneError::MissingResource`], which the encoder degrades to "this
//! renderable unit is absent" rather than failing the whole build.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ResourceKind, SceneError};
use crate::model::{ImageData, ModelStore};
use crate::scene::MaterialDescriptor;

/// Per-build memo of resolved textures.
///
/// Guarantees at most one store lookup per distinct texture name per build and
/// makes every unit binding the same name share one decoded image.
#[derive(Debug, Default)]
pub struct TextureMemo {
    images: HashMap<String, Arc<ImageData>>,
}

impl TextureMemo {
    /// Creates an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a texture through the memo.
    pub fn fetch(
        &mut self,
        store: &ModelStore,
        name: &str,
    ) -> Result<Arc<ImageData>, SceneError> {
        if let Some(image) = self.images.get(name) {
            return Ok(Arc::clone(image));
        }

        let image = store
            .get_texture(name)
            .ok_or_else(|| SceneError::missing(ResourceKind::Texture, name))?;
        self.images.insert(name.to_string(), Arc::clone(&image));
        Ok(image)
    }
}

/// Resolves a shader name to a material descriptor.
///
/// `force_vertex_color` requests per-vertex color even when the shader does
/// not, used by encodings that bake colors into the vertex stream.
pub fn resolve(
    shader_name: &str,
    store: &ModelStore,
    force_vertex_color: bool,
    textures: &mut TextureMemo,
) -> Result<MaterialDescriptor, SceneError> {
    let shader = store
        .get_shader(shader_name)
        .ok_or_else(|| SceneError::missing(ResourceKind::Shader, shader_name))?;

    let mut material = if shader.texture_bindings.is_empty() {
        if shader.use_vertex_color || force_vertex_color {
            MaterialDescriptor::vertex_color()
        } else {
            let resource = store.get_material(&shader.material_name).ok_or_else(|| {
                SceneError::missing(ResourceKind::Material, &shader.material_name)
            })?;
            MaterialDescriptor::flat(
                resource.ambient,
                resource.diffuse,
                resource.specular,
                shader.alpha_test_enabled,
            )
        }
    } else {
        // Only the first binding is ever consulted.
        let binding = &shader.texture_bindings[0];
        let image = textures.fetch(store, &binding.texture_name)?;
        MaterialDescriptor::textured(image, shader.alpha_test_enabled)
    };

    if shader.alpha_test_enabled {
        material =
            material.with_alpha_test(shader.alpha_test_function, shader.alpha_test_reference);
    }

    Ok(material)
}
