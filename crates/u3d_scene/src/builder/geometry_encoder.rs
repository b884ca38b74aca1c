//! Per-mode geometry encoding
//!
//! Turns one geometry resource into zero or one renderable node (bounding-box
//! outline and partitioned line sets yield a small composite group) according
//! to the active visualization mode. The dispatch over (geometry kind, mode)
//! is exhaustive; mode/kind combinations without a defined encoding are a
//! caller contract breach and abort the build.

use std::collections::BTreeMap;

use crate::builder::buffer::{pack_floats, position_point_list, push_vec3_attribute, FLOAT_SIZE};
use crate::builder::material_resolver::{self, TextureMemo};
use crate::config::{SceneStyle, VisualizationMode};
use crate::error::{GeometryKind, SceneError};
use crate::foundation::math::{color, Vec3};
use crate::model::{Geometry, LineSetGeometry, MeshGeometry, ModelStore, PointSetGeometry};
use crate::scene::{
    AttributeSemantic, BoundingBox, GeometryData, MaterialDescriptor, PrimitiveTopology,
    RenderUnit, SceneNode, SceneNodeContent, VertexAttribute, SOLID_FACE_TRIANGLES, WIRE_EDGES,
};

/// Encodes one geometry resource under the active mode.
///
/// Returns `Ok(None)` for empty geometry and for units degraded by missing
/// shader/material/texture resources (logged); returns an error only for
/// unsupported (kind, mode) combinations.
pub fn encode(
    geometry: &Geometry,
    mode: VisualizationMode,
    style: &SceneStyle,
    store: &ModelStore,
    textures: &mut TextureMemo,
) -> Result<Option<SceneNode>, SceneError> {
    if geometry.is_empty() {
        return Ok(None);
    }

    match geometry {
        Geometry::Mesh(mesh) => encode_mesh(mesh, mode, style, store, textures),
        Geometry::PointSet(points) => Ok(encode_point_set(points, mode, style)),
        Geometry::LineSet(lines) => Ok(encode_line_set(lines, mode, style, store, textures)),
    }
}

fn encode_mesh(
    mesh: &MeshGeometry,
    mode: VisualizationMode,
    style: &SceneStyle,
    store: &ModelStore,
    textures: &mut TextureMemo,
) -> Result<Option<SceneNode>, SceneError> {
    use VisualizationMode as Mode;

    match mode {
        Mode::BoundingBox | Mode::TransparentBoundingBox | Mode::TransparentBoundingBoxOutline => {
            Ok(encode_bounding_box(&mesh.positions, mode, style))
        }

        Mode::Wireframe => {
            // Each triangle contributes its three edges to one line list over
            // the raw position array.
            let mut geometry = GeometryData::new(PrimitiveTopology::Lines);
            push_vec3_attribute(&mut geometry, AttributeSemantic::Position, &mesh.positions);

            let mut indices = Vec::with_capacity(mesh.triangles.len() * 6);
            for triangle in &mesh.triangles {
                let [a, b, c] = triangle.vertices;
                indices.extend_from_slice(&[
                    a.position, b.position, //
                    b.position, c.position, //
                    c.position, a.position,
                ]);
            }
            geometry.indices = Some(indices);

            Ok(Some(renderable(
                geometry,
                MaterialDescriptor::auxiliary(style.auxiliary_color),
            )))
        }

        Mode::Vertices => Ok(Some(vertex_unit(&mesh.positions, style))),

        Mode::Solid => Ok(encode_mesh_solid(mesh, store, textures)),

        Mode::Illustration
        | Mode::ShadedIllustration
        | Mode::ShadedWireframe
        | Mode::HiddenWireframe
        | Mode::SolidOutline
        | Mode::Transparent
        | Mode::TransparentWireframe
        | Mode::SolidWireframe
        | Mode::ShadedVertices => Err(SceneError::UnsupportedMode {
            kind: GeometryKind::Mesh,
            mode,
        }),
    }
}

/// Solid mesh encoding: one triangle list with an interleaved
/// position(3) + normal(3) + color(4) + texcoord(2) vertex buffer.
///
/// Vertices are duplicated per triangle: 3 unique vertices per triangle even
/// when topologically shared.
fn encode_mesh_solid(
    mesh: &MeshGeometry,
    store: &ModelStore,
    textures: &mut TextureMemo,
) -> Option<SceneNode> {
    const POSITION_COMPONENTS: u32 = 3;
    const NORMAL_COMPONENTS: u32 = 3;
    const COLOR_COMPONENTS: u32 = 4;
    const TEXCOORD_COMPONENTS: u32 = 2;
    const STRIDE: u32 =
        (POSITION_COMPONENTS + NORMAL_COMPONENTS + COLOR_COMPONENTS + TEXCOORD_COMPONENTS)
            * FLOAT_SIZE;

    // The material comes from the first shader reference on the geometry.
    let shading_id = mesh.triangles[0].shading_id;
    let material = mesh
        .shader_name(shading_id)
        .ok_or_else(|| {
            SceneError::missing(
                crate::error::ResourceKind::Shader,
                format!("<shading id {shading_id}>"),
            )
        })
        .and_then(|name| material_resolver::resolve(name, store, false, textures));

    let material = match material {
        Ok(material) => material,
        Err(err) => {
            log::warn!("dropping solid mesh unit: {err}");
            return None;
        }
    };

    let vertex_count = (mesh.triangles.len() * 3) as u32;
    let mut floats = Vec::with_capacity(vertex_count as usize * (STRIDE / FLOAT_SIZE) as usize);

    for triangle in &mesh.triangles {
        for vertex in &triangle.vertices {
            let position = mesh.position(vertex.position);
            let normal = mesh.normal(vertex.normal);
            let diffuse = mesh.diffuse_color(vertex.diffuse_color);
            let texture_coord = mesh.texture_coord(vertex.texture_coord);

            floats.extend_from_slice(position.as_slice());
            floats.extend_from_slice(normal.as_slice());
            floats.extend_from_slice(diffuse.as_slice());
            floats.extend_from_slice(texture_coord.as_slice());
        }
    }

    let mut geometry = GeometryData::new(PrimitiveTopology::Triangles);
    let buffer = geometry.push_buffer(pack_floats(&floats));

    let mut byte_offset = 0;
    for (semantic, components) in [
        (AttributeSemantic::Position, POSITION_COMPONENTS),
        (AttributeSemantic::Normal, NORMAL_COMPONENTS),
        (AttributeSemantic::Color, COLOR_COMPONENTS),
        (AttributeSemantic::TexCoord, TEXCOORD_COMPONENTS),
    ] {
        geometry.push_attribute(VertexAttribute {
            semantic,
            buffer,
            components,
            byte_offset,
            byte_stride: STRIDE,
            count: vertex_count,
        });
        byte_offset += components * FLOAT_SIZE;
    }

    Some(renderable(geometry, material))
}

fn encode_point_set(
    points: &PointSetGeometry,
    mode: VisualizationMode,
    style: &SceneStyle,
) -> Option<SceneNode> {
    use VisualizationMode as Mode;

    match mode {
        Mode::BoundingBox | Mode::TransparentBoundingBox | Mode::TransparentBoundingBoxOutline => {
            encode_bounding_box(&points.positions, mode, style)
        }

        Mode::Illustration | Mode::ShadedIllustration | Mode::Wireframe | Mode::Vertices => {
            Some(vertex_unit(&points.positions, style))
        }

        Mode::ShadedWireframe
        | Mode::HiddenWireframe
        | Mode::SolidOutline
        | Mode::Transparent
        | Mode::TransparentWireframe
        | Mode::Solid
        | Mode::SolidWireframe
        | Mode::ShadedVertices => {
            // Per-vertex colors from the first point touching each vertex.
            let colors: Vec<Vec3> = (0..points.positions.len() as u32)
                .map(|vertex| {
                    points.points_at_vertex(vertex).next().map_or(color::BLACK, |point| {
                        color::to_rgb(points.diffuse_color(point.diffuse_color))
                    })
                })
                .collect();

            let mut geometry = position_point_list(&points.positions);
            push_vec3_attribute(&mut geometry, AttributeSemantic::Color, &colors);

            Some(renderable(
                geometry,
                MaterialDescriptor::vertex_color().with_point_size(style.point_size),
            ))
        }
    }
}

fn encode_line_set(
    lines: &LineSetGeometry,
    mode: VisualizationMode,
    style: &SceneStyle,
    store: &ModelStore,
    textures: &mut TextureMemo,
) -> Option<SceneNode> {
    use VisualizationMode as Mode;

    match mode {
        Mode::BoundingBox | Mode::TransparentBoundingBox | Mode::TransparentBoundingBoxOutline => {
            encode_bounding_box(&lines.positions, mode, style)
        }

        Mode::Illustration | Mode::ShadedIllustration | Mode::Wireframe => {
            // One indexed line list over the raw positions, auxiliary tint.
            let mut geometry = GeometryData::new(PrimitiveTopology::Lines);
            push_vec3_attribute(&mut geometry, AttributeSemantic::Position, &lines.positions);
            geometry.indices = Some(
                lines
                    .lines
                    .iter()
                    .flat_map(|line| [line.position1, line.position2])
                    .collect(),
            );

            Some(renderable(
                geometry,
                MaterialDescriptor::auxiliary(style.auxiliary_color),
            ))
        }

        Mode::ShadedWireframe
        | Mode::HiddenWireframe
        | Mode::SolidOutline
        | Mode::Transparent
        | Mode::TransparentWireframe
        | Mode::Solid
        | Mode::SolidWireframe => Some(encode_line_set_shaded(lines, store, textures)?),

        Mode::Vertices => Some(vertex_unit(&lines.positions, style)),

        Mode::ShadedVertices => {
            // Per-vertex colors from the first line touching each vertex,
            // picking the endpoint matching the vertex index. On a degenerate
            // line referencing the vertex at both ends, position2 wins.
            let colors: Vec<Vec3> = (0..lines.positions.len() as u32)
                .map(|vertex| {
                    lines.lines_at_vertex(vertex).next().map_or(color::BLACK, |line| {
                        let mut picked = color::BLACK;
                        if line.position1 == vertex {
                            picked = color::to_rgb(lines.diffuse_color(line.diffuse_color1));
                        }
                        if line.position2 == vertex {
                            picked = color::to_rgb(lines.diffuse_color(line.diffuse_color2));
                        }
                        picked
                    })
                })
                .collect();

            let mut geometry = position_point_list(&lines.positions);
            push_vec3_attribute(&mut geometry, AttributeSemantic::Color, &colors);

            Some(renderable(
                geometry,
                MaterialDescriptor::vertex_color().with_point_size(style.point_size),
            ))
        }
    }
}

/// Shaded line-set encoding: one unit per shading id.
///
/// Lines are partitioned by shading id (ascending, so composite child order is
/// deterministic); each partition becomes a non-indexed line list carrying
/// interleaved endpoint positions and RGB colors, with its material resolved
/// from the partition's shader. Partitions whose shader chain cannot be
/// resolved are dropped with a diagnostic; the rest of the build continues.
fn encode_line_set_shaded(
    lines: &LineSetGeometry,
    store: &ModelStore,
    textures: &mut TextureMemo,
) -> Option<SceneNode> {
    let mut partitions: BTreeMap<u32, Vec<&crate::model::Line>> = BTreeMap::new();
    for line in &lines.lines {
        partitions.entry(line.shading_id).or_default().push(line);
    }

    let mut units = Vec::new();
    for (shading_id, partition) in partitions {
        let material = lines
            .shader_name(shading_id)
            .ok_or_else(|| {
                SceneError::missing(
                    crate::error::ResourceKind::Shader,
                    format!("<shading id {shading_id}>"),
                )
            })
            .and_then(|name| material_resolver::resolve(name, store, true, textures));

        let material = match material {
            Ok(material) => material,
            Err(err) => {
                log::warn!("dropping line partition {shading_id}: {err}");
                continue;
            }
        };

        let mut positions = Vec::with_capacity(partition.len() * 2);
        let mut colors = Vec::with_capacity(partition.len() * 2);
        for line in partition {
            positions.push(lines.position(line.position1));
            positions.push(lines.position(line.position2));
            colors.push(color::to_rgb(lines.diffuse_color(line.diffuse_color1)));
            colors.push(color::to_rgb(lines.diffuse_color(line.diffuse_color2)));
        }

        let mut geometry = GeometryData::new(PrimitiveTopology::Lines);
        push_vec3_attribute(&mut geometry, AttributeSemantic::Position, &positions);
        push_vec3_attribute(&mut geometry, AttributeSemantic::Color, &colors);

        units.push(renderable(geometry, material));
    }

    match units.len() {
        0 => None,
        1 => units.pop(),
        _ => {
            let mut composite = SceneNode::group();
            composite.children = units;
            Some(composite)
        }
    }
}

/// The three bounding-box modes, shared by every geometry kind.
fn encode_bounding_box(
    positions: &[Vec3],
    mode: VisualizationMode,
    style: &SceneStyle,
) -> Option<SceneNode> {
    let bounds = BoundingBox::from_points(positions)?;

    match mode {
        VisualizationMode::BoundingBox => Some(wire_box_unit(&bounds, style)),
        VisualizationMode::TransparentBoundingBox => Some(transparent_box_unit(&bounds, style)),
        VisualizationMode::TransparentBoundingBoxOutline => {
            let mut composite = SceneNode::group();
            composite.push_child(wire_box_unit(&bounds, style));
            composite.push_child(transparent_box_unit(&bounds, style));
            Some(composite)
        }
        _ => unreachable!("not a bounding-box mode"),
    }
}

/// 12-edge wire box tinted with the auxiliary color.
fn wire_box_unit(bounds: &BoundingBox, style: &SceneStyle) -> SceneNode {
    let mut geometry = GeometryData::new(PrimitiveTopology::Lines);
    push_vec3_attribute(&mut geometry, AttributeSemantic::Position, &bounds.corners());
    geometry.indices = Some(WIRE_EDGES.to_vec());

    renderable(geometry, MaterialDescriptor::auxiliary(style.auxiliary_color))
}

/// 12-triangle solid box with translucent, double-sided faces and no edges.
fn transparent_box_unit(bounds: &BoundingBox, style: &SceneStyle) -> SceneNode {
    let mut geometry = GeometryData::new(PrimitiveTopology::Triangles);
    push_vec3_attribute(&mut geometry, AttributeSemantic::Position, &bounds.corners());
    geometry.indices = Some(SOLID_FACE_TRIANGLES.to_vec());

    let face_color = color::with_alpha(style.auxiliary_color, style.opacity);
    let material = MaterialDescriptor::flat(
        color::TRANSPARENT,
        face_color,
        color::TRANSPARENT,
        true,
    )
    .with_double_sided();

    renderable(geometry, material)
}

/// Point unit over raw positions with the auxiliary tint and fixed point size.
fn vertex_unit(positions: &[Vec3], style: &SceneStyle) -> SceneNode {
    let geometry = position_point_list(positions);
    let material =
        MaterialDescriptor::auxiliary(style.auxiliary_color).with_point_size(style.point_size);
    renderable(geometry, material)
}

fn renderable(geometry: GeometryData, material: MaterialDescriptor) -> SceneNode {
    SceneNode::new(SceneNodeContent::Renderable(RenderUnit {
        geometry,
        material,
    }))
}
