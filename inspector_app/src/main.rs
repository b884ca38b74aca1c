//! Scene inspector
//!
//! Assembles a small 3D annotation model in memory, builds it under every
//! visualization mode, and logs a per-mode summary of the resulting tree.
//! Useful for eyeballing how the encodings differ without a host renderer.

use std::collections::HashMap;

use u3d_scene::builder::SceneBuilder;
use u3d_scene::config::{SceneStyle, VisualizationMode};
use u3d_scene::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use u3d_scene::model::{
    Geometry, ImageData, Line, LineSetGeometry, LightSource, MaterialResource, MeshGeometry,
    ModelStore, Node, NodeKind, Point, PointSetGeometry, Shader, TextureBinding, Triangle,
    TriangleVertex,
};
use u3d_scene::scene::{Scene, SceneNodeContent};

fn main() {
    env_logger::init();

    let store = sample_store();
    let style = SceneStyle {
        auxiliary_color: Vec4::new(1.0, 0.2, 0.2, 1.0),
        opacity: 0.35,
        point_size: 3.0,
        ..SceneStyle::default()
    };

    for mode in VisualizationMode::ALL {
        let builder = SceneBuilder::new(mode, style.clone());
        match builder.build(&store, "world") {
            Ok(scene) => report(mode, &scene),
            Err(err) => log::error!("{mode:?}: build failed: {err}"),
        }
    }
}

fn report(mode: VisualizationMode, scene: &Scene) {
    let Some(root) = &scene.root else {
        log::info!("{mode:?}: empty scene");
        return;
    };

    let mut nodes = 0usize;
    let mut vertices = 0u32;
    let mut indices = 0u32;
    for node in root.descendants() {
        nodes += 1;
        if let SceneNodeContent::Renderable(unit) = &node.content {
            vertices += unit.geometry.vertex_count();
            indices += unit.geometry.index_count();
        }
    }

    log::info!(
        "{mode:?}: {nodes} nodes, {} units ({vertices} vertices, {indices} indices), \
         {} lights, ambient {:.2} {:.2} {:.2}",
        root.render_unit_count(),
        root.light_count(),
        scene.ambient_light.x,
        scene.ambient_light.y,
        scene.ambient_light.z,
    );
}

/// A small assembly: a textured quad, a point cloud, a two-shader polyline,
/// a light rig, and a camera that never renders.
fn sample_store() -> ModelStore {
    let mut store = ModelStore::new();

    store.insert_material(
        "pewter",
        MaterialResource {
            ambient: Vec4::new(0.11, 0.06, 0.11, 1.0),
            diffuse: Vec4::new(0.43, 0.47, 0.54, 1.0),
            specular: Vec4::new(0.33, 0.33, 0.52, 1.0),
        },
    );
    store.insert_texture("checker", checker_texture(8, 8));

    store.insert_shader("surface", Shader::flat("pewter"));
    let mut decal = Shader::flat("pewter");
    decal.texture_bindings = vec![TextureBinding {
        texture_name: "checker".to_string(),
        channel: 0,
    }];
    store.insert_shader("decal", decal);
    let mut strokes = Shader::flat("pewter");
    strokes.use_vertex_color = true;
    store.insert_shader("strokes", strokes);

    store.insert_geometry("quad", Geometry::Mesh(quad_mesh()));
    store.insert_geometry("cloud", Geometry::PointSet(point_cloud()));
    store.insert_geometry("outline", Geometry::LineSet(polyline()));

    store.insert_light(
        "sky",
        LightSource::Ambient {
            color: Vec3::new(0.9, 0.9, 1.0),
            intensity: 0.2,
        },
    );
    store.insert_light(
        "bulb",
        LightSource::Point {
            color: Vec3::new(1.0, 0.95, 0.8),
            intensity: 1.5,
            attenuation: [1.0, 0.09, 0.032],
        },
    );

    store.insert_node(
        Node::new("world", NodeKind::Group)
            .with_children(["geometry", "lights", "camera"])
            .with_constant_transform(Mat4::identity()),
    );

    let mut offsets = HashMap::new();
    offsets.insert(
        "cloud-node".to_string(),
        Mat4::new_translation(&Vec3::new(2.5, 0.0, 0.0)),
    );
    offsets.insert(
        "outline-node".to_string(),
        Mat4::new_translation(&Vec3::new(-2.5, 0.0, 0.0)),
    );
    store.insert_node(
        Node::new("geometry", NodeKind::Group)
            .with_children(["quad-node", "cloud-node", "outline-node"])
            .with_per_child_transforms(offsets),
    );
    store.insert_node(Node::new("quad-node", NodeKind::Model).with_resource("quad"));
    store.insert_node(Node::new("cloud-node", NodeKind::Model).with_resource("cloud"));
    store.insert_node(Node::new("outline-node", NodeKind::Model).with_resource("outline"));

    store.insert_node(Node::new("lights", NodeKind::Group).with_children(["sky-node", "bulb-node"]));
    store.insert_node(Node::new("sky-node", NodeKind::Light).with_resource("sky"));
    store.insert_node(Node::new("bulb-node", NodeKind::Light).with_resource("bulb"));

    store.insert_node(Node::new("camera", NodeKind::View));

    store
}

fn quad_mesh() -> MeshGeometry {
    let vertex = |position, texture_coord| TriangleVertex {
        position,
        normal: 0,
        diffuse_color: 0,
        texture_coord,
    };
    let triangle = |a, b, c| Triangle {
        vertices: [a, b, c],
        has_texture: true,
        has_diffuse: false,
        has_specular: false,
        shading_id: 0,
    };

    let mut shaders = HashMap::new();
    shaders.insert(0, "decal".to_string());

    MeshGeometry {
        positions: vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ],
        normals: vec![Vec3::new(0.0, 0.0, 1.0)],
        diffuse_colors: vec![Vec4::new(1.0, 1.0, 1.0, 1.0)],
        texture_coords: vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ],
        triangles: vec![
            triangle(vertex(0, 0), vertex(1, 1), vertex(2, 2)),
            triangle(vertex(2, 2), vertex(3, 3), vertex(0, 0)),
        ],
        shaders,
    }
}

fn point_cloud() -> PointSetGeometry {
    let positions: Vec<Vec3> = (0..27u32)
        .map(|i| {
            Vec3::new(
                (i % 3) as f32 - 1.0,
                ((i / 3) % 3) as f32 - 1.0,
                (i / 9) as f32 - 1.0,
            )
        })
        .collect();
    let diffuse_colors = positions
        .iter()
        .map(|p| Vec4::new(p.x.abs(), p.y.abs(), p.z.abs(), 1.0))
        .collect();
    let points = (0..27u32)
        .map(|i| Point {
            position: i,
            diffuse_color: i,
        })
        .collect();

    PointSetGeometry {
        positions,
        diffuse_colors,
        points,
    }
}

fn polyline() -> LineSetGeometry {
    let mut shaders = HashMap::new();
    shaders.insert(0, "surface".to_string());
    shaders.insert(1, "strokes".to_string());

    LineSetGeometry {
        positions: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.5, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.5, 0.0),
        ],
        diffuse_colors: vec![
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 1.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.0, 1.0),
            Vec4::new(1.0, 1.0, 0.0, 1.0),
        ],
        lines: vec![
            Line {
                position1: 0,
                position2: 1,
                diffuse_color1: 0,
                diffuse_color2: 1,
                shading_id: 0,
            },
            Line {
                position1: 1,
                position2: 2,
                diffuse_color1: 1,
                diffuse_color2: 2,
                shading_id: 1,
            },
            Line {
                position1: 2,
                position2: 3,
                diffuse_color1: 2,
                diffuse_color2: 3,
                shading_id: 1,
            },
        ],
        shaders,
    }
}

fn checker_texture(width: u32, height: u32) -> ImageData {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let on = (x + y) % 2 == 0;
            let value = if on { 230 } else { 40 };
            data.extend_from_slice(&[value, value, value, 255]);
        }
    }
    ImageData {
        data,
        width,
        height,
        channels: 4,
    }
}
