//! Scene setup system
//!
//! This module handles the initial setup of the 3D scene including
//! the render target, camera, lights and the cubie meshes.

use bevy::{
    asset::Assets,
    color::ColorToComponents,
    camera::RenderTarget,
    core_pipeline::tonemapping::Tonemapping,
    image::Image,
    log::info,
    math::{primitives::Cuboid, IVec3, Vec3},
    pbr::{MeshMaterial3d, StandardMaterial},
    prelude::*,
    render::{
        render_resource::{Extent3d, TextureFormat, TextureUsages},
        renderer::RenderDevice,
    },
};

use crate::bevy::components::{CameraController, OffscreenCamera};
use crate::bevy::plugins::ImageCopier;
use crate::bevy::resources::{CubieAssets, RenderTargetState};
use crate::config::{
    camera::{BACKGROUND, FAR, FOV_DEGREES, NEAR, START_POSITION},
    cube::CUBIE_SIZE,
    lighting::*,
    RENDER_HEIGHT, RENDER_WIDTH,
};
use crate::cube::{cube_positions, palette::rgb_bytes, sticker_color};

/// sRGB color from `0xRRGGBB`
pub fn hex_color(color: u32) -> Color {
    let [r, g, b] = rgb_bytes(color);
    Color::srgb_u8(r, g, b)
}

/// Create an offscreen render target and the copier that reads it back
pub fn create_render_target(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    render_device: &RenderDevice,
    width: u32,
    height: u32,
) -> RenderTargetState {
    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let mut render_target_image =
        Image::new_target_texture(size.width, size.height, TextureFormat::bevy_default());
    render_target_image.texture_descriptor.usage |= TextureUsages::COPY_SRC;
    let image = images.add(render_target_image);

    let copier = commands
        .spawn(ImageCopier::new(image.clone(), size, render_device))
        .id();

    RenderTargetState {
        image,
        copier,
        width,
        height,
    }
}

/// Linear vertex color for each normal of a cubie whose home is `home`
pub fn face_colors(home: IVec3, normals: &[[f32; 3]]) -> Vec<[f32; 4]> {
    normals
        .iter()
        .map(|n| {
            let color = hex_color(sticker_color(home, Vec3::from_array(*n)));
            LinearRgba::from(color).to_f32_array()
        })
        .collect()
}

/// Cuboid mesh with the home position's sticker colors baked in as vertex
/// colors, one color per face
pub fn cubie_mesh(home: IVec3) -> Mesh {
    let mut mesh = Mesh::from(Cuboid::from_length(CUBIE_SIZE));
    let colors = mesh
        .attribute(Mesh::ATTRIBUTE_NORMAL)
        .and_then(|normals| normals.as_float3())
        .map(|normals| face_colors(home, normals))
        .unwrap_or_default();
    if !colors.is_empty() {
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    }
    mesh
}

/// Setup the 3D scene with camera, lights and cubie assets
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut cubie_assets: ResMut<CubieAssets>,
    render_device: Res<RenderDevice>,
) {
    info!("[Bevy] Setting up scene...");

    let target = create_render_target(
        &mut commands,
        &mut images,
        &render_device,
        RENDER_WIDTH,
        RENDER_HEIGHT,
    );

    // Camera with orbit controller; ambient light rides on the camera
    commands.spawn((
        Camera3d::default(),
        Camera {
            target: RenderTarget::Image(target.image.clone().into()),
            clear_color: ClearColorConfig::Custom(hex_color(BACKGROUND)),
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Tonemapping::None,
        Transform::from_translation(START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
        OffscreenCamera,
        CameraController,
    ));
    commands.insert_resource(target);

    // Key light
    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Back light
    commands.spawn((
        DirectionalLight {
            illuminance: BACK_LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(BACK_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Stickers come from vertex colors, so one white material serves all cubies
    cubie_assets.material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        metallic: 0.0,
        perceptual_roughness: 0.45,
        ..default()
    });
    cubie_assets.meshes = cube_positions()
        .map(|home| meshes.add(cubie_mesh(home)))
        .collect();

    info!("[Bevy] Scene setup complete!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cube::{FRONT_COLOR, INTERIOR_COLOR, RIGHT_COLOR, UP_COLOR};

    fn linear(color: u32) -> [f32; 4] {
        LinearRgba::from(hex_color(color)).to_f32_array()
    }

    #[test]
    fn corner_colors_three_faces() {
        let normals = [
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ];
        let colors = face_colors(IVec3::new(1, 1, 1), &normals);
        assert_eq!(
            colors,
            vec![
                linear(RIGHT_COLOR),
                linear(INTERIOR_COLOR),
                linear(UP_COLOR),
                linear(INTERIOR_COLOR),
                linear(FRONT_COLOR),
                linear(INTERIOR_COLOR),
            ]
        );
    }

    #[test]
    fn cubie_mesh_has_a_color_per_vertex() {
        let mesh = cubie_mesh(IVec3::new(-1, 0, 1));
        let vertices = mesh.count_vertices();
        assert!(vertices > 0);
        assert_eq!(
            mesh.attribute(Mesh::ATTRIBUTE_COLOR).map(|colors| colors.len()),
            Some(vertices)
        );
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_color(0xFFA500), Color::srgb_u8(0xFF, 0xA5, 0x00));
    }
}
