//! Viewport resize system
//!
//! The webview asks for a render size matching its canvas. The render target
//! cannot be resized in place, so a new image and copier replace the old ones.

use bevy::{
    asset::Assets, camera::RenderTarget, image::Image, log::info, prelude::*,
    render::renderer::RenderDevice,
};

use crate::bevy::components::OffscreenCamera;
use crate::bevy::resources::{PendingResize, RenderTargetState};
use crate::bevy::systems::scene::create_render_target;
use crate::config::{MAX_RENDER_DIMENSION, MIN_RENDER_DIMENSION};

/// Scale a requested viewport size into what the render target supports,
/// keeping its aspect ratio. The upper limit wins when a very thin viewport
/// cannot satisfy both.
pub fn clamp_viewport(size: UVec2) -> UVec2 {
    let size = size.max(UVec2::ONE).as_vec2();
    let (min, max) = (MIN_RENDER_DIMENSION as f32, MAX_RENDER_DIMENSION as f32);
    let longest = size.max_element();
    let shortest = size.min_element();

    let scale = if longest > max {
        max / longest
    } else if shortest < min {
        (min / shortest).min(max / longest)
    } else {
        1.0
    };

    (size * scale)
        .round()
        .as_uvec2()
        .clamp(UVec2::ONE, UVec2::splat(MAX_RENDER_DIMENSION))
}

/// Apply the latest requested viewport size
pub fn apply_viewport_resize(
    mut commands: Commands,
    mut pending: ResMut<PendingResize>,
    mut images: ResMut<Assets<Image>>,
    render_device: Res<RenderDevice>,
    target: Option<Res<RenderTargetState>>,
    mut cameras: Query<&mut Camera, With<OffscreenCamera>>,
) {
    let Some(requested) = pending.0.take() else {
        return;
    };
    let Some(target) = target else {
        return;
    };

    let size = clamp_viewport(requested);
    if size == UVec2::new(target.width, target.height) {
        return;
    }

    let replacement =
        create_render_target(&mut commands, &mut images, &render_device, size.x, size.y);
    for mut camera in cameras.iter_mut() {
        camera.target = RenderTarget::Image(replacement.image.clone().into());
    }
    commands.entity(target.copier).try_despawn();
    images.remove(&target.image);

    info!(
        "[Bevy] Render target resized {}x{} -> {}x{}",
        target.width, target.height, size.x, size.y
    );
    commands.insert_resource(replacement);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(size: UVec2) -> f32 {
        size.x as f32 / size.y as f32
    }

    #[test]
    fn fitting_sizes_pass_through() {
        assert_eq!(clamp_viewport(UVec2::new(640, 480)), UVec2::new(640, 480));
    }

    #[test]
    fn high_dpi_window_shrinks_without_stretching() {
        let size = clamp_viewport(UVec2::new(3840, 2160));
        assert_eq!(size, UVec2::new(2048, 1152));
        assert!((ratio(size) - 16.0 / 9.0).abs() < 0.01);
    }

    #[test]
    fn tiny_window_grows_without_stretching() {
        // Shortest edge reaches the minimum, 4:3 kept within rounding
        let size = clamp_viewport(UVec2::new(32, 24));
        assert_eq!(size, UVec2::new(85, 64));
    }

    #[test]
    fn thin_window_respects_the_upper_limit() {
        let size = clamp_viewport(UVec2::new(1, 5000));
        assert_eq!(size, UVec2::new(1, 2048));
    }
}
