//! Cube controller systems
//!
//! Webview commands feed a FIFO of moves. One move at a time is animated by
//! reparenting its layer's cubies to a pivot entity and rotating the pivot;
//! when the turn completes the cubies are snapped back onto the grid and
//! detached again.

use bevy::{
    log::{debug, info},
    prelude::*,
};

use crate::bevy::components::{Cubie, Pivot};
use crate::bevy::resources::{
    ActiveRotation, CubeCommandReceiver, CubeController, CubeStatusRes, CubieAssets,
    PendingResize,
};
use crate::config::cube::{ANIMATION_DURATION, SPACING};
use crate::cube::{cube_positions, CubieState, QueuedMove, RotationTween};
use crate::tauri_bridge::shared_state::{CubeCommand, CubeStatus};

/// Spawn the 27 cubies at their home positions
pub fn spawn_cubies(commands: &mut Commands, assets: &CubieAssets) {
    for (index, home) in cube_positions().enumerate() {
        let state = CubieState::new(home);
        commands.spawn((
            Mesh3d(assets.meshes.get(index).cloned().unwrap_or_default()),
            MeshMaterial3d(assets.material.clone()),
            state.transform(SPACING),
            Cubie(state),
        ));
    }
}

pub fn spawn_initial_cubies(mut commands: Commands, assets: Res<CubieAssets>) {
    spawn_cubies(&mut commands, &assets);
    info!("[Cube] Spawned 27 cubies");
}

/// Drain webview commands in arrival order
pub fn handle_cube_commands(
    mut commands: Commands,
    receiver: Option<Res<CubeCommandReceiver>>,
    mut controller: ResMut<CubeController>,
    mut pending_resize: ResMut<PendingResize>,
    assets: Res<CubieAssets>,
    cubies: Query<Entity, With<Cubie>>,
) {
    let Some(receiver) = receiver else {
        return;
    };

    let mut rebuild = false;
    while let Ok(command) = receiver.try_recv() {
        match command {
            CubeCommand::Shuffle => {
                if controller.shuffle(&mut rand::rng()) {
                    info!("[Cube] Shuffling with {} moves", controller.queue.len());
                } else {
                    debug!("[Cube] Shuffle ignored while a rotation is running");
                }
            }
            CubeCommand::Solve => {
                if controller.solve() {
                    info!("[Cube] Solving by undoing {} moves", controller.queue.len());
                } else {
                    debug!("[Cube] Solve ignored while a rotation is running");
                }
            }
            CubeCommand::Rotate(mv) => controller.queue.push(mv, true),
            CubeCommand::Reset => {
                // Despawning the pivot takes its cubies along
                if let Some(active) = controller.clear() {
                    commands.entity(active.pivot).try_despawn();
                }
                rebuild = true;
            }
            CubeCommand::Resize { width, height } => {
                pending_resize.0 = Some(UVec2::new(width, height));
            }
        }
    }

    // Several resets in one batch rebuild once
    if rebuild {
        for entity in cubies.iter() {
            commands.entity(entity).try_despawn();
        }
        spawn_cubies(&mut commands, &assets);
        info!("[Cube] Reset");
    }
}

/// Advance the running rotation; finish it once the tween is done
pub fn animate_rotation(
    mut commands: Commands,
    time: Res<Time>,
    mut controller: ResMut<CubeController>,
    mut pivots: Query<&mut Transform, (With<Pivot>, Without<Cubie>)>,
    mut cubies: Query<(&mut Cubie, &mut Transform), Without<Pivot>>,
) {
    let Some(active) = controller.active.as_mut() else {
        return;
    };

    active.tween.advance(time.delta());
    if let Ok(mut pivot) = pivots.get_mut(active.pivot) {
        pivot.rotation = Quat::from_axis_angle(
            active.mv.axis.unit(),
            active.mv.angle_at(active.tween.eased()),
        );
    }
    if !active.tween.is_finished() {
        return;
    }

    let Some(done) = controller.active.take() else {
        return;
    };
    for &entity in &done.cubies {
        if let Ok((mut cubie, mut transform)) = cubies.get_mut(entity) {
            cubie.0.turn(&done.mv);
            *transform = cubie.0.transform(SPACING);
        }
        commands.entity(entity).remove::<ChildOf>();
    }
    commands.entity(done.pivot).try_despawn();

    if done.record {
        controller.history.record(done.mv);
    }
    debug!("[Cube] Finished {:?}", done.mv);
}

/// Start the next queued move when nothing is animating
pub fn start_next_rotation(
    mut commands: Commands,
    mut controller: ResMut<CubeController>,
    cubies: Query<(Entity, &Cubie)>,
) {
    if controller.is_animating() {
        return;
    }
    let Some(QueuedMove { mv, record }) = controller.queue.pop() else {
        return;
    };

    let layer: Vec<Entity> = cubies
        .iter()
        .filter(|(_, cubie)| cubie.0.in_layer(mv.axis, mv.layer))
        .map(|(entity, _)| entity)
        .collect();

    // The pivot starts at identity, so each cubie's local transform under it
    // equals its world transform.
    let pivot = commands
        .spawn((Pivot, Transform::IDENTITY, Visibility::default()))
        .id();
    commands.entity(pivot).add_children(&layer);

    debug!("[Cube] Rotating {:?} ({} cubies)", mv, layer.len());
    controller.active = Some(ActiveRotation {
        mv,
        record,
        pivot,
        cubies: layer,
        tween: RotationTween::new(ANIMATION_DURATION),
    });
}

/// Publish the controller state for `get_cube_status`
pub fn publish_cube_status(
    controller: Res<CubeController>,
    cubies: Query<&Cubie>,
    status: Option<Res<CubeStatusRes>>,
) {
    let Some(status) = status else {
        return;
    };
    let snapshot = CubeStatus {
        animating: controller.is_animating(),
        queued: controller.queue.len(),
        history_len: controller.history.len(),
        solved: !cubies.is_empty() && cubies.iter().all(|cubie| cubie.0.is_home()),
    };
    if let Ok(mut guard) = status.0 .0.lock() {
        *guard = snapshot;
    };
}
