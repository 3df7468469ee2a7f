use crate::core::camera::components::{HeroCamera, OrbitControls};
use crate::globe::components::HeroRenderer;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use globegen::orbit::OrbitInput;

/// Advances the orbit controls by one frame: folds this frame's drag into the
/// pending motion, then settles damping and moves the camera.
pub fn orbit_camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut camera_q: Query<(&mut Transform, &mut OrbitControls, &HeroRenderer), With<HeroCamera>>,
) {
    // Collect pointer deltas
    let drag_delta: Vec2 = mouse_motion.read().map(|ev| ev.delta).sum();
    let wheel_delta: f32 = mouse_wheel.read().map(|ev| ev.y).sum();

    let Ok((mut transform, mut controls, renderer)) = camera_q.single_mut() else {
        return;
    };

    // Prepare input for business logic
    let input = OrbitInput {
        dragging: mouse_input.pressed(MouseButton::Left),
        drag_delta,
        wheel_delta,
        surface_height: renderer.size.height as f32,
    };

    // Call business logic
    let OrbitControls {
        settings,
        state,
        target,
    } = &mut *controls;
    state.apply_input(&input, settings);
    let update = state.update(transform.translation, *target, settings);

    // Apply results to ECS
    if update.changed {
        transform.translation = update.position;
        transform.look_at(*target, Vec3::Y);
    }
}
