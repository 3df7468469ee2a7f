pub(crate) mod components;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use crate::globe::resources::frame_loop_running;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HeroCamera>()
            .add_systems(Update, orbit_camera_control.run_if(frame_loop_running));
    }
}
