pub mod components;
pub mod resources;
mod systems;

use crate::core::state::ShellState;
use crate::globe::resources::*;
use crate::globe::systems::*;
use bevy::prelude::*;

pub struct GlobeViewerPlugin;

impl Plugin for GlobeViewerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerSettings>()
            .init_resource::<RendererStats>()
            .add_systems(OnEnter(ShellState::Hero), mount_globe_viewer)
            .add_systems(OnExit(ShellState::Hero), teardown_globe_viewer)
            // The resize subscription lives exactly as long as the viewer.
            .add_systems(
                Update,
                sync_surface_size.run_if(resource_exists::<GlobeViewer>),
            )
            .add_systems(PostUpdate, render_frame.run_if(frame_loop_running));
    }
}
