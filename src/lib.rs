mod core;
mod globe;
mod helpers;

pub use crate::core::state::ShellState;
pub use crate::globe::GlobeViewerPlugin;
pub use crate::globe::components::{
    GlobeGroup, GlobeMesh, HeroLight, HeroRenderer, HeroScene, MarkerDot,
};
pub use crate::globe::resources::{GlobeViewer, RendererStats, ViewerSettings};

use crate::core::camera::CameraPlugin;
use bevy::prelude::*;

/// Page shell: mounts the globe viewer while in [`ShellState::Hero`].
pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ShellState>()
            .add_plugins((CameraPlugin, GlobeViewerPlugin));
    }
}
