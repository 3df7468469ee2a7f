use bevy::prelude::*;
use globegen::config::GlobeConfig;
use globegen::frame_loop::FrameLoop;

#[derive(Resource, Debug, Clone, Deref)]
pub struct ViewerSettings(pub GlobeConfig);

impl Default for ViewerSettings {
    fn default() -> Self {
        Self(globegen::get_config())
    }
}

/// The mounted viewer. Present only between mount and teardown.
#[derive(Resource, Debug)]
pub struct GlobeViewer {
    pub scene: Entity,
    pub camera: Entity,
    pub group: Entity,
    pub frame_loop: FrameLoop,
}

/// Survives teardown so the lifecycle can be inspected afterwards.
#[derive(Resource, Debug, Default)]
pub struct RendererStats {
    pub frames_rendered: u64,
    pub disposals: u32,
}

pub fn frame_loop_running(viewer: Option<Res<GlobeViewer>>) -> bool {
    viewer.is_some_and(|viewer| viewer.frame_loop.is_running())
}
