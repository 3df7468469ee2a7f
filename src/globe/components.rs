use bevy::prelude::*;
use globegen::markers::Ring;
use globegen::surface::SurfaceSize;

/// Root of the viewer's scene graph.
#[derive(Component)]
pub struct HeroScene;

/// Parent of the globe and its markers, rotated as a unit.
#[derive(Component)]
pub struct GlobeGroup;

#[derive(Component)]
pub struct GlobeMesh;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerDot {
    pub ring: Ring,
    pub index: usize,
}

#[derive(Component)]
pub struct HeroLight;

/// Output surface of the viewer camera.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct HeroRenderer {
    pub size: SurfaceSize,
    pub antialias: bool,
    pub clear_color: Color,
}
