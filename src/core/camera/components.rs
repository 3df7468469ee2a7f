use bevy::prelude::*;
use globegen::orbit::{OrbitSettings, OrbitState};

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct HeroCamera;

/// Drag-to-orbit controls around a fixed pivot.
#[derive(Component, Debug, Clone)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    pub state: OrbitState,
    pub target: Vec3,
}

impl OrbitControls {
    pub fn new(settings: OrbitSettings, target: Vec3) -> Self {
        Self {
            settings,
            state: OrbitState::default(),
            target,
        }
    }

    pub fn zoom_enabled(&self) -> bool {
        self.settings.enable_zoom
    }

    pub fn damping_enabled(&self) -> bool {
        self.settings.enable_damping
    }
}
