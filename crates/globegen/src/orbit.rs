//! Orbit camera math: pointer drag rotates the camera around a pivot on a
//! sphere, with optional damping so motion settles gradually after release.

use crate::config::ControlsConfig;
use crate::constants::POLAR_EPSILON;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub zoom_speed: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl From<&ControlsConfig> for OrbitSettings {
    fn from(config: &ControlsConfig) -> Self {
        Self {
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            enable_zoom: config.enable_zoom,
            zoom_speed: config.zoom_speed,
            rotate_speed: config.rotate_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
        }
    }
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self::from(&ControlsConfig::default())
    }
}

/// Spherical coordinates around the pivot, Y up.
///
/// `theta` is the azimuth measured from +Z towards +X, `phi` the polar angle
/// measured from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

/// Pointer input gathered over one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    pub dragging: bool,
    /// Pointer movement in pixels.
    pub drag_delta: Vec2,
    /// Positive scrolls in.
    pub wheel_delta: f32,
    /// Height of the drawing surface in pixels; a full-height drag is one
    /// full turn at rotate speed 1.
    pub surface_height: f32,
}

/// Pending motion not yet applied to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Pending (theta, phi) rotation.
    pub spherical_delta: Vec2,
    pub scale: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            spherical_delta: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitUpdate {
    pub position: Vec3,
    pub changed: bool,
}

impl OrbitState {
    pub fn rotate_left(&mut self, angle: f32) {
        self.spherical_delta.x -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.spherical_delta.y -= angle;
    }

    /// Folds one frame of pointer input into the pending motion.
    pub fn apply_input(&mut self, input: &OrbitInput, settings: &OrbitSettings) {
        if input.dragging && input.drag_delta != Vec2::ZERO {
            let height = input.surface_height.max(1.0);
            let delta = input.drag_delta * settings.rotate_speed;
            self.rotate_left(TAU * delta.x / height);
            self.rotate_up(TAU * delta.y / height);
        }

        if settings.enable_zoom && input.wheel_delta != 0.0 {
            let step = 0.95_f32.powf(settings.zoom_speed * input.wheel_delta.abs());
            if input.wheel_delta > 0.0 {
                self.scale *= step;
            } else {
                self.scale /= step;
            }
        }
    }

    /// Advances the orbit by one frame and returns the new camera position.
    ///
    /// With damping only `damping_factor` of the pending rotation is applied
    /// and the rest decays by `1 - damping_factor`, so the camera coasts to a
    /// stop after the pointer is released.
    pub fn update(&mut self, position: Vec3, target: Vec3, settings: &OrbitSettings) -> OrbitUpdate {
        let mut spherical = Spherical::from_offset(position - target);

        let applied = if settings.enable_damping {
            self.spherical_delta * settings.damping_factor
        } else {
            self.spherical_delta
        };
        spherical.theta += applied.x;
        spherical.phi += applied.y;
        spherical.phi = spherical.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        if settings.enable_zoom {
            spherical.radius = (spherical.radius * self.scale)
                .clamp(settings.min_distance, settings.max_distance);
        }

        let new_position = target + spherical.to_offset();

        if settings.enable_damping {
            self.spherical_delta *= 1.0 - settings.damping_factor;
        } else {
            self.spherical_delta = Vec2::ZERO;
        }
        self.scale = 1.0;

        OrbitUpdate {
            position: new_position,
            changed: new_position.distance_squared(position) > 1e-6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const START: Vec3 = Vec3::new(0.0, 0.0, 3.0);

    fn drag(dx: f32, dy: f32) -> OrbitInput {
        OrbitInput {
            dragging: true,
            drag_delta: Vec2::new(dx, dy),
            wheel_delta: 0.0,
            surface_height: 600.0,
        }
    }

    #[test]
    fn test_spherical_conversion() {
        let offset = Vec3::new(1.0, 2.0, -0.5);
        let back = Spherical::from_offset(offset).to_offset();
        assert!(back.abs_diff_eq(offset, 1e-5));
    }

    #[test]
    fn test_no_input_no_change() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();

        let update = state.update(START, Vec3::ZERO, &settings);

        assert!(update.position.abs_diff_eq(START, 1e-6));
        assert!(!update.changed);
    }

    #[test]
    fn test_drag_requires_button() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        let mut input = drag(120.0, 40.0);
        input.dragging = false;

        state.apply_input(&input, &settings);

        assert_eq!(state.spherical_delta, Vec2::ZERO);
    }

    #[test]
    fn test_drag_angle_scales_with_surface_height() {
        let settings = OrbitSettings {
            rotate_speed: 1.0,
            ..OrbitSettings::default()
        };
        let mut state = OrbitState::default();

        state.apply_input(&drag(300.0, 0.0), &settings);

        // Half the surface height is half a turn.
        assert!((state.spherical_delta.x + PI).abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_drag_orbits_and_keeps_distance() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();

        state.apply_input(&drag(100.0, 0.0), &settings);
        let update = state.update(START, Vec3::ZERO, &settings);

        assert!(update.changed);
        assert!((update.position.length() - 3.0).abs() < 1e-4);
        assert!(update.position.x < 0.0, "dragging right swings the camera to -X");
        assert!(update.position.y.abs() < 1e-5);
    }

    #[test]
    fn test_damping_decays_pending_rotation() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        state.apply_input(&drag(50.0, 25.0), &settings);
        let pending = state.spherical_delta;

        state.update(START, Vec3::ZERO, &settings);

        let expected = pending * (1.0 - 0.08);
        assert!(state.spherical_delta.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_damped_motion_settles() {
        let settings = OrbitSettings::default();
        let mut state = OrbitState::default();
        state.apply_input(&drag(200.0, 0.0), &settings);

        let mut position = START;
        for _ in 0..400 {
            position = state.update(position, Vec3::ZERO, &settings).position;
        }

        assert!(state.spherical_delta.length() < 1e-6);
        assert!(!state.update(position, Vec3::ZERO, &settings).changed);
    }

    #[test]
    fn test_without_damping_rotation_applies_at_once() {
        let settings = OrbitSettings {
            enable_damping: false,
            ..OrbitSettings::default()
        };
        let mut state = OrbitState::default();
        state.rotate_left(-PI / 2.0);

        let update = state.update(START, Vec3::ZERO, &settings);

        assert!(update.position.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
        assert_eq!(state.spherical_delta, Vec2::ZERO);
    }

    #[rstest]
    #[case(-10.0, 1.0)]
    #[case(10.0, -1.0)]
    fn test_polar_angle_is_clamped(#[case] phi_delta: f32, #[case] pole: f32) {
        let settings = OrbitSettings {
            enable_damping: false,
            ..OrbitSettings::default()
        };
        let mut state = OrbitState::default();
        state.spherical_delta.y = phi_delta;

        let update = state.update(START, Vec3::ZERO, &settings);

        assert!(update.position.is_finite());
        assert!((update.position.y - 3.0 * pole).abs() < 1e-4);
        assert!((update.position.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_wheel_ignored_when_zoom_disabled() {
        let settings = OrbitSettings::default();
        assert!(!settings.enable_zoom);
        let mut state = OrbitState::default();

        state.apply_input(
            &OrbitInput {
                wheel_delta: 5.0,
                surface_height: 600.0,
                ..OrbitInput::default()
            },
            &settings,
        );
        let update = state.update(START, Vec3::ZERO, &settings);

        assert!((update.position.length() - 3.0).abs() < 1e-6);
    }

    #[rstest]
    #[case(3.0, true)]
    #[case(-3.0, false)]
    fn test_wheel_zooms_when_enabled(#[case] wheel: f32, #[case] closer: bool) {
        let settings = OrbitSettings {
            enable_zoom: true,
            ..OrbitSettings::default()
        };
        let mut state = OrbitState::default();
        state.apply_input(
            &OrbitInput {
                wheel_delta: wheel,
                surface_height: 600.0,
                ..OrbitInput::default()
            },
            &settings,
        );

        let distance = state.update(START, Vec3::ZERO, &settings).position.length();

        assert_eq!(distance < 3.0, closer);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn test_zoom_respects_distance_limits() {
        let settings = OrbitSettings {
            enable_zoom: true,
            min_distance: 2.0,
            max_distance: 4.0,
            ..OrbitSettings::default()
        };
        let mut state = OrbitState {
            scale: 0.01,
            ..OrbitState::default()
        };

        let distance = state.update(START, Vec3::ZERO, &settings).position.length();

        assert!((distance - 2.0).abs() < 1e-4);
    }
}
