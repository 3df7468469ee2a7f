use std::f32::consts::PI;

pub const WINDOW_TITLE: &str = "Globe";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 3.0;

pub const MSAA_SAMPLES: u32 = 4;

pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_INTENSITY: f32 = 1.2;
pub const POINT_RANGE: f32 = 100.0;
pub const POINT_POSITION: [f32; 3] = [0.0, 0.0, 3.0];

pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_SEGMENTS: u32 = 48;
pub const GLOBE_OPACITY: f32 = 0.3;
pub const GLOBE_EMISSIVE_INTENSITY: f32 = 0.25;

pub const MARKER_DISC_RADIUS: f32 = 0.12;
pub const MARKER_DISC_SEGMENTS: u32 = 32;
pub const MARKER_ORBIT_RADIUS: f32 = 1.8;
pub const MARKERS_PER_RING: usize = 8;

/// Group tilt about X, applied first (Euler XYZ).
pub const TILT_X: f32 = 0.25;
/// Group tilt about Y.
pub const TILT_Y: f32 = PI / 5.0;

pub const DAMPING_FACTOR: f32 = 0.08;
pub const ROTATE_SPEED: f32 = 0.8;
pub const ZOOM_SPEED: f32 = 1.0;
pub const MIN_DISTANCE: f32 = 1.5;
pub const MAX_DISTANCE: f32 = 10.0;

/// Keeps the polar angle off the poles so the camera never flips over.
pub const POLAR_EPSILON: f32 = 0.000_001;
