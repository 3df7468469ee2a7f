use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

pub const CONFIG_FILE: &str = "globe_config.toml";

static CONFIG: OnceLock<Mutex<GlobeConfig>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Get a copy of the current configuration, loading it on first use.
///
/// A missing or broken config file is not fatal: the defaults are used and a
/// warning is logged.
pub fn get_config() -> GlobeConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_FILE)));
    match config_mutex.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Re-read [`CONFIG_FILE`] and replace the cached configuration.
pub fn reload_config() -> Result<(), ConfigError> {
    reload_config_from_file(CONFIG_FILE)
}

/// Re-read `path` and replace the cached configuration. On error the cached
/// value is left untouched.
pub fn reload_config_from_file(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let new_config = GlobeConfig::load_from_file(path)?;

    // Reloading before the first get_config() seeds the cache directly
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    match config_mutex.lock() {
        Ok(mut config) => *config = new_config,
        Err(poisoned) => *poisoned.into_inner() = new_config,
    }
    Ok(())
}

fn load_or_default(path: &str) -> GlobeConfig {
    if !Path::new(path).exists() {
        log::info!("{path} not found, using built-in globe config");
        return GlobeConfig::default();
    }
    match GlobeConfig::load_from_file(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {path}: {err}");
            GlobeConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub renderer: RendererConfig,
    pub lighting: LightingConfig,
    pub globe: GlobeMeshConfig,
    pub markers: MarkerConfig,
    pub tilt: TiltConfig,
    pub controls: ControlsConfig,
}

/// Native window used when there is no host page to supply a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z.
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            distance: CAMERA_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub antialias: bool,
    pub msaa_samples: u32,
    pub transparent: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            antialias: true,
            msaa_samples: MSAA_SAMPLES,
            transparent: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_intensity: f32,
    pub point_intensity: f32,
    pub point_range: f32,
    pub point_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            point_intensity: POINT_INTENSITY,
            point_range: POINT_RANGE,
            point_position: POINT_POSITION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeMeshConfig {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub opacity: f32,
    pub emissive_intensity: f32,
}

impl Default for GlobeMeshConfig {
    fn default() -> Self {
        Self {
            radius: GLOBE_RADIUS,
            width_segments: GLOBE_SEGMENTS,
            height_segments: GLOBE_SEGMENTS,
            opacity: GLOBE_OPACITY,
            emissive_intensity: GLOBE_EMISSIVE_INTENSITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub disc_radius: f32,
    pub disc_segments: u32,
    pub orbit_radius: f32,
    pub per_ring: usize,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            disc_radius: MARKER_DISC_RADIUS,
            disc_segments: MARKER_DISC_SEGMENTS,
            orbit_radius: MARKER_ORBIT_RADIUS,
            per_ring: MARKERS_PER_RING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub x: f32,
    pub y: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { x: TILT_X, y: TILT_Y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub zoom_speed: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: DAMPING_FACTOR,
            enable_zoom: false,
            zoom_speed: ZOOM_SPEED,
            rotate_speed: ROTATE_SPEED,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

impl GlobeConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GlobeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window.width", "window needs a non-zero size"));
        }
        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid("camera.fov_degrees", "must be within (0, 180)"));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(invalid("camera.near", "must be positive and below camera.far"));
        }
        if camera.distance <= 0.0 {
            return Err(invalid("camera.distance", "must be positive"));
        }
        if self.globe.radius <= 0.0 {
            return Err(invalid("globe.radius", "must be positive"));
        }
        if self.globe.width_segments < 3 || self.globe.height_segments < 2 {
            return Err(invalid(
                "globe.width_segments",
                "need at least 3 width and 2 height segments",
            ));
        }
        if !(0.0..=1.0).contains(&self.globe.opacity) {
            return Err(invalid("globe.opacity", "must be within [0, 1]"));
        }
        if self.markers.per_ring == 0 {
            return Err(invalid("markers.per_ring", "must be at least 1"));
        }
        if self.markers.disc_segments < 3 {
            return Err(invalid("markers.disc_segments", "must be at least 3"));
        }
        let controls = &self.controls;
        if !(controls.damping_factor > 0.0 && controls.damping_factor <= 1.0) {
            return Err(invalid("controls.damping_factor", "must be within (0, 1]"));
        }
        if controls.min_distance > controls.max_distance {
            return Err(invalid(
                "controls.min_distance",
                "must not exceed controls.max_distance",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
