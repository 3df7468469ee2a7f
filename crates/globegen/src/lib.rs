pub mod config;
pub mod constants;
pub mod frame_loop;
pub mod markers;
pub mod orbit;
pub mod surface;
pub mod wireframe;

pub use config::{get_config, reload_config};
