pub(crate) mod camera;
pub mod state;
