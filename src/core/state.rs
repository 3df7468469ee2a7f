use bevy::prelude::States;

/// Which page composition the shell is showing.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ShellState {
    /// Hero section on screen with the globe viewer mounted.
    #[default]
    Hero,
    /// Viewer unmounted, nothing is drawn.
    Detached,
}
