// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use globe_hero::ShellPlugin;

fn main() {
    let mut app = App::new();
    app.insert_resource(ClearColor(Color::NONE))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(hero_window()),
            ..default()
        }))
        .add_plugins(ShellPlugin);

    #[cfg(debug_assertions)]
    {
        app.add_plugins(LogDiagnosticsPlugin::default());
    }

    app.run();
}

fn hero_window() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#hero-canvas".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = globegen::get_config().window;
        Window {
            title: window.title,
            resolution: bevy::window::WindowResolution::new(window.width, window.height),
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
