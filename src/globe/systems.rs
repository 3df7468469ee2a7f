use crate::core::camera::components::{HeroCamera, OrbitControls};
use crate::globe::components::*;
use crate::globe::resources::*;
use crate::helpers::mesh::line_mesh;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use globegen::config::{GlobeConfig, RendererConfig};
use globegen::frame_loop::FrameLoop;
use globegen::markers::marker_layout;
use globegen::orbit::OrbitSettings;
use globegen::surface::SurfaceSize;
use globegen::wireframe::LineMeshData;

/// Ambient brightness (cd/m²) for a configured intensity of 1.0.
const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 400.0;
/// Point light power (lumens) for a configured intensity of 1.0.
const POINT_LUMENS_PER_UNIT: f32 = 500_000.0;

pub fn mount_globe_viewer(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
    existing: Option<Res<GlobeViewer>>,
    container_q: Query<&Window, With<PrimaryWindow>>,
) {
    if existing.is_some() {
        warn!("Globe viewer already mounted, ignoring second mount");
        return;
    }
    let Ok(container) = container_q.single() else {
        warn!("No container window to draw into, globe viewer not mounted");
        return;
    };

    let config = &settings.0;
    let size = container_size(container);

    let scene = commands
        .spawn((
            HeroScene,
            Transform::default(),
            Visibility::default(),
            Name::new("Hero Scene"),
        ))
        .id();

    let camera = spawn_camera(&mut commands, config, size);
    spawn_point_light(&mut commands, config, scene);
    let group = spawn_globe_group(&mut commands, &mut meshes, &mut materials, config, scene);

    let mut frame_loop = FrameLoop::default();
    let handle = frame_loop.start();

    commands.insert_resource(GlobeViewer {
        scene,
        camera,
        group,
        frame_loop,
    });

    info!(
        "Globe viewer mounted at {}x{}, first frame {}",
        size.width,
        size.height,
        handle.id()
    );
}

/// Container size in logical pixels, independent of the display scale factor.
fn container_size(window: &Window) -> SurfaceSize {
    SurfaceSize::new(
        window.width().round() as u32,
        window.height().round() as u32,
    )
}

fn msaa_for(renderer: &RendererConfig) -> Msaa {
    if !renderer.antialias {
        return Msaa::Off;
    }
    match renderer.msaa_samples {
        0 | 1 => Msaa::Off,
        2 => Msaa::Sample2,
        8 => Msaa::Sample8,
        _ => Msaa::Sample4,
    }
}

fn spawn_camera(commands: &mut Commands, config: &GlobeConfig, size: SurfaceSize) -> Entity {
    let aspect_ratio = size.aspect_ratio().unwrap_or_else(|| {
        warn!(
            "Container is {}x{}, falling back to a square aspect ratio",
            size.width, size.height
        );
        1.0
    });
    let clear_color = if config.renderer.transparent {
        Color::NONE
    } else {
        Color::BLACK
    };

    commands
        .spawn((
            Camera3d::default(),
            Camera {
                clear_color: ClearColorConfig::Custom(clear_color),
                ..default()
            },
            Projection::Perspective(PerspectiveProjection {
                fov: config.camera.fov_degrees.to_radians(),
                aspect_ratio,
                near: config.camera.near,
                far: config.camera.far,
                ..default()
            }),
            msaa_for(&config.renderer),
            Transform::from_xyz(0.0, 0.0, config.camera.distance).looking_at(Vec3::ZERO, Vec3::Y),
            AmbientLight {
                color: Color::WHITE,
                brightness: config.lighting.ambient_intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
                affects_lightmapped_meshes: true,
            },
            HeroCamera,
            OrbitControls::new(OrbitSettings::from(&config.controls), Vec3::ZERO),
            HeroRenderer {
                size,
                antialias: config.renderer.antialias,
                clear_color,
            },
            Name::new("Hero Camera"),
        ))
        .id()
}

fn spawn_point_light(commands: &mut Commands, config: &GlobeConfig, scene: Entity) {
    let lighting = &config.lighting;
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: lighting.point_intensity * POINT_LUMENS_PER_UNIT,
            range: lighting.point_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(lighting.point_position)),
        HeroLight,
        ChildOf(scene),
        Name::new("Hero Point Light"),
    ));
}

fn spawn_globe_group(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &GlobeConfig,
    scene: Entity,
) -> Entity {
    let globe = &config.globe;
    let wireframe = LineMeshData::uv_sphere(globe.radius, globe.width_segments, globe.height_segments);
    let globe_mesh = meshes.add(line_mesh(&wireframe));
    let globe_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, globe.opacity),
        emissive: LinearRgba::rgb(
            globe.emissive_intensity,
            globe.emissive_intensity,
            globe.emissive_intensity,
        ),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    // One disc mesh and material shared by every marker
    let markers = &config.markers;
    let disc_mesh = meshes.add(
        Circle::new(markers.disc_radius)
            .mesh()
            .resolution(markers.disc_segments),
    );
    let disc_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let tilt = Quat::from_euler(EulerRot::XYZ, config.tilt.x, config.tilt.y, 0.0);

    commands
        .spawn((
            GlobeGroup,
            Transform::from_rotation(tilt),
            Visibility::default(),
            ChildOf(scene),
            Name::new("Globe Group"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(globe_mesh),
                MeshMaterial3d(globe_material),
                Transform::default(),
                GlobeMesh,
            ));

            for placement in marker_layout(markers) {
                parent.spawn((
                    Mesh3d(disc_mesh.clone()),
                    MeshMaterial3d(disc_material.clone()),
                    Transform::from_translation(placement.position)
                        .with_rotation(placement.rotation),
                    MarkerDot {
                        ring: placement.ring,
                        index: placement.index,
                    },
                ));
            }
        })
        .id()
}

/// Keeps camera aspect and renderer size in step with the container.
///
/// Several resizes in one frame collapse into a single re-read of the
/// container's current size.
pub fn sync_surface_size(
    mut resized: MessageReader<WindowResized>,
    container_q: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut camera_q: Query<(&mut Projection, &mut HeroRenderer), With<HeroCamera>>,
) {
    let Ok((container_entity, container)) = container_q.single() else {
        resized.clear();
        return;
    };
    let container_resized = resized
        .read()
        .fold(false, |hit, ev| hit || ev.window == container_entity);
    if !container_resized {
        return;
    }

    let size = container_size(container);
    let Some(aspect_ratio) = size.aspect_ratio() else {
        warn!(
            "Ignoring resize to {}x{}, container has no area",
            size.width, size.height
        );
        return;
    };

    for (mut projection, mut renderer) in camera_q.iter_mut() {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = aspect_ratio;
        }
        renderer.size = size;
    }
    debug!("Globe viewer resized to {}x{}", size.width, size.height);
}

/// Records one rendered frame while the loop is armed.
pub fn render_frame(mut viewer: ResMut<GlobeViewer>, mut stats: ResMut<RendererStats>) {
    viewer.frame_loop.step(|frame| {
        stats.frames_rendered += 1;
        trace!("Globe frame {frame}");
    });
}

pub fn teardown_globe_viewer(
    mut commands: Commands,
    viewer: Option<ResMut<GlobeViewer>>,
    mut stats: ResMut<RendererStats>,
) {
    let Some(mut viewer) = viewer else {
        debug!("Globe viewer not mounted, nothing to tear down");
        return;
    };

    if let Some(handle) = viewer.frame_loop.cancel() {
        debug!("Cancelled pending globe frame {}", handle.id());
    }
    dispose_renderer(&mut commands, viewer.camera, &mut stats);
    commands.entity(viewer.scene).despawn();
    commands.remove_resource::<GlobeViewer>();

    info!(
        "Globe viewer torn down after {} frames",
        viewer.frame_loop.frames()
    );
}

/// Drops the camera and with it the render target and view resources.
fn dispose_renderer(commands: &mut Commands, camera: Entity, stats: &mut RendererStats) {
    commands.entity(camera).despawn();
    stats.disposals += 1;
}
