use bevy::prelude::*;

use world::config::{
    WINDMILL_BLADE_LENGTH, WINDMILL_BLADE_WIDTH, WINDMILL_CAP_HEIGHT, WINDMILL_TOWER_HEIGHT,
    WINDMILL_TOWER_RADIUS,
};
use world::error::ViewerError;
use world::settings::ViewerSettings;

use crate::construction_anim::Constructible;

use super::meshes::build_blade_mesh;

/// Marker on the windmill's root entity.
#[derive(Component)]
pub struct WindmillRoot;

/// Marker on the spinning fan assembly (hub + blades).
#[derive(Component)]
pub struct Fan;

/// Fan spin controls.
#[derive(Resource)]
pub struct FanState {
    pub spinning: bool,
    /// Radians per second.
    pub speed: f32,
}

/// Typed references into the windmill hierarchy, resolved once after spawn.
/// Replaces lookup-by-name: systems address the fan directly.
#[derive(Resource, Debug)]
pub struct WindmillRig {
    pub root: Entity,
    pub fan: Entity,
}

/// Startup system: build the windmill from meshes on the origin tile. Every
/// visible part is `Constructible` so the construction animation covers the
/// whole model.
pub fn spawn_windmill(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
) {
    let plaster = materials.add(StandardMaterial {
        base_color: Color::srgb(0.91, 0.88, 0.80),
        perceptual_roughness: 0.8,
        ..default()
    });
    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.30, 0.18),
        perceptual_roughness: 0.9,
        ..default()
    });
    let sail = materials.add(StandardMaterial {
        base_color: Color::srgb(0.82, 0.80, 0.72),
        perceptual_roughness: 0.7,
        ..default()
    });

    let base_mesh = meshes.add(Cylinder::new(WINDMILL_TOWER_RADIUS * 1.3, 0.5));
    let tower_mesh = meshes.add(Cylinder::new(WINDMILL_TOWER_RADIUS, WINDMILL_TOWER_HEIGHT));
    let cap_mesh = meshes.add(Cone {
        radius: WINDMILL_TOWER_RADIUS * 1.15,
        height: WINDMILL_CAP_HEIGHT,
    });
    let door_mesh = meshes.add(Cuboid::new(0.8, 1.6, 0.2));
    let hub_mesh = meshes.add(Cylinder::new(0.3, 0.6));
    let blade_mesh = meshes.add(build_blade_mesh(WINDMILL_BLADE_LENGTH, WINDMILL_BLADE_WIDTH));

    let fan_y = WINDMILL_TOWER_HEIGHT + WINDMILL_CAP_HEIGHT * 0.3;
    let fan_z = WINDMILL_TOWER_RADIUS + 0.5;

    commands
        .spawn((
            WindmillRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Constructible,
                Mesh3d(base_mesh),
                MeshMaterial3d(wood.clone()),
                Transform::from_xyz(0.0, 0.25, 0.0),
                Visibility::default(),
            ));
            parent.spawn((
                Constructible,
                Mesh3d(tower_mesh),
                MeshMaterial3d(plaster),
                Transform::from_xyz(0.0, WINDMILL_TOWER_HEIGHT / 2.0, 0.0),
                Visibility::default(),
            ));
            parent.spawn((
                Constructible,
                Mesh3d(cap_mesh),
                MeshMaterial3d(wood.clone()),
                Transform::from_xyz(0.0, WINDMILL_TOWER_HEIGHT + WINDMILL_CAP_HEIGHT / 2.0, 0.0),
                Visibility::default(),
            ));
            parent.spawn((
                Constructible,
                Mesh3d(door_mesh),
                MeshMaterial3d(wood.clone()),
                Transform::from_xyz(0.0, 0.8, WINDMILL_TOWER_RADIUS),
                Visibility::default(),
            ));

            parent
                .spawn((Fan, Transform::from_xyz(0.0, fan_y, fan_z), Visibility::default()))
                .with_children(|fan| {
                    // Hub axle points out of the cap along +Z.
                    fan.spawn((
                        Constructible,
                        Mesh3d(hub_mesh),
                        MeshMaterial3d(wood),
                        Transform::from_rotation(Quat::from_rotation_x(
                            std::f32::consts::FRAC_PI_2,
                        )),
                        Visibility::default(),
                    ));
                    for k in 0..4 {
                        fan.spawn((
                            Constructible,
                            Mesh3d(blade_mesh.clone()),
                            MeshMaterial3d(sail.clone()),
                            Transform::from_rotation(Quat::from_rotation_z(
                                k as f32 * std::f32::consts::FRAC_PI_2,
                            )),
                            Visibility::default(),
                        ));
                    }
                });
        });

    commands.insert_resource(FanState {
        spinning: true,
        speed: settings.fan_speed,
    });
}

/// PostStartup system: locate the fan entity under the windmill root exactly
/// once and keep typed references. A missing part is a build error in the
/// rig and is surfaced, not silently ignored.
pub fn resolve_rig(
    mut commands: Commands,
    roots: Query<(Entity, &Children), With<WindmillRoot>>,
    fans: Query<(), With<Fan>>,
) {
    let Ok((root, children)) = roots.get_single() else {
        error!("{}", ViewerError::ComponentNotFound("windmill root"));
        return;
    };

    match children.iter().copied().find(|&child| fans.get(child).is_ok()) {
        Some(fan) => {
            commands.insert_resource(WindmillRig { root, fan });
        }
        None => error!("{}", ViewerError::ComponentNotFound("fan assembly")),
    }
}

/// Rotate the fan assembly around its axle while spinning is enabled.
pub fn spin_fan(
    time: Res<Time>,
    fan_state: Res<FanState>,
    rig: Option<Res<WindmillRig>>,
    mut transforms: Query<&mut Transform, With<Fan>>,
) {
    if !fan_state.spinning {
        return;
    }
    let Some(rig) = rig else {
        return;
    };
    let Ok(mut transform) = transforms.get_mut(rig.fan) else {
        return;
    };
    transform.rotate_local_z(fan_state.speed * time.delta_secs());
}
