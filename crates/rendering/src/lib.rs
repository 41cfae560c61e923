use bevy::prelude::*;

pub mod camera;
pub mod construction_anim;
pub mod scene;
pub mod terrain;
pub mod windmill;

use camera::{BalconyHeight, CameraMode, CameraOrbitDrag};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraMode>()
            .init_resource::<CameraOrbitDrag>()
            .init_resource::<BalconyHeight>()
            .add_systems(
                Startup,
                (
                    scene::setup_scene,
                    camera::setup_camera,
                    terrain::spawn_terrain,
                    windmill::spawn_windmill,
                ),
            )
            .add_systems(PostStartup, windmill::resolve_rig)
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_rotate_keyboard,
                    camera::camera_fly_vertical,
                    camera::camera_zoom,
                    camera::camera_orbit_drag,
                    camera::apply_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    construction_anim::apply_construction_commands,
                    construction_anim::drive_construction,
                )
                    .chain(),
            )
            .add_systems(Update, windmill::spin_fan);
    }
}
