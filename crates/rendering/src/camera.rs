use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use world::config::{
    MAX_FLY_HEIGHT, MIN_FLY_HEIGHT, WINDMILL_CAP_HEIGHT, WINDMILL_TOWER_HEIGHT,
};
use world::keybindings::{BindableAction, KeyBindings};
use world::settings::ViewerSettings;

const PAN_SPEED: f32 = 20.0;
const ROTATE_SPEED: f32 = 1.5;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 6.0;
const MAX_DISTANCE: f32 = 140.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Keep the focus point within sight of the terrain field.
const PAN_LIMIT: f32 = 60.0;
/// Balcony view looks slightly downhill toward the terrain.
const BALCONY_LOOK_DROP: f32 = 0.15;

/// Which view the single `Camera3d` renders from.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Free orbit around a ground focus point.
    #[default]
    Orbit,
    /// Eye at the windmill cap, looking outward along the orbit yaw.
    Balcony,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Orbit => Self::Balcony,
            Self::Balcony => Self::Orbit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Orbit => "Orbit",
            Self::Balcony => "Balcony",
        }
    }
}

/// Orbital camera model: camera orbits around a focus point.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    /// Horizontal rotation in radians.
    pub yaw: f32,
    /// Elevation angle in radians, clamped between MIN_PITCH and MAX_PITCH.
    pub pitch: f32,
    /// Distance from focus point.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, WINDMILL_TOWER_HEIGHT * 0.5, 0.0),
            yaw: 0.6,
            pitch: 30.0_f32.to_radians(),
            distance: 45.0,
        }
    }
}

/// Balcony-mode eye height, adjusted by the fly keys.
#[derive(Resource)]
pub struct BalconyHeight(pub f32);

impl Default for BalconyHeight {
    fn default() -> Self {
        Self(WINDMILL_TOWER_HEIGHT + WINDMILL_CAP_HEIGHT)
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

fn clamp_focus(focus: &mut Vec3) {
    focus.x = focus.x.clamp(-PAN_LIMIT, PAN_LIMIT);
    focus.z = focus.z.clamp(-PAN_LIMIT, PAN_LIMIT);
}

// Spherical to cartesian offset from focus.
fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// System: write the active view's transform to the camera each frame.
pub fn apply_camera(
    mode: Res<CameraMode>,
    orbit: Res<OrbitCamera>,
    balcony: Res<BalconyHeight>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    match *mode {
        CameraMode::Orbit => {
            let (pos, look_at) = orbit_to_transform(&orbit);
            *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
        }
        CameraMode::Balcony => {
            let eye = Vec3::new(0.0, balcony.0, 0.0);
            let dir = Vec3::new(orbit.yaw.sin(), -BALCONY_LOOK_DROP, orbit.yaw.cos());
            *transform = Transform::from_translation(eye).looking_at(eye + dir, Vec3::Y);
        }
    }
}

/// WASD/Arrow keys: pan focus along the ground plane, relative to yaw.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mode: Res<CameraMode>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if *mode != CameraMode::Orbit {
        return;
    }
    let scale = orbit.distance / 45.0;

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }

    if dir != Vec2::ZERO {
        let dir = dir.normalize();
        let delta = PAN_SPEED * scale * time.delta_secs();
        // Rotate movement direction by current yaw
        let cos_yaw = orbit.yaw.cos();
        let sin_yaw = orbit.yaw.sin();
        let world_x = dir.x * cos_yaw + dir.y * sin_yaw;
        let world_z = -dir.x * sin_yaw + dir.y * cos_yaw;
        orbit.focus.x += world_x * delta;
        orbit.focus.z += world_z * delta;
        clamp_focus(&mut orbit.focus);
    }
}

/// Q/E: rotate yaw. Drives the look direction in both camera modes.
pub fn camera_rotate_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let mut delta = 0.0;
    if keys.pressed(KeyCode::KeyQ) {
        delta -= 1.0;
    }
    if keys.pressed(KeyCode::KeyE) {
        delta += 1.0;
    }
    if delta != 0.0 {
        orbit.yaw += delta * ROTATE_SPEED * time.delta_secs();
    }
}

/// Fly keys (held): move the eye vertically, clamped to the fly range. In
/// orbit mode this lifts the focus point; on the balcony it lifts the eye.
pub fn camera_fly_vertical(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    bindings: Res<KeyBindings>,
    settings: Res<ViewerSettings>,
    mode: Res<CameraMode>,
    mut orbit: ResMut<OrbitCamera>,
    mut balcony: ResMut<BalconyHeight>,
) {
    let mut dir = 0.0;
    if keys.pressed(bindings.key(BindableAction::FlyUp)) {
        dir += 1.0;
    }
    if keys.pressed(bindings.key(BindableAction::FlyDown)) {
        dir -= 1.0;
    }
    if dir == 0.0 {
        return;
    }

    let delta = dir * settings.fly_speed * time.delta_secs();
    match *mode {
        CameraMode::Orbit => {
            orbit.focus.y = (orbit.focus.y + delta).clamp(MIN_FLY_HEIGHT, MAX_FLY_HEIGHT);
        }
        CameraMode::Balcony => {
            balcony.0 = (balcony.0 + delta).clamp(MIN_FLY_HEIGHT, MAX_FLY_HEIGHT);
        }
    }
}

/// Scroll wheel: zoom (change orbit distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mode: Res<CameraMode>,
    mut orbit: ResMut<OrbitCamera>,
) {
    for evt in scroll_evts.read() {
        if *mode != CameraMode::Orbit {
            continue;
        }
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Right-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mode: Res<CameraMode>,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.yaw += delta.x * ORBIT_SENSITIVITY;
            if *mode == CameraMode::Orbit {
                orbit.pitch =
                    (orbit.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
            }
            drag.last_pos = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_transform_points_at_focus() {
        let orbit = OrbitCamera {
            focus: Vec3::new(1.0, 2.0, 3.0),
            yaw: 0.0,
            pitch: std::f32::consts::FRAC_PI_4,
            distance: 10.0,
        };
        let (pos, look_at) = orbit_to_transform(&orbit);
        assert_eq!(look_at, orbit.focus);
        assert!((pos.distance(orbit.focus) - orbit.distance).abs() < 1e-4);
        assert!(pos.y > orbit.focus.y);
    }

    #[test]
    fn focus_clamp_stays_within_pan_limit() {
        let mut focus = Vec3::new(500.0, 0.0, -500.0);
        clamp_focus(&mut focus);
        assert_eq!(focus.x, PAN_LIMIT);
        assert_eq!(focus.z, -PAN_LIMIT);
    }

    #[test]
    fn mode_toggle_is_an_involution() {
        assert_eq!(CameraMode::Orbit.toggled(), CameraMode::Balcony);
        assert_eq!(CameraMode::Orbit.toggled().toggled(), CameraMode::Orbit);
    }
}
