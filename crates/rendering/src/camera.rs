use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use atlas::config::WORLD_SIZE;

const PAN_SPEED: f32 = 500.0;
const ZOOM_SPEED: f32 = 0.15;
const ZOOM_STEP: f32 = 0.8;
const MIN_DISTANCE: f32 = 150.0;
const MAX_DISTANCE: f32 = 7000.0;
const MIN_PITCH: f32 = 20.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 88.0 * std::f32::consts::PI / 180.0; // near top-down
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Orbital camera model: the camera orbits a focus point on the map plane.
#[derive(Resource)]
pub struct OrbitCamera {
    /// Ground point the camera looks at.
    pub focus: Vec3,
    /// Horizontal rotation in radians.
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH).
    pub pitch: f32,
    /// Distance from the focus point.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(WORLD_SIZE / 2.0, 0.0, WORLD_SIZE / 2.0),
            yaw: 0.0,
            pitch: 75.0_f32.to_radians(),
            distance: 2800.0,
        }
    }
}

impl OrbitCamera {
    /// Step zoom in, as used by the on-map zoom buttons.
    pub fn zoom_in(&mut self) {
        self.distance = (self.distance * ZOOM_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Step zoom out.
    pub fn zoom_out(&mut self) {
        self.distance = (self.distance / ZOOM_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Tracks left-click drag state: differentiates a feature click from a
/// camera pan. Once the cursor moves beyond `LEFT_DRAG_THRESHOLD` pixels
/// from the initial press it becomes a pan and suppresses picking.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once the cursor moved beyond the threshold.
    pub is_dragging: bool,
}

const LEFT_DRAG_THRESHOLD: f32 = 5.0;

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
    let margin = 300.0;
    focus.x = focus.x.clamp(-margin, WORLD_SIZE + margin);
    focus.z = focus.z.clamp(-margin, WORLD_SIZE + margin);
}

fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// Apply OrbitCamera state to the camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// WASD/Arrow keys: pan focus along the map plane, relative to yaw.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let scale = orbit.distance / 1000.0;

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
        let cos_yaw = orbit.yaw.cos();
        let sin_yaw = orbit.yaw.sin();
        let world_x = dir.x * cos_yaw + dir.y * sin_yaw;
        let world_z = -dir.x * sin_yaw + dir.y * cos_yaw;
        orbit.focus.x += world_x * delta;
        orbit.focus.z += world_z * delta;
        clamp_focus(&mut orbit.focus);
    }
}

/// Middle-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let scale = orbit.distance / 1000.0;

    if buttons.just_pressed(MouseButton::Middle) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Middle) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            let cos_yaw = orbit.yaw.cos();
            let sin_yaw = orbit.yaw.sin();
            let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
            let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
            orbit.focus.x += world_x * scale;
            orbit.focus.z += world_z * scale;
            clamp_focus(&mut orbit.focus);
            drag.last_pos = pos;
        }
    }
}

/// Right-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
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
            orbit.pitch = (orbit.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
            drag.last_pos = pos;
        }
    }
}

/// Left-mouse drag: pan focus (with threshold to distinguish from feature
/// clicks, which the picking system handles).
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut left_drag: ResMut<LeftClickDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let scale = orbit.distance / 1000.0;

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if left_drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !left_drag.is_dragging {
                let dist = (pos - left_drag.start_pos).length();
                if dist > LEFT_DRAG_THRESHOLD {
                    left_drag.is_dragging = true;
                    left_drag.last_pos = pos;
                }
            }

            if left_drag.is_dragging {
                let delta = pos - left_drag.last_pos;
                let cos_yaw = orbit.yaw.cos();
                let sin_yaw = orbit.yaw.sin();
                let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
                let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
                orbit.focus.x += world_x * scale;
                orbit.focus.z += world_z * scale;
                clamp_focus(&mut orbit.focus);
                left_drag.last_pos = pos;
            }
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut orbit: ResMut<OrbitCamera>) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// `+`/`-` keys: step zoom.
pub fn camera_zoom_keyboard(keys: Res<ButtonInput<KeyCode>>, mut orbit: ResMut<OrbitCamera>) {
    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        orbit.zoom_in();
    }
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        orbit.zoom_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_at_map_center() {
        let orbit = OrbitCamera::default();
        assert!((orbit.focus.x - WORLD_SIZE / 2.0).abs() < f32::EPSILON);
        assert!((orbit.focus.z - WORLD_SIZE / 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_steps_are_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom_in();
        }
        assert!((orbit.distance - MIN_DISTANCE).abs() < f32::EPSILON);

        for _ in 0..100 {
            orbit.zoom_out();
        }
        assert!((orbit.distance - MAX_DISTANCE).abs() < f32::EPSILON);
    }

    #[test]
    fn orbit_transform_keeps_camera_above_plane() {
        let orbit = OrbitCamera::default();
        let (pos, look_at) = orbit_to_transform(&orbit);
        assert!(pos.y > 0.0);
        assert_eq!(look_at, orbit.focus);
    }
}
