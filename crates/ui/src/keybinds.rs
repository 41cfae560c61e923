//! Keyboard dispatch for the viewer's toggles. Held fly keys are handled in
//! `rendering::camera`; everything here is edge-triggered.

use bevy::prelude::*;

use rendering::camera::CameraMode;
use rendering::windmill::FanState;
use world::events::ConstructionCommand;
use world::keybindings::{BindableAction, KeyBindings};

use crate::control_panel::PanelVisible;
use crate::status::StatusMessage;

pub fn viewer_keybinds(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut mode: ResMut<CameraMode>,
    mut fan: Option<ResMut<FanState>>,
    mut panel: ResMut<PanelVisible>,
    mut commands_ev: EventWriter<ConstructionCommand>,
    mut status: ResMut<StatusMessage>,
) {
    if keys.just_pressed(bindings.key(BindableAction::ToggleCameraView)) {
        let next = mode.toggled();
        *mode = next;
        status.set(format!("{} view", next.label()), false);
    }

    if keys.just_pressed(bindings.key(BindableAction::ToggleFan)) {
        if let Some(fan) = fan.as_mut() {
            fan.spinning = !fan.spinning;
        }
    }

    if keys.just_pressed(bindings.key(BindableAction::ToggleConstruction)) {
        commands_ev.send(ConstructionCommand::Toggle);
    }

    if keys.just_pressed(bindings.key(BindableAction::ResetConstruction)) {
        commands_ev.send(ConstructionCommand::Reset);
    }

    if keys.just_pressed(bindings.key(BindableAction::TogglePanel)) {
        panel.0 = !panel.0;
    }
}
