//! Main controls window: camera view, fan rotation, and the
//! construct/deconstruct animation.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::camera::CameraMode;
use rendering::windmill::FanState;
use world::construction::{ConstructionAnimator, ConstructionState, Direction};
use world::events::ConstructionCommand;
use world::keybindings::{BindableAction, KeyBindings};

/// Whether the main controls window is visible.
#[derive(Resource)]
pub struct PanelVisible(pub bool);

impl Default for PanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn control_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<PanelVisible>,
    mut mode: ResMut<CameraMode>,
    mut fan: Option<ResMut<FanState>>,
    animator: Res<ConstructionAnimator>,
    bindings: Res<KeyBindings>,
    mut commands_ev: EventWriter<ConstructionCommand>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("Windmill Controls")
        .open(&mut open)
        .resizable(false)
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            // --- Camera ---
            ui.label("Camera:");
            ui.horizontal(|ui| {
                for candidate in [CameraMode::Orbit, CameraMode::Balcony] {
                    if ui
                        .selectable_label(*mode == candidate, candidate.label())
                        .clicked()
                    {
                        *mode = candidate;
                    }
                }
            });

            ui.separator();

            // --- Fan ---
            if let Some(fan) = fan.as_mut() {
                ui.checkbox(&mut fan.spinning, "Spin fan");
                ui.add(egui::Slider::new(&mut fan.speed, 0.1..=6.0).text("rad/s"));
            }

            ui.separator();

            // --- Construction ---
            ui.label(format!("State: {}", state_label(animator.state())));
            if animator.is_animating() {
                ui.add(egui::ProgressBar::new(animator.progress()).show_percentage());
            }
            ui.horizontal(|ui| {
                if ui.button("Construct").clicked() {
                    commands_ev.send(ConstructionCommand::Construct);
                }
                if ui.button("Deconstruct").clicked() {
                    commands_ev.send(ConstructionCommand::Deconstruct);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Toggle").clicked() {
                    commands_ev.send(ConstructionCommand::Toggle);
                }
                if ui.button("Reset").clicked() {
                    commands_ev.send(ConstructionCommand::Reset);
                }
            });

            ui.separator();

            // --- Keys ---
            egui::CollapsingHeader::new("Keybindings").show(ui, |ui| {
                for action in BindableAction::ALL {
                    ui.label(format!("{:?} - {}", bindings.key(action), action.label()));
                }
                for (a, b) in bindings.find_conflicts() {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 180, 50),
                        format!("Conflict: {} / {}", a.label(), b.label()),
                    );
                }
            });
        });

    if !open {
        visible.0 = false;
    }
}

fn state_label(state: ConstructionState) -> &'static str {
    match state {
        ConstructionState::Constructed => "Constructed",
        ConstructionState::Deconstructed => "Deconstructed",
        ConstructionState::Animating {
            direction: Direction::Constructing,
            ..
        } => "Constructing...",
        ConstructionState::Animating {
            direction: Direction::Deconstructing,
            ..
        } => "Deconstructing...",
    }
}
