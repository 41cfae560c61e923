use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use world::construction::ConstructionState;
use world::events::ConstructionCompleted;

/// Status message shown briefly on screen.
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = 3.0;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

pub fn watch_construction_completed(
    mut events: EventReader<ConstructionCompleted>,
    mut status: ResMut<StatusMessage>,
) {
    for completed in events.read() {
        match completed.settled {
            ConstructionState::Constructed => status.set("Windmill constructed", false),
            ConstructionState::Deconstructed => status.set("Windmill deconstructed", false),
            ConstructionState::Animating { .. } => {}
        }
    }
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}

pub fn status_overlay_ui(mut contexts: EguiContexts, status: Res<StatusMessage>) {
    if !status.active() {
        return;
    }
    egui::Area::new(egui::Id::new("status_overlay"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(contexts.ctx_mut(), |ui| {
            let color = if status.is_error {
                egui::Color32::from_rgb(255, 120, 100)
            } else {
                egui::Color32::WHITE
            };
            ui.colored_label(color, &status.text);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_arms_the_timer() {
        let mut status = StatusMessage::default();
        assert!(!status.active());
        status.set("hello", false);
        assert!(status.active());
        assert_eq!(status.text, "hello");
    }
}
