use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod keybinds;
pub mod status;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<control_panel::PanelVisible>()
            .init_resource::<status::StatusMessage>()
            .add_systems(
                Update,
                (
                    keybinds::viewer_keybinds,
                    control_panel::control_panel_ui,
                    status::watch_construction_completed,
                    status::tick_status_message,
                    status::status_overlay_ui,
                ),
            );
    }
}
