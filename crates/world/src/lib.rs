use bevy::prelude::*;

pub mod config;
pub mod construction;
pub mod error;
pub mod events;
pub mod hexgrid;
pub mod keybindings;
pub mod settings;

use construction::ConstructionAnimator;
use settings::ViewerSettings;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        let viewer_settings = ViewerSettings::load();
        let animator = ConstructionAnimator::new(viewer_settings.construct_duration)
            .unwrap_or_else(|err| {
                warn!("settings rejected ({err}); using the default animation duration");
                ConstructionAnimator::default()
            });

        app.insert_resource(viewer_settings)
            .insert_resource(animator)
            .init_resource::<keybindings::KeyBindings>()
            .add_event::<events::ConstructionCommand>()
            .add_event::<events::ConstructionCompleted>();
    }
}
