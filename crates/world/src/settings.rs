//! Runtime-tunable viewer settings, optionally loaded from a JSON file next
//! to the binary on native targets. Missing file means defaults; a file that
//! fails to parse is reported and ignored.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub hex_size: f32,
    pub terrain_radius: u32,
    pub construct_duration: u32,
    pub fan_speed: f32,
    pub fly_speed: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            hex_size: config::HEX_SIZE,
            terrain_radius: config::TERRAIN_RADIUS,
            construct_duration: config::CONSTRUCT_DURATION_FRAMES,
            fan_speed: config::FAN_SPEED,
            fly_speed: config::FLY_SPEED,
        }
    }
}

impl ViewerSettings {
    pub const FILE_PATH: &'static str = "assets/settings.json";

    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(raw) = std::fs::read_to_string(Self::FILE_PATH) {
            match serde_json::from_str::<Self>(&raw) {
                Ok(settings) => return settings,
                Err(err) => warn!("failed to parse {}: {err}", Self::FILE_PATH),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings: ViewerSettings = serde_json::from_str(r#"{"fan_speed": 2.5}"#).unwrap();
        assert_eq!(settings.fan_speed, 2.5);
        assert_eq!(settings.hex_size, config::HEX_SIZE);
        assert_eq!(settings.construct_duration, config::CONSTRUCT_DURATION_FRAMES);
    }

    #[test]
    fn defaults_round_trip_through_json() {
        let defaults = ViewerSettings::default();
        let raw = serde_json::to_string(&defaults).unwrap();
        let parsed: ViewerSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, defaults);
    }
}
