//! Keyboard shortcut map. Systems read from this resource instead of
//! hardcoding `KeyCode` values.

use bevy::prelude::*;
use std::collections::HashMap;

/// Every action that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindableAction {
    ToggleCameraView,
    FlyUp,
    FlyDown,
    ToggleFan,
    ToggleConstruction,
    ResetConstruction,
    TogglePanel,
}

impl BindableAction {
    pub const ALL: [Self; 7] = [
        Self::ToggleCameraView,
        Self::FlyUp,
        Self::FlyDown,
        Self::ToggleFan,
        Self::ToggleConstruction,
        Self::ResetConstruction,
        Self::TogglePanel,
    ];

    /// Human-readable label for the controls panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToggleCameraView => "Toggle camera view",
            Self::FlyUp => "Fly up (hold)",
            Self::FlyDown => "Fly down (hold)",
            Self::ToggleFan => "Toggle fan rotation",
            Self::ToggleConstruction => "Construct / deconstruct",
            Self::ResetConstruction => "Reset construction",
            Self::TogglePanel => "Show / hide panel",
        }
    }

    fn default_key(self) -> KeyCode {
        match self {
            Self::ToggleCameraView => KeyCode::KeyC,
            Self::FlyUp => KeyCode::Space,
            Self::FlyDown => KeyCode::ShiftLeft,
            Self::ToggleFan => KeyCode::KeyF,
            Self::ToggleConstruction => KeyCode::KeyB,
            Self::ResetConstruction => KeyCode::KeyR,
            Self::TogglePanel => KeyCode::Tab,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<BindableAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: BindableAction::ALL
                .iter()
                .map(|&action| (action, action.default_key()))
                .collect(),
        }
    }
}

impl KeyBindings {
    pub fn key(&self, action: BindableAction) -> KeyCode {
        self.bindings
            .get(&action)
            .copied()
            .unwrap_or_else(|| action.default_key())
    }

    pub fn set(&mut self, action: BindableAction, key: KeyCode) {
        self.bindings.insert(action, key);
    }

    /// Pairs of actions sharing the same key.
    pub fn find_conflicts(&self) -> Vec<(BindableAction, BindableAction)> {
        let mut conflicts = Vec::new();
        for (i, &a) in BindableAction::ALL.iter().enumerate() {
            for &b in &BindableAction::ALL[i + 1..] {
                if self.key(a) == self.key(b) {
                    conflicts.push((a, b));
                }
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_conflicts() {
        assert!(KeyBindings::default().find_conflicts().is_empty());
    }

    #[test]
    fn rebinding_onto_a_used_key_is_detected() {
        let mut bindings = KeyBindings::default();
        bindings.set(BindableAction::ToggleFan, KeyCode::KeyC);
        let conflicts = bindings.find_conflicts();
        assert_eq!(
            conflicts,
            vec![(BindableAction::ToggleCameraView, BindableAction::ToggleFan)]
        );
    }
}
