use bevy::prelude::*;

use crate::construction::ConstructionState;

/// Requests from the UI and keyboard to the construction driver.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionCommand {
    Construct,
    Deconstruct,
    Toggle,
    Reset,
}

/// Emitted once when a construct or deconstruct run reaches its end keyframe.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionCompleted {
    /// The settled state the animator landed in.
    pub settled: ConstructionState,
}
