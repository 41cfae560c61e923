//! Procedural windmill rig: tower, cap, door, and the spinning fan assembly.

mod meshes;
mod spawn;
mod tests;

pub use spawn::{resolve_rig, spawn_windmill, spin_fan, Fan, FanState, WindmillRig, WindmillRoot};
