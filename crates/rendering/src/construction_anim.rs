//! Systems driving the windmill construct/deconstruct scale animation.
//!
//! The animator resource holds the timeline; these systems are the only
//! writers of scale and visibility on the tagged entities while the
//! animation owns them.

use bevy::prelude::*;

use world::construction::ConstructionAnimator;
use world::events::{ConstructionCommand, ConstructionCompleted};

/// Member of the animated object set.
#[derive(Component)]
pub struct Constructible;

/// Apply UI/keyboard commands to the animator. Visibility is forced on
/// whenever a run starts so the scale ramp, not a visibility flip, conveys
/// appearance and disappearance.
pub fn apply_construction_commands(
    mut commands_ev: EventReader<ConstructionCommand>,
    mut animator: ResMut<ConstructionAnimator>,
    mut parts: Query<(&mut Transform, &mut Visibility), With<Constructible>>,
) {
    for command in commands_ev.read() {
        let started = match command {
            ConstructionCommand::Construct => animator.construct(),
            ConstructionCommand::Deconstruct => animator.deconstruct(),
            ConstructionCommand::Toggle => animator.toggle(),
            ConstructionCommand::Reset => {
                animator.reset();
                for (mut transform, mut visibility) in &mut parts {
                    transform.scale = Vec3::ONE;
                    *visibility = Visibility::Visible;
                }
                false
            }
        };

        if started {
            for (_, mut visibility) in &mut parts {
                *visibility = Visibility::Visible;
            }
        }
    }
}

/// Tick the animator once per rendered frame and write the uniform scale
/// factor to every constructible part. An empty part set still ticks,
/// transitions, and reports completion.
pub fn drive_construction(
    mut animator: ResMut<ConstructionAnimator>,
    mut parts: Query<&mut Transform, With<Constructible>>,
    mut completed: EventWriter<ConstructionCompleted>,
) {
    let Some(frame) = animator.tick() else {
        return;
    };

    for mut transform in &mut parts {
        transform.scale = Vec3::splat(frame.scale);
    }

    if let Some(settled) = frame.completed {
        completed.send(ConstructionCompleted { settled });
    }
}
