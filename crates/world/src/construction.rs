//! Construct/deconstruct animation state machine.
//!
//! The animator owns only timeline state; the rendering layer applies the
//! per-frame scale factor to the tagged entities and forwards completion as
//! an event. Ticked once per rendered frame by a single call site.

use bevy::prelude::*;

use crate::config::{CONSTRUCT_DURATION_FRAMES, MIN_CONSTRUCT_SCALE};
use crate::error::ViewerError;

/// Which way the timeline is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Constructing,
    Deconstructing,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Constructing => Self::Deconstructing,
            Self::Deconstructing => Self::Constructing,
        }
    }

    fn start_scale(self) -> f32 {
        match self {
            Self::Constructing => MIN_CONSTRUCT_SCALE,
            Self::Deconstructing => 1.0,
        }
    }

    fn end_scale(self) -> f32 {
        match self {
            Self::Constructing => 1.0,
            Self::Deconstructing => MIN_CONSTRUCT_SCALE,
        }
    }

    fn settled(self) -> ConstructionState {
        match self {
            Self::Constructing => ConstructionState::Constructed,
            Self::Deconstructing => ConstructionState::Deconstructed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionState {
    Constructed,
    Deconstructed,
    Animating { direction: Direction, elapsed: u32 },
}

/// What one `tick` produced: the uniform scale factor for every animated
/// object this frame, and the settled state when a run just finished.
/// `completed` is reported exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub scale: f32,
    pub completed: Option<ConstructionState>,
}

#[derive(Resource, Debug, Clone)]
pub struct ConstructionAnimator {
    duration: u32,
    state: ConstructionState,
}

impl Default for ConstructionAnimator {
    fn default() -> Self {
        Self {
            duration: CONSTRUCT_DURATION_FRAMES,
            state: ConstructionState::Constructed,
        }
    }
}

impl ConstructionAnimator {
    /// A zero-frame animation would never reach completion and stall the
    /// state machine, so it is rejected up front.
    pub fn new(duration_frames: u32) -> Result<Self, ViewerError> {
        if duration_frames == 0 {
            return Err(ViewerError::InvalidDuration(duration_frames));
        }
        Ok(Self {
            duration: duration_frames,
            state: ConstructionState::Constructed,
        })
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn state(&self) -> ConstructionState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, ConstructionState::Animating { .. })
    }

    /// Start building up. No-op when already constructed; any running
    /// animation is cancelled and the timeline restarts from zero (no
    /// blending from the current scale). Returns whether a run started.
    pub fn construct(&mut self) -> bool {
        if self.state == ConstructionState::Constructed {
            return false;
        }
        self.start(Direction::Constructing);
        true
    }

    /// Start tearing down; symmetric to [`construct`](Self::construct).
    pub fn deconstruct(&mut self) -> bool {
        if self.state == ConstructionState::Deconstructed {
            return false;
        }
        self.start(Direction::Deconstructing);
        true
    }

    /// From a settled state, run the other way; mid-animation, switch to the
    /// opposite direction from elapsed zero.
    pub fn toggle(&mut self) -> bool {
        match self.state {
            ConstructionState::Constructed => self.deconstruct(),
            ConstructionState::Deconstructed => self.construct(),
            ConstructionState::Animating { direction, .. } => {
                self.start(direction.opposite());
                true
            }
        }
    }

    /// Force the constructed state immediately, with no animation and no
    /// completion report.
    pub fn reset(&mut self) {
        self.state = ConstructionState::Constructed;
    }

    /// Advance the timeline by one frame. Returns `None` while settled.
    pub fn tick(&mut self) -> Option<FrameOutput> {
        let ConstructionState::Animating { direction, elapsed } = self.state else {
            return None;
        };

        let elapsed = elapsed + 1;
        if elapsed >= self.duration {
            let settled = direction.settled();
            self.state = settled;
            return Some(FrameOutput {
                scale: direction.end_scale(),
                completed: Some(settled),
            });
        }

        self.state = ConstructionState::Animating { direction, elapsed };
        Some(FrameOutput {
            scale: scale_at(direction, elapsed, self.duration),
            completed: None,
        })
    }

    /// Scale factor the object set should currently show.
    pub fn current_scale(&self) -> f32 {
        match self.state {
            ConstructionState::Constructed => 1.0,
            ConstructionState::Deconstructed => MIN_CONSTRUCT_SCALE,
            ConstructionState::Animating { direction, elapsed } => {
                scale_at(direction, elapsed, self.duration)
            }
        }
    }

    /// Timeline progress in [0, 1]; settled states read as complete.
    pub fn progress(&self) -> f32 {
        match self.state {
            ConstructionState::Animating { elapsed, .. } => elapsed as f32 / self.duration as f32,
            _ => 1.0,
        }
    }

    fn start(&mut self, direction: Direction) {
        self.state = ConstructionState::Animating {
            direction,
            elapsed: 0,
        };
    }
}

/// Linear interpolation between the direction's keyframes, parameterised by
/// `elapsed / duration` clamped to [0, 1]. No easing, no per-object stagger.
fn scale_at(direction: Direction, elapsed: u32, duration: u32) -> f32 {
    let t = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
    let start = direction.start_scale();
    let end = direction.end_scale();
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(animator: &mut ConstructionAnimator) -> u32 {
        let mut completions = 0;
        for _ in 0..animator.duration() * 2 {
            if let Some(frame) = animator.tick() {
                if frame.completed.is_some() {
                    completions += 1;
                }
            }
        }
        completions
    }

    #[test]
    fn rejects_zero_duration() {
        assert_eq!(
            ConstructionAnimator::new(0).unwrap_err(),
            ViewerError::InvalidDuration(0)
        );
    }

    #[test]
    fn deconstruct_round_trip() {
        let mut animator = ConstructionAnimator::new(60).unwrap();
        assert!(animator.deconstruct());

        let mut completions = 0;
        let mut last_scale = 1.0;
        for _ in 0..60 {
            let frame = animator.tick().unwrap();
            last_scale = frame.scale;
            if frame.completed.is_some() {
                completions += 1;
            }
        }

        assert_eq!(last_scale, MIN_CONSTRUCT_SCALE);
        assert_eq!(animator.state(), ConstructionState::Deconstructed);
        assert_eq!(completions, 1);
        // Settled: no further frames, no second completion report.
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn construct_round_trip() {
        let mut animator = ConstructionAnimator::new(10).unwrap();
        animator.deconstruct();
        run_to_completion(&mut animator);
        assert_eq!(animator.state(), ConstructionState::Deconstructed);

        assert!(animator.construct());
        let mut completions = 0;
        let mut last_scale = 0.0;
        for _ in 0..10 {
            let frame = animator.tick().unwrap();
            last_scale = frame.scale;
            if frame.completed.is_some() {
                completions += 1;
            }
        }

        assert_eq!(last_scale, 1.0);
        assert_eq!(animator.state(), ConstructionState::Constructed);
        assert_eq!(completions, 1);
    }

    #[test]
    fn construct_is_idempotent_while_constructed() {
        let mut animator = ConstructionAnimator::new(30).unwrap();
        assert!(!animator.construct());
        assert!(!animator.construct());
        assert_eq!(animator.state(), ConstructionState::Constructed);
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn interruption_restarts_from_zero_in_opposite_direction() {
        let mut animator = ConstructionAnimator::new(60).unwrap();
        animator.deconstruct();
        for _ in 0..20 {
            animator.tick();
        }

        assert!(animator.construct());
        assert_eq!(
            animator.state(),
            ConstructionState::Animating {
                direction: Direction::Constructing,
                elapsed: 0
            }
        );

        // First frame after the restart sits near the construct start
        // keyframe, not blended from the interrupted scale.
        let frame = animator.tick().unwrap();
        assert!(frame.scale < 0.05, "scale was {}", frame.scale);
    }

    #[test]
    fn toggle_switches_direction_mid_animation() {
        let mut animator = ConstructionAnimator::new(60).unwrap();
        animator.deconstruct();
        for _ in 0..15 {
            animator.tick();
        }

        assert!(animator.toggle());
        assert_eq!(
            animator.state(),
            ConstructionState::Animating {
                direction: Direction::Constructing,
                elapsed: 0
            }
        );

        assert!(animator.toggle());
        assert_eq!(
            animator.state(),
            ConstructionState::Animating {
                direction: Direction::Deconstructing,
                elapsed: 0
            }
        );
    }

    #[test]
    fn toggle_from_settled_states() {
        let mut animator = ConstructionAnimator::new(10).unwrap();
        assert!(animator.toggle());
        run_to_completion(&mut animator);
        assert_eq!(animator.state(), ConstructionState::Deconstructed);

        assert!(animator.toggle());
        run_to_completion(&mut animator);
        assert_eq!(animator.state(), ConstructionState::Constructed);
    }

    #[test]
    fn midpoint_scale_is_linear() {
        let mut animator = ConstructionAnimator::new(60).unwrap();
        animator.deconstruct();

        let mut scale = 1.0;
        for _ in 0..30 {
            scale = animator.tick().unwrap().scale;
        }

        // Halfway through a 1.0 -> 0.001 ramp.
        assert!((scale - 0.5005).abs() < 1e-4, "scale was {scale}");
        assert!((animator.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reset_forces_constructed_without_completion() {
        let mut animator = ConstructionAnimator::new(60).unwrap();
        animator.deconstruct();
        for _ in 0..10 {
            animator.tick();
        }

        animator.reset();
        assert_eq!(animator.state(), ConstructionState::Constructed);
        assert_eq!(animator.current_scale(), 1.0);
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn current_scale_tracks_state() {
        let mut animator = ConstructionAnimator::new(4).unwrap();
        assert_eq!(animator.current_scale(), 1.0);

        animator.deconstruct();
        animator.tick();
        let mid = animator.current_scale();
        assert!(mid < 1.0 && mid > MIN_CONSTRUCT_SCALE);

        run_to_completion(&mut animator);
        assert_eq!(animator.current_scale(), MIN_CONSTRUCT_SCALE);
    }
}
