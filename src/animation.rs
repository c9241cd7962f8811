//! Scripted box hand-off between the two conveyors.
//!
//! A large box rides the main conveyor to a stop, a small box drops in from
//! the high conveyor and merges with it, then the large box carries on to the
//! end of the line and the cycle restarts. The script only produces
//! positions and belt flags; the renderer decides what to do with them.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

pub const ARRIVAL_EPSILON: f32 = 0.001;
pub const DEFAULT_BOX_SPEED: f32 = 1.0;
/// The melt timer starts here and the small box respawns once it reaches RESPAWN_AT
pub const MELT_TIMER_START: f32 = 0.9;
pub const RESPAWN_AT: f32 = 1.0;
pub const TEXTURE_SCROLL_SPEED: f32 = 0.04;

/// Move `current` toward `target` by at most `speed * delta_time`.
/// Returns true once the target is reached; never overshoots.
pub fn move_towards(current: &mut Vec3, target: Vec3, speed: f32, delta_time: f32) -> bool {
    let to_target = target - *current;
    let distance = to_target.length();
    if distance <= ARRIVAL_EPSILON {
        *current = target;
        return true;
    }

    let step = speed * delta_time;
    if step >= distance {
        *current = target;
        true
    } else {
        *current += to_target / distance * step;
        false
    }
}

/// Step a single coordinate toward `target`, clamping at it
fn step_axis(value: &mut f32, target: f32, step: f32) {
    if *value < target {
        *value = (*value + step).min(target);
    } else {
        *value = (*value - step).max(target);
    }
}

/// Texture offset time fed to the belt shader
pub fn texture_time(elapsed: f32) -> f32 {
    elapsed * TEXTURE_SCROLL_SPEED
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Large box rides to its first stop
    Delivering,
    /// Small box slides onto the waiting large box
    Merging,
    /// Large box leaves for the end of the line
    Departing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Belt {
    Main,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConveyorWaypoints {
    pub large_spawn: Vec3,
    pub large_stop: Vec3,
    pub large_final: Vec3,
    pub small_spawn: Vec3,
}

#[derive(Debug, Clone)]
pub struct ConveyorScript {
    waypoints: ConveyorWaypoints,
    speed: f32,
    phase: Phase,
    large: Vec3,
    small: Vec3,
    melted: bool,
    melt_timer: f32,
}

impl ConveyorScript {
    pub fn new(waypoints: ConveyorWaypoints, speed: f32) -> Self {
        Self {
            waypoints,
            speed,
            phase: Phase::Delivering,
            large: waypoints.large_spawn,
            small: waypoints.small_spawn,
            melted: false,
            melt_timer: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn large_box(&self) -> Vec3 {
        self.large
    }

    pub fn small_box(&self) -> Vec3 {
        self.small
    }

    pub fn is_melted(&self) -> bool {
        self.melted
    }

    /// Advance the script; returns the new phase when a transition happened
    pub fn tick(&mut self, delta_time: f32) -> Option<Phase> {
        let before = self.phase;
        let step = self.speed * delta_time;

        match self.phase {
            Phase::Delivering => {
                self.small = self.waypoints.small_spawn;
                if move_towards(&mut self.large, self.waypoints.large_stop, self.speed, delta_time) {
                    self.phase = Phase::Merging;
                }
            }
            Phase::Merging => {
                self.large = self.waypoints.large_stop;
                if self.small.z != self.large.z {
                    step_axis(&mut self.small.z, self.large.z, step);
                } else if self.small.y != self.large.y {
                    step_axis(&mut self.small.y, self.large.y, step);
                } else {
                    self.melted = true;
                    self.melt_timer = MELT_TIMER_START;
                    self.phase = Phase::Departing;
                }
            }
            Phase::Departing => {
                self.melt_timer += delta_time;
                if self.melted && self.melt_timer >= RESPAWN_AT {
                    self.small = self.waypoints.small_spawn;
                    self.melted = false;
                }

                if move_towards(&mut self.large, self.waypoints.large_final, self.speed, delta_time) {
                    self.large = self.waypoints.large_spawn;
                    self.melted = false;
                    self.phase = Phase::Delivering;
                }
            }
        }

        (self.phase != before).then_some(self.phase)
    }

    /// Scroll direction for a belt this frame, `None` when the belt is idle
    pub fn belt_scroll(&self, belt: Belt) -> Option<Vec2> {
        let running = match belt {
            Belt::Main => self.phase != Phase::Merging,
            Belt::High => self.phase == Phase::Merging,
        };
        running.then_some(Vec2::Y)
    }
}
