//! World model: grid + pose + movement rules.
//!
//! Movement is an atomic accept/reject step: the candidate displacement is
//! applied, the destination cell is checked, and a wall destination reverts
//! the whole move. No sliding along walls and no per-axis resolution; this is
//! an intentional simplification, not a physics solver.

use crate::grid::Grid;
use crate::pose::{heading_vector, Pose};
use crate::types::{MOVE_SPEED, TURN_SPEED};

use std::f32::consts::FRAC_PI_2;

/// The owned world state: static grid plus mutable player pose.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    grid: Grid,
    pose: Pose,
    move_speed: f32,
    turn_speed: f32,
}

impl World {
    pub fn new(grid: Grid, pose: Pose) -> Self {
        Self {
            grid,
            pose,
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
        }
    }

    pub fn with_speeds(mut self, move_speed: f32, turn_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.turn_speed = turn_speed;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Advance the pose along `angle` by `move_speed * elapsed` grid units
    /// (backwards when `forward` is false), rejecting the move as a unit if
    /// the destination cell is blocked.
    ///
    /// Truncating the candidate position can only stay inside the map when
    /// the grid's outer ring is wall; [`Grid::is_blocked`] treats anything
    /// outside the map as wall regardless, so an unenclosed grid degrades to
    /// rejected moves rather than escapes.
    ///
    /// Known limitation kept from the original design: the check samples only
    /// the destination cell, so a large `elapsed` (stalled frame) can tunnel
    /// through a one-cell wall. Callers with unbounded frame times should
    /// clamp `elapsed` or sub-step.
    pub fn move_along(&mut self, angle: f32, elapsed: f32, forward: bool) {
        let step = if forward {
            self.move_speed * elapsed
        } else {
            -self.move_speed * elapsed
        };
        let (dx, dy) = heading_vector(angle);

        let saved = self.pose;
        self.pose.x += dx * step;
        self.pose.y += dy * step;

        if self.grid.is_blocked(self.pose.x, self.pose.y) {
            // Restore the saved pose so a rejected move is exactly a no-op.
            self.pose = saved;
        }
    }

    pub fn move_forward(&mut self, elapsed: f32) {
        self.move_along(self.pose.heading, elapsed, true);
    }

    pub fn move_backward(&mut self, elapsed: f32) {
        self.move_along(self.pose.heading, elapsed, false);
    }

    pub fn strafe_left(&mut self, elapsed: f32) {
        self.move_along(self.pose.heading - FRAC_PI_2, elapsed, true);
    }

    pub fn strafe_right(&mut self, elapsed: f32) {
        self.move_along(self.pose.heading + FRAC_PI_2, elapsed, true);
    }

    /// Rotation never collides, so turns are always accepted.
    pub fn turn_left(&mut self, elapsed: f32) {
        self.pose.heading -= self.turn_speed * elapsed;
    }

    pub fn turn_right(&mut self, elapsed: f32) {
        self.pose.heading += self.turn_speed * elapsed;
    }
}
