//! Held-key tracking for terminals with and without key-release events.

use arrayvec::ArrayVec;

use crate::types::MoveAction;

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into sustained movement. Terminals that do report releases
// clear the state earlier through `release`.
const DEFAULT_HOLD_TIMEOUT_MS: u64 = 150;

/// All trackable movement actions, in a fixed order.
const ACTIONS: [MoveAction; 6] = [
    MoveAction::TurnLeft,
    MoveAction::TurnRight,
    MoveAction::Forward,
    MoveAction::Backward,
    MoveAction::StrafeLeft,
    MoveAction::StrafeRight,
];

/// Tracks which movement keys are currently held.
///
/// Time is caller-supplied in milliseconds so the tracker stays deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    // Last press time per action, indexed in ACTIONS order.
    pressed_at: [Option<u64>; 6],
    hold_timeout_ms: u64,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_timeout_ms(DEFAULT_HOLD_TIMEOUT_MS)
    }

    pub fn with_timeout_ms(hold_timeout_ms: u64) -> Self {
        Self {
            pressed_at: [None; 6],
            hold_timeout_ms,
        }
    }

    fn slot(action: MoveAction) -> usize {
        ACTIONS
            .iter()
            .position(|&a| a == action)
            .unwrap_or_default()
    }

    /// Record a key press (or auto-repeat) at `now_ms`.
    pub fn press(&mut self, action: MoveAction, now_ms: u64) {
        self.pressed_at[Self::slot(action)] = Some(now_ms);
    }

    /// Record a key release.
    pub fn release(&mut self, action: MoveAction) {
        self.pressed_at[Self::slot(action)] = None;
    }

    /// Actions still held at `now_ms`, expiring stale presses as it goes.
    pub fn active(&mut self, now_ms: u64) -> ArrayVec<MoveAction, 6> {
        let mut held = ArrayVec::new();
        for (i, action) in ACTIONS.iter().enumerate() {
            match self.pressed_at[i] {
                Some(at) if now_ms.saturating_sub(at) <= self.hold_timeout_ms => {
                    held.push(*action);
                }
                Some(_) => self.pressed_at[i] = None,
                None => {}
            }
        }
        held
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_makes_action_active() {
        let mut held = HeldKeys::new();
        held.press(MoveAction::Forward, 1000);
        assert_eq!(held.active(1000).as_slice(), &[MoveAction::Forward]);
    }

    #[test]
    fn release_clears_action() {
        let mut held = HeldKeys::new();
        held.press(MoveAction::Forward, 1000);
        held.release(MoveAction::Forward);
        assert!(held.active(1001).is_empty());
    }

    #[test]
    fn stale_press_expires_after_timeout() {
        let mut held = HeldKeys::with_timeout_ms(150);
        held.press(MoveAction::TurnLeft, 1000);
        assert_eq!(held.active(1150).len(), 1);
        assert!(held.active(1151).is_empty());
        // Expired state stays cleared.
        assert!(held.active(1000).is_empty());
    }

    #[test]
    fn repeat_press_refreshes_the_hold() {
        let mut held = HeldKeys::with_timeout_ms(150);
        held.press(MoveAction::StrafeRight, 1000);
        held.press(MoveAction::StrafeRight, 1100);
        assert_eq!(held.active(1200).len(), 1);
    }

    #[test]
    fn multiple_actions_held_at_once() {
        let mut held = HeldKeys::new();
        held.press(MoveAction::Forward, 10);
        held.press(MoveAction::TurnRight, 10);
        let active = held.active(20);
        assert!(active.contains(&MoveAction::Forward));
        assert!(active.contains(&MoveAction::TurnRight));
        assert_eq!(active.len(), 2);
    }
}
