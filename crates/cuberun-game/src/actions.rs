//! Maps raw key events to the game's action set.
//!
//! Menu navigation and state transitions consume edge-triggered presses
//! (a key fires once when it goes down); the jump uses the continuous
//! held signal. Host auto-repeat is filtered out by tracking held keys.

use std::collections::HashSet;

use cuberun_engine::{InputEvent, InputQueue};

/// Key codes the game understands (host keyboard codes).
pub mod keys {
    /// X: confirm in menus, jump while playing.
    pub const CONFIRM: u32 = 88;
    /// B: back out of the options screen.
    pub const CANCEL: u32 = 66;
    /// P: pause the game.
    pub const PAUSE: u32 = 80;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
}

/// One frame's worth of action state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionState {
    pub confirm: bool,
    pub cancel: bool,
    pub pause: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Continuous: true as long as the jump key stays down.
    pub jump_held: bool,
}

/// Tracks held keys across frames and derives per-frame action snapshots.
pub struct InputTracker {
    held: HashSet<u32>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Consume this frame's events into an action snapshot.
    /// A KeyDown for an already-held key (host auto-repeat) is ignored.
    pub fn snapshot(&mut self, input: &InputQueue) -> ActionState {
        let mut state = ActionState::default();

        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    if self.held.insert(key_code) {
                        match key_code {
                            keys::CONFIRM => state.confirm = true,
                            keys::CANCEL => state.cancel = true,
                            keys::PAUSE => state.pause = true,
                            keys::UP => state.up = true,
                            keys::DOWN => state.down = true,
                            keys::LEFT => state.left = true,
                            keys::RIGHT => state.right = true,
                            _ => {}
                        }
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    self.held.remove(&key_code);
                }
                InputEvent::Custom { .. } => {}
            }
        }

        state.jump_held = self.held.contains(&keys::CONFIRM);
        state
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(events: &[InputEvent]) -> InputQueue {
        let mut q = InputQueue::new();
        for e in events {
            q.push(*e);
        }
        q
    }

    #[test]
    fn key_down_fires_once() {
        let mut tracker = InputTracker::new();
        let q = queue(&[InputEvent::KeyDown { key_code: keys::CONFIRM }]);
        let state = tracker.snapshot(&q);
        assert!(state.confirm);

        // Still held, no new event: the press must not fire again.
        let state = tracker.snapshot(&InputQueue::new());
        assert!(!state.confirm);
        assert!(state.jump_held);
    }

    #[test]
    fn auto_repeat_is_filtered() {
        let mut tracker = InputTracker::new();
        let q = queue(&[
            InputEvent::KeyDown { key_code: keys::DOWN },
            InputEvent::KeyDown { key_code: keys::DOWN },
        ]);
        let state = tracker.snapshot(&q);
        assert!(state.down);

        let q = queue(&[InputEvent::KeyDown { key_code: keys::DOWN }]);
        let state = tracker.snapshot(&q);
        assert!(!state.down, "repeat while held must not re-fire");
    }

    #[test]
    fn key_up_releases_and_rearms() {
        let mut tracker = InputTracker::new();
        let q = queue(&[InputEvent::KeyDown { key_code: keys::CONFIRM }]);
        let state = tracker.snapshot(&q);
        assert!(state.jump_held);

        let q = queue(&[InputEvent::KeyUp { key_code: keys::CONFIRM }]);
        let state = tracker.snapshot(&q);
        assert!(!state.jump_held);

        let q = queue(&[InputEvent::KeyDown { key_code: keys::CONFIRM }]);
        let state = tracker.snapshot(&q);
        assert!(state.confirm, "release then press fires again");
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut tracker = InputTracker::new();
        let q = queue(&[InputEvent::KeyDown { key_code: 13 }]);
        let state = tracker.snapshot(&q);
        assert!(!state.confirm && !state.cancel && !state.pause);
        assert!(!state.up && !state.down && !state.left && !state.right);
    }
}
