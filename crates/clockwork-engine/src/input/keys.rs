use std::collections::HashSet;

use super::queue::InputEvent;

// Browser `keyCode` values the scenes bind.
pub const KEY_BACKSPACE: u32 = 8;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_SPACE: u32 = 32;
pub const KEY_E: u32 = 69;
pub const KEY_F: u32 = 70;
pub const KEY_L: u32 = 76;
pub const KEY_R: u32 = 82;

/// Held keys for this frame and the previous one.
///
/// `just_pressed` compares the two snapshots, so a held key fires once
/// per press no matter how many frames it stays down or how many
/// auto-repeat `KeyDown` events the host sends.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<u32>,
    previous: HashSet<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll this frame's keys into the previous snapshot. Call before
    /// applying the frame's events.
    pub fn begin_frame(&mut self) {
        self.previous.clone_from(&self.held);
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                self.held.insert(key_code);
            }
            InputEvent::KeyUp { key_code } => {
                self.held.remove(&key_code);
            }
            _ => {}
        }
    }

    pub fn is_down(&self, key: u32) -> bool {
        self.held.contains(&key)
    }

    /// Down now, up last frame.
    pub fn just_pressed(&self, key: u32) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }

    pub fn just_released(&self, key: u32) -> bool {
        !self.held.contains(&key) && self.previous.contains(&key)
    }

    /// Forget everything (e.g. when the page loses focus).
    pub fn clear(&mut self) {
        self.held.clear();
        self.previous.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(keys: &mut KeyState, events: &[InputEvent]) {
        keys.begin_frame();
        for e in events {
            keys.apply(e);
        }
    }

    #[test]
    fn press_fires_once_while_held() {
        let mut keys = KeyState::new();
        frame(&mut keys, &[InputEvent::KeyDown { key_code: KEY_E }]);
        assert!(keys.just_pressed(KEY_E));
        // Auto-repeat on the next frame.
        frame(&mut keys, &[InputEvent::KeyDown { key_code: KEY_E }]);
        assert!(!keys.just_pressed(KEY_E));
        assert!(keys.is_down(KEY_E));
        frame(&mut keys, &[]);
        assert!(!keys.just_pressed(KEY_E));
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut keys = KeyState::new();
        frame(&mut keys, &[InputEvent::KeyDown { key_code: KEY_L }]);
        frame(&mut keys, &[InputEvent::KeyUp { key_code: KEY_L }]);
        assert!(keys.just_released(KEY_L));
        assert!(!keys.is_down(KEY_L));
        frame(&mut keys, &[InputEvent::KeyDown { key_code: KEY_L }]);
        assert!(keys.just_pressed(KEY_L));
    }

    #[test]
    fn other_events_are_ignored() {
        let mut keys = KeyState::new();
        frame(&mut keys, &[InputEvent::Wheel { delta: 1.0 }]);
        assert!(!keys.is_down(KEY_SPACE));
    }

    #[test]
    fn clear_forgets_held_keys() {
        let mut keys = KeyState::new();
        frame(&mut keys, &[InputEvent::KeyDown { key_code: KEY_R }]);
        keys.clear();
        assert!(!keys.is_down(KEY_R));
        assert!(!keys.just_pressed(KEY_R));
    }
}
