use std::collections::HashSet;

use super::types::Key;

/// Per-frame key transitions.
///
/// `InputState` answers "is this key held?"; `InputFrame` answers "did this key go
/// down (or up) since the previous frame?". The runtime clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame (OS key-repeats excluded).
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }
}
