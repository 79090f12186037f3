//! Keyboard state polling.
//!
//! Scenes poll [`InputState`] for held keys and [`InputFrame`] for keys that went
//! down during the current frame. The runtime translates platform events into
//! [`InputEvent`]s; nothing here exposes winit types.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
