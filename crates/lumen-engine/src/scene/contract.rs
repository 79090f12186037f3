use crate::geometry::Geometry;
use crate::input::{InputFrame, InputState};
use crate::transform::{TransformError, TransformStack};

use super::DrawList;

/// Input available to a scene during a tick.
#[derive(Debug, Copy, Clone)]
pub struct SceneInput<'a> {
    /// Keys currently held.
    pub keys: &'a InputState,
    /// Key transitions since the previous tick.
    pub frame: &'a InputFrame,
    /// Seconds since the previous tick.
    pub dt: f32,
}

/// A renderable scene.
///
/// The frame driver calls, once per tick and in this order:
/// 1. [`handle_keys`](Scene::handle_keys)
/// 2. [`draw`](Scene::draw), after resetting the transform stack and clearing the list
/// 3. [`animate`](Scene::animate)
pub trait Scene {
    /// Human-readable name, used for the window title and logs.
    fn title(&self) -> &str;

    /// Geometry uploaded once before the first frame. `MeshId(i)` refers to entry `i`.
    fn meshes(&self) -> Vec<Geometry>;

    /// Polls key state. Most scenes are not interactive.
    fn handle_keys(&mut self, input: &SceneInput<'_>) {
        let _ = input;
    }

    /// Records this frame's draw calls.
    ///
    /// Save/restore misuse is reported through `TransformError` and aborts the frame.
    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError>;

    /// Advances animation state by `dt` seconds.
    fn animate(&mut self, dt: f32);
}
