//! Scene description types.
//!
//! Responsibilities:
//! - the [`Scene`] contract implemented by each tutorial scene
//! - the per-frame [`DrawList`] scene code records into
//! - renderer-agnostic materials and mesh handles
//!
//! Scene code never touches the GPU. It positions objects with a
//! `TransformStack` and records one [`DrawCmd`] per object; the render layer
//! consumes the list after the scene returns.

mod cmd;
mod contract;
mod list;
mod material;

pub use cmd::{DrawCmd, MeshId};
pub use contract::{Scene, SceneInput};
pub use list::DrawList;
pub use material::{Material, SamplingMode};
