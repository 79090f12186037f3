//! Model-view transforms.
//!
//! Scene code expresses nested translate/rotate operations through a
//! [`TransformStack`]. Each draw call reads [`TransformStack::current`] as its
//! model-view matrix; the per-frame [`Projection`] is uploaded next to it.
//!
//! Convention:
//! - matrices are `glam::Mat4`, column-major (`to_cols_array()` is the uniform payload)
//! - every operation post-multiplies the current matrix (local space, like glMatrix)

mod error;
mod projection;
mod stack;

pub use error::TransformError;
pub use projection::Projection;
pub use stack::TransformStack;
