//! Lumen engine crate.
//!
//! Hierarchical model-view transforms ([`transform::TransformStack`]) plus the
//! platform and GPU runtime that turns a [`scene::Scene`]'s draw list into
//! frames.

pub mod coords;
pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod transform;
pub mod window;
