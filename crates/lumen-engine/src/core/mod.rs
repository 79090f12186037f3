//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the code that draws: an [`App`] receives a [`FrameCtx`] once per tick.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
