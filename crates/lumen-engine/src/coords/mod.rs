//! Screen-space sizes shared by the device, renderers and projection.

mod viewport;

pub use viewport::Viewport;
