//! # Core geometry and plumbing shared by every sketch crate
//!
//! This crate provides the leaf types the rest of the workspace builds on:
//! points and axis-aligned bounds, the distance functions used for hit
//! testing, the drawing capability shapes render through, and the
//! non-owning listener registry behind shape and scene notifications.

pub mod bounds;
pub mod coordinates;
pub mod distance;
pub mod listeners;
pub mod render;

pub use bounds::Bounds;
pub use coordinates::Point;
pub use distance::{distance_to_point, distance_to_segment};
pub use listeners::ListenerSet;
pub use render::Renderer;

#[cfg(any(test, feature = "test-support"))]
pub use render::{DrawCommand, RecordingRenderer};
