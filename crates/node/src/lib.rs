//! Shapes for the sketch editor.
//!
//! A shape is one of a closed set of kinds (line, ellipse, group) sharing a
//! common core: ordered hot points, a selection flag and a weak listener set.
//! Groups own their children and observe them, so edits to a child bubble up
//! as events on the group.
//!
//! Each kind also knows its own text row format; the document codec in
//! `interchange` only drives the rows through [`Shape::save`] and
//! [`Shape::load`].

mod ellipse;
mod error;
mod group;
mod line;
mod prototypes;
mod record;
mod shape;
mod shape_id;

pub use ellipse::{Ellipse, ELLIPSE_SEGMENTS};
pub use error::{RecordError, ShapeError};
pub use group::Group;
pub use line::Line;
pub use prototypes::PrototypeRegistry;
pub use shape::{Shape, ShapeKind, ShapeListener, ShapeRef, ShapeVariant};
pub use shape_id::ShapeId;
