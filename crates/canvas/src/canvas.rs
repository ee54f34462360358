//! # Canvas interaction
//!
//! Turns pointer and keyboard input into scene edits. The [`Editor`] owns a
//! [`Scene`](scene_graph::Scene), the prototype shapes new objects are
//! stamped from, and the single active [`Tool`].

mod editor;
mod eraser;
mod input;
mod select;
mod tools;

pub use editor::Editor;
pub use eraser::{path_touches, EraserTool};
pub use input::{Key, Modifiers};
pub use select::{SelectTool, HOT_POINT_MARKER_SIZE};
pub use tools::{AddShapeTool, Tool, ToolKind};
