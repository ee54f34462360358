//! # Tool System
//!
//! The active tool decides what pointer and keyboard input does to the scene.
//! Exactly one tool is active at a time; the [`Editor`](crate::Editor)
//! swaps tools between input events and always calls the outgoing tool's
//! [`Tool::on_exit`] first, so transient gesture state never leaks into the
//! next tool.
//!
//! Tools never own the scene. Every handler borrows it for the duration of
//! one event.

use crate::eraser::EraserTool;
use crate::select::SelectTool;
use crate::{Key, Modifiers};
use node::{Shape, ShapeRef};
use scene_graph::Scene;
use sketch_core::{Point, Renderer};
use strum_macros::Display;

/// Which kind of tool is active, without its state.
#[derive(Default, Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Ignores all input
    #[default]
    Idle,
    /// Stamps a copy of a prototype shape at each press
    AddShape,
    /// Selects, drags hot points, groups and reorders
    Select,
    /// Deletes every shape a freehand stroke passes over
    Eraser,
}

#[derive(Default, Debug)]
pub enum Tool {
    #[default]
    Idle,
    AddShape(AddShapeTool),
    Select(SelectTool),
    Eraser(EraserTool),
}

impl Tool {
    pub fn add_shape(prototype: ShapeRef) -> Self {
        Tool::AddShape(AddShapeTool::new(prototype))
    }

    pub fn select() -> Self {
        Tool::Select(SelectTool::default())
    }

    pub fn eraser() -> Self {
        Tool::Eraser(EraserTool::default())
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Idle => ToolKind::Idle,
            Tool::AddShape(_) => ToolKind::AddShape,
            Tool::Select(_) => ToolKind::Select,
            Tool::Eraser(_) => ToolKind::Eraser,
        }
    }

    /// Label for tool buttons and logs.
    pub fn label(&self) -> String {
        match self {
            Tool::AddShape(tool) => format!("{} ({})", self.kind(), tool.prototype.name()),
            _ => self.kind().to_string(),
        }
    }

    pub fn on_pointer_down(&mut self, scene: &Scene, point: Point, modifiers: Modifiers) {
        match self {
            Tool::Idle => {}
            Tool::AddShape(tool) => tool.on_pointer_down(scene, point),
            Tool::Select(tool) => tool.on_pointer_down(scene, point, modifiers),
            Tool::Eraser(tool) => tool.on_pointer_down(scene, point),
        }
    }

    pub fn on_pointer_up(&mut self, scene: &Scene, point: Point, _modifiers: Modifiers) {
        match self {
            Tool::Idle | Tool::AddShape(_) => {}
            Tool::Select(tool) => tool.on_pointer_up(),
            Tool::Eraser(tool) => tool.on_pointer_up(scene, point),
        }
    }

    pub fn on_pointer_drag(&mut self, scene: &Scene, point: Point) {
        match self {
            Tool::Idle | Tool::AddShape(_) => {}
            Tool::Select(tool) => tool.on_pointer_drag(point),
            Tool::Eraser(tool) => tool.on_pointer_drag(scene, point),
        }
    }

    pub fn on_key(&mut self, scene: &Scene, key: Key) {
        match self {
            Tool::Idle | Tool::AddShape(_) | Tool::Eraser(_) => {}
            Tool::Select(tool) => tool.on_key(scene, key),
        }
    }

    /// Draws tool feedback on top of the scene.
    ///
    /// Called once after each shape is rendered with `Some(shape)`, then once
    /// more with `None` for overlays that belong to the tool itself.
    pub fn on_overlay_render(&self, scene: &Scene, renderer: &mut dyn Renderer, shape: Option<&Shape>) {
        match self {
            Tool::Idle | Tool::AddShape(_) => {}
            Tool::Select(tool) => tool.on_overlay_render(scene, renderer, shape),
            Tool::Eraser(tool) => tool.on_overlay_render(renderer, shape),
        }
    }

    /// Cleanup before another tool takes over.
    pub fn on_exit(&mut self, scene: &Scene) {
        match self {
            Tool::Idle | Tool::AddShape(_) => {}
            Tool::Select(tool) => tool.on_exit(scene),
            Tool::Eraser(tool) => tool.on_exit(),
        }
    }
}

/// Creates shapes by duplicating a prototype at the pointer.
#[derive(Debug)]
pub struct AddShapeTool {
    prototype: ShapeRef,
}

impl AddShapeTool {
    pub fn new(prototype: ShapeRef) -> Self {
        Self { prototype }
    }

    pub fn prototype(&self) -> &ShapeRef {
        &self.prototype
    }

    fn on_pointer_down(&mut self, scene: &Scene, point: Point) {
        let shape = self.prototype.duplicate();
        shape.translate(point);
        scene.add(shape);
    }
}
