//! The editing session: one scene, its prototypes and the active tool.

use crate::{Key, Modifiers, Tool, ToolKind};
use node::PrototypeRegistry;
use scene_graph::Scene;
use sketch_core::{Point, Renderer};
use std::rc::Rc;

/// Routes host input to the active tool and paints the scene.
///
/// Input handlers run to completion before the next one starts; tool
/// switches only happen between them.
#[derive(Debug)]
pub struct Editor {
    scene: Rc<Scene>,
    prototypes: PrototypeRegistry,
    tool: Tool,
}

impl Editor {
    pub fn new(prototypes: PrototypeRegistry) -> Self {
        Self::with_scene(Scene::new(), prototypes)
    }

    pub fn with_scene(scene: Rc<Scene>, prototypes: PrototypeRegistry) -> Self {
        Self {
            scene,
            prototypes,
            tool: Tool::Idle,
        }
    }

    pub fn scene(&self) -> &Rc<Scene> {
        &self.scene
    }

    pub fn prototypes(&self) -> &PrototypeRegistry {
        &self.prototypes
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    /// Makes `tool` active, letting the current one clean up first.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool.on_exit(&self.scene);
        log::info!("tool: {} -> {}", self.tool.label(), tool.label());
        self.tool = tool;
    }

    /// Activates the add-shape tool for the prototype registered under `tag`.
    /// Returns `false` if no such prototype exists.
    pub fn set_add_shape_tool(&mut self, tag: &str) -> bool {
        match self.prototypes.get(tag) {
            Some(prototype) => {
                let tool = Tool::add_shape(prototype.clone());
                self.set_tool(tool);
                true
            }
            None => {
                log::warn!("no prototype registered for {}", tag);
                false
            }
        }
    }

    pub fn pointer_down(&mut self, point: Point, modifiers: Modifiers) {
        self.tool.on_pointer_down(&self.scene, point, modifiers);
    }

    pub fn pointer_up(&mut self, point: Point, modifiers: Modifiers) {
        self.tool.on_pointer_up(&self.scene, point, modifiers);
    }

    pub fn pointer_drag(&mut self, point: Point) {
        self.tool.on_pointer_drag(&self.scene, point);
    }

    /// Escape cancels back to [`Tool::Idle`]; every other key goes to the
    /// active tool.
    pub fn key(&mut self, key: Key) {
        if key == Key::Escape {
            self.set_tool(Tool::Idle);
        } else {
            self.tool.on_key(&self.scene, key);
        }
    }

    /// Renders every shape in z-order, each followed by its tool overlay, then
    /// the tool's own overlay.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        for shape in self.scene.list() {
            shape.render(renderer);
            self.tool.on_overlay_render(&self.scene, renderer, Some(&*shape));
        }
        self.tool.on_overlay_render(&self.scene, renderer, None);
    }
}
