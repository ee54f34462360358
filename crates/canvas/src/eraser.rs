//! Eraser tool: deletes every shape a freehand stroke passes over.

use scene_graph::Scene;
use sketch_core::{Bounds, Point, Renderer};

/// Hit test used by the eraser: does `shape_bounds` overlap the box of any
/// consecutive pair of `path` points?
pub fn path_touches(path: &[Point], shape_bounds: &Bounds) -> bool {
    path.windows(2)
        .any(|pair| shape_bounds.overlaps(&Bounds::from_corners(pair[0], pair[1])))
}

#[derive(Debug, Default)]
pub struct EraserTool {
    path: Vec<Point>,
}

impl EraserTool {
    /// The stroke sampled so far.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub(crate) fn on_pointer_down(&mut self, scene: &Scene, point: Point) {
        self.path.clear();
        self.path.push(point);
        scene.notify_listeners();
    }

    pub(crate) fn on_pointer_drag(&mut self, scene: &Scene, point: Point) {
        self.path.push(point);
        scene.notify_listeners();
    }

    pub(crate) fn on_pointer_up(&mut self, scene: &Scene, point: Point) {
        self.path.push(point);

        let doomed: Vec<_> = scene
            .list()
            .into_iter()
            .filter(|shape| path_touches(&self.path, &shape.bounding_box()))
            .collect();

        if !doomed.is_empty() {
            log::debug!("erasing {} shapes", doomed.len());
        }
        for shape in &doomed {
            scene.remove(shape);
        }

        self.path.clear();
        scene.notify_listeners();
    }

    /// Draws the stroke in progress as connected segments.
    pub(crate) fn on_overlay_render(&self, renderer: &mut dyn Renderer, shape: Option<&node::Shape>) {
        if shape.is_some() {
            return;
        }
        for pair in self.path.windows(2) {
            renderer.draw_line(pair[0], pair[1]);
        }
    }

    pub(crate) fn on_exit(&mut self) {
        self.path.clear();
    }
}
