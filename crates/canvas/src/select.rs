//! Selection tool: picking, hot-point dragging, grouping and z-order keys.

use crate::Key;
use crate::Modifiers;
use node::{Shape, ShapeRef};
use scene_graph::Scene;
use sketch_core::{Point, Renderer};

/// Half the side length of the square drawn over each hot point.
pub const HOT_POINT_MARKER_SIZE: f32 = 3.0;

/// A hot point being dragged.
#[derive(Debug, Clone)]
struct HotPointDrag {
    shape: ShapeRef,
    index: usize,
}

#[derive(Debug, Default)]
pub struct SelectTool {
    drag: Option<HotPointDrag>,
}

impl SelectTool {
    /// Whether a hot-point drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn on_pointer_down(&mut self, scene: &Scene, point: Point, modifiers: Modifiers) {
        // With a single shape selected its hot points take priority
        if let [only] = scene.selected_objects().as_slice() {
            if let Some(index) = scene.find_hot_point_near(only, point) {
                self.drag = Some(HotPointDrag {
                    shape: only.clone(),
                    index,
                });
                return;
            }
        }

        match scene.find_shape_near(point) {
            None => {
                if !modifiers.any() {
                    deselect_all(scene);
                }
            }
            Some(shape) if modifiers.ctrl => shape.set_selected(!shape.is_selected()),
            Some(shape) => {
                for other in scene.selected_objects() {
                    if !std::ptr::eq(other.as_ref(), shape.as_ref()) {
                        other.set_selected(false);
                    }
                }
                shape.set_selected(true);
            }
        }
    }

    pub(crate) fn on_pointer_drag(&mut self, point: Point) {
        let Some(drag) = &self.drag else {
            return;
        };
        if let Err(err) = drag.shape.set_hot_point(drag.index, point) {
            log::error!("dropping hot point drag: {}", err);
            self.drag = None;
        }
    }

    pub(crate) fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    pub(crate) fn on_key(&mut self, scene: &Scene, key: Key) {
        match key {
            Key::Char('g') => group_selection(scene),
            Key::Char('u') => ungroup_selection(scene),
            Key::Up => translate_selection(scene, Point::new(0.0, -1.0)),
            Key::Down => translate_selection(scene, Point::new(0.0, 1.0)),
            Key::Left => translate_selection(scene, Point::new(-1.0, 0.0)),
            Key::Right => translate_selection(scene, Point::new(1.0, 0.0)),
            Key::Plus => {
                // Topmost first, so adjacent selected shapes all move up
                for shape in selection_in_z_order(scene).iter().rev() {
                    scene.increase_z(shape);
                }
            }
            Key::Minus => {
                for shape in selection_in_z_order(scene) {
                    scene.decrease_z(&shape);
                }
            }
            Key::Char(_) | Key::Escape => {}
        }
    }

    /// Outlines selected shapes; a sole selection also gets hot-point markers.
    pub(crate) fn on_overlay_render(
        &self,
        scene: &Scene,
        renderer: &mut dyn Renderer,
        shape: Option<&Shape>,
    ) {
        let Some(shape) = shape else {
            return;
        };
        if !shape.is_selected() {
            return;
        }

        let [a, b, c, d] = shape.bounding_box().corners();
        renderer.draw_line(a, b);
        renderer.draw_line(b, c);
        renderer.draw_line(c, d);
        renderer.draw_line(d, a);

        if scene.selected_objects().len() == 1 {
            for hot_point in shape.hot_points() {
                renderer.fill_polygon(&marker(hot_point));
            }
        }
    }

    pub(crate) fn on_exit(&mut self, scene: &Scene) {
        self.drag = None;
        deselect_all(scene);
    }
}

fn marker(center: Point) -> [Point; 4] {
    let s = HOT_POINT_MARKER_SIZE;
    [
        Point::new(center.x() - s, center.y() - s),
        Point::new(center.x() + s, center.y() - s),
        Point::new(center.x() + s, center.y() + s),
        Point::new(center.x() - s, center.y() + s),
    ]
}

fn deselect_all(scene: &Scene) {
    for shape in scene.selected_objects() {
        shape.set_selected(false);
    }
}

fn translate_selection(scene: &Scene, delta: Point) {
    for shape in scene.selected_objects() {
        shape.translate(delta);
    }
}

/// The selected shapes ordered bottom to top.
fn selection_in_z_order(scene: &Scene) -> Vec<ShapeRef> {
    scene
        .list()
        .into_iter()
        .filter(|shape| shape.is_selected())
        .collect()
}

/// Wraps two or more selected shapes into a new selected group.
///
/// Children keep their z-order relative to each other; the group is placed
/// on top.
fn group_selection(scene: &Scene) {
    let selected = selection_in_z_order(scene);
    if selected.len() < 2 {
        return;
    }

    for shape in &selected {
        shape.set_selected(false);
        scene.remove(shape);
    }

    log::debug!("grouping {} shapes", selected.len());
    let group = Shape::group(selected);
    scene.add(group.clone());
    group.set_selected(true);
}

/// Replaces a single selected group with its children, all selected.
fn ungroup_selection(scene: &Scene) {
    let selected = scene.selected_objects();
    let [group] = selected.as_slice() else {
        return;
    };
    if !group.is_group() {
        return;
    }

    scene.remove(group);
    let children = group.ungroup().unwrap_or_default();
    log::debug!("ungrouping {} shapes", children.len());

    for child in children {
        scene.add(child.clone());
        child.set_selected(true);
    }
}
