//! # Scene
//!
//! The scene is the document model of a sketch: the ordered list of top-level
//! shapes plus the set of those currently selected.
//!
//! ## Key Concepts
//!
//! - **Z-order**: list order doubles as paint order. Index 0 is painted first
//!   and sits at the bottom.
//! - **Derived selection**: the selection is never edited directly. The scene
//!   listens to every shape it holds and mirrors each shape's selected flag,
//!   so `selection ⊆ objects` holds after every operation.
//! - **Change broadcast**: every mutation of the scene, and every change
//!   reported by one of its shapes, ends in a single `scene_changed` call to
//!   each [`SceneListener`]. Views repaint from that signal alone.

use node::{Shape, ShapeListener, ShapeRef};
use sketch_core::{ListenerSet, Point};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Distance below which a pointer position counts as hitting a shape or hot
/// point.
pub const SELECTION_PROXIMITY: f32 = 10.0;

/// Observer of the whole scene, typically a view that repaints on change.
pub trait SceneListener {
    fn scene_changed(&self);
}

pub struct Scene {
    /// Top-level shapes in paint order
    objects: RefCell<Vec<ShapeRef>>,

    /// Selected subset of `objects`, in the order shapes became selected
    selection: RefCell<Vec<ShapeRef>>,

    listeners: ListenerSet<dyn SceneListener>,

    this: Weak<Scene>,
}

impl Scene {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Scene {
            objects: RefCell::new(Vec::new()),
            selection: RefCell::new(Vec::new()),
            listeners: ListenerSet::new(),
            this: this.clone(),
        })
    }

    fn as_shape_listener(&self) -> Weak<dyn ShapeListener> {
        let this: Weak<dyn ShapeListener> = self.this.clone();
        this
    }

    // === Object management ===

    /// Appends `shape` on top of the z-order and starts observing it.
    ///
    /// A shape that is already selected joins the selection immediately.
    /// Adding a shape that is already in the scene does nothing.
    pub fn add(&self, shape: ShapeRef) {
        if self.contains(&shape) {
            log::warn!("shape {} is already in the scene", shape.id());
            return;
        }

        shape.add_listener(self.as_shape_listener());
        if shape.is_selected() {
            self.selection.borrow_mut().push(shape.clone());
        }
        log::debug!("adding {} {}", shape.tag(), shape.id());
        self.objects.borrow_mut().push(shape);

        self.notify_listeners();
    }

    /// Removes `shape` from the scene and the selection and stops observing
    /// it. Does nothing if the shape is not in the scene.
    pub fn remove(&self, shape: &Shape) {
        let Some(index) = self.index_of(shape) else {
            return;
        };

        shape.remove_listener(&self.as_shape_listener());
        self.objects.borrow_mut().remove(index);
        self.selection
            .borrow_mut()
            .retain(|selected| !std::ptr::eq(selected.as_ref(), shape));
        log::debug!("removed {} {}", shape.tag(), shape.id());

        self.notify_listeners();
    }

    pub fn clear(&self) {
        let objects = std::mem::take(&mut *self.objects.borrow_mut());
        self.selection.borrow_mut().clear();

        let listener = self.as_shape_listener();
        for shape in &objects {
            shape.remove_listener(&listener);
        }
        log::debug!("cleared {} shapes", objects.len());

        self.notify_listeners();
    }

    /// Replaces the whole content of the scene with `shapes` in one step,
    /// broadcasting a single notification.
    pub fn replace_all(&self, shapes: Vec<ShapeRef>) {
        let listener = self.as_shape_listener();

        let previous = std::mem::take(&mut *self.objects.borrow_mut());
        for shape in &previous {
            shape.remove_listener(&listener);
        }

        let selection: Vec<ShapeRef> = shapes.iter().filter(|s| s.is_selected()).cloned().collect();
        for shape in &shapes {
            shape.add_listener(listener.clone());
        }
        log::debug!("replacing {} shapes with {}", previous.len(), shapes.len());

        *self.objects.borrow_mut() = shapes;
        *self.selection.borrow_mut() = selection;

        self.notify_listeners();
    }

    /// Snapshot of the shapes in z-order.
    pub fn list(&self) -> Vec<ShapeRef> {
        self.objects.borrow().clone()
    }

    pub fn selected_objects(&self) -> Vec<ShapeRef> {
        self.selection.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }

    pub fn contains(&self, shape: &Shape) -> bool {
        self.index_of(shape).is_some()
    }

    /// Position of `shape` in the z-order.
    pub fn index_of(&self, shape: &Shape) -> Option<usize> {
        self.objects
            .borrow()
            .iter()
            .position(|object| std::ptr::eq(object.as_ref(), shape))
    }

    // === Z-order ===

    /// Swaps `shape` with its neighbour toward the top. No-op when it is
    /// already on top or not in the scene.
    pub fn increase_z(&self, shape: &Shape) {
        let Some(index) = self.index_of(shape) else {
            return;
        };
        if index + 1 >= self.len() {
            return;
        }
        self.objects.borrow_mut().swap(index, index + 1);
        self.notify_listeners();
    }

    /// Swaps `shape` with its neighbour toward the bottom. No-op when it is
    /// already at the bottom or not in the scene.
    pub fn decrease_z(&self, shape: &Shape) {
        let Some(index) = self.index_of(shape) else {
            return;
        };
        if index == 0 {
            return;
        }
        self.objects.borrow_mut().swap(index, index - 1);
        self.notify_listeners();
    }

    // === Hit testing ===

    /// The closest shape within [`SELECTION_PROXIMITY`] of `point`.
    ///
    /// Shapes are scanned bottom to top and only a strictly smaller distance
    /// replaces the current best, so ties go to the lower shape.
    pub fn find_shape_near(&self, point: Point) -> Option<ShapeRef> {
        let mut best: Option<(f32, &ShapeRef)> = None;
        let objects = self.objects.borrow();

        for shape in objects.iter() {
            let distance = shape.selection_distance(point);
            if distance < SELECTION_PROXIMITY && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, shape));
            }
        }

        best.map(|(_, shape)| shape.clone())
    }

    /// Index of the hot point of `shape` closest to `point`, with the same
    /// threshold and tie-break as [`Scene::find_shape_near`].
    pub fn find_hot_point_near(&self, shape: &Shape, point: Point) -> Option<usize> {
        let mut best: Option<(f32, usize)> = None;

        for (index, hot_point) in shape.hot_points().iter().enumerate() {
            let distance = sketch_core::distance_to_point(*hot_point, point);
            if distance < SELECTION_PROXIMITY && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, index));
            }
        }

        best.map(|(_, index)| index)
    }

    // === Observers ===

    pub fn add_listener(&self, listener: Weak<dyn SceneListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&self, listener: &Weak<dyn SceneListener>) {
        self.listeners.remove(listener);
    }

    /// Broadcasts a change without mutating anything, for tools whose
    /// transient state is drawn as an overlay.
    pub fn notify_listeners(&self) {
        for listener in self.listeners.snapshot() {
            listener.scene_changed();
        }
    }
}

impl ShapeListener for Scene {
    fn shape_changed(&self, _shape: &Shape) {
        self.notify_listeners();
    }

    fn shape_selection_changed(&self, shape: &Shape) {
        {
            let mut selection = self.selection.borrow_mut();
            let position = selection
                .iter()
                .position(|selected| std::ptr::eq(selected.as_ref(), shape));

            match (shape.is_selected(), position) {
                (true, None) => {
                    let object = self
                        .objects
                        .borrow()
                        .iter()
                        .find(|object| std::ptr::eq(object.as_ref(), shape))
                        .cloned();
                    // Only top-level shapes join the selection
                    if let Some(object) = object {
                        selection.push(object);
                    }
                }
                (false, Some(index)) => {
                    selection.remove(index);
                }
                _ => {}
            }
        }

        self.notify_listeners();
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("objects", &self.objects.borrow())
            .field("selected", &self.selection.borrow().len())
            .field("listeners", &self.listeners)
            .finish()
    }
}
