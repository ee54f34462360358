//! # Shapes
//!
//! A [`Shape`] is the shared part of every drawable object: its identity, its
//! ordered hot points (the control points that define its geometry), a
//! selection flag and the listeners observing it. What differs between kinds
//! lives behind [`ShapeKind`], whose variants each implement [`ShapeVariant`].
//!
//! Shapes are handed around as [`ShapeRef`] (`Rc<Shape>`). Mutators take
//! `&self`: geometry sits behind interior mutability, and every mutation
//! releases its borrow before listeners are called, so a listener is always
//! free to read the shape that notified it (a view repainting, a group
//! re-computing its bounds).

use crate::ellipse::Ellipse;
use crate::group::Group;
use crate::line::Line;
use crate::{RecordError, ShapeError, ShapeId};
use sketch_core::{distance_to_point, Bounds, ListenerSet, Point, Renderer};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Shared handle to a shape.
pub type ShapeRef = Rc<Shape>;

/// Observer of a single shape.
///
/// Implemented by the scene and by groups (which observe their children).
/// Listeners are held weakly: registering never keeps a listener alive.
pub trait ShapeListener {
    /// The shape's geometry changed.
    fn shape_changed(&self, shape: &Shape);

    /// The shape's selection state (or one of its hot points') changed.
    fn shape_selection_changed(&self, shape: &Shape);
}

/// Behavior each concrete kind of shape provides.
///
/// Leaf kinds compute everything from the hot points they are handed; a
/// group ignores them (it has none) and combines its children instead.
pub trait ShapeVariant {
    /// Stable token identifying the kind in saved documents.
    fn tag(&self) -> &'static str;

    /// Human-readable name, used for tool buttons.
    fn name(&self) -> &'static str;

    fn bounding_box(&self, points: &[Point]) -> Bounds;

    /// Approximate distance from `point` to the shape, used for hit testing.
    fn selection_distance(&self, points: &[Point], point: Point) -> f32;

    fn render(&self, points: &[Point], renderer: &mut dyn Renderer);

    /// Appends this shape's rows to `rows`.
    fn save(&self, points: &[Point], rows: &mut Vec<String>);

    /// Decodes one row body (everything after the tag) and pushes the
    /// resulting shape onto `stack`.
    fn load(&self, stack: &mut Vec<ShapeRef>, data: &str) -> Result<(), RecordError>;
}

/// The closed set of shape kinds.
#[derive(Debug)]
pub enum ShapeKind {
    Line(Line),
    Ellipse(Ellipse),
    Group(Group),
}

impl ShapeKind {
    pub fn variant(&self) -> &dyn ShapeVariant {
        match self {
            ShapeKind::Line(line) => line,
            ShapeKind::Ellipse(ellipse) => ellipse,
            ShapeKind::Group(group) => group,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HotPoint {
    position: Point,
    selected: bool,
}

impl HotPoint {
    fn new(position: Point) -> Self {
        Self {
            position,
            selected: false,
        }
    }
}

pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    hot_points: RefCell<SmallVec<[HotPoint; 2]>>,
    selected: Cell<bool>,
    listeners: ListenerSet<dyn ShapeListener>,
    /// Back-reference to our own allocation, used when registering as a
    /// listener on group children.
    this: Weak<Shape>,
}

impl Shape {
    fn build(kind: ShapeKind, points: &[Point]) -> ShapeRef {
        Rc::new_cyclic(|this| Shape {
            id: ShapeId::new(),
            kind,
            hot_points: RefCell::new(points.iter().copied().map(HotPoint::new).collect()),
            selected: Cell::new(false),
            listeners: ListenerSet::new(),
            this: this.clone(),
        })
    }

    /// A straight segment with hot points `[start, end]`.
    pub fn line(start: Point, end: Point) -> ShapeRef {
        Self::build(ShapeKind::Line(Line), &[start, end])
    }

    /// An axis-aligned ellipse inscribed in the box spanned by two opposite
    /// corners (in any order).
    pub fn ellipse(first: Point, second: Point) -> ShapeRef {
        Self::build(ShapeKind::Ellipse(Ellipse), &[first, second])
    }

    /// A group owning `children`. The group registers itself as a listener
    /// on every child so their notifications bubble up through it.
    pub fn group(children: Vec<ShapeRef>) -> ShapeRef {
        let group = Self::build(ShapeKind::Group(Group::new(children)), &[]);
        let listener = group.as_listener();
        for child in group.children() {
            child.add_listener(listener.clone());
        }
        group
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.variant().tag()
    }

    pub fn name(&self) -> &'static str {
        self.kind.variant().name()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ShapeKind::Group(_))
    }

    // === Hot points ===

    pub fn hot_point_count(&self) -> usize {
        self.hot_points.borrow().len()
    }

    /// All hot point positions, in order.
    pub fn hot_points(&self) -> SmallVec<[Point; 2]> {
        self.hot_points.borrow().iter().map(|h| h.position).collect()
    }

    pub fn hot_point(&self, index: usize) -> Result<Point, ShapeError> {
        self.check_index(index)?;
        Ok(self.hot_points.borrow()[index].position)
    }

    /// Moves one hot point and notifies listeners of the change.
    pub fn set_hot_point(&self, index: usize, position: Point) -> Result<(), ShapeError> {
        self.check_index(index)?;
        self.hot_points.borrow_mut()[index].position = position;
        self.notify_changed();
        Ok(())
    }

    pub fn is_hot_point_selected(&self, index: usize) -> Result<bool, ShapeError> {
        self.check_index(index)?;
        Ok(self.hot_points.borrow()[index].selected)
    }

    pub fn set_hot_point_selected(&self, index: usize, selected: bool) -> Result<(), ShapeError> {
        self.check_index(index)?;
        self.hot_points.borrow_mut()[index].selected = selected;
        self.notify_selection_changed();
        Ok(())
    }

    /// Distance from `point` to hot point `index`.
    pub fn hot_point_distance(&self, index: usize, point: Point) -> Result<f32, ShapeError> {
        Ok(distance_to_point(self.hot_point(index)?, point))
    }

    fn check_index(&self, index: usize) -> Result<(), ShapeError> {
        let count = self.hot_point_count();
        if index < count {
            Ok(())
        } else {
            Err(ShapeError::OutOfRange { index, count })
        }
    }

    // === Selection ===

    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    /// Sets the selection flag and notifies listeners, even when the flag
    /// does not change, so observers can always re-sync.
    pub fn set_selected(&self, selected: bool) {
        self.selected.set(selected);
        self.notify_selection_changed();
    }

    // === Geometry ===

    pub fn bounding_box(&self) -> Bounds {
        self.kind.variant().bounding_box(&self.hot_points())
    }

    pub fn selection_distance(&self, point: Point) -> f32 {
        self.kind.variant().selection_distance(&self.hot_points(), point)
    }

    /// Shifts the shape by `delta`.
    ///
    /// A leaf moves every hot point and then notifies once. A group forwards
    /// to its children and stays silent itself: each child's notification
    /// already bubbles through the group.
    pub fn translate(&self, delta: Point) {
        match &self.kind {
            ShapeKind::Group(group) => {
                for child in group.children() {
                    child.translate(delta);
                }
            }
            ShapeKind::Line(_) | ShapeKind::Ellipse(_) => {
                for hot_point in self.hot_points.borrow_mut().iter_mut() {
                    hot_point.position = hot_point.position.translate(delta);
                }
                self.notify_changed();
            }
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.kind.variant().render(&self.hot_points(), renderer);
    }

    // === Prototype support ===

    /// Deep-copies the geometry.
    ///
    /// The copy gets a fresh id, starts unselected and has no listeners:
    /// observers of the original are never carried over. Groups duplicate
    /// every child and wire the new group to the new children only.
    pub fn duplicate(&self) -> ShapeRef {
        match &self.kind {
            ShapeKind::Line(line) => Self::build(ShapeKind::Line(*line), &self.hot_points()),
            ShapeKind::Ellipse(ellipse) => {
                Self::build(ShapeKind::Ellipse(*ellipse), &self.hot_points())
            }
            ShapeKind::Group(group) => Self::group(
                group
                    .children()
                    .iter()
                    .map(|child| child.duplicate())
                    .collect(),
            ),
        }
    }

    // === Composite support ===

    /// Snapshot of a group's children; empty for leaf shapes.
    pub fn children(&self) -> Vec<ShapeRef> {
        match &self.kind {
            ShapeKind::Group(group) => group.children(),
            ShapeKind::Line(_) | ShapeKind::Ellipse(_) => Vec::new(),
        }
    }

    /// Extracts a group's children, deregistering the group from each.
    ///
    /// The group is left empty. Returns `None` for leaf shapes.
    pub fn ungroup(&self) -> Option<Vec<ShapeRef>> {
        let ShapeKind::Group(group) = &self.kind else {
            return None;
        };
        let children = group.take_children();
        let listener = self.as_listener();
        for child in &children {
            child.remove_listener(&listener);
        }
        Some(children)
    }

    // === Persistence ===

    pub fn save(&self, rows: &mut Vec<String>) {
        self.kind.variant().save(&self.hot_points(), rows);
    }

    /// Decodes a row of this shape's kind. Called on a prototype.
    pub fn load(&self, stack: &mut Vec<ShapeRef>, data: &str) -> Result<(), RecordError> {
        self.kind.variant().load(stack, data)
    }

    // === Observers ===

    pub fn add_listener(&self, listener: Weak<dyn ShapeListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&self, listener: &Weak<dyn ShapeListener>) {
        self.listeners.remove(listener);
    }

    pub fn has_listener(&self, listener: &Weak<dyn ShapeListener>) -> bool {
        self.listeners.contains(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// This shape as a listener handle, for groups observing their children.
    pub fn as_listener(&self) -> Weak<dyn ShapeListener> {
        let this: Weak<dyn ShapeListener> = self.this.clone();
        this
    }

    pub fn notify_changed(&self) {
        for listener in self.listeners.snapshot() {
            listener.shape_changed(self);
        }
    }

    pub fn notify_selection_changed(&self) {
        for listener in self.listeners.snapshot() {
            listener.shape_selection_changed(self);
        }
    }
}

/// Groups re-broadcast their children's events as their own.
impl ShapeListener for Shape {
    fn shape_changed(&self, _child: &Shape) {
        if self.is_group() {
            self.notify_changed();
        }
    }

    fn shape_selection_changed(&self, _child: &Shape) {
        if self.is_group() {
            self.notify_selection_changed();
        }
    }
}

impl Drop for Shape {
    fn drop(&mut self) {
        if let ShapeKind::Group(group) = &self.kind {
            let listener = self.as_listener();
            for child in group.children() {
                child.remove_listener(&listener);
            }
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .field("hot_points", &self.hot_points())
            .field("selected", &self.is_selected())
            .field("children", &self.children().len())
            .finish()
    }
}
