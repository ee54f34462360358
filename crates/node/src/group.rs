use crate::shape::{Shape, ShapeRef, ShapeVariant};
use crate::RecordError;
use sketch_core::{Bounds, Point, Renderer};
use std::cell::RefCell;

/// A composite shape owning an ordered list of children.
///
/// Holds no hot points of its own; every geometric query combines the
/// children's answers. Listener wiring between the group and its children is
/// done by [`Shape::group`].
#[derive(Debug, Default)]
pub struct Group {
    children: RefCell<Vec<ShapeRef>>,
}

impl Group {
    pub const TAG: &'static str = "@COMP";

    pub(crate) fn new(children: Vec<ShapeRef>) -> Self {
        Self {
            children: RefCell::new(children),
        }
    }

    pub fn children(&self) -> Vec<ShapeRef> {
        self.children.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    pub(crate) fn take_children(&self) -> Vec<ShapeRef> {
        std::mem::take(&mut *self.children.borrow_mut())
    }
}

impl ShapeVariant for Group {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn name(&self) -> &'static str {
        "Composite Shape"
    }

    /// Union of the children's boxes, or a zero box at the origin when empty.
    fn bounding_box(&self, _points: &[Point]) -> Bounds {
        self.children()
            .iter()
            .map(|child| child.bounding_box())
            .reduce(|acc, bounds| acc.union(&bounds))
            .unwrap_or_else(Bounds::zero)
    }

    fn selection_distance(&self, _points: &[Point], point: Point) -> f32 {
        self.children()
            .iter()
            .map(|child| child.selection_distance(point))
            .fold(f32::INFINITY, f32::min)
    }

    fn render(&self, _points: &[Point], renderer: &mut dyn Renderer) {
        for child in self.children() {
            child.render(renderer);
        }
    }

    /// Children first, in order, then a trailer row carrying the child count.
    fn save(&self, _points: &[Point], rows: &mut Vec<String>) {
        let children = self.children();
        for child in &children {
            child.save(rows);
        }
        rows.push(format!("{} {}", Self::TAG, children.len()));
    }

    /// Pops the trailer's child count off the stack and wraps them in a new
    /// group.
    fn load(&self, stack: &mut Vec<ShapeRef>, data: &str) -> Result<(), RecordError> {
        let wanted: usize = data.trim().parse().map_err(|_| {
            RecordError::malformed(Self::TAG, data, "expected a single child count")
        })?;

        if wanted > stack.len() {
            return Err(RecordError::StackUnderflow {
                tag: Self::TAG.to_string(),
                wanted,
                available: stack.len(),
            });
        }

        // Popping yields the children last-first
        let mut children = Vec::with_capacity(wanted);
        for _ in 0..wanted {
            if let Some(child) = stack.pop() {
                children.push(child);
            }
        }
        children.reverse();

        stack.push(Shape::group(children));
        Ok(())
    }
}
