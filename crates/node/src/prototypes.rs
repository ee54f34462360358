//! Template shapes keyed by tag.
//!
//! The host uses the registry twice: the add-shape tool duplicates a
//! prototype to create new shapes, and the document loader looks a row's tag
//! up to find the shape that decodes it.

use crate::shape::{Shape, ShapeRef};
use sketch_core::Point;

#[derive(Debug, Default, Clone)]
pub struct PrototypeRegistry {
    prototypes: Vec<ShapeRef>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line, ellipse and group, in the order tools are offered.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        registry.register(Shape::ellipse(Point::new(0.0, 10.0), Point::new(10.0, 0.0)));
        registry.register(Shape::group(Vec::new()));
        registry
    }

    /// Adds a prototype, replacing any existing one with the same tag.
    pub fn register(&mut self, prototype: ShapeRef) {
        let tag = prototype.tag();
        match self.prototypes.iter_mut().find(|p| p.tag() == tag) {
            Some(existing) => {
                log::debug!("replacing prototype for {}", tag);
                *existing = prototype;
            }
            None => self.prototypes.push(prototype),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&ShapeRef> {
        self.prototypes.iter().find(|p| p.tag() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeRef> {
        self.prototypes.iter()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.prototypes.iter().map(|p| p.tag()).collect()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
