use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque per-instance identity of a shape.
///
/// Ids are not written to saved documents. Loading a file or calling
/// [`Shape::duplicate`](crate::Shape::duplicate) mints new ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        ShapeId(Uuid::new_v4())
    }

    #[cfg(test)]
    pub(crate) fn fixed(value: u128) -> Self {
        ShapeId(Uuid::from_u128(value))
    }

    pub fn to_uuid_string(&self) -> String {
        self.0.hyphenated().to_string()
    }

    fn short(&self) -> String {
        let mut s = self.0.simple().to_string();
        s.truncate(8);
        s
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeId").field(&format_args!("{}", self.short())).finish()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}
