//! Diagnostic paths
//!
//! Rendered as `$` for the root, `.name` per struct field, `[*]` for "every
//! element" of a collection (compile time) and `[i]` for a concrete index.
//! Decode errors resolve each `[*]` to the failing element's position.
//! Example: `$.orders[*].price`.

use std::fmt;

/// One step from a parent value into a child value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named struct field
    Field(String),
    /// Any element of a collection
    Element,
    /// Concrete element position
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Element => write!(f, "[*]"),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Path from the root of a value to a nested position
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns a child path one struct field deeper.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(PathSegment::Field(name.into()))
    }

    /// Returns a child path for every element of a collection.
    pub fn element(&self) -> Self {
        self.child(PathSegment::Element)
    }

    /// Returns a child path for one collection position.
    pub fn index(&self, i: usize) -> Self {
        self.child(PathSegment::Index(i))
    }

    /// Inserts `segment` directly below the root.
    pub fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Replaces the `[*]` at `depth` with the concrete position `i`.
    ///
    /// No-op when the segment at `depth` is not an element wildcard.
    pub fn resolve_element(&mut self, depth: usize, i: usize) {
        if let Some(segment) = self.segments.get_mut(depth) {
            if *segment == PathSegment::Element {
                *segment = PathSegment::Index(i);
            }
        }
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
