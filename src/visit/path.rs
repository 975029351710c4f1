use std::fmt;

/// The location of an AST node relative to the root of the folded [`Document`](crate::ast::Document),
/// e.g. `0.selectionSet.1.selectionSet` for the Selection Set of the second selection of the first
/// definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Returns how many Selection Sets deep the current node is nested.
    pub fn depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| **segment == PathSegment::SelectionSet)
            .count()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    /// Position in a list of definitions or selections
    Index(usize),
    SelectionSet,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::SelectionSet => f.write_str("selectionSet"),
        }
    }
}
