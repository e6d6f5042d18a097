use std::fmt;

/// An undirected mesh edge: an unordered pair of vertex indices.
///
/// The pair is stored with the smaller index first, so both faces that share
/// an edge produce the same key. Keys order lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    lo: usize,
    hi: usize,
}

impl EdgeKey {
    /// Creates the canonical key for the edge between `a` and `b`.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller vertex index.
    #[must_use]
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// The larger vertex index.
    #[must_use]
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Returns `(lo, hi)`.
    #[must_use]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.lo == vertex || self.hi == vertex
    }

    /// Returns the endpoint opposite `vertex`, or `None` if `vertex` is not
    /// an endpoint.
    #[must_use]
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.lo {
            Some(self.hi)
        } else if vertex == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}
