use super::edge::EdgeKey;

/// A polygonal face: an ordered loop of vertex indices.
///
/// Vertices are listed counter-clockwise as seen from outside the solid.
/// Consecutive pairs, wrapping from the last vertex back to the first,
/// are the face's edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    vertices: Vec<usize>,
}

/// One edge of a face loop, with the slots that realize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceEdge {
    /// Slot of the start vertex in the face loop.
    pub start_slot: usize,
    /// Slot of the end vertex (`start_slot + 1`, wrapping).
    pub end_slot: usize,
    /// Vertex index at `start_slot`.
    pub start: usize,
    /// Vertex index at `end_slot`.
    pub end: usize,
}

impl FaceEdge {
    /// Canonical key of this edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.start, self.end)
    }
}

impl Face {
    /// Creates a face from its vertex loop.
    #[must_use]
    pub fn new(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// The vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices (and edges) in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the loop is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the loop's edges in order.
    pub fn edges(&self) -> impl Iterator<Item = FaceEdge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            let j = (i + 1) % n;
            FaceEdge {
                start_slot: i,
                end_slot: j,
                start: self.vertices[i],
                end: self.vertices[j],
            }
        })
    }

    /// Finds the consecutive slots realizing `key`, in loop order.
    #[must_use]
    pub fn find_edge(&self, key: EdgeKey) -> Option<FaceEdge> {
        self.edges().find(|e| e.key() == key)
    }

    /// Finds the slot holding `vertex`.
    #[must_use]
    pub fn slot_of(&self, vertex: usize) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }
}

impl From<Vec<usize>> for Face {
    fn from(vertices: Vec<usize>) -> Self {
        Self::new(vertices)
    }
}
