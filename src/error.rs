use thiserror::Error;

use crate::topology::EdgeKey;

/// Top-level error type for the netfold unfolding engine.
#[derive(Debug, Error)]
pub enum UnfoldError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Invalid geometry: the input cannot be laid out in the plane.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polyhedron has no faces")]
    EmptyMesh,

    #[error("face {face} has {count} vertices, at least 3 are required")]
    TooFewVertices { face: usize, count: usize },

    #[error("face {face} references vertex {vertex}, whose coordinates are not finite")]
    NonFiniteVertex { face: usize, vertex: usize },

    #[error("face {face} has a zero-length edge at slot {slot}")]
    DegenerateEdge { face: usize, slot: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error(
        "hinge between face {face} and parent {parent} has length {actual}, expected {expected}"
    )]
    HingeLengthMismatch {
        face: usize,
        parent: usize,
        expected: f64,
        actual: f64,
    },

    #[error("faces {faces:?} traverse edge {edge} in the same direction (mixed winding)")]
    InconsistentWinding { edge: EdgeKey, faces: [usize; 2] },
}

/// Errors in the combinatorial structure of the mesh.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("edge {edge} is not part of face {face}")]
    InconsistentTopology { face: usize, edge: EdgeKey },

    #[error("face {face} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("root face {root} is out of range for {face_count} faces")]
    RootOutOfRange { root: usize, face_count: usize },

    #[error("face {face} is out of range for {face_count} faces")]
    FaceOutOfRange { face: usize, face_count: usize },
}

/// Convenience type alias for results using [`UnfoldError`].
pub type Result<T> = std::result::Result<T, UnfoldError>;
