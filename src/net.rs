//! The unfolded net and its diagnostics.

use std::fmt;

use thiserror::Error;

use crate::math::polygon_2d::{extent_2d, signed_area_2d};
use crate::math::Point2;
use crate::operations::adjacency::NonManifoldEdge;
use crate::operations::spanning_tree::SpanningTree;
use crate::topology::{EdgeKey, Polyhedron};

/// Where a mesh vertex ended up in the net.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexPlacement {
    /// No placed face uses the vertex.
    Unplaced,
    /// Every placed face agrees on one position.
    Unique(Point2),
    /// Placed faces disagree, as happens across cut edges. Lists every
    /// `(face, position)` in face order.
    Split(Vec<(usize, Point2)>),
}

/// A non-fatal finding: the net is still valid but may be incomplete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("non-manifold edge {} used by faces {:?}", .0.edge, .0.faces)]
    NonManifoldEdge(NonManifoldEdge),

    #[error("face {face} is not connected to the root face and was not placed")]
    UnreachableFace { face: usize },

    #[error("face {face} deviates {deviation} from its plane")]
    NonPlanarFace { face: usize, deviation: f64 },
}

/// An axis-aligned bounding box of the net.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetBounds {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl NetBounds {
    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// The result of unfolding a polyhedron.
///
/// The primary data is one placement per face, listed in the face's own loop
/// order. The per-vertex view is derived from it.
#[derive(Debug, Clone)]
pub struct UnfoldResult {
    name: String,
    faces: Vec<Option<Vec<Point2>>>,
    vertices: Vec<VertexPlacement>,
    tree: SpanningTree,
    cuts: Vec<EdgeKey>,
    diagnostics: Vec<Diagnostic>,
}

impl UnfoldResult {
    pub(crate) fn assemble(
        poly: &Polyhedron,
        faces: Vec<Option<Vec<Point2>>>,
        tree: SpanningTree,
        cuts: Vec<EdgeKey>,
        diagnostics: Vec<Diagnostic>,
        merge_tolerance: f64,
    ) -> Self {
        let mut per_vertex: Vec<Vec<(usize, Point2)>> = vec![Vec::new(); poly.vertex_count()];
        for (face_idx, placement) in faces.iter().enumerate() {
            let Some(points) = placement else {
                continue;
            };
            for (&v, &pt) in poly.faces()[face_idx].vertices().iter().zip(points) {
                per_vertex[v].push((face_idx, pt));
            }
        }

        let vertices = per_vertex
            .into_iter()
            .map(|uses| {
                let Some(&(_, first)) = uses.first() else {
                    return VertexPlacement::Unplaced;
                };
                if uses
                    .iter()
                    .all(|(_, pt)| (*pt - first).norm() <= merge_tolerance)
                {
                    VertexPlacement::Unique(first)
                } else {
                    VertexPlacement::Split(uses)
                }
            })
            .collect();

        Self {
            name: poly.name.clone(),
            faces,
            vertices,
            tree,
            cuts,
            diagnostics,
        }
    }

    /// Name of the unfolded polyhedron.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // --- Faces ---

    /// The 2D polygon of a face, in loop order, or `None` if the face is not
    /// part of the net.
    #[must_use]
    pub fn face_placement(&self, face: usize) -> Option<&[Point2]> {
        self.faces.get(face).and_then(|p| p.as_deref())
    }

    /// All face placements, indexed by face.
    #[must_use]
    pub fn face_placements(&self) -> &[Option<Vec<Point2>>] {
        &self.faces
    }

    /// Number of faces placed in the net.
    #[must_use]
    pub fn placed_face_count(&self) -> usize {
        self.faces.iter().filter(|p| p.is_some()).count()
    }

    // --- Vertices ---

    /// Placement of a mesh vertex.
    ///
    /// Out-of-range indices report [`VertexPlacement::Unplaced`].
    #[must_use]
    pub fn vertex_placement(&self, vertex: usize) -> &VertexPlacement {
        static UNPLACED: VertexPlacement = VertexPlacement::Unplaced;
        self.vertices.get(vertex).unwrap_or(&UNPLACED)
    }

    /// The single 2D position of a vertex, if every face placing it agrees.
    #[must_use]
    pub fn vertex_position(&self, vertex: usize) -> Option<Point2> {
        match self.vertex_placement(vertex) {
            VertexPlacement::Unique(pt) => Some(*pt),
            _ => None,
        }
    }

    /// Positions of all vertices; `None` where unplaced or split.
    #[must_use]
    pub fn vertex_positions(&self) -> Vec<Option<Point2>> {
        (0..self.vertices.len())
            .map(|v| self.vertex_position(v))
            .collect()
    }

    /// Vertices whose placements disagree, ascending.
    #[must_use]
    pub fn split_vertices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p, VertexPlacement::Split(_)))
            .map(|(v, _)| v)
            .collect()
    }

    // --- Tree ---

    /// The spanning tree that chose the hinges.
    #[must_use]
    pub fn spanning_tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// The parent array with `-1` for the root and for unreachable faces.
    #[must_use]
    pub fn parent_indices(&self) -> Vec<isize> {
        self.tree.parent_indices()
    }

    /// Hinges as `(parent, child, edge)`, in placement order.
    #[must_use]
    pub fn hinges(&self) -> Vec<(usize, usize, EdgeKey)> {
        self.tree.hinge_edges()
    }

    /// Shared edges of the placed component that the net cuts open.
    #[must_use]
    pub fn cuts(&self) -> &[EdgeKey] {
        &self.cuts
    }

    // --- Diagnostics ---

    /// Non-fatal findings, ordered by kind then index.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Faces left out of the net because the root cannot reach them.
    #[must_use]
    pub fn unreachable_faces(&self) -> Vec<usize> {
        self.tree.unreachable_faces()
    }

    /// Returns `true` if every face was placed and no edge was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.diagnostics.iter().any(|d| {
            matches!(
                d,
                Diagnostic::NonManifoldEdge(_) | Diagnostic::UnreachableFace { .. }
            )
        })
    }

    // --- Measures ---

    /// Bounding box of all placed faces, or `None` if nothing was placed.
    #[must_use]
    pub fn bounds(&self) -> Option<NetBounds> {
        extent_2d(self.faces.iter().flatten().flatten()).map(|(min, max)| NetBounds { min, max })
    }

    /// Total area of the placed faces.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.faces
            .iter()
            .flatten()
            .map(|points| signed_area_2d(points).abs())
            .sum()
    }
}

impl fmt::Display for UnfoldResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Net of {}: {}/{} faces placed, {} hinges, {} cuts, {} diagnostics",
            self.name,
            self.placed_face_count(),
            self.faces.len(),
            self.tree.reachable_count().saturating_sub(1),
            self.cuts.len(),
            self.diagnostics.len()
        )
    }
}
