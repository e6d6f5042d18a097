use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, warn};

use crate::error::{Result, TopologyError};
use crate::topology::{EdgeKey, Polyhedron};

/// One neighbor of a face across a shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceNeighbor {
    /// Index of the face on the other side of the edge.
    pub face: usize,
    /// The shared edge.
    pub edge: EdgeKey,
    /// Consecutive slots in *this* face's loop that realize `edge`, in loop
    /// order (the second slot wraps to 0 after the last vertex).
    pub slots: (usize, usize),
}

/// An edge used by more than two face sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonManifoldEdge {
    /// The offending edge.
    pub edge: EdgeKey,
    /// Every face using the edge, once per use.
    pub faces: Vec<usize>,
}

/// Face-to-face adjacency of a polyhedron.
///
/// Two faces are neighbors when they share an edge that no other face
/// uses. Each face's neighbor list is sorted by neighbor index, then by
/// edge, so every traversal over it is reproducible.
#[derive(Debug, Clone)]
pub struct FaceAdjacency {
    neighbors: Vec<Vec<FaceNeighbor>>,
    boundary_edges: Vec<EdgeKey>,
    non_manifold_edges: Vec<NonManifoldEdge>,
}

impl FaceAdjacency {
    /// Builds the adjacency of `poly`.
    ///
    /// Boundary edges (one face) produce no neighbors. Edges with more than
    /// two uses are logged, recorded in [`Self::non_manifold_edges`], and
    /// produce no neighbors either.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InconsistentTopology`] if an edge recorded
    /// for a face cannot be found in that face's loop.
    pub fn build(poly: &Polyhedron) -> Result<Self> {
        let face_count = poly.face_count();

        // Map each edge to the faces that contain it
        let mut edge_to_faces: BTreeMap<EdgeKey, Vec<usize>> = BTreeMap::new();
        for (face_idx, face) in poly.faces().iter().enumerate() {
            for edge in face.edges() {
                edge_to_faces.entry(edge.key()).or_default().push(face_idx);
            }
        }

        let mut neighbors: Vec<Vec<FaceNeighbor>> = vec![Vec::new(); face_count];
        let mut boundary_edges = Vec::new();
        let mut non_manifold_edges = Vec::new();

        for (&edge, faces) in &edge_to_faces {
            match faces.as_slice() {
                [_] => boundary_edges.push(edge),
                &[f0, f1] if f0 != f1 => {
                    let slots0 = edge_slots(poly, f0, edge)?;
                    let slots1 = edge_slots(poly, f1, edge)?;
                    neighbors[f0].push(FaceNeighbor {
                        face: f1,
                        edge,
                        slots: slots0,
                    });
                    neighbors[f1].push(FaceNeighbor {
                        face: f0,
                        edge,
                        slots: slots1,
                    });
                }
                _ => {
                    warn!(%edge, faces = ?faces, "non-manifold edge skipped");
                    non_manifold_edges.push(NonManifoldEdge {
                        edge,
                        faces: faces.clone(),
                    });
                }
            }
        }

        for list in &mut neighbors {
            list.sort_by_key(|n| (n.face, n.edge));
        }

        debug!(
            faces = face_count,
            edges = edge_to_faces.len(),
            boundary = boundary_edges.len(),
            non_manifold = non_manifold_edges.len(),
            "built face adjacency"
        );

        Ok(Self {
            neighbors,
            boundary_edges,
            non_manifold_edges,
        })
    }

    /// Neighbors of a face, sorted by `(face, edge)`.
    ///
    /// Returns an empty slice if the face index is out of bounds.
    #[must_use]
    pub fn neighbors(&self, face: usize) -> &[FaceNeighbor] {
        self.neighbors.get(face).map_or(&[], Vec::as_slice)
    }

    /// Number of faces covered by this adjacency.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if two faces share at least one edge.
    #[must_use]
    pub fn are_adjacent(&self, face_a: usize, face_b: usize) -> bool {
        self.neighbors(face_a).iter().any(|n| n.face == face_b)
    }

    /// Edges shared by two faces, in key order.
    #[must_use]
    pub fn shared_edges(&self, face_a: usize, face_b: usize) -> Vec<EdgeKey> {
        self.neighbors(face_a)
            .iter()
            .filter(|n| n.face == face_b)
            .map(|n| n.edge)
            .collect()
    }

    /// Edges used by exactly one face, in key order.
    #[must_use]
    pub fn boundary_edges(&self) -> &[EdgeKey] {
        &self.boundary_edges
    }

    /// Edges skipped because no unique opposite face exists, in key order.
    #[must_use]
    pub fn non_manifold_edges(&self) -> &[NonManifoldEdge] {
        &self.non_manifold_edges
    }

    /// Every edge shared by exactly two faces, in key order.
    #[must_use]
    pub fn interior_edges(&self) -> Vec<EdgeKey> {
        let mut edges: Vec<EdgeKey> = self
            .neighbors
            .iter()
            .enumerate()
            .flat_map(|(face, list)| {
                list.iter()
                    .filter(move |n| n.face > face)
                    .map(|n| n.edge)
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Number of edges shared by exactly two faces.
    #[must_use]
    pub fn interior_edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Splits the faces into connected components.
    ///
    /// Components are ordered by their smallest face; faces within a
    /// component are sorted.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.neighbors.len()];
        let mut components = Vec::new();

        for start in 0..self.neighbors.len() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(face) = queue.pop_front() {
                for n in &self.neighbors[face] {
                    if !visited[n.face] {
                        visited[n.face] = true;
                        component.push(n.face);
                        queue.push_back(n.face);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }

        components
    }
}

/// Locates `edge` in the loop of `face`, returning its slots in loop order.
fn edge_slots(poly: &Polyhedron, face: usize, edge: EdgeKey) -> Result<(usize, usize)> {
    poly.face(face)?
        .find_edge(edge)
        .map(|e| (e.start_slot, e.end_slot))
        .ok_or_else(|| TopologyError::InconsistentTopology { face, edge }.into())
}
