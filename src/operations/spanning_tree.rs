use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::operations::adjacency::FaceAdjacency;
use crate::topology::EdgeKey;

/// The link from a non-root face to the face that discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLink {
    /// The parent face.
    pub parent: usize,
    /// The hinge edge shared with the parent.
    pub edge: EdgeKey,
}

/// A breadth-first spanning tree over the face adjacency graph.
///
/// Tree edges are the hinges of the net; every other shared edge is a cut.
/// Faces outside the root's connected component carry no link and are
/// reported as unreachable, never confused with the root.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: usize,
    links: Vec<Option<TreeLink>>,
    reachable: Vec<bool>,
    order: Vec<usize>,
}

impl SpanningTree {
    /// Runs a breadth-first search from `root`.
    ///
    /// Neighbors are visited in adjacency order (neighbor index, then edge
    /// key), so the same mesh and root always give the same tree.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::RootOutOfRange`] if `root` is not a face.
    pub fn build(adjacency: &FaceAdjacency, root: usize) -> Result<Self> {
        let face_count = adjacency.face_count();
        if root >= face_count {
            return Err(TopologyError::RootOutOfRange { root, face_count }.into());
        }

        let mut links: Vec<Option<TreeLink>> = vec![None; face_count];
        let mut reachable = vec![false; face_count];
        let mut order = Vec::with_capacity(face_count);
        let mut queue = VecDeque::from([root]);
        reachable[root] = true;

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for n in adjacency.neighbors(current) {
                if !reachable[n.face] {
                    reachable[n.face] = true;
                    links[n.face] = Some(TreeLink {
                        parent: current,
                        edge: n.edge,
                    });
                    queue.push_back(n.face);
                }
            }
        }

        debug!(
            root,
            reached = order.len(),
            faces = face_count,
            "built spanning tree"
        );

        Ok(Self {
            root,
            links,
            reachable,
            order,
        })
    }

    /// The root face.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Number of faces (reachable or not).
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.links.len()
    }

    /// Number of faces in the root's component.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.order.len()
    }

    /// The link of a face to its parent; `None` for the root and for
    /// unreachable faces.
    #[must_use]
    pub fn link(&self, face: usize) -> Option<&TreeLink> {
        self.links.get(face).and_then(Option::as_ref)
    }

    /// The parent of a face; `None` for the root and for unreachable faces.
    #[must_use]
    pub fn parent(&self, face: usize) -> Option<usize> {
        self.link(face).map(|l| l.parent)
    }

    /// Returns `true` if the face is in the root's component.
    #[must_use]
    pub fn is_reachable(&self, face: usize) -> bool {
        self.reachable.get(face).copied().unwrap_or(false)
    }

    /// Faces in breadth-first discovery order, root first.
    ///
    /// Every face appears after its parent.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Faces outside the root's component, ascending.
    #[must_use]
    pub fn unreachable_faces(&self) -> Vec<usize> {
        (0..self.reachable.len())
            .filter(|&f| !self.reachable[f])
            .collect()
    }

    /// Children of a face, in discovery order.
    #[must_use]
    pub fn children(&self, face: usize) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&f| self.parent(f) == Some(face))
            .collect()
    }

    /// Number of hinges between a face and the root, or `None` if the face
    /// is unreachable.
    #[must_use]
    pub fn depth(&self, face: usize) -> Option<usize> {
        if !self.is_reachable(face) {
            return None;
        }
        let mut depth = 0;
        let mut current = face;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        Some(depth)
    }

    /// Hinges as `(parent, child, edge)`, in discovery order of the child.
    #[must_use]
    pub fn hinge_edges(&self) -> Vec<(usize, usize, EdgeKey)> {
        self.order
            .iter()
            .filter_map(|&f| self.link(f).map(|l| (l.parent, f, l.edge)))
            .collect()
    }

    /// Shared edges inside the root's component that are not hinges, in key
    /// order.
    #[must_use]
    pub fn cut_edges(&self, adjacency: &FaceAdjacency) -> Vec<EdgeKey> {
        let mut cuts: Vec<EdgeKey> = Vec::new();
        for &face in &self.order {
            for n in adjacency.neighbors(face) {
                if n.face < face {
                    continue;
                }
                let is_hinge = self
                    .link(n.face)
                    .is_some_and(|l| l.parent == face && l.edge == n.edge)
                    || self
                        .link(face)
                        .is_some_and(|l| l.parent == n.face && l.edge == n.edge);
                if !is_hinge {
                    cuts.push(n.edge);
                }
            }
        }
        cuts.sort_unstable();
        cuts
    }

    /// The parent array with `-1` for the root and for unreachable faces.
    ///
    /// Use [`Self::is_reachable`] to tell those two apart.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn parent_indices(&self) -> Vec<isize> {
        (0..self.links.len())
            .map(|f| self.parent(f).map_or(-1, |p| p as isize))
            .collect()
    }
}
