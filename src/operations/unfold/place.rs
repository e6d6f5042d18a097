use tracing::{trace, warn};

use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::FacePlane;
use crate::math::rigid_2d::align_segment;
use crate::math::Point2;
use crate::operations::adjacency::{FaceAdjacency, FaceNeighbor};
use crate::operations::spanning_tree::{SpanningTree, TreeLink};
use crate::params::UnfoldParams;
use crate::topology::Polyhedron;

/// Face placements produced by [`FacePlacer::place`].
#[derive(Debug, Clone, Default)]
pub struct Placement {
    /// One polygon per face in loop order; `None` for faces not in the tree.
    pub faces: Vec<Option<Vec<Point2>>>,
    /// Placed faces whose vertices stray from their plane, with the largest
    /// distance found.
    pub non_planar: Vec<(usize, f64)>,
}

/// Lays the faces of a spanning tree out in the plane.
///
/// The root is projected into its own plane frame, which puts its first
/// vertex at the origin and its second on the positive x axis. Every other
/// face is projected into its own frame too and then moved rigidly so its
/// hinge lands on the hinge already placed by its parent. Faces are visited
/// in breadth-first order, so a parent is always placed before its children.
pub struct FacePlacer<'a> {
    poly: &'a Polyhedron,
    adjacency: &'a FaceAdjacency,
    tree: &'a SpanningTree,
    params: &'a UnfoldParams,
}

impl<'a> FacePlacer<'a> {
    /// Creates a new `FacePlacer`.
    #[must_use]
    pub fn new(
        poly: &'a Polyhedron,
        adjacency: &'a FaceAdjacency,
        tree: &'a SpanningTree,
        params: &'a UnfoldParams,
    ) -> Self {
        Self {
            poly,
            adjacency,
            tree,
            params,
        }
    }

    /// Places every face reachable from the tree's root.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has no faces, a placed face has fewer
    /// than three vertices or a zero-length first edge, or a hinge has
    /// different lengths on its two sides.
    pub fn place(&self) -> Result<Placement> {
        if self.poly.face_count() == 0 {
            return Err(GeometryError::EmptyMesh.into());
        }

        let mut placement = Placement {
            faces: vec![None; self.poly.face_count()],
            non_planar: Vec::new(),
        };

        for &face in self.tree.order() {
            let plane = FacePlane::from_face(self.poly, face)?;
            let points = self.poly.face_points(face)?;
            let candidate: Vec<Point2> = points.iter().map(|p| plane.project(p)).collect();

            let deviation = points
                .iter()
                .map(|p| plane.distance(p).abs())
                .fold(0.0, f64::max);
            if deviation > self.params.planarity_tolerance {
                warn!(face, deviation, "face is not planar; projecting it");
                placement.non_planar.push((face, deviation));
            }

            let placed = match self.tree.link(face) {
                None => candidate,
                Some(link) => self.attach(face, link, &candidate, &placement.faces)?,
            };
            placement.faces[face] = Some(placed);
        }

        placement.non_planar.sort_by_key(|&(face, _)| face);
        Ok(placement)
    }

    /// Moves a child's candidate polygon onto its parent's hinge.
    fn attach(
        &self,
        face: usize,
        link: &TreeLink,
        candidate: &[Point2],
        placed: &[Option<Vec<Point2>>],
    ) -> Result<Vec<Point2>> {
        let parent = link.parent;
        let child_side = self.hinge_side(face, parent, link)?;
        let parent_side = self.hinge_side(parent, face, link)?;

        let off_parent = || TopologyError::InconsistentTopology {
            face: parent,
            edge: link.edge,
        };
        let off_child = || TopologyError::InconsistentTopology {
            face,
            edge: link.edge,
        };

        let parent_points = placed
            .get(parent)
            .and_then(Option::as_deref)
            .ok_or_else(off_parent)?;

        // Pair the hinge endpoints by vertex, not by slot: the two faces
        // traverse the hinge in opposite directions.
        let child_loop = self.poly.face(face)?.vertices();
        let parent_loop = self.poly.face(parent)?.vertices();
        let (c0, c1) = child_side.slots;
        let child_start = child_loop.get(c0).ok_or_else(off_child)?;
        let parent_start = parent_loop.get(parent_side.slots.0).ok_or_else(off_parent)?;
        let (p0, p1) = if parent_start == child_start {
            parent_side.slots
        } else {
            (parent_side.slots.1, parent_side.slots.0)
        };

        let from = [
            *candidate.get(c0).ok_or_else(off_child)?,
            *candidate.get(c1).ok_or_else(off_child)?,
        ];
        let to = [
            *parent_points.get(p0).ok_or_else(off_parent)?,
            *parent_points.get(p1).ok_or_else(off_parent)?,
        ];

        let expected = (to[1] - to[0]).norm();
        let actual = (from[1] - from[0]).norm();
        if (expected - actual).abs() > self.params.hinge_tolerance * expected.max(1.0) {
            return Err(GeometryError::HingeLengthMismatch {
                face,
                parent,
                expected,
                actual,
            }
            .into());
        }

        let transform = align_segment(from, to)
            .ok_or(GeometryError::DegenerateEdge { face, slot: c0 })?;

        trace!(face, parent, edge = %link.edge, "attached face to parent");
        Ok(candidate.iter().map(|p| transform * p).collect())
    }

    /// The adjacency entry of `face` that points at `other` across the hinge.
    fn hinge_side(&self, face: usize, other: usize, link: &TreeLink) -> Result<&FaceNeighbor> {
        self.adjacency
            .neighbors(face)
            .iter()
            .find(|n| n.face == other && n.edge == link.edge)
            .ok_or_else(|| {
                TopologyError::InconsistentTopology {
                    face,
                    edge: link.edge,
                }
                .into()
            })
    }
}
