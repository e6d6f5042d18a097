use crate::error::{GeometryError, Result, TopologyError};
use crate::operations::adjacency::FaceAdjacency;
use crate::topology::Polyhedron;

/// Verifies that adjacent faces wind consistently.
///
/// Two faces sharing an edge are consistently oriented when they traverse
/// that edge in opposite directions. A mesh whose loops are all
/// counter-clockwise from outside passes; a mesh with a flipped face fails
/// at the first shared edge of that face (in face, then edge order).
///
/// # Errors
///
/// Returns [`GeometryError::InconsistentWinding`] for the first edge both of
/// whose faces run the same way, and [`TopologyError::InconsistentTopology`]
/// if `adjacency` names a slot the face does not have.
pub fn check_winding(poly: &Polyhedron, adjacency: &FaceAdjacency) -> Result<()> {
    for (face_idx, face) in poly.faces().iter().enumerate() {
        for n in adjacency.neighbors(face_idx) {
            if n.face < face_idx {
                continue;
            }
            let Some(back) = adjacency
                .neighbors(n.face)
                .iter()
                .find(|b| b.face == face_idx && b.edge == n.edge)
            else {
                continue;
            };
            let other = poly.face(n.face)?;
            let start_here = face.vertices().get(n.slots.0).ok_or(
                TopologyError::InconsistentTopology {
                    face: face_idx,
                    edge: n.edge,
                },
            )?;
            let start_there = other.vertices().get(back.slots.0).ok_or(
                TopologyError::InconsistentTopology {
                    face: n.face,
                    edge: n.edge,
                },
            )?;
            if start_here == start_there {
                return Err(GeometryError::InconsistentWinding {
                    edge: n.edge,
                    faces: [face_idx, n.face],
                }
                .into());
            }
        }
    }
    Ok(())
}
