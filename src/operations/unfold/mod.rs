mod place;

pub use place::{FacePlacer, Placement};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::net::{Diagnostic, UnfoldResult};
use crate::operations::adjacency::FaceAdjacency;
use crate::operations::query::check_winding;
use crate::operations::spanning_tree::SpanningTree;
use crate::params::UnfoldParams;
use crate::topology::Polyhedron;

/// Unfolds a polyhedron into a flat net rooted at one face.
///
/// Runs the whole pipeline: validation, face adjacency, the optional
/// winding check, the breadth-first spanning tree and face placement.
/// Non-manifold edges, unreachable faces and warped faces do not fail the
/// unfold; they are returned as [`Diagnostic`]s next to the partial net.
pub struct Unfold {
    root: usize,
    params: UnfoldParams,
}

impl Unfold {
    /// Creates a new `Unfold` operation with default parameters.
    #[must_use]
    pub fn new(root: usize) -> Self {
        Self {
            root,
            params: UnfoldParams::default(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: UnfoldParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the unfold.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh fails validation, the root is out of
    /// range, adjacent faces wind inconsistently (when checked), or a face
    /// cannot be placed.
    pub fn execute(&self, poly: &Polyhedron) -> Result<UnfoldResult> {
        info!(
            name = %poly.name,
            faces = poly.face_count(),
            vertices = poly.vertex_count(),
            root = self.root,
            "unfolding polyhedron"
        );

        poly.validate()?;
        let adjacency = FaceAdjacency::build(poly)?;
        if self.params.check_winding {
            check_winding(poly, &adjacency)?;
        }
        let tree = SpanningTree::build(&adjacency, self.root)?;
        let placement = FacePlacer::new(poly, &adjacency, &tree, &self.params).place()?;

        let mut diagnostics: Vec<Diagnostic> = adjacency
            .non_manifold_edges()
            .iter()
            .cloned()
            .map(Diagnostic::NonManifoldEdge)
            .collect();
        for face in tree.unreachable_faces() {
            warn!(face, root = self.root, "face not reachable from root");
            diagnostics.push(Diagnostic::UnreachableFace { face });
        }
        diagnostics.extend(
            placement
                .non_planar
                .iter()
                .map(|&(face, deviation)| Diagnostic::NonPlanarFace { face, deviation }),
        );

        let cuts = tree.cut_edges(&adjacency);
        debug!(
            hinges = tree.reachable_count().saturating_sub(1),
            cuts = cuts.len(),
            "chose hinges"
        );

        let result = UnfoldResult::assemble(
            poly,
            placement.faces,
            tree,
            cuts,
            diagnostics,
            self.params.merge_tolerance,
        );
        info!(
            placed = result.placed_face_count(),
            diagnostics = result.diagnostics().len(),
            "unfold finished"
        );
        Ok(result)
    }
}

/// Unfolds `poly` from `root` with default parameters.
///
/// # Errors
///
/// See [`Unfold::execute`].
pub fn unfold_mesh(poly: &Polyhedron, root: usize) -> Result<UnfoldResult> {
    Unfold::new(root).execute(poly)
}
