//! Unfolds polyhedral meshes into flat 2D nets for papercraft and laser-cut
//! development drawings.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`FaceAdjacency::build`] finds which faces share edges.
//! 2. [`SpanningTree::build`] picks, breadth-first from a root face, the
//!    shared edges that stay hinged; every other shared edge is cut.
//! 3. [`FacePlacer`] lays each face flat and attaches it rigidly to its
//!    parent across the hinge.
//!
//! [`unfold_mesh`] and [`Unfold`] run all three and return an
//! [`UnfoldResult`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod net;
pub mod operations;
pub mod params;
pub mod topology;

pub use error::{GeometryError, Result, TopologyError, UnfoldError};
pub use net::{Diagnostic, NetBounds, UnfoldResult, VertexPlacement};
pub use operations::{
    unfold_mesh, FaceAdjacency, FaceNeighbor, FacePlacer, NonManifoldEdge, SpanningTree,
    TreeLink, Unfold,
};
pub use params::UnfoldParams;
pub use topology::{EdgeKey, Face, Polyhedron};
