pub mod adjacency;
pub mod query;
pub mod spanning_tree;
pub mod unfold;

pub use adjacency::{FaceAdjacency, FaceNeighbor, NonManifoldEdge};
pub use spanning_tree::{SpanningTree, TreeLink};
pub use unfold::{unfold_mesh, FacePlacer, Placement, Unfold};
