pub mod edge;
pub mod face;

pub use edge::EdgeKey;
pub use face::{Face, FaceEdge};

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::Point3;

/// A polygonal surface mesh: vertex positions plus face loops.
///
/// Faces reference vertices by index. The mesh is assumed to be manifold
/// (every undirected edge used by at most two faces); violations are
/// reported by the adjacency builder, not rejected here.
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    /// Display name.
    pub name: String,
    vertices: Vec<Point3>,
    faces: Vec<Face>,
}

impl Polyhedron {
    /// Creates a new, empty polyhedron.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a polyhedron from existing vertex and face lists.
    #[must_use]
    pub fn from_parts(name: impl Into<String>, vertices: Vec<Point3>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
        }
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its index.
    pub fn add_vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Returns the position of a vertex referenced by `face`.
    ///
    /// # Errors
    ///
    /// Returns an error naming `face` if `index` is not a vertex of this mesh.
    pub fn vertex(&self, face: usize, index: usize) -> Result<&Point3> {
        self.vertices.get(index).ok_or_else(|| {
            TopologyError::VertexOutOfRange {
                face,
                vertex: index,
                vertex_count: self.vertices.len(),
            }
            .into()
        })
    }

    /// All vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Face operations ---

    /// Inserts a face from its vertex loop and returns its index.
    pub fn add_face(&mut self, vertices: Vec<usize>) -> usize {
        self.faces.push(Face::new(vertices));
        self.faces.len() - 1
    }

    /// Returns the face, or an error if out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a face of this mesh.
    pub fn face(&self, index: usize) -> Result<&Face> {
        self.faces.get(index).ok_or_else(|| {
            TopologyError::FaceOutOfRange {
                face: index,
                face_count: self.faces.len(),
            }
            .into()
        })
    }

    /// All faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Collects the 3D positions of a face's loop, in loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or any of its vertices is out of range.
    pub fn face_points(&self, index: usize) -> Result<Vec<Point3>> {
        self.face(index)?
            .vertices()
            .iter()
            .map(|&v| self.vertex(index, v).copied())
            .collect()
    }

    /// Appends all vertices and faces of `other`, re-indexing its faces.
    ///
    /// The two meshes share no vertices afterwards, so no edge of `other`
    /// becomes adjacent to an edge of `self`.
    pub fn append(&mut self, other: &Polyhedron) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| Face::new(f.vertices().iter().map(|v| v + offset).collect())),
        );
    }

    /// Checks the structural preconditions for unfolding.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has no faces, a face has fewer than
    /// three vertices, a face references a missing vertex or one with a NaN
    /// or infinite coordinate, or a face repeats a vertex on consecutive slots.
    pub fn validate(&self) -> Result<()> {
        if self.faces.is_empty() {
            return Err(GeometryError::EmptyMesh.into());
        }
        for (index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(GeometryError::TooFewVertices {
                    face: index,
                    count: face.len(),
                }
                .into());
            }
            for edge in face.edges() {
                let point = self.vertex(index, edge.start)?;
                if !point.coords.iter().all(|c| c.is_finite()) {
                    return Err(GeometryError::NonFiniteVertex {
                        face: index,
                        vertex: edge.start,
                    }
                    .into());
                }
                if edge.start == edge.end {
                    return Err(GeometryError::DegenerateEdge {
                        face: index,
                        slot: edge.start_slot,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
