use crate::error::{GeometryError, Result};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::topology::Polyhedron;

/// The supporting plane of a face, with an orthonormal in-plane frame.
///
/// The origin is the face's first vertex and `u_dir` runs along the first
/// edge. The normal is the face's outward unit normal and
/// `v_dir = normal × u_dir`, so a counter-clockwise loop (seen from
/// outside) projects to a counter-clockwise polygon.
#[derive(Debug, Clone)]
pub struct FacePlane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl FacePlane {
    /// Builds the frame of face `face` of `poly`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face has fewer than three vertices, its first
    /// edge has zero or non-finite length, or its vertices are collinear.
    pub fn from_face(poly: &Polyhedron, face: usize) -> Result<Self> {
        let points = poly.face_points(face)?;
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                face,
                count: points.len(),
            }
            .into());
        }

        if let Some((&vertex, _)) = poly
            .face(face)?
            .vertices()
            .iter()
            .zip(&points)
            .find(|(_, q)| !q.coords.iter().all(|c| c.is_finite()))
        {
            return Err(GeometryError::NonFiniteVertex { face, vertex }.into());
        }

        let first_edge = points[1] - points[0];
        let edge_len = first_edge.norm();
        if !edge_len.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "first edge of face {face} overflows"
            ))
            .into());
        }
        if edge_len < TOLERANCE {
            return Err(GeometryError::DegenerateEdge { face, slot: 0 }.into());
        }
        let u_dir = first_edge / edge_len;

        let normal = newell_normal(&points);
        let normal_len = normal.norm();
        if !normal_len.is_finite() {
            return Err(
                GeometryError::Degenerate(format!("normal of face {face} overflows")).into(),
            );
        }
        if normal_len < TOLERANCE {
            return Err(
                GeometryError::Degenerate(format!("face {face} has collinear vertices")).into(),
            );
        }
        let normal = normal / normal_len;

        // Re-orthogonalize so the frame stays unit length on warped faces.
        let v_dir = normal.cross(&u_dir);
        let v_len = v_dir.norm();
        if !v_len.is_finite() || v_len < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "first edge of face {face} is parallel to its normal"
            ))
            .into());
        }
        let v_dir = v_dir / v_len;
        let normal = u_dir.cross(&v_dir);

        Ok(Self {
            origin: points[0],
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Projects a 3D point onto the plane's UV coordinates.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let diff = point - self.origin;
        Point2::new(diff.dot(&self.u_dir), diff.dot(&self.v_dir))
    }

    /// Signed distance of a point from the plane, along the normal.
    #[must_use]
    pub fn distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}
