//! Parameters for mesh unfolding.

/// Parameters for mesh unfolding.
#[derive(Debug, Clone)]
pub struct UnfoldParams {
    /// Allowed disagreement between a hinge's length as placed by the parent
    /// and as seen by the child, relative to the hinge length (absolute for
    /// hinges shorter than 1). Default: 1e-6
    pub hinge_tolerance: f64,

    /// Distance under which two placements of the same vertex count as one
    /// position in the vertex view of the net. Default: 1e-9
    pub merge_tolerance: f64,

    /// Largest distance of a face vertex from the face's plane before the
    /// face is reported as non-planar. Default: 1e-6
    pub planarity_tolerance: f64,

    /// Reject meshes whose adjacent faces wind in the same direction across
    /// a shared edge. Default: true
    pub check_winding: bool,
}

impl Default for UnfoldParams {
    fn default() -> Self {
        Self {
            hinge_tolerance: 1e-6,
            merge_tolerance: 1e-9,
            planarity_tolerance: 1e-6,
            check_winding: true,
        }
    }
}

impl UnfoldParams {
    /// Set the hinge length tolerance.
    #[must_use]
    pub const fn with_hinge_tolerance(mut self, tolerance: f64) -> Self {
        self.hinge_tolerance = tolerance;
        self
    }

    /// Set the vertex merge tolerance.
    #[must_use]
    pub const fn with_merge_tolerance(mut self, tolerance: f64) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    /// Set the planarity tolerance.
    #[must_use]
    pub const fn with_planarity_tolerance(mut self, tolerance: f64) -> Self {
        self.planarity_tolerance = tolerance;
        self
    }

    /// Enable or disable the winding consistency check.
    #[must_use]
    pub const fn with_winding_check(mut self, check: bool) -> Self {
        self.check_winding = check;
        self
    }
}
