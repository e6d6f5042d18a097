pub mod plane;

pub use plane::FacePlane;
