mod winding;

pub use winding::check_winding;
