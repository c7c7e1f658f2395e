//! Contains geographic value types: locations and bounding boxes.

mod geo_box;
pub use geo_box::*;

mod location;
pub use location::*;
