//! Header metadata for streams of map data: bounding boxes, the multi-version
//! flag and free-form string options.

mod header;
pub use header::*;

pub mod options;
pub use options::Options;

pub mod types;
pub use types::*;
