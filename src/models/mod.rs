pub mod source;
pub mod problem;
pub mod summary;

pub use source::*;
pub use problem::*;
pub use summary::*;
