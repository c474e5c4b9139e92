pub mod aggregator;
pub mod summary;

pub use aggregator::Aggregator;
pub use summary::{build_result, summarize};
