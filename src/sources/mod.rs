pub mod registry;
pub mod provider;
pub mod client;

pub use registry::{source_spec, FieldSchema, SourceSpec};
pub use provider::ProblemSource;
pub use client::HttpSourceClient;
