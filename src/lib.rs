pub mod config;
pub mod error;
pub mod models;
pub mod companies;
pub mod sources;
pub mod normalize;
pub mod aggregation;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use companies::{CompanyCatalog, CompanyProfile};
pub use sources::{HttpSourceClient, ProblemSource};
pub use aggregation::Aggregator;
pub use api::{build_router, AppState};
