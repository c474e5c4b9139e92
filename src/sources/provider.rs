use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RawProblem, SourceName};

/// Fetches the raw listing for one question bank.
///
/// Implementations return premium-only problems already stripped. Errors are
/// reported to the caller, which is expected to log them and carry on.
#[async_trait]
pub trait ProblemSource: Send + Sync {
    async fn fetch(&self, source: SourceName) -> Result<Vec<RawProblem>>;
}
