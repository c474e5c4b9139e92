use std::sync::Arc;

use crate::companies::{CompanyCatalog, CompanyProfile};
use crate::error::Result;
use crate::models::{NormalizedProblem, RawProblem, SourceName};
use crate::normalize::extract;
use crate::sources::ProblemSource;

/// Sequential fetch, normalize and filter across every registered source.
pub struct Aggregator {
    source: Arc<dyn ProblemSource>,
    catalog: Arc<CompanyCatalog>,
}

impl Aggregator {
    pub fn new(source: Arc<dyn ProblemSource>, catalog: Arc<CompanyCatalog>) -> Self {
        Self { source, catalog }
    }

    pub fn catalog(&self) -> &CompanyCatalog {
        &self.catalog
    }

    /// Problems for `company`, in source order then source-native order.
    ///
    /// An unsupported company yields an empty list. An empty `difficulty` is
    /// treated as no filter.
    pub async fn aggregate(
        &self,
        company: &str,
        difficulty: Option<&str>,
    ) -> Vec<NormalizedProblem> {
        let Some(profile) = self.catalog.lookup(company) else {
            tracing::info!("Unsupported company requested: {}", company);
            return Vec::new();
        };
        let difficulty = difficulty.map(str::trim).filter(|d| !d.is_empty());

        let mut problems = Vec::new();

        for source in SourceName::ALL {
            let raw = self.fetch_or_empty(source).await;

            if let Err(e) = collect_matches(source, &raw, profile, difficulty, &mut problems) {
                tracing::warn!("Error processing {} questions: {}", source, e);
            }
        }

        tracing::info!(
            "Aggregated {} questions for {} (difficulty: {})",
            problems.len(),
            profile.id,
            difficulty.unwrap_or("any")
        );
        problems
    }

    async fn fetch_or_empty(&self, source: SourceName) -> Vec<RawProblem> {
        match self.source.fetch(source).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Error fetching {} questions: {}", source, e);
                Vec::new()
            }
        }
    }
}

/// Appends matching records until the source is exhausted or a record is malformed.
fn collect_matches(
    source: SourceName,
    raw: &[RawProblem],
    profile: &CompanyProfile,
    difficulty: Option<&str>,
    out: &mut Vec<NormalizedProblem>,
) -> Result<()> {
    for record in raw {
        let extracted = extract(source, record)?;

        if !profile.matches(&extracted.title_lowercase) {
            continue;
        }
        if let Some(wanted) = difficulty {
            if !extracted.difficulty.matches_filter(wanted) {
                continue;
            }
        }

        out.push(extracted.into_problem());
    }
    Ok(())
}
