use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

use super::problem::NormalizedProblem;
use super::source::SourceName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyDistribution {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyDistribution {
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

/// Per-source counts, always covering every source in `SourceName::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformDistribution {
    counts: [usize; SourceName::ALL.len()],
}

impl PlatformDistribution {
    fn index(source: SourceName) -> usize {
        SourceName::ALL
            .iter()
            .position(|s| *s == source)
            .unwrap_or_default()
    }

    pub fn increment(&mut self, source: SourceName) {
        self.counts[Self::index(source)] += 1;
    }

    pub fn get(&self, source: SourceName) -> usize {
        self.counts[Self::index(source)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for PlatformDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SourceName::ALL.len()))?;
        for source in SourceName::ALL {
            map.serialize_entry(source.distribution_key(), &self.get(source))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationSummary {
    pub total_questions: usize,
    pub difficulty_distribution: DifficultyDistribution,
    pub platform_distribution: PlatformDistribution,
}

/// Summary plus the problems it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub company: String,
    #[serde(flatten)]
    pub summary: AggregationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<NormalizedProblem>>,
}
