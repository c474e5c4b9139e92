use serde::{Serialize, Serializer};
use std::fmt;

use super::source::SourceName;

/// A problem exactly as one source returned it.
pub type RawProblem = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }

    /// Case-insensitive comparison against a caller-supplied filter value.
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.label().eq_ignore_ascii_case(filter)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedProblem {
    #[serde(rename = "platform")]
    pub source: SourceName,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: String,
    #[serde(rename = "total_accepted")]
    pub accepted_count: u64,
    #[serde(rename = "total_submitted")]
    pub submitted_count: u64,
    pub acceptance_rate: String,
}

impl NormalizedProblem {
    pub fn new(
        source: SourceName,
        title: String,
        difficulty: Difficulty,
        url: String,
        accepted_count: u64,
        submitted_count: u64,
    ) -> Self {
        Self {
            source,
            title,
            difficulty,
            url,
            accepted_count,
            submitted_count,
            acceptance_rate: acceptance_rate(accepted_count, submitted_count),
        }
    }
}

/// `"N/A"` when nothing was submitted, otherwise the percentage with one decimal place.
pub fn acceptance_rate(accepted: u64, submitted: u64) -> String {
    if submitted == 0 {
        return "N/A".to_string();
    }
    format!("{:.1}%", accepted as f64 / submitted as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_rate() {
        assert_eq!(acceptance_rate(45, 100), "45.0%");
        assert_eq!(acceptance_rate(1000, 2000), "50.0%");
        assert_eq!(acceptance_rate(1, 3), "33.3%");
        assert_eq!(acceptance_rate(0, 0), "N/A");
        assert_eq!(acceptance_rate(7, 0), "N/A");
        assert_eq!(acceptance_rate(0, 10), "0.0%");
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(3), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(0), Difficulty::Unknown);
        assert_eq!(Difficulty::from_label("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("School"), Difficulty::Unknown);
    }

    #[test]
    fn test_difficulty_filter_is_case_insensitive() {
        assert!(Difficulty::Easy.matches_filter("easy"));
        assert!(Difficulty::Easy.matches_filter("EASY"));
        assert!(!Difficulty::Medium.matches_filter("easy"));
        assert!(!Difficulty::Unknown.matches_filter("easy"));
        assert!(!Difficulty::Hard.matches_filter("hrad"));
    }

    #[test]
    fn test_problem_wire_format() {
        let problem = NormalizedProblem::new(
            SourceName::CodingNinjas,
            "Amazon Prime Deals".to_string(),
            Difficulty::Medium,
            "https://example.com/p/1".to_string(),
            3,
            4,
        );
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["platform"], "Coding Ninjas");
        assert_eq!(json["difficulty"], "Medium");
        assert_eq!(json["total_accepted"], 3);
        assert_eq!(json["total_submitted"], 4);
        assert_eq!(json["acceptance_rate"], "75.0%");
    }
}
