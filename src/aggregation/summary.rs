use crate::models::{
    AggregationResult, AggregationSummary, Difficulty, DifficultyDistribution, NormalizedProblem,
    PlatformDistribution,
};

/// Tallies problems by difficulty and by source. `Unknown` lands in no difficulty bucket.
pub fn summarize(problems: &[NormalizedProblem]) -> AggregationSummary {
    let mut difficulty_distribution = DifficultyDistribution::default();
    let mut platform_distribution = PlatformDistribution::default();

    for problem in problems {
        match problem.difficulty {
            Difficulty::Easy => difficulty_distribution.easy += 1,
            Difficulty::Medium => difficulty_distribution.medium += 1,
            Difficulty::Hard => difficulty_distribution.hard += 1,
            Difficulty::Unknown => {}
        }
        platform_distribution.increment(problem.source);
    }

    AggregationSummary {
        total_questions: problems.len(),
        difficulty_distribution,
        platform_distribution,
    }
}

pub fn build_result(
    company: &str,
    problems: Vec<NormalizedProblem>,
    include_questions: bool,
) -> AggregationResult {
    let summary = summarize(&problems);
    AggregationResult {
        company: company.to_string(),
        summary,
        questions: include_questions.then_some(problems),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceName;

    fn problem(source: SourceName, difficulty: Difficulty) -> NormalizedProblem {
        NormalizedProblem::new(source, "Echo Server".to_string(), difficulty, String::new(), 1, 2)
    }

    #[test]
    fn test_summarize_counts() {
        let problems = vec![
            problem(SourceName::LeetCode, Difficulty::Easy),
            problem(SourceName::LeetCode, Difficulty::Hard),
            problem(SourceName::HackerRank, Difficulty::Medium),
            problem(SourceName::Code360, Difficulty::Unknown),
            problem(SourceName::Code360, Difficulty::Easy),
        ];

        let summary = summarize(&problems);
        assert_eq!(summary.total_questions, 5);
        assert_eq!(
            summary.difficulty_distribution,
            DifficultyDistribution { easy: 2, medium: 1, hard: 1 }
        );
        assert_eq!(summary.platform_distribution.get(SourceName::LeetCode), 2);
        assert_eq!(summary.platform_distribution.get(SourceName::GeeksForGeeks), 0);
        assert_eq!(summary.platform_distribution.get(SourceName::Code360), 2);
        assert!(summary.difficulty_distribution.total() <= summary.total_questions);
        assert_eq!(summary.platform_distribution.total(), summary.total_questions);
    }

    #[test]
    fn test_empty_summary_lists_every_platform() {
        let summary = summarize(&[]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_questions"], 0);
        for source in SourceName::ALL {
            assert_eq!(json["platform_distribution"][source.distribution_key()], 0);
        }
        assert_eq!(json["difficulty_distribution"]["easy"], 0);
    }

    #[test]
    fn test_build_result_without_questions() {
        let problems = vec![problem(SourceName::LeetCode, Difficulty::Easy)];

        let detail = build_result("Amazon", problems.clone(), true);
        assert_eq!(detail.company, "Amazon");
        assert_eq!(detail.questions.as_ref().map(Vec::len), Some(1));

        let summary_only = build_result("amazon", problems, false);
        assert!(summary_only.questions.is_none());
        let json = serde_json::to_value(&summary_only).unwrap();
        assert!(json.get("questions").is_none());
        assert_eq!(json["total_questions"], 1);
    }
}
