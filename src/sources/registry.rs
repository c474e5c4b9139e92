//! One table row per question bank: where to fetch, where the listing lives in
//! the payload, and how to pull each canonical field out of a record.
//!
//! All field locations are JSON pointers into a single raw record.

use crate::models::SourceName;

#[derive(Debug, Clone, Copy)]
pub enum DifficultyRule {
    /// Numeric 1/2/3 code.
    LevelCode(&'static str),
    /// Free-form string label.
    Label(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub enum UrlRule {
    /// `{slug}` in the template is replaced with the value at `slug`.
    Template {
        template: &'static str,
        slug: &'static str,
    },
    /// The record already carries a full URL.
    Direct(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub enum AcceptedRule {
    Count(&'static str),
    /// accepted = ratio * total, rounded to the nearest integer.
    Ratio {
        ratio: &'static str,
        total: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub title: &'static str,
    pub difficulty: DifficultyRule,
    pub url: UrlRule,
    pub accepted: AcceptedRule,
    pub submitted: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub source: SourceName,
    pub default_endpoint: &'static str,
    pub endpoint_env: &'static str,
    pub listing: &'static str,
    pub premium_flag: Option<&'static str>,
    pub schema: FieldSchema,
}

const CODING_NINJAS_SCHEMA: FieldSchema = FieldSchema {
    title: "/title",
    difficulty: DifficultyRule::Label("/difficulty"),
    url: UrlRule::Direct("/url"),
    accepted: AcceptedRule::Count("/accepted"),
    submitted: "/submitted",
};

static SOURCE_SPECS: [SourceSpec; 5] = [
    SourceSpec {
        source: SourceName::LeetCode,
        default_endpoint: "https://leetcode.com/api/problems/all/",
        endpoint_env: "LEETCODE_API_URL",
        listing: "/stat_status_pairs",
        premium_flag: Some("/paid_only"),
        schema: FieldSchema {
            title: "/stat/question__title",
            difficulty: DifficultyRule::LevelCode("/difficulty/level"),
            url: UrlRule::Template {
                template: "https://leetcode.com/problems/{slug}/",
                slug: "/stat/question__title_slug",
            },
            accepted: AcceptedRule::Count("/stat/total_acs"),
            submitted: "/stat/total_submitted",
        },
    },
    SourceSpec {
        source: SourceName::GeeksForGeeks,
        default_endpoint: "https://practice.geeksforgeeks.org/api/v1/problems/all/",
        endpoint_env: "GFG_API_URL",
        listing: "/problems",
        premium_flag: Some("/paid_only"),
        schema: FieldSchema {
            title: "/title",
            difficulty: DifficultyRule::Label("/difficulty"),
            url: UrlRule::Template {
                template: "https://practice.geeksforgeeks.org/problems/{slug}",
                slug: "/slug",
            },
            accepted: AcceptedRule::Count("/accepted"),
            submitted: "/submitted",
        },
    },
    SourceSpec {
        source: SourceName::HackerRank,
        default_endpoint: "https://www.hackerrank.com/rest/contests/master/challenges",
        endpoint_env: "HACKERRANK_API_URL",
        listing: "/models",
        premium_flag: Some("/paid_only"),
        schema: FieldSchema {
            title: "/name",
            difficulty: DifficultyRule::Label("/difficulty_name"),
            url: UrlRule::Template {
                template: "https://www.hackerrank.com/challenges/{slug}",
                slug: "/slug",
            },
            accepted: AcceptedRule::Ratio {
                ratio: "/success_ratio",
                total: "/total_submissions",
            },
            submitted: "/total_submissions",
        },
    },
    SourceSpec {
        source: SourceName::CodingNinjas,
        default_endpoint: "https://www.codingninjas.com/api/v3/courses/2/problems",
        endpoint_env: "CODING_NINJAS_API_URL",
        listing: "/data/problems",
        premium_flag: Some("/paid_only"),
        schema: CODING_NINJAS_SCHEMA,
    },
    SourceSpec {
        source: SourceName::Code360,
        default_endpoint: "https://www.codingninjas.com/api/v3/courses/2/problems",
        endpoint_env: "CODE360_API_URL",
        listing: "/data/problems",
        premium_flag: Some("/paid_only"),
        schema: CODING_NINJAS_SCHEMA,
    },
];

pub fn source_spec(source: SourceName) -> &'static SourceSpec {
    // rows are stored in `SourceName` declaration order
    &SOURCE_SPECS[source as usize]
}
