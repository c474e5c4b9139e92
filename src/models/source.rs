use serde::{Serialize, Serializer};
use std::fmt;

/// The external question banks, in the order they are queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceName {
    LeetCode,
    GeeksForGeeks,
    HackerRank,
    CodingNinjas,
    Code360,
}

impl SourceName {
    pub const ALL: [SourceName; 5] = [
        SourceName::LeetCode,
        SourceName::GeeksForGeeks,
        SourceName::HackerRank,
        SourceName::CodingNinjas,
        SourceName::Code360,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceName::LeetCode => "LeetCode",
            SourceName::GeeksForGeeks => "GeeksforGeeks",
            SourceName::HackerRank => "HackerRank",
            SourceName::CodingNinjas => "Coding Ninjas",
            SourceName::Code360 => "Code360",
        }
    }

    /// Key used in `platform_distribution`: the display name lowercased with spaces removed.
    pub fn distribution_key(&self) -> &'static str {
        match self {
            SourceName::LeetCode => "leetcode",
            SourceName::GeeksForGeeks => "geeksforgeeks",
            SourceName::HackerRank => "hackerrank",
            SourceName::CodingNinjas => "codingninjas",
            SourceName::Code360 => "code360",
        }
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for SourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}
