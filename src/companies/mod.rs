//! Company profiles and title keyword matching.
//!
//! Matching is plain substring containment on lowercased titles, so short
//! keywords also hit unrelated words ("aws" matches "awsome"). Callers that
//! need word-boundary precision must filter further.

/// A company and the lowercase keywords that tag a problem title as relevant to it.
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub id: String,
    pub keywords: Vec<String>,
}

impl CompanyProfile {
    pub fn new(id: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_lowercase(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True when any keyword is a substring of the already-lowercased title.
    pub fn matches(&self, title_lowercase: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| title_lowercase.contains(keyword.as_str()))
    }
}

/// Immutable, ordered set of supported companies. Built once at startup.
pub struct CompanyCatalog {
    profiles: Vec<CompanyProfile>,
}

impl CompanyCatalog {
    pub fn new() -> Self {
        let companies: Vec<(&str, Vec<&str>)> = vec![
            (
                "amazon",
                vec![
                    "amazon", "aws", "prime", "echo", "alexa", "kindle",
                    "s3", "ec2", "lambda", "dynamodb", "rds", "amazon web services",
                    "amazon prime", "amazon echo", "amazon alexa", "amazon s3",
                ],
            ),
            (
                "microsoft",
                vec![
                    "microsoft", "azure", "windows", "office", "xbox", "bing", "linkedin",
                    "microsoft azure", "microsoft office", "microsoft teams", "microsoft edge",
                ],
            ),
            (
                "google",
                vec![
                    "google", "gcp", "android", "chrome", "youtube", "maps", "search",
                    "google cloud", "google maps", "google drive", "google docs",
                ],
            ),
            (
                "meta",
                vec![
                    "meta", "facebook", "instagram", "whatsapp", "oculus", "messenger",
                    "meta platforms", "facebook messenger", "instagram api",
                ],
            ),
            (
                "apple",
                vec![
                    "apple", "ios", "macos", "iphone", "ipad", "macbook", "siri",
                    "apple ios", "apple macos", "apple watch", "apple tv",
                ],
            ),
            (
                "netflix",
                vec![
                    "netflix", "streaming", "netflix api", "netflix original",
                    "netflix recommendation", "netflix content",
                ],
            ),
            (
                "uber",
                vec![
                    "uber", "rideshare", "uber eats", "uber api", "uber driver",
                    "uber passenger", "uber pool",
                ],
            ),
            (
                "airbnb",
                vec![
                    "airbnb", "booking", "airbnb api", "airbnb host",
                    "airbnb guest", "airbnb listing",
                ],
            ),
        ];

        Self::from_profiles(
            companies
                .into_iter()
                .map(|(id, keywords)| CompanyProfile::new(id, &keywords))
                .collect(),
        )
    }

    pub fn from_profiles(profiles: Vec<CompanyProfile>) -> Self {
        Self { profiles }
    }

    /// Case-insensitive lookup; `None` for unsupported companies.
    pub fn lookup(&self, company: &str) -> Option<&CompanyProfile> {
        let wanted = company.to_lowercase();
        self.profiles.iter().find(|p| p.id == wanted)
    }

    pub fn company_ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }
}

impl Default for CompanyCatalog {
    fn default() -> Self {
        Self::new()
    }
}
