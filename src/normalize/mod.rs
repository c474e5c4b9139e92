//! Maps each source's native record into the canonical problem shape using
//! the field rules registered for that source.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Difficulty, NormalizedProblem, RawProblem, SourceName};
use crate::sources::client::json_type;
use crate::sources::registry::{source_spec, AcceptedRule, DifficultyRule, FieldSchema, UrlRule};

/// Canonical fields pulled out of a raw record, title still lowercased for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedProblem {
    pub source: SourceName,
    pub title_lowercase: String,
    pub difficulty: Difficulty,
    pub url: String,
    pub accepted_count: u64,
    pub submitted_count: u64,
}

impl ExtractedProblem {
    pub fn into_problem(self) -> NormalizedProblem {
        NormalizedProblem::new(
            self.source,
            title_case(&self.title_lowercase),
            self.difficulty,
            self.url,
            self.accepted_count,
            self.submitted_count,
        )
    }
}

pub fn normalize(source: SourceName, raw: &RawProblem) -> Result<NormalizedProblem> {
    extract(source, raw).map(ExtractedProblem::into_problem)
}

pub fn extract(source: SourceName, raw: &RawProblem) -> Result<ExtractedProblem> {
    if !raw.is_object() {
        return Err(Error::malformed(
            source,
            format!("expected an object, found {}", json_type(raw)),
        ));
    }

    let schema: &FieldSchema = &source_spec(source).schema;
    let reader = FieldReader { source, raw };

    let title_lowercase = reader.string(schema.title)?.to_lowercase();

    let difficulty = match schema.difficulty {
        DifficultyRule::LevelCode(pointer) => reader.level(pointer),
        DifficultyRule::Label(pointer) => {
            let label = reader.string(pointer)?;
            Difficulty::from_label(&label)
        }
    };

    let url = match schema.url {
        UrlRule::Template { template, slug } => template.replace("{slug}", &reader.string(slug)?),
        UrlRule::Direct(pointer) => reader.string(pointer)?,
    };

    let submitted_count = to_count(reader.number(schema.submitted)?);
    let accepted_count = match schema.accepted {
        AcceptedRule::Count(pointer) => to_count(reader.number(pointer)?),
        AcceptedRule::Ratio { ratio, total } => {
            to_count(reader.number(ratio)? * reader.number(total)?)
        }
    };

    Ok(ExtractedProblem {
        source,
        title_lowercase,
        difficulty,
        url,
        accepted_count,
        submitted_count,
    })
}

struct FieldReader<'a> {
    source: SourceName,
    raw: &'a Value,
}

impl FieldReader<'_> {
    fn string(&self, pointer: &str) -> Result<String> {
        match self.raw.pointer(pointer) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.wrong_type(pointer, "string", other)),
        }
    }

    fn number(&self, pointer: &str) -> Result<f64> {
        match self.raw.pointer(pointer) {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or_default()),
            Some(other) => Err(self.wrong_type(pointer, "number", other)),
        }
    }

    fn level(&self, pointer: &str) -> Difficulty {
        // integral floats such as 1.0 are still level codes
        self.raw
            .pointer(pointer)
            .and_then(Value::as_f64)
            .filter(|level| level.fract() == 0.0)
            .map(|level| Difficulty::from_level(level as i64))
            .unwrap_or(Difficulty::Unknown)
    }

    fn wrong_type(&self, pointer: &str, expected: &str, found: &Value) -> Error {
        Error::malformed(
            self.source,
            format!("{} should be a {}, found {}", pointer, expected, json_type(found)),
        )
    }
}

fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
