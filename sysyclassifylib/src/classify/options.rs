//! Options controlling how records are classified and labelled.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of the column labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// Chinese labels, as used by the SysY test-suite reports
    #[default]
    Chinese,
    /// English labels
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" | "cn" | "chinese" => Ok(Language::Chinese),
            "en" | "english" => Ok(Language::English),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// How to treat grammar counters that a category reads but the record lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strictness {
    /// Missing counters abort classification with `FieldMissing`
    #[default]
    Strict,
    /// Missing counters read as zero
    Lenient,
}

/// Options for classifying a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Label language for the header row
    pub language: Language,
    /// Missing-field policy
    pub strictness: Strictness,
}

impl ClassifyOptions {
    /// Create new default options (Chinese labels, strict fields).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set label language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set missing-field policy.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Shorthand for `strictness(Strictness::Lenient)`.
    pub fn lenient(self) -> Self {
        self.strictness(Strictness::Lenient)
    }
}
