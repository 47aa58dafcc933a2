use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse release period. Variant order is chronological, which is also the
/// order eras are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "Pre-GenAI")]
    PreGenAi,
    #[serde(rename = "GenAI")]
    GenAi,
}

impl Era {
    /// `Pre-GenAI` up to and including `boundary_year`, `GenAI` after it.
    pub fn from_year(year: i32, boundary_year: i32) -> Self {
        if year <= boundary_year {
            Era::PreGenAi
        } else {
            Era::GenAi
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Era::PreGenAi => "Pre-GenAI",
            Era::GenAi => "GenAI",
        }
    }

    /// Long form printed in the report.
    pub fn label(self) -> &'static str {
        match self {
            Era::PreGenAi => "Pre-GenAI (2018-22)",
            Era::GenAi => "GenAI Era (2023-25)",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreatorType {
    #[serde(rename = "Big Tech")]
    BigTech,
    #[serde(rename = "Independent")]
    Independent,
}

impl CreatorType {
    pub fn from_flag(is_big_tech: bool) -> Self {
        if is_big_tech {
            CreatorType::BigTech
        } else {
            CreatorType::Independent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreatorType::BigTech => "Big Tech",
            CreatorType::Independent => "Independent",
        }
    }
}

impl fmt::Display for CreatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Application domain. Variants are declared in label order so sorted
/// breakdowns come out alphabetically; rule precedence lives in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Audio")]
    Audio,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Multimodal")]
    Multimodal,
    #[serde(rename = "NLP")]
    Nlp,
    #[serde(rename = "Other")]
    Other,
}

impl Domain {
    pub fn label(self) -> &'static str {
        match self {
            Domain::Audio => "Audio",
            Domain::ComputerVision => "Computer Vision",
            Domain::Multimodal => "Multimodal",
            Domain::Nlp => "NLP",
            Domain::Other => "Other",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
