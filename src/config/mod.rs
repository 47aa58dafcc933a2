// src/config/mod.rs
pub mod keywords;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::process::columns::LogicalField;
use crate::process::labels::Domain;

/// Keywords of a single ethical theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

/// One ordered domain rule: the first rule with a keyword found in the task text wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRule {
    pub domain: Domain,
    pub keywords: Vec<String>,
}

/// The two substrings a header must contain to be picked for a logical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPair {
    pub semantic: String,
    pub code: String,
}

impl ColumnPair {
    fn from_const((semantic, code): (&str, &str)) -> Self {
        Self {
            semantic: semantic.to_string(),
            code: code.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpecs {
    pub ethics: ColumnPair,
    pub release_date: ColumnPair,
    pub creator: ColumnPair,
    pub task: ColumnPair,
}

impl ColumnSpecs {
    /// Pairs in resolution order.
    pub fn pairs(&self) -> [(LogicalField, &ColumnPair); 4] {
        [
            (LogicalField::Ethics, &self.ethics),
            (LogicalField::ReleaseDate, &self.release_date),
            (LogicalField::Creator, &self.creator),
            (LogicalField::Task, &self.task),
        ]
    }
}

impl Default for ColumnSpecs {
    fn default() -> Self {
        Self {
            ethics: ColumnPair::from_const(keywords::ETHICS_COLUMN),
            release_date: ColumnPair::from_const(keywords::RELEASE_DATE_COLUMN),
            creator: ColumnPair::from_const(keywords::CREATOR_COLUMN),
            task: ColumnPair::from_const(keywords::TASK_COLUMN),
        }
    }
}

/// Every table the classifier consults. Passed explicitly through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub keywords_version: String,
    pub organizations: Vec<String>,
    pub themes: Vec<ThemeKeywords>,
    pub negative_phrases: Vec<String>,
    pub negative_long_forms: Vec<String>,
    pub era_boundary_year: i32,
    pub min_ethics_len: usize,
    pub domain_rules: Vec<DomainRule>,
    pub columns: ColumnSpecs,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keywords_version: keywords::KEYWORDS_VERSION.to_string(),
            organizations: owned(keywords::BIG_TECH_KEYWORDS),
            themes: keywords::THEME_KEYWORDS
                .iter()
                .map(|(name, kws)| ThemeKeywords {
                    name: name.to_string(),
                    keywords: owned(kws),
                })
                .collect(),
            negative_phrases: owned(keywords::NEGATIVE_PHRASES),
            negative_long_forms: owned(keywords::NEGATIVE_LONG_FORMS),
            era_boundary_year: keywords::ERA_BOUNDARY_YEAR,
            min_ethics_len: keywords::MIN_ETHICS_LEN,
            domain_rules: vec![
                DomainRule {
                    domain: Domain::Multimodal,
                    keywords: owned(keywords::MULTIMODAL_KEYWORDS),
                },
                DomainRule {
                    domain: Domain::Nlp,
                    keywords: owned(keywords::NLP_KEYWORDS),
                },
                DomainRule {
                    domain: Domain::ComputerVision,
                    keywords: owned(keywords::VISION_KEYWORDS),
                },
                DomainRule {
                    domain: Domain::Audio,
                    keywords: owned(keywords::AUDIO_KEYWORDS),
                },
            ],
            columns: ColumnSpecs::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load a YAML file. Fields left out keep their default tables.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| AnalysisError::config(path, e))?;
        let cfg = Self::from_yaml_str(&text).map_err(|e| AnalysisError::config(path, e))?;
        info!(path = %path.display(), version = %cfg.keywords_version, "loaded config");
        Ok(cfg)
    }

    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let mut cfg: Self = serde_yaml::from_str(text)?;
        cfg.normalize();
        Ok(cfg)
    }

    /// Names of the configured themes, in definition order.
    pub fn theme_names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name.clone()).collect()
    }

    // Matching is done on lower-cased text, so the tables must be lower-case too.
    fn normalize(&mut self) {
        let lower = |v: &mut Vec<String>| v.iter_mut().for_each(|s| *s = s.to_lowercase());
        lower(&mut self.organizations);
        lower(&mut self.negative_phrases);
        lower(&mut self.negative_long_forms);
        self.themes.iter_mut().for_each(|t| lower(&mut t.keywords));
        self.domain_rules.iter_mut().for_each(|r| lower(&mut r.keywords));
    }
}
