use std::path::PathBuf;

use thiserror::Error;

use crate::process::columns::LogicalField;

/// Fatal conditions that abort an analysis run before any report is produced.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("could not read source {}: {}", .path.display(), .source)]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("required column `{field}` not found (header must contain `{semantic}` and `{code}`)")]
    ColumnNotFound {
        field: LogicalField,
        semantic: String,
        code: String,
    },

    #[error("invalid config {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AnalysisError {
    pub fn source_unreadable(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn config(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Config {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
