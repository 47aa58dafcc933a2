use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::{ColumnPair, ColumnSpecs};
use crate::error::{AnalysisError, Result};
use crate::process::utils::clean_header;

/// The four columns the analysis needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalField {
    Ethics,
    ReleaseDate,
    Creator,
    Task,
}

impl LogicalField {
    pub fn name(self) -> &'static str {
        match self {
            LogicalField::Ethics => "ethics",
            LogicalField::ReleaseDate => "release_date",
            LogicalField::Creator => "creator",
            LogicalField::Task => "task",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column indices of the resolved logical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub ethics: usize,
    pub release_date: usize,
    pub creator: usize,
    pub task: usize,
}

/// Every header containing both substrings of `pair`, case-insensitively, in header order.
pub fn matching_columns(headers: &[String], pair: &ColumnPair) -> Vec<usize> {
    let semantic = pair.semantic.to_lowercase();
    let code = pair.code.to_lowercase();
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            let h = clean_header(h).to_lowercase();
            h.contains(&semantic) && h.contains(&code)
        })
        .map(|(i, _)| i)
        .collect()
}

/// First header matching `pair`, if any.
pub fn find_column(headers: &[String], pair: &ColumnPair) -> Option<usize> {
    matching_columns(headers, pair).into_iter().next()
}

/// Resolve all four logical fields; the first missing one aborts with `ColumnNotFound`.
pub fn resolve_columns(headers: &[String], specs: &ColumnSpecs) -> Result<ResolvedColumns> {
    let mut found = [0usize; 4];
    for (slot, (field, pair)) in found.iter_mut().zip(specs.pairs()) {
        let candidates = matching_columns(headers, pair);
        let Some(&first) = candidates.first() else {
            return Err(AnalysisError::ColumnNotFound {
                field,
                semantic: pair.semantic.clone(),
                code: pair.code.clone(),
            });
        };
        if candidates.len() > 1 {
            debug!(
                %field,
                chosen = %headers[first],
                shadowed = ?&candidates[1..],
                "several headers match; keeping the first"
            );
        }
        *slot = first;
    }

    let [ethics, release_date, creator, task] = found;
    Ok(ResolvedColumns {
        ethics,
        release_date,
        creator,
        task,
    })
}
