// src/source/mod.rs
pub mod cell;
pub mod csv_source;

pub use self::cell::Cell;
pub use self::csv_source::CsvSource;

use crate::error::Result;
use crate::process::utils::clean_header;

static MISSING: Cell = Cell::Missing;

/// The survey sheet as loaded: cleaned headers plus loosely-typed rows.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Build a table, cleaning every header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            headers: headers.iter().map(|h| clean_header(h)).collect(),
            rows,
        }
    }

    /// Cell at (`row`, `col`); short rows read as `Missing`.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&MISSING)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Anything that can hand over the survey sheet.
pub trait TableSource {
    /// Human-readable origin for logs and errors.
    fn describe(&self) -> String;

    fn load(&self) -> Result<RawTable>;
}

/// A table already in memory.
impl TableSource for RawTable {
    fn describe(&self) -> String {
        "<in-memory table>".to_string()
    }

    fn load(&self) -> Result<RawTable> {
        Ok(self.clone())
    }
}
