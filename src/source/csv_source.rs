use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use csv::ReaderBuilder;
use tracing::{debug, info};

use super::{Cell, RawTable, TableSource};
use crate::error::{AnalysisError, Result};

/// The survey sheet exported as delimited text.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[tracing::instrument(level = "info", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<RawTable> {
        let file =
            File::open(&self.path).map_err(|e| AnalysisError::source_unreadable(&self.path, e))?;
        let table = read_table(BufReader::new(file), self.delimiter)
            .map_err(|e| AnalysisError::source_unreadable(&self.path, e))?;
        info!(
            columns = table.headers.len(),
            rows = table.len(),
            "loaded survey sheet"
        );
        Ok(table)
    }
}

/// Parse delimited text with a header row. Rows may be shorter or longer than the header.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> std::result::Result<RawTable, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            debug!(row = idx, cells = record.len(), "row wider than header");
        }
        rows.push(record.iter().map(Cell::infer).collect());
    }

    Ok(RawTable::new(headers, rows))
}
