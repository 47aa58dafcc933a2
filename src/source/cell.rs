use chrono::NaiveDateTime;

use crate::process::date_parser;

/// A loosely-typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Missing,
}

impl Cell {
    /// Build a cell from raw CSV text: empty → `Missing`, numeric → `Number`.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Textual form of the cell; `Missing` becomes the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
            Cell::Missing => String::new(),
        }
    }

    /// Calendar year of a date-like cell, `None` when it cannot be parsed.
    pub fn to_year(&self) -> Option<i32> {
        match self {
            Cell::Date(d) => Some(date_parser::year_of(d)),
            Cell::Number(n) => date_parser::year_from_number(*n),
            Cell::Text(s) => date_parser::parse_year(s),
            Cell::Missing => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<Option<&str>> for Cell {
    fn from(s: Option<&str>) -> Self {
        s.map(Cell::from).unwrap_or(Cell::Missing)
    }
}
