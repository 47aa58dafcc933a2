// src/process/mod.rs
pub mod classify;
pub mod columns;
pub mod date_parser;
pub mod labels;
pub mod utils;

pub use classify::{classify_all, classify_row, ClassifiedRecord, ClassifiedSet, RawRecord};
pub use columns::{resolve_columns, LogicalField, ResolvedColumns};
pub use labels::{CreatorType, Domain, Era};
