pub mod classified;

pub use classified::{classified_schema, to_record_batch, write_classified};
