pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod process;
pub mod report;
pub mod source;
pub mod stats;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::{run, Analysis};
