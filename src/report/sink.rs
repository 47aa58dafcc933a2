use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::info;

/// Destination for a rendered document.
pub trait ReportSink {
    fn emit(&mut self, text: &str) -> Result<()>;
}

pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn emit(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(&self.path, text)
            .with_context(|| format!("writing report to {}", self.path.display()))?;
        info!(path = %self.path.display(), bytes = text.len(), "report written");
        Ok(())
    }
}

pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes()).context("writing report to stdout")?;
        out.flush().context("flushing stdout")
    }
}

/// Collects output in memory.
impl ReportSink for String {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}
