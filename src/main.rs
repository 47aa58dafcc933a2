use anyhow::{bail, Context, Result};
use cardethics::{
    export,
    report::{FileSink, ReportSink, StdoutSink},
    source::CsvSource,
    AnalysisConfig,
};
use clap::Parser;
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Ethics-documentation report over a model-card survey sheet (RQ1-RQ4)"
)]
struct Args {
    /// Survey sheet exported as CSV
    input: PathBuf,

    /// Where the text report goes
    #[arg(short, long, default_value = "analysis_results_master.txt")]
    output: PathBuf,

    /// Print the report to stdout instead of writing `--output`
    #[arg(long)]
    stdout: bool,

    /// YAML file replacing the built-in keyword tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the aggregate numbers as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also write the classified rows as Parquet
    #[arg(long)]
    parquet: Option<PathBuf>,

    /// Field delimiter of the input
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }

    // ─── 2) configuration ────────────────────────────────────────────
    let cfg = match &args.config {
        Some(path) => AnalysisConfig::from_yaml_file(path)?,
        None => AnalysisConfig::default(),
    };
    info!(version = %cfg.keywords_version, "keyword tables");

    // ─── 3) analyze ──────────────────────────────────────────────────
    let source = CsvSource::new(&args.input).with_delimiter(args.delimiter as u8);
    let analysis = cardethics::run(&source, &cfg)
        .with_context(|| format!("analysis of {} failed", args.input.display()))?;

    // ─── 4) emit ─────────────────────────────────────────────────────
    if args.stdout {
        StdoutSink.emit(&analysis.report)?;
    } else {
        FileSink::new(&args.output).emit(&analysis.report)?;
    }

    if let Some(path) = &args.json {
        fs::write(path, analysis.summary.to_json()?)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    if let Some(path) = &args.parquet {
        export::write_classified(&analysis.classified, path)?;
    }

    info!("all done");
    Ok(())
}
