use anyhow::{Context, Result};
use std::{env, path::Path, process::exit};
use tracing_subscriber::{fmt, EnvFilter};

use cardethics::{
    process::columns::matching_columns,
    source::{CsvSource, TableSource},
    AnalysisConfig,
};

use prettytable::{format, Cell, Row, Table};

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Expect exactly one CLI argument: path to the CSV export.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let bin = args.first().map_or("header_check", String::as_str);
        eprintln!("Usage: {} <SURVEY_CSV>", bin);
        exit(1);
    }
    if let Err(e) = check_headers(Path::new(&args[1])) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Print every header with the logical field it would feed, if any.
fn check_headers(path: &Path) -> Result<()> {
    let source = CsvSource::new(path);
    let table = source
        .load()
        .with_context(|| format!("loading {}", source.path().display()))?;
    let cfg = AnalysisConfig::default();

    let mut roles: Vec<Vec<String>> = vec![Vec::new(); table.headers.len()];
    let mut unresolved = Vec::new();
    for (field, pair) in cfg.columns.pairs() {
        let hits = matching_columns(&table.headers, pair);
        if hits.is_empty() {
            unresolved.push(field);
        }
        for (n, idx) in hits.into_iter().enumerate() {
            let tag = if n == 0 {
                field.to_string()
            } else {
                format!("{} (shadowed)", field)
            };
            roles[idx].push(tag);
        }
    }

    let mut out = Table::new();
    out.set_format(*format::consts::FORMAT_BOX_CHARS);
    out.add_row(Row::new(vec![
        Cell::new("#").style_spec("bFg"),
        Cell::new("Header").style_spec("bFg"),
        Cell::new("Field").style_spec("bFg"),
    ]));
    for (idx, header) in table.headers.iter().enumerate() {
        out.add_row(Row::new(vec![
            Cell::new(&idx.to_string()).style_spec("r"),
            Cell::new(header),
            Cell::new(&roles[idx].join(", ")),
        ]));
    }

    if table.is_empty() {
        println!("\n--- {} (no data rows) ---", source.path().display());
    } else {
        println!("\n--- {} ({} rows) ---", source.path().display(), table.len());
    }
    out.printstd();

    if unresolved.is_empty() {
        println!("All required columns resolved.");
    } else {
        for field in &unresolved {
            println!("MISSING: {}", field);
        }
    }
    Ok(())
}
