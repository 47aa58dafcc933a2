use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::process::{classify_all, resolve_columns, ClassifiedSet, ResolvedColumns};
use crate::report;
use crate::source::{RawTable, TableSource};
use crate::stats::{Aggregator, Summary};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub columns: ResolvedColumns,
    pub classified: ClassifiedSet,
    pub summary: Summary,
    pub report: String,
}

impl Analysis {
    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.classified)
    }
}

/// Load `source` and run the full analysis. Any fatal error aborts before a report exists.
#[tracing::instrument(level = "info", skip_all, fields(source = %source.describe()))]
pub fn run<S: TableSource + ?Sized>(source: &S, cfg: &AnalysisConfig) -> Result<Analysis> {
    let table = source.load()?;
    analyze(&table, cfg)
}

/// Resolve → classify → aggregate → render over an already loaded table.
pub fn analyze(table: &RawTable, cfg: &AnalysisConfig) -> Result<Analysis> {
    if table.is_empty() {
        warn!("source has a header row but no data rows");
    }
    let columns = resolve_columns(&table.headers, &cfg.columns)?;
    info!(
        ethics = %table.headers[columns.ethics],
        release_date = %table.headers[columns.release_date],
        creator = %table.headers[columns.creator],
        task = %table.headers[columns.task],
        "resolved columns"
    );

    let classified = classify_all(table, &columns, cfg);
    let summary = Summary::from_aggregator(&Aggregator::new(&classified), &cfg.keywords_version);
    let report = report::render(&summary);
    info!(
        total = summary.total,
        documented = summary.documented,
        rate = %format!("{:.2}", summary.overall_rate),
        "analysis complete"
    );

    Ok(Analysis {
        columns,
        classified,
        summary,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::process::{CreatorType, Domain, Era};
    use crate::source::Cell;

    fn headers() -> Vec<String> {
        [
            "Model",
            "Q1. Model creator",
            "Q3b. Release Date",
            "Task (HuggingFace)",
            "Q20. Ethical considerations",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn row(model: &str, creator: &str, date: Cell, task: &str, ethics: &str) -> Vec<Cell> {
        vec![
            Cell::from(model),
            Cell::from(creator),
            date,
            Cell::from(task),
            Cell::from(ethics),
        ]
    }

    fn scenario() -> RawTable {
        RawTable::new(
            headers(),
            vec![
                row(
                    "A",
                    "Google",
                    Cell::from("2024-03-01"),
                    "text-generation",
                    "bias and fairness concerns were discussed",
                ),
                row(
                    "B",
                    "IndieLab",
                    Cell::Number(2021.0),
                    "image-classification",
                    "not applicable",
                ),
                row("C", "Meta", Cell::from("sometime"), "text-generation", "privacy"),
            ],
        )
    }

    #[test]
    fn test_three_record_scenario() {
        let a = run(&scenario(), &AnalysisConfig::default()).unwrap();
        let recs = &a.classified.records;
        assert_eq!(recs.len(), 2);
        assert_eq!(a.classified.dropped, 1);
        assert_eq!(format!("{:.2}", a.aggregator().overall_rate()), "50.00");

        let (ra, rb) = (&recs[0], &recs[1]);
        assert_eq!(ra.domain, Domain::Nlp);
        assert_eq!(rb.domain, Domain::ComputerVision);
        assert_eq!(ra.era, Era::GenAi);
        assert_eq!(rb.era, Era::PreGenAi);
        assert_eq!(ra.creator_label, CreatorType::BigTech);
        assert_eq!(rb.creator_label, CreatorType::Independent);

        let bias = a
            .summary
            .themes
            .iter()
            .find(|t| t.name == "Bias & Fairness")
            .unwrap();
        assert_eq!(bias.count, 1);
        assert_eq!(a.summary.documented, 1);
        assert_eq!(format!("{:.1}", bias.percent), "100.0");
        assert!(a.report.contains("   Bias & Fairness : 1 models (100.0%)"));
    }

    #[test]
    fn test_missing_column_aborts_without_report() {
        let mut table = scenario();
        table.headers[4] = "Q20. Notes".into();
        let err = run(&table, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::ColumnNotFound { .. }));
        assert!(err.to_string().contains("ethics"));
    }

    #[test]
    fn test_all_rows_dropped_still_reports() {
        let table = RawTable::new(
            headers(),
            vec![row("X", "Intel", Cell::Missing, "audio", "carbon")],
        );
        let a = run(&table, &AnalysisConfig::default()).unwrap();
        assert!(a.classified.is_empty());
        assert_eq!(a.summary.overall_rate, 0.0);
        assert!(a.report.contains("Total Models Analyzed: 0\n"));
        assert!(a.report.contains("(Based on 0 documented models)"));
    }

    #[test]
    fn test_header_only_table_reports_zeros() {
        let table = RawTable::new(headers(), Vec::new());
        assert!(table.is_empty());
        let a = run(&table, &AnalysisConfig::default()).unwrap();
        assert_eq!(a.summary.total, 0);
        assert_eq!(a.classified.dropped, 0);
        assert!(a.report.contains("Total Models Analyzed: 0\n"));
    }
}
