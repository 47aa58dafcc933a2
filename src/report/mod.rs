// src/report/mod.rs
pub mod sink;

pub use sink::{FileSink, ReportSink, StdoutSink};

use std::fmt;

use crate::stats::Summary;

const RULE: &str = "=======================================================";

/// The master report, rendered via `Display`.
pub struct TextReport<'a>(pub &'a Summary);

/// Render `summary` as the master report text.
pub fn render(summary: &Summary) -> String {
    TextReport(summary).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;

        writeln!(f, "{RULE}")?;
        writeln!(f, "   SEMINAR ANALYSIS: MASTER REPORT (RQ1 - RQ4)")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        // RQ1
        writeln!(f, "--- RQ1: EXTENT OF COVERAGE ---")?;
        writeln!(f, "Total Models Analyzed: {}", s.total)?;
        writeln!(f, "Documented Models:     {}", s.documented)?;
        writeln!(f, "Global Adoption Rate:  {:.2}%", s.overall_rate)?;
        writeln!(f)?;
        writeln!(f, "Adoption by Creator:")?;
        writeln!(f, "   Big Tech:    {:.2}%", s.big_tech_rate)?;
        writeln!(f, "   Independent: {:.2}%", s.independent_rate)?;
        writeln!(f)?;

        // RQ4
        writeln!(f, "--- RQ4: DOMAIN ANALYSIS ---")?;
        for g in &s.by_domain {
            writeln!(f, "   {:<15}: {:.2}% (n={})", g.key.label(), g.rate, g.count)?;
        }
        writeln!(f)?;

        // RQ2
        writeln!(f, "--- RQ2: ETHICAL THEMES (Global) ---")?;
        writeln!(f, "(Based on {} documented models)", s.documented)?;
        for t in &s.themes {
            writeln!(f, "   {:<16}: {} models ({:.1}%)", t.name, t.count, t.percent)?;
        }
        writeln!(f)?;

        // RQ3
        writeln!(f, "--- RQ3: TEMPORAL EVOLUTION ---")?;
        for g in &s.by_era {
            writeln!(f, "   {}: {:.2}%", g.key, g.rate)?;
        }
        writeln!(f)?;
        writeln!(f, "Yearly Breakdown:")?;
        for g in &s.by_year {
            writeln!(f, "   {}: {:.2}%", g.key, g.rate)?;
        }
        writeln!(f)?;

        writeln!(f, "{RULE}")?;
        writeln!(f, "             DEEP DIVE ANALYSIS (CROSS-TABS)")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        writeln!(f, "1. HOW DID THE CONVERSATION CHANGE? (Themes by Era)")?;
        writeln!(f, "(% of documented models in that era discussing the topic)")?;
        for t in &s.themes_by_era {
            writeln!(f)?;
            writeln!(f, "   [{}]", t.theme)?;
            for g in &t.groups {
                writeln!(f, "      {}: {:.1}%", g.key, g.percent)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "2. CORPORATE vs. INDEPENDENT PRIORITIES (Themes by Creator)")?;
        for t in &s.themes_by_creator {
            writeln!(f)?;
            writeln!(f, "   [{}]", t.theme)?;
            for g in &t.groups {
                writeln!(f, "      {:<12}: {:.1}%", g.key.label(), g.percent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::labels::{CreatorType, Domain, Era};
    use crate::stats::{GroupRate, GroupValue, ThemeBreakdown, ThemeCount, ThemeGroupRate};

    fn summary() -> Summary {
        Summary {
            keywords_version: "t".into(),
            total: 3,
            documented: 2,
            dropped: 1,
            overall_rate: 200.0 / 3.0,
            big_tech_rate: 100.0,
            independent_rate: 0.0,
            by_creator: vec![],
            by_domain: vec![GroupRate {
                key: GroupValue::Domain(Domain::ComputerVision),
                count: 3,
                documented: 2,
                rate: 200.0 / 3.0,
            }],
            by_era: vec![
                GroupRate {
                    key: GroupValue::Era(Era::PreGenAi),
                    count: 1,
                    documented: 0,
                    rate: 0.0,
                },
                GroupRate {
                    key: GroupValue::Era(Era::GenAi),
                    count: 2,
                    documented: 2,
                    rate: 100.0,
                },
            ],
            by_year: vec![GroupRate {
                key: GroupValue::Year(2024),
                count: 3,
                documented: 2,
                rate: 200.0 / 3.0,
            }],
            themes: vec![ThemeCount {
                name: "Safety & Misuse".into(),
                count: 1,
                percent: 50.0,
            }],
            themes_by_era: vec![ThemeBreakdown {
                theme: "Safety & Misuse".into(),
                groups: vec![ThemeGroupRate {
                    key: GroupValue::Era(Era::GenAi),
                    documented: 2,
                    percent: 50.0,
                }],
            }],
            themes_by_creator: vec![ThemeBreakdown {
                theme: "Safety & Misuse".into(),
                groups: vec![ThemeGroupRate {
                    key: GroupValue::Creator(CreatorType::BigTech),
                    documented: 2,
                    percent: 50.0,
                }],
            }],
        }
    }

    #[test]
    fn test_render_layout() {
        let text = render(&summary());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "   SEMINAR ANALYSIS: MASTER REPORT (RQ1 - RQ4)");
        assert!(text.contains("Global Adoption Rate:  66.67%\n"));
        assert!(text.contains("   Big Tech:    100.00%\n   Independent: 0.00%\n"));
        assert!(text.contains("   Computer Vision: 66.67% (n=3)\n"));
        assert!(text.contains("   Safety & Misuse : 1 models (50.0%)\n"));
        assert!(text.contains("   Pre-GenAI (2018-22): 0.00%\n   GenAI Era (2023-25): 100.00%\n"));
        assert!(text.contains("Yearly Breakdown:\n   2024: 66.67%\n"));
        assert!(text.contains("   [Safety & Misuse]\n      GenAI Era (2023-25): 50.0%\n"));
        assert!(text.contains("   [Safety & Misuse]\n      Big Tech    : 50.0%\n"));
        assert!(text.ends_with("Big Tech    : 50.0%\n"));
    }

    #[test]
    fn test_section_order() {
        let text = render(&summary());
        let pos = |needle: &str| text.find(needle).unwrap();
        let order = [
            pos("--- RQ1"),
            pos("--- RQ4"),
            pos("--- RQ2"),
            pos("--- RQ3"),
            pos("DEEP DIVE"),
            pos("1. HOW DID"),
            pos("2. CORPORATE"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
