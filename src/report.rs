/*!
 * Reporting functionality for Monofile
 *
 * Provides functionality for generating formatted reports of ingest
 * results using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::ProcessingStats;
use crate::utils::format_file_size;

/// Outcome of one ingest run, as presented to the user
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to ingest and flatten, absent for restored sessions
    pub duration: Option<Duration>,
    /// When the presented session was saved, for restored sessions
    pub saved_at: Option<DateTime<Utc>>,
    /// Aggregate statistics
    pub stats: ProcessingStats,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for ingest results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on ingest statistics
    pub fn generate_report(&self, report: &IngestReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &IngestReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &IngestReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        if let Some(duration) = report.duration {
            rows.push(SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", duration),
            });
        }

        if let Some(saved_at) = report.saved_at {
            rows.push(SummaryRow {
                key: "🕒 Session Saved".to_string(),
                value: saved_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            });
        }

        rows.push(SummaryRow {
            key: "📄 Files Processed".to_string(),
            value: self.format_number(report.stats.total_files),
        });

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(report.stats.total_lines),
        });

        rows.push(SummaryRow {
            key: "💾 Total Size".to_string(),
            value: format_file_size(report.stats.total_size),
        });

        // Rough chars-per-token estimate, good enough for budgeting
        let estimated_tokens = report.stats.total_size as usize / 4;
        rows.push(SummaryRow {
            key: "📦 LLM Tokens".to_string(),
            value: format!("{} tokens (estimated)", self.format_number(estimated_tokens)),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a file-types table using the tabled crate
    fn create_file_types_table(&self, report: &IngestReport) -> String {
        #[derive(Tabled)]
        struct TypeRow {
            #[tabled(rename = "Type")]
            file_type: String,

            #[tabled(rename = "Files")]
            files: String,

            #[tabled(rename = "Share")]
            share: String,
        }

        // Sort types by file count, largest first
        let mut types: Vec<_> = report.stats.file_types.iter().collect();
        types.sort_by(|(name_a, count_a), (name_b, count_b)| {
            count_b.cmp(count_a).then_with(|| name_a.cmp(name_b))
        });

        let types_to_show = if types.len() > 15 {
            &types[0..10]
        } else {
            &types[..]
        };

        let total_files = report.stats.total_files.max(1);
        let rows: Vec<TypeRow> = types_to_show
            .iter()
            .map(|(name, count)| TypeRow {
                file_type: name.to_string(),
                files: self.format_number(**count),
                share: format!("{:.1}%", (**count as f64 / total_files as f64) * 100.0),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &IngestReport) -> String {
        let summary_table = self.create_summary_table(report);
        let types_table = self.create_file_types_table(report);

        let summary_title = if report.saved_at.is_some() {
            "✅  SESSION RESTORED"
        } else {
            "✅  INGESTION COMPLETE"
        };
        let types_title = if report.stats.file_types.len() > 15 {
            "📋  TOP 10 FILE TYPES  📋"
        } else {
            "📋  FILE TYPES"
        };

        // Types first, then the summary, matching reading order on a terminal
        format!(
            "{}\n{}\n\n{}\n{}",
            types_title, types_table, summary_title, summary_table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_report() -> IngestReport {
        let mut file_types = BTreeMap::new();
        file_types.insert("TS".to_string(), 2);
        file_types.insert("MD".to_string(), 1);
        IngestReport {
            output_file: "monofile_codebase.txt".to_string(),
            duration: Some(Duration::from_millis(125)),
            saved_at: None,
            stats: ProcessingStats {
                total_files: 3,
                total_lines: 40,
                total_size: 2048,
                file_types,
            },
        }
    }

    #[test]
    fn test_report_contains_totals_and_types() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        let rendered = reporter.generate_report(&sample_report());
        assert!(rendered.contains("INGESTION COMPLETE"));
        assert!(rendered.contains("monofile_codebase.txt"));
        assert!(rendered.contains("TS"));
        assert!(rendered.contains("66.7%"));
        assert!(rendered.contains("2.00 KB"));
    }

    #[test]
    fn test_restored_report_shows_saved_instant() {
        let mut report = sample_report();
        report.duration = None;
        report.saved_at = Some(Utc::now());
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        let rendered = reporter.generate_report(&report);
        assert!(rendered.contains("SESSION RESTORED"));
        assert!(rendered.contains("Session Saved"));
        assert!(!rendered.contains("Process Time"));
    }

    #[test]
    fn test_format_number_units() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        assert_eq!(reporter.format_number(950), "950");
        assert_eq!(reporter.format_number(1_500), "1.5K");
        assert_eq!(reporter.format_number(2_400_000), "2.4M");
    }
}
