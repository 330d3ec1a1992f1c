use std::{collections::BTreeMap, path::PathBuf};

mod terminal;

use clap::ArgAction;
use exigence::{Analysis, Analyzer, storage};
use terminal::Colorize;
use tracing::instrument;

/// Command-line surface of the linter.
#[derive(Debug, clap::Parser)]
#[command(version, about = "Analyse de la qualité des exigences (règles fixes, sans API)")]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to the input workbook (must contain a 'requirement_text' column)
    #[arg(long)]
    input: PathBuf,

    /// Path to write the report workbook
    #[arg(long)]
    output: PathBuf,

    /// Name of the sheet to read (default: the first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Additionally stream one JSON object per analysed row to stdout
    #[arg(long)]
    ndjson: bool,

    /// Suppress the issue summary after a successful run
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    /// Run the linter over the input workbook.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.analyze()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }

    #[instrument(level = "debug", skip(self))]
    fn analyze(&self) -> anyhow::Result<()> {
        let dataset = storage::workbook::read(&self.input, self.sheet.as_deref())?;
        let requirements = dataset.requirements();

        let analyzer = Analyzer::new();
        let analyses = analyzer.analyze_all(&requirements);

        storage::report::write(&self.output, &analyses, &dataset)?;

        if self.ndjson {
            for analysis in &analyses {
                println!("{}", serde_json::to_string(analysis)?);
            }
        }

        if !self.quiet {
            Self::output_summary(&analyses);
        }

        println!("[OK] Rapport généré : {}", self.output.display());
        Ok(())
    }

    /// Per-label issue counts, in alphabetical label order.
    fn output_summary(analyses: &[Analysis]) {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for analysis in analyses {
            for label in &analysis.issues {
                *counts.entry(label.as_str()).or_insert(0) += 1;
            }
        }

        let flagged = analyses.iter().filter(|a| !a.issues.is_empty()).count();
        if flagged == 0 {
            println!(
                "{}",
                format!("✅ Aucune anomalie détectée ({} exigences).", analyses.len()).success()
            );
            return;
        }

        println!(
            "{}",
            format!(
                "⚠️  {flagged} exigence(s) sur {} avec anomalies :",
                analyses.len()
            )
            .warning()
        );
        for (label, count) in &counts {
            println!("  {label:<24} {count}");
        }
    }
}

#[cfg(test)]
mod tests {
    use calamine::{Reader, open_workbook_auto};
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    use super::Cli;

    fn write_input(path: &std::path::Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "id").unwrap();
        sheet.write_string(0, 1, "requirement_text").unwrap();
        sheet.write_string(1, 0, "R1").unwrap();
        sheet
            .write_string(
                1,
                1,
                "Le système doit afficher la température et/ou la pression rapidement.",
            )
            .unwrap();
        workbook.save(path).unwrap();
    }

    #[test]
    fn run_writes_the_report_workbook() {
        let tmp = tempdir().unwrap();
        let input = tmp.path().join("exigences.xlsx");
        let output = tmp.path().join("rapport.xlsx");
        write_input(&input);

        let cli = Cli {
            verbose: 0,
            input: input.clone(),
            output: output.clone(),
            sheet: None,
            ndjson: false,
            quiet: true,
        };
        cli.analyze().expect("analysis run should succeed");

        let mut report = open_workbook_auto(&output).unwrap();
        let range = report.worksheet_range("report").unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|cells| cells.iter().map(ToString::to_string).collect())
            .collect();

        assert_eq!(rows[1][2], "AND_OR, UNMEASURABLE, VAGUE_TERM");
        assert!(rows[1][3].starts_with("Remplacer les termes vagues"));
    }

    #[test]
    fn run_fails_on_missing_input() {
        let tmp = tempdir().unwrap();

        let cli = Cli {
            verbose: 0,
            input: tmp.path().join("absent.xlsx"),
            output: tmp.path().join("rapport.xlsx"),
            sheet: None,
            ndjson: false,
            quiet: true,
        };

        let error = cli.analyze().unwrap_err();
        assert!(error.to_string().contains("Fichier introuvable"));
        assert!(!tmp.path().join("rapport.xlsx").exists());
    }

    #[test]
    fn run_fails_on_missing_required_column() {
        let tmp = tempdir().unwrap();
        let input = tmp.path().join("exigences.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "texte").unwrap();
        workbook.save(&input).unwrap();

        let cli = Cli {
            verbose: 0,
            input,
            output: tmp.path().join("rapport.xlsx"),
            sheet: None,
            ndjson: false,
            quiet: true,
        };

        let error = cli.analyze().unwrap_err();
        assert!(
            error
                .to_string()
                .contains("La colonne 'requirement_text' est requise")
        );
    }
}
