//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use unarc_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn lines(&self, output_dir: &Path, report: &ExtractionReport) -> Vec<String> {
        let mut lines = Vec::new();

        let header = format!("Extraction complete: {}", output_dir.display());
        if self.use_colors {
            lines.push(format!("{} {header}", style("✓").green().bold()));
        } else {
            lines.push(header);
        }

        lines.push(format!("  Files extracted: {}", report.files_extracted));
        lines.push(format!("  Directories: {}", report.directories_created));
        lines.push(format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            if let Some(format) = report.format {
                lines.push(format!("  Format: {format}"));
            }
            lines.push(format!("  Executables: {}", report.executables));
            lines.push(format!("  Entries skipped: {}", report.entries_skipped));
            lines.push(format!("  Duration: {:?}", report.duration));
        }

        if report.has_warnings() {
            if self.use_colors {
                lines.push(format!("{}", style("Warnings:").yellow().bold()));
            } else {
                lines.push("Warnings:".to_string());
            }
            for warning in &report.warnings {
                lines.push(format!("  - {warning}"));
            }
        }

        lines
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for line in self.lines(output_dir, report) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Errors are shown even in quiet mode.
        let stderr = Term::stderr();
        if self.use_colors {
            let _ = stderr.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = stderr.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
