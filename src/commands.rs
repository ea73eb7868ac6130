//! Command implementations for rowdiff CLI

use crate::cli::{Commands, OutputFormat};
use crate::config::CompareConfig;
use crate::error::{Result, RowdiffError};
use crate::output::{JsonFormatter, PrettyPrinter};
use crate::progress::ProgressReporter;
use crate::report::{self, DEFAULT_EXPORT_FILE_NAME};
use crate::session::{ComparisonOutcome, ComparisonSession};
use crate::source::{self, Dataset};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Execute a command
pub fn execute_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let mut config = CompareConfig::load(config_path)?;

    match command {
        Commands::Compare {
            original,
            comparison,
            format,
            export,
            delimiter,
            show_unchanged,
            preview,
            quiet,
        } => {
            apply_overrides(&mut config, delimiter)?;
            config.include_unchanged |= show_unchanged;
            if let Some(rows) = preview {
                config.preview_rows = rows;
            }
            let export_path = export.map(|path| {
                path.or_else(|| config.export_path.clone())
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME))
            });
            compare_command(&config, &original, &comparison, &format, export_path.as_deref(), quiet)
        }
        Commands::Export {
            original,
            comparison,
            output,
            delimiter,
        } => {
            apply_overrides(&mut config, delimiter)?;
            let output = output
                .or_else(|| config.export_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME));
            export_command(&config, &original, &comparison, &output)
        }
        Commands::Columns {
            original,
            comparison,
            format,
            delimiter,
        } => {
            apply_overrides(&mut config, delimiter)?;
            columns_command(&config, &original, &comparison, &format)
        }
        Commands::Inspect {
            input,
            format,
            delimiter,
        } => {
            apply_overrides(&mut config, delimiter)?;
            inspect_command(&config, &input, &format)
        }
    }
}

/// CLI flags take precedence over the config file
fn apply_overrides(config: &mut CompareConfig, delimiter: Option<char>) -> Result<()> {
    if let Some(delimiter) = delimiter {
        config.delimiter = delimiter;
    }
    config.validate()
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::parse(format).map_err(|e| RowdiffError::invalid_input(e))
}

/// Load both inputs into a session and run the comparison
fn load_and_compare(
    config: &CompareConfig,
    original: &Path,
    comparison: &Path,
    progress: &mut ProgressReporter,
) -> Result<ComparisonOutcome> {
    let parser = config.parser();
    let mut session = ComparisonSession::new();

    progress.start_loading(&original.display().to_string());
    session.load_original(source::load_dataset(original, &parser)?);
    progress.start_loading(&comparison.display().to_string());
    session.load_comparison(source::load_dataset(comparison, &parser)?);
    progress.finish_loading("Inputs parsed");

    progress.start_comparing();
    let outcome = session.compare()?;
    progress.finish_comparing(&format!(
        "Classified {} row positions",
        outcome.summary.total_rows
    ));

    Ok(outcome)
}

/// Compare two files and print the result
fn compare_command(
    config: &CompareConfig,
    original: &Path,
    comparison: &Path,
    format: &str,
    export_path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let output_format = parse_format(format)?;

    let mut progress = if quiet || output_format == OutputFormat::Json {
        ProgressReporter::new_minimal()
    } else {
        ProgressReporter::new_for_compare()
    };
    let outcome = load_and_compare(config, original, comparison, &mut progress)?;
    drop(progress);

    if quiet {
        PrettyPrinter::print_quiet(&outcome.summary);
    } else {
        match output_format {
            OutputFormat::Pretty => PrettyPrinter::print_comparison(
                &outcome,
                config.preview_rows,
                config.include_unchanged,
            ),
            OutputFormat::Json => println!(
                "{}",
                JsonFormatter::format_comparison(&outcome, config.include_unchanged)?
            ),
        }
    }

    if let Some(path) = export_path {
        save_report(&outcome, path)?;
        if !quiet && output_format == OutputFormat::Pretty && !is_stdout(path) {
            println!("\n💾 Detailed results saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Write only the detailed report
fn export_command(
    config: &CompareConfig,
    original: &Path,
    comparison: &Path,
    output: &Path,
) -> Result<()> {
    let mut progress = ProgressReporter::new_minimal();
    let outcome = load_and_compare(config, original, comparison, &mut progress)?;

    save_report(&outcome, output)?;
    if !is_stdout(output) {
        println!("💾 Detailed results saved to: {}", output.display());
    }
    Ok(())
}

/// `-` as a report path means standard output
fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

/// One-shot write of the export file, creating parent directories as needed
fn save_report(outcome: &ComparisonOutcome, path: &Path) -> Result<()> {
    if is_stdout(path) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        report::write_report(
            &mut handle,
            &outcome.verdicts,
            &outcome.original.headers,
            &outcome.comparison.headers,
        )?;
        writeln!(handle)?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    report::write_report(
        &mut file,
        &outcome.verdicts,
        &outcome.original.headers,
        &outcome.comparison.headers,
    )?;
    log::debug!("Wrote change report to {}", path.display());
    Ok(())
}

/// Print only the header analysis
fn columns_command(
    config: &CompareConfig,
    original: &Path,
    comparison: &Path,
    format: &str,
) -> Result<()> {
    let output_format = parse_format(format)?;
    let parser = config.parser();
    let first = source::load_dataset(original, &parser)?;
    let second = source::load_dataset(comparison, &parser)?;

    let columns = report::diff_columns(&first.table.headers, &second.table.headers);
    match output_format {
        OutputFormat::Pretty => PrettyPrinter::print_column_diff(&columns, &first.name, &second.name),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&columns)?),
    }
    Ok(())
}

/// Print the shape of one file
fn inspect_command(config: &CompareConfig, input: &Path, format: &str) -> Result<()> {
    let output_format = parse_format(format)?;
    let dataset: Dataset = source::load_dataset(input, &config.parser())?;
    let info = dataset.info();

    match output_format {
        OutputFormat::Pretty => PrettyPrinter::print_dataset_info(&info),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&info)?),
    }
    Ok(())
}
