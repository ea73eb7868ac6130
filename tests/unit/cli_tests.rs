//! Unit tests for CLI argument parsing and validation

use clap::Parser;
use rowdiff::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_cli_compare_command() {
    let cli = Cli::try_parse_from(["rowdiff", "compare", "old.csv", "new.csv"]).unwrap();
    match cli.command {
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
            assert_eq!(original, PathBuf::from("old.csv"));
            assert_eq!(comparison, PathBuf::from("new.csv"));
            assert_eq!(format, "pretty");
            assert!(export.is_none());
            assert!(delimiter.is_none());
            assert!(!show_unchanged);
            assert!(preview.is_none());
            assert!(!quiet);
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_cli_compare_export_without_path() {
    let cli = Cli::try_parse_from(["rowdiff", "compare", "a.csv", "b.csv", "--export"]).unwrap();
    match cli.command {
        Commands::Compare { export, .. } => assert_eq!(export, Some(None)),
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_cli_compare_with_options() {
    let cli = Cli::try_parse_from([
        "rowdiff",
        "compare",
        "a.csv",
        "b.csv",
        "--export",
        "out/report.csv",
        "--delimiter",
        ";",
        "--show-unchanged",
        "--preview",
        "5",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Compare {
            export,
            delimiter,
            show_unchanged,
            preview,
            format,
            ..
        } => {
            assert_eq!(export, Some(Some(PathBuf::from("out/report.csv"))));
            assert_eq!(delimiter, Some(';'));
            assert!(show_unchanged);
            assert_eq!(preview, Some(5));
            assert_eq!(format, "json");
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_cli_rejects_zero_preview() {
    assert!(Cli::try_parse_from(["rowdiff", "compare", "a.csv", "b.csv", "--preview", "0"]).is_err());
}

#[test]
fn test_cli_rejects_multi_char_delimiter() {
    assert!(Cli::try_parse_from(["rowdiff", "inspect", "a.csv", "--delimiter", ";;"]).is_err());
}

#[test]
fn test_cli_export_command() {
    let cli = Cli::try_parse_from(["rowdiff", "export", "a.csv", "b.csv", "-o", "-"]).unwrap();
    match cli.command {
        Commands::Export { output, .. } => assert_eq!(output, Some(PathBuf::from("-"))),
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_cli_columns_and_inspect_commands() {
    let cli = Cli::try_parse_from(["rowdiff", "columns", "a.csv", "b.csv"]).unwrap();
    assert!(matches!(cli.command, Commands::Columns { .. }));

    let cli = Cli::try_parse_from(["rowdiff", "inspect", "a.csv", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Inspect { input, format, .. } => {
            assert_eq!(input, PathBuf::from("a.csv"));
            assert_eq!(format, "json");
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_cli_global_flags() {
    let cli = Cli::try_parse_from([
        "rowdiff",
        "inspect",
        "a.csv",
        "--verbose",
        "--config",
        "rowdiff.json",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("rowdiff.json")));
}

#[test]
fn test_cli_missing_arguments() {
    assert!(Cli::try_parse_from(["rowdiff", "compare", "only-one.csv"]).is_err());
    assert!(Cli::try_parse_from(["rowdiff"]).is_err());
}

#[test]
fn test_output_format_parse() {
    assert!(matches!(OutputFormat::parse("pretty"), Ok(OutputFormat::Pretty)));
    assert!(matches!(OutputFormat::parse("Json"), Ok(OutputFormat::Json)));
    assert!(OutputFormat::parse("table").is_err());
}
