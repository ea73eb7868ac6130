//! Common test utilities and helpers

use rowdiff::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture manager for creating temporary test environments
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file inside the fixture
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Create a test CSV file; each row is joined with commas as-is
    pub fn create_csv(&self, name: &str, data: &[Vec<&str>]) -> Result<PathBuf> {
        let path = self.path(name);
        let mut content = String::new();

        for row in data {
            content.push_str(&row.join(","));
            content.push('\n');
        }

        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create a test CSV file with raw string content
    pub fn create_csv_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create a file that is not valid UTF-8
    pub fn create_corrupted_file(&self, name: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, b"\x00\x01\x02\x03invalid_data\xff\xfe")?;
        Ok(path)
    }

    /// Create a large CSV file for performance testing
    pub fn create_large_csv(&self, name: &str, rows: usize, cols: usize) -> Result<PathBuf> {
        let path = self.path(name);
        let mut content = String::new();

        for i in 0..cols {
            if i > 0 {
                content.push(',');
            }
            content.push_str(&format!("col_{}", i));
        }
        content.push('\n');

        for row in 0..rows {
            for col in 0..cols {
                if col > 0 {
                    content.push(',');
                }
                content.push_str(&format!("value_{}_{}", row, col));
            }
            content.push('\n');
        }

        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a file produced by a command
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Should be able to read output file")
    }
}

/// Helper for running CLI commands in tests
pub struct CliTestRunner {
    fixture: TestFixture,
}

impl CliTestRunner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fixture: TestFixture::new()?,
        })
    }

    pub fn fixture(&self) -> &TestFixture {
        &self.fixture
    }

    /// Fixture path as a command-line argument
    pub fn arg(&self, name: &str) -> String {
        self.fixture.path(name).to_string_lossy().into_owned()
    }

    /// Run a rowdiff command and return the result
    pub fn run_command(&self, args: &[&str]) -> Result<()> {
        use clap::Parser;
        use rowdiff::cli::Cli;
        use rowdiff::commands::execute_command;

        let mut cmd_args = vec!["rowdiff"];
        cmd_args.extend(args);

        let cli = Cli::try_parse_from(cmd_args)
            .map_err(|e| rowdiff::RowdiffError::invalid_input(e.to_string()))?;

        execute_command(cli.command, cli.config.as_deref())
    }

    /// Run a command and expect it to succeed
    pub fn expect_success(&self, args: &[&str]) {
        self.run_command(args).expect("Command should succeed");
    }

    /// Run a command and expect it to fail
    pub fn expect_failure(&self, args: &[&str]) -> rowdiff::RowdiffError {
        self.run_command(args).expect_err("Command should fail")
    }
}

/// Sample data generators for testing
pub mod sample_data {
    pub fn simple_csv_data() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name", "price"],
            vec!["1", "Apple", "1.50"],
            vec!["2", "Banana", "0.75"],
            vec!["3", "Cherry", "2.00"],
        ]
    }

    pub fn updated_csv_data() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name", "price"],
            vec!["1", "Apple", "1.60"], // Price changed
            vec!["2", "Banana", "0.75"],
            vec!["4", "Date", "3.00"], // Different fruit at the same position
            vec!["5", "Elderberry", "4.25"], // New row
        ]
    }

    pub fn schema_changed_csv_data() -> Vec<Vec<&'static str>> {
        vec![
            vec!["id", "name", "cost", "category"],
            vec!["1", "Apple", "1.50", "Fruit"],
            vec!["2", "Banana", "0.75", "Fruit"],
        ]
    }
}
