//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinners for the load and compare phases of a CLI run
#[derive(Debug)]
pub struct ProgressReporter {
    pub load_pb: Option<ProgressBar>,
    pub compare_pb: Option<ProgressBar>,
    show_progress: bool,
}

impl ProgressReporter {
    /// Create progress reporter for a comparison run
    pub fn new_for_compare() -> Self {
        Self {
            load_pb: None,
            compare_pb: None,
            show_progress: true,
        }
    }

    /// Create minimal progress reporter (no spinners), for quiet and JSON output
    pub fn new_minimal() -> Self {
        Self {
            load_pb: None,
            compare_pb: None,
            show_progress: false,
        }
    }

    /// Show that a file is being read and parsed
    pub fn start_loading(&mut self, name: &str) {
        if !self.show_progress {
            return;
        }
        let message = format!("Parsing {}...", name);
        match &self.load_pb {
            Some(pb) => pb.set_message(message),
            None => self.load_pb = Some(create_spinner(&message)),
        }
    }

    pub fn finish_loading(&mut self, message: &str) {
        if let Some(pb) = self.load_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }

    pub fn start_comparing(&mut self) {
        if self.show_progress && self.compare_pb.is_none() {
            self.compare_pb = Some(create_spinner("Classifying rows..."));
        }
    }

    pub fn finish_comparing(&mut self, message: &str) {
        if let Some(pb) = self.compare_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(pb) = self.load_pb.take() {
            pb.finish_and_clear();
        }
        if let Some(pb) = self.compare_pb.take() {
            pb.finish_and_clear();
        }
    }
}

/// Create a spinner progress bar
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
