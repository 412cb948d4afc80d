//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter over files or records
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize a bar over `total` items named `unit`
    pub fn init(&mut self, total: u64, unit: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        let template =
            format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} {{msg}}");
        match ProgressStyle::default_bar().template(&template) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Initialize a bar over input files
    pub fn init_files(&mut self, total_files: u64) {
        self.init(total_files, "files");
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", filename));
            pb.inc(1);
        }
    }

    /// Advance without a message
    pub fn inc(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
