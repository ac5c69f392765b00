//! Terminal progress display for library scans.
//!
//! Starts as a spinner while the folder is walked, then turns into a bar
//! once the number of candidates is known.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use uwx_core::util::file_name_string;
use uwx_lib::ScanProgress;

pub(crate) struct ScanSpinner {
    bar: ProgressBar,
}

impl ScanSpinner {
    /// Create the display. When `hidden` is true nothing is drawn.
    pub(crate) fn new(hidden: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        if hidden {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("/-\\|"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message("Walking folders...");
        Self { bar }
    }

    /// Apply one progress event. Safe to call from several threads.
    pub(crate) fn update(&self, event: ScanProgress) {
        match event {
            ScanProgress::Started { total } => {
                self.bar.set_length(total as u64);
                self.bar.set_style(
                    ProgressStyle::with_template("  {bar:30.cyan/dim} {pos}/{len} {wide_msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
            }
            ScanProgress::Identified { path, .. } => {
                self.bar.inc(1);
                self.bar.set_message(file_name_string(&path));
            }
            ScanProgress::Grouping => {
                self.bar.set_message("Grouping split archives and disc sets...");
            }
            ScanProgress::Completed { .. } => {
                self.bar.finish_and_clear();
            }
        }
    }

    pub(crate) fn clear(&self) {
        self.bar.finish_and_clear();
    }
}
