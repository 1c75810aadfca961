//! Collapse progress display for the command line

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks collapsed cells across collapse attempts
///
/// The bar restarts from zero whenever a new attempt begins.
pub struct CollapseProgress {
    bar: ProgressBar,
    attempt: usize,
}

impl CollapseProgress {
    /// Create a visible progress bar for a grid of `total` cells
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self::with_bar(bar)
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_prefix("attempt 1");
        Self { bar, attempt: 1 }
    }

    /// Current attempt number
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Number of cells collapsed in the current attempt
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Record one collapsed cell of `attempt`
    pub fn record(&mut self, attempt: usize) {
        if attempt != self.attempt {
            self.attempt = attempt;
            self.bar.reset();
            self.bar.set_prefix(format!("attempt {attempt}"));
        }
        self.bar.inc(1);
    }

    /// Stop drawing and leave the final state on screen
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Stop drawing and clear the bar
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}
