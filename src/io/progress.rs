//! Progress display for tile emission

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{percent:>3}}% ({{pos}}/{{len}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Percentage bar advanced once per written tile
///
/// Purely advisory: indicatif hides the bar when stderr is not a terminal.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar expecting `total` tiles
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message("Writing tiles");
        Self { bar }
    }

    /// Record one written tile
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Number of tiles the bar expects
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Close the bar after a successful run
    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }

    /// Leave the bar at its current position after a failed run
    pub fn abandon(&self) {
        self.bar.abandon_with_message("Failed");
    }
}
