//! Progress indicator utilities for gitlab-secrets.
//!
//! Responsibilities:
//! - Provide a spinner for requests of unknown duration (listing, single CRUD calls).
//! - Ensure ALL progress output is written to STDERR (never stdout), so exported
//!   or listed data is not contaminated.
//! - Allow global suppression via a caller-provided `enabled` boolean (driven by `--quiet`).
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.
//! - Bulk runs report per-item lines instead of a spinner (see `bulk`).

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// An indefinite spinner for short/unknown-duration operations.
///
/// Always draws to STDERR; no-op when disabled.
pub(crate) struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// Create a new spinner.
    ///
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(label.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Remove the spinner line so the command's own output follows cleanly.
    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        // Clear on early return (e.g. `?`) so errors are not interleaved with the spinner.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
