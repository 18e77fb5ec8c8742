//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while models are rendered
//! - The styled summary printed after `generate` and `check` (via display module)
//!
//! All progress reporting goes through the ProgressReporter trait, so
//! commands can pick a progress bar or nothing depending on the terminal
//! and flags.

use indicatif::{ProgressBar, ProgressStyle};

pub mod display;

/// Progress reporter for multi-model runs
pub trait ProgressReporter {
    /// Show which model is being rendered
    fn start_model(&mut self, model: &str);

    /// Mark the current model as done
    fn finish_model(&mut self);

    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Progress bar on stderr, one step per model
pub struct InteractiveProgressReporter {
    bar: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new(total_models: u64) -> Self {
        let bar = ProgressBar::new(total_models);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_model(&mut self, model: &str) {
        self.bar.set_message(model.to_string());
    }

    fn finish_model(&mut self) {
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.bar.abandon();
    }
}

/// No-op reporter for dry runs, single models and non-terminal output
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_model(&mut self, _model: &str) {}

    fn finish_model(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Progress bar when stderr is a terminal and there is more than one model
pub fn reporter_for(total_models: usize, quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet || total_models < 2 || !console::Term::stderr().is_term() {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new(total_models as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;
        reporter.start_model("Rating");
        reporter.finish_model();
        reporter.finish();
        reporter.abandon();
    }

    #[test]
    fn test_interactive_progress_reporter_counts_models() {
        let mut reporter = InteractiveProgressReporter::new(3);
        reporter.start_model("Rating");
        reporter.finish_model();
        reporter.start_model("MatrixOptions");
        reporter.finish_model();
        assert_eq!(reporter.bar.position(), 2);
    }

    #[test]
    fn test_quiet_is_silent() {
        let mut reporter = reporter_for(10, true);
        reporter.start_model("Rating");
        reporter.finish();
    }
}
