use colored::*;
use std::fmt;
use std::time::{Duration, Instant};

/// Runs `f` and returns its output together with the measured wall-clock time.
pub fn time_phase<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Result of one timed benchmark phase.
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub label: &'static str,
    pub elapsed: Duration,
    pub output_len: usize,
}

impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time taken for {}: {:.2?}", self.label, self.elapsed)
    }
}

/// Trait for implementing custom benchmark report output.
///
/// Implement this trait to control how phase results are displayed or stored,
/// e.g. to capture them in tests instead of printing.
pub trait Reporter {
    fn report(&self, report: &PhaseReport) -> Result<(), Box<dyn std::error::Error>>;
}

/// Prints one line per phase to stdout.
///
/// The label is highlighted when stdout is a terminal; `colored` disables
/// styling for piped output, so the line stays machine-extractable.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, report: &PhaseReport) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "Time taken for {}: {:.2?}",
            report.label.yellow().bold(),
            report.elapsed
        );
        Ok(())
    }
}
