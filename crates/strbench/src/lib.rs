//! Microbenchmark comparing naive immutable-string concatenation against a
//! mutable-buffer builder.
//!
//! Two phases run in sequence over the same workload size: the Concat phase
//! rebuilds the accumulated string from scratch on every append (quadratic
//! total work), the Builder phase appends into a growable buffer in place
//! (amortized constant-time appends). The elapsed wall-clock time of each
//! phase is reported as one line.

mod phase;
mod report;

pub use phase::{builder_phase, concat_phase, DEFAULT_ITERATIONS};
pub use report::{time_phase, ConsoleReporter, PhaseReport, Reporter};

/// Runs both phases in order, reporting each one as it completes.
///
/// The Builder phase's materialized string is produced inside the timed
/// region but never inspected afterwards; only its length is recorded.
pub fn run(n: usize, reporter: &dyn Reporter) -> Result<(), Box<dyn std::error::Error>> {
    let (out, elapsed) = time_phase(|| concat_phase(n));
    reporter.report(&PhaseReport {
        label: "String Concat",
        elapsed,
        output_len: out.len(),
    })?;

    let (out, elapsed) = time_phase(|| builder_phase(n));
    reporter.report(&PhaseReport {
        label: "String Builder",
        elapsed,
        output_len: out.len(),
    })?;

    Ok(())
}
