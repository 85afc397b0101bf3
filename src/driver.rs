//! Thin command-line drivers: run one drill and print its report

use crate::drills::{Drill, Tracer};
use crate::errors::DrillError;
use crate::logging::init_tracing;
use std::io::{self, Write};
use std::process::ExitCode;

/// Run `drill` and return the lines it printed
pub fn report(drill: Drill) -> Result<Vec<String>, DrillError> {
    let mut tracer = Tracer::new();
    drill.run(&mut tracer)?;
    Ok(tracer.output())
}

/// Entry point body for the per-drill binaries.
///
/// Prints the report to stdout and exits 0; on failure prints a diagnostic
/// to stderr and exits 1.
pub fn drive(drill: Drill) -> ExitCode {
    init_tracing();

    match report(drill) {
        Ok(lines) => {
            let mut stdout = io::stdout().lock();
            for line in lines {
                if writeln!(stdout, "{}", line).is_err() {
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(drill = drill.name(), error = %e, "drill failed");
            if e.is_allocation_failure() {
                eprintln!("Malloc: {}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
