//! Output formatting module
//!
//! Diagnostics go to the error stream; the summary table goes to stdout.

use crate::Result;
use crate::diagnostics::SourceContext;
use crate::graph::DocumentOutput;

/// Print every diagnostic, one per line, in the order they were found
pub fn print_diagnostics(
    w: &mut impl std::io::Write,
    built: &DocumentOutput,
    ctx: &SourceContext,
) -> Result<()> {
    for diag in built.all_diagnostics() {
        writeln!(w, "{}", diag.display_with(ctx))?;
    }
    Ok(())
}

/// Log a one-line summary per machine
pub fn log_summary(built: &DocumentOutput) {
    for machine in &built.machines {
        let stats = machine.graph.stats();
        tracing::info!(
            "sia '{}': {} states, {} transitions, {} diagnostics",
            machine.graph.name,
            stats.total_states,
            stats.total_transitions,
            machine.diagnostics.len()
        );
    }
}

/// Output per-machine statistics as a text table
pub fn output_table(w: &mut impl std::io::Write, built: &DocumentOutput) -> Result<()> {
    writeln!(w, "{:<24} {:>8} {:>12} {:>10} {:>10}", "SIA", "States", "Transitions", "Loops", "Errors")?;
    writeln!(w, "{:-<68}", "")?;

    for machine in &built.machines {
        let stats = machine.graph.stats();
        let name = if machine.graph.name.chars().count() > 22 {
            format!("{}...", machine.graph.name.chars().take(19).collect::<String>())
        } else {
            machine.graph.name.clone()
        };

        writeln!(
            w,
            "{:<24} {:>8} {:>12} {:>10} {:>10}",
            name,
            stats.total_states,
            stats.total_transitions,
            stats.self_loops,
            machine.diagnostics.len()
        )?;
    }
    writeln!(w)?;
    Ok(())
}
