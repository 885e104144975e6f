//! Macros for command timing and logging

/// Trace a command phase when --verbose is set
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.cli, ctx.start, "search_complete");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
