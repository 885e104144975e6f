//! Format output dispatch helpers
//!
//! Provides a macro to eliminate repetitive format match blocks.

/// Macro for format dispatch that automatically wraps result handling.
/// Use when the json branch returns Result and human/records return ().
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => output_json(&records),
///     human => { output_human(cli, &records) },
///     records => { output_records(&records) }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
