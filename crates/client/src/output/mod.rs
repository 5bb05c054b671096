//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Serialize a value for output. Pretty mode indents the JSON; commands with
/// a dedicated human layout use [`pretty`] instead.
pub fn format_output<T: serde::Serialize + ?Sized>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}
