use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;

pub mod text;

pub use text::TextView;

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(value.to_text()),
    }
}

/// Write a rendered response followed by a newline.
pub fn output<T: Serialize + TextView>(
    out: &mut impl Write,
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
