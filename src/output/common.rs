//! Common utilities for output formatters

use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Write a value as pretty-printed JSON
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Write a value as YAML
pub fn write_yaml<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    write!(out, "{}", serde_yml::to_string(value)?)?;
    Ok(())
}

/// Write a value in the given structured format
///
/// Table format falls back to JSON; callers only use this for
/// structured output.
pub fn write_structured<T: Serialize + ?Sized>(
    out: &mut dyn Write,
    format: OutputFormat,
    value: &T,
) -> Result<()> {
    match format {
        OutputFormat::Yaml => write_yaml(out, value),
        OutputFormat::Json | OutputFormat::Table => write_json(out, value),
    }
}
