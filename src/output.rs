//! Rendering of command results as text lines or pretty JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::Format;

/// Writes `value` to stdout in `format`, using `text` for the text form.
pub fn emit<T, F>(value: &T, format: Format, text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    let rendered = match format {
        Format::Text => text(value),
        Format::Json => {
            serde_json::to_string_pretty(value).context("failed to serialise output")?
        }
    };
    println!("{rendered}");
    Ok(())
}
