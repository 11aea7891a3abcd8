//! Output formats.
//!
//! [`OutputFormat::Literal`] is the default: a nested object-literal fragment
//! meant to be pasted into a theme config.
//!
//! ```text
//!     light: {
//!       colors: {
//!         background: { h: 0, s: 0, l: 100 },
//!       },
//!     },
//! ```
//!
//! Absent groups produce nothing, so an empty stylesheet renders to an empty
//! string. [`OutputFormat::Json`] serializes the same [`ThemeSet`] as JSON.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Result, UnknownFormat};
use crate::extract::color_line;
use crate::theme::{ThemeGroup, ThemeSet};

/// How a [`ThemeSet`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Object-literal fragment with fixed indentation.
    #[default]
    Literal,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, UnknownFormat> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(OutputFormat::Literal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Literal => f.write_str("literal"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders one group as header, color lines and footer.
pub fn render_group(group: &ThemeGroup) -> String {
    let mut out = format!("    {}: {{\n      colors: {{\n", group.mode.key());
    for token in &group.colors {
        out.push_str(&color_line(token));
        out.push('\n');
    }
    out.push_str("      },\n    },\n");
    out
}

/// Renders every present group, light before dark.
pub fn render_literal(themes: &ThemeSet) -> String {
    themes.groups().map(render_group).collect()
}

/// Renders the theme set as pretty-printed JSON, with a trailing newline.
pub fn render_json(themes: &ThemeSet) -> Result<String> {
    let mut out = serde_json::to_string_pretty(themes)?;
    out.push('\n');
    Ok(out)
}

/// Renders the theme set in the given format.
pub fn render(themes: &ThemeSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Literal => Ok(render_literal(themes)),
        OutputFormat::Json => render_json(themes),
    }
}

/// Writes the theme set to `out`, one group at a time for the literal format.
pub fn write_to<W: Write>(themes: &ThemeSet, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Literal => {
            for group in themes.groups() {
                out.write_all(render_group(group).as_bytes())?;
            }
        }
        OutputFormat::Json => out.write_all(render_json(themes)?.as_bytes())?,
    }
    Ok(())
}
