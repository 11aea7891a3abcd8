//! Token scanning inside a located block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{ColorToken, Hsl};

/// Indentation of a color line inside a rendered `colors` group.
pub const LINE_INDENT: &str = "        ";

/// `--<name>: hsl(<h> <s>% <l>%);`
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"--([\w-]+)\s*:\s*hsl\(\s*(\d*\.?\d+)\s+(\d*\.?\d+)%\s+(\d*\.?\d+)%\s*\)\s*;",
    )
    .expect("token pattern is a valid regex")
});

/// Scans `block` for HSL color tokens, in source order.
///
/// Declarations that don't match the HSL shape, and tokens whose category is
/// not allowed, are skipped.
pub fn scan_tokens(block: &str) -> Vec<ColorToken> {
    TOKEN_PATTERN
        .captures_iter(block)
        .filter_map(|caps| {
            let name = &caps[1];
            let value = Hsl::new(&caps[2], &caps[3], &caps[4]);
            let token = ColorToken::new(name, value);
            if token.is_none() {
                tracing::trace!(name, "skipping token outside the category allow-list");
            }
            token
        })
        .collect()
}

/// Formats the color lines for `block`, joined by newlines.
///
/// Each line reads `<key>: { h: <h>, s: <s>, l: <l> },` at the indentation
/// used inside a rendered `colors` group. Returns an empty string when the
/// block holds no retained tokens.
pub fn extract_colors(block: &str) -> String {
    scan_tokens(block)
        .iter()
        .map(color_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn color_line(token: &ColorToken) -> String {
    format!("{LINE_INDENT}{},", token.record())
}
