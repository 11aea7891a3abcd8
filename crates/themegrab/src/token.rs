//! Color tokens and their output keys.
//!
//! A token is a custom property bound to an HSL value:
//!
//! ```css
//! --sidebar-accent-foreground: hsl(240 5.9% 10%);
//! ```
//!
//! Its *category* is the first hyphen-separated segment of the name
//! (`sidebar`). Only names whose category is in [`CATEGORIES`] are kept,
//! and their output key is the camel-cased name (`sidebarAccentForeground`).

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Token categories that are carried into the theme.
pub const CATEGORIES: [&str; 15] = [
    "background",
    "foreground",
    "card",
    "popover",
    "primary",
    "secondary",
    "muted",
    "accent",
    "destructive",
    "border",
    "input",
    "ring",
    "chart",
    "sidebar",
    "shadow",
];

/// Returns true if `category` is in [`CATEGORIES`].
pub fn is_allowed_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

/// Leading hyphen-separated segment of a token name.
pub fn category(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

/// Camel-case output key for a token name, if its category is allowed.
///
/// The category is kept as written and every following segment is appended
/// with its first character upper-cased.
///
/// ```rust
/// use themegrab::camel_case_key;
///
/// assert_eq!(camel_case_key("primary").as_deref(), Some("primary"));
/// assert_eq!(camel_case_key("chart-one").as_deref(), Some("chartOne"));
/// assert_eq!(camel_case_key("chart-1").as_deref(), Some("chart1"));
/// assert_eq!(camel_case_key("radius"), None);
/// ```
pub fn camel_case_key(name: &str) -> Option<String> {
    let mut segments = name.split('-');
    let head = segments.next()?;
    if !is_allowed_category(head) {
        return None;
    }

    let mut key = String::with_capacity(name.len());
    key.push_str(head);
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
    }
    Some(key)
}

/// An HSL triple exactly as written in the stylesheet.
///
/// The components are numeric strings; they are never parsed, so
/// `221.2` stays `221.2` and `0` stays `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: String,
    /// Saturation percentage, without the `%`.
    pub s: String,
    /// Lightness percentage, without the `%`.
    pub l: String,
}

impl Hsl {
    pub fn new(h: impl Into<String>, s: impl Into<String>, l: impl Into<String>) -> Self {
        Self {
            h: h.into(),
            s: s.into(),
            l: l.into(),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ h: {}, s: {}, l: {} }}", self.h, self.s, self.l)
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("h", &json_number(&self.h))?;
        map.serialize_entry("s", &json_number(&self.s))?;
        map.serialize_entry("l", &json_number(&self.l))?;
        map.end()
    }
}

/// Numeric text as a JSON number, or as a string when JSON can't spell it (`.5`).
fn json_number(text: &str) -> serde_json::Value {
    text.parse::<serde_json::Number>()
        .map(serde_json::Value::Number)
        .unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

/// A retained color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    /// Custom property name without the leading `--`.
    pub name: String,
    /// Camel-case output key.
    pub key: String,
    pub value: Hsl,
}

impl ColorToken {
    /// Builds a token, or `None` when the name's category is not allowed.
    pub fn new(name: impl Into<String>, value: Hsl) -> Option<Self> {
        let name = name.into();
        let key = camel_case_key(&name)?;
        Some(Self { name, key, value })
    }

    pub fn category(&self) -> &str {
        category(&self.name)
    }

    /// The `<key>: { h: .., s: .., l: .. }` record, without indentation.
    pub fn record(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}
