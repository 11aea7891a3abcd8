//! Theme groups extracted from a stylesheet.
//!
//! A stylesheet yields up to two groups: `light` from the `:root` block and
//! `dark` from the `.dark` block. The groups never interact; either may be
//! missing, in which case it is absent from the [`ThemeSet`] (not empty).

use std::collections::HashMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::block::locate_block;
use crate::extract::scan_tokens;
use crate::token::{ColorToken, Hsl};

/// Which theme a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Every mode, in output order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Selector whose block holds this theme's tokens.
    pub fn selector(self) -> &'static str {
        match self {
            ThemeMode::Light => ":root",
            ThemeMode::Dark => ".dark",
        }
    }

    /// Key the group is rendered under.
    pub fn key(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The tokens of one located theme block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeGroup {
    pub mode: ThemeMode,
    /// Retained tokens in source order. Repeated names are kept as written.
    pub colors: Vec<ColorToken>,
}

impl ThemeGroup {
    /// Locates `mode`'s block in `stylesheet` and scans its tokens.
    ///
    /// Returns `None` when the block is absent.
    pub fn extract(stylesheet: &str, mode: ThemeMode) -> Option<Self> {
        let Some(block) = locate_block(stylesheet, mode.selector()) else {
            tracing::debug!(theme = %mode, selector = mode.selector(), "theme block not found");
            return None;
        };

        let colors = scan_tokens(block);
        tracing::debug!(theme = %mode, tokens = colors.len(), "theme block extracted");
        Some(Self { mode, colors })
    }

    /// Colors keyed by output key: first position, last value.
    ///
    /// This is the view used for map-shaped output, where a key can only
    /// appear once.
    pub fn color_map(&self) -> Vec<(&str, &Hsl)> {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(&str, &Hsl)> = Vec::with_capacity(self.colors.len());

        for token in &self.colors {
            match slots.get(token.key.as_str()) {
                Some(&slot) => entries[slot].1 = &token.value,
                None => {
                    slots.insert(token.key.as_str(), entries.len());
                    entries.push((token.key.as_str(), &token.value));
                }
            }
        }

        entries
    }
}

impl Serialize for ThemeGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("colors", &ColorMap(self.color_map()))?;
        map.end()
    }
}

struct ColorMap<'a>(Vec<(&'a str, &'a Hsl)>);

impl Serialize for ColorMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Both theme groups of a stylesheet.
///
/// # Example
///
/// ```rust
/// use themegrab::ThemeSet;
///
/// let themes = ThemeSet::from_stylesheet(":root { --ring: hsl(0 0% 0%); }");
/// assert_eq!(themes.light.as_ref().map(|g| g.colors.len()), Some(1));
/// assert!(themes.dark.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<ThemeGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeGroup>,
}

impl ThemeSet {
    /// Extracts both theme groups from a stylesheet.
    pub fn from_stylesheet(stylesheet: &str) -> Self {
        Self {
            light: ThemeGroup::extract(stylesheet, ThemeMode::Light),
            dark: ThemeGroup::extract(stylesheet, ThemeMode::Dark),
        }
    }

    pub fn get(&self, mode: ThemeMode) -> Option<&ThemeGroup> {
        match mode {
            ThemeMode::Light => self.light.as_ref(),
            ThemeMode::Dark => self.dark.as_ref(),
        }
    }

    /// Present groups, light before dark.
    pub fn groups(&self) -> impl Iterator<Item = &ThemeGroup> {
        ThemeMode::ALL.into_iter().filter_map(|mode| self.get(mode))
    }

    /// True when neither block was found.
    pub fn is_empty(&self) -> bool {
        self.light.is_none() && self.dark.is_none()
    }
}
