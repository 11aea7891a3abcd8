//! Themegrab - extract HSL color tokens from a stylesheet into a theme literal.
//!
//! Design systems built on CSS custom properties usually keep their palette
//! in two blocks: `:root` for the light theme and `.dark` for the dark one.
//!
//! ```css
//! :root {
//!   --background: hsl(0 0% 100%);
//!   --primary: hsl(221.2 83.2% 53.3%);
//! }
//! .dark {
//!   --background: hsl(222.2 84% 4.9%);
//! }
//! ```
//!
//! Themegrab pulls those tokens out and re-emits them grouped by theme, keyed
//! by camel-cased token name:
//!
//! ```text
//!     light: {
//!       colors: {
//!         background: { h: 0, s: 0, l: 100 },
//!         primary: { h: 221.2, s: 83.2, l: 53.3 },
//!       },
//!     },
//!     dark: {
//!       colors: {
//!         background: { h: 222.2, s: 84, l: 4.9 },
//!       },
//!     },
//! ```
//!
//! # Pipeline
//!
//! 1. [`locate_block`] finds the `:root` / `.dark` block.
//! 2. [`scan_tokens`] matches `--name: hsl(h s% l%);` declarations and keeps
//!    those whose category (first name segment) is in [`CATEGORIES`].
//! 3. [`ThemeSet`] holds the groups; [`render`] prints them.
//!
//! Nothing is validated: the HSL components are passed through as written,
//! and anything that doesn't match is left out silently.
//!
//! # Quick Start
//!
//! ```rust
//! use themegrab::{render, OutputFormat, ThemeSet};
//!
//! let themes = ThemeSet::from_stylesheet(":root { --primary: hsl(200 50% 40%); }");
//! let out = render(&themes, OutputFormat::Literal).unwrap();
//! assert!(out.contains("primary: { h: 200, s: 50, l: 40 },"));
//! assert!(!out.contains("dark:"));
//! ```

mod block;
mod error;
mod extract;
mod output;
mod theme;
mod token;

pub use block::locate_block;
pub use error::{RenderError, Result, UnknownFormat};
pub use extract::{extract_colors, scan_tokens, LINE_INDENT};
pub use output::{render, render_group, render_json, render_literal, write_to, OutputFormat};
pub use theme::{ThemeGroup, ThemeMode, ThemeSet};
pub use token::{camel_case_key, category, is_allowed_category, ColorToken, Hsl, CATEGORIES};
