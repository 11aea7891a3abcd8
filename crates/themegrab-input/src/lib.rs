//! Stylesheet input acquisition for `themegrab`.
//!
//! `themegrab-input` decides where the stylesheet text comes from. The CLI
//! accepts an optional path argument; when it is missing (or `-`) the text is
//! read from stdin. An empty default closes the chain so that "no input" is
//! never an error: an empty stylesheet simply produces empty output.
//!
//! # Quick Start
//!
//! ```ignore
//! use themegrab_input::{InputChain, PathSource, StdinSource};
//!
//! let css = InputChain::<String>::new()
//!     .try_source(PathSource::new("path"))
//!     .try_source(StdinSource::new())
//!     .default(String::new())
//!     .resolve(&matches)?;
//! ```
//!
//! # Architecture
//!
//! Every source implements [`InputCollector`]. An [`InputChain`] tries each
//! source in order until one returns text.
//!
//! ```text
//! InputChain
//! ├── PathSource     → None (no path, or "-")
//! ├── StdinSource    → Some(":root { ... }") ← returns this
//! └── default ""     → (not reached)
//! ```
//!
//! # Testing
//!
//! Stdin is abstracted behind [`env::StdinReader`], so tests can simulate
//! piped input or a failing stream:
//!
//! ```
//! use themegrab_input::{StdinSource, env::MockStdin};
//!
//! let source = StdinSource::with_reader(MockStdin::piped(":root { }"));
//! ```

mod chain;
mod collector;
pub mod env;
mod error;
pub mod sources;

pub use chain::InputChain;
pub use collector::{InputCollector, InputSourceKind, ResolvedInput};
pub use error::InputError;

pub use sources::{PathSource, StdinSource, STDIN_PATH};

pub use env::MockStdin;
