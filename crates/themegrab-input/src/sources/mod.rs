//! Input source implementations.
//!
//! - [`PathSource`] - Read the file named by a CLI argument
//! - [`StdinSource`] - Read the whole of stdin

mod path;
mod stdin;

pub use path::{PathSource, STDIN_PATH};
pub use stdin::StdinSource;
