//! Core input collector trait.
//!
//! The [`InputCollector`] trait defines the interface for all input sources.
//! Implementations are composed into an [`InputChain`](crate::InputChain).

use clap::ArgMatches;

use crate::InputError;

/// A source that can collect input of type T.
///
/// - [`is_available`](Self::is_available) returns `false` when the source
///   cannot provide input in the current invocation (e.g. no path argument).
/// - [`collect`](Self::collect) returns `Ok(None)` for "try the next source"
///   and `Ok(Some(value))` when input was read. `Err` is reserved for actual
///   read failures, which abort the chain.
///
/// # Example
///
/// ```ignore
/// use themegrab_input::{InputCollector, InputError};
/// use clap::ArgMatches;
///
/// struct Fixed(String);
///
/// impl InputCollector<String> for Fixed {
///     fn name(&self) -> &'static str { "default" }
///
///     fn is_available(&self, _: &ArgMatches) -> bool { true }
///
///     fn collect(&self, _: &ArgMatches) -> Result<Option<String>, InputError> {
///         Ok(Some(self.0.clone()))
///     }
/// }
/// ```
pub trait InputCollector<T>: Send + Sync {
    /// Human-readable name for this collector, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check if this collector can provide input for these arguments.
    fn is_available(&self, matches: &ArgMatches) -> bool;

    /// Attempt to collect input from this source.
    fn collect(&self, matches: &ArgMatches) -> Result<Option<T>, InputError>;
}

/// Information about how input was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput<T> {
    /// The resolved value.
    pub value: T,
    /// Which source provided the value.
    pub source: InputSourceKind,
}

/// The kind of source that provided input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSourceKind {
    /// From a file named on the command line.
    Path,
    /// From stdin.
    Stdin,
    /// From the chain's default value.
    Default,
}

impl std::fmt::Display for InputSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Stdin => write!(f, "stdin"),
            Self::Default => write!(f, "default"),
        }
    }
}
