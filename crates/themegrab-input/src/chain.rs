//! Input chain builder for composing multiple sources.
//!
//! The [`InputChain`] tries sources in order until one provides input.

use std::fmt;

use clap::ArgMatches;

use crate::collector::{InputCollector, InputSourceKind, ResolvedInput};
use crate::InputError;

/// Chain multiple input sources with fallback behavior.
///
/// Sources are tried in the order they were added. The first source that
/// returns `Some(value)` wins. If all sources return `None`, the chain
/// uses the default value or returns [`InputError::NoInput`].
///
/// # Example
///
/// ```ignore
/// use themegrab_input::{InputChain, PathSource, StdinSource};
///
/// let chain = InputChain::<String>::new()
///     .try_source(PathSource::new("path"))
///     .try_source(StdinSource::new())
///     .default(String::new());
///
/// let css = chain.resolve(&matches)?;
/// ```
pub struct InputChain<T> {
    sources: Vec<(Box<dyn InputCollector<T>>, InputSourceKind)>,
    default: Option<T>,
}

impl<T: Clone + Send + Sync + 'static> InputChain<T> {
    /// Create a new empty input chain.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            default: None,
        }
    }

    /// Add a source to the chain.
    ///
    /// Sources are tried in the order they are added.
    pub fn try_source<C: InputCollector<T> + 'static>(mut self, source: C) -> Self {
        let kind = source_kind_from_name(source.name());
        self.sources.push((Box::new(source), kind));
        self
    }

    /// Set a default value to use when no source provides input.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Resolve the chain and return the input value.
    pub fn resolve(&self, matches: &ArgMatches) -> Result<T, InputError> {
        self.resolve_with_source(matches).map(|r| r.value)
    }

    /// Resolve the chain and return the input with source metadata.
    pub fn resolve_with_source(
        &self,
        matches: &ArgMatches,
    ) -> Result<ResolvedInput<T>, InputError> {
        for (source, kind) in &self.sources {
            if !source.is_available(matches) {
                tracing::trace!(source = source.name(), "input source unavailable");
                continue;
            }

            if let Some(value) = source.collect(matches)? {
                tracing::debug!(source = %kind, "input resolved");
                return Ok(ResolvedInput {
                    value,
                    source: *kind,
                });
            }
        }

        if let Some(value) = &self.default {
            tracing::debug!(source = %InputSourceKind::Default, "input resolved");
            return Ok(ResolvedInput {
                value: value.clone(),
                source: InputSourceKind::Default,
            });
        }

        Err(InputError::NoInput)
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InputChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InputChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputChain")
            .field(
                "sources",
                &self.sources.iter().map(|(_, k)| k).collect::<Vec<_>>(),
            )
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

/// Map source name to InputSourceKind.
fn source_kind_from_name(name: &str) -> InputSourceKind {
    match name {
        "path" => InputSourceKind::Path,
        "stdin" => InputSourceKind::Stdin,
        _ => InputSourceKind::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockStdin;
    use crate::sources::{PathSource, StdinSource};
    use clap::{Arg, Command};
    use std::path::PathBuf;

    fn make_matches(args: &[&str]) -> ArgMatches {
        Command::new("test")
            .arg(Arg::new("path").value_parser(clap::value_parser!(PathBuf)))
            .try_get_matches_from(args)
            .unwrap()
    }

    #[test]
    fn chain_falls_back_to_stdin_without_path() {
        let matches = make_matches(&["test"]);

        let chain = InputChain::<String>::new()
            .try_source(PathSource::new("path"))
            .try_source(StdinSource::with_reader(MockStdin::piped(":root {}")));

        let result = chain.resolve_with_source(&matches).unwrap();
        assert_eq!(result.value, ":root {}");
        assert_eq!(result.source, InputSourceKind::Stdin);
    }

    #[test]
    fn chain_treats_dash_as_stdin() {
        let matches = make_matches(&["test", "-"]);

        let chain = InputChain::<String>::new()
            .try_source(PathSource::new("path"))
            .try_source(StdinSource::with_reader(MockStdin::piped(".dark {}")));

        let result = chain.resolve_with_source(&matches).unwrap();
        assert_eq!(result.value, ".dark {}");
        assert_eq!(result.source, InputSourceKind::Stdin);
    }

    #[test]
    fn chain_falls_back_to_default_on_empty_stdin() {
        let matches = make_matches(&["test"]);

        let chain = InputChain::<String>::new()
            .try_source(StdinSource::with_reader(MockStdin::piped_empty()))
            .default(String::new());

        let result = chain.resolve_with_source(&matches).unwrap();
        assert_eq!(result.value, "");
        assert_eq!(result.source, InputSourceKind::Default);
    }

    #[test]
    fn chain_errors_without_default() {
        let matches = make_matches(&["test"]);

        let chain = InputChain::<String>::new()
            .try_source(StdinSource::with_reader(MockStdin::piped_empty()));

        let result = chain.resolve(&matches);
        assert!(matches!(result, Err(InputError::NoInput)));
    }

    #[test]
    fn chain_aborts_on_read_failure() {
        let matches = make_matches(&["test"]);

        let chain = InputChain::<String>::new()
            .try_source(StdinSource::with_reader(MockStdin::failing(
                std::io::ErrorKind::InvalidData,
            )))
            .default(String::new());

        let result = chain.resolve(&matches);
        assert!(matches!(result, Err(InputError::StdinFailed(_))));
    }

    #[test]
    fn chain_debug_lists_sources() {
        let chain = InputChain::<String>::new()
            .try_source(PathSource::new("path"))
            .try_source(StdinSource::with_reader(MockStdin::terminal()));

        let debug = format!("{:?}", chain);
        assert_eq!(
            debug,
            "InputChain { sources: [Path, Stdin], has_default: false }"
        );
    }
}
