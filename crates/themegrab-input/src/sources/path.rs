//! File path input source.

use std::path::{Path, PathBuf};

use clap::ArgMatches;

use crate::collector::InputCollector;
use crate::InputError;

/// Path value that means "read stdin instead".
pub const STDIN_PATH: &str = "-";

/// Collect input from a file named by a CLI argument.
///
/// The argument must be registered with a `PathBuf` value parser. The source
/// is available when the argument was given and is not [`STDIN_PATH`].
///
/// # Example
///
/// ```ignore
/// use themegrab_input::{InputChain, PathSource, StdinSource};
///
/// // For: themegrab app/globals.css
/// let chain = InputChain::<String>::new()
///     .try_source(PathSource::new("path"))
///     .try_source(StdinSource::new());
/// ```
#[derive(Debug, Clone)]
pub struct PathSource {
    name: String,
}

impl PathSource {
    /// Create a new path source.
    ///
    /// The `name` should match the argument id defined in clap.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn path<'a>(&self, matches: &'a ArgMatches) -> Option<&'a PathBuf> {
        matches
            .try_get_one::<PathBuf>(&self.name)
            .ok()
            .flatten()
            .filter(|path| path.as_path() != Path::new(STDIN_PATH))
    }
}

impl InputCollector<String> for PathSource {
    fn name(&self) -> &'static str {
        "path"
    }

    fn is_available(&self, matches: &ArgMatches) -> bool {
        self.path(matches).is_some()
    }

    fn collect(&self, matches: &ArgMatches) -> Result<Option<String>, InputError> {
        let Some(path) = self.path(matches) else {
            return Ok(None);
        };

        tracing::debug!(path = %path.display(), "reading stylesheet file");
        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| InputError::file(path, e))
    }
}
