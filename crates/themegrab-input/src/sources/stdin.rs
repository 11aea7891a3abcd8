//! Stdin input source.

use std::sync::Arc;

use clap::ArgMatches;

use crate::collector::InputCollector;
use crate::env::{RealStdin, StdinReader};
use crate::InputError;

/// Collect the whole of stdin.
///
/// Stdin is read to end of stream whether it is piped or interactive; an
/// interactive session ends with EOF (Ctrl-D). Empty input yields `None` so
/// the chain can fall through to its default.
///
/// # Testing
///
/// Use [`StdinSource::with_reader`] to inject a mock:
///
/// ```ignore
/// use themegrab_input::{StdinSource, MockStdin};
///
/// let source = StdinSource::with_reader(MockStdin::piped(":root { }"));
/// ```
#[derive(Clone)]
pub struct StdinSource<R: StdinReader = RealStdin> {
    reader: Arc<R>,
}

impl StdinSource<RealStdin> {
    /// Create a new stdin source using real stdin.
    pub fn new() -> Self {
        Self {
            reader: Arc::new(RealStdin),
        }
    }
}

impl Default for StdinSource<RealStdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StdinReader> StdinSource<R> {
    /// Create a stdin source with a custom reader.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
        }
    }
}

impl<R: StdinReader + 'static> InputCollector<String> for StdinSource<R> {
    fn name(&self) -> &'static str {
        "stdin"
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        true
    }

    fn collect(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        if self.reader.is_terminal() {
            tracing::debug!("reading stylesheet from an interactive terminal until EOF");
        }

        let content = self
            .reader
            .read_to_string()
            .map_err(InputError::StdinFailed)?;

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content))
        }
    }
}
