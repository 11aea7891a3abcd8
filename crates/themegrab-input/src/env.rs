//! Environment abstractions for testability.
//!
//! Stdin is reached through the [`StdinReader`] trait so tests can run
//! without depending on terminal state or actual piping.

use std::io::{self, IsTerminal, Read};

/// Abstraction over stdin reading.
pub trait StdinReader: Send + Sync {
    /// Check if stdin is a terminal (TTY).
    ///
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Read all content from stdin until end of stream.
    fn read_to_string(&self) -> io::Result<String>;
}

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        std::io::stdin().lock().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin reader for testing.
///
/// Simulates a terminal, piped content, or a stream that fails mid-read.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: Result<String, io::ErrorKind>,
}

impl MockStdin {
    /// Create a mock that simulates an interactive terminal closed without input.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: Ok(String::new()),
        }
    }

    /// Create a mock that simulates piped input.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: Ok(content.into()),
        }
    }

    /// Create a mock that simulates empty piped input.
    pub fn piped_empty() -> Self {
        Self::piped(String::new())
    }

    /// Create a mock whose read fails with the given error kind.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            is_terminal: false,
            content: Err(kind),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        match &self.content {
            Ok(content) => Ok(content.clone()),
            Err(kind) => Err(io::Error::new(*kind, "mock stdin failure")),
        }
    }
}
