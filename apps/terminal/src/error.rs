//! # Terminal Error Module
//!
//! Failures that can actually end the session. Everything the customer
//! can mistype is handled in place, so this enum stays small.

use std::io;

use thiserror::Error;

// =============================================================================
// Terminal Errors
// =============================================================================

/// Fatal session failures.
///
/// ## What is NOT in here
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │  unparseable number   → prompt loop re-asks                  │
/// │  unknown menu option  → message, next round                  │
/// │  cart/catalog misuse  → OrderError, printed, next round      │
/// │  receipt write fail   → warning, purchase still completes    │
/// │                                                              │
/// │  Only the console transport itself failing lands here.       │
/// └──────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Input reached end-of-stream mid-conversation. The session loop
    /// turns this into a quiet exit, so it never reaches `main`.
    #[error("input stream closed")]
    InputClosed,

    /// Reading or writing the console failed.
    #[error("console i/o error: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TerminalError::InputClosed.to_string(), "input stream closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone");
        let err: TerminalError = io_err.into();
        assert!(matches!(err, TerminalError::Io(_)));
        assert_eq!(err.to_string(), "console i/o error: pipe gone");
    }
}
