//! Control signals and host-facing errors.
//!
//! Two layers:
//! - [`Signal`]: in-language non-local exits. The carried value is not in the
//!   signal; it sits in the top frame while the signal unwinds.
//! - [`RunError`]: what an embedder sees when a run cannot complete.

use std::path::PathBuf;

use thiserror::Error;

/// Non-local exit raised by `return` or `throw`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Signal {
    /// Early return; absorbed at the nearest call boundary.
    #[error("return")]
    Return,
    /// Thrown error value; absorbed by `try` or reported at top level.
    #[error("error")]
    Error,
}

/// Outcome of one evaluation step.
pub type Flow = Result<(), Signal>;

/// Absorb an early return at a call boundary.
#[inline]
pub(crate) fn absorb_return(flow: Flow) -> Flow {
    match flow {
        Err(Signal::Return) => Ok(()),
        other => other,
    }
}

/// A run that did not produce a value.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program file could not be read.
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A thrown error reached top level. Holds the error's text.
    #[error("uncaught error: {0}")]
    Uncaught(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_return_only_absorbs_return() {
        assert_eq!(absorb_return(Err(Signal::Return)), Ok(()));
        assert_eq!(absorb_return(Err(Signal::Error)), Err(Signal::Error));
        assert_eq!(absorb_return(Ok(())), Ok(()));
    }

    #[test]
    fn uncaught_error_message() {
        let err = RunError::Uncaught("boom".to_string());
        assert_eq!(err.to_string(), "uncaught error: boom");
    }
}
