//! Error type for host pages driving the terminal.

use thiserror::Error;

/// Errors surfaced while running a component harness.
///
/// Component operations themselves cannot fail; everything here comes from
/// the terminal driver's I/O.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
