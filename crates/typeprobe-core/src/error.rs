use crate::convert::TruncateError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for report assembly and rendering.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Truncate(#[from] TruncateError),

    #[error("report output failed: {0}")]
    Output(#[from] std::io::Error),
}

///
/// TESTS
///
