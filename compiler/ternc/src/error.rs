//! Driver failures that happen outside the parser.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("invalid error limit `{0}`: expected a non-negative integer")]
    InvalidErrorLimit(String),

    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{}` is too large ({len} bytes); source files must fit in 4 GiB", path.display())]
    SourceTooLarge { path: PathBuf, len: usize },
}

impl DriverError {
    /// Usage mistakes get exit code 2, everything else 1.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            DriverError::Usage(_)
                | DriverError::UnknownCommand(_)
                | DriverError::InvalidErrorLimit(_)
        )
    }
}
