use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Wrong number of arguments\n{0}")]
    ArgumentCount(#[source] clap::Error),

    #[error("{} is not a monochrome bmp file: {reason}", path.display())]
    InputValidation { path: PathBuf, reason: &'static str },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ArgumentCount(_) => -1,
            Error::InputValidation { .. } => -2,
            Error::Io { .. } | Error::Decode { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
