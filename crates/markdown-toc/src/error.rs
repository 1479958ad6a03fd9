use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InvalidArguments = 2,
    Io = 4,
}

#[derive(Debug, Error)]
pub enum TocError {
    #[error("unable to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read input stream")]
    Read(#[from] io::Error),

    #[error("unable to write table of contents")]
    Write(#[source] io::Error),
}

impl TocError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } | Self::Read(_) | Self::Write(_) => ExitCode::Io,
        }
    }

    /// The underlying I/O failure, untouched.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Io { source, .. } => source,
            Self::Read(source) | Self::Write(source) => source,
        }
    }
}

pub type TocResult<T> = Result<T, TocError>;
