use crate::errors::precondition_error::PreconditionError;
use config::ConfigError;
use std::fmt;
use std::io;

/// Errors that can happen while launching the target script. All of them are fatal.
#[derive(Debug)]
pub enum LaunchError {
    Config(ConfigError),
    Precondition(PreconditionError),
    Io(io::Error),
    LogFile(io::Error),
    Spawn(io::Error),
}

impl LaunchError {
    /// Process exit status reported for this error.
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "could not load configuration: {e}"),
            Self::Precondition(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "could not prepare log directory: {e}"),
            Self::LogFile(e) => write!(f, "could not open log file: {e}"),
            Self::Spawn(e) => write!(f, "could not start process: {e}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Precondition(e) => Some(e),
            Self::Io(e) | Self::LogFile(e) | Self::Spawn(e) => Some(e),
        }
    }
}

impl From<ConfigError> for LaunchError {
    fn from(inner: ConfigError) -> Self {
        Self::Config(inner)
    }
}

impl From<PreconditionError> for LaunchError {
    fn from(inner: PreconditionError) -> Self {
        Self::Precondition(inner)
    }
}

impl From<io::Error> for LaunchError {
    fn from(inner: io::Error) -> Self {
        Self::Io(inner)
    }
}
