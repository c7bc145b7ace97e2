use std::fmt;
use std::path::PathBuf;

/// Checks that must pass before anything touches the filesystem or spawns a process.
#[derive(Debug)]
pub enum PreconditionError {
    InterpreterNotExecutable(PathBuf),
    ScriptNotFound(PathBuf),
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InterpreterNotExecutable(path) => write!(
                f,
                "interpreter not found or not executable: {}",
                path.display()
            ),
            Self::ScriptNotFound(path) => write!(f, "script not found: {}", path.display()),
        }
    }
}

impl std::error::Error for PreconditionError {}
