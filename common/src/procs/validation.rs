use crate::errors::precondition_error::PreconditionError;
use std::path::Path;

/// Interpreter first, then script. Nothing is created or spawned here.
pub fn validate(interpreter: &Path, script: &Path) -> Result<(), PreconditionError> {
    if !is_executable_file(interpreter) {
        return Err(PreconditionError::InterpreterNotExecutable(
            interpreter.to_path_buf(),
        ));
    }
    if !script.is_file() {
        return Err(PreconditionError::ScriptNotFound(script.to_path_buf()));
    }
    Ok(())
}

#[cfg(unix)]
pub fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
