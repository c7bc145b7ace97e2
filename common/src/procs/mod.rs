pub mod validation;

use crate::errors::launch_error::LaunchError;
use crate::models::LaunchRequest;
use async_process::{Child, Command, ExitStatus, Stdio};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Opens `log_file_path` for appending, creating it if needed. The second handle is a
/// clone so stdout and stderr share one file offset.
pub fn open_append_log(log_file_path: &Path) -> std::io::Result<(File, File)> {
    let stdout_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let stderr_file = stdout_file.try_clone()?;
    Ok((stdout_file, stderr_file))
}

/// A child started by [`spawn_detached`]. Dropping it leaves the child running.
pub struct ProcessHandle {
    child: Child,
    log_path: PathBuf,
}

impl ProcessHandle {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Waits for the child to exit. Never called by the launcher itself.
    pub async fn wait(mut self) -> std::io::Result<ExitStatus> {
        self.child.status().await
    }
}

/// Starts `interpreter [args..] script` in its own session with stdin closed and
/// stdout/stderr appended to `log_path`. Returns as soon as the child exists.
pub fn spawn_detached(
    request: &LaunchRequest,
    log_path: &Path,
) -> Result<ProcessHandle, LaunchError> {
    let (stdout_file, stderr_file) =
        open_append_log(log_path).map_err(LaunchError::LogFile)?;

    // The child may run in another directory, so relative paths are resolved here.
    let interpreter =
        std::path::absolute(request.interpreter_path()).map_err(LaunchError::Spawn)?;
    let script = std::path::absolute(request.script_path()).map_err(LaunchError::Spawn)?;

    let mut std_command = std::process::Command::new(&interpreter);
    std_command.args(request.interpreter_args()).arg(&script);

    if let Some(dir) = request.effective_working_directory() {
        std_command.current_dir(dir);
    }

    #[cfg(unix)]
    detach_from_terminal(&mut std_command);

    let mut command = Command::from(std_command);
    command
        .stdin(Stdio::null())
        .stdout(stdout_file)
        .stderr(stderr_file);

    debug!(
        "Starting {} {:?} {} with output appended to {}",
        interpreter.display(),
        request.interpreter_args(),
        script.display(),
        log_path.display()
    );
    let child = command.spawn().map_err(LaunchError::Spawn)?;

    Ok(ProcessHandle {
        child,
        log_path: log_path.to_path_buf(),
    })
}

/// Puts the child in a new session so it has no controlling terminal and survives the
/// launcher and its terminal going away.
#[cfg(unix)]
fn detach_from_terminal(command: &mut std::process::Command) {
    use std::os::unix::process::CommandExt;
    // SAFETY: setsid is async-signal-safe and touches no parent state.
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }
}
