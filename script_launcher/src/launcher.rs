use chrono::{Local, NaiveDateTime};
use common::errors::launch_error::LaunchError;
use common::models::LaunchRequest;
use common::paths::logs::derive_log_path;
use common::procs::validation::validate;
use common::procs::{spawn_detached, ProcessHandle};
use common::utilities::directory::ensure_directory;
use tracing::{debug, info};

pub struct Launcher {
    request: LaunchRequest,
}

impl Launcher {
    pub fn new(request: LaunchRequest) -> Self {
        Self { request }
    }

    pub async fn launch(&self) -> Result<ProcessHandle, LaunchError> {
        self.launch_at(Local::now().naive_local()).await
    }

    /// Validates, prepares the log directory and starts the child, using `timestamp`
    /// to name the log file. Returns once the child has been created.
    #[tracing::instrument(skip(self))]
    pub async fn launch_at(
        &self,
        timestamp: NaiveDateTime,
    ) -> Result<ProcessHandle, LaunchError> {
        let request = &self.request;
        validate(request.interpreter_path(), request.script_path())?;

        let log_path = derive_log_path(request.log_directory(), &timestamp);
        ensure_directory(request.log_directory()).await?;
        debug!("Log destination {}", log_path.display());

        let handle = spawn_detached(request, &log_path)?;
        info!(
            "Started {} as PID {}",
            request.script_path().display(),
            handle.pid()
        );
        Ok(handle)
    }
}

/// Operator-facing summary of a successful launch.
pub fn report(handle: &ProcessHandle) -> String {
    format!(
        "started PID={}\nlog: {}",
        handle.pid(),
        handle.log_path().display()
    )
}
