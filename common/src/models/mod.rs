use std::path::{Path, PathBuf};

/// Everything needed to start the target script once. Built from configuration at
/// start-up and consumed by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    interpreter_path: PathBuf,
    interpreter_args: Vec<String>,
    script_path: PathBuf,
    log_directory: PathBuf,
    working_directory: Option<PathBuf>,
}

impl LaunchRequest {
    pub fn new(
        interpreter_path: impl Into<PathBuf>,
        interpreter_args: Vec<String>,
        script_path: impl Into<PathBuf>,
        log_directory: impl Into<PathBuf>,
        working_directory: Option<&str>,
    ) -> Self {
        Self {
            interpreter_path: interpreter_path.into(),
            interpreter_args,
            script_path: script_path.into(),
            log_directory: log_directory.into(),
            working_directory: working_directory.map(PathBuf::from),
        }
    }

    pub fn interpreter_path(&self) -> &Path {
        &self.interpreter_path
    }

    pub fn interpreter_args(&self) -> &[String] {
        &self.interpreter_args
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    pub fn log_directory(&self) -> &Path {
        &self.log_directory
    }

    /// Directory the child runs in: the configured one, otherwise the script's own
    /// directory. `None` means the launcher's directory is inherited.
    pub fn effective_working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref().or_else(|| {
            self.script_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LaunchRequest;
    use std::path::Path;

    #[test]
    fn test_working_directory_defaults_to_script_parent() {
        let request =
            LaunchRequest::new("/usr/bin/python3", vec![], "/srv/bot/run.py", "logs", None);
        assert_eq!(
            request.effective_working_directory(),
            Some(Path::new("/srv/bot"))
        );
    }

    #[test]
    fn test_configured_working_directory_wins() {
        let request = LaunchRequest::new(
            "/usr/bin/python3",
            vec![],
            "/srv/bot/run.py",
            "logs",
            Some("/tmp"),
        );
        assert_eq!(
            request.effective_working_directory(),
            Some(Path::new("/tmp"))
        );
    }

    #[test]
    fn test_bare_script_name_inherits_directory() {
        let request = LaunchRequest::new("/usr/bin/python3", vec![], "run.py", "logs", None);
        assert_eq!(request.effective_working_directory(), None);
    }
}
