use crate::models::LaunchRequest;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct LauncherConfig {
    pub interpreter: String,
    #[serde(default)]
    pub interpreter_args: Vec<String>,
    pub script: String,
    pub log_directory: String,
    #[serde(default)]
    pub working_directory: Option<String>,
    pub logging_level: String,
}

impl LauncherConfig {
    /// Paths may start with `~`, which is expanded to the user's home directory.
    pub fn to_request(&self) -> LaunchRequest {
        let working_directory = self
            .working_directory
            .as_deref()
            .map(|dir| shellexpand::tilde(dir).into_owned());
        LaunchRequest::new(
            shellexpand::tilde(&self.interpreter).into_owned(),
            self.interpreter_args
                .iter()
                .filter(|arg| !arg.is_empty())
                .cloned()
                .collect(),
            shellexpand::tilde(&self.script).into_owned(),
            shellexpand::tilde(&self.log_directory).into_owned(),
            working_directory.as_deref(),
        )
    }
}
