pub mod launcher_config;

use crate::configuration::launcher_config::LauncherConfig;
use config::{Config, ConfigError, Environment, File, FileFormat};

/// Name of the optional deploy-time override file, looked up in the current directory.
pub static OVERRIDE_FILE: &str = "launcher.toml";

/// Builds the launcher configuration from the embedded defaults, an optional
/// `launcher.toml` and `{prefix}_*` environment variables, in that order of precedence.
pub fn load_launcher_config(defaults: &str, prefix: &str) -> Result<LauncherConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(defaults, FileFormat::Toml).required(true))
        .add_source(File::new(OVERRIDE_FILE, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("interpreter_args"),
        )
        .build()?
        .try_deserialize::<LauncherConfig>()
}
