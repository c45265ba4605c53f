//! API Facade for the application.
//!
//! Glues the process environment and local filesystem to the configure command.

use std::path::PathBuf;

use crate::adapters::local_filesystem::LocalFilesystem;
use crate::app::commands::configure::{self, ConfigureRequest};
use crate::app::config::ActionEnvironment;

pub use crate::app::commands::configure::ConfigureOutcome;
pub use crate::domain::AppError;

/// Caller-facing options; anything left `None` comes from the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    pub feed_url: String,
    pub config_file: Option<PathBuf>,
    /// Defaults to the current directory.
    pub root_dir: Option<PathBuf>,
    /// Defaults to the `owner` action input.
    pub owner: Option<String>,
}

/// Write an authenticated NuGet.config next to the root directory.
///
/// Ambient inputs come from `env`, typically [`ActionEnvironment::from_env`].
pub fn configure(
    options: ConfigureOptions,
    env: ActionEnvironment,
) -> Result<ConfigureOutcome, AppError> {
    let root_dir = match options.root_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let request = ConfigureRequest {
        feed_url: options.feed_url,
        config_file: options.config_file,
        root_dir: std::path::absolute(root_dir)?,
        owner: options.owner.filter(|owner| !owner.is_empty()).or(env.owner_input),
        repository_owner: env.repository_owner,
        auth_token: env.auth_token,
    };

    configure::execute(&LocalFilesystem::new(), &request)
}
