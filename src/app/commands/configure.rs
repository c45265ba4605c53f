//! Write a NuGet.config that authenticates one package feed.

use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;

use crate::domain::credentials::resolve_owner;
use crate::domain::nuget_config::build_authenticated_config;
use crate::domain::paths::{existing_config_name, output_config_path, resolve_existing_config};
use crate::domain::{AppError, AuthToken, Credentials, ExistingConfig};
use crate::ports::ConfigFilesystem;

/// Everything the configure command needs, with ambient values already resolved.
#[derive(Clone, Default)]
pub struct ConfigureRequest {
    pub feed_url: String,
    /// Existing config to merge from; relative paths resolve against `root_dir`.
    pub config_file: Option<PathBuf>,
    pub root_dir: PathBuf,
    /// Explicit owner, wins over `repository_owner` when non-empty.
    pub owner: Option<String>,
    pub repository_owner: Option<String>,
    /// Raw token value; unset or empty is fatal.
    pub auth_token: Option<String>,
}

/// What the command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigureOutcome {
    pub existing_config: PathBuf,
    pub config_path: PathBuf,
    pub source_keys: Vec<String>,
    pub synthesized_source: bool,
}

/// Execute the configure command.
///
/// Reads at most one existing config and writes exactly one file. The whole
/// output document is built and validated before the write.
pub fn execute<F: ConfigFilesystem + ?Sized>(
    fs: &F,
    request: &ConfigureRequest,
) -> Result<ConfigureOutcome, AppError> {
    if request.feed_url.is_empty() {
        return Err(AppError::config_error("Feed URL must not be empty"));
    }

    let existing_config = locate_existing_config(fs, request)?;
    let config_path = output_config_path(&request.root_dir);

    info!(
        "Finding any source references in {}, writing a new temporary configuration file with credentials to {}",
        existing_config.display(),
        config_path.display()
    );

    let owner = resolve_owner(request.owner.as_deref(), request.repository_owner.as_deref())?;
    let token = AuthToken::from_env_value(request.auth_token.as_deref())?;

    let matched_keys = if fs.file_exists(&existing_config) {
        let content = fs.read_file(&existing_config)?;
        let existing = ExistingConfig::parse(&content, &existing_config)?;
        for source in &existing.sources {
            debug!("source '{}'", source.value);
        }
        let keys = existing.matching_keys(&request.feed_url);
        for key in &keys {
            debug!("Found a URL with key {}", key);
        }
        keys
    } else {
        Vec::new()
    };

    let credentials = Credentials { username: owner, token };
    let config = build_authenticated_config(&request.feed_url, &matched_keys, &credentials)?;
    let rendered = config.document.to_pretty_string()?;

    fs.write_file(&config_path, &rendered)?;

    Ok(ConfigureOutcome {
        existing_config,
        config_path,
        source_keys: config.source_keys.iter().map(|key| key.to_string()).collect(),
        synthesized_source: config.synthesized_source,
    })
}

fn locate_existing_config<F: ConfigFilesystem + ?Sized>(
    fs: &F,
    request: &ConfigureRequest,
) -> Result<PathBuf, AppError> {
    let location = match request.config_file.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(existing_config_name(&fs.list_dir(&request.root_dir)?)),
    };
    Ok(resolve_existing_config(&request.root_dir, &location))
}
