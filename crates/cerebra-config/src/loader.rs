// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support.
//!
//! Three-tier loading: the TOML file supplies the base values, environment
//! variables override the file, and explicit CLI arguments override both.

use crate::{CerebraConfig, ConfigError, ConfigResult};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name searched for when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "cerebra_configuration.toml";

/// Find the CEREBRA configuration file.
///
/// Search order:
/// 1. `CEREBRA_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Ancestor directories (up to 5 levels, to reach a workspace root)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file exists in any
/// searched location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("CEREBRA_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by CEREBRA_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "CEREBRA configuration file '{}' not found in any of these locations:\n{}\n\nSet CEREBRA_CONFIG_PATH environment variable to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from a TOML file with overrides applied.
///
/// # Arguments
///
/// * `config_path` - Optional path to the config file. If `None`, the file
///   is searched for via [`find_config_file`].
/// * `cli_args` - Optional CLI argument overrides keyed by dotted path
///   (`"validation.max_surface_vertices"`).
///
/// # Errors
///
/// Returns an error if the file is missing or contains invalid TOML.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CerebraConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: CerebraConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    info!(path = %config_file.display(), "configuration loaded");
    Ok(config)
}

/// Apply environment variable overrides to configuration.
///
/// Supported environment variables:
/// - `CEREBRA_LOG_LEVEL` -> `system.log_level`
/// - `CEREBRA_DEBUG` -> `system.debug`
/// - `CEREBRA_MAX_SURFACE_VERTICES` -> `validation.max_surface_vertices`
/// - `CEREBRA_DATA_DIR` -> `storage.data_dir`
pub fn apply_environment_overrides(config: &mut CerebraConfig) {
    if let Ok(value) = env::var("CEREBRA_LOG_LEVEL") {
        config.system.log_level = value;
    }
    if let Ok(value) = env::var("CEREBRA_DEBUG") {
        match value.parse() {
            Ok(parsed) => config.system.debug = parsed,
            Err(_) => warn!(%value, "ignoring non-boolean CEREBRA_DEBUG"),
        }
    }
    if let Ok(value) = env::var("CEREBRA_MAX_SURFACE_VERTICES") {
        match value.parse() {
            Ok(parsed) => config.validation.max_surface_vertices = parsed,
            Err(_) => warn!(%value, "ignoring non-numeric CEREBRA_MAX_SURFACE_VERTICES"),
        }
    }
    if let Ok(value) = env::var("CEREBRA_DATA_DIR") {
        config.storage.data_dir = value.into();
    }
}

/// Apply CLI argument overrides, keyed by dotted config path.
pub fn apply_cli_overrides(config: &mut CerebraConfig, cli_args: &HashMap<String, String>) {
    for (key, value) in cli_args {
        match key.as_str() {
            "system.log_level" => config.system.log_level = value.clone(),
            "system.debug" => {
                if let Ok(parsed) = value.parse() {
                    config.system.debug = parsed;
                }
            }
            "validation.max_surface_vertices" => {
                if let Ok(parsed) = value.parse() {
                    config.validation.max_surface_vertices = parsed;
                }
            }
            "storage.data_dir" => config.storage.data_dir = value.clone().into(),
            _ => debug!(%key, "ignoring unknown CLI override"),
        }
    }
}
