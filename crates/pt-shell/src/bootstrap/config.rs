//! # Configuration Loader / 配置加载器
//!
//! Reads a TOML file into the [`AppConfig`] DTO and reports I/O and parse
//! errors with context. No validation: whatever is in the file is a fact.
//! 仅纯数据加载，接受文件中的任何内容。

use std::path::{Path, PathBuf};

use anyhow::Context;
use pt_app::AppPaths;
use pt_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Loads `explicit` if given, else the profile's `config.toml` if present,
/// else system defaults under the profile's data root. Empty paths read from
/// a file are filled from the data root.
pub fn load_or_default(explicit: Option<&Path>, paths: &AppPaths) -> anyhow::Result<AppConfig> {
    let mut config = match explicit {
        Some(path) => load_config(path.to_path_buf())?,
        None if paths.config_path.exists() => load_config(paths.config_path.clone())?,
        None => AppConfig::empty(),
    };

    if config.storage_dir.as_os_str().is_empty() {
        config.storage_dir = paths.storage_dir.clone();
    }
    if config.logs_dir.as_os_str().is_empty() {
        config.logs_dir = paths.logs_dir.clone();
    }
    Ok(config)
}
