//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//! No validation and no policy: an empty path is a valid fact; the caller
//! decides what to do with it.
//! 只包含数据结构定义，禁止验证逻辑与策略。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one file per durable record (may be empty)
    /// 持久化记录所在目录（可能为空）
    pub storage_dir: PathBuf,

    /// Directory for the rolling log file (may be empty)
    pub logs_dir: PathBuf,

    /// Log filter override, e.g. `"debug"` or `"info,pt_infra=trace"`
    pub log_level: Option<String>,

    /// Mark the durable records stale before loading, forcing a fresh onboarding
    pub clear_stale_on_launch: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            storage_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            logs_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_level: toml_value
                .get("logging")
                .and_then(|l| l.get("level"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            clear_stale_on_launch: toml_value
                .get("dev")
                .and_then(|d| d.get("clear_stale_on_launch"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            storage_dir: PathBuf::new(),
            logs_dir: PathBuf::new(),
            log_level: None,
            clear_stale_on_launch: false,
        }
    }

    /// Create AppConfig with paths under `data_dir`.
    ///
    /// `data_dir` is resolved by the caller (see `pt-infra::fs::app_dirs`).
    /// 基础目录由调用方计算。
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            storage_dir: data_dir.join("storage"),
            logs_dir: data_dir.join("logs"),
            log_level: None,
            clear_stale_on_launch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [storage]
            dir = "/var/pets/storage"

            [logging]
            dir = "/var/pets/logs"
            level = "debug"

            [dev]
            clear_stale_on_launch = true
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/var/pets/storage"));
        assert_eq!(config.logs_dir, PathBuf::from("/var/pets/logs"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.clear_stale_on_launch);
    }

    #[test]
    fn test_from_toml_keeps_missing_values_empty() {
        let toml_value: Value = toml::from_str("[storage]").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty is a fact, not an error
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_with_system_defaults_creates_paths_under_data_dir() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.storage_dir, PathBuf::from("/tmp/test/storage"));
        assert_eq!(config.logs_dir, PathBuf::from("/tmp/test/logs"));
        assert!(config.log_level.is_none());
        assert!(!config.clear_stale_on_launch);
    }
}
