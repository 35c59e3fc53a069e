use std::path::PathBuf;

use pt_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub storage_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            storage_dir: dirs.app_data_root.join("storage"),
            logs_dir: dirs.app_data_root.join("logs"),
            config_path: dirs.app_data_root.join("config.toml"),
        }
    }
}
