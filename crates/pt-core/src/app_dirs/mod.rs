use std::path::PathBuf;

/// Platform directories resolved for this app. Facts only; concrete file
/// locations are derived in the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
