//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for session construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic; just parameter grouping.
//! **这不是 Builder 模式**，仅用于参数打包。

use std::sync::Arc;

use pt_core::ports::{CameraCapturePort, LoadingIndicatorPort, PersistenceGatewayPort};

/// Ports the session is built from. All required.
pub struct AppDeps {
    // Storage / 存储
    pub gateway: Arc<dyn PersistenceGatewayPort>,

    // Capture / 拍照
    pub capture: Arc<dyn CameraCapturePort>,

    // UI / 界面
    pub loading: Arc<dyn LoadingIndicatorPort>,
}

/// Launch-time switches read from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Mark the durable records stale before the launch sequence runs.
    pub clear_stale_on_launch: bool,
}
