use std::sync::Arc;

use anyhow::Context;
use pt_app::{AppSession, LaunchOptions};
use pt_core::config::AppConfig;
use tokio::io::BufReader;
use tracing::info;

use crate::adapters::ConsoleLoadingIndicator;
use crate::controller::Controller;

use super::wiring::wire_dependencies;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Keep everything in memory for this run.
    pub ephemeral: bool,
}

/// Launches the session and runs the controller over stdin/stdout until
/// `quit` or end of input.
pub async fn run_shell(config: AppConfig, options: ShellOptions) -> anyhow::Result<()> {
    let deps = wire_dependencies(
        &config,
        options.ephemeral,
        Arc::new(ConsoleLoadingIndicator::new()),
    )
    .context("Failed to wire dependencies")?;

    let launch = LaunchOptions {
        clear_stale_on_launch: config.clear_stale_on_launch,
    };
    let (session, outcome) = AppSession::launch(deps, launch).await;
    info!(?outcome, "session launched");

    let mut controller = Controller::new(session);
    let result = controller
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await;

    controller.into_session().shutdown().await;
    result
}
