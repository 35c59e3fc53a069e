//! Pet Thoughts
//!
//! 宠物心声：先认识你的家人和宠物，再看看它们在想什么。

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pt_app::AppPaths;
use pt_core::config::AppConfig;
use pt_core::ports::AppDirsPort;
use pt_infra::DirsAppDirsAdapter;
use pt_shell::bootstrap::tracing::init_tracing_subscriber;
use pt_shell::bootstrap::{load_or_default, run_shell, ShellOptions};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "pet-thoughts")]
#[command(about = "Find out what your pets are thinking", long_about = None)]
pub struct Cli {
    /// Config file (defaults to config.toml under the app data directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep every record in memory; nothing survives the run
    #[arg(long)]
    pub ephemeral: bool,
}

/// Resolves the app data root and loads configuration relative to it.
pub fn resolve_config(cli: &Cli, dirs: &dyn AppDirsPort) -> anyhow::Result<AppConfig> {
    let app_dirs = dirs
        .get_app_dirs()
        .context("Failed to resolve the app data directory")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);
    load_or_default(cli.config.as_deref(), &paths)
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli, &DirsAppDirsAdapter::new())?;
    init_tracing_subscriber(&config.logs_dir, config.log_level.as_deref())?;
    info!(
        storage_dir = %config.storage_dir.display(),
        ephemeral = cli.ephemeral,
        "starting pet-thoughts"
    );

    run_shell(
        config,
        ShellOptions {
            ephemeral: cli.ephemeral,
        },
    )
    .await
}
