pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_or_default};
pub use run::{run_shell, ShellOptions};
pub use wiring::{wire_dependencies, WiringError};
