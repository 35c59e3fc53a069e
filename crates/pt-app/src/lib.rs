//! Pet Thoughts application orchestration layer.
//!
//! Holds the state store, the persistence effects and the use cases that
//! drive them, and exposes them through [`AppSession`].

pub mod app_paths;
pub mod deps;
pub mod effects;
pub mod session;
pub mod store;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::{AppDeps, LaunchOptions};
pub use session::{AppSession, SessionError};
pub use store::{StateObserver, StateStore, Transition};
pub use usecases::LaunchOutcome;
