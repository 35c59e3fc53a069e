//! # pt-core
//!
//! Core domain models and state rules for Pet Thoughts.
//!
//! This crate holds pure logic (models, the reducer, the onboarding gate and
//! the navigation graphs) plus the port traits the outer crates implement.
//! It performs no I/O.

pub mod app_dirs;
pub mod config;
pub mod drafts;
pub mod ids;
pub mod model;
pub mod navigation;
pub mod onboarding;
pub mod persistence;
pub mod ports;
pub mod state;

// Re-export commonly used types at the crate root
pub use app_dirs::AppDirs;
pub use config::AppConfig;
pub use ids::{PetId, UserId};
pub use model::{Pet, PetTraits, Photo, Thought, User};
pub use onboarding::{LaunchSnapshot, OnboardingGate, ScreenGraph};
pub use persistence::StorageKey;
pub use state::{AppAction, AppReducer, AppState};
