//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `pt-app` and the
//! adapters in `pt-infra` / `pt-shell`.

pub mod app_dirs;
pub mod capture;
pub mod loading;
pub mod onboarding;
pub mod persistence;

pub use app_dirs::{AppDirsError, AppDirsPort};
pub use capture::{CameraCapturePort, CaptureError, CaptureSource};
pub use loading::LoadingIndicatorPort;
pub use onboarding::{CompleteOnboardingError, OnboardingCompletion};
pub use persistence::{PersistenceGatewayPort, StorageError};
