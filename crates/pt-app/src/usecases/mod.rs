pub mod capture;
pub mod complete_onboarding;
pub mod initialize;
pub mod pets;
pub mod profile;
pub mod stale;

pub use capture::{CapturePhoto, RevealThought};
pub use complete_onboarding::CompleteOnboarding;
pub use initialize::{InitializationLoader, LaunchOutcome};
pub use pets::{RemovePet, SavePet};
pub use profile::SaveFamilyProfile;
pub use stale::MarkRecordsStale;
