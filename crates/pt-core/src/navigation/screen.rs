use serde::{Deserialize, Serialize};

use crate::ids::PetId;
use crate::model::Photo;

/// One screen plus the typed parameters it was opened with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Welcome,
    FamilyContext {
        reached_from_onboarding: bool,
    },
    PetManagement {
        reached_from_onboarding: bool,
    },
    /// `pet_id == None` adds a new pet.
    PetDetails {
        pet_id: Option<PetId>,
        reached_from_onboarding: bool,
    },
    Home,
    PetsOverview,
    CaptureSource,
    PhotoPreview {
        photo: Photo,
    },
    PhotoResult {
        photo: Photo,
    },
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::FamilyContext { .. } => "Their Human Circle",
            Self::PetManagement { .. } => "Magical Companions",
            Self::PetDetails { pet_id: Some(_), .. } => "Edit Companion",
            Self::PetDetails { pet_id: None, .. } => "Add Companion",
            Self::Home => "Pet Thoughts",
            Self::PetsOverview => "Your Pet's World",
            Self::CaptureSource => "Choose a Photo",
            Self::PhotoPreview { .. } => "Preview",
            Self::PhotoResult { .. } => "Thoughts",
        }
    }

    /// Whether the screen was opened as part of the first-run flow.
    pub fn reached_from_onboarding(&self) -> bool {
        match self {
            Self::Welcome => true,
            Self::FamilyContext {
                reached_from_onboarding,
            }
            | Self::PetManagement {
                reached_from_onboarding,
            }
            | Self::PetDetails {
                reached_from_onboarding,
                ..
            } => *reached_from_onboarding,
            _ => false,
        }
    }

    /// Progress bar shown during onboarding, if any.
    pub fn progress(&self) -> Option<Progress> {
        match self {
            Self::FamilyContext {
                reached_from_onboarding: true,
            } => Some(Progress { step: 1, of: 3 }),
            Self::PetManagement {
                reached_from_onboarding: true,
            } => Some(Progress { step: 2, of: 3 }),
            _ => None,
        }
    }
}

/// Onboarding progress, `step` of `of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub step: u8,
    pub of: u8,
}

impl Progress {
    pub fn percent(&self) -> u8 {
        if self.of == 0 {
            return 0;
        }
        ((u16::from(self.step) * 100) / u16::from(self.of)) as u8
    }
}

/// Where the pet management primary button leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryTarget {
    /// Finish onboarding and enter the main graph.
    AdvanceToMain,
    /// Pop back to whichever screen opened pet management.
    ReturnToCaller,
}

/// Presentation of the pet management screen, derived from its one
/// reached-from-onboarding flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetManagementView {
    pub reached_from_onboarding: bool,
    pub heading: &'static str,
    pub primary_label: &'static str,
    pub primary_target: PrimaryTarget,
    pub progress: Option<Progress>,
}

impl PetManagementView {
    pub fn new(reached_from_onboarding: bool) -> Self {
        if reached_from_onboarding {
            Self {
                reached_from_onboarding,
                heading: "Your Magical Companions",
                primary_label: "Finish Setup",
                primary_target: PrimaryTarget::AdvanceToMain,
                progress: Some(Progress { step: 2, of: 3 }),
            }
        } else {
            Self {
                reached_from_onboarding,
                heading: "Manage Your Companions",
                primary_label: "Done",
                primary_target: PrimaryTarget::ReturnToCaller,
                progress: None,
            }
        }
    }
}
