//! Onboarding gate.
//!
//! Decides, from what was read at launch, whether the first-run flow has been
//! completed, and maps that decision to one of the two screen graphs.

use serde::{Deserialize, Serialize};

use crate::model::{Pet, User};
use crate::persistence::flag_is_true;

/// Durable records as read (and decoded) at launch.
///
/// A record that could not be read or decoded is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchSnapshot {
    pub has_launched: Option<String>,
    pub user: Option<User>,
    pub pets: Option<Vec<Pet>>,
}

/// Pure completion rule.
pub struct OnboardingGate;

impl OnboardingGate {
    /// `true` iff the has-launched flag is `"true"` and both the user and the
    /// pets records are present. An empty pets array counts as present.
    pub fn is_complete(snapshot: &LaunchSnapshot) -> bool {
        flag_is_true(snapshot.has_launched.as_deref())
            && snapshot.user.is_some()
            && snapshot.pets.is_some()
    }
}

/// The two disjoint screen graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenGraph {
    /// First-run flow collecting the owner and the pets.
    Onboarding,
    /// Main application.
    Main,
}

impl ScreenGraph {
    pub fn for_completion(onboarding_complete: bool) -> Self {
        if onboarding_complete {
            Self::Main
        } else {
            Self::Onboarding
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{PetId, UserId};

    fn user() -> User {
        User {
            id: UserId::from("1"),
            name: "Ann".to_string(),
            family_members: Vec::new(),
        }
    }

    fn complete_snapshot() -> LaunchSnapshot {
        LaunchSnapshot {
            has_launched: Some("true".to_string()),
            user: Some(user()),
            pets: Some(vec![Pet::new(PetId::from("p1"), "Rex", "Dog")]),
        }
    }

    #[test]
    fn complete_when_all_three_pieces_present() {
        assert!(OnboardingGate::is_complete(&complete_snapshot()));
    }

    #[test]
    fn any_single_missing_piece_yields_incomplete() {
        let mut no_flag = complete_snapshot();
        no_flag.has_launched = None;
        let mut no_user = complete_snapshot();
        no_user.user = None;
        let mut no_pets = complete_snapshot();
        no_pets.pets = None;
        let mut false_flag = complete_snapshot();
        false_flag.has_launched = Some("false".to_string());

        for snapshot in [no_flag, no_user, no_pets, false_flag] {
            assert!(!OnboardingGate::is_complete(&snapshot), "{snapshot:?}");
        }
    }

    #[test]
    fn empty_pets_record_still_counts_as_present() {
        let mut snapshot = complete_snapshot();
        snapshot.pets = Some(Vec::new());
        assert!(OnboardingGate::is_complete(&snapshot));
    }

    #[test]
    fn graph_follows_completion() {
        assert_eq!(ScreenGraph::for_completion(true), ScreenGraph::Main);
        assert_eq!(ScreenGraph::for_completion(false), ScreenGraph::Onboarding);
    }
}
