//! Navigation state machine.
//!
//! Defines a pure transition function over a screen stack. The stack always
//! belongs to exactly one [`ScreenGraph`]; the graph only changes on
//! [`NavEvent::OnboardingCompleted`].

use serde::{Deserialize, Serialize};

use crate::ids::PetId;
use crate::model::Photo;
use crate::onboarding::ScreenGraph;

use super::Screen;

/// Current graph, its root screen and the screens opened above it
/// (last is visible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    graph: ScreenGraph,
    root: Screen,
    stack: Vec<Screen>,
}

impl NavState {
    /// Initial state of a graph, selected once at mount.
    pub fn mount(graph: ScreenGraph) -> Self {
        let root = match graph {
            ScreenGraph::Onboarding => Screen::Welcome,
            ScreenGraph::Main => Screen::Home,
        };
        Self {
            graph,
            root,
            stack: Vec::new(),
        }
    }

    pub fn graph(&self) -> ScreenGraph {
        self.graph
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    fn push(mut self, screen: Screen) -> Self {
        self.stack.push(screen);
        self
    }

    fn pop(mut self) -> Self {
        self.stack.pop();
        self
    }

    fn replace_top(mut self, screen: Screen) -> Self {
        match self.stack.last_mut() {
            Some(top) => *top = screen,
            None => self.root = screen,
        }
        self
    }
}

/// Events raised by the screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// Welcome: start onboarding.
    Start,
    Back,
    /// Family screen saved the owner profile.
    FamilySaved,
    /// Open the pet editor for a new pet.
    AddPet,
    /// Open the pet editor for an existing pet.
    EditPet { pet_id: PetId },
    /// Pet editor saved or deleted its pet.
    PetEditorClosed,
    /// Primary button of the pet management screen.
    PetManagementPrimary,
    /// The completion capability succeeded.
    OnboardingCompleted,
    OpenPetsOverview,
    OpenPetManagement,
    OpenFamily,
    OpenCapture,
    PhotoCaptured { photo: Photo },
    RevealThoughts,
    TakeAnother,
}

/// Side-effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    /// Run the onboarding completion capability.
    CompleteOnboarding,
    /// Produce the thought for the photo being revealed.
    RevealThought,
}

/// Pure navigation state machine.
pub struct NavigationMachine;

impl NavigationMachine {
    pub fn transition(state: NavState, event: NavEvent) -> (NavState, Vec<NavAction>) {
        let current = state.current().clone();
        match (state.graph, current, event) {
            (_, _, NavEvent::Back) => (state.pop(), Vec::new()),

            // Onboarding graph
            (ScreenGraph::Onboarding, Screen::Welcome, NavEvent::Start) => (
                state.push(Screen::FamilyContext {
                    reached_from_onboarding: true,
                }),
                Vec::new(),
            ),
            (
                ScreenGraph::Onboarding,
                Screen::FamilyContext {
                    reached_from_onboarding: true,
                },
                NavEvent::FamilySaved,
            ) => (
                state.push(Screen::PetManagement {
                    reached_from_onboarding: true,
                }),
                Vec::new(),
            ),
            (
                ScreenGraph::Onboarding,
                Screen::PetManagement {
                    reached_from_onboarding: true,
                },
                NavEvent::PetManagementPrimary,
            ) => (state, vec![NavAction::CompleteOnboarding]),
            (ScreenGraph::Onboarding, _, NavEvent::OnboardingCompleted) => {
                (NavState::mount(ScreenGraph::Main), Vec::new())
            }

            // Shared pet editing loop
            (
                _,
                Screen::PetManagement {
                    reached_from_onboarding,
                },
                NavEvent::AddPet,
            ) => (
                state.push(Screen::PetDetails {
                    pet_id: None,
                    reached_from_onboarding,
                }),
                Vec::new(),
            ),
            (
                _,
                Screen::PetManagement {
                    reached_from_onboarding,
                },
                NavEvent::EditPet { pet_id },
            ) => (
                state.push(Screen::PetDetails {
                    pet_id: Some(pet_id),
                    reached_from_onboarding,
                }),
                Vec::new(),
            ),
            (_, Screen::PetDetails { .. }, NavEvent::PetEditorClosed) => (state.pop(), Vec::new()),

            // Main graph
            (
                ScreenGraph::Main,
                Screen::PetManagement {
                    reached_from_onboarding: false,
                },
                NavEvent::PetManagementPrimary,
            ) => (state.pop(), Vec::new()),
            (
                ScreenGraph::Main,
                Screen::FamilyContext {
                    reached_from_onboarding: false,
                },
                NavEvent::FamilySaved,
            ) => (state.pop(), Vec::new()),
            (ScreenGraph::Main, Screen::Home, NavEvent::OpenPetsOverview) => {
                (state.push(Screen::PetsOverview), Vec::new())
            }
            (ScreenGraph::Main, Screen::PetsOverview, NavEvent::OpenPetManagement) => (
                state.push(Screen::PetManagement {
                    reached_from_onboarding: false,
                }),
                Vec::new(),
            ),
            (ScreenGraph::Main, Screen::PetsOverview, NavEvent::OpenFamily) => (
                state.push(Screen::FamilyContext {
                    reached_from_onboarding: false,
                }),
                Vec::new(),
            ),
            (ScreenGraph::Main, Screen::Home, NavEvent::OpenCapture) => {
                (state.push(Screen::CaptureSource), Vec::new())
            }
            (ScreenGraph::Main, Screen::CaptureSource, NavEvent::PhotoCaptured { photo }) => {
                (state.replace_top(Screen::PhotoPreview { photo }), Vec::new())
            }
            (ScreenGraph::Main, Screen::PhotoPreview { photo }, NavEvent::RevealThoughts) => (
                state.push(Screen::PhotoResult { photo }),
                vec![NavAction::RevealThought],
            ),
            (ScreenGraph::Main, Screen::PhotoResult { .. }, NavEvent::TakeAnother) => {
                (NavState::mount(ScreenGraph::Main), Vec::new())
            }

            (_, _, _) => (state, Vec::new()),
        }
    }
}
