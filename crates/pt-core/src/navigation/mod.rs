//! Navigation domain module.
//!
//! Screens, the two graphs they belong to, and a pure transition function
//! for moving between them.

pub mod screen;
pub mod state_machine;

pub use screen::{PetManagementView, PrimaryTarget, Progress, Screen};
pub use state_machine::{NavAction, NavEvent, NavState, NavigationMachine};
