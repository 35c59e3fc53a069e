//! Terminal adapter layer for Pet Thoughts.
//!
//! Loads configuration, installs tracing, wires the adapters into an
//! [`pt_app::AppSession`] and drives it from a line-oriented controller.

pub mod adapters;
pub mod bootstrap;
pub mod controller;

pub use controller::{Controller, ShellError};
