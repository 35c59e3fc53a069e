//! Persistence side-effects of committed transitions.
//!
//! [`EffectRunner`] observes the store and turns each committing action into
//! one write of the affected durable record. Writes go through a
//! [`WriteQueue`] drained by a single background task, so writes to the same
//! key land in dispatch order.

mod runner;
mod write_queue;

pub use runner::EffectRunner;
pub use write_queue::{WriteFlusher, WriteQueue};
