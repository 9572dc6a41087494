//! Storage collaborators of the rating engine
//!
//! The engine itself is pure; everything durable lives behind these
//! interfaces. In-memory reference implementations are provided for tests
//! and single-process deployments.

pub mod matches;
pub mod players;

// Re-export commonly used types
pub use matches::{InMemoryMatchStore, MatchStore};
pub use players::{InMemoryPlayerRegistry, PlayerEntry, PlayerRegistry};
