pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{ManifestFixture, run_command};
