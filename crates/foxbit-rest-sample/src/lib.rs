/*
[INPUT]:  Public API exports for foxbit-rest-sample crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod flow;

// Re-export main types for convenience
pub use config::{DemoOrder, SampleConfig};
pub use flow::{DemoOutcome, run_demo};
