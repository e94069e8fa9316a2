//! Data generators for synthetic run histories.
//!
//! - [`RunGenerator`]: Weekly training blocks sampled from an athlete profile

mod run;

pub use run::{GeneratedRun, RunGenerator};
