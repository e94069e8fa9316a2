//! Test data generation for runlog.
//!
//! This crate generates realistic running histories from athlete profiles and
//! uploads them to a running server, for manual verification and demos.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let runs = RunGenerator::new(RunnerProfile::recreational())
//!     .with_runs_per_week(3, 4)
//!     .generate(12, today, &mut rng);
//!
//! let seeder = ApiSeeder::new("http://localhost:3001");
//! seeder.check_health().await?;
//! seeder.seed(&runs).await?;
//! ```

pub mod api;
pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from runlog crate
pub use runlog::models::Run;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::Run;
    pub use crate::api::{ApiError, ApiSeeder};
    pub use crate::config::SeedConfig;
    pub use crate::generators::{GeneratedRun, RunGenerator};
    pub use crate::profiles::{AthleteProfile, RunnerProfile, sample_variance};
    pub use rand::{SeedableRng, rngs::StdRng};
}
