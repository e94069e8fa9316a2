//! HTTP request handlers for the runlog API.
//!
//! This module re-exports handlers from focused submodules organized by domain.

pub mod analytics;
pub mod runs;
pub mod stats;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use analytics::{
    __path_get_analytics, __path_move_window, AnalyticsQuery, MoveWindowRequest, get_analytics,
    move_window,
};
pub use runs::{
    __path_create_run, __path_delete_all_runs, __path_delete_run, __path_get_run,
    __path_list_runs, __path_update_run, DeleteAllResponse, create_run, delete_all_runs,
    delete_run, get_run, list_runs, update_run,
};
pub use stats::{__path_health_check, health_check};
