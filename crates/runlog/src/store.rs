//! Run record storage boundary.
//!
//! The analytics engine only ever reads a materialised snapshot from
//! [`RunStore::fetch_all`]; mutations go through the other methods and show
//! up on the next fetch.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Run, UpdateRunRequest},
};

pub type SharedStore = Arc<dyn RunStore>;

#[async_trait]
pub trait RunStore: Send + Sync + 'static {
    /// All runs, in insertion order.
    async fn fetch_all(&self) -> Result<Vec<Run>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Run>, AppError>;

    async fn insert(&self, run: Run) -> Result<(), AppError>;

    /// Replaces the stored run with the same id.
    async fn update(&self, run: Run) -> Result<(), AppError>;

    /// Applies a partial edit to the stored run in one step and returns the
    /// edited run. Concurrent edits to different fields are all kept.
    async fn modify(&self, id: Uuid, edit: UpdateRunRequest) -> Result<Run, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Removes every run, returning how many were removed.
    async fn delete_all(&self) -> Result<usize, AppError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    runs: Arc<RwLock<Vec<Run>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self {
            runs: Arc::new(RwLock::new(runs)),
        }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(self)
    }
}

#[async_trait]
impl RunStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Run>, AppError> {
        let runs = self.runs.read().await.clone();
        debug!(count = runs.len(), "Fetched runs");
        Ok(runs)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Run>, AppError> {
        let runs = self.runs.read().await;
        Ok(runs.iter().find(|run| run.id == id).cloned())
    }

    async fn insert(&self, run: Run) -> Result<(), AppError> {
        let mut runs = self.runs.write().await;
        if runs.iter().any(|existing| existing.id == run.id) {
            return Err(AppError::InvalidInput(format!(
                "Run {} already exists",
                run.id
            )));
        }
        info!(id = %run.id, date = %run.date, "Inserted run");
        runs.push(run);
        Ok(())
    }

    async fn update(&self, run: Run) -> Result<(), AppError> {
        let mut runs = self.runs.write().await;
        let slot = runs
            .iter_mut()
            .find(|existing| existing.id == run.id)
            .ok_or(AppError::NotFound)?;
        info!(id = %run.id, "Updated run");
        *slot = run;
        Ok(())
    }

    async fn modify(&self, id: Uuid, edit: UpdateRunRequest) -> Result<Run, AppError> {
        let mut runs = self.runs.write().await;
        let slot = runs
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(AppError::NotFound)?;
        slot.apply(edit);
        info!(%id, "Modified run");
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut runs = self.runs.write().await;
        let index = runs
            .iter()
            .position(|run| run.id == id)
            .ok_or(AppError::NotFound)?;
        runs.remove(index);
        info!(%id, "Deleted run");
        Ok(())
    }

    async fn delete_all(&self) -> Result<usize, AppError> {
        let mut runs = self.runs.write().await;
        let count = runs.len();
        runs.clear();
        info!(count, "Deleted all runs");
        Ok(count)
    }
}
