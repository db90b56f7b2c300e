// Persistence abstraction over engineer profiles, keyed by integer id.
// Engines: PgEngineerStore (production) and InMemoryEngineerStore (test double).

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEngineerStore;
pub use postgres::PgEngineerStore;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::engineer::{EngineerRecord, EngineerRow};

/// The store trait. Implement this to swap persistence engines without
/// touching the workflow, handlers, or caller code.
///
/// Carried in `EngineerService` as `Arc<dyn EngineerStore>`.
#[async_trait]
pub trait EngineerStore: Send + Sync {
    /// Create-or-update by key: `id: None` assigns a fresh id, `id: Some`
    /// overwrites whatever is at that key. Returns the persisted row.
    async fn upsert(&self, record: EngineerRecord) -> Result<EngineerRow, AppError>;

    /// Fetches one record, `None` if the id is unknown.
    async fn find_by_id(&self, id: i32) -> Result<Option<EngineerRow>, AppError>;

    /// Every record in the store; order is engine-defined.
    async fn find_all(&self) -> Result<Vec<EngineerRow>, AppError>;

    /// Deletes by key. Deleting an unknown id is a no-op, not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;
}
