//! Generic CRUD Service Contract
//!
//! One trait covers every resource slice. Any concrete engine (in-memory
//! store, database repository, remote client) can stand behind a slice as
//! long as it honors these four signatures.

use async_trait::async_trait;
use uuid::Uuid;

/// Service-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Resource not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CRUD operations for one resource type.
///
/// Contract notes:
/// - `save` assigns the identifier; a caller-supplied id is overwritten.
/// - `update` and `delete` complete without a value on success.
/// - `delete` is idempotent: deleting an unknown id is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrudService<D: Send + Sync + 'static>: Send + Sync {
    /// Fetch a resource by id.
    async fn get_by_id(&self, id: Uuid) -> Result<D, ServiceError>;

    /// Create a new resource and return it with its assigned id.
    async fn save(&self, dto: D) -> Result<D, ServiceError>;

    /// Replace the resource stored under `id`.
    async fn update(&self, id: Uuid, dto: D) -> Result<(), ServiceError>;

    /// Remove the resource stored under `id`, if any.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
