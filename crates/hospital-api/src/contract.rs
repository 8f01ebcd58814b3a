//! Resource contracts.
//!
//! Every entity exposes the same five asynchronous operations against the
//! backend. The traits here are object safe so the orchestration layer can
//! hold `Box<dyn Resource<...>>` and tests can substitute in-memory fakes
//! without any network runtime.

use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;

/// Read side of a resource: list everything, or fetch one record by id.
#[async_trait]
pub trait ReadResource: Send + Sync {
    /// The entity this resource serves.
    type Entity: Send;

    /// Fetch every record. No paging; the backend returns the full set.
    async fn list(&self) -> ApiResult<Vec<Self::Entity>>;

    /// Fetch one record by id.
    async fn get(&self, id: EntityId) -> ApiResult<Self::Entity>;
}

/// Full CRUD contract for a mutable resource.
///
/// `create` and `update` return the stored record (with its server-assigned
/// identifier); callers that need the fresh list re-fetch it rather than
/// merging the returned record locally.
#[async_trait]
pub trait Resource: ReadResource {
    /// The request body for create and update operations.
    type Payload: Send + Sync;

    /// Create a new record from a payload.
    async fn create(&self, payload: &Self::Payload) -> ApiResult<Self::Entity>;

    /// Replace the record identified by `id` with the payload's field values.
    async fn update(&self, id: EntityId, payload: &Self::Payload) -> ApiResult<Self::Entity>;

    /// Delete the record identified by `id`.
    async fn delete(&self, id: EntityId) -> ApiResult<()>;
}

/// Path of a single record under a collection base path.
pub(crate) fn item_path(base: &str, id: EntityId) -> String {
    format!("{base}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_raw_id() {
        assert_eq!(item_path("/doctores", EntityId(7)), "/doctores/7");
        assert_eq!(item_path("/recetas", EntityId(12)), "/recetas/12");
    }
}
