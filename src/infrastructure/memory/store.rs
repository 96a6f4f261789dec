//! DashMap-backed resource store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::application::dto::Resource;
use crate::application::services::{CrudService, ServiceError};

/// In-memory resource store keyed by id.
///
/// One instance backs one resource slice. Identifiers are generated here
/// on create, so caller-supplied ids never survive a `save`.
pub struct InMemoryStore<D> {
    items: DashMap<Uuid, D>,
}

impl<D> InMemoryStore<D> {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

impl<D> Default for InMemoryStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Resource> CrudService<D> for InMemoryStore<D> {
    async fn get_by_id(&self, id: Uuid) -> Result<D, ServiceError> {
        self.items
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(ServiceError::NotFound)
    }

    async fn save(&self, mut dto: D) -> Result<D, ServiceError> {
        let id = Uuid::new_v4();
        dto.assign_id(id);
        dto.stamp_created();
        self.items.insert(id, dto.clone());
        tracing::debug!(%id, "resource created");
        Ok(dto)
    }

    async fn update(&self, id: Uuid, mut dto: D) -> Result<(), ServiceError> {
        // get_mut keeps the existence check and the write under one lock.
        match self.items.get_mut(&id) {
            Some(mut entry) => {
                dto.assign_id(id);
                dto.stamp_modified(entry.value());
                *entry = dto;
                tracing::debug!(%id, "resource updated");
                Ok(())
            }
            None => Err(ServiceError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        // Idempotent: removing an unknown id is fine.
        self.items.remove(&id);
        tracing::debug!(%id, "resource deleted");
        Ok(())
    }
}
