//! Prescription resource client (`/recetas`).

use crate::client::HospitalApi;
use crate::contract::{item_path, ReadResource, Resource};
use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;
use hospital_wire::{Prescription, PrescriptionPayload};

const BASE: &str = "/recetas";

/// CRUD client for prescription records.
pub struct PrescriptionsClient {
    api: HospitalApi,
}

impl PrescriptionsClient {
    pub(crate) fn new(api: HospitalApi) -> Self {
        Self { api }
    }

    /// Fetch every prescription issued under one consultation.
    pub async fn by_consultation(&self, consultation_id: EntityId) -> ApiResult<Vec<Prescription>> {
        self.api
            .get_json(&format!("{BASE}/consulta/{consultation_id}"))
            .await
    }
}

#[async_trait]
impl ReadResource for PrescriptionsClient {
    type Entity = Prescription;

    async fn list(&self) -> ApiResult<Vec<Prescription>> {
        self.api.get_json(BASE).await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Prescription> {
        self.api.get_json(&item_path(BASE, id)).await
    }
}

#[async_trait]
impl Resource for PrescriptionsClient {
    type Payload = PrescriptionPayload;

    async fn create(&self, payload: &PrescriptionPayload) -> ApiResult<Prescription> {
        tracing::info!("creating prescription record");
        self.api.post_json(BASE, payload).await
    }

    async fn update(
        &self,
        id: EntityId,
        payload: &PrescriptionPayload,
    ) -> ApiResult<Prescription> {
        tracing::info!(%id, "updating prescription record");
        self.api.put_json(&item_path(BASE, id), payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        tracing::info!(%id, "deleting prescription record");
        self.api.delete(&item_path(BASE, id)).await
    }
}
