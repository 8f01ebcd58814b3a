//! Consultation resource client (`/consultas`).

use crate::client::HospitalApi;
use crate::contract::{item_path, ReadResource, Resource};
use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;
use hospital_wire::{Consultation, ConsultationPayload};

const BASE: &str = "/consultas";

/// CRUD client for consultation records.
pub struct ConsultationsClient {
    api: HospitalApi,
}

impl ConsultationsClient {
    pub(crate) fn new(api: HospitalApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReadResource for ConsultationsClient {
    type Entity = Consultation;

    async fn list(&self) -> ApiResult<Vec<Consultation>> {
        self.api.get_json(BASE).await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Consultation> {
        self.api.get_json(&item_path(BASE, id)).await
    }
}

#[async_trait]
impl Resource for ConsultationsClient {
    type Payload = ConsultationPayload;

    async fn create(&self, payload: &ConsultationPayload) -> ApiResult<Consultation> {
        tracing::info!("creating consultation record");
        self.api.post_json(BASE, payload).await
    }

    async fn update(
        &self,
        id: EntityId,
        payload: &ConsultationPayload,
    ) -> ApiResult<Consultation> {
        tracing::info!(%id, "updating consultation record");
        self.api.put_json(&item_path(BASE, id), payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        tracing::info!(%id, "deleting consultation record");
        self.api.delete(&item_path(BASE, id)).await
    }
}
