//! Doctor resource client (`/doctores`).

use crate::client::HospitalApi;
use crate::contract::{item_path, ReadResource, Resource};
use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;
use hospital_wire::{Doctor, DoctorPayload};

const BASE: &str = "/doctores";

/// CRUD client for doctor records.
pub struct DoctorsClient {
    api: HospitalApi,
}

impl DoctorsClient {
    pub(crate) fn new(api: HospitalApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReadResource for DoctorsClient {
    type Entity = Doctor;

    async fn list(&self) -> ApiResult<Vec<Doctor>> {
        self.api.get_json(BASE).await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Doctor> {
        self.api.get_json(&item_path(BASE, id)).await
    }
}

#[async_trait]
impl Resource for DoctorsClient {
    type Payload = DoctorPayload;

    async fn create(&self, payload: &DoctorPayload) -> ApiResult<Doctor> {
        tracing::info!("creating doctor record");
        self.api.post_json(BASE, payload).await
    }

    async fn update(&self, id: EntityId, payload: &DoctorPayload) -> ApiResult<Doctor> {
        tracing::info!(%id, "updating doctor record");
        self.api.put_json(&item_path(BASE, id), payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        tracing::info!(%id, "deleting doctor record");
        self.api.delete(&item_path(BASE, id)).await
    }
}
