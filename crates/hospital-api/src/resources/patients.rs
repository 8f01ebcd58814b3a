//! Patient resource client (`/pacientes`).

use crate::client::HospitalApi;
use crate::contract::{item_path, ReadResource, Resource};
use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;
use hospital_wire::{Patient, PatientPayload};

const BASE: &str = "/pacientes";

/// CRUD client for patient records.
pub struct PatientsClient {
    api: HospitalApi,
}

impl PatientsClient {
    pub(crate) fn new(api: HospitalApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReadResource for PatientsClient {
    type Entity = Patient;

    async fn list(&self) -> ApiResult<Vec<Patient>> {
        self.api.get_json(BASE).await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Patient> {
        self.api.get_json(&item_path(BASE, id)).await
    }
}

#[async_trait]
impl Resource for PatientsClient {
    type Payload = PatientPayload;

    async fn create(&self, payload: &PatientPayload) -> ApiResult<Patient> {
        tracing::info!("creating patient record");
        self.api.post_json(BASE, payload).await
    }

    async fn update(&self, id: EntityId, payload: &PatientPayload) -> ApiResult<Patient> {
        tracing::info!(%id, "updating patient record");
        self.api.put_json(&item_path(BASE, id), payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        tracing::info!(%id, "deleting patient record");
        self.api.delete(&item_path(BASE, id)).await
    }
}
