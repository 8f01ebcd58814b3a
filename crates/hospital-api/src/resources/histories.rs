//! Clinical history resource client (`/historiales`).
//!
//! Histories are read-only through this client. Besides the uniform read
//! contract, the backend offers a by-patient lookup at
//! `/historiales/paciente/{patientId}`.

use crate::client::HospitalApi;
use crate::contract::{item_path, ReadResource};
use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;
use hospital_wire::History;

const BASE: &str = "/historiales";

/// Read-only client for clinical histories.
pub struct HistoriesClient {
    api: HospitalApi,
}

impl HistoriesClient {
    pub(crate) fn new(api: HospitalApi) -> Self {
        Self { api }
    }

    /// Fetch every history entry belonging to one patient.
    pub async fn by_patient(&self, patient_id: EntityId) -> ApiResult<Vec<History>> {
        self.api
            .get_json(&format!("{BASE}/paciente/{patient_id}"))
            .await
    }
}

#[async_trait]
impl ReadResource for HistoriesClient {
    type Entity = History;

    async fn list(&self) -> ApiResult<Vec<History>> {
        self.api.get_json(BASE).await
    }

    async fn get(&self, id: EntityId) -> ApiResult<History> {
        self.api.get_json(&item_path(BASE, id)).await
    }
}
