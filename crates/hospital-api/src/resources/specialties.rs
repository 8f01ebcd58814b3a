//! Specialty resource client (`/especialidades`).
//!
//! The backend exposes specialties as a read-only catalogue, used to populate
//! the doctor form's specialty selector.

use crate::client::HospitalApi;
use crate::contract::{item_path, ReadResource};
use crate::error::ApiResult;
use async_trait::async_trait;
use hospital_types::EntityId;
use hospital_wire::Specialty;

const BASE: &str = "/especialidades";

/// Read-only client for the specialty catalogue.
pub struct SpecialtiesClient {
    api: HospitalApi,
}

impl SpecialtiesClient {
    pub(crate) fn new(api: HospitalApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReadResource for SpecialtiesClient {
    type Entity = Specialty;

    async fn list(&self) -> ApiResult<Vec<Specialty>> {
        self.api.get_json(BASE).await
    }

    async fn get(&self, id: EntityId) -> ApiResult<Specialty> {
        self.api.get_json(&item_path(BASE, id)).await
    }
}
