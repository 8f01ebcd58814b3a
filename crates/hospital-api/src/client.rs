//! Shared HTTP client for the backend.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::resources::{
    ConsultationsClient, DoctorsClient, HistoriesClient, PatientsClient, PrescriptionsClient,
    SpecialtiesClient,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Entry point for all backend calls.
///
/// Owns one [`reqwest::Client`] (connection pool included) and the resolved
/// [`ApiConfig`]. Cloning is cheap; resource clients each hold a clone.
#[derive(Clone)]
pub struct HospitalApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HospitalApi {
    /// Create a new API entry point from resolved configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Resource client for `/doctores`.
    pub fn doctors(&self) -> DoctorsClient {
        DoctorsClient::new(self.clone())
    }

    /// Resource client for `/pacientes`.
    pub fn patients(&self) -> PatientsClient {
        PatientsClient::new(self.clone())
    }

    /// Resource client for `/consultas`.
    pub fn consultations(&self) -> ConsultationsClient {
        ConsultationsClient::new(self.clone())
    }

    /// Read-only resource client for `/especialidades`.
    pub fn specialties(&self) -> SpecialtiesClient {
        SpecialtiesClient::new(self.clone())
    }

    /// Read-only resource client for `/historiales`.
    pub fn histories(&self) -> HistoriesClient {
        HistoriesClient::new(self.clone())
    }

    /// Resource client for `/recetas`.
    pub fn prescriptions(&self) -> PrescriptionsClient {
        PrescriptionsClient::new(self.clone())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .http
            .get(self.config.endpoint(path))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_owned(),
                source,
            })?;

        Self::decode_json(path, response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_owned(),
                source,
            })?;

        Self::decode_json(path, response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .http
            .put(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_owned(),
                source,
            })?;

        Self::decode_json(path, response).await
    }

    /// Issue a DELETE and discard the (empty) response body.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.config.endpoint(path))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_owned(),
                source,
            })?;

        Self::check_status(path, response).map(|_| ())
    }

    async fn decode_json<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let response = Self::check_status(path, response)?;
        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_owned(),
            source,
        })
    }

    fn check_status(path: &str, response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                path: path.to_owned(),
            });
        }
        if !status.is_success() {
            tracing::warn!(%status, path, "backend rejected request");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                path: path.to_owned(),
            });
        }
        Ok(response)
    }
}
