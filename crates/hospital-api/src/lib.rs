//! # Hospital API
//!
//! HTTP client layer for the hospital administration backend.
//!
//! This crate wraps a single shared [`reqwest::Client`] behind one resource
//! client per entity (doctors, patients, consultations, specialties,
//! histories, prescriptions). Each resource client exposes the uniform
//! list/get/create/update/delete contract through the [`Resource`] trait so
//! the orchestration layer can be driven by trait objects and tested against
//! in-memory fakes.
//!
//! **Single-attempt semantics**: every call hits the network exactly once.
//! There is no retry, no backoff and no client-side caching; errors propagate
//! unchanged to the caller.

pub mod config;
pub mod contract;
pub mod error;
pub mod resources;

mod client;

pub use client::HospitalApi;
pub use config::ApiConfig;
pub use contract::{ReadResource, Resource};
pub use error::{ApiError, ApiResult};
