//! Wire models for the hospital administration backend.
//!
//! This crate pins the JSON contract of the external REST service. The backend
//! speaks Spanish on the wire (`nombre`, `apellido`, `pacienteId`, ...); the Rust
//! structs keep idiomatic English field names and map to the wire via serde
//! renames, so the contract lives in exactly one place.
//!
//! Responsibilities:
//! - Define one entity struct per backend record type
//! - Define form payload structs (no server-assigned identifiers)
//! - Guarantee request bodies and decoded responses match the backend contract
//!
//! Notes:
//! - Unknown fields are tolerated on decode; the backend may grow its schema
//! - All identifiers are plain backend integers wrapped in [`EntityId`]

pub mod consultation;
pub mod doctor;
pub mod history;
pub mod patient;
pub mod prescription;
pub mod specialty;

pub use consultation::{Consultation, ConsultationPayload};
pub use doctor::{Doctor, DoctorPayload, SpecialtyRef};
pub use history::History;
pub use patient::{Patient, PatientPayload};
pub use prescription::{Prescription, PrescriptionPayload};
pub use specialty::Specialty;

use hospital_types::EntityId;

/// A record that carries a backend-assigned identifier.
///
/// Implemented by every entity so generic code (pages, lookups) can read the
/// identifier without knowing the concrete wire name it came from.
pub trait Identified {
    /// Returns the backend identifier of this record.
    fn id(&self) -> EntityId;
}
