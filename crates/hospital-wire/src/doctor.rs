//! Doctor wire model and form payload.
//!
//! The backend returns each doctor with its specialty embedded as a nested
//! object. Create and update requests send only the specialty reference
//! (`{"especialidad": {"id_especialidad": N}}`); the backend resolves the rest.

use crate::{Identified, Specialty};
use hospital_types::EntityId;
use serde::{Deserialize, Serialize};

/// A doctor record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Backend identifier.
    #[serde(rename = "id_doctor")]
    pub id: EntityId,

    /// Given name.
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name.
    #[serde(rename = "apellido")]
    pub last_name: String,

    /// Contact phone number, stored as free text by the backend.
    #[serde(rename = "telefono")]
    pub phone: String,

    /// Embedded specialty record.
    #[serde(rename = "especialidad")]
    pub specialty: Specialty,
}

impl Doctor {
    /// The doctor's full display name, with the customary title.
    pub fn display_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}

impl Identified for Doctor {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Reference to an existing specialty, as embedded in doctor payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyRef {
    /// Identifier of the referenced specialty.
    #[serde(rename = "id_especialidad")]
    pub id: EntityId,
}

/// Body of a doctor create or update request. Carries no doctor id; the
/// backend assigns identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "especialidad")]
    pub specialty: SpecialtyRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn doctor_payload_serialises_to_backend_contract() {
        let payload = DoctorPayload {
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            phone: "0999999999".into(),
            specialty: SpecialtyRef { id: EntityId(2) },
        };

        let body = serde_json::to_value(&payload).expect("serialisable payload");
        assert_eq!(
            body,
            json!({
                "nombre": "Juan",
                "apellido": "Pérez",
                "telefono": "0999999999",
                "especialidad": {"id_especialidad": 2}
            })
        );
    }

    #[test]
    fn doctor_decodes_with_embedded_specialty() {
        let doctor: Doctor = serde_json::from_value(json!({
            "id_doctor": 5,
            "nombre": "Ana",
            "apellido": "García",
            "telefono": "0988888888",
            "especialidad": {"id_especialidad": 1, "nombre": "Pediatría"}
        }))
        .expect("valid doctor");

        assert_eq!(doctor.id, EntityId(5));
        assert_eq!(doctor.specialty.name, "Pediatría");
        assert_eq!(doctor.display_name(), "Dr. Ana García");
    }

    #[test]
    fn doctor_tolerates_unknown_fields() {
        let doctor: Doctor = serde_json::from_value(json!({
            "id_doctor": 5,
            "nombre": "Ana",
            "apellido": "García",
            "telefono": "0988888888",
            "especialidad": {"id_especialidad": 1, "nombre": "Pediatría"},
            "created_at": "2024-01-01"
        }))
        .expect("unknown fields are tolerated");
        assert_eq!(doctor.first_name, "Ana");
    }
}
