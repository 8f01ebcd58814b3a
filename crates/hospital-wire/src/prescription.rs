//! Prescription wire model and form payload.
//!
//! Unlike the other entities, prescriptions expose their identifier as a bare
//! `id` on the wire, and each one belongs to exactly one consultation.

use crate::Identified;
use hospital_types::EntityId;
use serde::{Deserialize, Serialize};

/// A prescription record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Backend identifier (wire name is plain `id`).
    pub id: EntityId,

    /// Prescribed medication.
    #[serde(rename = "medicamento")]
    pub medication: String,

    /// Dosage instructions.
    #[serde(rename = "dosis")]
    pub dosage: String,

    /// Owning consultation.
    #[serde(rename = "id_consulta")]
    pub consultation_id: EntityId,
}

impl Identified for Prescription {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Body of a prescription create or update request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionPayload {
    #[serde(rename = "medicamento")]
    pub medication: String,

    #[serde(rename = "dosis")]
    pub dosage: String,

    #[serde(rename = "id_consulta")]
    pub consultation_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prescription_identifier_is_bare_id_on_the_wire() {
        let prescription: Prescription = serde_json::from_value(json!({
            "id": 12,
            "medicamento": "Paracetamol",
            "dosis": "500mg cada 8 horas",
            "id_consulta": 1
        }))
        .expect("valid prescription");
        assert_eq!(prescription.id, EntityId(12));
        assert_eq!(prescription.consultation_id, EntityId(1));
    }

    #[test]
    fn prescription_payload_omits_identifier() {
        let payload = PrescriptionPayload {
            medication: "Ibuprofeno".into(),
            dosage: "400mg".into(),
            consultation_id: EntityId(1),
        };
        let body = serde_json::to_value(&payload).expect("serialisable payload");
        assert_eq!(
            body,
            json!({"medicamento": "Ibuprofeno", "dosis": "400mg", "id_consulta": 1})
        );
    }
}
