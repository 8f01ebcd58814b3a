//! Consultation wire model and form payload.
//!
//! Consultations reference a patient and a doctor by id; the list page joins
//! those references against locally fetched lookups for display.

use crate::Identified;
use chrono::NaiveDateTime;
use hospital_types::EntityId;
use serde::{Deserialize, Serialize};

/// A consultation record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    /// Backend identifier.
    #[serde(rename = "id_consulta")]
    pub id: EntityId,

    /// Scheduled date and time (backend local time, no offset).
    #[serde(rename = "fecha")]
    pub date: NaiveDateTime,

    /// Reason for the visit.
    #[serde(rename = "motivo")]
    pub reason: String,

    /// Referenced patient.
    #[serde(rename = "pacienteId")]
    pub patient_id: EntityId,

    /// Referenced doctor.
    #[serde(rename = "doctorId")]
    pub doctor_id: EntityId,
}

impl Identified for Consultation {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Body of a consultation create or update request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationPayload {
    #[serde(rename = "fecha")]
    pub date: NaiveDateTime,

    #[serde(rename = "motivo")]
    pub reason: String,

    #[serde(rename = "pacienteId")]
    pub patient_id: EntityId,

    #[serde(rename = "doctorId")]
    pub doctor_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn consultation_decodes_backend_timestamp() {
        let consultation: Consultation = serde_json::from_value(json!({
            "id_consulta": 1,
            "fecha": "2024-05-01T10:30:00",
            "motivo": "Dolor de cabeza",
            "pacienteId": 3,
            "doctorId": 5
        }))
        .expect("valid consultation");

        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(consultation.date, expected);
        assert_eq!(consultation.patient_id, EntityId(3));
        assert_eq!(consultation.doctor_id, EntityId(5));
    }

    #[test]
    fn consultation_payload_uses_camel_case_foreign_keys() {
        let payload = ConsultationPayload {
            date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            reason: "Control".into(),
            patient_id: EntityId(3),
            doctor_id: EntityId(5),
        };

        let body = serde_json::to_value(&payload).expect("serialisable payload");
        assert_eq!(
            body,
            json!({
                "fecha": "2024-05-01T10:30:00",
                "motivo": "Control",
                "pacienteId": 3,
                "doctorId": 5
            })
        );
    }
}
