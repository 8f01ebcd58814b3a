//! Patient wire model and form payload.

use crate::Identified;
use chrono::NaiveDate;
use hospital_types::EntityId;
use serde::{Deserialize, Serialize};

/// A patient record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Backend identifier.
    #[serde(rename = "id_paciente")]
    pub id: EntityId,

    /// Given name.
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name.
    #[serde(rename = "apellido")]
    pub last_name: String,

    /// National identity number (cédula).
    #[serde(rename = "cedula")]
    pub national_id: String,

    /// Date of birth (ISO 8601 date, `YYYY-MM-DD` on the wire).
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,

    /// Contact phone number.
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl Patient {
    /// The patient's full display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identified for Patient {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Body of a patient create or update request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,

    #[serde(rename = "cedula")]
    pub national_id: String,

    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,

    #[serde(rename = "telefono")]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patient_round_trips_through_wire_names() {
        let wire = json!({
            "id_paciente": 3,
            "nombre": "María",
            "apellido": "López",
            "cedula": "1712345678",
            "fecha_nacimiento": "1990-04-17",
            "telefono": "0981234567"
        });

        let patient: Patient = serde_json::from_value(wire.clone()).expect("valid patient");
        assert_eq!(patient.birth_date, NaiveDate::from_ymd_opt(1990, 4, 17).unwrap());
        assert_eq!(patient.display_name(), "María López");

        let back = serde_json::to_value(&patient).expect("serialisable patient");
        assert_eq!(back, wire);
    }
}
