//! Clinical history wire model.
//!
//! Histories have no form payload; the backend exposes list, by-patient and
//! by-id lookups only. Note the mixed naming convention on the
//! wire: `id_historial`/`descripcion` are snake_case but the foreign key is
//! `pacienteId`. That is the backend's contract, faithfully reproduced.

use crate::Identified;
use hospital_types::EntityId;
use serde::{Deserialize, Serialize};

/// A clinical history entry belonging to a patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(rename = "id_historial")]
    pub id: EntityId,

    #[serde(rename = "descripcion")]
    pub description: String,

    /// Owning patient.
    #[serde(rename = "pacienteId")]
    pub patient_id: EntityId,
}

impl Identified for History {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn history_uses_camel_case_foreign_key() {
        let history: History = serde_json::from_value(json!({
            "id_historial": 9,
            "descripcion": "Alergia a la penicilina",
            "pacienteId": 3
        }))
        .expect("valid history");
        assert_eq!(history.patient_id, EntityId(3));
    }
}
