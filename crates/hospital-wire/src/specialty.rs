//! Medical specialty wire model.
//!
//! Specialties are a read-only catalogue on the backend; doctors embed one.

use crate::Identified;
use hospital_types::EntityId;
use serde::{Deserialize, Serialize};

/// A medical specialty (e.g. cardiology).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    /// Backend identifier.
    #[serde(rename = "id_especialidad")]
    pub id: EntityId,

    /// Display name of the specialty.
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Identified for Specialty {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn specialty_decodes_from_wire_names() {
        let specialty: Specialty =
            serde_json::from_value(json!({"id_especialidad": 2, "nombre": "Cardiología"}))
                .expect("valid specialty");
        assert_eq!(specialty.id, EntityId(2));
        assert_eq!(specialty.name, "Cardiología");
    }
}
