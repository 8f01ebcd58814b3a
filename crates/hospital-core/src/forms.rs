//! Form schemas with required-field validation.
//!
//! A form holds raw user input (strings and optional selections) and produces
//! a typed wire payload only when every required field passes validation.
//! Failures are reported per field so callers can render them inline; a form
//! that fails validation must cause zero network calls.

use chrono::{NaiveDate, NaiveDateTime};
use hospital_types::{EntityId, NonEmptyText};
use hospital_wire::{
    Consultation, ConsultationPayload, Doctor, DoctorPayload, Patient, PatientPayload,
    Prescription, PrescriptionPayload, SpecialtyRef,
};

/// Datetime format produced by the consultation form's date input.
const FORM_DATETIME: &str = "%Y-%m-%dT%H:%M";
/// Datetime format the backend emits (seconds included).
const WIRE_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";
const FORM_DATE: &str = "%Y-%m-%d";

/// A single failed field with its inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to.
    pub field: &'static str,
    /// Inline message for display next to the field.
    pub message: String,
}

/// All validation failures of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_fields(.0))]
pub struct FieldErrors(Vec<FieldError>);

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    /// The individual field failures, in form field order.
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether `field` failed validation.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// Require a non-empty text field, trimming whitespace.
fn required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> Option<String> {
    match NonEmptyText::new(value) {
        Ok(text) => Some(text.as_str().to_owned()),
        Err(_) => {
            errors.push(FieldError {
                field,
                message: "required".into(),
            });
            None
        }
    }
}

/// Require a selected reference id.
fn required_id(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<EntityId>,
) -> Option<EntityId> {
    if value.is_none() {
        errors.push(FieldError {
            field,
            message: "a selection is required".into(),
        });
    }
    value
}

fn finish<T>(payload: Option<T>, errors: Vec<FieldError>) -> Result<T, FieldErrors> {
    match payload {
        Some(payload) if errors.is_empty() => Ok(payload),
        _ => Err(FieldErrors(errors)),
    }
}

// ============================================================================
// Doctor
// ============================================================================

/// Input state of the doctor create/edit form.
#[derive(Debug, Clone, Default)]
pub struct DoctorForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Selected specialty from the catalogue, if any.
    pub specialty_id: Option<EntityId>,
}

impl DoctorForm {
    /// Pre-fill the form from an existing record (edit flow).
    pub fn from_entity(doctor: &Doctor) -> Self {
        Self {
            first_name: doctor.first_name.clone(),
            last_name: doctor.last_name.clone(),
            phone: doctor.phone.clone(),
            specialty_id: Some(doctor.specialty.id),
        }
    }

    /// Validate required fields and build the wire payload.
    pub fn validate(&self) -> Result<DoctorPayload, FieldErrors> {
        let mut errors = Vec::new();
        let first_name = required(&mut errors, "first_name", &self.first_name);
        let last_name = required(&mut errors, "last_name", &self.last_name);
        let phone = required(&mut errors, "phone", &self.phone);
        let specialty_id = required_id(&mut errors, "specialty", self.specialty_id);

        let payload = match (first_name, last_name, phone, specialty_id) {
            (Some(first_name), Some(last_name), Some(phone), Some(specialty_id)) => {
                Some(DoctorPayload {
                    first_name,
                    last_name,
                    phone,
                    specialty: SpecialtyRef { id: specialty_id },
                })
            }
            _ => None,
        };
        finish(payload, errors)
    }
}

// ============================================================================
// Patient
// ============================================================================

/// Input state of the patient create/edit form.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    /// Raw date input (`YYYY-MM-DD`).
    pub birth_date: String,
    pub phone: String,
}

impl PatientForm {
    /// Pre-fill the form from an existing record (edit flow).
    pub fn from_entity(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            national_id: patient.national_id.clone(),
            birth_date: patient.birth_date.format(FORM_DATE).to_string(),
            phone: patient.phone.clone(),
        }
    }

    /// Validate required fields, parse the birth date and build the payload.
    pub fn validate(&self) -> Result<PatientPayload, FieldErrors> {
        let mut errors = Vec::new();
        let first_name = required(&mut errors, "first_name", &self.first_name);
        let last_name = required(&mut errors, "last_name", &self.last_name);
        let national_id = required(&mut errors, "national_id", &self.national_id);
        let phone = required(&mut errors, "phone", &self.phone);

        let birth_date = match required(&mut errors, "birth_date", &self.birth_date) {
            Some(raw) => match NaiveDate::parse_from_str(&raw, FORM_DATE) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError {
                        field: "birth_date",
                        message: "must be a date in YYYY-MM-DD format".into(),
                    });
                    None
                }
            },
            None => None,
        };

        let payload = match (first_name, last_name, national_id, birth_date, phone) {
            (Some(first_name), Some(last_name), Some(national_id), Some(birth_date), Some(phone)) => {
                Some(PatientPayload {
                    first_name,
                    last_name,
                    national_id,
                    birth_date,
                    phone,
                })
            }
            _ => None,
        };
        finish(payload, errors)
    }
}

// ============================================================================
// Consultation
// ============================================================================

/// Input state of the consultation create/edit form.
#[derive(Debug, Clone, Default)]
pub struct ConsultationForm {
    /// Raw datetime input (`YYYY-MM-DDTHH:MM`, seconds optional).
    pub date: String,
    pub reason: String,
    pub patient_id: Option<EntityId>,
    pub doctor_id: Option<EntityId>,
}

impl ConsultationForm {
    /// Pre-fill the form from an existing record (edit flow).
    pub fn from_entity(consultation: &Consultation) -> Self {
        Self {
            date: consultation.date.format(FORM_DATETIME).to_string(),
            reason: consultation.reason.clone(),
            patient_id: Some(consultation.patient_id),
            doctor_id: Some(consultation.doctor_id),
        }
    }

    /// Validate required fields, parse the timestamp and build the payload.
    pub fn validate(&self) -> Result<ConsultationPayload, FieldErrors> {
        let mut errors = Vec::new();

        let date = match required(&mut errors, "date", &self.date) {
            Some(raw) => match parse_form_datetime(&raw) {
                Some(date) => Some(date),
                None => {
                    errors.push(FieldError {
                        field: "date",
                        message: "must be a timestamp in YYYY-MM-DDTHH:MM format".into(),
                    });
                    None
                }
            },
            None => None,
        };
        let reason = required(&mut errors, "reason", &self.reason);
        let patient_id = required_id(&mut errors, "patient", self.patient_id);
        let doctor_id = required_id(&mut errors, "doctor", self.doctor_id);

        let payload = match (date, reason, patient_id, doctor_id) {
            (Some(date), Some(reason), Some(patient_id), Some(doctor_id)) => {
                Some(ConsultationPayload {
                    date,
                    reason,
                    patient_id,
                    doctor_id,
                })
            }
            _ => None,
        };
        finish(payload, errors)
    }
}

/// Accept the form's minute-precision input as well as the backend's
/// second-precision rendering (edit flows can carry either).
fn parse_form_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, WIRE_DATETIME)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, FORM_DATETIME))
        .ok()
}

// ============================================================================
// Prescription
// ============================================================================

/// Input state of the prescription create/edit form.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionForm {
    pub medication: String,
    pub dosage: String,
    pub consultation_id: Option<EntityId>,
}

impl PrescriptionForm {
    /// Pre-fill the form from an existing record (edit flow).
    pub fn from_entity(prescription: &Prescription) -> Self {
        Self {
            medication: prescription.medication.clone(),
            dosage: prescription.dosage.clone(),
            consultation_id: Some(prescription.consultation_id),
        }
    }

    /// Validate required fields and build the wire payload.
    pub fn validate(&self) -> Result<PrescriptionPayload, FieldErrors> {
        let mut errors = Vec::new();
        let medication = required(&mut errors, "medication", &self.medication);
        let dosage = required(&mut errors, "dosage", &self.dosage);
        let consultation_id = required_id(&mut errors, "consultation", self.consultation_id);

        let payload = match (medication, dosage, consultation_id) {
            (Some(medication), Some(dosage), Some(consultation_id)) => Some(PrescriptionPayload {
                medication,
                dosage,
                consultation_id,
            }),
            _ => None,
        };
        finish(payload, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_wire::Specialty;

    #[test]
    fn consultation_form_rejects_empty_reason_with_field_error() {
        let form = ConsultationForm {
            date: "2024-05-01T10:30".into(),
            reason: "".into(),
            patient_id: Some(EntityId(3)),
            doctor_id: Some(EntityId(5)),
        };

        let errors = form.validate().expect_err("empty reason must fail");
        assert!(errors.has("reason"));
        assert!(!errors.has("date"));
    }

    #[test]
    fn consultation_form_parses_minute_precision_input() {
        let form = ConsultationForm {
            date: "2024-05-01T10:30".into(),
            reason: "Control".into(),
            patient_id: Some(EntityId(3)),
            doctor_id: Some(EntityId(5)),
        };

        let payload = form.validate().expect("valid form");
        assert_eq!(payload.date.format(WIRE_DATETIME).to_string(), "2024-05-01T10:30:00");
    }

    #[test]
    fn consultation_form_requires_both_selections() {
        let form = ConsultationForm {
            date: "2024-05-01T10:30".into(),
            reason: "Control".into(),
            patient_id: None,
            doctor_id: None,
        };

        let errors = form.validate().expect_err("missing selections must fail");
        assert!(errors.has("patient"));
        assert!(errors.has("doctor"));
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn doctor_form_round_trips_from_entity() {
        let doctor = Doctor {
            id: EntityId(5),
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            phone: "0999999999".into(),
            specialty: Specialty {
                id: EntityId(2),
                name: "Cardiología".into(),
            },
        };

        let payload = DoctorForm::from_entity(&doctor).validate().expect("valid form");
        assert_eq!(payload.first_name, "Juan");
        assert_eq!(payload.specialty.id, EntityId(2));
    }

    #[test]
    fn doctor_form_collects_every_missing_field() {
        let errors = DoctorForm::default()
            .validate()
            .expect_err("empty form must fail");
        assert_eq!(errors.fields().len(), 4);
        assert!(errors.has("first_name"));
        assert!(errors.has("specialty"));
    }

    #[test]
    fn patient_form_rejects_malformed_birth_date() {
        let form = PatientForm {
            first_name: "María".into(),
            last_name: "López".into(),
            national_id: "1712345678".into(),
            birth_date: "17/04/1990".into(),
            phone: "0981234567".into(),
        };

        let errors = form.validate().expect_err("bad date must fail");
        assert!(errors.has("birth_date"));
        assert_eq!(errors.fields().len(), 1);
    }

    #[test]
    fn prescription_form_validates_and_builds_payload() {
        let form = PrescriptionForm {
            medication: " Paracetamol ".into(),
            dosage: "500mg cada 8 horas".into(),
            consultation_id: Some(EntityId(1)),
        };

        let payload = form.validate().expect("valid form");
        // Inputs are trimmed on the way into the payload.
        assert_eq!(payload.medication, "Paracetamol");
    }

    #[test]
    fn field_errors_render_inline_summaries() {
        let errors = PrescriptionForm::default()
            .validate()
            .expect_err("empty form must fail");
        let rendered = errors.to_string();
        assert!(rendered.contains("medication: required"));
        assert!(rendered.contains("consultation: a selection is required"));
    }
}
