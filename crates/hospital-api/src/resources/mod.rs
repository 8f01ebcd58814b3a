//! One resource client per backend collection.
//!
//! Base paths follow the plural convention of the backend
//! (`/doctores`, `/pacientes`, `/consultas`, `/especialidades`,
//! `/historiales`, `/recetas`).

pub mod consultations;
pub mod doctors;
pub mod histories;
pub mod patients;
pub mod prescriptions;
pub mod specialties;

pub use consultations::ConsultationsClient;
pub use doctors::DoctorsClient;
pub use histories::HistoriesClient;
pub use patients::PatientsClient;
pub use prescriptions::PrescriptionsClient;
pub use specialties::SpecialtiesClient;
