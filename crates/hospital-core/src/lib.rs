//! # Hospital Core
//!
//! Orchestration layer for the hospital administration client.
//!
//! This crate contains the logic every entity page shares:
//! - The generic [`EntityPage`] view model (fetch, list, edit-in-modal,
//!   submit, delete-with-confirmation)
//! - Form schemas with required-field validation
//! - Read-through [`Lookup`] tables for client-side foreign-key joins
//! - The [`Notifier`] and [`Confirmer`] service seams
//!
//! **No transport concerns**: HTTP belongs in `hospital-api`; terminal
//! input/output belongs in `hospital-cli`. Everything here is driven through
//! injected trait objects and is testable without a network or a UI runtime.

pub mod forms;
pub mod lookup;
pub mod notify;
pub mod page;

pub use forms::{
    ConsultationForm, DoctorForm, FieldError, FieldErrors, PatientForm, PrescriptionForm,
};
pub use lookup::{lookup_from_fetch, Lookup, MISSING_LABEL};
pub use notify::{Confirmer, Notifier};
pub use page::{EntityMeta, EntityPage};
