//! Per-entity command runners.
//!
//! Mutating commands go through the shared [`EntityPage`] view model so the
//! console gets the same orchestration as any other front end: validation
//! before any network call, notifications on outcome, one re-fetch after a
//! successful mutation. Read-only commands call the resource clients
//! directly.

use crate::console::{confirmer, ConsoleNotifier, StdinConfirmer};
use crate::{
    ConsultationCommand, DoctorCommand, HistoryCommand, PatientCommand, PrescriptionCommand,
    SpecialtyCommand,
};
use hospital_api::{HospitalApi, ReadResource, Resource};
use hospital_core::{
    lookup_from_fetch, Confirmer, ConsultationForm, DoctorForm, EntityMeta, EntityPage, Lookup,
    PatientForm, PrescriptionForm,
};
use hospital_wire::{Consultation, Doctor, History, Patient, Prescription, Specialty};

const DOCTOR_META: EntityMeta = EntityMeta {
    singular: "doctor",
    plural: "doctors",
};
const PATIENT_META: EntityMeta = EntityMeta {
    singular: "patient",
    plural: "patients",
};
const CONSULTATION_META: EntityMeta = EntityMeta {
    singular: "consultation",
    plural: "consultations",
};
const PRESCRIPTION_META: EntityMeta = EntityMeta {
    singular: "prescription",
    plural: "prescriptions",
};

fn build_page<R, E, P>(
    meta: EntityMeta,
    resource: R,
    confirm: Box<dyn Confirmer>,
) -> EntityPage<E, P>
where
    R: Resource<Entity = E, Payload = P> + 'static,
    E: hospital_wire::Identified + Clone + Send,
    P: Send + Sync,
{
    EntityPage::new(meta, Box::new(resource), Box::new(ConsoleNotifier), confirm)
}

// ============================================================================
// Doctors
// ============================================================================

pub async fn run_doctors(api: &HospitalApi, command: DoctorCommand) -> anyhow::Result<()> {
    match command {
        DoctorCommand::List => {
            let mut page = build_page(DOCTOR_META, api.doctors(), Box::new(StdinConfirmer));
            page.refresh().await;
            render_doctors(page.items());
        }
        DoctorCommand::Show { id } => {
            let doctor = api.doctors().get(id).await?;
            println!("ID:        {}", doctor.id);
            println!("Name:      {}", doctor.display_name());
            println!("Phone:     {}", doctor.phone);
            println!("Specialty: {}", doctor.specialty.name);
        }
        DoctorCommand::Create {
            first_name,
            last_name,
            phone,
            specialty,
        } => {
            let form = DoctorForm {
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
                specialty_id: specialty,
            };
            let payload = form.validate()?;

            let mut page = build_page(DOCTOR_META, api.doctors(), Box::new(StdinConfirmer));
            page.open_create();
            page.submit(payload).await;
        }
        DoctorCommand::Update {
            id,
            first_name,
            last_name,
            phone,
            specialty,
        } => {
            let current = api.doctors().get(id).await?;
            let mut form = DoctorForm::from_entity(&current);
            if let Some(value) = first_name {
                form.first_name = value;
            }
            if let Some(value) = last_name {
                form.last_name = value;
            }
            if let Some(value) = phone {
                form.phone = value;
            }
            if let Some(value) = specialty {
                form.specialty_id = Some(value);
            }
            let payload = form.validate()?;

            let mut page = build_page(DOCTOR_META, api.doctors(), Box::new(StdinConfirmer));
            page.open_edit(current);
            page.submit(payload).await;
        }
        DoctorCommand::Delete { id, yes } => {
            let mut page = build_page(DOCTOR_META, api.doctors(), confirmer(yes));
            page.remove(id).await;
        }
    }

    Ok(())
}

fn render_doctors(doctors: &[Doctor]) {
    if doctors.is_empty() {
        println!("No doctors found.");
        return;
    }
    for doctor in doctors {
        println!(
            "ID: {}, Name: {}, Phone: {}, Specialty: {}",
            doctor.id,
            doctor.display_name(),
            doctor.phone,
            doctor.specialty.name
        );
    }
}

// ============================================================================
// Patients
// ============================================================================

pub async fn run_patients(api: &HospitalApi, command: PatientCommand) -> anyhow::Result<()> {
    match command {
        PatientCommand::List => {
            let mut page = build_page(PATIENT_META, api.patients(), Box::new(StdinConfirmer));
            page.refresh().await;
            render_patients(page.items());
        }
        PatientCommand::Show { id } => {
            let patient = api.patients().get(id).await?;
            println!("ID:          {}", patient.id);
            println!("Name:        {}", patient.display_name());
            println!("National id: {}", patient.national_id);
            println!("Born:        {}", patient.birth_date.format("%Y-%m-%d"));
            println!("Phone:       {}", patient.phone);
        }
        PatientCommand::Create {
            first_name,
            last_name,
            national_id,
            birth_date,
            phone,
        } => {
            let form = PatientForm {
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
                national_id: national_id.unwrap_or_default(),
                birth_date: birth_date.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
            };
            let payload = form.validate()?;

            let mut page = build_page(PATIENT_META, api.patients(), Box::new(StdinConfirmer));
            page.open_create();
            page.submit(payload).await;
        }
        PatientCommand::Update {
            id,
            first_name,
            last_name,
            national_id,
            birth_date,
            phone,
        } => {
            let current = api.patients().get(id).await?;
            let mut form = PatientForm::from_entity(&current);
            if let Some(value) = first_name {
                form.first_name = value;
            }
            if let Some(value) = last_name {
                form.last_name = value;
            }
            if let Some(value) = national_id {
                form.national_id = value;
            }
            if let Some(value) = birth_date {
                form.birth_date = value;
            }
            if let Some(value) = phone {
                form.phone = value;
            }
            let payload = form.validate()?;

            let mut page = build_page(PATIENT_META, api.patients(), Box::new(StdinConfirmer));
            page.open_edit(current);
            page.submit(payload).await;
        }
        PatientCommand::Delete { id, yes } => {
            let mut page = build_page(PATIENT_META, api.patients(), confirmer(yes));
            page.remove(id).await;
        }
    }

    Ok(())
}

fn render_patients(patients: &[Patient]) {
    if patients.is_empty() {
        println!("No patients found.");
        return;
    }
    for patient in patients {
        println!(
            "ID: {}, Name: {}, National id: {}, Born: {}, Phone: {}",
            patient.id,
            patient.display_name(),
            patient.national_id,
            patient.birth_date.format("%Y-%m-%d"),
            patient.phone
        );
    }
}

// ============================================================================
// Consultations
// ============================================================================

pub async fn run_consultations(
    api: &HospitalApi,
    command: ConsultationCommand,
) -> anyhow::Result<()> {
    match command {
        ConsultationCommand::List => {
            // The primary list and both lookups load concurrently; rendering
            // tolerates lookup failures (rows fall back to N/A).
            let mut page = build_page(
                CONSULTATION_META,
                api.consultations(),
                Box::new(StdinConfirmer),
            );
            let patients_client = api.patients();
            let doctors_client = api.doctors();
            let (patients, doctors, ()) = tokio::join!(
                patients_client.list(),
                doctors_client.list(),
                page.refresh()
            );
            let patients = lookup_from_fetch(patients, "patients");
            let doctors = lookup_from_fetch(doctors, "doctors");
            render_consultations(page.items(), &patients, &doctors);
        }
        ConsultationCommand::Show { id } => {
            let consultation = api.consultations().get(id).await?;
            println!("ID:      {}", consultation.id);
            println!("Date:    {}", consultation.date.format("%Y-%m-%d %H:%M"));
            println!("Patient: {}", consultation.patient_id);
            println!("Doctor:  {}", consultation.doctor_id);
            println!("Reason:  {}", consultation.reason);
        }
        ConsultationCommand::Create {
            date,
            reason,
            patient,
            doctor,
        } => {
            let form = ConsultationForm {
                date: date.unwrap_or_default(),
                reason: reason.unwrap_or_default(),
                patient_id: patient,
                doctor_id: doctor,
            };
            let payload = form.validate()?;

            let mut page = build_page(
                CONSULTATION_META,
                api.consultations(),
                Box::new(StdinConfirmer),
            );
            page.open_create();
            page.submit(payload).await;
        }
        ConsultationCommand::Update {
            id,
            date,
            reason,
            patient,
            doctor,
        } => {
            let current = api.consultations().get(id).await?;
            let mut form = ConsultationForm::from_entity(&current);
            if let Some(value) = date {
                form.date = value;
            }
            if let Some(value) = reason {
                form.reason = value;
            }
            if let Some(value) = patient {
                form.patient_id = Some(value);
            }
            if let Some(value) = doctor {
                form.doctor_id = Some(value);
            }
            let payload = form.validate()?;

            let mut page = build_page(
                CONSULTATION_META,
                api.consultations(),
                Box::new(StdinConfirmer),
            );
            page.open_edit(current);
            page.submit(payload).await;
        }
        ConsultationCommand::Delete { id, yes } => {
            let mut page = build_page(CONSULTATION_META, api.consultations(), confirmer(yes));
            page.remove(id).await;
        }
    }

    Ok(())
}

fn render_consultations(
    consultations: &[Consultation],
    patients: &Lookup<Patient>,
    doctors: &Lookup<Doctor>,
) {
    if consultations.is_empty() {
        println!("No consultations found.");
        return;
    }
    for consultation in consultations {
        println!(
            "ID: {}, Date: {}, Patient: {}, Doctor: {}, Reason: {}",
            consultation.id,
            consultation.date.format("%Y-%m-%d %H:%M"),
            patients.display(consultation.patient_id, |p| p.display_name()),
            doctors.display(consultation.doctor_id, |d| d.display_name()),
            consultation.reason
        );
    }
}

// ============================================================================
// Prescriptions
// ============================================================================

pub async fn run_prescriptions(
    api: &HospitalApi,
    command: PrescriptionCommand,
) -> anyhow::Result<()> {
    match command {
        PrescriptionCommand::List => {
            let mut page = build_page(
                PRESCRIPTION_META,
                api.prescriptions(),
                Box::new(StdinConfirmer),
            );
            let consultations_client = api.consultations();
            let (consultations, ()) =
                tokio::join!(consultations_client.list(), page.refresh());
            let consultations = lookup_from_fetch(consultations, "consultations");
            render_prescriptions(page.items(), &consultations);
        }
        PrescriptionCommand::Show { id } => {
            let prescription = api.prescriptions().get(id).await?;
            println!("ID:           {}", prescription.id);
            println!("Medication:   {}", prescription.medication);
            println!("Dosage:       {}", prescription.dosage);
            println!("Consultation: {}", prescription.consultation_id);
        }
        PrescriptionCommand::ByConsultation { consultation_id } => {
            let prescriptions = api.prescriptions().by_consultation(consultation_id).await?;
            render_prescriptions(&prescriptions, &Lookup::empty());
        }
        PrescriptionCommand::Create {
            medication,
            dosage,
            consultation,
        } => {
            let form = PrescriptionForm {
                medication: medication.unwrap_or_default(),
                dosage: dosage.unwrap_or_default(),
                consultation_id: consultation,
            };
            let payload = form.validate()?;

            let mut page = build_page(
                PRESCRIPTION_META,
                api.prescriptions(),
                Box::new(StdinConfirmer),
            );
            page.open_create();
            page.submit(payload).await;
        }
        PrescriptionCommand::Update {
            id,
            medication,
            dosage,
            consultation,
        } => {
            let current = api.prescriptions().get(id).await?;
            let mut form = PrescriptionForm::from_entity(&current);
            if let Some(value) = medication {
                form.medication = value;
            }
            if let Some(value) = dosage {
                form.dosage = value;
            }
            if let Some(value) = consultation {
                form.consultation_id = Some(value);
            }
            let payload = form.validate()?;

            let mut page = build_page(
                PRESCRIPTION_META,
                api.prescriptions(),
                Box::new(StdinConfirmer),
            );
            page.open_edit(current);
            page.submit(payload).await;
        }
        PrescriptionCommand::Delete { id, yes } => {
            let mut page = build_page(PRESCRIPTION_META, api.prescriptions(), confirmer(yes));
            page.remove(id).await;
        }
    }

    Ok(())
}

fn render_prescriptions(prescriptions: &[Prescription], consultations: &Lookup<Consultation>) {
    if prescriptions.is_empty() {
        println!("No prescriptions found.");
        return;
    }
    for prescription in prescriptions {
        println!(
            "ID: {}, Medication: {}, Dosage: {}, Consultation: {}",
            prescription.id,
            prescription.medication,
            prescription.dosage,
            consultations.display(prescription.consultation_id, |c| {
                format!("#{} ({})", c.id, c.reason)
            })
        );
    }
}

// ============================================================================
// Specialties (read-only catalogue)
// ============================================================================

pub async fn run_specialties(api: &HospitalApi, command: SpecialtyCommand) -> anyhow::Result<()> {
    match command {
        SpecialtyCommand::List => {
            let specialties = api.specialties().list().await?;
            render_specialties(&specialties);
        }
        SpecialtyCommand::Show { id } => {
            let specialty = api.specialties().get(id).await?;
            println!("ID:   {}", specialty.id);
            println!("Name: {}", specialty.name);
        }
    }

    Ok(())
}

fn render_specialties(specialties: &[Specialty]) {
    if specialties.is_empty() {
        println!("No specialties found.");
        return;
    }
    for specialty in specialties {
        println!("ID: {}, Name: {}", specialty.id, specialty.name);
    }
}

// ============================================================================
// Histories (read-only)
// ============================================================================

pub async fn run_histories(api: &HospitalApi, command: HistoryCommand) -> anyhow::Result<()> {
    match command {
        HistoryCommand::List => {
            let histories = api.histories().list().await?;
            render_histories(&histories);
        }
        HistoryCommand::Show { id } => {
            let history = api.histories().get(id).await?;
            println!("ID:          {}", history.id);
            println!("Patient:     {}", history.patient_id);
            println!("Description: {}", history.description);
        }
        HistoryCommand::ByPatient { patient_id } => {
            let histories = api.histories().by_patient(patient_id).await?;
            render_histories(&histories);
        }
    }

    Ok(())
}

fn render_histories(histories: &[History]) {
    if histories.is_empty() {
        println!("No histories found.");
        return;
    }
    for history in histories {
        println!(
            "ID: {}, Patient: {}, Description: {}",
            history.id, history.patient_id, history.description
        );
    }
}
