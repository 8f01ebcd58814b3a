//! `hospadmin`: terminal front end for the hospital administration backend.
//!
//! Each entity gets a subcommand with the shared interaction cycle: list,
//! show, create, update, delete-with-confirmation. Mutating commands drive
//! the generic page view model from `hospital-core`, so the console sees the
//! same orchestration (validation, notifications, re-fetch after success)
//! the web pages had.
//!
//! # Environment Variables
//! - `HOSPITAL_API_URL`: backend base URL (default: `http://localhost:8080/api`)

use clap::{Parser, Subcommand};
use hospital_api::{ApiConfig, HospitalApi};
use hospital_types::EntityId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "hospadmin")]
#[command(about = "Hospital administration console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage doctors
    Doctors {
        #[command(subcommand)]
        command: DoctorCommand,
    },
    /// Manage patients
    Patients {
        #[command(subcommand)]
        command: PatientCommand,
    },
    /// Manage consultations
    Consultations {
        #[command(subcommand)]
        command: ConsultationCommand,
    },
    /// Manage prescriptions
    Prescriptions {
        #[command(subcommand)]
        command: PrescriptionCommand,
    },
    /// Browse the specialty catalogue
    Specialties {
        #[command(subcommand)]
        command: SpecialtyCommand,
    },
    /// Browse clinical histories
    Histories {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Subcommand)]
enum DoctorCommand {
    /// List all doctors
    List,
    /// Show one doctor
    Show {
        /// Doctor id
        id: EntityId,
    },
    /// Create a doctor
    Create {
        /// Given name
        #[arg(long)]
        first_name: Option<String>,
        /// Family name
        #[arg(long)]
        last_name: Option<String>,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
        /// Specialty id (see `specialties list`)
        #[arg(long)]
        specialty: Option<EntityId>,
    },
    /// Update a doctor; omitted fields keep their current values
    Update {
        /// Doctor id
        id: EntityId,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        specialty: Option<EntityId>,
    },
    /// Delete a doctor (asks for confirmation)
    Delete {
        /// Doctor id
        id: EntityId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PatientCommand {
    /// List all patients
    List,
    /// Show one patient
    Show {
        /// Patient id
        id: EntityId,
    },
    /// Create a patient
    Create {
        /// Given name
        #[arg(long)]
        first_name: Option<String>,
        /// Family name
        #[arg(long)]
        last_name: Option<String>,
        /// National identity number
        #[arg(long)]
        national_id: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },
    /// Update a patient; omitted fields keep their current values
    Update {
        /// Patient id
        id: EntityId,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        national_id: Option<String>,
        #[arg(long)]
        birth_date: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a patient (asks for confirmation)
    Delete {
        /// Patient id
        id: EntityId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConsultationCommand {
    /// List all consultations with patient and doctor names
    List,
    /// Show one consultation
    Show {
        /// Consultation id
        id: EntityId,
    },
    /// Create a consultation
    Create {
        /// Date and time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        date: Option<String>,
        /// Reason for the visit
        #[arg(long)]
        reason: Option<String>,
        /// Patient id
        #[arg(long)]
        patient: Option<EntityId>,
        /// Doctor id
        #[arg(long)]
        doctor: Option<EntityId>,
    },
    /// Update a consultation; omitted fields keep their current values
    Update {
        /// Consultation id
        id: EntityId,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        reason: Option<String>,
        #[arg(long)]
        patient: Option<EntityId>,
        #[arg(long)]
        doctor: Option<EntityId>,
    },
    /// Delete a consultation (asks for confirmation)
    Delete {
        /// Consultation id
        id: EntityId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PrescriptionCommand {
    /// List all prescriptions with their consultations
    List,
    /// Show one prescription
    Show {
        /// Prescription id
        id: EntityId,
    },
    /// List prescriptions issued under one consultation
    ByConsultation {
        /// Consultation id
        consultation_id: EntityId,
    },
    /// Create a prescription
    Create {
        /// Prescribed medication
        #[arg(long)]
        medication: Option<String>,
        /// Dosage instructions
        #[arg(long)]
        dosage: Option<String>,
        /// Consultation id
        #[arg(long)]
        consultation: Option<EntityId>,
    },
    /// Update a prescription; omitted fields keep their current values
    Update {
        /// Prescription id
        id: EntityId,
        #[arg(long)]
        medication: Option<String>,
        #[arg(long)]
        dosage: Option<String>,
        #[arg(long)]
        consultation: Option<EntityId>,
    },
    /// Delete a prescription (asks for confirmation)
    Delete {
        /// Prescription id
        id: EntityId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SpecialtyCommand {
    /// List the specialty catalogue
    List,
    /// Show one specialty
    Show {
        /// Specialty id
        id: EntityId,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List all clinical histories
    List,
    /// Show one history entry
    Show {
        /// History id
        id: EntityId,
    },
    /// List the histories of one patient
    ByPatient {
        /// Patient id
        patient_id: EntityId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hospital_cli=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env_value(std::env::var("HOSPITAL_API_URL").ok())?;
    tracing::debug!("using backend at {}", config.base_url());
    let api = HospitalApi::new(config);

    let cli = Cli::parse();
    match cli.command {
        Commands::Doctors { command } => commands::run_doctors(&api, command).await,
        Commands::Patients { command } => commands::run_patients(&api, command).await,
        Commands::Consultations { command } => commands::run_consultations(&api, command).await,
        Commands::Prescriptions { command } => commands::run_prescriptions(&api, command).await,
        Commands::Specialties { command } => commands::run_specialties(&api, command).await,
        Commands::Histories { command } => commands::run_histories(&api, command).await,
    }
}
