//! Clinical entities of the CDA object model.
//!
//! Each entity is a flat record whose `validate` method constructs a
//! [`crate::validation::ValidationBuilder`] scoped to its own path segment,
//! runs its checks, and recurses into populated children in field order.

pub mod diagnostics;
pub mod encounter;
pub mod medication;
pub mod participant;
pub mod problem_diagnosis;
pub mod specimen;

pub use diagnostics::{
    DiagnosticInvestigations, ImagingExaminationResult, ImagingResult, ImagingResultGroup,
    PathologyTestResult, ResultStatus,
};
pub use encounter::Encounter;
pub use medication::{Directions, MedicationItem, ReviewedMedications};
pub use participant::{
    Address, AddressPurpose, ElectronicCommunicationDetail, ElectronicCommunicationMedium,
    Organisation, Participant, Participation, Person, PersonName,
};
pub use problem_diagnosis::{ExclusionStatement, ProblemDiagnosis};
pub use specimen::{AnatomicalSite, PhysicalDetails, SpecimenDetail};
