use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::model::{
    DiagnosticInvestigations, Encounter, ExclusionStatement, ProblemDiagnosis,
    ReviewedMedications,
};
use crate::validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};

use super::{DocumentAttributes, DocumentContext, escalate};

/// Discharge summary document root.
///
/// Created through [`DischargeSummary::create`], then populated by mutating
/// fields before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DischargeSummary {
    pub attributes: DocumentAttributes,
    pub encounter: Option<Encounter>,
    pub problem_diagnoses: Vec<ProblemDiagnosis>,
    pub problem_diagnoses_exclusion: Option<ExclusionStatement>,
    pub reviewed_medications: Option<ReviewedMedications>,
    pub diagnostic_investigations: Option<DiagnosticInvestigations>,
}

impl DischargeSummary {
    /// Single entry point for creating a discharge summary. Mints the
    /// document identifiers and creation time; everything else starts empty.
    pub fn create() -> Self {
        tracing::debug!("creating discharge summary");
        Self {
            attributes: DocumentAttributes::create(),
            encounter: None,
            problem_diagnoses: Vec::new(),
            problem_diagnoses_exclusion: None,
            reviewed_medications: None,
            diagnostic_investigations: None,
        }
    }

    /// Validate from the document root and escalate a non-empty message
    /// list as a [`ValidationFailure`] carrying every problem found.
    pub fn validate_strict(&self) -> Result<(), ValidationFailure> {
        let mut messages = Vec::new();
        self.validate("", &mut messages);
        escalate(DocumentContext::DischargeSummary, messages)
    }
}

impl Validatable for DischargeSummary {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        // An empty prefix anchors paths at the document type name, so no
        // message is ever reported with an empty path.
        let path = if path.is_empty() {
            "DischargeSummary"
        } else {
            path
        };
        let mut vb = ValidationBuilder::new(path, messages);
        self.attributes
            .validate(&vb.field_path("Attributes"), vb.messages());
        if vb.required("Encounter", &self.encounter) {
            if let Some(encounter) = &self.encounter {
                encounter.validate_in(
                    DocumentContext::DischargeSummary,
                    &vb.field_path("Encounter"),
                    vb.messages(),
                );
            }
        }
        vb.choice(&[
            ChoiceSlot::list("ProblemDiagnosis", &self.problem_diagnoses),
            ChoiceSlot::value(
                "ProblemDiagnosesExclusionStatement",
                &self.problem_diagnoses_exclusion,
            ),
        ]);
        for (index, problem_diagnosis) in self.problem_diagnoses.iter().enumerate() {
            let item_path = vb.indexed_path("ProblemDiagnosis", index);
            problem_diagnosis.validate_in(
                DocumentContext::DischargeSummary,
                &item_path,
                vb.messages(),
            );
        }
        if let Some(exclusion) = &self.problem_diagnoses_exclusion {
            exclusion.validate(
                &vb.field_path("ProblemDiagnosesExclusionStatement"),
                vb.messages(),
            );
        }
        if vb.required("ReviewedMedications", &self.reviewed_medications) {
            if let Some(reviewed_medications) = &self.reviewed_medications {
                reviewed_medications
                    .validate(&vb.field_path("ReviewedMedications"), vb.messages());
            }
        }
        if let Some(diagnostic_investigations) = &self.diagnostic_investigations {
            diagnostic_investigations
                .validate(&vb.field_path("DiagnosticInvestigations"), vb.messages());
        }
    }
}
