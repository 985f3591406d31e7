use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::model::{ExclusionStatement, ProblemDiagnosis, ReviewedMedications};
use crate::validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};

use super::{DocumentAttributes, DocumentContext, escalate};

/// Shared health summary document root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SharedHealthSummary {
    pub attributes: DocumentAttributes,
    pub problem_diagnoses: Vec<ProblemDiagnosis>,
    pub problem_diagnoses_exclusion: Option<ExclusionStatement>,
    pub reviewed_medications: Option<ReviewedMedications>,
}

impl SharedHealthSummary {
    /// Single entry point for creating a shared health summary.
    pub fn create() -> Self {
        tracing::debug!("creating shared health summary");
        Self {
            attributes: DocumentAttributes::create(),
            problem_diagnoses: Vec::new(),
            problem_diagnoses_exclusion: None,
            reviewed_medications: None,
        }
    }

    pub fn validate_strict(&self) -> Result<(), ValidationFailure> {
        let mut messages = Vec::new();
        self.validate("", &mut messages);
        escalate(DocumentContext::SharedHealthSummary, messages)
    }
}

impl Validatable for SharedHealthSummary {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let path = if path.is_empty() {
            "SharedHealthSummary"
        } else {
            path
        };
        let mut vb = ValidationBuilder::new(path, messages);
        self.attributes
            .validate(&vb.field_path("Attributes"), vb.messages());
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
                DocumentContext::SharedHealthSummary,
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
    }
}
