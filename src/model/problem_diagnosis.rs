use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::DocumentContext;
use crate::types::CodableText;
use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

/// A problem or diagnosis entry.
///
/// The same stored data is checked against different mandatory-field rules
/// depending on the document it appears in; see [`ProblemDiagnosis::validate_in`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProblemDiagnosis {
    pub identification: Option<CodableText>,
    pub date_of_onset: Option<NaiveDate>,
    pub date_of_resolution_remission: Option<NaiveDate>,
    pub comment: Option<String>,
}

impl ProblemDiagnosis {
    /// Validate under the rules of a specific document type.
    pub fn validate_in(
        &self,
        context: DocumentContext,
        path: &str,
        messages: &mut Vec<ValidationMessage>,
    ) {
        match context {
            DocumentContext::DischargeSummary => self.validate_for_discharge_summary(path, messages),
            DocumentContext::EReferral | DocumentContext::SharedHealthSummary => {
                self.validate_core(path, messages)
            }
        }
    }

    fn validate_core(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("ProblemDiagnosisIdentification", &self.identification) {
            if let Some(identification) = &self.identification {
                identification.validate(
                    &vb.field_path("ProblemDiagnosisIdentification"),
                    vb.messages(),
                );
            }
        }
        if let (Some(onset), Some(resolution)) =
            (self.date_of_onset, self.date_of_resolution_remission)
        {
            if onset > resolution {
                let onset_path = vb.field_path("DateOfOnset");
                vb.add_message(
                    onset_path,
                    Some(onset.to_string()),
                    "DateOfOnset must not be after DateOfResolutionRemission",
                );
            }
        }
    }

    /// Discharge summaries additionally require the date of onset.
    fn validate_for_discharge_summary(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        self.validate_core(path, messages);
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("DateOfOnset", &self.date_of_onset);
    }
}

impl Validatable for ProblemDiagnosis {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        self.validate_core(path, messages);
    }
}

/// Positive statement that a section has nothing to report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExclusionStatement {
    pub global_statement: Option<CodableText>,
}

impl ExclusionStatement {
    pub fn none_known() -> Self {
        Self {
            global_statement: Some(CodableText::text("None known")),
        }
    }

    pub fn not_asked() -> Self {
        Self {
            global_statement: Some(CodableText::text("Not asked")),
        }
    }
}

impl Validatable for ExclusionStatement {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("GlobalStatement", &self.global_statement) {
            if let Some(global_statement) = &self.global_statement {
                global_statement.validate(&vb.field_path("GlobalStatement"), vb.messages());
            }
        }
    }
}
