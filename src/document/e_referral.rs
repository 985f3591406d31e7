use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::model::{Participation, ProblemDiagnosis, ReviewedMedications};
use crate::types::CdaInterval;
use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

use super::{DocumentAttributes, DocumentContext, escalate};

/// e-Referral document root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct EReferral {
    pub attributes: DocumentAttributes,
    pub referral_date_time: Option<DateTime<Utc>>,
    pub referral_reason: Option<String>,
    pub validity_duration: Option<CdaInterval>,
    pub referee: Option<Participation>,
    pub usual_general_practitioner: Option<Participation>,
    pub medical_history: Vec<ProblemDiagnosis>,
    pub medications: Option<ReviewedMedications>,
}

impl EReferral {
    /// Single entry point for creating an e-referral.
    pub fn create() -> Self {
        tracing::debug!("creating e-referral");
        Self {
            attributes: DocumentAttributes::create(),
            referral_date_time: None,
            referral_reason: None,
            validity_duration: None,
            referee: None,
            usual_general_practitioner: None,
            medical_history: Vec::new(),
            medications: None,
        }
    }

    pub fn validate_strict(&self) -> Result<(), ValidationFailure> {
        let mut messages = Vec::new();
        self.validate("", &mut messages);
        escalate(DocumentContext::EReferral, messages)
    }
}

impl Validatable for EReferral {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let path = if path.is_empty() { "EReferral" } else { path };
        let mut vb = ValidationBuilder::new(path, messages);
        self.attributes
            .validate(&vb.field_path("Attributes"), vb.messages());
        vb.required("ReferralDateTime", &self.referral_date_time);
        vb.required("ReferralReason", &self.referral_reason);
        if let Some(validity_duration) = &self.validity_duration {
            validity_duration.validate(&vb.field_path("ValidityDuration"), vb.messages());
        }
        if vb.required("Referee", &self.referee) {
            if let Some(referee) = &self.referee {
                referee.validate(&vb.field_path("Referee"), vb.messages());
            }
        }
        if let Some(usual_general_practitioner) = &self.usual_general_practitioner {
            usual_general_practitioner
                .validate(&vb.field_path("UsualGeneralPractitioner"), vb.messages());
        }
        for (index, problem_diagnosis) in self.medical_history.iter().enumerate() {
            let item_path = vb.indexed_path("MedicalHistoryItem", index);
            problem_diagnosis.validate_in(DocumentContext::EReferral, &item_path, vb.messages());
        }
        if vb.required("Medications", &self.medications) {
            if let Some(medications) = &self.medications {
                medications.validate(&vb.field_path("Medications"), vb.messages());
            }
        }
    }
}
