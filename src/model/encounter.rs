use serde::{Deserialize, Serialize};

use crate::document::DocumentContext;
use crate::types::{CdaInterval, CodableText};
use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

/// The healthcare encounter a document reports on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Encounter {
    pub encounter_period: Option<CdaInterval>,
    pub encounter_class: Option<CodableText>,
    pub separation_mode: Option<CodableText>,
    pub location_name: Option<String>,
}

impl Encounter {
    /// Validate under the rules of a specific document type. A discharge
    /// summary reports a completed admission, so its view requires the
    /// encounter period and the mode of separation.
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
        if let Some(period) = &self.encounter_period {
            period.validate(&vb.field_path("EncounterPeriod"), vb.messages());
        }
        if let Some(class) = &self.encounter_class {
            class.validate(&vb.field_path("EncounterClass"), vb.messages());
        }
        if let Some(separation_mode) = &self.separation_mode {
            separation_mode.validate(&vb.field_path("SeparationMode"), vb.messages());
        }
    }

    fn validate_for_discharge_summary(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("EncounterPeriod", &self.encounter_period);
        vb.required("SeparationMode", &self.separation_mode);
        self.validate_core(path, messages);
    }
}

impl Validatable for Encounter {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        self.validate_core(path, messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_general_view_accepts_empty_encounter() {
        let encounter = Encounter::default();
        let mut messages = Vec::new();
        encounter.validate("Encounter", &mut messages);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_discharge_view_requires_period_and_separation() {
        let encounter = Encounter::default();
        let mut messages = Vec::new();
        encounter.validate_in(DocumentContext::DischargeSummary, "Encounter", &mut messages);
        let paths: Vec<&str> = messages.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Encounter.EncounterPeriod", "Encounter.SeparationMode"]
        );
    }

    #[test]
    fn test_discharge_view_passes_when_populated() {
        let encounter = Encounter {
            encounter_period: Some(CdaInterval::between(
                Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 5, 4, 11, 0, 0).unwrap(),
            )),
            separation_mode: Some(CodableText::coded("1", "2.16.840.1.113883.13.65", "AIHW Mode of separation", "Discharge to usual residence")),
            ..Encounter::default()
        };
        let mut messages = Vec::new();
        encounter.validate_in(DocumentContext::DischargeSummary, "Encounter", &mut messages);
        assert!(messages.is_empty());
    }
}
