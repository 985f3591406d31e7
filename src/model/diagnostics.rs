//! Diagnostic investigations: pathology and imaging results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CodableText;
use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

use super::specimen::{AnatomicalSite, SpecimenDetail};

/// Status of a reported result. `Undefined` is the unpopulated default and
/// never valid in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultStatus {
    #[default]
    Undefined,
    Registered,
    Interim,
    Final,
    Amended,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagingResult {
    pub result_name: Option<CodableText>,
}

impl Validatable for ImagingResult {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("ResultName", &self.result_name) {
            if let Some(result_name) = &self.result_name {
                result_name.validate(&vb.field_path("ResultName"), vb.messages());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagingResultGroup {
    pub result_group_name: Option<CodableText>,
    pub results: Vec<ImagingResult>,
}

impl Validatable for ImagingResultGroup {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("ResultGroupName", &self.result_group_name) {
            if let Some(result_group_name) = &self.result_group_name {
                result_group_name.validate(&vb.field_path("ResultGroupName"), vb.messages());
            }
        }
        vb.range("Result", &self.results, 1, None);
        for (index, result) in self.results.iter().enumerate() {
            let item_path = vb.indexed_path("Result", index);
            result.validate(&item_path, vb.messages());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagingExaminationResult {
    pub examination_result_name: Option<CodableText>,
    pub modality: Option<CodableText>,
    pub anatomical_sites: Vec<AnatomicalSite>,
    pub result_status: ResultStatus,
    pub result_groups: Vec<ImagingResultGroup>,
    pub examination_date_time: Option<DateTime<Utc>>,
}

impl Validatable for ImagingExaminationResult {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("ExaminationResultName", &self.examination_result_name) {
            if let Some(examination_result_name) = &self.examination_result_name {
                examination_result_name
                    .validate(&vb.field_path("ExaminationResultName"), vb.messages());
            }
        }
        vb.no_match("ResultStatus", &self.result_status, &ResultStatus::Undefined);
        if let Some(modality) = &self.modality {
            modality.validate(&vb.field_path("Modality"), vb.messages());
        }
        for (index, anatomical_site) in self.anatomical_sites.iter().enumerate() {
            let item_path = vb.indexed_path("AnatomicalSite", index);
            anatomical_site.validate(&item_path, vb.messages());
        }
        for (index, result_group) in self.result_groups.iter().enumerate() {
            let item_path = vb.indexed_path("ResultGroup", index);
            result_group.validate(&item_path, vb.messages());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathologyTestResult {
    pub test_result_name: Option<CodableText>,
    pub specimen_details: Vec<SpecimenDetail>,
    pub result_status: ResultStatus,
    pub observation_date_time: Option<DateTime<Utc>>,
}

impl Validatable for PathologyTestResult {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("TestResultName", &self.test_result_name) {
            if let Some(test_result_name) = &self.test_result_name {
                test_result_name.validate(&vb.field_path("TestResultName"), vb.messages());
            }
        }
        vb.no_match("ResultStatus", &self.result_status, &ResultStatus::Undefined);
        vb.required("ObservationDateTime", &self.observation_date_time);
        for (index, specimen_detail) in self.specimen_details.iter().enumerate() {
            let item_path = vb.indexed_path("SpecimenDetail", index);
            specimen_detail.validate(&item_path, vb.messages());
        }
    }
}

/// Container for all diagnostic investigations reported by a document.
/// At least one investigation of either kind must be present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagnosticInvestigations {
    pub pathology_test_results: Vec<PathologyTestResult>,
    pub imaging_examination_results: Vec<ImagingExaminationResult>,
}

impl Validatable for DiagnosticInvestigations {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if self.pathology_test_results.is_empty() && self.imaging_examination_results.is_empty() {
            let name = vb.path_name().to_string();
            vb.add_message(
                name,
                None,
                "at least one pathology test result or imaging examination result must be provided",
            );
        }
        for (index, pathology_test_result) in self.pathology_test_results.iter().enumerate() {
            let item_path = vb.indexed_path("PathologyTestResult", index);
            pathology_test_result.validate(&item_path, vb.messages());
        }
        for (index, imaging_examination_result) in
            self.imaging_examination_results.iter().enumerate()
        {
            let item_path = vb.indexed_path("ImagingExaminationResult", index);
            imaging_examination_result.validate(&item_path, vb.messages());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_group_requires_at_least_one_result() {
        let group = ImagingResultGroup {
            result_group_name: Some(CodableText::text("Measurements")),
            results: Vec::new(),
        };
        let mut messages = Vec::new();
        group.validate("ResultGroup[0]", &mut messages);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "ResultGroup[0].Result");
        assert!(messages[0].message.contains("at least 1"));
    }

    #[test]
    fn test_undefined_result_status_rejected() {
        let result = PathologyTestResult {
            test_result_name: Some(CodableText::text("Full blood count")),
            observation_date_time: Some(Utc::now()),
            ..PathologyTestResult::default()
        };
        let mut messages = Vec::new();
        result.validate("PathologyTestResult[0]", &mut messages);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "PathologyTestResult[0].ResultStatus");
        assert_eq!(messages[0].value.as_deref(), Some("Undefined"));
    }

    #[test]
    fn test_empty_investigations_rejected() {
        let investigations = DiagnosticInvestigations::default();
        let mut messages = Vec::new();
        investigations.validate("DiagnosticInvestigations", &mut messages);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "DiagnosticInvestigations");
    }
}
