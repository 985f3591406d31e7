//! Document roots, the shared CDA header, and the document-type tag that
//! selects context-dependent validation rules.

pub mod discharge_summary;
pub mod e_referral;
pub mod shared_health_summary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::InstanceIdentifier;
use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

use crate::model::Participation;

pub use discharge_summary::DischargeSummary;
pub use e_referral::EReferral;
pub use shared_health_summary::SharedHealthSummary;

/// The document type an entity is being validated for.
///
/// Entities whose mandatory-field rules differ per document expose a
/// `validate_in(context, ...)` alongside the general `Validatable` impl;
/// the tag selects the rule set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentContext {
    DischargeSummary,
    EReferral,
    SharedHealthSummary,
}

impl fmt::Display for DocumentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentContext::DischargeSummary => "Discharge Summary",
            DocumentContext::EReferral => "e-Referral",
            DocumentContext::SharedHealthSummary => "Shared Health Summary",
        };
        f.write_str(name)
    }
}

/// The CDA header shared by every document type: identification, creation
/// time and the mandatory participations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentAttributes {
    pub document_id: Option<InstanceIdentifier>,
    pub set_id: Option<InstanceIdentifier>,
    pub version_number: Option<u32>,
    pub creation_time: Option<DateTime<Utc>>,
    pub subject_of_care: Option<Participation>,
    pub author: Option<Participation>,
    pub custodian: Option<Participation>,
    pub legal_authenticator: Option<Participation>,
}

impl DocumentAttributes {
    /// Header for a brand-new document: fresh document and set identifiers,
    /// version 1, creation time now. Participations are left for the caller.
    pub fn create() -> Self {
        Self {
            document_id: Some(InstanceIdentifier::new_uuid()),
            set_id: Some(InstanceIdentifier::new_uuid()),
            version_number: Some(1),
            creation_time: Some(Utc::now()),
            ..Self::default()
        }
    }
}

impl Validatable for DocumentAttributes {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("DocumentId", &self.document_id) {
            if let Some(document_id) = &self.document_id {
                document_id.validate(&vb.field_path("DocumentId"), vb.messages());
            }
        }
        if vb.required("SetId", &self.set_id) {
            if let Some(set_id) = &self.set_id {
                set_id.validate(&vb.field_path("SetId"), vb.messages());
            }
        }
        vb.required("VersionNumber", &self.version_number);
        vb.required("CreationTime", &self.creation_time);
        if vb.required("SubjectOfCare", &self.subject_of_care) {
            if let Some(subject_of_care) = &self.subject_of_care {
                subject_of_care.validate(&vb.field_path("SubjectOfCare"), vb.messages());
            }
        }
        if vb.required("Author", &self.author) {
            if let Some(author) = &self.author {
                author.validate(&vb.field_path("Author"), vb.messages());
            }
        }
        if vb.required("Custodian", &self.custodian) {
            if let Some(custodian) = &self.custodian {
                custodian.validate(&vb.field_path("Custodian"), vb.messages());
            }
        }
        if let Some(legal_authenticator) = &self.legal_authenticator {
            legal_authenticator.validate(&vb.field_path("LegalAuthenticator"), vb.messages());
        }
    }
}

/// Escalate a completed validation run: a non-empty list becomes a
/// [`crate::error::ValidationFailure`] carrying every collected message.
pub(crate) fn escalate(
    context: DocumentContext,
    messages: Vec<ValidationMessage>,
) -> Result<(), crate::error::ValidationFailure> {
    tracing::debug!(
        "{} validation finished with {} message(s)",
        context,
        messages.len()
    );
    if messages.is_empty() {
        Ok(())
    } else {
        Err(crate::error::ValidationFailure::new(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mints_identifiers() {
        let attributes = DocumentAttributes::create();
        assert!(attributes.document_id.is_some());
        assert!(attributes.set_id.is_some());
        assert_eq!(attributes.version_number, Some(1));
        assert!(attributes.creation_time.is_some());
        assert_ne!(attributes.document_id, attributes.set_id);
    }

    #[test]
    fn test_empty_attributes_report_every_mandatory_field() {
        let attributes = DocumentAttributes::default();
        let mut messages = Vec::new();
        attributes.validate("Attributes", &mut messages);
        let paths: Vec<&str> = messages.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "Attributes.DocumentId",
                "Attributes.SetId",
                "Attributes.VersionNumber",
                "Attributes.CreationTime",
                "Attributes.SubjectOfCare",
                "Attributes.Author",
                "Attributes.Custodian",
            ]
        );
    }
}
