use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

/// HL7 instance identifier (II): an OID or UUID root with an optional
/// extension scoped to that root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstanceIdentifier {
    pub root: String,
    pub extension: Option<String>,
    /// Human-readable name of the assigning authority.
    pub assigning_authority_name: Option<String>,
}

impl InstanceIdentifier {
    pub fn new(root: impl Into<String>, extension: Option<String>) -> Self {
        Self {
            root: root.into(),
            extension,
            assigning_authority_name: None,
        }
    }

    /// Identifier with a freshly minted v4 UUID root and no extension.
    pub fn new_uuid() -> Self {
        Self::new(Uuid::new_v4().to_string(), None)
    }

    pub fn with_assigning_authority_name(mut self, name: impl Into<String>) -> Self {
        self.assigning_authority_name = Some(name.into());
        self
    }

    fn root_is_well_formed(&self) -> bool {
        if Uuid::parse_str(&self.root).is_ok() {
            return true;
        }
        regex::Regex::new(r"^[0-2](\.(0|[1-9]\d*))+$")
            .map(|re| re.is_match(&self.root))
            .unwrap_or(false)
    }
}

impl fmt::Display for InstanceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(extension) => write!(f, "{}^{}", self.root, extension),
            None => write!(f, "{}", self.root),
        }
    }
}

impl Validatable for InstanceIdentifier {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if self.root.is_empty() {
            let root_path = vb.field_path("Root");
            vb.add_message(root_path, None, "Root is a required field");
        } else if !self.root_is_well_formed() {
            let root_path = vb.field_path("Root");
            vb.add_message(
                root_path,
                Some(self.root.clone()),
                "Root must be a valid OID or UUID",
            );
        }
    }
}
