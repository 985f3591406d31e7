//! Fail-slow validation engine for the CDA object model.
//!
//! Every entity in the model implements [`Validatable`]: it receives the path
//! it lives at and the shared message list for the current document, builds a
//! [`ValidationBuilder`] scoped to that path, runs its own checks, and then
//! recurses into non-absent children in field-declaration order. Violations
//! are accumulated, never thrown; the caller at the top of the tree decides
//! whether a non-empty list is fatal.

pub mod builder;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use builder::{ChoiceSlot, ValidationBuilder};

/// One detected rule violation, located by a dotted, bracket-indexed path
/// within the document object graph (e.g. `ProblemDiagnosis[2].DateOfOnset`).
///
/// Immutable once constructed. Only ever created by the checking primitives
/// on [`ValidationBuilder`] (or by an entity's ad hoc business rule) at the
/// moment a violation is detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// Location of the violation within the document.
    pub path: String,
    /// Optional snapshot of the offending value, for diagnostics only.
    pub value: Option<String>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationMessage {
    pub fn new(
        path: impl Into<String>,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            value,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(value) = &self.value {
            write!(f, " (value: {value})")?;
        }
        Ok(())
    }
}

/// The uniform validation contract implemented by every entity.
///
/// `path` is the location this entity lives at within the document; `messages`
/// is the single ordered list shared by reference across the entire traversal
/// of one document. Implementations append to the list and return. They never
/// panic, never remove and never reorder existing entries, so the final list
/// is a deterministic pre-order trace of the entity graph.
pub trait Validatable {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>);
}
