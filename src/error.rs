use thiserror::Error;

use crate::validation::ValidationMessage;

#[derive(Error, Debug)]
pub enum CdaModelError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error(transparent)]
    ValidationFailure(#[from] ValidationFailure),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Aggregate raised by a top-level caller when a document's collected
/// message list is non-empty.
///
/// The validation engine itself never constructs this: detection appends to
/// the shared list, and escalation is the caller's decision at the top of
/// one document's validation tree.
#[derive(Error, Debug)]
#[error("document failed validation with {} problem(s)", .messages.len())]
pub struct ValidationFailure {
    pub messages: Vec<ValidationMessage>,
}

impl ValidationFailure {
    pub fn new(messages: Vec<ValidationMessage>) -> Self {
        Self { messages }
    }

    /// Full report, one problem per line.
    pub fn render(&self) -> String {
        let mut report = format!("{self}");
        for message in &self.messages {
            report.push('\n');
            report.push_str(&format!("  {message}"));
        }
        report
    }
}

pub type Result<T> = std::result::Result<T, CdaModelError>;
