//! # AUCDA
//!
//! Typed object model and fail-slow validation engine for Australian CDA
//! (Clinical Document Architecture) healthcare documents such as discharge
//! summaries, e-referrals and shared health summaries.
//!
//! Entities are plain records created through factory entry points and
//! populated by mutating fields. Validation walks the entity graph once,
//! depth-first and synchronously, appending every detected problem to a
//! single shared list tagged with dotted, index-qualified paths. Nothing is
//! thrown during the walk; escalation is the caller's decision at the top
//! of the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use aucda::{DischargeSummary, Validatable};
//!
//! let summary = DischargeSummary::create();
//!
//! // Collect every problem in one pass.
//! let mut messages = Vec::new();
//! summary.validate("", &mut messages);
//! assert!(!messages.is_empty()); // a freshly created document is incomplete
//!
//! // Or escalate a non-empty report as a single aggregate error.
//! assert!(summary.validate_strict().is_err());
//! ```

pub mod document;
pub mod error;
pub mod model;
pub mod types;
pub mod validation;

pub use document::{
    DischargeSummary, DocumentAttributes, DocumentContext, EReferral, SharedHealthSummary,
};
pub use error::{CdaModelError, Result, ValidationFailure};
pub use model::*;
pub use types::{CdaInterval, CodableText, InstanceIdentifier, NullFlavour, Quantity};
pub use validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};
