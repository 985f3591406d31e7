use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};

/// HL7 null flavor vocabulary, used when a value is positively absent
/// rather than merely unpopulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullFlavour {
    NoInformation,
    Masked,
    NotApplicable,
    Unknown,
    AskedButUnknown,
    TemporarilyUnavailable,
    NotAsked,
}

impl NullFlavour {
    /// Wire code as serialized into the CDA document.
    pub fn code(&self) -> &'static str {
        match self {
            NullFlavour::NoInformation => "NI",
            NullFlavour::Masked => "MSK",
            NullFlavour::NotApplicable => "NA",
            NullFlavour::Unknown => "UNK",
            NullFlavour::AskedButUnknown => "ASKU",
            NullFlavour::TemporarilyUnavailable => "NAV",
            NullFlavour::NotAsked => "NASK",
        }
    }
}

impl fmt::Display for NullFlavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A coded value with free-text and null-flavor alternatives.
///
/// Exactly one of `code`, `original_text` and `null_flavour` carries the
/// value; the remaining descriptive fields qualify a coded value only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodableText {
    pub code: Option<String>,
    pub code_system_code: Option<String>,
    pub code_system_name: Option<String>,
    pub display_name: Option<String>,
    pub original_text: Option<String>,
    pub null_flavour: Option<NullFlavour>,
}

impl CodableText {
    pub fn coded(
        code: impl Into<String>,
        code_system_code: impl Into<String>,
        code_system_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            code_system_code: Some(code_system_code.into()),
            code_system_name: Some(code_system_name.into()),
            display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    pub fn text(original_text: impl Into<String>) -> Self {
        Self {
            original_text: Some(original_text.into()),
            ..Self::default()
        }
    }

    pub fn with_null_flavour(null_flavour: NullFlavour) -> Self {
        Self {
            null_flavour: Some(null_flavour),
            ..Self::default()
        }
    }
}

impl fmt::Display for CodableText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(display_name) = &self.display_name {
            return f.write_str(display_name);
        }
        if let Some(code) = &self.code {
            return f.write_str(code);
        }
        if let Some(original_text) = &self.original_text {
            return f.write_str(original_text);
        }
        if let Some(null_flavour) = &self.null_flavour {
            return write!(f, "{null_flavour}");
        }
        Ok(())
    }
}

impl Validatable for CodableText {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice(&[
            ChoiceSlot::value("Code", &self.code),
            ChoiceSlot::value("OriginalText", &self.original_text),
            ChoiceSlot::value("NullFlavour", &self.null_flavour),
        ]);
        if self.code.is_some() {
            vb.required("CodeSystemCode", &self.code_system_code);
        }
    }
}
