use serde::{Deserialize, Serialize};

use crate::types::{CodableText, NullFlavour};
use crate::validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};

use super::problem_diagnosis::ExclusionStatement;

/// Administration directions: free text, or a null flavor when directions
/// are positively unavailable. One of the two, never both, never neither.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Directions {
    pub text: Option<String>,
    pub null_flavour: Option<NullFlavour>,
}

impl Directions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            null_flavour: None,
        }
    }

    pub fn unavailable(null_flavour: NullFlavour) -> Self {
        Self {
            text: None,
            null_flavour: Some(null_flavour),
        }
    }
}

impl Validatable for Directions {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice(&[
            ChoiceSlot::value("Text", &self.text),
            ChoiceSlot::value("NullFlavour", &self.null_flavour),
        ]);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MedicationItem {
    pub medicine: Option<CodableText>,
    pub directions: Option<Directions>,
    pub clinical_indication: Option<String>,
    pub comment: Option<String>,
}

impl Validatable for MedicationItem {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("Medicine", &self.medicine) {
            if let Some(medicine) = &self.medicine {
                medicine.validate(&vb.field_path("Medicine"), vb.messages());
            }
        }
        if vb.required("Directions", &self.directions) {
            if let Some(directions) = &self.directions {
                directions.validate(&vb.field_path("Directions"), vb.messages());
            }
        }
    }
}

/// The medications section: a list of items, or an exclusion statement when
/// there is positively nothing to list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewedMedications {
    pub medications: Vec<MedicationItem>,
    pub exclusion_statement: Option<ExclusionStatement>,
}

impl Validatable for ReviewedMedications {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice(&[
            ChoiceSlot::list("Medication", &self.medications),
            ChoiceSlot::value("ExclusionStatement", &self.exclusion_statement),
        ]);
        for (index, medication) in self.medications.iter().enumerate() {
            let item_path = vb.indexed_path("Medication", index);
            medication.validate(&item_path, vb.messages());
        }
        if let Some(exclusion_statement) = &self.exclusion_statement {
            exclusion_statement.validate(&vb.field_path("ExclusionStatement"), vb.messages());
        }
    }
}
