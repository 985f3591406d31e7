use serde::{Deserialize, Serialize};

use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

/// Physical quantity with an optional unit of measure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Option<f64>,
    pub units: Option<String>,
}

impl Quantity {
    pub fn new(value: f64, units: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            units: Some(units.into()),
        }
    }
}

impl Validatable for Quantity {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Value", &self.value);
        if let Some(value) = self.value {
            if value < 0.0 {
                let value_path = vb.field_path("Value");
                vb.add_message(
                    value_path,
                    Some(value.to_string()),
                    "Value must not be negative",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_value_fails() {
        let quantity = Quantity::new(-3.2, "g");
        let mut messages = Vec::new();
        quantity.validate("WeightOrVolume", &mut messages);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "WeightOrVolume.Value");
        assert_eq!(messages[0].value.as_deref(), Some("-3.2"));
    }

    #[test]
    fn test_missing_value_is_required() {
        let quantity = Quantity::default();
        let mut messages = Vec::new();
        quantity.validate("WeightOrVolume", &mut messages);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Value is a required field");
    }
}
