use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{Validatable, ValidationBuilder, ValidationMessage};

/// Time interval with at least one bound populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CdaInterval {
    pub low: Option<DateTime<Utc>>,
    pub high: Option<DateTime<Utc>>,
}

impl CdaInterval {
    pub fn from(low: DateTime<Utc>) -> Self {
        Self {
            low: Some(low),
            high: None,
        }
    }

    pub fn to(high: DateTime<Utc>) -> Self {
        Self {
            low: None,
            high: Some(high),
        }
    }

    pub fn between(low: DateTime<Utc>, high: DateTime<Utc>) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }
}

impl Validatable for CdaInterval {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if self.low.is_none() && self.high.is_none() {
            let name = vb.path_name().to_string();
            vb.add_message(name, None, "at least one of Low and High must be provided");
        }
        if let (Some(low), Some(high)) = (self.low, self.high) {
            if low > high {
                let low_path = vb.field_path("Low");
                vb.add_message(
                    low_path,
                    Some(low.to_rfc3339()),
                    "Low must not be after High",
                );
            }
        }
    }
}
