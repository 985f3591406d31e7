use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CodableText, InstanceIdentifier, Quantity};
use crate::validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};

/// An anatomical location: either a specific named location or a free-text
/// description. A side qualifies the named location only, so a description
/// combined with a side is rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnatomicalSite {
    pub name_of_location: Option<CodableText>,
    pub side: Option<CodableText>,
    pub description: Option<String>,
}

impl Validatable for AnatomicalSite {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice(&[
            ChoiceSlot::value("NameOfLocation", &self.name_of_location),
            ChoiceSlot::value("Description", &self.description),
        ]);
        if self.description.is_some() && self.side.is_some() {
            let name = vb.path_name().to_string();
            vb.add_message(
                name,
                None,
                "a Description and a Side cannot both be specified",
            );
        }
        if let Some(name_of_location) = &self.name_of_location {
            name_of_location.validate(&vb.field_path("NameOfLocation"), vb.messages());
        }
        if let Some(side) = &self.side {
            side.validate(&vb.field_path("Side"), vb.messages());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicalDetails {
    pub weight_or_volume: Option<Quantity>,
    pub description: Option<String>,
}

impl Validatable for PhysicalDetails {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if let Some(weight_or_volume) = &self.weight_or_volume {
            weight_or_volume.validate(&vb.field_path("WeightOrVolume"), vb.messages());
        }
    }
}

/// Details of a collected specimen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecimenDetail {
    pub specimen_tissue_type: Option<CodableText>,
    pub anatomical_sites: Vec<AnatomicalSite>,
    pub physical_details: Vec<PhysicalDetails>,
    pub collection_date_time: Option<DateTime<Utc>>,
    pub specimen_identifier: Option<InstanceIdentifier>,
}

impl Validatable for SpecimenDetail {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        // The CDA mapping allows a single physical details element.
        if self.physical_details.len() > 1 {
            let details_path = vb.field_path("PhysicalDetails");
            vb.add_message(
                details_path,
                Some(self.physical_details.len().to_string()),
                "only one physical details item can be specified",
            );
        }
        if let Some(specimen_tissue_type) = &self.specimen_tissue_type {
            specimen_tissue_type.validate(&vb.field_path("SpecimenTissueType"), vb.messages());
        }
        for (index, anatomical_site) in self.anatomical_sites.iter().enumerate() {
            let item_path = vb.indexed_path("AnatomicalSite", index);
            anatomical_site.validate(&item_path, vb.messages());
        }
        for (index, physical_details) in self.physical_details.iter().enumerate() {
            let item_path = vb.indexed_path("PhysicalDetails", index);
            physical_details.validate(&item_path, vb.messages());
        }
        if let Some(specimen_identifier) = &self.specimen_identifier {
            specimen_identifier.validate(&vb.field_path("SpecimenIdentifier"), vb.messages());
        }
    }
}
