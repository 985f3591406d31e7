//! Participants: the people and organisations named by a clinical document,
//! and the participation wrapper tying them to a role and period.

use serde::{Deserialize, Serialize};

use crate::types::{CdaInterval, CodableText, InstanceIdentifier};
use crate::validation::{ChoiceSlot, Validatable, ValidationBuilder, ValidationMessage};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonName {
    pub titles: Vec<String>,
    pub given_names: Vec<String>,
    pub family_name: Option<String>,
}

impl PersonName {
    pub fn new(family_name: impl Into<String>) -> Self {
        Self {
            titles: Vec::new(),
            given_names: Vec::new(),
            family_name: Some(family_name.into()),
        }
    }
}

impl Validatable for PersonName {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("FamilyName", &self.family_name);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    pub person_names: Vec<PersonName>,
    pub identifiers: Vec<InstanceIdentifier>,
}

impl Validatable for Person {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.range("PersonName", &self.person_names, 1, None);
        for (index, person_name) in self.person_names.iter().enumerate() {
            let item_path = vb.indexed_path("PersonName", index);
            person_name.validate(&item_path, vb.messages());
        }
        for (index, identifier) in self.identifiers.iter().enumerate() {
            let item_path = vb.indexed_path("Identifier", index);
            identifier.validate(&item_path, vb.messages());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Organisation {
    pub name: Option<String>,
    pub department: Option<String>,
    pub identifiers: Vec<InstanceIdentifier>,
}

impl Validatable for Organisation {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Name", &self.name);
        for (index, identifier) in self.identifiers.iter().enumerate() {
            let item_path = vb.indexed_path("Identifier", index);
            identifier.validate(&item_path, vb.messages());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddressPurpose {
    #[default]
    Undefined,
    Business,
    Residential,
    TemporaryAccommodation,
    MailingOrPostal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub purpose: AddressPurpose,
    pub street_address_lines: Vec<String>,
    pub suburb: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl Validatable for Address {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.no_match("Purpose", &self.purpose, &AddressPurpose::Undefined);
        if let Some(postcode) = &self.postcode {
            let well_formed = regex::Regex::new(r"^\d{4}$")
                .map(|re| re.is_match(postcode))
                .unwrap_or(false);
            if !well_formed {
                let postcode_path = vb.field_path("Postcode");
                vb.add_message(
                    postcode_path,
                    Some(postcode.clone()),
                    "Postcode must be four digits",
                );
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElectronicCommunicationMedium {
    #[default]
    Undefined,
    Telephone,
    Mobile,
    Fax,
    Email,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectronicCommunicationDetail {
    pub address: Option<String>,
    pub medium: ElectronicCommunicationMedium,
}

impl ElectronicCommunicationDetail {
    pub fn new(address: impl Into<String>, medium: ElectronicCommunicationMedium) -> Self {
        Self {
            address: Some(address.into()),
            medium,
        }
    }
}

impl Validatable for ElectronicCommunicationDetail {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Address", &self.address);
        vb.no_match(
            "Medium",
            &self.medium,
            &ElectronicCommunicationMedium::Undefined,
        );
    }
}

/// The subject of a participation: a person or an organisation, never both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Participant {
    pub person: Option<Person>,
    pub organisation: Option<Organisation>,
    pub addresses: Vec<Address>,
    pub electronic_communication_details: Vec<ElectronicCommunicationDetail>,
}

impl Validatable for Participant {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice(&[
            ChoiceSlot::value("Person", &self.person),
            ChoiceSlot::value("Organisation", &self.organisation),
        ]);
        if let Some(person) = &self.person {
            person.validate(&vb.field_path("Person"), vb.messages());
        }
        if let Some(organisation) = &self.organisation {
            organisation.validate(&vb.field_path("Organisation"), vb.messages());
        }
        for (index, address) in self.addresses.iter().enumerate() {
            let item_path = vb.indexed_path("Address", index);
            address.validate(&item_path, vb.messages());
        }
        for (index, detail) in self.electronic_communication_details.iter().enumerate() {
            let item_path = vb.indexed_path("ElectronicCommunicationDetail", index);
            detail.validate(&item_path, vb.messages());
        }
    }
}

/// A role-qualified participant, e.g. the document author or the custodian.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Participation {
    pub role: Option<CodableText>,
    pub participant: Option<Participant>,
    pub participation_period: Option<CdaInterval>,
}

impl Validatable for Participation {
    fn validate(&self, path: &str, messages: &mut Vec<ValidationMessage>) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("Role", &self.role) {
            if let Some(role) = &self.role {
                role.validate(&vb.field_path("Role"), vb.messages());
            }
        }
        if vb.required("Participant", &self.participant) {
            if let Some(participant) = &self.participant {
                participant.validate(&vb.field_path("Participant"), vb.messages());
            }
        }
        if let Some(period) = &self.participation_period {
            period.validate(&vb.field_path("ParticipationPeriod"), vb.messages());
        }
    }
}
