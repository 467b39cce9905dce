use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Ticket tiers offered by the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    /// General admission.
    Regular,
    /// VIP access.
    Vip,
    /// VVIP access.
    Vvip,
}

impl TicketType {
    /// Every tier, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Regular, TicketType::Vip, TicketType::Vvip];

    /// Stable lowercase identifier used in JSON and CLI input.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Regular => "regular",
            TicketType::Vip => "vip",
            TicketType::Vvip => "vvip",
        }
    }

    /// Human label printed on the ticket.
    pub fn label(self) -> &'static str {
        match self {
            TicketType::Regular => "Regular Access",
            TicketType::Vip => "VIP Access",
            TicketType::Vvip => "VVIP Access",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(TicketType::Regular),
            "vip" => Ok(TicketType::Vip),
            "vvip" => Ok(TicketType::Vvip),
            other => Err(format!("unknown ticket type '{other}'")),
        }
    }
}

/// Identifiers of every field captured by the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Selected ticket tier.
    TicketType,
    /// Number of tickets.
    TicketUnit,
    /// Attendee full name.
    AttendeeName,
    /// Attendee email address.
    AttendeeEmail,
    /// Free-form request ("About the project" box).
    SpecialRequest,
    /// Reference to the uploaded profile image.
    ProfileImageRef,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 6] = [
        Field::TicketType,
        Field::TicketUnit,
        Field::AttendeeName,
        Field::AttendeeEmail,
        Field::SpecialRequest,
        Field::ProfileImageRef,
    ];

    /// JSON / form-control name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::TicketType => "ticketType",
            Field::TicketUnit => "ticketUnit",
            Field::AttendeeName => "attendeeName",
            Field::AttendeeEmail => "attendeeEmail",
            Field::SpecialRequest => "specialRequest",
            Field::ProfileImageRef => "profileImageRef",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default number of tickets preselected in the unit dropdown.
pub const DEFAULT_TICKET_UNIT: u32 = 1;

/// Accumulated wizard input.
///
/// Values are mutated incrementally while the user moves through the steps and are only
/// guaranteed to be complete once every step passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Selected tier; `None` until the user picks one.
    #[serde(default, deserialize_with = "deserialize_ticket_type")]
    pub ticket_type: Option<TicketType>,
    /// Number of tickets; `None` when the raw input was not an integer.
    #[serde(default = "default_ticket_unit")]
    pub ticket_unit: Option<u32>,
    /// Attendee full name.
    #[serde(default)]
    pub attendee_name: String,
    /// Attendee email address.
    #[serde(default)]
    pub attendee_email: String,
    /// Optional free-form request.
    #[serde(default)]
    pub special_request: String,
    /// URI of the uploaded profile image, empty when nothing is attached.
    #[serde(default)]
    pub profile_image_ref: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            ticket_type: None,
            ticket_unit: default_ticket_unit(),
            attendee_name: String::new(),
            attendee_email: String::new(),
            special_request: String::new(),
            profile_image_ref: String::new(),
        }
    }
}

impl FormValues {
    /// Apply raw control input to `field`.
    ///
    /// Input is never rejected here: unknown ticket types and non-numeric units are stored
    /// as empty values so the validator reports them when the step is submitted.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::TicketType => self.ticket_type = raw.parse().ok(),
            Field::TicketUnit => self.ticket_unit = raw.trim().parse().ok(),
            Field::AttendeeName => self.attendee_name = raw.to_string(),
            Field::AttendeeEmail => self.attendee_email = raw.to_string(),
            Field::SpecialRequest => self.special_request = raw.to_string(),
            Field::ProfileImageRef => self.profile_image_ref = raw.to_string(),
        }
    }

    /// Render the current value of `field` as it would appear in its form control.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::TicketType => self
                .ticket_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            Field::TicketUnit => self.ticket_unit.map(|u| u.to_string()).unwrap_or_default(),
            Field::AttendeeName => self.attendee_name.clone(),
            Field::AttendeeEmail => self.attendee_email.clone(),
            Field::SpecialRequest => self.special_request.clone(),
            Field::ProfileImageRef => self.profile_image_ref.clone(),
        }
    }
}

fn default_ticket_unit() -> Option<u32> {
    Some(DEFAULT_TICKET_UNIT)
}

// Radio groups report "no selection" as null or "", both mean "not chosen yet".
fn deserialize_ticket_type<'de, D>(de: D) -> Result<Option<TicketType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/values.rs"]
mod tests;
