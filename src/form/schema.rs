//! Field-level validation rules.
//!
//! Every rule is a pure function of the current [`FormValues`]; nothing here mutates state
//! or fails hard. Callers decide what a failed check blocks (only step transitions).

use std::collections::BTreeMap;

use crate::form::values::{Field, FormValues};

/// Longest accepted attendee name, in characters.
pub const MAX_NAME_CHARS: usize = 80;

/// Longest accepted special request, in characters.
pub const MAX_REQUEST_CHARS: usize = 250;

/// Longest accepted profile image reference, in characters.
pub const MAX_IMAGE_REF_CHARS: usize = 200;

/// Longest accepted email address (RFC 5321 path limit).
pub const MAX_EMAIL_CHARS: usize = 254;

/// Units offered by the quantity dropdown.
pub const TICKET_UNIT_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// Outcome of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCheck {
    /// Field that was checked.
    pub field: Field,
    /// Human-readable failure message, `None` when the value is valid.
    pub message: Option<String>,
}

impl FieldCheck {
    fn pass(field: Field) -> Self {
        Self {
            field,
            message: None,
        }
    }

    fn fail(field: Field, msg: &str) -> Self {
        Self {
            field,
            message: Some(msg.to_string()),
        }
    }

    /// `true` when the field passed.
    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }
}

/// Inline error messages keyed by field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validate a single field against its rule.
pub fn validate_field(field: Field, values: &FormValues) -> FieldCheck {
    match field {
        Field::TicketType => match values.ticket_type {
            Some(_) => FieldCheck::pass(field),
            None => FieldCheck::fail(field, "Select a ticket type!"),
        },
        Field::TicketUnit => match values.ticket_unit {
            None => FieldCheck::fail(field, "Select the number of tickets!"),
            Some(n) if !TICKET_UNIT_RANGE.contains(&n) => {
                FieldCheck::fail(field, "You can book between 1 and 3 tickets!")
            }
            Some(_) => FieldCheck::pass(field),
        },
        Field::AttendeeName => {
            let name = values.attendee_name.trim();
            if name.is_empty() {
                FieldCheck::fail(field, "Enter your full name please!")
            } else if name.chars().count() > MAX_NAME_CHARS {
                FieldCheck::fail(field, "Name must be at most 80 characters!")
            } else {
                FieldCheck::pass(field)
            }
        }
        Field::AttendeeEmail => {
            let email = values.attendee_email.trim();
            if email.is_empty() {
                FieldCheck::fail(field, "Email field cannot be empty!")
            } else if !is_email_shaped(email) {
                FieldCheck::fail(field, "Email format is not valid!")
            } else {
                FieldCheck::pass(field)
            }
        }
        Field::SpecialRequest => {
            if values.special_request.trim().chars().count() > MAX_REQUEST_CHARS {
                FieldCheck::fail(field, "Special request must be at most 250 characters!")
            } else {
                FieldCheck::pass(field)
            }
        }
        Field::ProfileImageRef => {
            let uri = values.profile_image_ref.trim();
            if uri.is_empty() {
                FieldCheck::fail(field, "Profile Image field cannot be empty!")
            } else if uri.chars().count() > MAX_IMAGE_REF_CHARS {
                FieldCheck::fail(field, "Image reference is too long!")
            } else if !is_uri_shaped(uri) {
                FieldCheck::fail(field, "Upload your Image please!")
            } else {
                FieldCheck::pass(field)
            }
        }
    }
}

/// Validate `fields` in order and collect the failures.
///
/// Fields outside the list are never looked at, so later steps are not validated early.
pub fn validate_fields(fields: &[Field], values: &FormValues) -> FieldErrors {
    fields
        .iter()
        .map(|&f| validate_field(f, values))
        .filter_map(|c| c.message.map(|m| (c.field, m)))
        .collect()
}

/// Structural email check: `local@domain.tld` without whitespace, at most 254 characters.
pub fn is_email_shaped(s: &str) -> bool {
    if s.len() > MAX_EMAIL_CHARS || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c));
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    labels_ok && tld_ok
}

/// `scheme:rest` where scheme follows RFC 3986 and rest is non-empty, with no whitespace or
/// control characters.
pub fn is_uri_shaped(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    first_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
        && !s.chars().any(|c| c.is_whitespace() || c.is_control())
}

#[cfg(test)]
#[path = "../../tests/unit/form/schema.rs"]
mod tests;
