use chrono::{DateTime, Utc};

use crate::{
    form::values::FormValues,
    foundation::error::TicketResult,
    ticket::payload::encode_payload,
};

/// Schema version written into every new [`TicketRecord`].
pub const TICKET_SCHEMA_VERSION: u32 = 1;

/// Finalized, persisted registration.
///
/// Created once when the wizard leaves its penultimate step and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    /// Layout version of this record.
    pub schema_version: u32,
    /// Snapshot of the submitted form.
    #[serde(flatten)]
    pub values: FormValues,
    /// Serialized form values rendered as the ticket's QR code.
    pub code_payload: String,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
}

impl TicketRecord {
    /// Snapshot `values` into a new record stamped with `created_at`.
    pub fn materialize(values: &FormValues, created_at: DateTime<Utc>) -> TicketResult<Self> {
        Ok(Self {
            schema_version: TICKET_SCHEMA_VERSION,
            values: values.clone(),
            code_payload: encode_payload(values)?,
            created_at,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ticket/record.rs"]
mod tests;
