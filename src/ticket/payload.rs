use crate::{
    form::values::FormValues,
    foundation::error::{TicketError, TicketResult},
};

/// Serialize form values into the opaque string carried by the ticket's scannable code.
pub fn encode_payload(values: &FormValues) -> TicketResult<String> {
    Ok(serde_json::to_string(values)?)
}

/// Parse a code payload back into form values.
pub fn decode_payload(payload: &str) -> TicketResult<FormValues> {
    serde_json::from_str(payload)
        .map_err(|e| TicketError::serde(format!("invalid ticket code payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/ticket/payload.rs"]
mod tests;
