/// Convenience result type used across the wizard.
pub type TicketResult<T> = Result<T, TicketError>;

/// Top-level error taxonomy used by wizard APIs.
///
/// Field validation failures are not errors: they are reported as
/// [`crate::FieldCheck`] values and only block a step transition.
#[derive(thiserror::Error, Debug)]
pub enum TicketError {
    /// Invalid configuration or input that cannot be represented in the form.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors reading or writing the persisted ticket list.
    #[error("storage error: {0}")]
    Storage(String),

    /// Errors while projecting, rasterizing or encoding a ticket.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TicketError {
    /// Build a [`TicketError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TicketError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`TicketError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TicketError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TicketError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
