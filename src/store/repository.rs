use serde_json::value::RawValue;

use crate::{
    foundation::error::{TicketError, TicketResult},
    ticket::record::{TICKET_SCHEMA_VERSION, TicketRecord},
};

/// Persisted list of completed registrations.
///
/// Append contract: read the existing list (empty when absent or unreadable), push the new
/// record, write the whole list back. Existing entries are carried over verbatim. There is
/// no locking and no dedup; concurrent writers race and the last write wins.
pub trait TicketStore {
    /// Decode every entry that matches the current record layout, oldest first.
    fn records(&self) -> TicketResult<Vec<TicketRecord>>;
    /// Append one record to the end of the list.
    fn append(&mut self, record: &TicketRecord) -> TicketResult<()>;
}

impl<S: TicketStore + ?Sized> TicketStore for &mut S {
    fn records(&self) -> TicketResult<Vec<TicketRecord>> {
        (**self).records()
    }

    fn append(&mut self, record: &TicketRecord) -> TicketResult<()> {
        (**self).append(record)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    entries: Vec<Box<RawValue>>,
}

impl InMemoryTicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a serialized list, as if read from a persisted slot.
    ///
    /// Unparseable input yields an empty store.
    pub fn from_json(json: &str) -> Self {
        Self {
            entries: parse_entries(json).unwrap_or_default(),
        }
    }

    /// Raw JSON text of every stored entry, oldest first.
    pub fn raw_entries(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.get()).collect()
    }

    /// Serialize the whole list the way a persisted slot would hold it.
    pub fn to_json(&self) -> TicketResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

impl TicketStore for InMemoryTicketStore {
    fn records(&self) -> TicketResult<Vec<TicketRecord>> {
        Ok(decode_entries(&self.entries))
    }

    fn append(&mut self, record: &TicketRecord) -> TicketResult<()> {
        self.entries.push(encode_entry(record)?);
        Ok(())
    }
}

pub(crate) fn parse_entries(json: &str) -> TicketResult<Vec<Box<RawValue>>> {
    serde_json::from_str(json)
        .map_err(|e| TicketError::storage(format!("ticket list is not a JSON array: {e}")))
}

pub(crate) fn encode_entry(record: &TicketRecord) -> TicketResult<Box<RawValue>> {
    let text = serde_json::to_string(record)?;
    Ok(RawValue::from_string(text)?)
}

// Entries from other layouts stay in the slot but are not surfaced.
pub(crate) fn decode_entries(entries: &[Box<RawValue>]) -> Vec<TicketRecord> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| match serde_json::from_str::<TicketRecord>(raw.get()) {
            Ok(rec) if rec.schema_version == TICKET_SCHEMA_VERSION => Some(rec),
            Ok(rec) => {
                tracing::warn!(
                    index = i,
                    version = rec.schema_version,
                    "skipping ticket entry with unsupported schema version"
                );
                None
            }
            Err(err) => {
                tracing::warn!(index = i, error = %err, "skipping unreadable ticket entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/store/repository.rs"]
mod tests;
