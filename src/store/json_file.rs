use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde_json::value::RawValue;

use crate::{
    foundation::error::{TicketError, TicketResult},
    store::repository::{TicketStore, decode_entries, encode_entry, parse_entries},
    ticket::record::TicketRecord,
};

/// Ticket list persisted as one JSON array in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the slot at `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the slot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Missing slot -> empty list. Unreadable contents (bad UTF-8 or bad JSON) are also
    // treated as empty so a corrupt file never blocks a booking; the next append
    // overwrites it.
    fn read_entries(&self) -> TicketResult<Vec<Box<RawValue>>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("read ticket store '{}'", self.path.display()))
                    .into());
            }
        };
        let parsed = String::from_utf8(bytes)
            .map_err(|e| TicketError::storage(format!("ticket list is not UTF-8: {e}")))
            .and_then(|text| {
                if text.trim().is_empty() {
                    Ok(Vec::new())
                } else {
                    parse_entries(&text)
                }
            });
        match parsed {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ticket store is unreadable; treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_entries(&self, entries: &[Box<RawValue>]) -> TicketResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create store directory '{}'", parent.display()))?;
        }
        let text = serde_json::to_string(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        let written = std::fs::write(&tmp, text)
            .with_context(|| format!("write ticket store '{}'", tmp.display()))
            .and_then(|()| {
                std::fs::rename(&tmp, &self.path)
                    .with_context(|| format!("replace ticket store '{}'", self.path.display()))
            });
        if let Err(err) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}

impl TicketStore for JsonFileStore {
    fn records(&self) -> TicketResult<Vec<TicketRecord>> {
        Ok(decode_entries(&self.read_entries()?))
    }

    fn append(&mut self, record: &TicketRecord) -> TicketResult<()> {
        let mut entries = self.read_entries()?;
        entries.push(encode_entry(record)?);
        self.write_entries(&entries)?;
        tracing::info!(
            path = %self.path.display(),
            total = entries.len(),
            "appended ticket record"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/json_file.rs"]
mod tests;
