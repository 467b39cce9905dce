//! Wizard configuration.
//!
//! Loaded from a JSON file when one is given, otherwise [`WizardConfig::default`] describes
//! the bundled event. Everything here is static for the lifetime of a booking session.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;

use crate::{
    form::values::TicketType,
    foundation::error::{TicketError, TicketResult},
};

/// Event details printed on the ticket header.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventInfo {
    /// Event title.
    pub name: String,
    /// One-line pitch shown below the title.
    pub tagline: String,
    /// Venue line.
    pub location: String,
    /// Date and time line, preformatted.
    pub date_line: String,
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            name: "Techember Fest \u{201d}25".to_string(),
            tagline: "Join us for an unforgettable experience at Techember Fest! Secure your spot now."
                .to_string(),
            location: "04 Rumens road, Ikoyi, Lagos".to_string(),
            date_line: "March 15, 2025 | 7:00 PM".to_string(),
        }
    }
}

/// Price of one ticket tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Price {
    /// No charge.
    Free,
    /// Whole US dollars.
    Usd(u32),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Free => f.write_str("Free"),
            Price::Usd(n) => write!(f, "${n}"),
        }
    }
}

/// One selectable tier in the ticket picker.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketOffer {
    /// Tier this offer sells.
    pub ticket_type: TicketType,
    /// Price per ticket.
    pub price: Price,
    /// Tickets left, as advertised.
    pub remaining: u32,
}

/// Simulated upload pacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UploadSettings {
    /// Progress added per tick, in percent.
    pub step_percent: u8,
    /// Delay between ticks, in milliseconds.
    pub tick_interval_ms: u64,
}

impl UploadSettings {
    /// Tick delay as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// A zero step would never finish an upload.
    pub fn validate(&self) -> TicketResult<()> {
        if !(1..=100).contains(&self.step_percent) {
            return Err(TicketError::validation(format!(
                "upload step must be within 1..=100 percent, got {}",
                self.step_percent
            )));
        }
        Ok(())
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            step_percent: 10,
            tick_interval_ms: 100,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Event shown on the ticket.
    pub event: EventInfo,
    /// Ticket picker entries, one per tier.
    pub catalog: Vec<TicketOffer>,
    /// Upload simulation pacing.
    pub upload: UploadSettings,
    /// JSON file holding the persisted ticket list.
    pub store_path: PathBuf,
    /// Directory receiving `ticket.png`.
    pub export_dir: PathBuf,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            event: EventInfo::default(),
            catalog: vec![
                TicketOffer {
                    ticket_type: TicketType::Regular,
                    price: Price::Free,
                    remaining: 20,
                },
                TicketOffer {
                    ticket_type: TicketType::Vip,
                    price: Price::Usd(50),
                    remaining: 20,
                },
                TicketOffer {
                    ticket_type: TicketType::Vvip,
                    price: Price::Usd(150),
                    remaining: 20,
                },
            ],
            upload: UploadSettings::default(),
            store_path: PathBuf::from("tickets.json"),
            export_dir: PathBuf::from("."),
        }
    }
}

impl WizardConfig {
    /// Read and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> TicketResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: WizardConfig = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> TicketResult<()> {
        if self.event.name.trim().is_empty() {
            return Err(TicketError::validation("event name must not be empty"));
        }
        for ty in TicketType::ALL {
            let n = self.catalog.iter().filter(|o| o.ticket_type == ty).count();
            if n != 1 {
                return Err(TicketError::validation(format!(
                    "catalog must list ticket type '{ty}' exactly once (found {n})"
                )));
            }
        }
        self.upload.validate()
    }

    /// Catalog entry for `ty`.
    pub fn offer(&self, ty: TicketType) -> Option<&TicketOffer> {
        self.catalog.iter().find(|o| o.ticket_type == ty)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
