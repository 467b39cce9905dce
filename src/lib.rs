//! ticket-wizard is a multi-step event ticket registration wizard.
//!
//! A booking walks three steps over one shared form:
//!
//! 1. **Ticket Selection**: tier and number of tickets
//! 2. **Attendee Details**: profile image (simulated upload), name, email, request
//! 3. **Ready**: the generated ticket, downloadable as `ticket.png`
//!
//! # Pipeline overview
//!
//! - [`WizardController`] owns the [`FormValues`] and step indices. `advance` only moves
//!   when every field declared by the active [`StepDefinition`] passes [`validate_field`].
//! - Leaving the second-to-last step materializes a [`TicketRecord`] (form snapshot plus a
//!   JSON code payload) and appends it to a [`TicketStore`].
//! - [`render_ticket_svg`] projects a record into an SVG ticket carrying a QR code of the
//!   payload and a UPC-A strip; [`export_ticket_as_image`] rasterizes it to PNG.
//! - [`UploadSimulator`] fakes the image transfer as a tick-driven state machine.
//!
//! The crate is synchronous and single-threaded; nothing here spawns timers or threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codes;
mod export;
mod form;
mod foundation;
mod render;
mod store;
mod ticket;
mod upload;
mod wizard;

/// Configuration: event details, ticket catalog, upload pacing, paths.
pub mod config;

pub use codes::qr::{QrMatrix, encode_qr};
pub use codes::upc::{UPCA_MODULES, Upca, check_digit};
pub use config::{EventInfo, Price, TicketOffer, UploadSettings, WizardConfig};
pub use export::png::{EXPORT_SCALE, TICKET_FILE_NAME, download_ticket, export_ticket_as_image};
pub use form::schema::{
    FieldCheck, FieldErrors, MAX_EMAIL_CHARS, MAX_IMAGE_REF_CHARS, MAX_NAME_CHARS,
    MAX_REQUEST_CHARS, TICKET_UNIT_RANGE, is_email_shaped, is_uri_shaped, validate_field,
    validate_fields,
};
pub use form::values::{DEFAULT_TICKET_UNIT, Field, FormValues, TicketType};
pub use foundation::error::{TicketError, TicketResult};
pub use render::raster::{MAX_RASTER_DIM, parse_svg, rasterize};
pub use render::ticket::{TICKET_HEIGHT, TICKET_WIDTH, escape_xml, initials, render_ticket_svg};
pub use store::json_file::JsonFileStore;
pub use store::repository::{InMemoryTicketStore, TicketStore};
pub use ticket::payload::{decode_payload, encode_payload};
pub use ticket::record::{TICKET_SCHEMA_VERSION, TicketRecord};
pub use upload::simulator::{LocalImageRef, SelectedFile, UploadSimulator, UploadState};
pub use wizard::controller::{Advance, SlideDirection, WizardController, WizardState};
pub use wizard::steps::{BOOKING_STEPS, StepDefinition, step_of};
