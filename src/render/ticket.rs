//! Ticket projection.
//!
//! Turns a [`TicketRecord`] plus event details into a standalone SVG document. The output
//! is a pure function of its inputs; no fonts or files are touched here.

use std::fmt::{self, Write as _};

use crate::{
    codes::{
        qr::{QrMatrix, encode_qr},
        upc::Upca,
    },
    config::{EventInfo, TicketOffer},
    foundation::error::{TicketError, TicketResult},
    ticket::record::TicketRecord,
};

/// Logical ticket width in SVG user units.
pub const TICKET_WIDTH: u32 = 300;
/// Logical ticket height in SVG user units.
pub const TICKET_HEIGHT: u32 = 600;

const BG: &str = "#041E23";
const PANEL: &str = "#08343C";
const ACCENT: &str = "#24A0B5";
const TEXT: &str = "#FFFFFF";
const MUTED: &str = "#9DB7BB";
const FONT: &str = "font-family=\"Roboto, sans-serif\"";

const QR_SIZE: f64 = 120.0;
const QR_TOP: f64 = 368.0;
const BARCODE_TOP: f64 = 512.0;
const BARCODE_HEIGHT: f64 = 40.0;
const REQUEST_MAX_CHARS: usize = 48;

/// Render `record` as an SVG ticket.
///
/// The QR code carries the record's code payload; the UPC-A strip carries a number derived
/// from the same payload.
pub fn render_ticket_svg(
    record: &TicketRecord,
    event: &EventInfo,
    offer: Option<&TicketOffer>,
) -> TicketResult<String> {
    let qr = encode_qr(&record.code_payload)?;
    let upc = Upca::from_payload(&record.code_payload);
    let mut svg = String::with_capacity(16 * 1024);
    write_ticket(&mut svg, record, event, offer, &qr, &upc)
        .map_err(|e| TicketError::render(format!("svg write failed: {e}")))?;
    Ok(svg)
}

fn write_ticket(
    svg: &mut String,
    record: &TicketRecord,
    event: &EventInfo,
    offer: Option<&TicketOffer>,
    qr: &QrMatrix,
    upc: &Upca,
) -> fmt::Result {
    let v = &record.values;
    let w = TICKET_WIDTH;
    let h = TICKET_HEIGHT;
    write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    write!(
        svg,
        r#"<rect x="1" y="1" width="{}" height="{}" rx="18" fill="{BG}" stroke="{ACCENT}" stroke-width="2"/>"#,
        w - 2,
        h - 2
    )?;

    // Header.
    text(svg, 150.0, 42.0, 24, TEXT, "middle", &event.name)?;
    text(svg, 150.0, 64.0, 10, MUTED, "middle", &format!("\u{1F4CD} {}", event.location))?;
    text(svg, 150.0, 80.0, 10, MUTED, "middle", &format!("\u{1F4C5} {}", event.date_line))?;

    // Avatar: initials badge.
    write!(
        svg,
        r#"<circle cx="150" cy="130" r="34" fill="{PANEL}" stroke="{ACCENT}" stroke-width="3"/>"#
    )?;
    text(svg, 150.0, 139.0, 24, TEXT, "middle", &initials(&v.attendee_name))?;

    // Detail grid.
    write!(
        svg,
        r##"<rect x="20" y="180" width="260" height="172" rx="8" fill="{PANEL}" stroke="#133D44"/>"##
    )?;
    let ticket_type = v.ticket_type.map(|t| t.label()).unwrap_or("-");
    let units = v.ticket_unit.map(|u| u.to_string()).unwrap_or_else(|| "-".into());
    let price = offer
        .map(|o| o.price.to_string())
        .unwrap_or_else(|| "-".into());
    cell(svg, 30.0, 198.0, "Name", &v.attendee_name)?;
    cell(svg, 160.0, 198.0, "Email", &v.attendee_email)?;
    cell(svg, 30.0, 240.0, "Ticket Type", ticket_type)?;
    cell(svg, 160.0, 240.0, "Ticket for", &units)?;
    cell(svg, 30.0, 282.0, "Price", &price)?;
    let request = if v.special_request.trim().is_empty() {
        "Nil".to_string()
    } else {
        truncate_chars(v.special_request.trim(), REQUEST_MAX_CHARS)
    };
    cell(svg, 30.0, 320.0, "Special request", &request)?;

    // QR code.
    let modules = qr.width() as f64;
    let unit = QR_SIZE / modules;
    let qr_left = (f64::from(w) - QR_SIZE) / 2.0;
    write!(
        svg,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{TEXT}"/>"#,
        qr_left - unit * 2.0,
        QR_TOP - unit * 2.0,
        QR_SIZE + unit * 4.0,
        QR_SIZE + unit * 4.0
    )?;
    svg.push_str(r##"<path fill="#000000" d=""##);
    for (x, y) in qr.dark_modules() {
        write!(
            svg,
            "M{:.3} {:.3}h{:.3}v{:.3}h-{:.3}z",
            qr_left + x as f64 * unit,
            QR_TOP + y as f64 * unit,
            unit,
            unit,
            unit
        )?;
    }
    svg.push_str(r#""/>"#);

    // UPC-A strip.
    let bars = upc.modules();
    let bar_w = 2.0;
    let bar_left = (f64::from(w) - bars.len() as f64 * bar_w) / 2.0;
    write!(svg, r#"<path fill="{TEXT}" d=""#)?;
    for (i, _) in bars.iter().enumerate().filter(|(_, dark)| **dark) {
        write!(
            svg,
            "M{:.1} {BARCODE_TOP}h{bar_w}v{BARCODE_HEIGHT}h-{bar_w}z",
            bar_left + i as f64 * bar_w
        )?;
    }
    svg.push_str(r#""/>"#);
    text(
        svg,
        150.0,
        BARCODE_TOP + BARCODE_HEIGHT + 14.0,
        11,
        TEXT,
        "middle",
        &upc.text(),
    )?;

    svg.push_str("</svg>");
    Ok(())
}

fn text(
    svg: &mut String,
    x: f64,
    y: f64,
    size: u32,
    fill: &str,
    anchor: &str,
    body: &str,
) -> fmt::Result {
    write!(
        svg,
        r#"<text x="{x}" y="{y}" font-size="{size}" {FONT} fill="{fill}" text-anchor="{anchor}">{}</text>"#,
        escape_xml(body)
    )
}

fn cell(svg: &mut String, x: f64, y: f64, label: &str, value: &str) -> fmt::Result {
    text(svg, x, y, 9, MUTED, "start", label)?;
    text(svg, x, y + 16.0, 11, TEXT, "start", &truncate_chars(value, 22))
}

/// Up to two uppercase initials from a full name; `?` when empty.
pub fn initials(name: &str) -> String {
    let out: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if out.is_empty() { "?".to_string() } else { out }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

/// Escape text for use in SVG character data and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/ticket.rs"]
mod tests;
