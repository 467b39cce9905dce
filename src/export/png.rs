use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::WizardConfig,
    foundation::error::TicketResult,
    render::{
        raster::{parse_svg, rasterize},
        ticket::render_ticket_svg,
    },
    ticket::record::TicketRecord,
};

/// File name of the downloaded ticket.
pub const TICKET_FILE_NAME: &str = "ticket.png";

/// Default pixel density of exported tickets.
pub const EXPORT_SCALE: f32 = 2.0;

/// Rasterize an SVG ticket and write it to `dir/ticket.png`.
///
/// The image is encoded into a sibling temporary file first and renamed into place, so a
/// failure never leaves a partial `ticket.png` behind.
#[tracing::instrument(skip(svg))]
pub fn export_ticket_as_image(svg: &str, dir: &Path, scale: f32) -> TicketResult<PathBuf> {
    let tree = parse_svg(svg, None)?;
    let img = rasterize(&tree, scale)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    let out = dir.join(TICKET_FILE_NAME);
    let tmp = dir.join(format!(".{TICKET_FILE_NAME}.partial"));

    let written = img
        .save_with_format(&tmp, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, &out)
                .with_context(|| format!("move png into '{}'", out.display()))
        });
    if let Err(err) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(err.into());
    }

    tracing::info!(
        path = %out.display(),
        width = img.width(),
        height = img.height(),
        "ticket exported"
    );
    Ok(out)
}

/// Render `record` and save it as `ticket.png` in the configured export directory.
///
/// This is the user-facing download action: failures are logged and reported as `None`.
pub fn download_ticket(record: &TicketRecord, cfg: &WizardConfig) -> Option<PathBuf> {
    let offer = record.values.ticket_type.and_then(|t| cfg.offer(t));
    let result = render_ticket_svg(record, &cfg.event, offer)
        .and_then(|svg| export_ticket_as_image(&svg, &cfg.export_dir, EXPORT_SCALE));
    match result {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::error!(error = %err, "ticket download failed");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
