use crate::foundation::error::{TicketError, TicketResult};

/// Square module matrix of an encoded QR symbol, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// Modules per side, quiet zone excluded.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `true` when the module at column `x`, row `y` is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Iterate dark module coordinates as `(x, y)`.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dark
            .iter()
            .enumerate()
            .filter(|(_, d)| **d)
            .map(|(i, _)| (i % self.width, i / self.width))
    }
}

/// Encode `payload` as a QR symbol.
///
/// Medium error correction is preferred; payloads that do not fit drop to low.
pub fn encode_qr(payload: &str) -> TicketResult<QrMatrix> {
    let bytes = payload.as_bytes();
    let code = match qrcode::QrCode::with_error_correction_level(bytes, qrcode::EcLevel::M) {
        Ok(code) => code,
        Err(qrcode::types::QrError::DataTooLong) => {
            qrcode::QrCode::with_error_correction_level(bytes, qrcode::EcLevel::L)
                .map_err(|e| TicketError::render(format!("qr encode failed: {e}")))?
        }
        Err(e) => return Err(TicketError::render(format!("qr encode failed: {e}"))),
    };
    let width = code.width();
    let dark = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();
    Ok(QrMatrix { width, dark })
}

#[cfg(test)]
#[path = "../../tests/unit/codes/qr.rs"]
mod tests;
