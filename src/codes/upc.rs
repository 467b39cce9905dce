//! UPC-A symbology.
//!
//! A symbol is 95 modules: guard `101`, six left digits (odd parity L-codes), centre
//! guard `01010`, six right digits (R-codes), guard `101`.

use crate::foundation::{
    error::{TicketError, TicketResult},
    math::Fnv1a64,
};

const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

/// Total modules in one UPC-A symbol.
pub const UPCA_MODULES: usize = 95;

/// A complete 12-digit UPC-A number (11 data digits + check digit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Upca {
    digits: [u8; 12],
}

impl Upca {
    /// Build from 11 data digits, appending the check digit.
    pub fn from_data_digits(data: [u8; 11]) -> TicketResult<Self> {
        if let Some(d) = data.iter().find(|d| **d > 9) {
            return Err(TicketError::validation(format!(
                "upc digit out of range: {d}"
            )));
        }
        Ok(Self::with_check_digit(data))
    }

    /// Derive a stable number from a code payload.
    pub fn from_payload(payload: &str) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(payload.as_bytes());
        let mut n = h.finish() % 100_000_000_000;

        let mut data = [0u8; 11];
        for slot in data.iter_mut().rev() {
            *slot = (n % 10) as u8;
            n /= 10;
        }
        Self::with_check_digit(data)
    }

    // Callers guarantee every digit is 0..=9.
    fn with_check_digit(data: [u8; 11]) -> Self {
        let mut digits = [0u8; 12];
        digits[..11].copy_from_slice(&data);
        digits[11] = check_digit(&data);
        Self { digits }
    }

    /// All twelve digits.
    pub fn digits(&self) -> [u8; 12] {
        self.digits
    }

    /// Human-readable text printed under the bars.
    pub fn text(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Bar pattern, `true` for a dark module.
    pub fn modules(&self) -> Vec<bool> {
        let mut out = Vec::with_capacity(UPCA_MODULES);
        push_bits(&mut out, 0b101, 3);
        for &d in &self.digits[..6] {
            push_bits(&mut out, L_CODES[usize::from(d)], 7);
        }
        push_bits(&mut out, 0b01010, 5);
        for &d in &self.digits[6..] {
            // R-codes are the bitwise complement of L-codes.
            push_bits(&mut out, !L_CODES[usize::from(d)] & 0x7f, 7);
        }
        push_bits(&mut out, 0b101, 3);
        out
    }
}

/// Standard UPC-A check digit over 11 data digits.
pub fn check_digit(data: &[u8; 11]) -> u8 {
    let odd: u32 = data.iter().step_by(2).map(|&d| u32::from(d)).sum();
    let even: u32 = data.iter().skip(1).step_by(2).map(|&d| u32::from(d)).sum();
    ((10 - (odd * 3 + even) % 10) % 10) as u8
}

fn push_bits(out: &mut Vec<bool>, bits: u8, width: u32) {
    for i in (0..width).rev() {
        out.push((bits >> i) & 1 == 1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codes/upc.rs"]
mod tests;
