use super::*;

#[test]
fn matrix_is_square_with_finder_corner() {
    let m = encode_qr(r#"{"ticketType":"vip"}"#).unwrap();
    assert!(m.width() >= 21);
    assert_eq!((m.width() - 17) % 4, 0);
    // Finder patterns start with a dark module in the top-left corner.
    assert!(m.is_dark(0, 0));
    assert!(m.is_dark(6, 0));
    assert!(!m.is_dark(7, 0));
    assert!(!m.is_dark(m.width(), 0));
}

#[test]
fn dark_modules_are_in_bounds() {
    let m = encode_qr("hello").unwrap();
    let n = m.dark_modules().count();
    assert!(n > 0);
    assert!(m.dark_modules().all(|(x, y)| m.is_dark(x, y)));
}

#[test]
fn oversized_payload_is_a_render_error() {
    let huge = "x".repeat(8_000);
    let err = encode_qr(&huge).unwrap_err();
    assert!(err.to_string().contains("render error:"));
}

#[test]
fn payload_past_medium_capacity_uses_low_correction() {
    // Version 40 holds 2331 bytes at M and 2953 at L.
    let m = encode_qr(&"x".repeat(2_600)).unwrap();
    assert_eq!(m.width(), 177);
}
