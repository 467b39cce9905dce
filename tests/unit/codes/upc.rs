use super::*;

#[test]
fn check_digit_matches_known_number() {
    // 036000291452 is the canonical UPC-A example.
    assert_eq!(check_digit(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]), 2);
    let upc = Upca::from_data_digits([0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]).unwrap();
    assert_eq!(upc.text(), "036000291452");
}

#[test]
fn rejects_non_decimal_digits() {
    assert!(Upca::from_data_digits([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).is_err());
}

#[test]
fn modules_have_guards_and_fixed_length() {
    let upc = Upca::from_data_digits([0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]).unwrap();
    let m = upc.modules();
    assert_eq!(m.len(), UPCA_MODULES);
    assert_eq!(&m[..3], &[true, false, true]);
    assert_eq!(&m[45..50], &[false, true, false, true, false]);
    assert_eq!(&m[92..], &[true, false, true]);
    // First left digit is 0 -> L-code 0001101.
    assert_eq!(&m[3..10], &[false, false, false, true, true, false, true]);
    // First right digit is 2 -> R-code 1101100.
    assert_eq!(&m[50..57], &[true, true, false, true, true, false, false]);
}

#[test]
fn payload_numbers_are_stable_and_valid() {
    let a = Upca::from_payload(r#"{"ticketType":"vip"}"#);
    let b = Upca::from_payload(r#"{"ticketType":"vip"}"#);
    let c = Upca::from_payload(r#"{"ticketType":"vvip"}"#);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let d = a.digits();
    let mut data = [0u8; 11];
    data.copy_from_slice(&d[..11]);
    assert_eq!(check_digit(&data), d[11]);
    assert!(d.iter().all(|x| *x <= 9));
}
