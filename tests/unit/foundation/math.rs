use super::*;

#[test]
fn fnv_incremental_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"ticket");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"tic");
    b.write_bytes(b"ket");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_differs_on_extra_word() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"ticket");
    let mut b = a;
    b.write_u64(1);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 0, 255, 255, 255, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[255, 255, 255, 255]);
}
