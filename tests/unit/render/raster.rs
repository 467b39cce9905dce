use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2">
<rect x="0" y="0" width="2" height="2" fill="#ff0000"/>
</svg>"##;

#[test]
fn rasterize_scales_and_unpremultiplies() {
    let tree = parse_svg(SQUARE, None).unwrap();
    let img = rasterize(&tree, 2.0).unwrap();
    assert_eq!(img.dimensions(), (8, 4));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(7, 3).0, [0, 0, 0, 0]);
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_svg("<svg", None).is_err());
}

#[test]
fn rasterize_rejects_bad_scale_and_huge_sizes() {
    let tree = parse_svg(SQUARE, None).unwrap();
    assert!(rasterize(&tree, 0.0).is_err());
    assert!(rasterize(&tree, f32::NAN).is_err());
    assert!(rasterize(&tree, 10_000.0).is_err());
}
