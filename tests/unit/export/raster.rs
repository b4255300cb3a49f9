use super::*;

const TINY: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2"><rect x="0" y="0" width="4" height="2" fill="#0d1117"/></svg>"##;

#[test]
fn rasterize_reports_scaled_dimensions() {
    let img = rasterize(TINY, 1.0).unwrap();
    assert_eq!((img.width, img.height), (4, 2));
    assert_eq!(img.data.len(), 4 * 2 * 4);
    assert_eq!(img.pixel(0, 0), Some([0x0d, 0x11, 0x17, 255]));
    assert_eq!(img.pixel(4, 0), None);

    let img = rasterize(TINY, 2.5).unwrap();
    assert_eq!((img.width, img.height), (10, 5));
}

#[test]
fn bad_scale_and_bad_document_fail() {
    assert!(matches!(
        rasterize(TINY, 0.0).unwrap_err(),
        CanvasError::Export(_)
    ));
    assert!(rasterize(TINY, f32::NAN).is_err());
    assert!(rasterize("<svg", 1.0).is_err());
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = [64u8, 0, 128, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 0, 255, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
}

#[test]
fn png_encoding_round_trips_dimensions() {
    let img = rasterize(TINY, 1.0).unwrap();
    let bytes = encode_png(&img).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (4, 2));
}
