use super::*;

#[test]
fn journey_canvas_matches_fixed_dimensions() {
    assert_eq!(Canvas::default(), Canvas::JOURNEY);
    assert_eq!(Canvas::JOURNEY.width, 5484);
    assert_eq!(Canvas::JOURNEY.height, 6855);
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn rgba8_len_counts_four_bytes_per_pixel() {
    let c = Canvas::new(3, 5).unwrap();
    assert_eq!(c.rgba8_len(), 60);
}
