use super::*;

#[test]
fn canvas_validation() {
    assert!(Canvas::new(0, 630).is_err());
    assert!(Canvas::new(1200, 0).is_err());
    assert_eq!(Canvas::new(1200, 630).unwrap(), Canvas::OG);
}

#[test]
fn canvas_height_for_width_keeps_aspect() {
    assert_eq!(Canvas::OG.height_for_width(1200), 630);
    assert_eq!(Canvas::OG.height_for_width(600), 315);
}

#[test]
fn color_parse_hex_forms() {
    assert_eq!(Rgb8::parse("#0a0a0a").unwrap(), Rgb8::new(10, 10, 10));
    assert_eq!(Rgb8::parse("#FFF").unwrap(), Rgb8::new(255, 255, 255));
    assert_eq!(Rgb8::parse("#2563eb").unwrap().to_hex(), "#2563eb");
}

#[test]
fn color_parse_rgb_function() {
    assert_eq!(
        Rgb8::parse("rgb(37, 99, 235)").unwrap(),
        Rgb8::new(37, 99, 235)
    );
    assert!(Rgb8::parse("rgb(1, 2)").is_err());
    assert!(Rgb8::parse("rgb(1, 2, 300)").is_err());
}

#[test]
fn color_parse_rejects_names_and_garbage() {
    assert!(Rgb8::parse("white").is_err());
    assert!(Rgb8::parse("#12").is_err());
    assert!(Rgb8::parse("#gggggg").is_err());
}
