use super::*;

#[test]
fn numbers_are_compact() {
    assert_eq!(num(60.0), "60");
    assert_eq!(num(12.5), "12.5");
    assert_eq!(num(1.23456), "1.23");
    assert_eq!(num(-0.001), "0");
}

#[test]
fn escape_xml_special_chars() {
    assert_eq!(
        escape_xml(r#"Tom & "Jerry" <3 it's"#),
        "Tom &amp; &quot;Jerry&quot; &lt;3 it&apos;s"
    );
    assert_eq!(escape_xml("a\u{0}b"), "ab");
}

#[test]
fn writer_emits_canvas_and_rounded_rect() {
    let mut w = SvgWriter::new(Canvas::OG);
    w.rect(
        Rect::new(60.0, 60.0, 100.0, 100.0),
        8.0,
        Rgb8::new(0x25, 0x63, 0xeb),
    );
    let svg = w.finish();
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="630""#
    ));
    assert!(
        svg.contains(r##"<rect x="60" y="60" width="40" height="40" rx="8" fill="#2563eb"/>"##)
    );
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn writer_emits_weighted_text() {
    let mut w = SvgWriter::new(Canvas::OG);
    w.text_line(
        60.0,
        120.5,
        "Inter",
        56.0,
        FontWeight::Bold,
        Rgb8::new(0xf5, 0xf5, 0xf5),
        "A & B",
    );
    let svg = w.finish();
    assert!(svg.contains(r#"font-family="'Inter', sans-serif""#));
    assert!(svg.contains(r#"font-weight="700""#));
    assert!(svg.contains(r#"y="120.5""#));
    assert!(svg.contains(">A &amp; B</text>"));
}
