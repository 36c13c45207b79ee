use super::*;
use crate::fonts::FontWeight;
use crate::layout::style::FlexDirection;

fn text_style() -> Style {
    Style::new().with_font(20.0, FontWeight::Regular)
}

#[test]
fn text_rejects_box_attributes() {
    let style = text_style().with_gap(4.0);
    let err = LayoutNode::text(style, "x").unwrap_err();
    assert!(matches!(err, OgError::Configuration(_)));
    assert!(err.to_string().contains("gap"));
}

#[test]
fn box_rejects_text_attributes() {
    let style = Style::flex(FlexDirection::Row).with_font(20.0, FontWeight::Bold);
    let err = LayoutNode::boxed(style, vec![]).unwrap_err();
    assert!(err.to_string().contains("fontSize"));
}

#[test]
fn box_requires_display() {
    assert!(LayoutNode::boxed(Style::new(), vec![]).is_err());
}

#[test]
fn text_requires_font_size() {
    assert!(LayoutNode::text(Style::new(), "x").is_err());
}

#[test]
fn shared_attributes_allowed_on_both() {
    let bg = crate::foundation::core::Rgb8::new(0, 0, 0);
    LayoutNode::text(text_style().with_background(bg).with_radius(6.0), "pill").unwrap();
    LayoutNode::boxed(
        Style::flex(FlexDirection::Column)
            .with_background(bg)
            .with_max_width(10.0),
        vec![],
    )
    .unwrap();
}

#[test]
fn walk_is_preorder_in_child_order() {
    let a = LayoutNode::text(text_style(), "a").unwrap();
    let b = LayoutNode::text(text_style(), "b").unwrap();
    let c = LayoutNode::text(text_style(), "c").unwrap();
    let inner = LayoutNode::boxed(Style::flex(FlexDirection::Row), vec![b, c]).unwrap();
    let root = LayoutNode::boxed(Style::flex(FlexDirection::Column), vec![a, inner]).unwrap();
    assert_eq!(root.texts(), vec!["a", "b", "c"]);
    assert_eq!(root.walk().len(), 5);
}

#[test]
fn serializes_with_kind_tag() {
    let node = LayoutNode::text(text_style(), "hi").unwrap();
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["kind"], "text");
    assert_eq!(json["content"], "hi");
    assert_eq!(json["style"]["fontSize"], "20px");
}
