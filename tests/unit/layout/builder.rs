use super::*;
use crate::request::PageKind;

fn sections(tree: &LayoutNode) -> (&LayoutNode, &LayoutNode, &LayoutNode) {
    let [header, body, footer] = tree.children() else {
        panic!("expected three sections");
    };
    (header, body, footer)
}

fn brand() -> Brand {
    Brand::default()
}

#[test]
fn website_title_only() {
    let tree = build_tree(&ImageRequest::website("Hello World"), &brand()).unwrap();
    let (header, body, footer) = sections(&tree);

    assert_eq!(header.texts(), vec!["AB", "adrien.brage.fr"]);
    assert_eq!(body.children().len(), 1);
    assert_eq!(body.texts(), vec!["Hello World"]);
    assert_eq!(body.children()[0].style().font_size, Some(56.0));
    assert!(footer.children().is_empty());
}

#[test]
fn root_is_full_canvas_column() {
    let tree = build_tree(&ImageRequest::website("x"), &brand()).unwrap();
    let style = tree.style();
    assert_eq!(style.flex_direction, Some(FlexDirection::Column));
    assert_eq!(style.justify_content, Some(JustifyContent::SpaceBetween));
    assert_eq!(style.padding, Some(Edges::all(60.0)));
    assert_eq!(style.width, Some(Length::Percent(100.0)));
}

#[test]
fn empty_title_is_rejected() {
    let err = build_tree(&ImageRequest::website(""), &brand()).unwrap_err();
    assert!(matches!(err, OgError::Configuration(_)));
}

#[test]
fn article_scenario_long_fields() {
    let req = ImageRequest::article("A".repeat(50), "March 1, 2024")
        .with_description("A".repeat(130))
        .with_tags(["a", "b", "c", "d"]);
    let tree = build_tree(&req, &brand()).unwrap();
    let (_, body, footer) = sections(&tree);

    let [title, description] = body.children() else {
        panic!("expected title and description");
    };
    assert_eq!(title.style().font_size, Some(48.0));
    let desc = description.content().unwrap();
    assert_eq!(desc, format!("{}...", "A".repeat(117)));

    let [date, tag_row] = footer.children() else {
        panic!("expected date and tag row");
    };
    assert_eq!(date.content(), Some("March 1, 2024"));
    assert_eq!(tag_row.texts(), vec!["a", "b", "c"]);
}

#[test]
fn website_ignores_date() {
    let mut req = ImageRequest::website("x");
    req.date = Some("March 1, 2024".to_string());
    let tree = build_tree(&req, &brand()).unwrap();
    assert!(!tree.texts().contains(&"March 1, 2024"));
}

#[test]
fn article_without_date_has_no_date_node() {
    let req = ImageRequest {
        title: "x".to_string(),
        kind: PageKind::Article,
        ..ImageRequest::default()
    };
    let tree = build_tree(&req, &brand()).unwrap();
    let (_, _, footer) = sections(&tree);
    assert!(footer.children().is_empty());
}

#[test]
fn empty_tags_create_no_row() {
    let req = ImageRequest::article("x", "May 2, 2024");
    let tree = build_tree(&req, &brand()).unwrap();
    let (_, _, footer) = sections(&tree);
    assert_eq!(footer.children().len(), 1);
    assert!(matches!(footer.children()[0], LayoutNode::Text { .. }));
}

#[test]
fn five_tags_keep_first_three_in_order() {
    let req = ImageRequest::website("x").with_tags(["one", "two", "three", "four", "five"]);
    let tree = build_tree(&req, &brand()).unwrap();
    let (_, _, footer) = sections(&tree);
    let [tag_row] = footer.children() else {
        panic!("expected only the tag row");
    };
    assert_eq!(tag_row.children().len(), 3);
    assert_eq!(tag_row.texts(), vec!["one", "two", "three"]);
    for pill in tag_row.children() {
        assert_eq!(pill.style().padding, Some(Edges::symmetric(6.0, 12.0)));
    }
}

#[test]
fn brand_comes_from_config_not_request() {
    let b = Brand {
        mark: "EX".to_string(),
        label: "example.org".to_string(),
    };
    let tree = build_tree(&ImageRequest::website("x"), &b).unwrap();
    let (header, _, _) = sections(&tree);
    assert_eq!(header.texts(), vec!["EX", "example.org"]);
}

#[test]
fn build_is_deterministic() {
    let req = ImageRequest::article("Post", "June 3, 2024").with_tags(["rust"]);
    assert_eq!(
        build_tree(&req, &brand()).unwrap(),
        build_tree(&req, &brand()).unwrap()
    );
}
