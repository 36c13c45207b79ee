//! Builds the three-section social-card tree from an [`ImageRequest`].

use crate::{
    config::Brand,
    fonts::FontWeight,
    foundation::{
        core::Rgb8,
        error::{OgError, OgResult},
    },
    layout::{
        node::LayoutNode,
        style::{AlignItems, Edges, FlexDirection, JustifyContent, Length, Style},
    },
    request::ImageRequest,
    text_policy,
};

/// At most this many tags are rendered.
pub const MAX_TAGS: usize = 3;

const BACKGROUND: Rgb8 = Rgb8::new(0x0a, 0x0a, 0x0a);
const ACCENT: Rgb8 = Rgb8::new(0x25, 0x63, 0xeb);
const WHITE: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);
const TEXT_STRONG: Rgb8 = Rgb8::new(0xf5, 0xf5, 0xf5);
const TEXT_MUTED: Rgb8 = Rgb8::new(0xa3, 0xa3, 0xa3);
const PILL: Rgb8 = Rgb8::new(0x26, 0x26, 0x26);

/// Build the layout tree for `request`.
///
/// Pure: the same request and brand always give the same tree.
pub fn build_tree(request: &ImageRequest, brand: &Brand) -> OgResult<LayoutNode> {
    if request.title.is_empty() {
        return Err(OgError::configuration("image request title must be non-empty"));
    }

    let root = Style::flex(FlexDirection::Column)
        .justify(JustifyContent::SpaceBetween)
        .with_size(Length::Percent(100.0), Length::Percent(100.0))
        .with_background(BACKGROUND)
        .with_padding(Edges::all(60.0));

    LayoutNode::boxed(root, vec![header(brand)?, body(request)?, footer(request)?])
}

fn header(brand: &Brand) -> OgResult<LayoutNode> {
    let square = LayoutNode::boxed(
        Style::flex(FlexDirection::Row)
            .align(AlignItems::Center)
            .justify(JustifyContent::Center)
            .with_size(Length::Px(40.0), Length::Px(40.0))
            .with_radius(8.0)
            .with_background(ACCENT),
        vec![LayoutNode::text(
            Style::new()
                .with_color(WHITE)
                .with_font(20.0, FontWeight::Bold),
            brand.mark.as_str(),
        )?],
    )?;
    let label = LayoutNode::text(
        Style::new()
            .with_color(TEXT_MUTED)
            .with_font(24.0, FontWeight::Regular),
        brand.label.as_str(),
    )?;

    LayoutNode::boxed(
        Style::flex(FlexDirection::Row)
            .align(AlignItems::Center)
            .with_gap(12.0),
        vec![square, label],
    )
}

fn body(request: &ImageRequest) -> OgResult<LayoutNode> {
    let mut children = Vec::with_capacity(2);
    children.push(LayoutNode::text(
        Style::new()
            .with_color(TEXT_STRONG)
            .with_font(
                text_policy::title_font_size(&request.title),
                FontWeight::Bold,
            )
            .with_line_height(1.2)
            .with_max_width(900.0),
        request.title.as_str(),
    )?);

    if let Some(description) = request.effective_description() {
        children.push(LayoutNode::text(
            Style::new()
                .with_color(TEXT_MUTED)
                .with_font(28.0, FontWeight::Regular)
                .with_line_height(1.4)
                .with_max_width(800.0),
            text_policy::truncate_description(description),
        )?);
    }

    LayoutNode::boxed(Style::flex(FlexDirection::Column).with_gap(20.0), children)
}

fn footer(request: &ImageRequest) -> OgResult<LayoutNode> {
    let mut children = Vec::with_capacity(2);

    if let Some(date) = request.effective_date() {
        children.push(LayoutNode::text(
            Style::new()
                .with_color(TEXT_MUTED)
                .with_font(20.0, FontWeight::Regular),
            date,
        )?);
    }

    if !request.tags.is_empty() {
        let pills = request
            .tags
            .iter()
            .take(MAX_TAGS)
            .map(|tag| {
                LayoutNode::text(
                    Style::new()
                        .with_background(PILL)
                        .with_color(TEXT_MUTED)
                        .with_padding(Edges::symmetric(6.0, 12.0))
                        .with_radius(6.0)
                        .with_font(18.0, FontWeight::Regular),
                    tag.as_str(),
                )
            })
            .collect::<OgResult<Vec<_>>>()?;
        children.push(LayoutNode::boxed(Style::flex(FlexDirection::Row).with_gap(8.0), pills)?);
    }

    LayoutNode::boxed(
        Style::flex(FlexDirection::Row)
            .align(AlignItems::Center)
            .with_gap(24.0),
        children,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/builder.rs"]
mod tests;
