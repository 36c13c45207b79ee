//! Flexbox placement of a [`LayoutNode`] tree with Taffy, measuring text leaves through Parley.

use taffy::prelude::{AvailableSpace, NodeId, Rect as TaffyRect, Size};
use taffy::style::{
    AlignItems as TaffyAlignItems, Dimension, Display as TaffyDisplay,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent, LengthPercentage,
    Style as TaffyStyle,
};

use crate::{
    fonts::FontWeight,
    foundation::{
        core::{Canvas, Rect},
        error::{OgError, OgResult},
    },
    layout::{
        node::LayoutNode,
        style::{AlignItems, Edges, FlexDirection, JustifyContent, Length, Style},
    },
    render::text::{TextLayout, TextLayoutEngine},
};

/// Absolute placement of one node, in tree pre-order.
pub(crate) struct PlacedNode<'a> {
    pub(crate) node: &'a LayoutNode,
    /// Border box in canvas coordinates.
    pub(crate) frame: Rect,
    /// Text shaped at its final width; `None` for boxes.
    pub(crate) text: Option<TextLayout>,
}

#[derive(Clone, Debug)]
struct TextSpec {
    content: String,
    size: f32,
    weight: FontWeight,
    line_height: Option<f32>,
    max_width: Option<f32>,
}

impl TextSpec {
    fn from_node(style: &Style, content: &str) -> OgResult<Self> {
        let size = style
            .font_size
            .ok_or_else(|| OgError::configuration("text node without fontSize"))?;
        Ok(Self {
            content: content.to_string(),
            size,
            weight: style.font_weight.unwrap_or(FontWeight::Regular),
            line_height: style.line_height,
            max_width: style.max_width,
        })
    }
}

struct Built {
    id: NodeId,
    children: Vec<Built>,
}

/// Session-local Taffy tree mirroring one [`LayoutNode`] tree.
pub(crate) struct FlexLayout {
    taffy: taffy::TaffyTree<TextSpec>,
}

impl FlexLayout {
    pub(crate) fn new() -> Self {
        Self {
            taffy: taffy::TaffyTree::new(),
        }
    }

    /// Lay `tree` out on `canvas` and return every node with its absolute frame.
    pub(crate) fn place<'a>(
        &mut self,
        tree: &'a LayoutNode,
        canvas: Canvas,
        engine: &mut TextLayoutEngine,
    ) -> OgResult<Vec<PlacedNode<'a>>> {
        let built = self.build(tree)?;

        let available = Size {
            width: AvailableSpace::Definite(canvas.width as f32),
            height: AvailableSpace::Definite(canvas.height as f32),
        };
        let mut failure: Option<OgError> = None;
        self.taffy
            .compute_layout_with_measure(
                built.id,
                available,
                |known_dimensions, available_space, _node_id, node_context, _style| {
                    let Some(spec) = node_context else {
                        return Size::ZERO;
                    };
                    if let (Some(width), Some(height)) =
                        (known_dimensions.width, known_dimensions.height)
                    {
                        return Size { width, height };
                    }
                    let limit = known_dimensions.width.or(match available_space.width {
                        AvailableSpace::Definite(w) => Some(w),
                        AvailableSpace::MinContent => Some(0.0),
                        AvailableSpace::MaxContent => None,
                    });
                    let limit = match (limit, spec.max_width) {
                        (Some(a), Some(m)) => Some(a.min(m)),
                        (a, m) => a.or(m),
                    };
                    match engine.layout(
                        &spec.content,
                        spec.size,
                        spec.weight,
                        spec.line_height,
                        limit,
                    ) {
                        Ok(l) => Size {
                            width: known_dimensions.width.unwrap_or(l.width().ceil()),
                            height: known_dimensions.height.unwrap_or(l.height().ceil()),
                        },
                        Err(e) => {
                            failure.get_or_insert(e);
                            Size::ZERO
                        }
                    }
                },
            )
            .map_err(|e| OgError::render(format!("flex layout failed: {e}")))?;
        if let Some(e) = failure {
            return Err(e);
        }

        let mut out = Vec::new();
        self.collect(tree, &built, (0.0, 0.0), engine, &mut out)?;
        Ok(out)
    }

    fn build(&mut self, node: &LayoutNode) -> OgResult<Built> {
        let taffy_err = |e: taffy::TaffyError| OgError::render(format!("flex tree: {e}"));
        match node {
            LayoutNode::Box { style, children } => {
                let built = children
                    .iter()
                    .map(|c| self.build(c))
                    .collect::<OgResult<Vec<_>>>()?;
                let ids: Vec<NodeId> = built.iter().map(|b| b.id).collect();
                let id = self
                    .taffy
                    .new_with_children(box_style(style), &ids)
                    .map_err(taffy_err)?;
                Ok(Built {
                    id,
                    children: built,
                })
            }
            LayoutNode::Text { style, content } => {
                let id = self
                    .taffy
                    .new_leaf_with_context(text_style(style), TextSpec::from_node(style, content)?)
                    .map_err(taffy_err)?;
                Ok(Built {
                    id,
                    children: Vec::new(),
                })
            }
        }
    }

    fn collect<'a>(
        &self,
        node: &'a LayoutNode,
        built: &Built,
        origin: (f64, f64),
        engine: &mut TextLayoutEngine,
        out: &mut Vec<PlacedNode<'a>>,
    ) -> OgResult<()> {
        let l = self
            .taffy
            .layout(built.id)
            .map_err(|e| OgError::render(format!("flex layout lookup: {e}")))?;
        let x = origin.0 + f64::from(l.location.x);
        let y = origin.1 + f64::from(l.location.y);
        let (w, h) = (f64::from(l.size.width), f64::from(l.size.height));
        if ![x, y, w, h].iter().all(|v| v.is_finite()) {
            return Err(OgError::render("flex layout produced non-finite geometry"));
        }
        let frame = Rect::new(x, y, x + w, y + h);

        let text = match node {
            LayoutNode::Text { style, content } => {
                let pad = style.padding.unwrap_or_default();
                // Small slack so the final pass reproduces the measured line breaks.
                let content_w = (l.size.width - pad.left - pad.right).max(0.0) + 0.01;
                let spec = TextSpec::from_node(style, content)?;
                Some(engine.layout(
                    &spec.content,
                    spec.size,
                    spec.weight,
                    spec.line_height,
                    Some(content_w),
                )?)
            }
            LayoutNode::Box { .. } => None,
        };
        out.push(PlacedNode { node, frame, text });

        for (child, child_built) in node.children().iter().zip(&built.children) {
            self.collect(child, child_built, (x, y), engine, out)?;
        }
        Ok(())
    }
}

fn box_style(style: &Style) -> TaffyStyle {
    let gap = style.gap.unwrap_or(0.0);
    TaffyStyle {
        display: TaffyDisplay::Flex,
        flex_direction: match style.flex_direction.unwrap_or(FlexDirection::Row) {
            FlexDirection::Row => TaffyFlexDirection::Row,
            FlexDirection::Column => TaffyFlexDirection::Column,
        },
        justify_content: style.justify_content.map(|j| match j {
            JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
            JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
            JustifyContent::Center => TaffyJustifyContent::Center,
        }),
        align_items: style.align_items.map(|a| match a {
            AlignItems::Center => TaffyAlignItems::Center,
            AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        }),
        gap: Size {
            width: LengthPercentage::length(gap),
            height: LengthPercentage::length(gap),
        },
        padding: padding(style.padding),
        size: Size {
            width: dimension(style.width),
            height: dimension(style.height),
        },
        max_size: Size {
            width: style.max_width.map_or(Dimension::auto(), Dimension::length),
            height: Dimension::auto(),
        },
        ..TaffyStyle::default()
    }
}

fn text_style(style: &Style) -> TaffyStyle {
    TaffyStyle {
        padding: padding(style.padding),
        max_size: Size {
            width: style.max_width.map_or(Dimension::auto(), Dimension::length),
            height: Dimension::auto(),
        },
        ..TaffyStyle::default()
    }
}

fn padding(edges: Option<Edges>) -> TaffyRect<LengthPercentage> {
    let e = edges.unwrap_or_default();
    TaffyRect {
        left: LengthPercentage::length(e.left),
        right: LengthPercentage::length(e.right),
        top: LengthPercentage::length(e.top),
        bottom: LengthPercentage::length(e.bottom),
    }
}

fn dimension(len: Option<Length>) -> Dimension {
    match len {
        None => Dimension::auto(),
        Some(Length::Px(v)) => Dimension::length(v),
        Some(Length::Percent(p)) => Dimension::percent(p / 100.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/flex.rs"]
mod tests;
