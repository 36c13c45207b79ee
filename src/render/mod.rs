//! Vector stage: flex layout of a [`LayoutNode`] tree into an SVG document.

pub(crate) mod flex;
pub(crate) mod svg;
pub(crate) mod text;

use crate::{
    fonts::FontSet,
    foundation::{core::Canvas, error::OgResult},
    layout::node::LayoutNode,
};

/// SVG output of the vector stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    svg: String,
    canvas: Canvas,
}

impl RenderedDocument {
    /// Wrap an SVG string drawn on `canvas`.
    pub fn new(svg: String, canvas: Canvas) -> Self {
        Self { svg, canvas }
    }

    /// SVG text.
    pub fn as_str(&self) -> &str {
        &self.svg
    }

    /// Logical canvas the document was laid out on.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Consume into the SVG text.
    pub fn into_string(self) -> String {
        self.svg
    }
}

/// Lay `tree` out on the fixed 1200×630 canvas and emit SVG.
pub fn render_document(tree: &LayoutNode, fonts: &FontSet) -> OgResult<RenderedDocument> {
    render_document_on(tree, fonts, Canvas::OG)
}

/// Same as [`render_document`] on an explicit canvas.
#[tracing::instrument(skip(tree, fonts))]
pub fn render_document_on(
    tree: &LayoutNode,
    fonts: &FontSet,
    canvas: Canvas,
) -> OgResult<RenderedDocument> {
    let mut engine = text::TextLayoutEngine::new(fonts)?;
    let mut flex = flex::FlexLayout::new();
    let placed = flex.place(tree, canvas, &mut engine)?;

    let mut writer = svg::SvgWriter::new(canvas);
    svg::write_placed(&mut writer, &placed, &engine);
    tracing::debug!(nodes = placed.len(), "vector document written");
    Ok(RenderedDocument::new(writer.finish(), canvas))
}
