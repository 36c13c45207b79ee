use std::fmt::Write as _;

use crate::{
    fonts::FontWeight,
    foundation::core::{Canvas, Rect, Rgb8},
    layout::node::LayoutNode,
    render::{flex::PlacedNode, text::TextLayoutEngine},
};

/// Incremental writer for the flat SVG the renderer emits.
pub(crate) struct SvgWriter {
    out: String,
}

impl SvgWriter {
    pub(crate) fn new(canvas: Canvas) -> Self {
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = canvas.width,
            h = canvas.height
        );
        Self { out }
    }

    pub(crate) fn rect(&mut self, frame: Rect, radius: f64, fill: Rgb8) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            num(frame.x0),
            num(frame.y0),
            num(frame.width()),
            num(frame.height())
        );
        if radius > 0.0 {
            let _ = write!(self.out, r#" rx="{}""#, num(radius));
        }
        let _ = write!(self.out, r#" fill="{}"/>"#, fill.to_hex());
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn text_line(
        &mut self,
        x: f64,
        baseline_y: f64,
        family: &str,
        size: f32,
        weight: FontWeight,
        fill: Rgb8,
        text: &str,
    ) {
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" font-family="'{}', sans-serif" font-size="{}" font-weight="{}" fill="{}" xml:space="preserve">{}</text>"#,
            num(x),
            num(baseline_y),
            escape_xml(&family.replace('\'', "")),
            num(f64::from(size)),
            weight.numeric(),
            fill.to_hex(),
            escape_xml(text)
        );
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// Paint placed nodes in order: background first, then text lines.
pub(crate) fn write_placed(
    writer: &mut SvgWriter,
    placed: &[PlacedNode<'_>],
    engine: &TextLayoutEngine,
) {
    for p in placed {
        let style = p.node.style();
        if let Some(bg) = style.background_color {
            writer.rect(p.frame, f64::from(style.border_radius.unwrap_or(0.0)), bg);
        }

        let (LayoutNode::Text { content, .. }, Some(layout)) = (p.node, p.text.as_ref()) else {
            continue;
        };
        let pad = style.padding.unwrap_or_default();
        let size = style.font_size.unwrap_or(16.0);
        let weight = style.font_weight.unwrap_or(FontWeight::Regular);
        let fill = style.color.unwrap_or(Rgb8::new(0, 0, 0));
        let family = engine.family(weight);

        for line in layout.lines() {
            let Some(segment) = content.get(line.text_range()) else {
                continue;
            };
            let segment = segment.trim_end();
            if segment.is_empty() {
                continue;
            }
            let m = line.metrics();
            writer.text_line(
                p.frame.x0 + f64::from(pad.left + m.offset),
                p.frame.y0 + f64::from(pad.top + m.baseline),
                family,
                size,
                weight,
                fill,
                segment,
            );
        }
    }
}

fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    let s = format!("{r:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
