//! Closed style vocabulary understood by the renderer.

use crate::{
    fonts::FontWeight,
    foundation::{
        core::Rgb8,
        error::{OgError, OgResult},
    },
};

/// Only flex containers exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    /// `flex`
    Flex,
}

/// Main axis of a flex container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    /// `column`
    Column,
    /// `row`
    Row,
}

/// Main-axis distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JustifyContent {
    /// `space-between`
    SpaceBetween,
    /// `flex-start`
    FlexStart,
    /// `center`
    Center,
}

/// Cross-axis alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignItems {
    /// `center`
    Center,
    /// `flex-start`
    FlexStart,
}

/// Box dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Logical pixels.
    Px(f32),
    /// Percentage of the parent, `0..=100`.
    Percent(f32),
}

/// Per-side pixel lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    /// Top.
    pub top: f32,
    /// Right.
    pub right: f32,
    /// Bottom.
    pub bottom: f32,
    /// Left.
    pub left: f32,
}

impl Edges {
    /// Same length on every side.
    pub fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// CSS two-value shorthand.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Attribute names of the vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleAttr {
    /// `display`
    Display,
    /// `flexDirection`
    FlexDirection,
    /// `justifyContent`
    JustifyContent,
    /// `alignItems`
    AlignItems,
    /// `gap`
    Gap,
    /// `padding`
    Padding,
    /// `color`
    Color,
    /// `backgroundColor`
    BackgroundColor,
    /// `fontSize`
    FontSize,
    /// `fontWeight`
    FontWeight,
    /// `borderRadius`
    BorderRadius,
    /// `maxWidth`
    MaxWidth,
    /// `lineHeight`
    LineHeight,
    /// `width`
    Width,
    /// `height`
    Height,
}

/// Which node kinds may carry an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrScope {
    /// Boxes only.
    Box,
    /// Text leaves only.
    Text,
    /// Either.
    Any,
}

impl StyleAttr {
    /// Every attribute, in canonical order.
    pub const ALL: [StyleAttr; 15] = [
        StyleAttr::Display,
        StyleAttr::FlexDirection,
        StyleAttr::JustifyContent,
        StyleAttr::AlignItems,
        StyleAttr::Gap,
        StyleAttr::Padding,
        StyleAttr::Color,
        StyleAttr::BackgroundColor,
        StyleAttr::FontSize,
        StyleAttr::FontWeight,
        StyleAttr::BorderRadius,
        StyleAttr::MaxWidth,
        StyleAttr::LineHeight,
        StyleAttr::Width,
        StyleAttr::Height,
    ];

    /// camelCase name.
    pub fn name(self) -> &'static str {
        match self {
            StyleAttr::Display => "display",
            StyleAttr::FlexDirection => "flexDirection",
            StyleAttr::JustifyContent => "justifyContent",
            StyleAttr::AlignItems => "alignItems",
            StyleAttr::Gap => "gap",
            StyleAttr::Padding => "padding",
            StyleAttr::Color => "color",
            StyleAttr::BackgroundColor => "backgroundColor",
            StyleAttr::FontSize => "fontSize",
            StyleAttr::FontWeight => "fontWeight",
            StyleAttr::BorderRadius => "borderRadius",
            StyleAttr::MaxWidth => "maxWidth",
            StyleAttr::LineHeight => "lineHeight",
            StyleAttr::Width => "width",
            StyleAttr::Height => "height",
        }
    }

    /// Look an attribute up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Node kinds the attribute applies to.
    pub fn scope(self) -> AttrScope {
        match self {
            StyleAttr::Display
            | StyleAttr::FlexDirection
            | StyleAttr::JustifyContent
            | StyleAttr::AlignItems
            | StyleAttr::Gap
            | StyleAttr::Width
            | StyleAttr::Height => AttrScope::Box,
            StyleAttr::Color
            | StyleAttr::FontSize
            | StyleAttr::FontWeight
            | StyleAttr::LineHeight => AttrScope::Text,
            StyleAttr::Padding
            | StyleAttr::BackgroundColor
            | StyleAttr::BorderRadius
            | StyleAttr::MaxWidth => AttrScope::Any,
        }
    }
}

/// Typed style of one node. Unset attributes are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub display: Option<Display>,
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f32>,
    pub padding: Option<Edges>,
    pub color: Option<Rgb8>,
    pub background_color: Option<Rgb8>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub border_radius: Option<f32>,
    pub max_width: Option<f32>,
    pub line_height: Option<f32>,
    pub width: Option<Length>,
    pub height: Option<Length>,
}

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flex container with the given direction.
    pub fn flex(direction: FlexDirection) -> Self {
        Self {
            display: Some(Display::Flex),
            flex_direction: Some(direction),
            ..Self::default()
        }
    }

    pub fn justify(mut self, v: JustifyContent) -> Self {
        self.justify_content = Some(v);
        self
    }

    pub fn align(mut self, v: AlignItems) -> Self {
        self.align_items = Some(v);
        self
    }

    pub fn with_gap(mut self, px: f32) -> Self {
        self.gap = Some(px);
        self
    }

    pub fn with_padding(mut self, edges: Edges) -> Self {
        self.padding = Some(edges);
        self
    }

    pub fn with_color(mut self, c: Rgb8) -> Self {
        self.color = Some(c);
        self
    }

    pub fn with_background(mut self, c: Rgb8) -> Self {
        self.background_color = Some(c);
        self
    }

    pub fn with_font(mut self, size: f32, weight: FontWeight) -> Self {
        self.font_size = Some(size);
        self.font_weight = Some(weight);
        self
    }

    pub fn with_radius(mut self, px: f32) -> Self {
        self.border_radius = Some(px);
        self
    }

    pub fn with_max_width(mut self, px: f32) -> Self {
        self.max_width = Some(px);
        self
    }

    pub fn with_line_height(mut self, factor: f32) -> Self {
        self.line_height = Some(factor);
        self
    }

    pub fn with_size(mut self, width: Length, height: Length) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Parse `(name, value)` declarations into a style.
    pub fn parse<'a>(decls: impl IntoIterator<Item = (&'a str, &'a str)>) -> OgResult<Self> {
        let mut style = Self::default();
        for (name, value) in decls {
            style.set(name, value)?;
        }
        Ok(style)
    }

    /// Set one attribute from its textual form.
    pub fn set(&mut self, name: &str, value: &str) -> OgResult<()> {
        let attr = StyleAttr::from_name(name)
            .ok_or_else(|| OgError::configuration(format!("unknown style attribute '{name}'")))?;
        let bad = || {
            OgError::configuration(format!(
                "invalid value '{value}' for style attribute '{name}'"
            ))
        };
        let v = value.trim();
        match attr {
            StyleAttr::Display => {
                if v != "flex" {
                    return Err(bad());
                }
                self.display = Some(Display::Flex);
            }
            StyleAttr::FlexDirection => {
                self.flex_direction = Some(match v {
                    "column" => FlexDirection::Column,
                    "row" => FlexDirection::Row,
                    _ => return Err(bad()),
                });
            }
            StyleAttr::JustifyContent => {
                self.justify_content = Some(match v {
                    "space-between" => JustifyContent::SpaceBetween,
                    "flex-start" => JustifyContent::FlexStart,
                    "center" => JustifyContent::Center,
                    _ => return Err(bad()),
                });
            }
            StyleAttr::AlignItems => {
                self.align_items = Some(match v {
                    "center" => AlignItems::Center,
                    "flex-start" => AlignItems::FlexStart,
                    _ => return Err(bad()),
                });
            }
            StyleAttr::Gap => self.gap = Some(parse_px(v).ok_or_else(bad)?),
            StyleAttr::Padding => self.padding = Some(parse_edges(v).ok_or_else(bad)?),
            StyleAttr::Color => self.color = Some(Rgb8::parse(v)?),
            StyleAttr::BackgroundColor => self.background_color = Some(Rgb8::parse(v)?),
            StyleAttr::FontSize => {
                let px = parse_px(v).filter(|px| *px > 0.0).ok_or_else(bad)?;
                self.font_size = Some(px);
            }
            StyleAttr::FontWeight => {
                let w = v.parse::<u16>().ok().and_then(FontWeight::from_numeric);
                self.font_weight = Some(w.ok_or_else(bad)?);
            }
            StyleAttr::BorderRadius => self.border_radius = Some(parse_px(v).ok_or_else(bad)?),
            StyleAttr::MaxWidth => self.max_width = Some(parse_px(v).ok_or_else(bad)?),
            StyleAttr::LineHeight => {
                let f = v
                    .parse::<f32>()
                    .ok()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .ok_or_else(bad)?;
                self.line_height = Some(f);
            }
            StyleAttr::Width => self.width = Some(parse_length(v).ok_or_else(bad)?),
            StyleAttr::Height => self.height = Some(parse_length(v).ok_or_else(bad)?),
        }
        Ok(())
    }

    /// Attributes that are set, in canonical order.
    pub fn attrs(&self) -> Vec<StyleAttr> {
        self.declarations().into_iter().map(|(a, _)| a).collect()
    }

    /// Set attributes with their textual values, in canonical order.
    pub fn declarations(&self) -> Vec<(StyleAttr, String)> {
        let mut out = Vec::new();
        if self.display.is_some() {
            out.push((StyleAttr::Display, "flex".to_string()));
        }
        if let Some(d) = self.flex_direction {
            let s = match d {
                FlexDirection::Column => "column",
                FlexDirection::Row => "row",
            };
            out.push((StyleAttr::FlexDirection, s.to_string()));
        }
        if let Some(j) = self.justify_content {
            let s = match j {
                JustifyContent::SpaceBetween => "space-between",
                JustifyContent::FlexStart => "flex-start",
                JustifyContent::Center => "center",
            };
            out.push((StyleAttr::JustifyContent, s.to_string()));
        }
        if let Some(a) = self.align_items {
            let s = match a {
                AlignItems::Center => "center",
                AlignItems::FlexStart => "flex-start",
            };
            out.push((StyleAttr::AlignItems, s.to_string()));
        }
        if let Some(g) = self.gap {
            out.push((StyleAttr::Gap, format!("{g}px")));
        }
        if let Some(p) = self.padding {
            out.push((
                StyleAttr::Padding,
                format!("{}px {}px {}px {}px", p.top, p.right, p.bottom, p.left),
            ));
        }
        if let Some(c) = self.color {
            out.push((StyleAttr::Color, c.to_hex()));
        }
        if let Some(c) = self.background_color {
            out.push((StyleAttr::BackgroundColor, c.to_hex()));
        }
        if let Some(s) = self.font_size {
            out.push((StyleAttr::FontSize, format!("{s}px")));
        }
        if let Some(w) = self.font_weight {
            out.push((StyleAttr::FontWeight, w.numeric().to_string()));
        }
        if let Some(r) = self.border_radius {
            out.push((StyleAttr::BorderRadius, format!("{r}px")));
        }
        if let Some(m) = self.max_width {
            out.push((StyleAttr::MaxWidth, format!("{m}px")));
        }
        if let Some(l) = self.line_height {
            out.push((StyleAttr::LineHeight, l.to_string()));
        }
        if let Some(w) = self.width {
            out.push((StyleAttr::Width, length_to_string(w)));
        }
        if let Some(h) = self.height {
            out.push((StyleAttr::Height, length_to_string(h)));
        }
        out
    }
}

impl serde::Serialize for Style {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;
        let decls = self.declarations();
        let mut map = serializer.serialize_map(Some(decls.len()))?;
        for (attr, value) in &decls {
            map.serialize_entry(attr.name(), value)?;
        }
        map.end()
    }
}

fn parse_px(s: &str) -> Option<f32> {
    let n = s.strip_suffix("px").unwrap_or(s).trim();
    let v = n.parse::<f32>().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

fn parse_length(s: &str) -> Option<Length> {
    if let Some(p) = s.strip_suffix('%') {
        let v = p.trim().parse::<f32>().ok()?;
        return (v.is_finite() && (0.0..=100.0).contains(&v)).then_some(Length::Percent(v));
    }
    parse_px(s).map(Length::Px)
}

fn parse_edges(s: &str) -> Option<Edges> {
    let parts = s
        .split_whitespace()
        .map(parse_px)
        .collect::<Option<Vec<_>>>()?;
    match parts[..] {
        [v] => Some(Edges::all(v)),
        [vert, horiz] => Some(Edges::symmetric(vert, horiz)),
        [top, right, bottom, left] => Some(Edges {
            top,
            right,
            bottom,
            left,
        }),
        _ => None,
    }
}

fn length_to_string(l: Length) -> String {
    match l {
        Length::Px(v) => format!("{v}px"),
        Length::Percent(v) => format!("{v}%"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/style.rs"]
mod tests;
