use crate::{
    fonts::{FontSet, FontWeight},
    foundation::error::{OgError, OgResult},
};

/// Shaped text ready to be positioned.
pub(crate) type TextLayout = parley::Layout<()>;

/// Parley contexts with the two weights of a [`FontSet`] registered.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    regular_family: String,
    bold_family: String,
}

impl TextLayoutEngine {
    /// Register both weights and resolve their family names.
    pub(crate) fn new(fonts: &FontSet) -> OgResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let regular_family = register(&mut font_ctx, fonts, FontWeight::Regular)?;
        let bold_family = register(&mut font_ctx, fonts, FontWeight::Bold)?;
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            regular_family,
            bold_family,
        })
    }

    /// Family name the given weight was registered under.
    pub(crate) fn family(&self, weight: FontWeight) -> &str {
        match weight {
            FontWeight::Regular => &self.regular_family,
            FontWeight::Bold => &self.bold_family,
        }
    }

    /// Shape `text` and break it into lines no wider than `max_width_px`.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        weight: FontWeight,
        line_height: Option<f32>,
        max_width_px: Option<f32>,
    ) -> OgResult<TextLayout> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(OgError::render("text size must be finite and > 0"));
        }

        let family = self.family(weight).to_string();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Single(parley::style::FontFamily::Named(
                std::borrow::Cow::Owned(family),
            )),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(weight.numeric())),
        ));
        if let Some(lh) = line_height {
            builder.push_default(parley::style::StyleProperty::LineHeight(
                parley::style::LineHeight::FontSizeRelative(lh),
            ));
        }

        let mut layout: TextLayout = builder.build(text);
        layout.break_all_lines(max_width_px);
        layout.align(
            max_width_px,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

fn register(
    font_ctx: &mut parley::FontContext,
    fonts: &FontSet,
    weight: FontWeight,
) -> OgResult<String> {
    let families = font_ctx.collection.register_fonts(
        parley::fontique::Blob::from(fonts.bytes(weight).to_vec()),
        None,
    );
    let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
        OgError::render(format!(
            "no font family found in {} font data",
            weight.file_suffix().to_lowercase()
        ))
    })?;
    let name = font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| OgError::render("registered font family has no name"))?;
    Ok(name.to_string())
}
