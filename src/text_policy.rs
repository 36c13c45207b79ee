//! Length-driven text rules: title size selection and description truncation.

/// Titles longer than this many characters use [`TITLE_SIZE_LONG`].
pub const TITLE_LONG_THRESHOLD: usize = 40;
/// Title font size for short titles.
pub const TITLE_SIZE_SHORT: f32 = 56.0;
/// Title font size for long titles.
pub const TITLE_SIZE_LONG: f32 = 48.0;

/// Descriptions longer than this many characters are truncated.
pub const DESCRIPTION_MAX_CHARS: usize = 120;
/// Characters kept before the ellipsis when truncating.
pub const DESCRIPTION_KEEP_CHARS: usize = 117;
/// Marker appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

/// Pick the title font size. Wrapping is left to the renderer's `maxWidth`.
pub fn title_font_size(title: &str) -> f32 {
    if title.chars().count() > TITLE_LONG_THRESHOLD {
        TITLE_SIZE_LONG
    } else {
        TITLE_SIZE_SHORT
    }
}

/// Cut a description to 117 characters plus `"..."` when it exceeds 120 characters.
///
/// Counts `char`s with no regard for word boundaries, so the cut may land mid-word.
pub fn truncate_description(description: &str) -> std::borrow::Cow<'_, str> {
    if description.chars().count() <= DESCRIPTION_MAX_CHARS {
        return std::borrow::Cow::Borrowed(description);
    }
    let mut out: String = description.chars().take(DESCRIPTION_KEEP_CHARS).collect();
    out.push_str(ELLIPSIS);
    std::borrow::Cow::Owned(out)
}

#[cfg(test)]
#[path = "../tests/unit/text_policy.rs"]
mod tests;
