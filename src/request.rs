/// Kind of page the image is for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Plain page; never shows a date.
    #[default]
    Website,
    /// Blog post; shows its date when one is given.
    Article,
}

/// Input of one image generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageRequest {
    /// Page title, required and non-empty.
    pub title: String,
    /// Optional summary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page kind.
    #[serde(default, rename = "type")]
    pub kind: PageKind,
    /// Display-ready date string, formatted by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Tags; only the first three are shown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ImageRequest {
    /// Website request with only a title.
    pub fn website(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Article request with its date.
    pub fn article(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: PageKind::Article,
            date: Some(date.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Description to render; an empty string counts as absent.
    pub fn effective_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Date to render: only for articles that carry one.
    pub fn effective_date(&self) -> Option<&str> {
        match self.kind {
            PageKind::Article => self.date.as_deref().filter(|d| !d.is_empty()),
            PageKind::Website => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/request.rs"]
mod tests;
