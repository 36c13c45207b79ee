use std::sync::Arc;

use crate::{
    config::{Brand, GeneratorConfig},
    fonts::{FontCache, FontSet},
    foundation::error::OgResult,
    layout::{builder::build_tree, node::LayoutNode},
    raster::{OutputImage, rasterize},
    render::{RenderedDocument, render_document},
    request::ImageRequest,
};

/// Content type of every generated image.
pub const CONTENT_TYPE: &str = "image/png";
/// Recommended caching policy for generated images.
pub const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Entry point of the pipeline: request → layout tree → SVG → PNG.
///
/// Cheap to share across threads; the only shared state is the injected [`FontCache`].
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    fonts: Arc<FontCache>,
    brand: Brand,
}

impl ImageGenerator {
    /// Generator with its own font cache built from `config.fonts`.
    pub fn new(config: &GeneratorConfig) -> OgResult<Self> {
        config.validate()?;
        Ok(Self {
            fonts: Arc::new(FontCache::new(config.fonts.source())),
            brand: config.brand.clone(),
        })
    }

    /// Generator over an existing, possibly shared, font cache.
    pub fn with_cache(fonts: Arc<FontCache>, brand: Brand) -> Self {
        Self { fonts, brand }
    }

    /// The font cache this generator renders with.
    pub fn font_cache(&self) -> &Arc<FontCache> {
        &self.fonts
    }

    /// Header identity.
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    /// Load fonts if needed.
    pub fn fonts(&self) -> OgResult<Arc<FontSet>> {
        self.fonts.ensure_loaded()
    }

    /// Layout tree for `request`, without rendering.
    pub fn layout(&self, request: &ImageRequest) -> OgResult<LayoutNode> {
        build_tree(request, &self.brand)
    }

    /// Layout and vector stages only.
    pub fn document(&self, request: &ImageRequest) -> OgResult<RenderedDocument> {
        let fonts = self.fonts()?;
        let tree = self.layout(request)?;
        render_document(&tree, &fonts)
    }

    /// Full pipeline.
    #[tracing::instrument(skip_all, fields(kind = ?request.kind, title_len = request.title.chars().count()))]
    pub fn generate(&self, request: &ImageRequest) -> OgResult<OutputImage> {
        let fonts = self.fonts()?;
        let tree = self.layout(request)?;
        let doc = render_document(&tree, &fonts)?;
        rasterize(&doc, &fonts)
    }

    /// Full pipeline, returning only the PNG bytes.
    pub fn generate_image(&self, request: &ImageRequest) -> OgResult<Vec<u8>> {
        Ok(self.generate(request)?.png)
    }
}
