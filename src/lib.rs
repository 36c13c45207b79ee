//! Social-preview image generation.
//!
//! An [`ImageRequest`] is turned into a [`LayoutNode`] tree, laid out and written as SVG
//! ([`RenderedDocument`]) using a cached [`FontSet`], then rasterized to a 1200×630 PNG.
//!
//! ```no_run
//! use ogimage::{GeneratorConfig, ImageGenerator, ImageRequest};
//!
//! let generator = ImageGenerator::new(&GeneratorConfig::default())?;
//! let png = generator.generate_image(&ImageRequest::website("Hello World"))?;
//! # Ok::<(), ogimage::OgError>(())
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod fonts;
mod foundation;
pub mod generator;
pub mod layout;
pub mod raster;
pub mod render;
pub mod request;
pub mod text_policy;

pub use config::{Brand, FontConfig, GeneratorConfig};
pub use fonts::{DirFontSource, FontCache, FontSet, FontSource, FontWeight, MemoryFontSource};
pub use foundation::core::{Canvas, Rgb8};
pub use foundation::error::{AssetLoadError, OgError, OgResult};
pub use generator::{CACHE_CONTROL, CONTENT_TYPE, ImageGenerator};
pub use layout::builder::build_tree;
pub use layout::node::LayoutNode;
pub use layout::style::Style;
pub use raster::{OutputImage, rasterize};
pub use render::{RenderedDocument, render_document};
pub use request::{ImageRequest, PageKind};
