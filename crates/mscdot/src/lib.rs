#![forbid(unsafe_code)]

//! `mscdot` turns message sequence charts into Graphviz `dot` graph descriptions.
//!
//! The chart model lives in `mscdot-core` and is re-exported at the crate root. Rendering lives
//! in `mscdot-render`.
//!
//! # Features
//!
//! - `render` (default): enable dot output (`mscdot::render`)
//!
//! ```
//! use mscdot::{Arc, Document, Entity};
//!
//! let chart = Document::new(
//!     vec![Entity::new("a"), Entity::new("b")],
//!     vec![vec![Arc::new("->", "a", "b").with_label("hello")]],
//! );
//! let dot = mscdot::render::render_dot(&chart);
//! assert!(dot.contains(r#""a" -- "b" [label="(1) hello", arrowhead="rvee"]"#));
//! ```

pub use mscdot_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use mscdot_render::mappings::{arrow_for, shape_for, style_for};
    pub use mscdot_render::text::wrap_text;
    pub use mscdot_render::{
        DEFAULT_WRAP_WIDTH, DotRenderer, RenderOptions, render_dot, render_dot_with_options,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum MscdotError {
        #[error(transparent)]
        Core(#[from] mscdot_core::Error),
        #[error(transparent)]
        Render(#[from] mscdot_render::Error),
    }

    pub type Result<T> = std::result::Result<T, MscdotError>;

    /// Parses an mscgen-style JSON chart document and renders it as dot.
    pub fn render_json_to_dot(json: &str, options: &RenderOptions) -> Result<String> {
        let document = mscdot_core::Document::from_json_str(json)?;
        Ok(render_dot_with_options(&document, options)?)
    }

    /// Convenience wrapper that keeps one set of options for repeated renders.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub options: RenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn strict() -> Self {
            Self {
                options: RenderOptions::strict(),
            }
        }

        pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
            self.options = self.options.with_wrap_width(wrap_width);
            self
        }

        pub fn render(&self, document: &mscdot_core::Document) -> Result<String> {
            Ok(render_dot_with_options(document, &self.options)?)
        }

        pub fn render_json(&self, json: &str) -> Result<String> {
            render_json_to_dot(json, &self.options)
        }
    }
}
