#![forbid(unsafe_code)]

//! Graphviz `dot` output for message sequence charts.
//!
//! The renderer normalizes a copy of the input [`Document`] and emits a single undirected graph
//! in which entities are nodes, arcs are numbered edges, box-like arcs become auxiliary nodes and
//! inline expressions (`loop`, `alt`, ...) become `cluster` subgraphs. It does not lay anything
//! out; feed the result to `dot` (or any other Graphviz engine).

pub mod dot;
pub mod mappings;
pub mod text;
mod validate;

pub use dot::DotRenderer;

use mscdot_core::Document;

/// Default column width for wrapped attribute text.
pub const DEFAULT_WRAP_WIDTH: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown arc kind: {kind:?}")]
    UnknownArcKind { kind: String },
    #[error("arc {kind:?} references undeclared entity {name:?}")]
    UndeclaredEntity { name: String, kind: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Column width at which label and color values are wrapped. `0` disables wrapping.
    pub wrap_width: usize,
    /// Fail on arc kinds outside the known vocabulary instead of rendering them unstyled.
    pub reject_unknown_kinds: bool,
    /// Fail when an arc names an entity that is not declared.
    pub validate_references: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::lenient()
    }
}

impl RenderOptions {
    /// Best-effort rendering: never fails.
    pub fn lenient() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            reject_unknown_kinds: false,
            validate_references: false,
        }
    }

    /// Rejects unknown arc kinds and undeclared entity references.
    pub fn strict() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            reject_unknown_kinds: true,
            validate_references: true,
        }
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    fn is_lenient(&self) -> bool {
        !self.reject_unknown_kinds && !self.validate_references
    }
}

/// Renders `document` with [`RenderOptions::lenient`].
pub fn render_dot(document: &Document) -> String {
    DotRenderer::new().render_lenient(document)
}

pub fn render_dot_with_options(document: &Document, options: &RenderOptions) -> Result<String> {
    DotRenderer::with_options(options.clone()).render(document)
}

#[cfg(test)]
mod tests;
