#![forbid(unsafe_code)]

//! Message sequence chart document model (headless).
//!
//! This crate holds the data side of `mscdot`:
//! - the chart document (`entities` + rows of possibly nested `arcs`),
//! - arc kind classification into rendering strategies,
//! - the normalization pass every renderer runs before emitting output.

pub mod error;
pub mod kind;
pub mod model;
pub mod normalize;

pub use error::{Error, Result};
pub use kind::{ArcCategory, aggregate_kind, is_inline_expression, normalize_kind};
pub use model::{Arc, ArcRow, Document, Entity};
pub use normalize::normalize;
