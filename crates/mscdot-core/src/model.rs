//! Chart document model.
//!
//! The JSON shape follows the mscgen AST: `{"entities": [...], "arcs": [[...], ...]}`. The
//! mscgen attribute names (`linecolor`, `textcolor`, `textbgcolor`, ...) are accepted as aliases
//! of the dot-flavoured names used here.

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arcs that sit at the same vertical position in the chart.
pub type ArcRow = Vec<Arc>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub arcs: Vec<ArcRow>,
}

impl Document {
    pub fn new(entities: Vec<Entity>, arcs: Vec<ArcRow>) -> Self {
        Self { entities, arcs }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Total number of arcs, nested ones included.
    pub fn arc_count(&self) -> usize {
        fn count(rows: &[ArcRow]) -> usize {
            rows.iter()
                .flatten()
                .map(|arc| 1 + arc.arcs.as_deref().map_or(0, count))
                .sum()
        }
        count(&self.arcs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, alias = "linecolor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "textcolor", skip_serializing_if = "Option::is_none")]
    pub fontcolor: Option<String>,
    #[serde(default, alias = "textbgcolor", skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    /// Default `color` for arcs leaving this entity.
    #[serde(default, alias = "arclinecolor", skip_serializing_if = "Option::is_none")]
    pub arccolor: Option<String>,
    #[serde(default, alias = "arctextcolor", skip_serializing_if = "Option::is_none")]
    pub arcfontcolor: Option<String>,
    #[serde(default, alias = "arctextbgcolor", skip_serializing_if = "Option::is_none")]
    pub arcfillcolor: Option<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One interaction step. An empty `kind`, `from` or `to` counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Arc {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, alias = "linecolor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "textcolor", skip_serializing_if = "Option::is_none")]
    pub fontcolor: Option<String>,
    #[serde(default, alias = "textbgcolor", skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    /// Nested rows; present on inline expressions such as `loop` or `alt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arcs: Option<Vec<ArcRow>>,
}

impl Arc {
    pub fn new(kind: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_arcs(mut self, arcs: Vec<ArcRow>) -> Self {
        self.arcs = Some(arcs);
        self
    }

    /// `true` when `kind`, `from` and `to` are all non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.kind.is_empty() && !self.from.is_empty() && !self.to.is_empty()
    }

    /// `true` when the arc carries nested rows, even an empty list of them.
    pub fn is_container(&self) -> bool {
        self.arcs.is_some()
    }

    pub fn is_broadcast(&self) -> bool {
        self.to == "*"
    }
}
