//! Arc kind classification.
//!
//! mscgen has a large vocabulary of arc kinds (`->`, `=>>`, `<<>>`, `abox`, `loop`, ...). For
//! graph output they collapse into a handful of rendering strategies, see [`ArcCategory`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcCategory {
    /// Annotation spanning one or two entities (`note`, `box`, `abox`, `rbox`).
    Box,
    Directional,
    Bidirectional,
    Nondirectional,
    /// Kind outside the known vocabulary.
    Unknown,
}

impl ArcCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ArcCategory::Box => "box",
            ArcCategory::Directional => "directional",
            ArcCategory::Bidirectional => "bidirectional",
            ArcCategory::Nondirectional => "nondirectional",
            ArcCategory::Unknown => "unknown",
        }
    }

    pub fn is_box(self) -> bool {
        self == ArcCategory::Box
    }
}

impl std::fmt::Display for ArcCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline expressions (container kinds). Matched case-insensitively.
const INLINE_EXPRESSIONS: &[&str] = &[
    "alt", "else", "opt", "break", "par", "seq", "strict", "neg", "critical", "ignore",
    "consider", "assert", "loop", "ref", "exc",
];

pub fn is_inline_expression(kind: &str) -> bool {
    INLINE_EXPRESSIONS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(kind))
}

/// Maps an arc kind to its rendering strategy. Total: unrecognized kinds map to
/// [`ArcCategory::Unknown`].
pub fn aggregate_kind(kind: &str) -> ArcCategory {
    match kind {
        "->" | "=>" | "=>>" | ">>" | ":>" | "-x" | "<-" | "<=" | "<<=" | "<<" | "<:" | "x-" => {
            ArcCategory::Directional
        }
        "<->" | "<=>" | "<<=>>" | "<<>>" | "<:>" => ArcCategory::Bidirectional,
        "--" | "==" | ".." | "::" | "|||" | "..." | "---" => ArcCategory::Nondirectional,
        "note" | "box" | "abox" | "rbox" => ArcCategory::Box,
        other if is_inline_expression(other) => ArcCategory::Nondirectional,
        _ => ArcCategory::Unknown,
    }
}

/// Returns the left-to-right form of a mirrored kind (`<-` is `->` with the ends swapped), or
/// `None` when `kind` is already canonical.
pub fn normalize_kind(kind: &str) -> Option<&'static str> {
    match kind {
        "<-" => Some("->"),
        "<=" => Some("=>"),
        "<<=" => Some("=>>"),
        "<<" => Some(">>"),
        "<:" => Some(":>"),
        "x-" => Some("-x"),
        _ => None,
    }
}
