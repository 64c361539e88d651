//! Arc kind to dot attribute lookups.
//!
//! A kind can appear in any number of the three tables; a miss means the attribute is left to
//! the graph defaults.

/// `arrowhead` / `arrowtail` value for `kind`.
pub fn arrow_for(kind: &str) -> Option<&'static str> {
    match kind {
        "->" | "<->" => Some("rvee"),
        "=>" | "<=>" => Some("normal"),
        "-x" => Some("oinvonormal"),
        _ => None,
    }
}

/// Node `shape` for box-like kinds.
pub fn shape_for(kind: &str) -> Option<&'static str> {
    match kind {
        "box" | "rbox" => Some("box"),
        "abox" => Some("hexagon"),
        "note" => Some("note"),
        _ => None,
    }
}

/// Line (or box outline) `style` for `kind`.
pub fn style_for(kind: &str) -> Option<&'static str> {
    match kind {
        ">>" | "<<>>" | ".." => Some("dashed"),
        ":>" | "<:>" | "::" => Some("bold"),
        "rbox" => Some("rounded"),
        _ => None,
    }
}
