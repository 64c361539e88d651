//! Pre-render normalization ("dot flatten").
//!
//! Produces a fresh document in which:
//! - every entity has a label (defaulting to its name),
//! - mirrored kinds (`<-`, `<<=`, ...) are rewritten left-to-right with `from`/`to` swapped,
//! - arcs without colors inherit the `arc*` colors of their `from` entity,
//! - broadcast arcs (`to == "*"`) are exploded into one arc per other entity.
//!
//! Rewrites apply at every nesting depth. The input is never modified.

use crate::kind::normalize_kind;
use crate::model::{Arc, ArcRow, Document, Entity};
use rustc_hash::FxHashMap;

pub fn normalize(document: &Document) -> Document {
    let entities = document
        .entities
        .iter()
        .cloned()
        .map(|mut entity| {
            if entity.label.is_none() {
                entity.label = Some(entity.name.clone());
            }
            entity
        })
        .collect::<Vec<_>>();

    let arcs = {
        let by_name: FxHashMap<&str, &Entity> =
            entities.iter().map(|e| (e.name.as_str(), e)).collect();
        normalize_rows(&document.arcs, &entities, &by_name)
    };

    Document { entities, arcs }
}

fn normalize_rows(
    rows: &[ArcRow],
    entities: &[Entity],
    by_name: &FxHashMap<&str, &Entity>,
) -> Vec<ArcRow> {
    rows.iter()
        .map(|row| {
            let mut kept: ArcRow = Vec::with_capacity(row.len());
            let mut exploded: ArcRow = Vec::new();
            for arc in row {
                let arc = normalize_arc(arc, entities, by_name);
                if arc.is_broadcast() {
                    tracing::trace!(kind = %arc.kind, from = %arc.from, "exploding broadcast arc");
                    exploded.extend(explode_broadcast(&arc, entities));
                } else {
                    kept.push(arc);
                }
            }
            kept.extend(exploded);
            kept
        })
        .collect()
}

fn normalize_arc(arc: &Arc, entities: &[Entity], by_name: &FxHashMap<&str, &Entity>) -> Arc {
    let mut out = Arc {
        kind: arc.kind.clone(),
        from: arc.from.clone(),
        to: arc.to.clone(),
        label: arc.label.clone(),
        color: arc.color.clone(),
        fontcolor: arc.fontcolor.clone(),
        fillcolor: arc.fillcolor.clone(),
        arcs: arc
            .arcs
            .as_deref()
            .map(|rows| normalize_rows(rows, entities, by_name)),
    };

    if let Some(kind) = normalize_kind(&out.kind) {
        out.kind = kind.to_string();
        std::mem::swap(&mut out.from, &mut out.to);
    }

    if let Some(entity) = by_name.get(out.from.as_str()) {
        inherit(&mut out.color, &entity.arccolor);
        inherit(&mut out.fontcolor, &entity.arcfontcolor);
        inherit(&mut out.fillcolor, &entity.arcfillcolor);
    }

    out
}

fn inherit(slot: &mut Option<String>, fallback: &Option<String>) {
    if slot.is_none() {
        slot.clone_from(fallback);
    }
}

fn explode_broadcast(arc: &Arc, entities: &[Entity]) -> Vec<Arc> {
    entities
        .iter()
        .filter(|e| e.name != arc.from)
        .map(|e| Arc {
            to: e.name.clone(),
            ..arc.clone()
        })
        .collect()
}
