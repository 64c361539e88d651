use crate::{Error, RenderOptions, Result};
use mscdot_core::{ArcCategory, ArcRow, Document, aggregate_kind};
use rustc_hash::FxHashSet;

/// Runs the opt-in strict checks over a normalized document. Malformed arcs are ignored here
/// just as they are during emission.
pub(crate) fn validate(document: &Document, options: &RenderOptions) -> Result<()> {
    let declared: FxHashSet<&str> = document.entities.iter().map(|e| e.name.as_str()).collect();
    validate_rows(&document.arcs, &declared, options)
}

fn validate_rows(
    rows: &[ArcRow],
    declared: &FxHashSet<&str>,
    options: &RenderOptions,
) -> Result<()> {
    for arc in rows.iter().flatten() {
        if !arc.is_well_formed() {
            continue;
        }
        if options.reject_unknown_kinds && aggregate_kind(&arc.kind) == ArcCategory::Unknown {
            return Err(Error::UnknownArcKind {
                kind: arc.kind.clone(),
            });
        }
        if options.validate_references {
            for name in [&arc.from, &arc.to] {
                if !declared.contains(name.as_str()) {
                    return Err(Error::UndeclaredEntity {
                        name: name.clone(),
                        kind: arc.kind.clone(),
                    });
                }
            }
        }
        if let Some(children) = arc.arcs.as_deref() {
            validate_rows(children, declared, options)?;
        }
    }
    Ok(())
}
