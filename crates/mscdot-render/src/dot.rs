//! Chart document to `dot` emission.
//!
//! Output layout: a comment banner, one `graph { ... }` block with graph/node/edge defaults,
//! one declaration per entity, then one statement per arc in row order. Arc labels are prefixed
//! with their sequence number (`(3) label`); box-like arcs become `boxN` nodes tied to their
//! entities with dotted edges; container arcs open a `subgraph cluster_N` holding their rows.

use crate::mappings::{arrow_for, shape_for, style_for};
use crate::text::{escape_quotes, render_attribute_text};
use crate::{RenderOptions, Result, validate};
use mscdot_core::{Arc, ArcCategory, ArcRow, Document, Entity, aggregate_kind, normalize};

const INDENT: &str = "  ";

const HEADER: &str = concat!(
    "/* Sequence chart represented as a directed graph\n",
    " * in the graphviz dot language (http://graphviz.org/)\n",
    " *\n",
    " * Generated by mscdot\n",
    " */\n",
    "\n",
    "graph {\n",
);

const GRAPH_DEFAULTS: &[&str] = &[
    "rankdir=LR",
    "splines=true",
    "ordering=out",
    r#"fontname="Helvetica""#,
    r#"fontsize="9""#,
    r#"node [style=filled, fillcolor=white fontname="Helvetica", fontsize="9" ]"#,
    r#"edge [fontname="Helvetica", fontsize="9", arrowhead=vee, arrowtail=vee, dir=forward]"#,
];

#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    options: RenderOptions,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Normalizes a copy of `document` and renders it. Fails only when the options enable a
    /// strict check and the document violates it.
    pub fn render(&self, document: &Document) -> Result<String> {
        let normalized = normalize(document);
        if !self.options.is_lenient() {
            validate::validate(&normalized, &self.options)?;
        }
        Ok(self.emit(&normalized))
    }

    /// Like [`DotRenderer::render`], skipping the strict checks regardless of the options.
    pub fn render_lenient(&self, document: &Document) -> String {
        self.emit(&normalize(document))
    }

    fn emit(&self, document: &Document) -> String {
        tracing::debug!(
            entities = document.entities.len(),
            rows = document.arcs.len(),
            arcs = document.arc_count(),
            "rendering dot"
        );

        let mut ctx = RenderContext::new(&self.options);
        ctx.out.push_str(HEADER);
        for line in GRAPH_DEFAULTS {
            ctx.line("", line);
        }
        ctx.out.push('\n');

        if !document.entities.is_empty() {
            for entity in &document.entities {
                ctx.entity(entity);
            }
            ctx.out.push('\n');
        }
        ctx.rows(&document.arcs, "");
        ctx.out.push('}');

        tracing::debug!(numbered = ctx.counter, bytes = ctx.out.len(), "rendered dot");
        ctx.out
    }
}

/// Traversal state of one render call. Holding the sequence counter here keeps numbering local
/// to the call: every render starts again at 1.
struct RenderContext<'a> {
    options: &'a RenderOptions,
    counter: usize,
    out: String,
}

impl<'a> RenderContext<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            counter: 0,
            out: String::new(),
        }
    }

    fn line(&mut self, indent: &str, content: &str) {
        self.out.push_str(INDENT);
        self.out.push_str(indent);
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn push_attribute(&self, attrs: &mut Vec<String>, name: &str, value: Option<&str>) {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return;
        };
        attrs.push(format!(
            "{name}=\"{}\"",
            render_attribute_text(value, self.options.wrap_width)
        ));
    }

    fn styled_attributes(
        &self,
        label: Option<&str>,
        color: Option<&str>,
        fontcolor: Option<&str>,
        fillcolor: Option<&str>,
    ) -> Vec<String> {
        let mut attrs = Vec::new();
        self.push_attribute(&mut attrs, "label", label);
        self.push_attribute(&mut attrs, "color", color);
        self.push_attribute(&mut attrs, "fontcolor", fontcolor);
        self.push_attribute(&mut attrs, "fillcolor", fillcolor);
        attrs
    }

    fn entity(&mut self, entity: &Entity) {
        let attrs = self.styled_attributes(
            entity.label.as_deref(),
            entity.color.as_deref(),
            entity.fontcolor.as_deref(),
            entity.fillcolor.as_deref(),
        );
        let decl = format!("{}{};", quote_name(&entity.name), attribute_block(&attrs));
        self.line("", &decl);
    }

    fn rows(&mut self, rows: &[ArcRow], indent: &str) {
        for arc in rows.iter().flatten() {
            self.arc(arc, indent);
        }
    }

    fn arc(&mut self, arc: &Arc, indent: &str) {
        if !arc.is_well_formed() {
            tracing::trace!(
                kind = %arc.kind,
                from = %arc.from,
                to = %arc.to,
                "skipping malformed arc"
            );
            return;
        }

        self.counter += 1;
        let seq = self.counter;
        match aggregate_kind(&arc.kind) {
            ArcCategory::Box => self.box_arc(arc, seq, indent),
            category => self.edge_arc(arc, category, seq, indent),
        }

        if arc.is_container() {
            self.cluster(arc, seq, indent);
        }
    }

    fn cluster(&mut self, arc: &Arc, seq: usize, indent: &str) {
        self.line(indent, &format!("subgraph cluster_{seq}{{"));
        if let Some(label) = arc.label.as_deref().filter(|l| !l.is_empty()) {
            let label_line = format!(
                " label=\"{}\" labeljust=\"l\"",
                escape_quotes(&format!("{}: {label}", arc.kind))
            );
            self.line(indent, &label_line);
        }
        let nested = format!("{indent}{INDENT}");
        self.rows(arc.arcs.as_deref().unwrap_or_default(), &nested);
        self.line(indent, "}");
    }

    fn box_arc(&mut self, arc: &Arc, seq: usize, indent: &str) {
        let name = format!("box{seq}");

        let mut attrs = self.styled_attributes(
            arc.label.as_deref(),
            arc.color.as_deref(),
            arc.fontcolor.as_deref(),
            arc.fillcolor.as_deref(),
        );
        self.push_attribute(&mut attrs, "style", style_for(&arc.kind));
        self.push_attribute(&mut attrs, "shape", shape_for(&arc.kind));
        self.line(indent, &format!("{name}{}", attribute_block(&attrs)));

        let mut edge_attrs = Vec::new();
        self.push_attribute(&mut edge_attrs, "style", Some("dotted"));
        self.push_attribute(&mut edge_attrs, "dir", Some("none"));
        let edge = format!(
            "{name} -- {{{},{}}}{}",
            quote_name(&arc.from),
            quote_name(&arc.to),
            attribute_block(&edge_attrs)
        );
        self.line(indent, &edge);
    }

    fn edge_arc(&mut self, arc: &Arc, category: ArcCategory, seq: usize, indent: &str) {
        let label = numbered_label(seq, arc.label.as_deref());
        let mut attrs = self.styled_attributes(
            Some(&label),
            arc.color.as_deref(),
            arc.fontcolor.as_deref(),
            arc.fillcolor.as_deref(),
        );
        self.push_attribute(&mut attrs, "style", style_for(&arc.kind));

        let arrow = arrow_for(&arc.kind);
        match category {
            ArcCategory::Directional => {
                self.push_attribute(&mut attrs, "arrowhead", arrow);
            }
            ArcCategory::Bidirectional => {
                self.push_attribute(&mut attrs, "arrowhead", arrow);
                self.push_attribute(&mut attrs, "arrowtail", arrow);
                self.push_attribute(&mut attrs, "dir", Some("both"));
            }
            ArcCategory::Nondirectional => {
                self.push_attribute(&mut attrs, "dir", Some("none"));
            }
            ArcCategory::Unknown => {
                tracing::trace!(kind = %arc.kind, "unknown arc kind, using edge defaults");
            }
            ArcCategory::Box => {}
        }

        let edge = format!(
            "{} -- {}{}",
            quote_name(&arc.from),
            quote_name(&arc.to),
            attribute_block(&attrs)
        );
        self.line(indent, &edge);
    }
}

fn numbered_label(seq: usize, label: Option<&str>) -> String {
    match label.filter(|l| !l.is_empty()) {
        Some(label) => format!("({seq}) {label}"),
        None => format!("({seq})"),
    }
}

fn quote_name(name: &str) -> String {
    format!("\"{}\"", escape_quotes(name))
}

fn attribute_block(attrs: &[String]) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" [{}]", attrs.join(", "))
    }
}
