use crate::*;
use mscdot_core::{Arc, Document, Entity};

const EMPTY_GRAPH: &str = r#"/* Sequence chart represented as a directed graph
 * in the graphviz dot language (http://graphviz.org/)
 *
 * Generated by mscdot
 */

graph {
  rankdir=LR
  splines=true
  ordering=out
  fontname="Helvetica"
  fontsize="9"
  node [style=filled, fillcolor=white fontname="Helvetica", fontsize="9" ]
  edge [fontname="Helvetica", fontsize="9", arrowhead=vee, arrowtail=vee, dir=forward]

}"#;

fn body(out: &str) -> &str {
    out.split_once("dir=forward]\n\n")
        .map(|(_, rest)| rest)
        .expect("graph defaults")
}

fn ab(arcs: Vec<Vec<Arc>>) -> Document {
    Document::new(vec![Entity::new("A"), Entity::new("B")], arcs)
}

#[test]
fn empty_document_renders_a_closed_graph() {
    assert_eq!(render_dot(&Document::default()), EMPTY_GRAPH);
}

#[test]
fn directional_arc_is_numbered_and_gets_an_arrowhead() {
    let doc = ab(vec![vec![Arc::new("->", "A", "B").with_label("hi")]]);
    assert_eq!(
        body(&render_dot(&doc)),
        concat!(
            "  \"A\" [label=\"A\"];\n",
            "  \"B\" [label=\"B\"];\n",
            "\n",
            "  \"A\" -- \"B\" [label=\"(1) hi\", arrowhead=\"rvee\"]\n",
            "}"
        )
    );
}

#[test]
fn unlabeled_box_becomes_an_auxiliary_node_with_two_dotted_edges() {
    let doc = ab(vec![vec![Arc::new("box", "A", "B")]]);
    let out = render_dot(&doc);
    assert!(out.ends_with(concat!(
        "\n",
        "  box1 [shape=\"box\"]\n",
        "  box1 -- {\"A\",\"B\"} [style=\"dotted\", dir=\"none\"]\n",
        "}"
    )));
}

#[test]
fn box_labels_are_not_numbered() {
    let mut note = Arc::new("rbox", "A", "A").with_label("thinking");
    note.fillcolor = Some("yellow".to_string());
    let doc = ab(vec![vec![Arc::new("->", "A", "B")], vec![note]]);
    let out = render_dot(&doc);
    assert!(out.contains(
        "  box2 [label=\"thinking\", fillcolor=\"yellow\", style=\"rounded\", shape=\"box\"]\n"
    ));
    assert!(out.contains("  box2 -- {\"A\",\"A\"} [style=\"dotted\", dir=\"none\"]\n"));
}

#[test]
fn container_arc_opens_a_labeled_cluster() {
    let doc = ab(vec![vec![
        Arc::new("loop", "A", "B")
            .with_label("n times")
            .with_arcs(vec![vec![Arc::new("->", "A", "B").with_label("inner")]]),
    ]]);
    let out = render_dot(&doc);
    assert!(out.ends_with(concat!(
        "\n\n",
        "  \"A\" -- \"B\" [label=\"(1) n times\", dir=\"none\"]\n",
        "  subgraph cluster_1{\n",
        "   label=\"loop: n times\" labeljust=\"l\"\n",
        "    \"A\" -- \"B\" [label=\"(2) inner\", arrowhead=\"rvee\"]\n",
        "  }\n",
        "}"
    )));
}

#[test]
fn unlabeled_container_has_no_cluster_label() {
    let doc = ab(vec![vec![
        Arc::new("opt", "A", "B").with_arcs(vec![vec![Arc::new("=>", "A", "B")]]),
    ]]);
    let out = render_dot(&doc);
    assert!(out.contains(concat!(
        "  \"A\" -- \"B\" [label=\"(1)\", dir=\"none\"]\n",
        "  subgraph cluster_1{\n",
        "    \"A\" -- \"B\" [label=\"(2)\", arrowhead=\"normal\"]\n",
        "  }\n"
    )));
    assert!(!out.contains("labeljust"));
}

#[test]
fn bidirectional_and_nondirectional_arcs() {
    let doc = ab(vec![
        vec![Arc::new("<->", "A", "B")],
        vec![Arc::new("<:>", "A", "B")],
        vec![Arc::new("..", "A", "B")],
    ]);
    let out = render_dot(&doc);
    assert!(out.contains(
        "  \"A\" -- \"B\" [label=\"(1)\", arrowhead=\"rvee\", arrowtail=\"rvee\", dir=\"both\"]\n"
    ));
    assert!(out.contains("  \"A\" -- \"B\" [label=\"(2)\", style=\"bold\", dir=\"both\"]\n"));
    assert!(out.contains("  \"A\" -- \"B\" [label=\"(3)\", style=\"dashed\", dir=\"none\"]\n"));
}

#[test]
fn unknown_kind_renders_with_edge_defaults_when_lenient() {
    let doc = ab(vec![vec![Arc::new("~>", "A", "B").with_label("what")]]);
    let out = render_dot(&doc);
    assert!(out.contains("  \"A\" -- \"B\" [label=\"(1) what\"]\n"));
}

#[test]
fn strict_options_reject_unknown_kinds() {
    let doc = ab(vec![vec![Arc::new("~>", "A", "B")]]);
    let err = render_dot_with_options(&doc, &RenderOptions::strict()).unwrap_err();
    assert!(matches!(err, Error::UnknownArcKind { ref kind } if kind == "~>"));
}

#[test]
fn strict_options_reject_undeclared_entities() {
    let doc = ab(vec![vec![
        Arc::new("loop", "A", "B").with_arcs(vec![vec![Arc::new("->", "A", "C")]]),
    ]]);
    let err = render_dot_with_options(&doc, &RenderOptions::strict()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "arc \"->\" references undeclared entity \"C\""
    );

    let lenient = render_dot_with_options(&doc, &RenderOptions::lenient()).unwrap();
    assert!(lenient.contains("\"A\" -- \"C\""));
}

#[test]
fn strict_checks_ignore_malformed_arcs() {
    let doc = ab(vec![vec![Arc::new("~>", "A", ""), Arc::new("->", "", "Z")]]);
    assert!(render_dot_with_options(&doc, &RenderOptions::strict()).is_ok());
}

#[test]
fn render_lenient_ignores_strict_options() {
    let doc = ab(vec![vec![Arc::new("~>", "A", "Q")]]);
    let renderer = DotRenderer::with_options(RenderOptions::strict());
    assert!(renderer.render(&doc).is_err());
    assert!(renderer.render_lenient(&doc).contains("\"A\" -- \"Q\" [label=\"(1)\"]"));
}

#[test]
fn quotes_in_names_and_values_are_escaped() {
    let doc = Document::new(
        vec![Entity::new("say \"hi\"").with_label("the \"greeter\"")],
        vec![vec![
            Arc::new("alt", "say \"hi\"", "say \"hi\"")
                .with_label("if \"x\"")
                .with_arcs(Vec::new()),
        ]],
    );
    let out = render_dot(&doc);
    assert!(out.contains("  \"say \\\"hi\\\"\" [label=\"the \\\"greeter\\\"\"];\n"));
    assert!(out.contains(" label=\"alt: if \\\"x\\\"\" labeljust=\"l\"\n"));
}

#[test]
fn backslash_quote_stays_inside_the_string() {
    let doc = Document::new(
        vec![Entity::new("a\\\"b")],
        vec![vec![
            Arc::new("->", "a\\\"b", "a\\\"b").with_label("say a\\\"b"),
            Arc::new("loop", "a\\\"b", "a\\\"b")
                .with_label("C:\\")
                .with_arcs(Vec::new()),
        ]],
    );
    let out = render_dot(&doc);
    assert!(out.contains("  \"a\\\\\\\"b\" [label=\"a\\\\\\\"b\"];\n"));
    assert!(out.contains(
        "  \"a\\\\\\\"b\" -- \"a\\\\\\\"b\" [label=\"(1) say a\\\\\\\"b\", arrowhead=\"rvee\"]\n"
    ));
    assert!(out.contains(" label=\"loop: C:\\\\\" labeljust=\"l\"\n"));
}

#[test]
fn spacing_inside_labels_is_preserved() {
    let doc = ab(vec![vec![Arc::new("->", "A", "B").with_label("x  =  y")]]);
    assert!(render_dot(&doc).contains("[label=\"(1) x  =  y\", arrowhead=\"rvee\"]"));
}

#[test]
fn wrap_width_is_configurable() {
    let doc = ab(vec![vec![Arc::new("->", "A", "B").with_label("one two three")]]);
    let out = render_dot_with_options(&doc, &RenderOptions::lenient().with_wrap_width(8)).unwrap();
    assert!(out.contains("[label=\"(1) one\ntwo\nthree\", arrowhead=\"rvee\"]"));

    let unwrapped =
        render_dot_with_options(&doc, &RenderOptions::lenient().with_wrap_width(0)).unwrap();
    assert!(unwrapped.contains("[label=\"(1) one two three\", arrowhead=\"rvee\"]"));
}

#[test]
fn options_default_to_lenient() {
    assert_eq!(RenderOptions::default(), RenderOptions::lenient());
    assert_eq!(RenderOptions::default().wrap_width, DEFAULT_WRAP_WIDTH);
    assert!(RenderOptions::strict().validate_references);
    assert_eq!(DotRenderer::new().options(), &RenderOptions::lenient());
}
