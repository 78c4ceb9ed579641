//! End-to-end scans of complete DOT documents.
//!
//! Set `RUST_LOG=dot_lexer=trace` to see per-token events.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::sync::Once;

use dot_lexer::{
    tokenize, Mode, Position, ScanErrorKind, Scanner, SourceBuffer, TokenMap, TokenTable,
};
use pretty_assertions::assert_eq;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

const CLUSTERS: &str = r#"//line clusters.dot:1
/* Two clusters and an HTML label. */
strict digraph G {
    graph [rankdir=LR, label="Build \"pipeline\""];
    node [shape=box fontsize=10.5];

    subgraph cluster_0 {
        a0 -> a1 -> a2;   # left
        label = "process #1";
    }
    subgraph cluster_1 {
        b0 -> b1 [weight=-2, penwidth=.75];
    }
    start -> a0;
    a2 -> end [label=<<b>done</b>>];
    end [shape=Msquare];
}
"#;

fn names(source: &str) -> Vec<String> {
    let table = TokenTable::dot();
    let src = SourceBuffer::from(source);
    let scanned = tokenize(&src, &table);
    scanned
        .tokens
        .iter()
        .map(|(tok, _)| table.name(tok.kind).unwrap().to_string())
        .collect()
}

#[test]
fn clusters_document_scans_cleanly() {
    init_tracing();
    let table = TokenTable::dot();
    let src = SourceBuffer::from(CLUSTERS);
    let scanned = tokenize(&src, &table);
    assert!(!scanned.has_errors(), "{:?}", scanned.errors);

    let kinds: Vec<&str> = scanned
        .tokens
        .iter()
        .take(7)
        .map(|(tok, _)| table.name(tok.kind).unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["strict", "digraph", "id", "{", "graph", "[", "id"]
    );

    let html = scanned
        .tokens
        .iter()
        .find(|(tok, _)| tok.kind == table.kind_of("html_lit"))
        .unwrap();
    assert_eq!(html.0.text(), "<<b>done</b>>");
    assert_eq!(html.1.line, 14);

    let numbers: Vec<String> = scanned
        .tokens
        .iter()
        .filter(|(tok, _)| {
            tok.kind == table.kind_of("int_lit") || tok.kind == table.kind_of("float_lit")
        })
        .map(|(tok, _)| tok.text().into_owned())
        .collect();
    assert_eq!(numbers, vec!["10.5", "-2", ".75"]);
}

#[test]
fn line_directive_names_the_file() {
    init_tracing();
    let table = TokenTable::dot();
    let src = SourceBuffer::from(CLUSTERS);
    let mut scanner = Scanner::new(&src, &table);
    let (tok, pos) = scanner.scan();
    assert_eq!(tok.text(), "strict");
    assert_eq!(pos, Position::new(60, 2, 1));
    assert_eq!(scanner.filename(), Some("clusters.dot"));
}

#[test]
fn comments_come_back_in_scan_comments_mode() {
    init_tracing();
    let table = TokenTable::dot();
    let src = SourceBuffer::from(CLUSTERS);
    let comments: Vec<String> = Scanner::new(&src, &table)
        .with_mode(Mode::SCAN_COMMENTS)
        .into_iter()
        .filter(|(tok, _)| tok.kind == table.kind_of("comment"))
        .map(|(tok, _)| tok.text().into_owned())
        .collect();
    assert_eq!(
        comments,
        vec![
            "//line clusters.dot:1",
            "/* Two clusters and an HTML label. */",
            "# left",
        ]
    );
}

#[test]
fn undirected_graph_with_keyword_variants() {
    assert_eq!(
        names("GRAPH { Node [color=red]; a -- b -- c }"),
        vec![
            "GRAPH", "{", "Node", "[", "id", "=", "id", "]", ";", "id", "--", "id", "--", "id",
            "}",
        ]
    );
}

#[test]
fn broken_document_keeps_scanning() {
    init_tracing();
    let table = TokenTable::dot();
    let src = SourceBuffer::from("digraph {\n  a -> b [label=\"oops\n  c @ d;\n  e [html=<x>\n");
    let scanned = tokenize(&src, &table);
    let kinds: Vec<ScanErrorKind> = scanned.errors.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ScanErrorKind::UnterminatedString,
            ScanErrorKind::IllegalCharacter { ch: '@' },
        ]
    );
    assert_eq!(scanned.errors[0].pos, Position::new(26, 2, 17));
    assert_eq!(scanned.errors[1].pos.to_string(), "3:5");
    assert_eq!(scanned.error_count, 2);

    let last = scanned.tokens.last().unwrap();
    assert_eq!(last.0.kind, table.kind_of("html_lit"));
    assert_eq!(last.0.text(), "<x>");
}

#[test]
fn shared_table_across_threads() {
    let table = TokenTable::dot();
    std::thread::scope(|s| {
        let handles: Vec<_> = ["graph { a }", "digraph { b -> c }"]
            .into_iter()
            .map(|source| {
                let table = &table;
                s.spawn(move || {
                    let src = SourceBuffer::from(source);
                    let scanned = tokenize(&src, table);
                    scanned.tokens.len()
                })
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![4, 6]);
    });
}
