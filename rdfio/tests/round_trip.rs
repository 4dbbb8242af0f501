//! End-to-end tests: parse, serialize, and parse again across syntaxes.

use rdfio::model::{Predicate, Statement, Subject, Term};
use rdfio::{
    EventCollector, Reader, ReaderOptions, Syntax, Writer, WriterOptions,
};

fn parse(syntax: Syntax, input: &str) -> Vec<Statement> {
    Reader::new(syntax, ReaderOptions::default())
        .parse_to_statements(input)
        .unwrap()
}

fn serialize(syntax: Syntax, options: WriterOptions, statements: &[Statement]) -> String {
    let mut writer = Writer::new(Vec::new(), syntax, options);
    for statement in statements {
        writer.write_statement(statement).unwrap();
    }
    writer.finish().unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn turtle_to_ntriples_and_back() {
    let turtle = r#"
        @prefix ex: <http://example.org/> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

        ex:alice a ex:Person ;
            ex:name "Alice"@en ;
            ex:age 30 ;
            ex:height 1.65 ;
            ex:score "9.5e1"^^xsd:double ;
            ex:active true ;
            ex:knows _:bob .
    "#;

    let statements = parse(Syntax::Turtle, turtle);
    assert_eq!(statements.len(), 7);

    let lines = serialize(Syntax::NTriples, WriterOptions::default(), &statements);
    let reparsed = parse(Syntax::NTriples, &lines);
    assert_eq!(statements, reparsed);
}

#[test]
fn turtle_round_trip_with_abbreviation() {
    let turtle = r#"
        @prefix ex: <http://example.org/> .
        ex:alice ex:name "Alice" ;
            ex:knows ex:bob, ex:carol .
        ex:bob ex:name "Bob" .
    "#;

    let statements = parse(Syntax::Turtle, turtle);
    let options = WriterOptions {
        abbreviate: true,
        ..Default::default()
    };
    let out = serialize(Syntax::Turtle, options, &statements);

    // The abbreviated form uses one statement group per subject
    assert_eq!(out.matches(" .\n").count(), 2);
    assert_eq!(parse(Syntax::Turtle, &out), statements);
}

#[test]
fn nquads_round_trip() {
    let input = r#"
<http://a> <http://p> "v" <http://g> .
<http://a> <http://p> _:b .
<http://b> <http://p> "1.5e0"^^<http://www.w3.org/2001/XMLSchema#double> <http://g> .
"#;
    let statements = parse(Syntax::NQuads, input.trim_start());
    let out = serialize(Syntax::NQuads, WriterOptions::default(), &statements);
    assert_eq!(parse(Syntax::NQuads, &out), statements);
}

#[test]
fn trig_round_trip() {
    let trig = r#"
        @prefix ex: <http://example.org/> .
        ex:g1 {
            ex:a ex:p ex:b .
            ex:a ex:q "v" .
        }
        GRAPH ex:g2 { ex:c ex:p 42 . }
        ex:d ex:p ex:e .
    "#;

    let statements = parse(Syntax::TriG, trig);
    assert_eq!(statements.len(), 4);

    let out = serialize(Syntax::TriG, WriterOptions::default(), &statements);
    assert_eq!(parse(Syntax::TriG, &out), statements);
}

#[test]
fn special_doubles_survive_ntriples() {
    let statements = vec![
        Statement::triple(
            Subject::iri("http://a"),
            Predicate::iri("http://p"),
            Term::double(f64::INFINITY),
        ),
        Statement::triple(
            Subject::iri("http://a"),
            Predicate::iri("http://p"),
            Term::double(f64::NEG_INFINITY),
        ),
        Statement::triple(
            Subject::iri("http://a"),
            Predicate::iri("http://p"),
            Term::double(f64::NAN),
        ),
    ];

    let lines = serialize(Syntax::NTriples, WriterOptions::default(), &statements);
    // NaN compares equal here because literal equality is bitwise
    assert_eq!(parse(Syntax::NTriples, &lines), statements);
}

#[test]
fn blank_nodes_stay_disjoint_across_sources() {
    let doc = r#"_:n <http://p> "v" . [ <http://q> "w" ] ."#;

    let mut first = Reader::new(
        Syntax::Turtle,
        ReaderOptions {
            blank_prefix: Some("a-".to_string()),
            ..Default::default()
        },
    );
    let mut second = Reader::new(
        Syntax::Turtle,
        ReaderOptions {
            blank_prefix: Some("b-".to_string()),
            ..Default::default()
        },
    );

    let mut merged = first.parse_to_statements(doc).unwrap();
    merged.extend(second.parse_to_statements(doc).unwrap());

    let mut blanks: Vec<String> = merged
        .iter()
        .filter_map(|s| s.subject().as_blank())
        .map(|b| b.as_str().to_string())
        .collect();
    blanks.sort();
    blanks.dedup();
    assert_eq!(blanks.len(), 4);
}

#[test]
fn chop_blank_prefix_restores_labels() {
    let mut reader = Reader::new(
        Syntax::Turtle,
        ReaderOptions {
            blank_prefix: Some("doc-".to_string()),
            ..Default::default()
        },
    );
    let statements = reader
        .parse_to_statements(r#"_:n <http://p> "v" ."#)
        .unwrap();
    assert_eq!(statements[0].subject(), &Subject::blank("doc-n"));

    let options = WriterOptions {
        chop_blank_prefix: Some("doc-".to_string()),
        ..Default::default()
    };
    let out = serialize(Syntax::NTriples, options, &statements);
    assert_eq!(out, "_:n <http://p> \"v\" .\n");
}

#[test]
fn default_graph_applies_to_unlabeled_statements() {
    let mut reader = Reader::new(
        Syntax::NQuads,
        ReaderOptions {
            default_graph: Some(Subject::iri("http://fallback")),
            ..Default::default()
        },
    );
    let statements = reader
        .parse_to_statements("<http://a> <http://p> \"v\" .\n<http://a> <http://p> \"w\" <http://g> .\n")
        .unwrap();

    assert_eq!(statements[0].graph(), Some(&Subject::iri("http://fallback")));
    assert_eq!(statements[1].graph(), Some(&Subject::iri("http://g")));
}

#[test]
fn event_stream_replays_through_writer() {
    let turtle = r#"
        @prefix ex: <http://example.org/> .
        ex:alice ex:knows [ ex:name "Bob" ] ;
            ex:tags ( "x" "y" ) .
    "#;

    let mut events = EventCollector::default();
    Reader::new(Syntax::Turtle, ReaderOptions::default())
        .parse_str(turtle, &mut events)
        .unwrap();

    let mut writer = Writer::new(Vec::new(), Syntax::Turtle, WriterOptions::default());
    for event in &events.events {
        writer.write_event(event).unwrap();
    }
    writer.finish().unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();

    let original = parse(Syntax::Turtle, turtle);
    let mut replay_reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
    let replayed = replay_reader.parse_to_statements(&out).unwrap();
    assert_eq!(original, replayed);
}

#[test]
fn parse_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.ttl");
    std::fs::write(
        &path,
        "@prefix ex: <http://example.org/> .\nex:a ex:p ex:b .\n",
    )
    .unwrap();

    let mut collector = rdfio::StatementCollector::default();
    let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
    reader.parse_file(&path, &mut collector).unwrap();

    assert_eq!(collector.statements.len(), 1);
    assert_eq!(
        collector.prefixes.get("ex").map(String::as_str),
        Some("http://example.org/")
    );
}

#[test]
fn release_is_idempotent_for_both_ends() {
    let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
    assert!(reader.release());
    assert!(!reader.release());

    let mut writer = Writer::new(Vec::new(), Syntax::Turtle, WriterOptions::default());
    assert!(writer.release());
    assert!(!writer.release());
}
