//! End-to-end tests: schedule the processor with a real log configuration
//! document, push flowfiles through an in-memory session and check both the
//! routing decisions and what landed in the log file.

use flowfile_logger::prelude::*;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn file_document(path: &Path, level: &str) -> String {
    serde_json::json!({
        "level": level,
        "pattern": "{l}|{m}",
        "appenders": [{"type": "file", "path": path}]
    })
    .to_string()
}

fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn read_log(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

struct Fixture {
    _dir: TempDir,
    log_path: std::path::PathBuf,
    processor: LogProcessor,
}

fn scheduled(properties: &[(&str, &str)]) -> Fixture {
    let dir = tempdir().expect("temp dir");
    let log_path = dir.path().join("flow.log");

    let mut context =
        ProcessContext::new().with_property("logConfiguration", &file_document(&log_path, "info"));
    for (name, value) in properties {
        context.set_property(name, value);
    }

    let processor = LogProcessor::new();
    processor.on_scheduled(&context).expect("schedule processor");

    Fixture {
        _dir: dir,
        log_path,
        processor,
    }
}

fn drain(processor: &LogProcessor, session: &mut InMemorySession) -> Vec<Relationship> {
    let mut routed = Vec::new();
    while let Some(relationship) = processor.on_trigger(session).expect("scheduled") {
        routed.push(relationship);
    }
    routed
}

#[test]
fn test_content_line_without_prefix() {
    let fixture = scheduled(&[]);
    let mut session = InMemorySession::new();
    session.enqueue(Attributes::new(), "hello");

    assert_eq!(
        drain(&fixture.processor, &mut session),
        vec![Relationship::Success]
    );
    assert_eq!(
        read_log(&fixture.log_path),
        vec!["ERROR| flowfile-content: hello ".to_string()]
    );
}

#[test]
fn test_attribute_line_with_prefix() {
    let fixture = scheduled(&[
        ("prefix", "X"),
        ("source", "flowfile-attribute"),
        ("type", "info"),
    ]);
    let mut session = InMemorySession::new();
    session.enqueue(attributes(&[("a", "1")]), "not logged");

    drain(&fixture.processor, &mut session);

    let lines = read_log(&fixture.log_path);
    assert_eq!(lines, vec!["INFO|[X]  flowfile-attribute: {a=1}".to_string()]);
}

#[test]
fn test_whitespace_prefix_is_logged_verbatim() {
    let fixture = scheduled(&[("prefix", "  ")]);
    let mut session = InMemorySession::new();
    session.enqueue(Attributes::new(), "hello");

    assert_eq!(
        drain(&fixture.processor, &mut session),
        vec![Relationship::Success]
    );
    assert_eq!(
        read_log(&fixture.log_path),
        vec!["ERROR|[  ] flowfile-content: hello ".to_string()]
    );
}

#[test]
fn test_selected_attribute_missing_from_flowfile() {
    let fixture = scheduled(&[("attributes", "missing")]);
    let mut session = InMemorySession::new();
    session.enqueue(attributes(&[("filename", "a.txt")]), "body");

    assert_eq!(
        drain(&fixture.processor, &mut session),
        vec![Relationship::Success]
    );
    assert_eq!(
        read_log(&fixture.log_path),
        vec!["ERROR| flowfile-content: body flowfile-attribute: {missing=null}".to_string()]
    );
}

#[test]
fn test_mixed_batch_routes_each_flowfile_once() {
    let fixture = scheduled(&[("source", "flowfile-content+flowfile-attribute")]);
    let mut session = InMemorySession::new();
    session.enqueue(attributes(&[("filename", "good.txt")]), "fine");
    session.enqueue(attributes(&[("filename", "bad.bin")]), vec![0xc3_u8, 0x28]);
    session.enqueue_unreadable(attributes(&[("filename", "gone.txt")]), "claim missing");
    session.enqueue(attributes(&[("filename", "also-good.txt")]), "ok");

    let routed = drain(&fixture.processor, &mut session);
    assert_eq!(
        routed,
        vec![
            Relationship::Success,
            Relationship::Failure,
            Relationship::Failure,
            Relationship::Success,
        ]
    );
    assert_eq!(session.pending(), 0);
    assert_eq!(session.transferred().len(), 4);

    let failed: Vec<&str> = session
        .transferred_to(Relationship::Failure)
        .iter()
        .filter_map(|f| f.attribute("filename"))
        .collect();
    assert_eq!(failed, vec!["bad.bin", "gone.txt"]);

    assert_eq!(read_log(&fixture.log_path).len(), 2);
}

#[test]
fn test_level_threshold_drops_lines_but_still_succeeds() {
    let dir = tempdir().expect("temp dir");
    let log_path = dir.path().join("flow.log");
    let processor = LogProcessor::new();
    processor
        .on_scheduled(
            &ProcessContext::new()
                .with_property("logConfiguration", &file_document(&log_path, "error"))
                .with_property("type", "info"),
        )
        .expect("schedule");

    let mut session = InMemorySession::new();
    session.enqueue(Attributes::new(), "quiet");

    assert_eq!(drain(&processor, &mut session), vec![Relationship::Success]);
    assert!(read_log(&log_path).is_empty());
}

#[test]
fn test_unparseable_document_fails_activation() {
    let processor = LogProcessor::new();
    let err = processor
        .on_scheduled(
            &ProcessContext::new().with_property("logConfiguration", "<Configuration/>"),
        )
        .expect_err("document is not JSON");
    assert!(matches!(err, ConfigurationError::InvalidDocument(_)));

    let mut session = InMemorySession::new();
    session.enqueue(Attributes::new(), "waiting");
    assert!(matches!(
        processor.on_trigger(&mut session),
        Err(TriggerError::NotScheduled(_))
    ));
    assert_eq!(session.pending(), 1);
}

#[test]
fn test_rescheduling_switches_sink() {
    let dir = tempdir().expect("temp dir");
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    let processor = LogProcessor::new();

    processor
        .on_scheduled(
            &ProcessContext::new().with_property("logConfiguration", &file_document(&first, "info")),
        )
        .expect("schedule first");
    let mut session = InMemorySession::new();
    session.enqueue(Attributes::new(), "one");
    drain(&processor, &mut session);

    processor
        .on_scheduled(
            &ProcessContext::new()
                .with_property("logConfiguration", &file_document(&second, "info"))
                .with_property("prefix", "v2"),
        )
        .expect("schedule second");
    session.enqueue(Attributes::new(), "two");
    drain(&processor, &mut session);

    assert_eq!(read_log(&first), vec!["ERROR| flowfile-content: one ".to_string()]);
    assert_eq!(
        read_log(&second),
        vec!["ERROR|[v2] flowfile-content: two ".to_string()]
    );
}

#[test]
fn test_stopped_processor_rejects_triggers() {
    let fixture = scheduled(&[]);
    fixture.processor.on_stopped();

    let mut session = InMemorySession::new();
    session.enqueue(Attributes::new(), "late");
    assert!(fixture.processor.on_trigger(&mut session).is_err());
}
