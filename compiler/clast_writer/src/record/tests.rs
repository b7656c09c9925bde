use pretty_assertions::assert_eq;

use super::*;

fn record(body: impl FnOnce(&mut RecordingWriter) -> Result<(), WriteError>) -> RecordingWriter {
    let mut w = RecordingWriter::new();
    if let Err(e) = body(&mut w) {
        panic!("recording failed: {e}");
    }
    w
}

#[test]
fn test_events_are_recorded_in_order() {
    let w = record(|w| {
        w.variant("Leaf", |w| {
            w.object(1, |w| {
                w.emit_tag("pointer")?;
                w.emit_string("0x10")
            })
        })?;
        w.finish()
    });
    assert_eq!(
        w.events(),
        &[
            Event::Variant("Leaf".into()),
            Event::Open {
                kind: ScopeKind::Object,
                arity: 1
            },
            Event::Tag("pointer".into()),
            Event::String("0x10".into()),
            Event::Close,
            Event::Close,
        ]
    );
    assert_eq!(w.max_depth(), 2);
    assert_eq!(w.field_strings("pointer").collect::<Vec<_>>(), vec!["0x10"]);
}

#[test]
fn test_document_tree() {
    let w = record(|w| {
        w.tuple(3, |w| {
            w.emit_unsigned(7)?;
            w.array(2, |w| {
                w.emit_boolean(true)?;
                w.emit_simple_variant("Tls_none")
            })?;
            w.object(1, |w| {
                w.emit_tag("name")?;
                w.emit_string("x")
            })
        })?;
        w.finish()
    });
    let doc = w.document();
    let doc = doc.as_ref();
    assert_eq!(doc.and_then(|d| d.at(0)).and_then(Value::as_integer), Some(7));
    assert_eq!(
        doc.and_then(|d| d.at(1)).and_then(|a| a.at(1)).and_then(Value::tag),
        Some("Tls_none")
    );
    assert_eq!(
        doc.and_then(|d| d.at(2))
            .and_then(|o| o.field("name"))
            .and_then(Value::as_str),
        Some("x")
    );
}

#[test]
fn test_document_requires_finish() {
    let mut w = RecordingWriter::new();
    assert!(w.emit_integer(1).is_ok());
    assert_eq!(w.document(), None);
    assert!(w.finish().is_ok());
    assert_eq!(w.document(), Some(Value::Integer(1)));
}

#[test]
fn test_recording_checks_arity() {
    let mut w = RecordingWriter::new();
    assert!(w.begin_array(1).is_ok());
    assert!(w.emit_string("a").is_ok());
    assert!(matches!(
        w.emit_string("b"),
        Err(WriteError::Overflow {
            scope: ScopeKind::Array,
            arity: 1
        })
    ));
}

#[test]
fn test_malformed_streams_do_not_fold() {
    assert_eq!(Value::from_events(&[Event::Close]), None);
    assert_eq!(
        Value::from_events(&[Event::Integer(1), Event::Integer(2)]),
        None
    );
    assert_eq!(
        Value::from_events(&[Event::Open {
            kind: ScopeKind::Array,
            arity: 0
        }]),
        None
    );
}
