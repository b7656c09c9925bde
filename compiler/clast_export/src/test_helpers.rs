//! Harness for dispatcher unit tests.
//!
//! Runs one emitter against a [`RecordingWriter`], which rejects any scope
//! whose declared arity does not match what was written, and folds the
//! recorded events into a [`Value`] tree for inspection.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use clast_ir::{AstContext, DeclId};
use clast_writer::{DocumentWriter, RecordingWriter, Value};

use crate::exporter::{ExportResult, Exporter};
use crate::identity::IdentityTable;
use crate::location::LocationCursor;
use crate::sentinel::Sentinels;
use crate::{ExportError, ExportOptions, ExportSession};

/// Run `body` with default options and return the document it wrote.
pub(crate) fn record(
    ctx: &AstContext,
    body: impl FnOnce(&mut Exporter<'_, RecordingWriter>) -> ExportResult,
) -> Value {
    try_record_with(ctx, &ExportOptions::new(), body).unwrap()
}

/// Run `body`, surfacing export errors.
pub(crate) fn try_record(
    ctx: &AstContext,
    body: impl FnOnce(&mut Exporter<'_, RecordingWriter>) -> ExportResult,
) -> Result<Value, ExportError> {
    try_record_with(ctx, &ExportOptions::new(), body)
}

pub(crate) fn try_record_with(
    ctx: &AstContext,
    options: &ExportOptions,
    body: impl FnOnce(&mut Exporter<'_, RecordingWriter>) -> ExportResult,
) -> Result<Value, ExportError> {
    let sentinels = Sentinels::new();
    let mut cursor = LocationCursor::new();
    let mut identities = IdentityTable::new();
    let mut out = RecordingWriter::new();
    let mut exporter = Exporter::new(
        ctx,
        &mut out,
        &sentinels,
        &mut cursor,
        &mut identities,
        options,
    );
    body(&mut exporter)?;
    out.finish()?;
    Ok(out.document().expect("emitter wrote one complete value"))
}

/// Export a whole translation unit through a fresh session.
pub(crate) fn export_unit(ctx: &AstContext, root: DeclId, options: &ExportOptions) -> Value {
    let mut out = RecordingWriter::new();
    ExportSession::new()
        .export(ctx, root, &mut out, options)
        .unwrap();
    assert!(out.is_finished());
    out.document().unwrap()
}

/// Fields of a node variant, in tuple order.
pub(crate) fn fields(node: &Value) -> &[Value] {
    node.argument()
        .expect("node is a variant with an argument")
        .elements()
}
