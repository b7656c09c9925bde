//! Delta-compressed source locations.
//!
//! Locations are written relative to the previous one emitted in the same
//! pass: the file only when it changes, the line only when the file or line
//! changes, the column always. Readers rebuild absolute positions by
//! replaying the document in order.

use clast_ir::{AstContext, FileId, SourceLocation, SourceRange};
use clast_writer::DocumentWriter;

use crate::{ExportError, PathNormalizer};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct LocationCursor {
    last_file: Option<FileId>,
    last_line: Option<u32>,
}

impl LocationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn last_file(&self) -> Option<FileId> {
        self.last_file
    }

    pub fn last_line(&self) -> Option<u32> {
        self.last_line
    }

    /// Number of fields `loc` will be written with, given the cursor state.
    pub fn delta_arity(&self, loc: Option<SourceLocation>) -> usize {
        match loc {
            None => 0,
            Some(loc) if self.last_file != Some(loc.file) => 3,
            Some(loc) if self.last_line != Some(loc.line) => 2,
            Some(_) => 1,
        }
    }

    /// Write `loc` as an object and advance the cursor to it.
    pub fn emit<W: DocumentWriter + ?Sized>(
        &mut self,
        out: &mut W,
        ctx: &AstContext,
        normalizer: &PathNormalizer,
        loc: Option<SourceLocation>,
    ) -> Result<(), ExportError> {
        let arity = self.delta_arity(loc);
        out.begin_object(arity)?;
        if let Some(loc) = loc {
            if arity == 3 {
                out.emit_tag("file")?;
                out.emit_string(&normalizer.normalize(ctx.file_name(loc.file)))?;
            }
            if arity >= 2 {
                out.emit_tag("line")?;
                out.emit_unsigned(u64::from(loc.line))?;
            }
            out.emit_tag("column")?;
            out.emit_unsigned(u64::from(loc.column))?;
            self.last_file = Some(loc.file);
            self.last_line = Some(loc.line);
        }
        out.end_scope()?;
        Ok(())
    }

    /// Write a range as a `(begin, end)` tuple.
    pub fn emit_range<W: DocumentWriter + ?Sized>(
        &mut self,
        out: &mut W,
        ctx: &AstContext,
        normalizer: &PathNormalizer,
        range: SourceRange,
    ) -> Result<(), ExportError> {
        out.begin_tuple(2)?;
        self.emit(out, ctx, normalizer, range.begin)?;
        self.emit(out, ctx, normalizer, range.end)?;
        out.end_scope()?;
        Ok(())
    }
}
