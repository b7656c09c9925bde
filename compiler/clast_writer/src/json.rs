//! JSON and Yojson text encoding.
//!
//! | Shape            | `Json`            | `Yojson`         |
//! |------------------|-------------------|------------------|
//! | object           | `{"f": v}`        | `{"f": v}`       |
//! | array            | `[a, b]`          | `[a, b]`         |
//! | tuple            | `[a, b]`          | `(a, b)`         |
//! | variant with arg | `["Tag", arg]`    | `<"Tag": arg>`   |
//! | simple variant   | `"Tag"`           | `<"Tag">`        |
//!
//! Pretty output puts each object field and array or tuple element on its
//! own line, indented by two spaces per level. Variants stay inline with
//! their argument.

use std::fmt::Write as _;
use std::io::Write;

use crate::scope::{ScopeKind, ScopeStack, Slot};
use crate::{DocumentWriter, WriteError};

/// Text dialect of a [`JsonWriter`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum JsonDialect {
    #[default]
    Json,
    /// The extended JSON accepted by OCaml's `yojson` (tuples and variants).
    Yojson,
}

/// Streaming JSON writer over any [`Write`] sink.
pub struct JsonWriter<W: Write> {
    out: W,
    scopes: ScopeStack,
    dialect: JsonDialect,
    pretty: bool,
    indent: usize,
}

impl<W: Write> JsonWriter<W> {
    /// Create a compact JSON writer.
    pub fn new(out: W) -> Self {
        JsonWriter {
            out,
            scopes: ScopeStack::new(),
            dialect: JsonDialect::Json,
            pretty: false,
            indent: 0,
        }
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: JsonDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn dialect(&self) -> JsonDialect {
        self.dialect
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn newline(&mut self) -> Result<(), WriteError> {
        if self.pretty {
            self.out.write_all(b"\n")?;
            for _ in 0..self.indent {
                self.out.write_all(b"  ")?;
            }
        }
        Ok(())
    }

    /// Separator and line break before a value at `slot`.
    fn separate(&mut self, slot: Slot) -> Result<(), WriteError> {
        if matches!(slot.container, ScopeKind::Array | ScopeKind::Tuple) {
            if slot.index > 0 {
                self.out.write_all(b",")?;
            }
            self.newline()?;
        }
        Ok(())
    }

    fn before_value(&mut self) -> Result<(), WriteError> {
        let slot = self.scopes.value()?;
        self.separate(slot)
    }

    fn open(&mut self, kind: ScopeKind, arity: usize, opener: &[u8]) -> Result<(), WriteError> {
        let slot = self.scopes.open(kind, arity)?;
        self.separate(slot)?;
        self.out.write_all(opener)?;
        self.indent += 1;
        Ok(())
    }

    fn write_quoted(&mut self, s: &str) -> Result<(), WriteError> {
        self.out.write_all(b"\"")?;
        self.out.write_all(escape_json(s).as_bytes())?;
        self.out.write_all(b"\"")?;
        Ok(())
    }
}

impl<W: Write> DocumentWriter for JsonWriter<W> {
    fn begin_object(&mut self, fields: usize) -> Result<(), WriteError> {
        self.open(ScopeKind::Object, fields, b"{")
    }

    fn begin_array(&mut self, len: usize) -> Result<(), WriteError> {
        self.open(ScopeKind::Array, len, b"[")
    }

    fn begin_tuple(&mut self, len: usize) -> Result<(), WriteError> {
        let opener: &[u8] = match self.dialect {
            JsonDialect::Json => b"[",
            JsonDialect::Yojson => b"(",
        };
        self.open(ScopeKind::Tuple, len, opener)
    }

    fn begin_variant(&mut self, tag: &str) -> Result<(), WriteError> {
        let slot = self.scopes.open(ScopeKind::Variant, 1)?;
        self.separate(slot)?;
        let (open, sep): (&[u8], &[u8]) = match self.dialect {
            JsonDialect::Json => (b"[", b","),
            JsonDialect::Yojson => (b"<", b":"),
        };
        self.out.write_all(open)?;
        self.write_quoted(tag)?;
        self.out.write_all(sep)?;
        if self.pretty {
            self.out.write_all(b" ")?;
        }
        Ok(())
    }

    fn end_scope(&mut self) -> Result<(), WriteError> {
        let frame = self.scopes.close()?;
        let closer: &[u8] = match (frame.kind, self.dialect) {
            (ScopeKind::Object, _) => b"}",
            (ScopeKind::Array, _) | (ScopeKind::Tuple, JsonDialect::Json) => b"]",
            (ScopeKind::Tuple, JsonDialect::Yojson) => b")",
            (ScopeKind::Variant, JsonDialect::Json) => b"]",
            (ScopeKind::Variant, JsonDialect::Yojson) => b">",
            (ScopeKind::Document, _) => return Err(WriteError::NoOpenScope),
        };
        if frame.kind != ScopeKind::Variant {
            self.indent = self.indent.saturating_sub(1);
            if frame.arity > 0 {
                self.newline()?;
            }
        }
        self.out.write_all(closer)?;
        Ok(())
    }

    fn emit_tag(&mut self, name: &str) -> Result<(), WriteError> {
        let index = self.scopes.tag()?;
        if index > 0 {
            self.out.write_all(b",")?;
        }
        self.newline()?;
        self.write_quoted(name)?;
        let sep: &[u8] = if self.pretty { b": " } else { b":" };
        self.out.write_all(sep)?;
        Ok(())
    }

    fn emit_string(&mut self, value: &str) -> Result<(), WriteError> {
        self.before_value()?;
        self.write_quoted(value)
    }

    fn emit_integer(&mut self, value: i64) -> Result<(), WriteError> {
        self.before_value()?;
        write!(self.out, "{value}")?;
        Ok(())
    }

    fn emit_unsigned(&mut self, value: u64) -> Result<(), WriteError> {
        self.before_value()?;
        write!(self.out, "{value}")?;
        Ok(())
    }

    fn emit_boolean(&mut self, value: bool) -> Result<(), WriteError> {
        self.before_value()?;
        let text: &[u8] = if value { b"true" } else { b"false" };
        self.out.write_all(text)?;
        Ok(())
    }

    fn emit_simple_variant(&mut self, tag: &str) -> Result<(), WriteError> {
        self.before_value()?;
        match self.dialect {
            JsonDialect::Json => self.write_quoted(tag),
            JsonDialect::Yojson => {
                self.out.write_all(b"<")?;
                self.write_quoted(tag)?;
                self.out.write_all(b">")?;
                Ok(())
            }
        }
    }

    fn finish(&mut self) -> Result<(), WriteError> {
        self.scopes.finish()?;
        if self.pretty {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Escape a string for a JSON string literal (without the quotes).
pub fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}
