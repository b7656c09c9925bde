//! clast writer - arity-checked structured document emission
//!
//! A [`DocumentWriter`] streams a tree of objects, arrays, tuples and tagged
//! variants. Every container declares its element count when it is opened,
//! so an encoder can write length-prefixed or fixed-shape formats in one
//! forward pass without buffering.
//!
//! Writers check the declared counts against what is actually emitted with
//! a shared [`ScopeStack`]; a mismatch is a [`WriteError`], never silently
//! malformed output.
//!
//! - [`JsonWriter`]: streaming JSON (or Yojson) text
//! - [`RecordingWriter`]: in-memory event log, for inspection in tests and
//!   tools that post-process an export

mod error;
mod json;
mod record;
mod scope;

pub use error::WriteError;
pub use json::{escape_json, JsonDialect, JsonWriter};
pub use record::{Event, RecordingWriter, Value};
pub use scope::{Frame, ScopeKind, ScopeStack, Slot};

/// Structured document sink with pre-declared container sizes.
///
/// Inside an object every field is a tag ([`emit_tag`](Self::emit_tag))
/// followed by exactly one value; the declared count of an object is its
/// number of fields. Arrays and tuples count their elements. A variant
/// carries exactly one argument.
pub trait DocumentWriter {
    /// Open an object with `fields` fields.
    fn begin_object(&mut self, fields: usize) -> Result<(), WriteError>;

    /// Open a homogeneous array of `len` elements.
    fn begin_array(&mut self, len: usize) -> Result<(), WriteError>;

    /// Open a fixed-shape tuple of `len` elements.
    fn begin_tuple(&mut self, len: usize) -> Result<(), WriteError>;

    /// Open a variant tagged `tag`; its single argument follows.
    fn begin_variant(&mut self, tag: &str) -> Result<(), WriteError>;

    /// Close the innermost open scope.
    fn end_scope(&mut self) -> Result<(), WriteError>;

    /// Name the next object field.
    fn emit_tag(&mut self, name: &str) -> Result<(), WriteError>;

    fn emit_string(&mut self, value: &str) -> Result<(), WriteError>;

    fn emit_integer(&mut self, value: i64) -> Result<(), WriteError>;

    fn emit_unsigned(&mut self, value: u64) -> Result<(), WriteError>;

    fn emit_boolean(&mut self, value: bool) -> Result<(), WriteError>;

    /// A variant without an argument.
    fn emit_simple_variant(&mut self, tag: &str) -> Result<(), WriteError>;

    /// End the document. Fails if scopes remain open or nothing was written.
    fn finish(&mut self) -> Result<(), WriteError>;

    /// Emit the field `name: true` when `value` holds, nothing otherwise.
    ///
    /// The enclosing object must count the field only when `value` holds.
    fn emit_flag(&mut self, name: &str, value: bool) -> Result<(), WriteError> {
        if value {
            self.emit_tag(name)?;
            self.emit_boolean(true)?;
        }
        Ok(())
    }

    /// Open an object, run `body`, close it.
    fn object<E, F>(&mut self, fields: usize, body: F) -> Result<(), E>
    where
        Self: Sized,
        E: From<WriteError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.begin_object(fields)?;
        body(self)?;
        self.end_scope()?;
        Ok(())
    }

    /// Open an array, run `body`, close it.
    fn array<E, F>(&mut self, len: usize, body: F) -> Result<(), E>
    where
        Self: Sized,
        E: From<WriteError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.begin_array(len)?;
        body(self)?;
        self.end_scope()?;
        Ok(())
    }

    /// Open a tuple, run `body`, close it.
    fn tuple<E, F>(&mut self, len: usize, body: F) -> Result<(), E>
    where
        Self: Sized,
        E: From<WriteError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.begin_tuple(len)?;
        body(self)?;
        self.end_scope()?;
        Ok(())
    }

    /// Open a variant, run `body` to emit its argument, close it.
    fn variant<E, F>(&mut self, tag: &str, body: F) -> Result<(), E>
    where
        Self: Sized,
        E: From<WriteError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.begin_variant(tag)?;
        body(self)?;
        self.end_scope()?;
        Ok(())
    }
}

impl<W: DocumentWriter + ?Sized> DocumentWriter for &mut W {
    fn begin_object(&mut self, fields: usize) -> Result<(), WriteError> {
        (**self).begin_object(fields)
    }

    fn begin_array(&mut self, len: usize) -> Result<(), WriteError> {
        (**self).begin_array(len)
    }

    fn begin_tuple(&mut self, len: usize) -> Result<(), WriteError> {
        (**self).begin_tuple(len)
    }

    fn begin_variant(&mut self, tag: &str) -> Result<(), WriteError> {
        (**self).begin_variant(tag)
    }

    fn end_scope(&mut self) -> Result<(), WriteError> {
        (**self).end_scope()
    }

    fn emit_tag(&mut self, name: &str) -> Result<(), WriteError> {
        (**self).emit_tag(name)
    }

    fn emit_string(&mut self, value: &str) -> Result<(), WriteError> {
        (**self).emit_string(value)
    }

    fn emit_integer(&mut self, value: i64) -> Result<(), WriteError> {
        (**self).emit_integer(value)
    }

    fn emit_unsigned(&mut self, value: u64) -> Result<(), WriteError> {
        (**self).emit_unsigned(value)
    }

    fn emit_boolean(&mut self, value: bool) -> Result<(), WriteError> {
        (**self).emit_boolean(value)
    }

    fn emit_simple_variant(&mut self, tag: &str) -> Result<(), WriteError> {
        (**self).emit_simple_variant(tag)
    }

    fn finish(&mut self) -> Result<(), WriteError> {
        (**self).finish()
    }
}
