//! Arity bookkeeping shared by every writer.
//!
//! Each open scope records the element count declared when it was opened
//! and the count emitted so far. Objects count fields, each a tag followed
//! by exactly one value. The bottom frame is the document itself, which
//! holds exactly one value.

use std::fmt;

use crate::WriteError;

/// Shape of an open scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Document,
    Object,
    Array,
    Tuple,
    /// A tagged variant carrying exactly one argument.
    Variant,
}

impl ScopeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ScopeKind::Document => "document",
            ScopeKind::Object => "object",
            ScopeKind::Array => "array",
            ScopeKind::Tuple => "tuple",
            ScopeKind::Variant => "variant",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One open scope.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Frame {
    pub kind: ScopeKind,
    pub arity: usize,
    pub emitted: usize,
    tagged: bool,
}

impl Frame {
    const fn new(kind: ScopeKind, arity: usize) -> Self {
        Frame {
            kind,
            arity,
            emitted: 0,
            tagged: false,
        }
    }
}

/// Position a value was accepted at: its container and its index there.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Slot {
    pub container: ScopeKind,
    pub index: usize,
}

#[derive(Clone, Debug)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![Frame::new(ScopeKind::Document, 1)],
        }
    }

    /// Number of open scopes above the document frame.
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// The innermost open scope, if the document is not finished.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }

    fn top(&mut self) -> Result<&mut Frame, WriteError> {
        self.frames.last_mut().ok_or(WriteError::Finished)
    }

    /// Account for a field tag; returns the field index within the object.
    pub fn tag(&mut self) -> Result<usize, WriteError> {
        let frame = self.top()?;
        if frame.kind != ScopeKind::Object {
            return Err(WriteError::TagOutsideObject(frame.kind));
        }
        if frame.tagged {
            return Err(WriteError::DoubleTag);
        }
        if frame.emitted == frame.arity {
            return Err(WriteError::Overflow {
                scope: frame.kind,
                arity: frame.arity,
            });
        }
        frame.tagged = true;
        Ok(frame.emitted)
    }

    /// Account for a value (scalar or scope opening) in the current scope.
    pub fn value(&mut self) -> Result<Slot, WriteError> {
        let frame = self.top()?;
        if frame.kind == ScopeKind::Object {
            if !frame.tagged {
                return Err(WriteError::MissingTag);
            }
            frame.tagged = false;
        } else if frame.emitted == frame.arity {
            return Err(WriteError::Overflow {
                scope: frame.kind,
                arity: frame.arity,
            });
        }
        let index = frame.emitted;
        frame.emitted += 1;
        Ok(Slot {
            container: frame.kind,
            index,
        })
    }

    /// Open a scope declaring `arity` elements.
    pub fn open(&mut self, kind: ScopeKind, arity: usize) -> Result<Slot, WriteError> {
        let slot = self.value()?;
        self.frames.push(Frame::new(kind, arity));
        Ok(slot)
    }

    /// Close the innermost scope, which must have received every element.
    pub fn close(&mut self) -> Result<Frame, WriteError> {
        match self.frames.len() {
            0 => return Err(WriteError::Finished),
            1 => return Err(WriteError::NoOpenScope),
            _ => {}
        }
        let frame = self.top()?;
        if frame.tagged || frame.emitted != frame.arity {
            return Err(WriteError::Underflow {
                scope: frame.kind,
                arity: frame.arity,
                emitted: frame.emitted,
            });
        }
        self.frames.pop().ok_or(WriteError::NoOpenScope)
    }

    /// Check that the document holds one complete value.
    pub fn finish(&mut self) -> Result<(), WriteError> {
        match self.frames.len() {
            0 => Err(WriteError::Finished),
            1 => {
                if self.frames[0].emitted == 0 {
                    return Err(WriteError::EmptyDocument);
                }
                self.frames.clear();
                Ok(())
            }
            n => Err(WriteError::Unclosed(n - 1)),
        }
    }
}
