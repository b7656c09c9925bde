//! In-memory recording writer.
//!
//! [`RecordingWriter`] runs the same arity checks as the text writers and
//! keeps the event stream, so callers can inspect an export without
//! parsing text. [`Value::from_events`] folds a finished stream back into a
//! tree.

use crate::scope::{ScopeKind, ScopeStack};
use crate::{DocumentWriter, WriteError};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Event {
    /// Object, array or tuple opened with its declared arity.
    Open { kind: ScopeKind, arity: usize },
    /// Variant opened with its tag.
    Variant(String),
    Close,
    Tag(String),
    String(String),
    Integer(i64),
    Unsigned(u64),
    Boolean(bool),
    SimpleVariant(String),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingWriter {
    scopes: ScopeStack,
    events: Vec<Event>,
    max_depth: usize,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Deepest scope nesting seen so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_finished(&self) -> bool {
        self.scopes.is_finished()
    }

    /// Every string value emitted directly after a field tag named `field`.
    pub fn field_strings<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.events.windows(2).filter_map(move |pair| match pair {
            [Event::Tag(tag), Event::String(value)] if tag == field => Some(value.as_str()),
            _ => None,
        })
    }

    /// The recorded document as a tree, once finished.
    pub fn document(&self) -> Option<Value> {
        if !self.is_finished() {
            return None;
        }
        Value::from_events(&self.events)
    }

    fn open(&mut self, kind: ScopeKind, arity: usize) -> Result<(), WriteError> {
        self.scopes.open(kind, arity)?;
        self.max_depth = self.max_depth.max(self.scopes.depth());
        self.events.push(Event::Open { kind, arity });
        Ok(())
    }

    fn scalar(&mut self, event: Event) -> Result<(), WriteError> {
        self.scopes.value()?;
        self.events.push(event);
        Ok(())
    }
}

impl DocumentWriter for RecordingWriter {
    fn begin_object(&mut self, fields: usize) -> Result<(), WriteError> {
        self.open(ScopeKind::Object, fields)
    }

    fn begin_array(&mut self, len: usize) -> Result<(), WriteError> {
        self.open(ScopeKind::Array, len)
    }

    fn begin_tuple(&mut self, len: usize) -> Result<(), WriteError> {
        self.open(ScopeKind::Tuple, len)
    }

    fn begin_variant(&mut self, tag: &str) -> Result<(), WriteError> {
        self.scopes.open(ScopeKind::Variant, 1)?;
        self.max_depth = self.max_depth.max(self.scopes.depth());
        self.events.push(Event::Variant(tag.to_owned()));
        Ok(())
    }

    fn end_scope(&mut self) -> Result<(), WriteError> {
        self.scopes.close()?;
        self.events.push(Event::Close);
        Ok(())
    }

    fn emit_tag(&mut self, name: &str) -> Result<(), WriteError> {
        self.scopes.tag()?;
        self.events.push(Event::Tag(name.to_owned()));
        Ok(())
    }

    fn emit_string(&mut self, value: &str) -> Result<(), WriteError> {
        self.scalar(Event::String(value.to_owned()))
    }

    fn emit_integer(&mut self, value: i64) -> Result<(), WriteError> {
        self.scalar(Event::Integer(value))
    }

    fn emit_unsigned(&mut self, value: u64) -> Result<(), WriteError> {
        self.scalar(Event::Unsigned(value))
    }

    fn emit_boolean(&mut self, value: bool) -> Result<(), WriteError> {
        self.scalar(Event::Boolean(value))
    }

    fn emit_simple_variant(&mut self, tag: &str) -> Result<(), WriteError> {
        self.scalar(Event::SimpleVariant(tag.to_owned()))
    }

    fn finish(&mut self) -> Result<(), WriteError> {
        self.scopes.finish()
    }
}

/// A recorded document folded into a tree.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Value {
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
    Tuple(Vec<Value>),
    Variant(String, Box<Value>),
    SimpleVariant(String),
    String(String),
    Integer(i64),
    Unsigned(u64),
    Boolean(bool),
}

enum Partial {
    Object(Vec<(String, Value)>, Option<String>),
    Array(Vec<Value>),
    Tuple(Vec<Value>),
    Variant(String, Option<Value>),
}

impl Partial {
    fn push(&mut self, value: Value) -> Option<()> {
        match self {
            Partial::Object(fields, pending) => fields.push((pending.take()?, value)),
            Partial::Array(items) | Partial::Tuple(items) => items.push(value),
            Partial::Variant(_, arg) => {
                if arg.replace(value).is_some() {
                    return None;
                }
            }
        }
        Some(())
    }

    fn build(self) -> Option<Value> {
        Some(match self {
            Partial::Object(fields, None) => Value::Object(fields),
            Partial::Object(_, Some(_)) => return None,
            Partial::Array(items) => Value::Array(items),
            Partial::Tuple(items) => Value::Tuple(items),
            Partial::Variant(tag, arg) => Value::Variant(tag, Box::new(arg?)),
        })
    }
}

impl Value {
    /// Fold a complete event stream into one value; `None` if malformed.
    pub fn from_events(events: &[Event]) -> Option<Value> {
        let mut stack: Vec<Partial> = Vec::new();
        let mut root = None;
        for event in events {
            let value = match event {
                Event::Open { kind, .. } => {
                    stack.push(match kind {
                        ScopeKind::Object => Partial::Object(Vec::new(), None),
                        ScopeKind::Array => Partial::Array(Vec::new()),
                        ScopeKind::Tuple => Partial::Tuple(Vec::new()),
                        ScopeKind::Variant | ScopeKind::Document => return None,
                    });
                    continue;
                }
                Event::Variant(tag) => {
                    stack.push(Partial::Variant(tag.clone(), None));
                    continue;
                }
                Event::Tag(name) => {
                    match stack.last_mut() {
                        Some(Partial::Object(_, pending)) if pending.is_none() => {
                            *pending = Some(name.clone());
                        }
                        _ => return None,
                    }
                    continue;
                }
                Event::Close => stack.pop()?.build()?,
                Event::String(s) => Value::String(s.clone()),
                Event::Integer(i) => Value::Integer(*i),
                Event::Unsigned(u) => Value::Unsigned(*u),
                Event::Boolean(b) => Value::Boolean(*b),
                Event::SimpleVariant(tag) => Value::SimpleVariant(tag.clone()),
            };
            match stack.last_mut() {
                Some(parent) => parent.push(value)?,
                None if root.is_none() => root = Some(value),
                None => return None,
            }
        }
        if stack.is_empty() {
            root
        } else {
            None
        }
    }

    /// Field `name` of an object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Field names of an object, in order.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            Value::Object(fields) => fields.iter().map(|(n, _)| n.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Elements of an array or tuple.
    pub fn elements(&self) -> &[Value] {
        match self {
            Value::Array(items) | Value::Tuple(items) => items,
            _ => &[],
        }
    }

    /// Element `index` of an array or tuple.
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.elements().get(index)
    }

    /// Tag of a variant, with or without an argument.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Value::Variant(tag, _) | Value::SimpleVariant(tag) => Some(tag),
            _ => None,
        }
    }

    /// Argument of a variant.
    pub fn argument(&self) -> Option<&Value> {
        match self {
            Value::Variant(_, arg) => Some(arg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Unsigned(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
