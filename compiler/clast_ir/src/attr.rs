//! Attributes attached to declarations and statements.

use crate::location::SourceRange;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attr {
    /// Attribute name without the `Attr` suffix, e.g. `Aligned`.
    pub name: String,
    pub range: SourceRange,
    /// Arguments rendered as strings.
    pub parameters: Vec<String>,
    pub is_inherited: bool,
    pub is_implicit: bool,
}

impl Attr {
    pub fn new(name: impl Into<String>, range: SourceRange) -> Self {
        Attr {
            name: name.into(),
            range,
            parameters: Vec::new(),
            is_inherited: false,
            is_implicit: false,
        }
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = String>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    /// Variant tag used in exported documents.
    pub fn variant_tag(&self) -> String {
        format!("{}Attr", self.name)
    }
}
