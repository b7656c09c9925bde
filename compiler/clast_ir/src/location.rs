//! Source locations and ranges.
//!
//! Locations refer to files through [`FileId`]; the file table lives in the
//! [`AstContext`](crate::AstContext). An invalid location is `None`.

use std::fmt;

use crate::ids::FileId;

/// A resolved position in a source file. Lines and columns are 1-based.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceLocation {
    pub file: FileId,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    #[inline]
    pub const fn new(file: FileId, line: u32, column: u32) -> Self {
        SourceLocation { file, line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.index(), self.line, self.column)
    }
}

/// Begin and end of a node's extent. Either end may be invalid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceRange {
    pub begin: Option<SourceLocation>,
    pub end: Option<SourceLocation>,
}

impl SourceRange {
    /// Range with both ends invalid.
    pub const INVALID: SourceRange = SourceRange {
        begin: None,
        end: None,
    };

    #[inline]
    pub const fn new(begin: SourceLocation, end: SourceLocation) -> Self {
        SourceRange {
            begin: Some(begin),
            end: Some(end),
        }
    }

    /// Range covering a single position.
    #[inline]
    pub const fn point(loc: SourceLocation) -> Self {
        SourceRange::new(loc, loc)
    }

    /// File of the begin location, if valid.
    #[inline]
    pub fn file(&self) -> Option<FileId> {
        self.begin.map(|loc| loc.file)
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.begin.is_some() && self.end.is_some()
    }
}
