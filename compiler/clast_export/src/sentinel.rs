//! Placeholder nodes for absent required children.
//!
//! A slot that must hold a node (a `for` without an init statement, a
//! comment argument that was never parsed) is written as the family's
//! sentinel instead of being omitted, so every kind keeps a fixed tuple
//! shape. Types have no sentinel node: an absent type is the null
//! `type_ptr` and the type list closes with one `NoneType` entry.

use clast_ir::{
    Comment, CommentKind, Decl, DeclKind, Family, NodeIdentity, NodeRef, SourceRange, Stmt,
    StmtKind,
};

/// One sentinel per family, built once per session and never mutated.
#[derive(Debug)]
pub struct Sentinels {
    decl: Decl,
    stmt: Stmt,
    comment: Comment,
}

impl Sentinels {
    pub fn new() -> Self {
        Sentinels {
            decl: Decl::new(DeclKind::Empty, SourceRange::INVALID),
            stmt: Stmt::new(StmtKind::NullStmt, SourceRange::INVALID),
            comment: Comment::new(CommentKind::NoComment, SourceRange::INVALID),
        }
    }

    pub fn decl(&self) -> &Decl {
        &self.decl
    }

    pub fn stmt(&self) -> &Stmt {
        &self.stmt
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// Identity written for the sentinel of `family`.
    pub const fn identity(family: Family) -> NodeIdentity {
        NodeRef::Sentinel(family).identity()
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
