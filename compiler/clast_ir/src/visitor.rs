//! Translation unit visitor.
//!
//! Provides one pre-order traversal of every *definitional* position in a
//! translation unit: each declaration, statement and comment is visited at
//! the place where an export defines it, and each type once from the root's
//! global type list. Reference-only mentions (redeclaration links, callee
//! declarations, operand identities) are not followed.
//!
//! # Design
//!
//! Default `visit_*` implementations call `walk_*` functions that traverse
//! children. Override a `visit_*` method to observe a node and call the
//! matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountFunctions {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountFunctions {
//!     fn visit_decl(&mut self, id: DeclId, decl: &'ast Decl, ctx: &'ast AstContext) {
//!         if decl.kind == DeclKind::Function {
//!             self.count += 1;
//!         }
//!         walk_decl(self, decl, ctx);
//!     }
//! }
//! ```

use crate::comment::Comment;
use crate::decl::{Decl, DeclData};
use crate::ids::{CommentId, DeclId, StmtId, TypeId};
use crate::kind::DeclKind;
use crate::stack::ensure_sufficient_stack;
use crate::stmt::{Stmt, StmtData};
use crate::ty::Type;
use crate::AstContext;

/// Translation unit visitor.
///
/// The visitor can mutate its own state during traversal; the tree itself
/// remains immutable.
pub trait Visitor<'ast> {
    /// Visit a declaration.
    fn visit_decl(&mut self, id: DeclId, decl: &'ast Decl, ctx: &'ast AstContext) {
        let _ = id;
        walk_decl(self, decl, ctx);
    }

    /// Visit a declaration by ID.
    fn visit_decl_id(&mut self, id: DeclId, ctx: &'ast AstContext) {
        ensure_sufficient_stack(|| self.visit_decl(id, ctx.decl(id), ctx));
    }

    /// Visit a statement or expression.
    fn visit_stmt(&mut self, id: StmtId, stmt: &'ast Stmt, ctx: &'ast AstContext) {
        let _ = id;
        walk_stmt(self, stmt, ctx);
    }

    /// Visit a statement by ID.
    fn visit_stmt_id(&mut self, id: StmtId, ctx: &'ast AstContext) {
        ensure_sufficient_stack(|| self.visit_stmt(id, ctx.stmt(id), ctx));
    }

    /// Visit a type from the global type list. Types have no definitional
    /// children.
    fn visit_type(&mut self, id: TypeId, ty: &'ast Type, ctx: &'ast AstContext) {
        let _ = (id, ty, ctx);
    }

    /// Visit a documentation comment.
    fn visit_comment(&mut self, id: CommentId, comment: &'ast Comment, ctx: &'ast AstContext) {
        let _ = id;
        walk_comment(self, comment, ctx);
    }
}

// Walk Functions
//
// Children are visited in the order an export emits them: the full comment
// (part of the common declaration fields), child declarations, the type
// list of the translation unit, then payload children left to right.

/// Walk a whole translation unit from its root declaration.
pub fn walk_translation_unit<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    root: DeclId,
    ctx: &'ast AstContext,
) {
    visitor.visit_decl_id(root, ctx);
}

/// Walk a declaration's children.
pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    decl: &'ast Decl,
    ctx: &'ast AstContext,
) {
    if let Some(comment) = decl.full_comment {
        visitor.visit_comment(comment, ctx.comment(comment), ctx);
    }
    if decl.kind.is_decl_context() {
        if let Some(context) = &decl.context {
            for &child in &context.decls {
                visitor.visit_decl_id(child, ctx);
            }
        }
    }
    if decl.kind == DeclKind::TranslationUnit {
        for ty in ctx.type_ids() {
            visitor.visit_type(ty, ctx.ty(ty), ctx);
        }
    }
    match &decl.data {
        DeclData::EnumConstant { init } => walk_opt_stmt(visitor, *init, ctx),
        DeclData::Function(info) => {
            for &d in info.decls_in_prototype_scope.iter().chain(&info.params) {
                visitor.visit_decl_id(d, ctx);
            }
            for init in &info.ctor_initializers {
                walk_opt_stmt(visitor, init.init, ctx);
            }
            walk_opt_stmt(visitor, info.body, ctx);
        }
        DeclData::Field(info) => {
            walk_opt_stmt(visitor, info.init, ctx);
            walk_opt_stmt(visitor, info.bit_width, ctx);
        }
        DeclData::Var(info) => walk_opt_stmt(visitor, info.init, ctx),
        DeclData::ObjCMethod(info) => {
            for &param in &info.params {
                visitor.visit_decl_id(param, ctx);
            }
            walk_opt_stmt(visitor, info.body, ctx);
        }
        DeclData::ObjCImplementation(info) => {
            for init in &info.ivar_initializers {
                walk_opt_stmt(visitor, init.init, ctx);
            }
        }
        DeclData::Block(info) => {
            for &param in &info.params {
                visitor.visit_decl_id(param, ctx);
            }
            for capture in &info.captures {
                walk_opt_stmt(visitor, capture.copy_expr, ctx);
            }
            walk_opt_stmt(visitor, info.body, ctx);
        }
        _ => {}
    }
}

/// Walk a statement's children.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    ctx: &'ast AstContext,
) {
    for &child in &stmt.children {
        walk_opt_stmt(visitor, child, ctx);
    }
    match &stmt.data {
        StmtData::Decls(decls) => {
            for &decl in decls {
                visitor.visit_decl_id(decl, ctx);
            }
        }
        StmtData::CatchParam(Some(decl)) | StmtData::OwnedDecl(Some(decl)) => {
            visitor.visit_decl_id(*decl, ctx);
        }
        _ => {}
    }
}

/// Walk a comment's children.
pub fn walk_comment<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    comment: &'ast Comment,
    ctx: &'ast AstContext,
) {
    for &child in comment.children.iter().flatten() {
        ensure_sufficient_stack(|| visitor.visit_comment(child, ctx.comment(child), ctx));
    }
}

fn walk_opt_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: Option<StmtId>,
    ctx: &'ast AstContext,
) {
    if let Some(stmt) = stmt {
        visitor.visit_stmt_id(stmt, ctx);
    }
}

#[cfg(test)]
mod tests;
