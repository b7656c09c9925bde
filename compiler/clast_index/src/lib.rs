//! clast index - identity lookup tables for C-family syntax trees
//!
//! An exported document names nodes only by identity. [`AstIndex`] maps
//! those identities back to the declarations, statements and types of the
//! [`AstContext`] the document was exported from, so a consumer holding
//! both can resolve any reference without a second traversal.
//!
//! The index is filled by one pre-order walk over every definitional
//! position (see [`clast_ir::visitor`]). Documentation comments are walked
//! but not indexed.

use std::str::FromStr;

use clast_ir::visitor::{walk_decl, walk_stmt, walk_translation_unit, Visitor};
use clast_ir::{
    AstContext, Comment, CommentId, Decl, DeclId, DeclKind, NodeIdentity, NodeRef, Stmt,
    StmtId, Type, TypeId,
};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Failure to build an index.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("index already holds {0} entries; reset it before building again")]
    NotReset(usize),

    #[error("index root must be a translation unit")]
    InvalidRoot,
}

/// Per-family callbacks adapted into a [`Visitor`].
///
/// Each closure sees a node at its definitional position; traversal into
/// the node's children continues afterwards regardless of the callback.
pub struct FamilyCallbacks<D, S, T>
where
    D: FnMut(DeclId, &Decl),
    S: FnMut(StmtId, &Stmt),
    T: FnMut(TypeId, &Type),
{
    pub on_decl: D,
    pub on_stmt: S,
    pub on_type: T,
}

impl<'ast, D, S, T> Visitor<'ast> for FamilyCallbacks<D, S, T>
where
    D: FnMut(DeclId, &Decl),
    S: FnMut(StmtId, &Stmt),
    T: FnMut(TypeId, &Type),
{
    fn visit_decl(&mut self, id: DeclId, decl: &'ast Decl, ctx: &'ast AstContext) {
        (self.on_decl)(id, decl);
        walk_decl(self, decl, ctx);
    }

    fn visit_stmt(&mut self, id: StmtId, stmt: &'ast Stmt, ctx: &'ast AstContext) {
        (self.on_stmt)(id, stmt);
        walk_stmt(self, stmt, ctx);
    }

    fn visit_type(&mut self, id: TypeId, ty: &'ast Type, _ctx: &'ast AstContext) {
        (self.on_type)(id, ty);
    }

    fn visit_comment(&mut self, _id: CommentId, _comment: &'ast Comment, _ctx: &'ast AstContext) {
        // Comments only nest other comments.
    }
}

/// Walk every definitional position of the translation unit under `root`.
pub fn traverse<'ast, V: Visitor<'ast> + ?Sized>(
    ctx: &'ast AstContext,
    root: DeclId,
    visitor: &mut V,
) {
    walk_translation_unit(visitor, root, ctx);
}

/// Identity to node tables for declarations, statements and types.
#[derive(Clone, Debug, Default)]
pub struct AstIndex {
    decls: FxHashMap<NodeIdentity, DeclId>,
    stmts: FxHashMap<NodeIdentity, StmtId>,
    types: FxHashMap<NodeIdentity, TypeId>,
}

fn record<Id: Copy + Into<NodeRef> + std::fmt::Debug>(
    table: &mut FxHashMap<NodeIdentity, Id>,
    id: Id,
) {
    let identity = id.into().identity();
    if let Some(previous) = table.insert(identity, id) {
        warn!(?identity, ?previous, ?id, "node reached twice, keeping the later visit");
    }
}

impl AstIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the index from the translation unit under `root`.
    ///
    /// The index must be empty; call [`AstIndex::reset`] to rebuild.
    pub fn build(&mut self, ctx: &AstContext, root: DeclId) -> Result<(), IndexError> {
        if !self.is_empty() {
            return Err(IndexError::NotReset(self.len()));
        }
        match ctx.get_decl(root) {
            Some(decl) if decl.kind == DeclKind::TranslationUnit => {}
            _ => return Err(IndexError::InvalidRoot),
        }

        let AstIndex {
            decls,
            stmts,
            types,
        } = self;
        let mut callbacks = FamilyCallbacks {
            on_decl: |id: DeclId, _: &Decl| record(decls, id),
            on_stmt: |id: StmtId, _: &Stmt| record(stmts, id),
            on_type: |id: TypeId, _: &Type| record(types, id),
        };
        traverse(ctx, root, &mut callbacks);

        debug!(
            decls = self.decls.len(),
            stmts = self.stmts.len(),
            types = self.types.len(),
            "index built"
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        self.decls.clear();
        self.stmts.clear();
        self.types.clear();
    }

    /// Total number of indexed nodes.
    pub fn len(&self) -> usize {
        self.decls.len() + self.stmts.len() + self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn decl(&self, identity: NodeIdentity) -> Option<DeclId> {
        self.decls.get(&identity).copied()
    }

    pub fn stmt(&self, identity: NodeIdentity) -> Option<StmtId> {
        self.stmts.get(&identity).copied()
    }

    pub fn ty(&self, identity: NodeIdentity) -> Option<TypeId> {
        self.types.get(&identity).copied()
    }

    /// Look up a declaration by the raw identity string written in a document.
    pub fn decl_by_str(&self, raw: &str) -> Option<DeclId> {
        NodeIdentity::from_str(raw).ok().and_then(|id| self.decl(id))
    }

    pub fn stmt_by_str(&self, raw: &str) -> Option<StmtId> {
        NodeIdentity::from_str(raw).ok().and_then(|id| self.stmt(id))
    }

    pub fn type_by_str(&self, raw: &str) -> Option<TypeId> {
        NodeIdentity::from_str(raw).ok().and_then(|id| self.ty(id))
    }

    pub fn resolve_decl<'ctx>(
        &self,
        ctx: &'ctx AstContext,
        identity: NodeIdentity,
    ) -> Option<&'ctx Decl> {
        self.decl(identity).and_then(|id| ctx.get_decl(id))
    }

    pub fn resolve_stmt<'ctx>(
        &self,
        ctx: &'ctx AstContext,
        identity: NodeIdentity,
    ) -> Option<&'ctx Stmt> {
        self.stmt(identity).and_then(|id| ctx.get_stmt(id))
    }

    pub fn resolve_type<'ctx>(
        &self,
        ctx: &'ctx AstContext,
        identity: NodeIdentity,
    ) -> Option<&'ctx Type> {
        self.ty(identity).and_then(|id| ctx.get_type(id))
    }

    /// All indexed declaration identities, in no particular order.
    pub fn decl_identities(&self) -> impl Iterator<Item = NodeIdentity> + '_ {
        self.decls.keys().copied()
    }

    pub fn stmt_identities(&self) -> impl Iterator<Item = NodeIdentity> + '_ {
        self.stmts.keys().copied()
    }

    pub fn type_identities(&self) -> impl Iterator<Item = NodeIdentity> + '_ {
        self.types.keys().copied()
    }
}

/// Build a fresh index over the translation unit under `root`.
pub fn build_index(ctx: &AstContext, root: DeclId) -> Result<AstIndex, IndexError> {
    let mut index = AstIndex::new();
    index.build(ctx, root)?;
    Ok(index)
}
