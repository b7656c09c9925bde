//! Arena storage for one translation unit.
//!
//! [`AstContext`] owns every node of every family in flat vectors indexed by
//! the typed ids from [`crate::ids`]. Nodes refer to each other only through
//! those ids, so cyclic graphs (redeclaration chains, recursive record types,
//! parent links) need no shared ownership.
//!
//! # Index Spaces
//!
//! - `decls`, `stmts`, `comments`, `attrs`: allocation order
//! - `types`: allocation order, which is also the order of the global type
//!   list exported under the translation unit
//! - `files`: file table referenced by [`SourceLocation`](crate::SourceLocation)

use crate::attr::Attr;
use crate::comment::Comment;
use crate::decl::Decl;
use crate::ids::{AttrId, CommentId, DeclId, FileId, StmtId, TemporaryId, TypeId};
use crate::stmt::Stmt;
use crate::ty::Type;

#[derive(Clone, Debug, Default)]
pub struct AstContext {
    files: Vec<String>,
    decls: Vec<Decl>,
    stmts: Vec<Stmt>,
    types: Vec<Type>,
    comments: Vec<Comment>,
    attrs: Vec<Attr>,
    temporaries: u32,
}

fn to_u32(len: usize, what: &str) -> u32 {
    match u32::try_from(len) {
        Ok(index) if index != u32::MAX => index,
        _ => panic!("too many {what} for a u32 index"),
    }
}

impl AstContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file name, reusing the id of an identical name.
    pub fn add_file(&mut self, name: impl Into<String>) -> FileId {
        let name = name.into();
        if let Some(index) = self.files.iter().position(|known| *known == name) {
            return FileId::new(to_u32(index, "files"));
        }
        let id = FileId::new(to_u32(self.files.len(), "files"));
        self.files.push(name);
        id
    }

    #[inline]
    pub fn file_name(&self, id: FileId) -> &str {
        &self.files[id.index()]
    }

    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(to_u32(self.decls.len(), "declarations"));
        self.decls.push(decl);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(stmt);
        id
    }

    pub fn alloc_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId::new(to_u32(self.types.len(), "types"));
        self.types.push(ty);
        id
    }

    pub fn alloc_comment(&mut self, comment: Comment) -> CommentId {
        let id = CommentId::new(to_u32(self.comments.len(), "comments"));
        self.comments.push(comment);
        id
    }

    pub fn alloc_attr(&mut self, attr: Attr) -> AttrId {
        let id = AttrId::new(to_u32(self.attrs.len(), "attributes"));
        self.attrs.push(attr);
        id
    }

    pub fn alloc_temporary(&mut self) -> TemporaryId {
        let id = TemporaryId::new(self.temporaries);
        self.temporaries = to_u32(self.temporaries as usize + 1, "temporaries");
        id
    }

    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    #[inline]
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    #[inline]
    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    #[inline]
    pub fn ty_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.index()]
    }

    #[inline]
    pub fn comment(&self, id: CommentId) -> &Comment {
        &self.comments[id.index()]
    }

    #[inline]
    pub fn attr(&self, id: AttrId) -> &Attr {
        &self.attrs[id.index()]
    }

    /// Checked lookup for handles received from outside the context.
    pub fn get_decl(&self, id: DeclId) -> Option<&Decl> {
        self.decls.get(id.index())
    }

    pub fn get_stmt(&self, id: StmtId) -> Option<&Stmt> {
        self.stmts.get(id.index())
    }

    pub fn get_type(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    pub fn get_comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.get(id.index())
    }

    pub fn get_attr(&self, id: AttrId) -> Option<&Attr> {
        self.attrs.get(id.index())
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

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// All type ids in allocation order.
    pub fn type_ids(&self) -> impl ExactSizeIterator<Item = TypeId> {
        (0..to_u32(self.types.len(), "types")).map(TypeId::new)
    }
}
