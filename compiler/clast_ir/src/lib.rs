//! clast IR - node model for C-family syntax trees
//!
//! This crate holds the in-memory form of one translation unit as handed over
//! by a front end:
//! - Kind hierarchies for the four node families (declarations, statements,
//!   types, documentation comments)
//! - Arena ids and opaque node identities
//! - Source locations and ranges
//! - Node payloads and the [`AstContext`] arenas that own them
//! - A [`Visitor`](visitor::Visitor) over definitional positions
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes refer to each other by `u32` ids, never by
//!   reference, so cyclic graphs need no shared ownership
//! - **Closed Kinds**: every family is a fieldless enum with a declared parent
//!   per kind; consumers dispatch with exhaustive matches
//! - **Facets per Level**: a node stores the data of each hierarchy level it
//!   passes through, so emitters can walk a kind's parent chain

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod attr;
mod builder;
mod comment;
mod context;
mod decl;
mod identity;
mod ids;
pub mod kind;
mod location;
mod qual_type;
pub mod stack;
mod stmt;
mod ty;
pub mod visitor;

pub use attr::Attr;
pub use builder::AstBuilder;
pub use comment::{
    BlockCommandInfo, Comment, CommentData, HtmlAttribute, ParamDirection, RenderKind,
};
pub use context::AstContext;
pub use decl::{
    AccessControl, BlockCapture, BlockInfo, CtorInitializer, Decl, DeclContextInfo, DeclData,
    DeclFlags, DeclName, EnumInfo, EnumScope, FieldInfo, FunctionInfo, InitializerSubject,
    IvarInfo, NamespaceAliasInfo, NamespaceInfo, NestedNameSpecifier, ObjCCategoryImplInfo,
    ObjCCategoryInfo, ObjCImplementationInfo, ObjCInterfaceInfo, ObjCMethodInfo,
    ObjCPropertyImplInfo, ObjCPropertyInfo, PropertyAttribute, PropertyControl,
    PropertyImplementation, RecordInfo, Redeclaration, SpecifierKind, StorageClass, TlsKind,
    UsingDirectiveInfo, VarInfo,
};
pub use identity::{NodeIdentity, NodeRef};
pub use ids::{AttrId, CommentId, DeclId, FileId, StmtId, TemporaryId, TypeId};
pub use kind::{CommentKind, DeclKind, Family, NodeKind, StmtKind, TypeKind};
pub use location::{SourceLocation, SourceRange};
pub use qual_type::QualType;
pub use stmt::{
    BinaryInfo, BinaryOpcode, CastBase, CastInfo, CastKind, CompoundAssignInfo, ConstructInfo,
    DeclRefInfo, DeclarationName, DeclarationNameKind, ExprInfo, IntegerLiteralInfo, LabelRef,
    MessageInfo, NewInfo, ObjectKind, OverloadInfo, PredefinedIdent, PropertyRefInfo,
    PropertyRefTarget, ReceiverKind, Stmt, StmtData, SubscriptKind, SubscriptRefInfo, TraitKind,
    UnaryOpcode, UnresolvedLookupInfo, ValueKind,
};
pub use ty::{BuiltinKind, Type, TypeData};
