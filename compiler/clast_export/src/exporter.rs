//! Emitters shared by the family dispatchers.
//!
//! An [`Exporter`] borrows everything one pass needs: the tree, the writer,
//! and the session state (sentinels, location cursor, identity table). The
//! family dispatchers in `decl`, `stmt`, `ty` and `comment` extend it with
//! one `*_node` entry point each.
//!
//! # Definitions and References
//!
//! Declarations and statements are *defined* (written in full) exactly once,
//! at their lexical position. Types are defined once, in the translation
//! unit's type list. Every other mention is a *reference*: a bare identity
//! string, or for declarations a short digest (`decl_ref`) with the kind,
//! identity, name and type. Writing references instead of nested
//! definitions keeps the document linear in the number of nodes even when
//! the graph has cycles.

use clast_ir::{
    AstContext, Attr, AttrId, Comment, CommentId, CtorInitializer, Decl, DeclFlags, DeclId,
    DeclKind, DeclName, DeclarationName, InitializerSubject, NestedNameSpecifier, NodeKind,
    NodeRef, QualType, SourceLocation, SourceRange, Stmt, StmtId, Type, TypeId,
};
use clast_writer::DocumentWriter;

use crate::identity::IdentityTable;
use crate::location::LocationCursor;
use crate::sentinel::Sentinels;
use crate::{ExportError, ExportOptions};

pub(crate) type ExportResult<T = ()> = Result<T, ExportError>;

/// Name written for unnamed declarations at the named level.
static ANONYMOUS: DeclName = DeclName {
    name: String::new(),
    qualified_name: String::new(),
};

pub(crate) struct Exporter<'a, W: ?Sized> {
    pub(crate) ctx: &'a AstContext,
    pub(crate) out: &'a mut W,
    pub(crate) sentinels: &'a Sentinels,
    pub(crate) cursor: &'a mut LocationCursor,
    pub(crate) identities: &'a mut IdentityTable,
    pub(crate) options: &'a ExportOptions,
}

/// Number of optional object fields that will be written.
#[inline]
pub(crate) fn count(present: &[bool]) -> usize {
    present.iter().filter(|&&present| present).count()
}

/// `name`, or the empty name for unnamed declarations.
pub(crate) fn name_or_anonymous(name: Option<&DeclName>) -> &DeclName {
    name.unwrap_or(&ANONYMOUS)
}

/// Payload of a node does not match what its kind requires.
pub(crate) fn missing<K: NodeKind>(kind: K, expected: &'static str) -> ExportError {
    ExportError::MissingPayload {
        kind: kind.variant_tag(),
        expected,
    }
}

impl<'a, W: DocumentWriter + ?Sized> Exporter<'a, W> {
    pub(crate) fn new(
        ctx: &'a AstContext,
        out: &'a mut W,
        sentinels: &'a Sentinels,
        cursor: &'a mut LocationCursor,
        identities: &'a mut IdentityTable,
        options: &'a ExportOptions,
    ) -> Self {
        Exporter {
            ctx,
            out,
            sentinels,
            cursor,
            identities,
            options,
        }
    }

    // Checked lookups for ids read out of payloads

    pub(crate) fn decl_at(&self, id: DeclId) -> ExportResult<&'a Decl> {
        self.ctx
            .get_decl(id)
            .ok_or(ExportError::DanglingNode(NodeRef::Decl(id)))
    }

    pub(crate) fn stmt_at(&self, id: StmtId) -> ExportResult<&'a Stmt> {
        self.ctx
            .get_stmt(id)
            .ok_or(ExportError::DanglingNode(NodeRef::Stmt(id)))
    }

    pub(crate) fn type_at(&self, id: TypeId) -> ExportResult<&'a Type> {
        self.ctx
            .get_type(id)
            .ok_or(ExportError::DanglingNode(NodeRef::Type(id)))
    }

    pub(crate) fn comment_at(&self, id: CommentId) -> ExportResult<&'a Comment> {
        self.ctx
            .get_comment(id)
            .ok_or(ExportError::DanglingNode(NodeRef::Comment(id)))
    }

    pub(crate) fn attr_at(&self, id: AttrId) -> ExportResult<&'a Attr> {
        self.ctx
            .get_attr(id)
            .ok_or(ExportError::DanglingNode(NodeRef::Attr(id)))
    }

    // Scalars

    #[inline]
    pub(crate) fn field(&mut self, name: &str) -> ExportResult {
        self.out.emit_tag(name)?;
        Ok(())
    }

    pub(crate) fn string(&mut self, value: &str) -> ExportResult {
        self.out.emit_string(value)?;
        Ok(())
    }

    pub(crate) fn string_field(&mut self, name: &str, value: &str) -> ExportResult {
        self.field(name)?;
        self.string(value)
    }

    pub(crate) fn flag(&mut self, name: &str, value: bool) -> ExportResult {
        self.out.emit_flag(name, value)?;
        Ok(())
    }

    pub(crate) fn simple_variant_field(&mut self, name: &str, tag: &str) -> ExportResult {
        self.field(name)?;
        self.out.emit_simple_variant(tag)?;
        Ok(())
    }

    pub(crate) fn end(&mut self) -> ExportResult {
        self.out.end_scope()?;
        Ok(())
    }

    pub(crate) fn string_list(&mut self, values: &[String]) -> ExportResult {
        self.out.begin_array(values.len())?;
        for value in values {
            self.string(value)?;
        }
        self.end()
    }

    // Identities

    /// Identity string of `node`.
    pub(crate) fn pointer(&mut self, node: NodeRef) -> ExportResult {
        let rendered = self
            .identities
            .render(node.identity(), self.options.identity_mode);
        self.string(&rendered)
    }

    pub(crate) fn pointer_field(&mut self, name: &str, node: NodeRef) -> ExportResult {
        self.field(name)?;
        self.pointer(node)
    }

    /// Identity of a type; `None` is the null type.
    pub(crate) fn type_ptr(&mut self, ty: Option<TypeId>) -> ExportResult {
        self.pointer(NodeRef::from(ty))
    }

    pub(crate) fn type_ptr_list(&mut self, types: &[Option<TypeId>]) -> ExportResult {
        self.out.begin_array(types.len())?;
        for &ty in types {
            self.type_ptr(ty)?;
        }
        self.end()
    }

    pub(crate) fn decl_pointer_list(&mut self, decls: &[DeclId]) -> ExportResult {
        self.out.begin_array(decls.len())?;
        for &decl in decls {
            self.pointer(NodeRef::Decl(decl))?;
        }
        self.end()
    }

    // Locations

    pub(crate) fn location(&mut self, loc: Option<SourceLocation>) -> ExportResult {
        self.cursor
            .emit(self.out, self.ctx, &self.options.path_normalizer, loc)
    }

    pub(crate) fn source_range(&mut self, range: SourceRange) -> ExportResult {
        self.cursor
            .emit_range(self.out, self.ctx, &self.options.path_normalizer, range)
    }

    // Structured references

    /// `{raw, ?desugared, type_ptr}`
    pub(crate) fn qual_type(&mut self, qual_type: QualType) -> ExportResult {
        if let Some(ty) = qual_type.ty {
            if let Some(desugared) = self.type_at(ty)?.desugared {
                self.type_at(desugared)?;
            }
        }
        let desugared = qual_type.desugared_spelling(self.ctx);
        self.out
            .begin_object(2 + usize::from(desugared.is_some()))?;
        self.string_field("raw", &qual_type.spelling(self.ctx))?;
        if let Some(desugared) = desugared {
            self.string_field("desugared", &desugared)?;
        }
        self.field("type_ptr")?;
        self.type_ptr(qual_type.ty)?;
        self.end()
    }

    /// `{name, qual_name}`; the qualified name is split on `::`, innermost
    /// component first.
    pub(crate) fn named_decl_info(&mut self, name: &DeclName) -> ExportResult {
        self.out.begin_object(2)?;
        self.string_field("name", &name.name)?;
        self.field("qual_name")?;
        let components = name.qualified_components();
        self.out.begin_array(components.len())?;
        for component in components {
            self.string(component)?;
        }
        self.end()?;
        self.end()
    }

    /// Reference digest of a declaration:
    /// `{kind, decl_pointer, ?name, ~is_hidden, ?qual_type}`.
    pub(crate) fn decl_ref(&mut self, id: DeclId) -> ExportResult {
        let decl = self.decl_at(id)?;
        let is_named = decl.kind.inherits_from(DeclKind::Named);
        let name = is_named.then(|| name_or_anonymous(decl.name.as_ref()));
        let is_hidden = is_named && decl.flags.contains(DeclFlags::HIDDEN);
        let value_type = decl
            .value_type
            .filter(|_| decl.kind.inherits_from(DeclKind::Value));

        self.out.begin_object(
            2 + count(&[name.is_some(), is_hidden, value_type.is_some()]),
        )?;
        self.simple_variant_field("kind", decl.kind.name())?;
        self.pointer_field("decl_pointer", NodeRef::Decl(id))?;
        if let Some(name) = name {
            self.field("name")?;
            self.named_decl_info(name)?;
        }
        self.flag("is_hidden", is_hidden)?;
        if let Some(value_type) = value_type {
            self.field("qual_type")?;
            self.qual_type(value_type)?;
        }
        self.end()
    }

    pub(crate) fn opt_decl_ref_field(&mut self, name: &str, id: Option<DeclId>) -> ExportResult {
        if let Some(id) = id {
            self.field(name)?;
            self.decl_ref(id)?;
        }
        Ok(())
    }

    pub(crate) fn decl_ref_list(&mut self, ids: &[DeclId]) -> ExportResult {
        self.out.begin_array(ids.len())?;
        for &id in ids {
            self.decl_ref(id)?;
        }
        self.end()
    }

    /// `Variant("<Name>Attr", {pointer, source_range, parameters,
    /// ~is_inherited, ~is_implicit})`
    pub(crate) fn attribute(&mut self, id: AttrId) -> ExportResult {
        let attr = self.attr_at(id)?;
        self.out.begin_variant(&attr.variant_tag())?;
        self.out
            .begin_object(3 + count(&[attr.is_inherited, attr.is_implicit]))?;
        self.pointer_field("pointer", NodeRef::Attr(id))?;
        self.field("source_range")?;
        self.source_range(attr.range)?;
        self.field("parameters")?;
        self.string_list(&attr.parameters)?;
        self.flag("is_inherited", attr.is_inherited)?;
        self.flag("is_implicit", attr.is_implicit)?;
        self.end()?;
        self.end()
    }

    pub(crate) fn attributes(&mut self, ids: &[AttrId]) -> ExportResult {
        self.out.begin_array(ids.len())?;
        for &id in ids {
            self.attribute(id)?;
        }
        self.end()
    }

    /// `{kind, name}`
    pub(crate) fn declaration_name(&mut self, name: &DeclarationName) -> ExportResult {
        self.out.begin_object(2)?;
        self.simple_variant_field("kind", name.kind.name())?;
        self.string_field("name", &name.name)?;
        self.end()
    }

    /// `[{kind, ?ref}]`, outermost component first.
    pub(crate) fn nested_name_specifiers(
        &mut self,
        specifiers: &[NestedNameSpecifier],
    ) -> ExportResult {
        self.out.begin_array(specifiers.len())?;
        for specifier in specifiers {
            self.out
                .begin_object(1 + usize::from(specifier.decl.is_some()))?;
            self.simple_variant_field("kind", specifier.kind.name())?;
            self.opt_decl_ref_field("ref", specifier.decl)?;
            self.end()?;
        }
        self.end()
    }

    /// `[{subject, ?init_expr}]`. Initializer expressions are defined here.
    pub(crate) fn ctor_initializers(&mut self, inits: &[CtorInitializer]) -> ExportResult {
        self.out.begin_array(inits.len())?;
        for init in inits {
            self.out
                .begin_object(1 + usize::from(init.init.is_some()))?;
            self.field("subject")?;
            match &init.subject {
                InitializerSubject::Member(decl) => {
                    self.out.begin_variant("Member")?;
                    self.decl_ref(*decl)?;
                    self.end()?;
                }
                InitializerSubject::Delegating(ty) => {
                    self.out.begin_variant("Delegating")?;
                    self.qual_type(*ty)?;
                    self.end()?;
                }
                InitializerSubject::BaseClass { ty, is_virtual } => {
                    self.out.begin_variant("BaseClass")?;
                    self.out.begin_tuple(2)?;
                    self.qual_type(*ty)?;
                    self.out.emit_boolean(*is_virtual)?;
                    self.end()?;
                    self.end()?;
                }
            }
            if let Some(expr) = init.init {
                self.field("init_expr")?;
                self.stmt(expr)?;
            }
            self.end()?;
        }
        self.end()
    }
}
