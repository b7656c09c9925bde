//! Convenience construction of translation units.
//!
//! Front-end adapters and tests build trees through [`AstBuilder`], which
//! keeps parent links and declaration-context lists consistent and shares
//! builtin types. Anything the helpers do not cover can still be allocated
//! directly through [`AstBuilder::ctx_mut`].

use rustc_hash::FxHashMap;

use crate::decl::{
    Decl, DeclContextInfo, DeclData, DeclName, FieldInfo, FunctionInfo, RecordInfo, VarInfo,
};
use crate::ids::{DeclId, FileId, StmtId, TypeId};
use crate::kind::{DeclKind, StmtKind, TypeKind};
use crate::location::{SourceLocation, SourceRange};
use crate::qual_type::QualType;
use crate::stmt::{
    BinaryInfo, BinaryOpcode, DeclRefInfo, ExprInfo, IntegerLiteralInfo, Stmt, StmtData,
    ValueKind,
};
use crate::ty::{BuiltinKind, Type, TypeData};
use crate::AstContext;

pub struct AstBuilder {
    ctx: AstContext,
    file: FileId,
    translation_unit: DeclId,
    builtins: FxHashMap<BuiltinKind, TypeId>,
}

impl AstBuilder {
    /// Start a translation unit whose main file is `file_name`.
    pub fn new(file_name: &str) -> Self {
        let mut ctx = AstContext::new();
        let file = ctx.add_file(file_name);
        let translation_unit = ctx.alloc_decl(
            Decl::new(DeclKind::TranslationUnit, SourceRange::INVALID)
                .with_context(DeclContextInfo::default()),
        );
        AstBuilder {
            ctx,
            file,
            translation_unit,
            builtins: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn ctx(&self) -> &AstContext {
        &self.ctx
    }

    #[inline]
    pub fn ctx_mut(&mut self) -> &mut AstContext {
        &mut self.ctx
    }

    #[inline]
    pub fn translation_unit(&self) -> DeclId {
        self.translation_unit
    }

    #[inline]
    pub fn main_file(&self) -> FileId {
        self.file
    }

    /// Finish building, returning the context and the root declaration.
    pub fn finish(self) -> (AstContext, DeclId) {
        (self.ctx, self.translation_unit)
    }

    /// Location in the main file.
    #[inline]
    pub fn loc(&self, line: u32, column: u32) -> SourceLocation {
        SourceLocation::new(self.file, line, column)
    }

    /// Range in the main file.
    pub fn range(&self, begin: (u32, u32), end: (u32, u32)) -> SourceRange {
        SourceRange::new(self.loc(begin.0, begin.1), self.loc(end.0, end.1))
    }

    // Types

    /// Builtin type, allocated once per kind.
    pub fn builtin(&mut self, kind: BuiltinKind) -> TypeId {
        if let Some(&id) = self.builtins.get(&kind) {
            return id;
        }
        let id = self.ctx.alloc_type(
            Type::new(TypeKind::Builtin, kind.spelling()).with_data(TypeData::Builtin(kind)),
        );
        self.builtins.insert(kind, id);
        id
    }

    pub fn pointer_to(&mut self, pointee: TypeId) -> TypeId {
        let raw = format!("{} *", self.ctx.ty(pointee).raw);
        self.ctx
            .alloc_type(Type::new(TypeKind::Pointer, raw).with_data(TypeData::Child(Some(pointee))))
    }

    /// `struct`/`union` type naming `decl`; the decl's type-for-decl is set.
    pub fn record_type(&mut self, decl: DeclId) -> TypeId {
        let raw = format!("struct {}", self.ctx.decl(decl).name_str());
        let id = self
            .ctx
            .alloc_type(Type::new(TypeKind::Record, raw).with_data(TypeData::Tag(decl)));
        self.ctx.decl_mut(decl).type_for_decl = Some(id);
        id
    }

    pub fn function_type(&mut self, return_type: TypeId, params: &[TypeId]) -> TypeId {
        let names: Vec<&str> = params.iter().map(|&p| self.ctx.ty(p).raw.as_str()).collect();
        let raw = format!("{} ({})", self.ctx.ty(return_type).raw, names.join(", "));
        self.ctx.alloc_type(Type::new(TypeKind::FunctionProto, raw).with_data(
            TypeData::Function {
                return_type: Some(return_type),
                params: Some(params.iter().copied().map(Some).collect()),
            },
        ))
    }

    // Declarations

    /// Append `child` to `parent`'s context and point the child back at it.
    pub fn add_to_context(&mut self, parent: DeclId, child: DeclId) {
        self.ctx
            .decl_mut(parent)
            .context
            .get_or_insert_with(DeclContextInfo::default)
            .decls
            .push(child);
        let child = self.ctx.decl_mut(child);
        child.semantic_parent = Some(parent);
        child.lexical_parent = Some(parent);
    }

    /// Allocate `decl` and append it to `parent`'s context.
    pub fn declare(&mut self, parent: DeclId, decl: Decl) -> DeclId {
        let id = self.ctx.alloc_decl(decl);
        self.add_to_context(parent, id);
        id
    }

    /// Parameter declaration; attach it through [`AstBuilder::function`].
    pub fn param(&mut self, name: &str, ty: QualType, range: SourceRange) -> DeclId {
        self.ctx.alloc_decl(
            Decl::new(DeclKind::ParmVar, range)
                .with_name(DeclName::simple(name))
                .with_value_type(ty)
                .with_data(DeclData::Var(VarInfo::default())),
        )
    }

    pub fn function(
        &mut self,
        parent: DeclId,
        name: &str,
        ty: TypeId,
        params: Vec<DeclId>,
        body: Option<StmtId>,
        range: SourceRange,
    ) -> DeclId {
        let decl = Decl::new(DeclKind::Function, range)
            .with_name(self.qualified(parent, name))
            .with_value_type(QualType::new(ty))
            .with_data(DeclData::Function(FunctionInfo {
                params: params.clone(),
                body,
                ..FunctionInfo::default()
            }));
        let id = self.declare(parent, decl);
        for param in params {
            let param = self.ctx.decl_mut(param);
            param.semantic_parent = Some(id);
            param.lexical_parent = Some(id);
        }
        id
    }

    /// Variable declared in `parent`'s context.
    pub fn var(
        &mut self,
        parent: DeclId,
        name: &str,
        ty: QualType,
        init: Option<StmtId>,
        range: SourceRange,
    ) -> DeclId {
        let decl = self.local_var(name, ty, init, range);
        self.add_to_context(parent, decl);
        let qualified = self.qualified(parent, name);
        self.ctx.decl_mut(decl).name = Some(qualified);
        decl
    }

    /// Variable not attached to any context (e.g. for a `DeclStmt`).
    pub fn local_var(
        &mut self,
        name: &str,
        ty: QualType,
        init: Option<StmtId>,
        range: SourceRange,
    ) -> DeclId {
        self.ctx.alloc_decl(
            Decl::new(DeclKind::Var, range)
                .with_name(DeclName::simple(name))
                .with_value_type(ty)
                .with_data(DeclData::Var(VarInfo {
                    init,
                    ..VarInfo::default()
                })),
        )
    }

    /// Complete `struct` definition with a record type of its own.
    pub fn record(&mut self, parent: DeclId, name: &str, range: SourceRange) -> (DeclId, TypeId) {
        let decl = Decl::new(DeclKind::Record, range)
            .with_name(self.qualified(parent, name))
            .with_context(DeclContextInfo::default())
            .with_data(DeclData::Record(RecordInfo {
                is_complete_definition: true,
                ..RecordInfo::default()
            }));
        let id = self.declare(parent, decl);
        let ty = self.record_type(id);
        (id, ty)
    }

    pub fn field(&mut self, record: DeclId, name: &str, ty: QualType, range: SourceRange) -> DeclId {
        let decl = Decl::new(DeclKind::Field, range)
            .with_name(self.qualified(record, name))
            .with_value_type(ty)
            .with_data(DeclData::Field(FieldInfo::default()));
        self.declare(record, decl)
    }

    fn qualified(&self, parent: DeclId, name: &str) -> DeclName {
        match self.ctx.decl(parent).name.as_ref() {
            Some(outer) if !outer.qualified_name.is_empty() => {
                DeclName::new(name, format!("{}::{name}", outer.qualified_name))
            }
            _ => DeclName::simple(name),
        }
    }

    // Statements

    pub fn stmt(&mut self, stmt: Stmt) -> StmtId {
        self.ctx.alloc_stmt(stmt)
    }

    pub fn compound(&mut self, children: Vec<StmtId>, range: SourceRange) -> StmtId {
        self.stmt(Stmt::new(StmtKind::CompoundStmt, range).with_children(children))
    }

    pub fn return_stmt(&mut self, value: Option<StmtId>, range: SourceRange) -> StmtId {
        self.stmt(Stmt::new(StmtKind::ReturnStmt, range).with_slots(vec![value]))
    }

    /// Declaration statement. Initializers stay with their variables.
    pub fn decl_stmt(&mut self, decls: Vec<DeclId>, range: SourceRange) -> StmtId {
        self.stmt(Stmt::new(StmtKind::DeclStmt, range).with_data(StmtData::Decls(decls)))
    }

    pub fn int_literal(&mut self, value: i64, range: SourceRange) -> StmtId {
        let int = self.builtin(BuiltinKind::Int);
        self.stmt(
            Stmt::new(StmtKind::IntegerLiteral, range)
                .with_expr(ExprInfo::new(QualType::new(int)))
                .with_data(StmtData::IntegerLiteral(IntegerLiteralInfo {
                    is_signed: true,
                    bitwidth: 32,
                    value: value.to_string(),
                })),
        )
    }

    /// Lvalue reference to a value declaration.
    pub fn decl_ref(&mut self, decl: DeclId, range: SourceRange) -> StmtId {
        let ty = self.ctx.decl(decl).value_type.unwrap_or(QualType::NULL);
        self.stmt(
            Stmt::new(StmtKind::DeclRefExpr, range)
                .with_expr(ExprInfo {
                    value_kind: ValueKind::LValue,
                    ..ExprInfo::new(ty)
                })
                .with_data(StmtData::DeclRef(DeclRefInfo {
                    decl: Some(decl),
                    found: None,
                })),
        )
    }

    pub fn binary(
        &mut self,
        opcode: BinaryOpcode,
        lhs: StmtId,
        rhs: StmtId,
        ty: QualType,
        range: SourceRange,
    ) -> StmtId {
        self.stmt(
            Stmt::new(StmtKind::BinaryOperator, range)
                .with_children([lhs, rhs])
                .with_expr(ExprInfo::new(ty))
                .with_data(StmtData::Binary(BinaryInfo {
                    opcode,
                    compound: None,
                })),
        )
    }
}

#[cfg(test)]
mod tests;
