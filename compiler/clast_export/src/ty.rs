//! Type dispatcher.
//!
//! Types are defined only in the translation unit's global type list, in
//! arena order, followed by one `NoneType` entry standing for the null
//! type. Every other mention is a `type_ptr` identity. Types never nest
//! definitions, so no stack growth is needed here.

use clast_ir::{Family, NodeKind, NodeRef, Type, TypeData, TypeId, TypeKind};
use clast_writer::DocumentWriter;
use tracing::{debug, trace};

use crate::arity::{array_arity, Arity};
use crate::exporter::{missing, ExportResult, Exporter};
use crate::ExportError;

impl<W: DocumentWriter + ?Sized> Exporter<'_, W> {
    /// The global type list of the translation unit.
    pub(crate) fn type_list(&mut self) -> ExportResult {
        let ctx = self.ctx;
        let arity = array_arity(
            ctx.type_ids()
                .map(|id| ctx.ty(id).kind)
                .chain(std::iter::once(TypeKind::None)),
        );
        debug!(types = ctx.type_count(), fields = arity.fields, "type list");
        self.out.begin_array(arity.elements)?;
        for id in ctx.type_ids() {
            self.type_node(id, ctx.ty(id))?;
        }
        self.none_type()?;
        self.end()
    }

    fn type_node(&mut self, id: TypeId, ty: &Type) -> ExportResult {
        if ty.kind.is_abstract() {
            return Err(ExportError::AbstractKind {
                family: Family::Type,
                name: ty.kind.variant_tag(),
            });
        }
        trace!(kind = %ty.kind, raw = %ty.raw, "type");
        self.out.begin_variant(ty.kind.variant_tag())?;
        self.out.begin_tuple(ty.kind.tuple_size())?;
        self.type_fields(ty.kind, id, ty)?;
        self.end()?;
        self.end()
    }

    /// `NoneType` entry: the null identity with an empty spelling.
    fn none_type(&mut self) -> ExportResult {
        self.out.begin_variant(TypeKind::None.variant_tag())?;
        self.out.begin_tuple(TypeKind::None.tuple_size())?;
        self.out.begin_object(2)?;
        self.type_ptr_field("pointer", None)?;
        self.string_field("raw", "")?;
        self.end()?;
        self.end()?;
        self.end()
    }

    fn type_fields(&mut self, level: TypeKind, id: TypeId, ty: &Type) -> ExportResult {
        if let Some(parent) = level.parent() {
            self.type_fields(parent, id, ty)?;
        }
        self.own_type_fields(level, id, ty)
    }

    fn type_ptr_field(&mut self, name: &str, ty: Option<TypeId>) -> ExportResult {
        self.field(name)?;
        self.type_ptr(ty)
    }

    fn own_type_fields(&mut self, level: TypeKind, id: TypeId, ty: &Type) -> ExportResult {
        let kind = ty.kind;
        match level {
            TypeKind::Type => {
                self.out
                    .begin_object(2 + usize::from(ty.desugared.is_some()))?;
                self.type_ptr_field("pointer", Some(id))?;
                self.string_field("raw", &ty.raw)?;
                if let Some(desugared) = ty.desugared {
                    self.type_ptr_field("desugared_type", Some(desugared))?;
                }
                self.end()
            }
            TypeKind::Adjusted
            | TypeKind::Array
            | TypeKind::Atomic
            | TypeKind::BlockPointer
            | TypeKind::Decltype
            | TypeKind::MemberPointer
            | TypeKind::ObjCObjectPointer
            | TypeKind::Paren
            | TypeKind::Pointer
            | TypeKind::Reference => {
                let child = ty.data.child().ok_or_else(|| missing(kind, "child type"))?;
                self.type_ptr(child)
            }
            TypeKind::ConstantArray => match ty.data {
                TypeData::ConstantArray { size, .. } => {
                    self.out.emit_unsigned(size)?;
                    Ok(())
                }
                _ => Err(missing(kind, "array size")),
            },
            TypeKind::Builtin => match ty.data {
                TypeData::Builtin(builtin) => {
                    self.out.emit_simple_variant(builtin.name())?;
                    Ok(())
                }
                _ => Err(missing(kind, "builtin kind")),
            },
            TypeKind::Function => {
                let TypeData::Function { return_type, .. } = &ty.data else {
                    return Err(missing(kind, "function signature"));
                };
                self.out.begin_object(1)?;
                self.type_ptr_field("return_type", *return_type)?;
                self.end()
            }
            TypeKind::FunctionProto => {
                let TypeData::Function { params, .. } = &ty.data else {
                    return Err(missing(kind, "function signature"));
                };
                let params = params.as_deref().unwrap_or_default();
                self.out.begin_object(usize::from(!params.is_empty()))?;
                if !params.is_empty() {
                    self.field("params_type")?;
                    self.type_ptr_list(params)?;
                }
                self.end()
            }
            TypeKind::ObjCObject => {
                let (base, protocols) = match &ty.data {
                    TypeData::ObjCObject { base, protocols }
                    | TypeData::ObjCInterface {
                        base, protocols, ..
                    } => (*base, protocols),
                    _ => return Err(missing(kind, "object base type")),
                };
                self.out
                    .begin_object(1 + usize::from(!protocols.is_empty()))?;
                self.type_ptr_field("base_type", base)?;
                if !protocols.is_empty() {
                    self.field("protocol_decls_ptr")?;
                    self.decl_pointer_list(protocols)?;
                }
                self.end()
            }
            TypeKind::ObjCInterface => match ty.data {
                TypeData::ObjCInterface { decl, .. } => self.pointer(NodeRef::Decl(decl)),
                _ => Err(missing(kind, "interface declaration")),
            },
            TypeKind::Tag => match ty.data {
                TypeData::Tag(decl) => self.pointer(NodeRef::Decl(decl)),
                _ => Err(missing(kind, "tag declaration")),
            },
            TypeKind::Typedef => {
                let TypeData::Typedef { child, decl } = ty.data else {
                    return Err(missing(kind, "typedef declaration"));
                };
                self.out.begin_object(2)?;
                self.type_ptr_field("child_type", child)?;
                self.pointer_field("decl_ptr", NodeRef::Decl(decl))?;
                self.end()
            }
            TypeKind::None
            | TypeKind::Complex
            | TypeKind::LValueReference
            | TypeKind::RValueReference
            | TypeKind::IncompleteArray
            | TypeKind::VariableArray
            | TypeKind::DependentSizedArray
            | TypeKind::DependentSizedExtVector
            | TypeKind::Vector
            | TypeKind::ExtVector
            | TypeKind::FunctionNoProto
            | TypeKind::UnresolvedUsing
            | TypeKind::Decayed
            | TypeKind::TypeOfExpr
            | TypeKind::TypeOf
            | TypeKind::UnaryTransform
            | TypeKind::Record
            | TypeKind::Enum
            | TypeKind::Elaborated
            | TypeKind::Attributed
            | TypeKind::TemplateTypeParm
            | TypeKind::SubstTemplateTypeParm
            | TypeKind::SubstTemplateTypeParmPack
            | TypeKind::TemplateSpecialization
            | TypeKind::Auto
            | TypeKind::InjectedClassName
            | TypeKind::DependentName
            | TypeKind::DependentTemplateSpecialization
            | TypeKind::PackExpansion => Ok(()),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
