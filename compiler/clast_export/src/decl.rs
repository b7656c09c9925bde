//! Declaration dispatcher.
//!
//! A declaration is written as `Variant("<Kind>Decl", Tuple(n))`, where the
//! tuple holds the fields of every level of the kind's parent chain, most
//! general first. `decl_fields` recurses to the root before writing a
//! level's own fields, so the field order always matches the sizes declared
//! by [`Arity`].

use clast_ir::stack::ensure_sufficient_stack;
use clast_ir::{
    Decl, DeclData, DeclFlags, DeclId, DeclKind, Family, NodeKind, NodeRef,
    PropertyAttribute, QualType, Redeclaration,
};
use clast_writer::DocumentWriter;
use smallvec::SmallVec;
use tracing::trace;

use crate::arity::Arity;
use crate::exporter::{count, missing, name_or_anonymous, ExportResult, Exporter};
use crate::ExportError;

impl<W: DocumentWriter + ?Sized> Exporter<'_, W> {
    /// Define the declaration `id`.
    pub(crate) fn decl(&mut self, id: DeclId) -> ExportResult {
        let decl = self.decl_at(id)?;
        self.decl_node(NodeRef::Decl(id), decl)
    }

    /// Define `id`, or write the declaration sentinel in its place.
    pub(crate) fn opt_decl(&mut self, id: Option<DeclId>) -> ExportResult {
        match id {
            Some(id) => self.decl(id),
            None => {
                trace!("absent declaration, writing sentinel");
                let sentinels = self.sentinels;
                self.decl_node(NodeRef::Sentinel(Family::Decl), sentinels.decl())
            }
        }
    }

    pub(crate) fn decl_list(&mut self, ids: &[DeclId]) -> ExportResult {
        self.out.begin_array(ids.len())?;
        for &id in ids {
            self.decl(id)?;
        }
        self.end()
    }

    fn decl_node(&mut self, node: NodeRef, decl: &Decl) -> ExportResult {
        if decl.kind.is_abstract() {
            return Err(ExportError::AbstractKind {
                family: Family::Decl,
                name: decl.kind.variant_tag(),
            });
        }
        trace!(kind = %decl.kind, name = decl.name_str(), "decl");
        ensure_sufficient_stack(|| {
            self.out.begin_variant(decl.kind.variant_tag())?;
            self.out.begin_tuple(decl.kind.tuple_size())?;
            self.decl_fields(decl.kind, node, decl)?;
            self.end()?;
            self.end()
        })
    }

    fn decl_fields(&mut self, level: DeclKind, node: NodeRef, decl: &Decl) -> ExportResult {
        if let Some(parent) = level.parent() {
            self.decl_fields(parent, node, decl)?;
        }
        self.own_decl_fields(level, node, decl)
    }

    fn own_decl_fields(&mut self, level: DeclKind, node: NodeRef, decl: &Decl) -> ExportResult {
        let module_private = decl.flags.contains(DeclFlags::MODULE_PRIVATE);
        match level {
            DeclKind::Decl => self.decl_info(node, decl),
            DeclKind::Block => {
                self.decl_context(decl)?;
                self.block_info(decl)
            }
            DeclKind::Namespace => {
                self.decl_context(decl)?;
                self.namespace_info(decl)
            }
            DeclKind::TranslationUnit => {
                self.decl_context(decl)?;
                self.type_list()
            }
            DeclKind::Captured
            | DeclKind::LinkageSpec
            | DeclKind::ObjCContainer
            | DeclKind::Tag => self.decl_context(decl),
            DeclKind::Named => self.named_decl_info(name_or_anonymous(decl.name.as_ref())),
            DeclKind::Type => {
                match decl.type_for_decl {
                    Some(ty) => {
                        let raw = &self.type_at(ty)?.raw;
                        self.out.begin_variant("Type")?;
                        self.string(raw)?;
                        self.end()?;
                    }
                    None => self.out.emit_simple_variant("NoType")?,
                }
                self.type_ptr(decl.type_for_decl)
            }
            DeclKind::Value => self.qual_type(decl.value_type.unwrap_or(QualType::NULL)),
            DeclKind::Typedef => {
                self.out.begin_object(count(&[module_private]))?;
                self.flag("is_module_private", module_private)?;
                self.end()
            }
            DeclKind::Enum => {
                let DeclData::Enum(info) = &decl.data else {
                    return Err(missing(decl.kind, "enum info"));
                };
                let scope = info.scope;
                self.out
                    .begin_object(count(&[scope.is_some(), module_private]))?;
                if let Some(scope) = scope {
                    self.simple_variant_field("scope", scope.name())?;
                }
                self.flag("is_module_private", module_private)?;
                self.end()
            }
            DeclKind::Record => {
                let DeclData::Record(info) = &decl.data else {
                    return Err(missing(decl.kind, "record info"));
                };
                self.out.begin_object(count(&[
                    module_private,
                    info.is_complete_definition,
                ]))?;
                self.flag("is_module_private", module_private)?;
                self.flag("is_complete_definition", info.is_complete_definition)?;
                self.end()
            }
            DeclKind::CXXRecord => {
                let DeclData::Record(info) = &decl.data else {
                    return Err(missing(decl.kind, "record info"));
                };
                if !info.is_complete_definition {
                    self.out.begin_object(0)?;
                    return self.end();
                }
                self.out.begin_object(count(&[
                    !info.bases.is_empty(),
                    !info.vbases.is_empty(),
                    info.is_c_like,
                ]))?;
                if !info.bases.is_empty() {
                    self.field("bases")?;
                    self.type_ptr_list(&info.bases)?;
                }
                if !info.vbases.is_empty() {
                    self.field("vbases")?;
                    self.type_ptr_list(&info.vbases)?;
                }
                self.flag("is_c_like", info.is_c_like)?;
                self.end()
            }
            DeclKind::EnumConstant => {
                let DeclData::EnumConstant { init } = &decl.data else {
                    return Err(missing(decl.kind, "enum constant initializer"));
                };
                self.out.begin_object(usize::from(init.is_some()))?;
                if let Some(init) = *init {
                    self.field("init_expr")?;
                    self.stmt(init)?;
                }
                self.end()
            }
            DeclKind::IndirectField => {
                let DeclData::IndirectField(chain) = &decl.data else {
                    return Err(missing(decl.kind, "field chain"));
                };
                self.decl_ref_list(chain)
            }
            DeclKind::Function => self.function_info(decl, module_private),
            DeclKind::Field => {
                let DeclData::Field(info) = &decl.data else {
                    return Err(missing(decl.kind, "field info"));
                };
                self.out.begin_object(count(&[
                    info.is_mutable,
                    module_private,
                    info.init.is_some(),
                    info.bit_width.is_some(),
                ]))?;
                self.flag("is_mutable", info.is_mutable)?;
                self.flag("is_module_private", module_private)?;
                if let Some(init) = info.init {
                    self.field("init_expr")?;
                    self.stmt(init)?;
                }
                if let Some(width) = info.bit_width {
                    self.field("bit_width_expr")?;
                    self.stmt(width)?;
                }
                self.end()
            }
            DeclKind::Var => {
                let DeclData::Var(info) = &decl.data else {
                    return Err(missing(decl.kind, "variable info"));
                };
                let has_tls = info.tls_kind != clast_ir::TlsKind::None;
                self.out.begin_object(count(&[
                    info.storage_class.is_some(),
                    has_tls,
                    module_private,
                    info.is_nrvo,
                    info.init.is_some(),
                ]))?;
                if let Some(storage) = info.storage_class {
                    self.string_field("storage_class", storage.spelling())?;
                }
                if has_tls {
                    self.simple_variant_field("tls_kind", info.tls_kind.name())?;
                }
                self.flag("is_module_private", module_private)?;
                self.flag("is_nrvo_variable", info.is_nrvo)?;
                if let Some(init) = info.init {
                    self.field("init_expr")?;
                    self.stmt(init)?;
                }
                self.end()
            }
            DeclKind::FileScopeAsm => match &decl.data {
                DeclData::FileScopeAsm(text) => self.string(text),
                _ => Err(missing(decl.kind, "assembly text")),
            },
            DeclKind::Import => match &decl.data {
                DeclData::Import(module) => self.string(module),
                _ => Err(missing(decl.kind, "module name")),
            },
            DeclKind::UsingDirective => {
                let DeclData::UsingDirective(info) = &decl.data else {
                    return Err(missing(decl.kind, "using directive info"));
                };
                let has_qualifier = !info.qualifier.is_empty();
                self.out.begin_object(
                    2 + count(&[has_qualifier, info.nominated.is_some()]),
                )?;
                self.field("using_location")?;
                self.location(info.using_location)?;
                self.field("namespace_key_location")?;
                self.location(info.namespace_key_location)?;
                if has_qualifier {
                    self.field("nested_name_specifier_locs")?;
                    self.nested_name_specifiers(&info.qualifier)?;
                }
                self.opt_decl_ref_field("nominated_namespace", info.nominated)?;
                self.end()
            }
            DeclKind::NamespaceAlias => {
                let DeclData::NamespaceAlias(info) = &decl.data else {
                    return Err(missing(decl.kind, "namespace alias info"));
                };
                let has_qualifier = !info.qualifier.is_empty();
                self.out
                    .begin_object(3 + usize::from(has_qualifier))?;
                self.field("namespace_loc")?;
                self.location(info.namespace_location)?;
                self.field("target_name_loc")?;
                self.location(info.target_name_location)?;
                if has_qualifier {
                    self.field("nested_name_specifier_locs")?;
                    self.nested_name_specifiers(&info.qualifier)?;
                }
                self.field("namespace")?;
                self.decl_ref(info.namespace)?;
                self.end()
            }
            DeclKind::ObjCIvar => {
                let DeclData::Field(info) = &decl.data else {
                    return Err(missing(decl.kind, "ivar info"));
                };
                let ivar = &info.ivar;
                let has_access = ivar.access_control != clast_ir::AccessControl::None;
                self.out
                    .begin_object(count(&[ivar.is_synthesize, has_access]))?;
                self.flag("is_synthesize", ivar.is_synthesize)?;
                if has_access {
                    self.simple_variant_field("access_control", ivar.access_control.name())?;
                }
                self.end()
            }
            DeclKind::ObjCMethod => {
                let DeclData::ObjCMethod(info) = &decl.data else {
                    return Err(missing(decl.kind, "method info"));
                };
                self.out.begin_object(
                    1 + count(&[
                        info.is_instance,
                        !info.params.is_empty(),
                        info.is_variadic,
                        info.body.is_some(),
                    ]),
                )?;
                self.flag("is_instance_method", info.is_instance)?;
                self.field("result_type")?;
                self.qual_type(info.result_type)?;
                if !info.params.is_empty() {
                    self.field("parameters")?;
                    self.decl_list(&info.params)?;
                }
                self.flag("is_variadic", info.is_variadic)?;
                if let Some(body) = info.body {
                    self.field("body")?;
                    self.stmt(body)?;
                }
                self.end()
            }
            DeclKind::ObjCCategory => {
                let DeclData::ObjCCategory(info) = &decl.data else {
                    return Err(missing(decl.kind, "category info"));
                };
                self.out.begin_object(count(&[
                    info.class_interface.is_some(),
                    info.implementation.is_some(),
                    !info.protocols.is_empty(),
                ]))?;
                self.opt_decl_ref_field("class_interface", info.class_interface)?;
                self.opt_decl_ref_field("implementation", info.implementation)?;
                self.protocols_field(&info.protocols)?;
                self.end()
            }
            DeclKind::ObjCCategoryImpl => {
                let DeclData::ObjCCategoryImpl(info) = &decl.data else {
                    return Err(missing(decl.kind, "category implementation info"));
                };
                self.out.begin_object(count(&[
                    info.class_interface.is_some(),
                    info.category.is_some(),
                ]))?;
                self.opt_decl_ref_field("class_interface", info.class_interface)?;
                self.opt_decl_ref_field("category_decl", info.category)?;
                self.end()
            }
            DeclKind::ObjCProtocol => {
                let DeclData::ObjCProtocol { protocols } = &decl.data else {
                    return Err(missing(decl.kind, "protocol list"));
                };
                self.out
                    .begin_object(usize::from(!protocols.is_empty()))?;
                self.protocols_field(protocols)?;
                self.end()
            }
            DeclKind::ObjCInterface => {
                let DeclData::ObjCInterface(info) = &decl.data else {
                    return Err(missing(decl.kind, "interface info"));
                };
                self.out.begin_object(count(&[
                    info.super_class.is_some(),
                    info.implementation.is_some(),
                    !info.protocols.is_empty(),
                ]))?;
                self.opt_decl_ref_field("super", info.super_class)?;
                self.opt_decl_ref_field("implementation", info.implementation)?;
                self.protocols_field(&info.protocols)?;
                self.end()
            }
            DeclKind::ObjCImplementation => {
                let DeclData::ObjCImplementation(info) = &decl.data else {
                    return Err(missing(decl.kind, "implementation info"));
                };
                self.out.begin_object(count(&[
                    info.super_class.is_some(),
                    info.class_interface.is_some(),
                    !info.ivar_initializers.is_empty(),
                ]))?;
                self.opt_decl_ref_field("super", info.super_class)?;
                self.opt_decl_ref_field("class_interface", info.class_interface)?;
                if !info.ivar_initializers.is_empty() {
                    self.field("ivar_initializers")?;
                    self.ctor_initializers(&info.ivar_initializers)?;
                }
                self.end()
            }
            DeclKind::ObjCCompatibleAlias => {
                let DeclData::ObjCCompatibleAlias { class_interface } = &decl.data else {
                    return Err(missing(decl.kind, "aliased interface"));
                };
                self.out
                    .begin_object(usize::from(class_interface.is_some()))?;
                self.opt_decl_ref_field("class_interface", *class_interface)?;
                self.end()
            }
            DeclKind::ObjCProperty => self.property_info(decl),
            DeclKind::ObjCPropertyImpl => {
                let DeclData::ObjCPropertyImpl(info) = &decl.data else {
                    return Err(missing(decl.kind, "property implementation info"));
                };
                self.out.begin_object(
                    1 + count(&[info.property.is_some(), info.ivar.is_some()]),
                )?;
                self.simple_variant_field("implementation", info.implementation.name())?;
                self.opt_decl_ref_field("property_decl", info.property)?;
                self.opt_decl_ref_field("ivar_decl", info.ivar)?;
                self.end()
            }
            DeclKind::AccessSpec
            | DeclKind::ClassScopeFunctionSpecialization
            | DeclKind::Empty
            | DeclKind::Friend
            | DeclKind::FriendTemplate
            | DeclKind::Label
            | DeclKind::ObjCImpl
            | DeclKind::Template
            | DeclKind::ClassTemplate
            | DeclKind::FunctionTemplate
            | DeclKind::TypeAliasTemplate
            | DeclKind::VarTemplate
            | DeclKind::TemplateTemplateParm
            | DeclKind::ClassTemplateSpecialization
            | DeclKind::ClassTemplatePartialSpecialization
            | DeclKind::TemplateTypeParm
            | DeclKind::TypedefName
            | DeclKind::TypeAlias
            | DeclKind::UnresolvedUsingTypename
            | DeclKind::Using
            | DeclKind::UsingShadow
            | DeclKind::Declarator
            | DeclKind::ObjCAtDefsField
            | DeclKind::CXXMethod
            | DeclKind::CXXConstructor
            | DeclKind::CXXConversion
            | DeclKind::CXXDestructor
            | DeclKind::MSProperty
            | DeclKind::NonTypeTemplateParm
            | DeclKind::ImplicitParam
            | DeclKind::ParmVar
            | DeclKind::VarTemplateSpecialization
            | DeclKind::VarTemplatePartialSpecialization
            | DeclKind::UnresolvedUsingValue
            | DeclKind::StaticAssert => Ok(()),
        }
    }

    /// `{pointer, ?parent_pointer, ?previous_decl, source_range,
    /// ?owning_module, ~flags.., attributes, ?full_comment}`
    fn decl_info(&mut self, node: NodeRef, decl: &Decl) -> ExportResult {
        // Only written when the declaration appears outside its semantic
        // parent (e.g. an out-of-line method definition).
        let parent = decl
            .semantic_parent
            .filter(|&semantic| decl.lexical_parent != Some(semantic));
        let flags = decl.flags;
        let is_hidden =
            decl.kind.inherits_from(DeclKind::Named) && flags.contains(DeclFlags::HIDDEN);
        let is_implicit = flags.contains(DeclFlags::IMPLICIT);
        let is_used = flags.contains(DeclFlags::USED);
        let is_referenced = flags.contains(DeclFlags::REFERENCED);
        let is_invalid = flags.contains(DeclFlags::INVALID);

        self.out.begin_object(
            3 + count(&[
                parent.is_some(),
                decl.redeclaration.is_some(),
                decl.owning_module.is_some(),
                is_hidden,
                is_implicit,
                is_used,
                is_referenced,
                is_invalid,
                decl.full_comment.is_some(),
            ]),
        )?;
        self.pointer_field("pointer", node)?;
        if let Some(parent) = parent {
            self.pointer_field("parent_pointer", NodeRef::Decl(parent))?;
        }
        if let Some(redeclaration) = decl.redeclaration {
            let (tag, target) = match redeclaration {
                Redeclaration::First(id) => ("First", id),
                Redeclaration::Previous(id) => ("Previous", id),
            };
            self.field("previous_decl")?;
            self.out.begin_variant(tag)?;
            self.pointer(NodeRef::Decl(target))?;
            self.end()?;
        }
        self.field("source_range")?;
        self.source_range(decl.range)?;
        if let Some(module) = &decl.owning_module {
            self.string_field("owning_module", module)?;
        }
        self.flag("is_hidden", is_hidden)?;
        self.flag("is_implicit", is_implicit)?;
        self.flag("is_used", is_used)?;
        self.flag("is_this_declaration_referenced", is_referenced)?;
        self.flag("is_invalid_decl", is_invalid)?;
        self.field("attributes")?;
        self.attributes(&decl.attrs)?;
        if let Some(comment) = decl.full_comment {
            self.field("full_comment")?;
            self.comment(comment)?;
        }
        self.end()
    }

    /// Child declarations that pass the filter, then the storage flags.
    fn decl_context(&mut self, decl: &Decl) -> ExportResult {
        let Some(context) = &decl.context else {
            self.out.begin_array(0)?;
            self.end()?;
            self.out.begin_object(0)?;
            return self.end();
        };

        let ctx = self.ctx;
        let options = self.options;
        let mut kept: SmallVec<[DeclId; 16]> = SmallVec::new();
        for &child in &context.decls {
            if options.keeps(ctx, self.decl_at(child)?) {
                kept.push(child);
            } else {
                trace!(?child, "declaration filtered out");
            }
        }
        self.decl_list(&kept)?;

        self.out.begin_object(count(&[
            context.has_external_lexical_storage,
            context.has_external_visible_storage,
        ]))?;
        self.flag(
            "has_external_lexical_storage",
            context.has_external_lexical_storage,
        )?;
        self.flag(
            "has_external_visible_storage",
            context.has_external_visible_storage,
        )?;
        self.end()
    }

    fn namespace_info(&mut self, decl: &Decl) -> ExportResult {
        let DeclData::Namespace(info) = &decl.data else {
            return Err(missing(decl.kind, "namespace info"));
        };
        self.out
            .begin_object(count(&[info.is_inline, info.original.is_some()]))?;
        self.flag("is_inline", info.is_inline)?;
        self.opt_decl_ref_field("original_namespace", info.original)?;
        self.end()
    }

    fn function_info(&mut self, decl: &Decl, module_private: bool) -> ExportResult {
        let DeclData::Function(info) = &decl.data else {
            return Err(missing(decl.kind, "function info"));
        };
        self.out.begin_object(count(&[
            info.storage_class.is_some(),
            info.is_inline,
            info.is_virtual,
            module_private,
            info.is_pure,
            info.is_deleted_as_written,
            !info.decls_in_prototype_scope.is_empty(),
            !info.params.is_empty(),
            !info.ctor_initializers.is_empty(),
            info.body.is_some(),
        ]))?;
        if let Some(storage) = info.storage_class {
            self.string_field("storage_class", storage.spelling())?;
        }
        self.flag("is_inline", info.is_inline)?;
        self.flag("is_virtual", info.is_virtual)?;
        self.flag("is_module_private", module_private)?;
        self.flag("is_pure", info.is_pure)?;
        self.flag("is_delete_as_written", info.is_deleted_as_written)?;
        if !info.decls_in_prototype_scope.is_empty() {
            self.field("decls_in_prototype_scope")?;
            self.decl_list(&info.decls_in_prototype_scope)?;
        }
        if !info.params.is_empty() {
            self.field("parameters")?;
            self.decl_list(&info.params)?;
        }
        if !info.ctor_initializers.is_empty() {
            self.field("cxx_ctor_initializers")?;
            self.ctor_initializers(&info.ctor_initializers)?;
        }
        if let Some(body) = info.body {
            self.field("body")?;
            self.stmt(body)?;
        }
        self.end()
    }

    fn property_info(&mut self, decl: &Decl) -> ExportResult {
        let DeclData::ObjCProperty(info) = &decl.data else {
            return Err(missing(decl.kind, "property info"));
        };
        let has_control = info.control != clast_ir::PropertyControl::None;
        self.out.begin_object(
            1 + count(&[
                info.class_interface.is_some(),
                has_control,
                !info.attributes.is_empty(),
            ]),
        )?;
        self.opt_decl_ref_field("class_interface", info.class_interface)?;
        self.field("qual_type")?;
        self.qual_type(info.ty)?;
        if has_control {
            self.simple_variant_field("property_control", info.control.name())?;
        }
        if !info.attributes.is_empty() {
            self.field("property_attributes")?;
            self.out.begin_array(info.attributes.len())?;
            for attribute in &info.attributes {
                self.property_attribute(*attribute)?;
            }
            self.end()?;
        }
        self.end()
    }

    fn property_attribute(&mut self, attribute: PropertyAttribute) -> ExportResult {
        let name = match attribute {
            PropertyAttribute::Getter(accessor) => return self.accessor("Getter", accessor),
            PropertyAttribute::Setter(accessor) => return self.accessor("Setter", accessor),
            PropertyAttribute::Readonly => "Readonly",
            PropertyAttribute::Assign => "Assign",
            PropertyAttribute::Readwrite => "Readwrite",
            PropertyAttribute::Retain => "Retain",
            PropertyAttribute::Copy => "Copy",
            PropertyAttribute::Nonatomic => "Nonatomic",
            PropertyAttribute::Atomic => "Atomic",
            PropertyAttribute::Weak => "Weak",
            PropertyAttribute::Strong => "Strong",
            PropertyAttribute::UnsafeUnretained => "Unsafe_unretained",
        };
        self.out.emit_simple_variant(name)?;
        Ok(())
    }

    fn accessor(&mut self, tag: &str, method: DeclId) -> ExportResult {
        self.out.begin_variant(tag)?;
        self.decl_ref(method)?;
        self.end()
    }

    fn block_info(&mut self, decl: &Decl) -> ExportResult {
        let DeclData::Block(info) = &decl.data else {
            return Err(missing(decl.kind, "block info"));
        };
        self.out.begin_object(count(&[
            !info.params.is_empty(),
            info.is_variadic,
            info.captures_cxx_this,
            !info.captures.is_empty(),
            info.body.is_some(),
        ]))?;
        if !info.params.is_empty() {
            self.field("parameters")?;
            self.decl_list(&info.params)?;
        }
        self.flag("is_variadic", info.is_variadic)?;
        self.flag("captures_cxx_this", info.captures_cxx_this)?;
        if !info.captures.is_empty() {
            self.field("captured_variables")?;
            self.out.begin_array(info.captures.len())?;
            for capture in &info.captures {
                self.out.begin_object(count(&[
                    capture.is_by_ref,
                    capture.is_nested,
                    capture.variable.is_some(),
                    capture.copy_expr.is_some(),
                ]))?;
                self.flag("is_by_ref", capture.is_by_ref)?;
                self.flag("is_nested", capture.is_nested)?;
                self.opt_decl_ref_field("variable", capture.variable)?;
                if let Some(copy) = capture.copy_expr {
                    self.field("copy_expr")?;
                    self.stmt(copy)?;
                }
                self.end()?;
            }
            self.end()?;
        }
        if let Some(body) = info.body {
            self.field("body")?;
            self.stmt(body)?;
        }
        self.end()
    }

    fn protocols_field(&mut self, protocols: &[DeclId]) -> ExportResult {
        if protocols.is_empty() {
            return Ok(());
        }
        self.field("protocols")?;
        self.decl_ref_list(protocols)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
