//! Statement and expression dispatcher.
//!
//! Statements are written as `Variant("<Kind>", Tuple(n))`. The root level
//! contributes `stmt_info` and the ordered children; an absent child is
//! written as the statement sentinel, so a `for` without an init statement
//! has the same shape as one with it. Expressions add `expr_info`.
//!
//! Operands referenced out of child order (`ExprWithCleanups` sub-expression,
//! `OpaqueValueExpr` source, `new` operands) are written as bare identities;
//! they are defined where they appear as children.

use clast_ir::stack::ensure_sufficient_stack;
use clast_ir::{
    Family, NodeKind, NodeRef, ObjectKind, PropertyRefTarget, ReceiverKind, Stmt, StmtData,
    StmtId, StmtKind, ValueKind,
};
use clast_writer::DocumentWriter;
use smallvec::SmallVec;
use tracing::trace;

use crate::arity::{array_arity, Arity};
use crate::exporter::{count, missing, name_or_anonymous, ExportResult, Exporter};
use crate::ExportError;

impl<W: DocumentWriter + ?Sized> Exporter<'_, W> {
    /// Define the statement `id`.
    pub(crate) fn stmt(&mut self, id: StmtId) -> ExportResult {
        let stmt = self.stmt_at(id)?;
        self.stmt_node(NodeRef::Stmt(id), stmt)
    }

    /// Define `id`, or write the statement sentinel in its place.
    pub(crate) fn opt_stmt(&mut self, id: Option<StmtId>) -> ExportResult {
        match id {
            Some(id) => self.stmt(id),
            None => {
                trace!("absent statement, writing sentinel");
                let sentinels = self.sentinels;
                self.stmt_node(NodeRef::Sentinel(Family::Stmt), sentinels.stmt())
            }
        }
    }

    fn stmt_node(&mut self, node: NodeRef, stmt: &Stmt) -> ExportResult {
        if stmt.kind.is_abstract() {
            return Err(ExportError::AbstractKind {
                family: Family::Stmt,
                name: stmt.kind.variant_tag(),
            });
        }
        trace!(kind = %stmt.kind, "stmt");
        ensure_sufficient_stack(|| {
            self.out.begin_variant(stmt.kind.variant_tag())?;
            self.out.begin_tuple(stmt.kind.tuple_size())?;
            self.stmt_fields(stmt.kind, node, stmt)?;
            self.end()?;
            self.end()
        })
    }

    fn stmt_fields(&mut self, level: StmtKind, node: NodeRef, stmt: &Stmt) -> ExportResult {
        if let Some(parent) = level.parent() {
            self.stmt_fields(parent, node, stmt)?;
        }
        self.own_stmt_fields(level, node, stmt)
    }

    fn stmt_children(&mut self, stmt: &Stmt) -> ExportResult {
        let kinds = stmt
            .children
            .iter()
            .map(|child| match *child {
                Some(id) => self.stmt_at(id).map(|child| child.kind),
                None => Ok(StmtKind::NullStmt),
            })
            .collect::<ExportResult<SmallVec<[StmtKind; 8]>>>()?;
        let arity = array_arity(kinds);
        trace!(elements = arity.elements, fields = arity.fields, "children");
        self.out.begin_array(arity.elements)?;
        for &child in &stmt.children {
            self.opt_stmt(child)?;
        }
        self.end()
    }

    fn own_stmt_fields(&mut self, level: StmtKind, node: NodeRef, stmt: &Stmt) -> ExportResult {
        let kind = stmt.kind;
        match level {
            StmtKind::Stmt => {
                self.out.begin_object(2)?;
                self.pointer_field("pointer", node)?;
                self.field("source_range")?;
                self.source_range(stmt.range)?;
                self.end()?;
                self.stmt_children(stmt)
            }
            StmtKind::Expr => {
                let expr = stmt.expr.ok_or_else(|| missing(kind, "expression info"))?;
                let has_value_kind = expr.value_kind != ValueKind::RValue;
                let has_object_kind = expr.object_kind != ObjectKind::Ordinary;
                self.out
                    .begin_object(1 + count(&[has_value_kind, has_object_kind]))?;
                self.field("qual_type")?;
                self.qual_type(expr.qual_type)?;
                if has_value_kind {
                    self.simple_variant_field("value_kind", expr.value_kind.name())?;
                }
                if has_object_kind {
                    self.simple_variant_field("object_kind", expr.object_kind.name())?;
                }
                self.end()
            }
            StmtKind::DeclStmt => match &stmt.data {
                StmtData::Decls(decls) => self.decl_list(decls),
                _ => Err(missing(kind, "declarations")),
            },
            StmtKind::AttributedStmt => match &stmt.data {
                StmtData::Attributes(attrs) => self.attributes(attrs),
                _ => Err(missing(kind, "attributes")),
            },
            StmtKind::LabelStmt => match &stmt.data {
                StmtData::Label(name) => self.string(name),
                _ => Err(missing(kind, "label name")),
            },
            StmtKind::GotoStmt | StmtKind::AddrLabelExpr => {
                let StmtData::LabelRef(label) = &stmt.data else {
                    return Err(missing(kind, "label reference"));
                };
                self.out.begin_object(2)?;
                self.string_field("label", &label.label)?;
                self.pointer_field("pointer", NodeRef::Decl(label.target))?;
                self.end()
            }
            StmtKind::CXXCatchStmt => {
                let StmtData::CatchParam(param) = &stmt.data else {
                    return Err(missing(kind, "catch parameter"));
                };
                self.out.begin_object(usize::from(param.is_some()))?;
                if let Some(param) = *param {
                    self.field("variable")?;
                    self.decl(param)?;
                }
                self.end()
            }
            StmtKind::ObjCAtCatchStmt => match &stmt.data {
                StmtData::CatchParam(Some(param)) => {
                    self.out.begin_variant("CatchParam")?;
                    self.decl(*param)?;
                    self.end()
                }
                StmtData::CatchParam(None) => {
                    self.out.emit_simple_variant("CatchAll")?;
                    Ok(())
                }
                _ => Err(missing(kind, "catch parameter")),
            },
            StmtKind::CastExpr => {
                let StmtData::Cast(cast) = &stmt.data else {
                    return Err(missing(kind, "cast info"));
                };
                self.out.begin_object(2)?;
                self.simple_variant_field("cast_kind", cast.kind.name())?;
                self.field("base_path")?;
                self.out.begin_array(cast.base_path.len())?;
                for base in &cast.base_path {
                    self.out.begin_object(1 + usize::from(base.is_virtual))?;
                    self.string_field("name", &base.name)?;
                    self.flag("is_virtual", base.is_virtual)?;
                    self.end()?;
                }
                self.end()?;
                self.end()
            }
            StmtKind::ExplicitCastExpr => match &stmt.data {
                StmtData::Cast(cast) => {
                    let written = cast
                        .written_type
                        .ok_or_else(|| missing(kind, "written type"))?;
                    self.qual_type(written)
                }
                _ => Err(missing(kind, "cast info")),
            },
            StmtKind::CXXNamedCastExpr => match &stmt.data {
                StmtData::Cast(cast) => {
                    let name = cast
                        .cast_name
                        .as_deref()
                        .ok_or_else(|| missing(kind, "cast name"))?;
                    self.string(name)
                }
                _ => Err(missing(kind, "cast info")),
            },
            StmtKind::DeclRefExpr => {
                let StmtData::DeclRef(info) = &stmt.data else {
                    return Err(missing(kind, "referenced declaration"));
                };
                self.out
                    .begin_object(count(&[info.decl.is_some(), info.found.is_some()]))?;
                self.opt_decl_ref_field("decl_ref", info.decl)?;
                self.opt_decl_ref_field("found_decl_ref", info.found)?;
                self.end()
            }
            StmtKind::OverloadExpr => {
                let StmtData::Overload(info) = &stmt.data else {
                    return Err(missing(kind, "overload set"));
                };
                self.out
                    .begin_object(1 + usize::from(!info.decls.is_empty()))?;
                if !info.decls.is_empty() {
                    self.field("decls")?;
                    self.decl_ref_list(&info.decls)?;
                }
                self.field("name")?;
                self.declaration_name(&info.name)?;
                self.end()
            }
            StmtKind::UnresolvedLookupExpr => {
                let StmtData::Overload(info) = &stmt.data else {
                    return Err(missing(kind, "overload set"));
                };
                let lookup = &info.lookup;
                self.out.begin_object(count(&[
                    lookup.requires_adl,
                    lookup.is_overloaded,
                    lookup.naming_class.is_some(),
                ]))?;
                self.flag("requires_ADL", lookup.requires_adl)?;
                self.flag("is_overloaded", lookup.is_overloaded)?;
                self.opt_decl_ref_field("naming_class", lookup.naming_class)?;
                self.end()
            }
            StmtKind::ObjCIvarRefExpr => {
                let StmtData::IvarRef { decl, is_free_ivar } = &stmt.data else {
                    return Err(missing(kind, "ivar reference"));
                };
                self.out.begin_object(2 + usize::from(*is_free_ivar))?;
                self.field("decl_ref")?;
                self.decl_ref(*decl)?;
                self.pointer_field("pointer", NodeRef::Decl(*decl))?;
                self.flag("is_free_ivar", *is_free_ivar)?;
                self.end()
            }
            StmtKind::PredefinedExpr => match &stmt.data {
                StmtData::Predefined(ident) => {
                    self.out.emit_simple_variant(ident.name())?;
                    Ok(())
                }
                _ => Err(missing(kind, "predefined identifier")),
            },
            StmtKind::CharacterLiteral => match &stmt.data {
                StmtData::CharacterLiteral(value) => {
                    self.out.emit_integer(i64::from(*value))?;
                    Ok(())
                }
                _ => Err(missing(kind, "character value")),
            },
            StmtKind::IntegerLiteral => {
                let StmtData::IntegerLiteral(literal) = &stmt.data else {
                    return Err(missing(kind, "integer value"));
                };
                self.out.begin_object(2 + usize::from(literal.is_signed))?;
                self.flag("is_signed", literal.is_signed)?;
                self.field("bitwidth")?;
                self.out.emit_unsigned(u64::from(literal.bitwidth))?;
                self.string_field("value", &literal.value)?;
                self.end()
            }
            StmtKind::FloatingLiteral => match &stmt.data {
                StmtData::FloatingLiteral(value) => self.string(value),
                _ => Err(missing(kind, "floating value")),
            },
            StmtKind::StringLiteral => match &stmt.data {
                StmtData::StringLiteral(value) => self.string(value),
                _ => Err(missing(kind, "string value")),
            },
            StmtKind::UnaryOperator => {
                let StmtData::Unary(opcode) = &stmt.data else {
                    return Err(missing(kind, "unary opcode"));
                };
                self.out
                    .begin_object(1 + usize::from(opcode.is_postfix()))?;
                self.simple_variant_field("kind", opcode.name())?;
                self.flag("is_postfix", opcode.is_postfix())?;
                self.end()
            }
            StmtKind::UnaryExprOrTypeTraitExpr => {
                let StmtData::UnaryExprOrTypeTrait {
                    kind: trait_kind,
                    argument_type,
                } = &stmt.data
                else {
                    return Err(missing(kind, "trait kind"));
                };
                self.out
                    .begin_object(1 + usize::from(argument_type.is_some()))?;
                self.simple_variant_field("kind", trait_kind.name())?;
                if let Some(ty) = *argument_type {
                    self.field("qual_type")?;
                    self.qual_type(ty)?;
                }
                self.end()
            }
            StmtKind::MemberExpr => {
                let StmtData::Member { is_arrow, member } = &stmt.data else {
                    return Err(missing(kind, "member"));
                };
                let member_decl = self.decl_at(*member)?;
                self.out.begin_object(2 + usize::from(*is_arrow))?;
                self.flag("is_arrow", *is_arrow)?;
                self.field("name")?;
                self.named_decl_info(name_or_anonymous(member_decl.name.as_ref()))?;
                self.field("decl_ref")?;
                self.decl_ref(*member)?;
                self.end()
            }
            StmtKind::ExtVectorElementExpr => match &stmt.data {
                StmtData::Accessor(accessor) => self.string(accessor),
                _ => Err(missing(kind, "accessor")),
            },
            StmtKind::BinaryOperator => {
                let StmtData::Binary(info) = &stmt.data else {
                    return Err(missing(kind, "binary opcode"));
                };
                self.out.begin_object(1)?;
                self.simple_variant_field("kind", info.opcode.name())?;
                self.end()
            }
            StmtKind::CompoundAssignOperator => {
                let compound = match &stmt.data {
                    StmtData::Binary(info) => info.compound,
                    _ => None,
                }
                .ok_or_else(|| missing(kind, "compound assignment types"))?;
                self.out.begin_object(2)?;
                self.field("lhs_type")?;
                self.qual_type(compound.lhs_type)?;
                self.field("result_type")?;
                self.qual_type(compound.result_type)?;
                self.end()
            }
            StmtKind::BlockExpr | StmtKind::LambdaExpr => match &stmt.data {
                StmtData::OwnedDecl(decl) => self.opt_decl(*decl),
                _ => Err(missing(kind, "owned declaration")),
            },
            StmtKind::OpaqueValueExpr => {
                let StmtData::OpaqueValue { source } = &stmt.data else {
                    return Err(missing(kind, "source expression"));
                };
                self.out.begin_object(usize::from(source.is_some()))?;
                if let Some(source) = *source {
                    self.pointer_field("source_expr", NodeRef::Stmt(source))?;
                }
                self.end()
            }
            StmtKind::CXXBoolLiteralExpr | StmtKind::ObjCBoolLiteralExpr => match &stmt.data {
                StmtData::BoolLiteral(value) => {
                    self.out.emit_integer(i64::from(*value))?;
                    Ok(())
                }
                _ => Err(missing(kind, "boolean value")),
            },
            StmtKind::CXXConstructExpr => {
                let StmtData::Construct(info) = &stmt.data else {
                    return Err(missing(kind, "constructor info"));
                };
                self.out.begin_object(
                    1 + count(&[info.is_elidable, info.requires_zero_init]),
                )?;
                self.field("qual_type")?;
                self.qual_type(info.constructor_type)?;
                self.flag("is_elidable", info.is_elidable)?;
                self.flag("requires_zero_initialization", info.requires_zero_init)?;
                self.end()
            }
            StmtKind::CXXBindTemporaryExpr => {
                let StmtData::BindTemporary(temporary) = &stmt.data else {
                    return Err(missing(kind, "temporary"));
                };
                self.out.begin_object(1)?;
                self.pointer_field("cxx_temporary", NodeRef::Temporary(*temporary))?;
                self.end()
            }
            StmtKind::MaterializeTemporaryExpr => {
                let StmtData::MaterializeTemporary { extending_decl } = &stmt.data else {
                    return Err(missing(kind, "extending declaration"));
                };
                self.out
                    .begin_object(usize::from(extending_decl.is_some()))?;
                self.opt_decl_ref_field("decl_ref", *extending_decl)?;
                self.end()
            }
            StmtKind::ExprWithCleanups => {
                let StmtData::Cleanups { objects, sub_expr } = &stmt.data else {
                    return Err(missing(kind, "cleanup objects"));
                };
                self.out
                    .begin_object(1 + usize::from(!objects.is_empty()))?;
                if !objects.is_empty() {
                    self.field("decl_refs")?;
                    self.decl_ref_list(objects)?;
                }
                self.pointer_field("sub_expr", NodeRef::Stmt(*sub_expr))?;
                self.end()
            }
            StmtKind::CXXNewExpr => {
                let StmtData::New(info) = &stmt.data else {
                    return Err(missing(kind, "new info"));
                };
                self.out.begin_object(count(&[
                    info.is_array,
                    info.array_size.is_some(),
                    info.initializer.is_some(),
                ]))?;
                self.flag("is_array", info.is_array)?;
                if let Some(size) = info.array_size {
                    self.pointer_field("array_size_expr", NodeRef::Stmt(size))?;
                }
                if let Some(init) = info.initializer {
                    self.pointer_field("initializer_expr", NodeRef::Stmt(init))?;
                }
                self.end()
            }
            StmtKind::CXXDeleteExpr => {
                let StmtData::Delete { is_array } = &stmt.data else {
                    return Err(missing(kind, "delete info"));
                };
                self.out.begin_object(usize::from(*is_array))?;
                self.flag("is_array", *is_array)?;
                self.end()
            }
            StmtKind::ObjCMessageExpr => {
                let StmtData::Message(info) = &stmt.data else {
                    return Err(missing(kind, "message info"));
                };
                let found = info.method.is_some();
                let has_receiver = info.receiver != ReceiverKind::Instance;
                self.out
                    .begin_object(1 + count(&[found, found, has_receiver]))?;
                self.string_field("selector", &info.selector)?;
                self.flag("is_definition_found", found)?;
                if let Some(method) = info.method {
                    self.pointer_field("decl_pointer", NodeRef::Decl(method))?;
                }
                if has_receiver {
                    self.field("receiver_kind")?;
                    match info.receiver {
                        ReceiverKind::Class(ty) => {
                            self.out.begin_variant("Class")?;
                            self.qual_type(ty)?;
                            self.end()?;
                        }
                        ReceiverKind::SuperInstance => {
                            self.out.emit_simple_variant("SuperInstance")?;
                        }
                        ReceiverKind::SuperClass => self.out.emit_simple_variant("SuperClass")?,
                        ReceiverKind::Instance => self.out.emit_simple_variant("Instance")?,
                    }
                }
                self.end()
            }
            StmtKind::ObjCBoxedExpr | StmtKind::ObjCSelectorExpr => match &stmt.data {
                StmtData::Selector(selector) => self.string(selector),
                _ => Err(missing(kind, "selector")),
            },
            StmtKind::ObjCEncodeExpr => match &stmt.data {
                StmtData::Encoded(ty) => self.qual_type(*ty),
                _ => Err(missing(kind, "encoded type")),
            },
            StmtKind::ObjCProtocolExpr => match &stmt.data {
                StmtData::Protocol(protocol) => self.decl_ref(*protocol),
                _ => Err(missing(kind, "protocol")),
            },
            StmtKind::ObjCPropertyRefExpr => {
                let StmtData::PropertyRef(info) = &stmt.data else {
                    return Err(missing(kind, "property reference"));
                };
                self.out.begin_object(
                    1 + count(&[
                        info.is_super_receiver,
                        info.is_messaging_getter,
                        info.is_messaging_setter,
                    ]),
                )?;
                self.field("kind")?;
                match &info.target {
                    PropertyRefTarget::Methods { getter, setter } => {
                        self.out.begin_variant("MethodRef")?;
                        self.accessor_names(getter.as_deref(), setter.as_deref())?;
                        self.end()?;
                    }
                    PropertyRefTarget::Property(property) => {
                        self.out.begin_variant("PropertyRef")?;
                        self.decl_ref(*property)?;
                        self.end()?;
                    }
                }
                self.flag("is_super_receiver", info.is_super_receiver)?;
                self.flag("is_messaging_getter", info.is_messaging_getter)?;
                self.flag("is_messaging_setter", info.is_messaging_setter)?;
                self.end()
            }
            StmtKind::ObjCSubscriptRefExpr => {
                let StmtData::SubscriptRef(info) = &stmt.data else {
                    return Err(missing(kind, "subscript reference"));
                };
                self.out.begin_object(
                    1 + count(&[info.getter.is_some(), info.setter.is_some()]),
                )?;
                self.simple_variant_field("kind", info.kind.name())?;
                if let Some(getter) = &info.getter {
                    self.string_field("getter", getter)?;
                }
                if let Some(setter) = &info.setter {
                    self.string_field("setter", setter)?;
                }
                self.end()
            }
            StmtKind::NullStmt
            | StmtKind::CompoundStmt
            | StmtKind::IfStmt
            | StmtKind::SwitchStmt
            | StmtKind::WhileStmt
            | StmtKind::DoStmt
            | StmtKind::ForStmt
            | StmtKind::IndirectGotoStmt
            | StmtKind::ContinueStmt
            | StmtKind::BreakStmt
            | StmtKind::ReturnStmt
            | StmtKind::SwitchCase
            | StmtKind::CaseStmt
            | StmtKind::DefaultStmt
            | StmtKind::CapturedStmt
            | StmtKind::AsmStmt
            | StmtKind::GCCAsmStmt
            | StmtKind::MSAsmStmt
            | StmtKind::ObjCAtTryStmt
            | StmtKind::ObjCAtFinallyStmt
            | StmtKind::ObjCAtThrowStmt
            | StmtKind::ObjCAtSynchronizedStmt
            | StmtKind::ObjCForCollectionStmt
            | StmtKind::ObjCAutoreleasePoolStmt
            | StmtKind::CXXTryStmt
            | StmtKind::CXXForRangeStmt
            | StmtKind::SEHTryStmt
            | StmtKind::SEHExceptStmt
            | StmtKind::SEHFinallyStmt
            | StmtKind::SEHLeaveStmt
            | StmtKind::MSDependentExistsStmt
            | StmtKind::ImaginaryLiteral
            | StmtKind::ParenExpr
            | StmtKind::OffsetOfExpr
            | StmtKind::ArraySubscriptExpr
            | StmtKind::CallExpr
            | StmtKind::CXXMemberCallExpr
            | StmtKind::CXXOperatorCallExpr
            | StmtKind::UserDefinedLiteral
            | StmtKind::CUDAKernelCallExpr
            | StmtKind::ImplicitCastExpr
            | StmtKind::CStyleCastExpr
            | StmtKind::CXXFunctionalCastExpr
            | StmtKind::CXXStaticCastExpr
            | StmtKind::CXXDynamicCastExpr
            | StmtKind::CXXReinterpretCastExpr
            | StmtKind::CXXConstCastExpr
            | StmtKind::ObjCBridgedCastExpr
            | StmtKind::AbstractConditionalOperator
            | StmtKind::ConditionalOperator
            | StmtKind::BinaryConditionalOperator
            | StmtKind::CompoundLiteralExpr
            | StmtKind::InitListExpr
            | StmtKind::DesignatedInitExpr
            | StmtKind::ImplicitValueInitExpr
            | StmtKind::ParenListExpr
            | StmtKind::VAArgExpr
            | StmtKind::GenericSelectionExpr
            | StmtKind::PseudoObjectExpr
            | StmtKind::AtomicExpr
            | StmtKind::StmtExpr
            | StmtKind::ChooseExpr
            | StmtKind::GNUNullExpr
            | StmtKind::CXXNullPtrLiteralExpr
            | StmtKind::CXXThisExpr
            | StmtKind::CXXThrowExpr
            | StmtKind::CXXDefaultArgExpr
            | StmtKind::CXXDefaultInitExpr
            | StmtKind::CXXScalarValueInitExpr
            | StmtKind::CXXStdInitializerListExpr
            | StmtKind::CXXPseudoDestructorExpr
            | StmtKind::TypeTraitExpr
            | StmtKind::ArrayTypeTraitExpr
            | StmtKind::ExpressionTraitExpr
            | StmtKind::DependentScopeDeclRefExpr
            | StmtKind::CXXTemporaryObjectExpr
            | StmtKind::CXXUnresolvedConstructExpr
            | StmtKind::CXXDependentScopeMemberExpr
            | StmtKind::UnresolvedMemberExpr
            | StmtKind::CXXNoexceptExpr
            | StmtKind::PackExpansionExpr
            | StmtKind::SizeOfPackExpr
            | StmtKind::SubstNonTypeTemplateParmExpr
            | StmtKind::SubstNonTypeTemplateParmPackExpr
            | StmtKind::FunctionParmPackExpr
            | StmtKind::CXXFoldExpr
            | StmtKind::CXXUuidofExpr
            | StmtKind::CXXTypeidExpr
            | StmtKind::ObjCStringLiteral
            | StmtKind::ObjCArrayLiteral
            | StmtKind::ObjCDictionaryLiteral
            | StmtKind::ObjCIsaExpr
            | StmtKind::ObjCIndirectCopyRestoreExpr
            | StmtKind::ShuffleVectorExpr
            | StmtKind::ConvertVectorExpr
            | StmtKind::TypoExpr
            | StmtKind::AsTypeExpr => Ok(()),
        }
    }

    /// `{?getter, ?setter}` selector names of an implicit property.
    fn accessor_names(&mut self, getter: Option<&str>, setter: Option<&str>) -> ExportResult {
        self.out
            .begin_object(count(&[getter.is_some(), setter.is_some()]))?;
        if let Some(getter) = getter {
            self.string_field("getter", getter)?;
        }
        if let Some(setter) = setter {
            self.string_field("setter", setter)?;
        }
        self.end()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
