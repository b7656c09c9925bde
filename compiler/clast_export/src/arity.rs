//! Tuple sizes of node kinds.
//!
//! A node is written as a tuple holding the fields of every level of its
//! kind's parent chain, most general first. The size of that tuple is
//! known from the kind alone:
//!
//! ```text
//! tuple_size(kind) = tuple_size(parent(kind)) + own_field_count(kind)
//! ```
//!
//! Own field counts are declared once per kind in one exhaustive `match`
//! per family. Adding a kind without giving it a count does not compile.

use clast_ir::{CommentKind, DeclKind, Family, NodeKind, StmtKind, TypeKind};

use crate::ExportError;

pub trait Arity: NodeKind {
    /// Fields this level adds to its parent's tuple.
    fn own_field_count(self) -> usize;

    /// Size of the tuple written for a node of this kind.
    fn tuple_size(self) -> usize {
        let mut size = 0;
        let mut current = Some(self);
        while let Some(kind) = current {
            size += kind.own_field_count();
            current = kind.parent();
        }
        size
    }
}

/// Tuple size of a kind received as data, looked up by short name or by
/// variant tag.
pub fn tuple_size_of(family: Family, name: &str) -> Result<usize, ExportError> {
    fn lookup<K: Arity>(name: &str) -> Option<usize> {
        K::from_name(name)
            .or_else(|| K::from_variant_tag(name))
            .map(Arity::tuple_size)
    }

    let size = match family {
        Family::Decl => lookup::<DeclKind>(name),
        Family::Stmt => lookup::<StmtKind>(name),
        Family::Type => lookup::<TypeKind>(name),
        Family::Comment => lookup::<CommentKind>(name),
    };
    size.ok_or_else(|| ExportError::UnknownKind {
        family,
        name: name.to_owned(),
    })
}

/// Shape of a list of heterogeneous nodes.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ArrayArity {
    /// Declared length of the array.
    pub elements: usize,
    /// Tuple fields written across all elements.
    pub fields: usize,
}

pub fn array_arity<K: Arity>(kinds: impl IntoIterator<Item = K>) -> ArrayArity {
    kinds
        .into_iter()
        .fold(ArrayArity::default(), |acc, kind| ArrayArity {
            elements: acc.elements + 1,
            fields: acc.fields + kind.tuple_size(),
        })
}

impl Arity for DeclKind {
    fn own_field_count(self) -> usize {
        match self {
            // decl_info
            DeclKind::Decl => 1,
            // decl-context children and storage flags, then the level's info
            DeclKind::Block | DeclKind::Namespace | DeclKind::TranslationUnit => 3,
            DeclKind::Captured
            | DeclKind::LinkageSpec
            | DeclKind::ObjCContainer
            | DeclKind::Tag => 2,
            // opt_type, type_ptr
            DeclKind::Type => 2,
            // named_decl_info / qual_type
            DeclKind::Named | DeclKind::Value => 1,
            DeclKind::Typedef
            | DeclKind::Enum
            | DeclKind::Record
            | DeclKind::CXXRecord
            | DeclKind::EnumConstant
            | DeclKind::IndirectField
            | DeclKind::Function
            | DeclKind::Field
            | DeclKind::Var
            | DeclKind::FileScopeAsm
            | DeclKind::Import
            | DeclKind::UsingDirective
            | DeclKind::NamespaceAlias
            | DeclKind::ObjCIvar
            | DeclKind::ObjCMethod
            | DeclKind::ObjCCategory
            | DeclKind::ObjCCategoryImpl
            | DeclKind::ObjCProtocol
            | DeclKind::ObjCInterface
            | DeclKind::ObjCImplementation
            | DeclKind::ObjCCompatibleAlias
            | DeclKind::ObjCProperty
            | DeclKind::ObjCPropertyImpl => 1,
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
            | DeclKind::StaticAssert => 0,
        }
    }
}

impl Arity for StmtKind {
    fn own_field_count(self) -> usize {
        match self {
            // stmt_info, children
            StmtKind::Stmt => 2,
            // expr_info
            StmtKind::Expr => 1,
            StmtKind::DeclStmt
            | StmtKind::AttributedStmt
            | StmtKind::LabelStmt
            | StmtKind::GotoStmt
            | StmtKind::CXXCatchStmt
            | StmtKind::ObjCAtCatchStmt
            | StmtKind::CastExpr
            | StmtKind::ExplicitCastExpr
            | StmtKind::CXXNamedCastExpr
            | StmtKind::DeclRefExpr
            | StmtKind::OverloadExpr
            | StmtKind::UnresolvedLookupExpr
            | StmtKind::ObjCIvarRefExpr
            | StmtKind::PredefinedExpr
            | StmtKind::CharacterLiteral
            | StmtKind::IntegerLiteral
            | StmtKind::FloatingLiteral
            | StmtKind::StringLiteral
            | StmtKind::UnaryOperator
            | StmtKind::UnaryExprOrTypeTraitExpr
            | StmtKind::MemberExpr
            | StmtKind::ExtVectorElementExpr
            | StmtKind::BinaryOperator
            | StmtKind::CompoundAssignOperator
            | StmtKind::BlockExpr
            | StmtKind::LambdaExpr
            | StmtKind::OpaqueValueExpr
            | StmtKind::AddrLabelExpr
            | StmtKind::CXXBoolLiteralExpr
            | StmtKind::CXXConstructExpr
            | StmtKind::CXXBindTemporaryExpr
            | StmtKind::MaterializeTemporaryExpr
            | StmtKind::ExprWithCleanups
            | StmtKind::CXXNewExpr
            | StmtKind::CXXDeleteExpr
            | StmtKind::ObjCMessageExpr
            | StmtKind::ObjCBoxedExpr
            | StmtKind::ObjCEncodeExpr
            | StmtKind::ObjCSelectorExpr
            | StmtKind::ObjCProtocolExpr
            | StmtKind::ObjCPropertyRefExpr
            | StmtKind::ObjCSubscriptRefExpr
            | StmtKind::ObjCBoolLiteralExpr => 1,
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
            | StmtKind::AsTypeExpr => 0,
        }
    }
}

impl Arity for TypeKind {
    fn own_field_count(self) -> usize {
        match self {
            // type_info
            TypeKind::Type => 1,
            // child type_ptr
            TypeKind::Adjusted
            | TypeKind::Array
            | TypeKind::Atomic
            | TypeKind::BlockPointer
            | TypeKind::Decltype
            | TypeKind::MemberPointer
            | TypeKind::ObjCObjectPointer
            | TypeKind::Paren
            | TypeKind::Pointer
            | TypeKind::Reference => 1,
            TypeKind::ConstantArray
            | TypeKind::Builtin
            | TypeKind::Function
            | TypeKind::FunctionProto
            | TypeKind::ObjCObject
            | TypeKind::ObjCInterface
            | TypeKind::Tag
            | TypeKind::Typedef => 1,
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
            | TypeKind::PackExpansion => 0,
        }
    }
}

impl Arity for CommentKind {
    fn own_field_count(self) -> usize {
        match self {
            // comment_info, children
            CommentKind::Comment => 2,
            CommentKind::TextComment
            | CommentKind::InlineCommandComment
            | CommentKind::HTMLTagComment
            | CommentKind::HTMLStartTagComment
            | CommentKind::BlockCommandComment
            | CommentKind::ParamCommandComment
            | CommentKind::TParamCommandComment
            | CommentKind::VerbatimBlockComment
            | CommentKind::VerbatimLineComment
            | CommentKind::VerbatimBlockLineComment => 1,
            CommentKind::NoComment
            | CommentKind::InlineContentComment
            | CommentKind::HTMLEndTagComment
            | CommentKind::BlockContentComment
            | CommentKind::ParagraphComment
            | CommentKind::FullComment => 0,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
