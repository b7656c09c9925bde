//! Statement and expression nodes.

use crate::ids::{AttrId, DeclId, StmtId, TemporaryId};
use crate::kind::StmtKind;
use crate::location::SourceRange;
use crate::qual_type::QualType;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ValueKind {
    #[default]
    RValue,
    LValue,
    XValue,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::RValue => "RValue",
            ValueKind::LValue => "LValue",
            ValueKind::XValue => "XValue",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ObjectKind {
    #[default]
    Ordinary,
    BitField,
    ObjCProperty,
    ObjCSubscript,
    VectorComponent,
}

impl ObjectKind {
    pub const fn name(self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "Ordinary",
            ObjectKind::BitField => "BitField",
            ObjectKind::ObjCProperty => "ObjCProperty",
            ObjectKind::ObjCSubscript => "ObjCSubscript",
            ObjectKind::VectorComponent => "VectorComponent",
        }
    }
}

/// Expression level facet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprInfo {
    pub qual_type: QualType,
    pub value_kind: ValueKind,
    pub object_kind: ObjectKind,
}

impl ExprInfo {
    pub fn new(qual_type: QualType) -> Self {
        ExprInfo {
            qual_type,
            ..ExprInfo::default()
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub range: SourceRange,
    /// Ordered children; `None` marks an absent required slot
    /// (e.g. a `for` without an init statement).
    pub children: Vec<Option<StmtId>>,
    pub expr: Option<ExprInfo>,
    pub data: StmtData,
}

impl Stmt {
    pub fn new(kind: StmtKind, range: SourceRange) -> Self {
        Stmt {
            kind,
            range,
            children: Vec::new(),
            expr: None,
            data: StmtData::None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = StmtId>) -> Self {
        self.children = children.into_iter().map(Some).collect();
        self
    }

    /// Children where some required slots may be absent.
    #[must_use]
    pub fn with_slots(mut self, children: Vec<Option<StmtId>>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_expr(mut self, expr: ExprInfo) -> Self {
        self.expr = Some(expr);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: StmtData) -> Self {
        self.data = data;
        self
    }
}

/// Reference to a label declaration from `goto` or `&&label`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LabelRef {
    pub label: String,
    pub target: DeclId,
}

/// Leaf payload of a statement, keyed by the level that emits it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum StmtData {
    #[default]
    None,
    /// `DeclStmt`: the declarations it introduces.
    Decls(Vec<DeclId>),
    /// `AttributedStmt`.
    Attributes(Vec<AttrId>),
    /// `LabelStmt`: the label name.
    Label(String),
    /// `GotoStmt`, `AddrLabelExpr`.
    LabelRef(LabelRef),
    /// `CXXCatchStmt`, `ObjCAtCatchStmt`: `None` catches everything.
    CatchParam(Option<DeclId>),
    Cast(CastInfo),
    DeclRef(DeclRefInfo),
    Overload(OverloadInfo),
    IvarRef { decl: DeclId, is_free_ivar: bool },
    Predefined(PredefinedIdent),
    CharacterLiteral(u32),
    IntegerLiteral(IntegerLiteralInfo),
    /// `FloatingLiteral` value as written.
    FloatingLiteral(String),
    StringLiteral(String),
    Unary(UnaryOpcode),
    UnaryExprOrTypeTrait {
        kind: TraitKind,
        argument_type: Option<QualType>,
    },
    Member { is_arrow: bool, member: DeclId },
    /// `ExtVectorElementExpr` accessor, e.g. `xyz`.
    Accessor(String),
    Binary(BinaryInfo),
    /// `BlockExpr` block or `LambdaExpr` closure class; `None` is an absent slot.
    OwnedDecl(Option<DeclId>),
    OpaqueValue { source: Option<StmtId> },
    /// `CXXBoolLiteralExpr`, `ObjCBoolLiteralExpr`.
    BoolLiteral(bool),
    Construct(ConstructInfo),
    BindTemporary(TemporaryId),
    MaterializeTemporary { extending_decl: Option<DeclId> },
    Cleanups { objects: Vec<DeclId>, sub_expr: StmtId },
    New(NewInfo),
    Delete { is_array: bool },
    Message(MessageInfo),
    /// `ObjCBoxedExpr`, `ObjCSelectorExpr`.
    Selector(String),
    /// `ObjCEncodeExpr`.
    Encoded(QualType),
    /// `ObjCProtocolExpr`.
    Protocol(DeclId),
    PropertyRef(PropertyRefInfo),
    SubscriptRef(SubscriptRefInfo),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[allow(clippy::upper_case_acronyms, reason = "cast names follow front-end spelling")]
pub enum CastKind {
    Dependent,
    BitCast,
    LValueBitCast,
    LValueToRValue,
    NoOp,
    BaseToDerived,
    DerivedToBase,
    UncheckedDerivedToBase,
    Dynamic,
    ToUnion,
    ArrayToPointerDecay,
    FunctionToPointerDecay,
    NullToPointer,
    NullToMemberPointer,
    BaseToDerivedMemberPointer,
    DerivedToBaseMemberPointer,
    MemberPointerToBoolean,
    ReinterpretMemberPointer,
    UserDefinedConversion,
    ConstructorConversion,
    IntegralToPointer,
    PointerToIntegral,
    PointerToBoolean,
    ToVoid,
    VectorSplat,
    IntegralCast,
    IntegralToBoolean,
    IntegralToFloating,
    FloatingToIntegral,
    FloatingToBoolean,
    FloatingCast,
    CPointerToObjCPointerCast,
    BlockPointerToObjCPointerCast,
    AnyPointerToBlockPointerCast,
    ObjCObjectLValueCast,
    FloatingRealToComplex,
    FloatingComplexToReal,
    FloatingComplexToBoolean,
    FloatingComplexCast,
    FloatingComplexToIntegralComplex,
    IntegralRealToComplex,
    IntegralComplexToReal,
    IntegralComplexToBoolean,
    IntegralComplexCast,
    IntegralComplexToFloatingComplex,
    ARCProduceObject,
    ARCConsumeObject,
    ARCReclaimReturnedObject,
    ARCExtendBlockObject,
    AtomicToNonAtomic,
    NonAtomicToAtomic,
    CopyAndAutoreleaseBlockObject,
    BuiltinFnToFnPtr,
    ZeroToOCLEvent,
}

impl CastKind {
    pub fn name(self) -> &'static str {
        macro_rules! names {
            ($value:expr; $($variant:ident),* $(,)?) => {
                match $value {
                    $( CastKind::$variant => stringify!($variant), )*
                }
            };
        }
        names!(
            self;
            Dependent,
            BitCast,
            LValueBitCast,
            LValueToRValue,
            NoOp,
            BaseToDerived,
            DerivedToBase,
            UncheckedDerivedToBase,
            Dynamic,
            ToUnion,
            ArrayToPointerDecay,
            FunctionToPointerDecay,
            NullToPointer,
            NullToMemberPointer,
            BaseToDerivedMemberPointer,
            DerivedToBaseMemberPointer,
            MemberPointerToBoolean,
            ReinterpretMemberPointer,
            UserDefinedConversion,
            ConstructorConversion,
            IntegralToPointer,
            PointerToIntegral,
            PointerToBoolean,
            ToVoid,
            VectorSplat,
            IntegralCast,
            IntegralToBoolean,
            IntegralToFloating,
            FloatingToIntegral,
            FloatingToBoolean,
            FloatingCast,
            CPointerToObjCPointerCast,
            BlockPointerToObjCPointerCast,
            AnyPointerToBlockPointerCast,
            ObjCObjectLValueCast,
            FloatingRealToComplex,
            FloatingComplexToReal,
            FloatingComplexToBoolean,
            FloatingComplexCast,
            FloatingComplexToIntegralComplex,
            IntegralRealToComplex,
            IntegralComplexToReal,
            IntegralComplexToBoolean,
            IntegralComplexCast,
            IntegralComplexToFloatingComplex,
            ARCProduceObject,
            ARCConsumeObject,
            ARCReclaimReturnedObject,
            ARCExtendBlockObject,
            AtomicToNonAtomic,
            NonAtomicToAtomic,
            CopyAndAutoreleaseBlockObject,
            BuiltinFnToFnPtr,
            ZeroToOCLEvent,
        )
    }
}

/// Class traversed by a derived-to-base conversion.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CastBase {
    pub name: String,
    pub is_virtual: bool,
}

/// Cast payload. `written_type` is read from the explicit-cast level down,
/// `cast_name` only by C++ named casts.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CastInfo {
    pub kind: CastKind,
    pub base_path: Vec<CastBase>,
    pub written_type: Option<QualType>,
    pub cast_name: Option<String>,
}

impl CastInfo {
    pub fn new(kind: CastKind) -> Self {
        CastInfo {
            kind,
            base_path: Vec::new(),
            written_type: None,
            cast_name: None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclRefInfo {
    pub decl: Option<DeclId>,
    /// Declaration found by lookup when it differs from `decl`.
    pub found: Option<DeclId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[allow(clippy::upper_case_acronyms, reason = "name kinds follow front-end spelling")]
pub enum DeclarationNameKind {
    Identifier,
    ObjCZeroArgSelector,
    ObjCOneArgSelector,
    ObjCMultiArgSelector,
    CXXConstructorName,
    CXXDestructorName,
    CXXConversionFunctionName,
    CXXOperatorName,
    CXXLiteralOperatorName,
    CXXUsingDirective,
}

impl DeclarationNameKind {
    pub const fn name(self) -> &'static str {
        match self {
            DeclarationNameKind::Identifier => "Identifier",
            DeclarationNameKind::ObjCZeroArgSelector => "ObjCZeroArgSelector",
            DeclarationNameKind::ObjCOneArgSelector => "ObjCOneArgSelector",
            DeclarationNameKind::ObjCMultiArgSelector => "ObjCMultiArgSelector",
            DeclarationNameKind::CXXConstructorName => "CXXConstructorName",
            DeclarationNameKind::CXXDestructorName => "CXXDestructorName",
            DeclarationNameKind::CXXConversionFunctionName => "CXXConversionFunctionName",
            DeclarationNameKind::CXXOperatorName => "CXXOperatorName",
            DeclarationNameKind::CXXLiteralOperatorName => "CXXLiteralOperatorName",
            DeclarationNameKind::CXXUsingDirective => "CXXUsingDirective",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclarationName {
    pub kind: DeclarationNameKind,
    pub name: String,
}

/// Overload set payload; `lookup` is only read by `UnresolvedLookupExpr`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OverloadInfo {
    pub decls: Vec<DeclId>,
    pub name: DeclarationName,
    pub lookup: UnresolvedLookupInfo,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct UnresolvedLookupInfo {
    pub requires_adl: bool,
    pub is_overloaded: bool,
    pub naming_class: Option<DeclId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredefinedIdent {
    Func,
    Function,
    LFunction,
    FuncDName,
    FuncSig,
    PrettyFunction,
    PrettyFunctionNoVirtual,
}

impl PredefinedIdent {
    pub const fn name(self) -> &'static str {
        match self {
            PredefinedIdent::Func => "Func",
            PredefinedIdent::Function => "Function",
            PredefinedIdent::LFunction => "LFunction",
            PredefinedIdent::FuncDName => "FuncDName",
            PredefinedIdent::FuncSig => "FuncSig",
            PredefinedIdent::PrettyFunction => "PrettyFunction",
            PredefinedIdent::PrettyFunctionNoVirtual => "PrettyFunctionNoVirtual",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntegerLiteralInfo {
    pub is_signed: bool,
    pub bitwidth: u32,
    /// Decimal rendering of the value.
    pub value: String,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOpcode {
    PostInc,
    PostDec,
    PreInc,
    PreDec,
    AddrOf,
    Deref,
    Plus,
    Minus,
    Not,
    LNot,
    Real,
    Imag,
    Extension,
}

impl UnaryOpcode {
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOpcode::PostInc => "PostInc",
            UnaryOpcode::PostDec => "PostDec",
            UnaryOpcode::PreInc => "PreInc",
            UnaryOpcode::PreDec => "PreDec",
            UnaryOpcode::AddrOf => "AddrOf",
            UnaryOpcode::Deref => "Deref",
            UnaryOpcode::Plus => "Plus",
            UnaryOpcode::Minus => "Minus",
            UnaryOpcode::Not => "Not",
            UnaryOpcode::LNot => "LNot",
            UnaryOpcode::Real => "Real",
            UnaryOpcode::Imag => "Imag",
            UnaryOpcode::Extension => "Extension",
        }
    }

    pub const fn is_postfix(self) -> bool {
        matches!(self, UnaryOpcode::PostInc | UnaryOpcode::PostDec)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TraitKind {
    SizeOf,
    AlignOf,
    VecStep,
}

impl TraitKind {
    pub const fn name(self) -> &'static str {
        match self {
            TraitKind::SizeOf => "SizeOf",
            TraitKind::AlignOf => "AlignOf",
            TraitKind::VecStep => "VecStep",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[allow(clippy::upper_case_acronyms, reason = "opcode names follow front-end spelling")]
pub enum BinaryOpcode {
    PtrMemD,
    PtrMemI,
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    LT,
    GT,
    LE,
    GE,
    EQ,
    NE,
    And,
    Xor,
    Or,
    LAnd,
    LOr,
    Assign,
    MulAssign,
    DivAssign,
    RemAssign,
    AddAssign,
    SubAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    XorAssign,
    OrAssign,
    Comma,
}

impl BinaryOpcode {
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOpcode::PtrMemD => "PtrMemD",
            BinaryOpcode::PtrMemI => "PtrMemI",
            BinaryOpcode::Mul => "Mul",
            BinaryOpcode::Div => "Div",
            BinaryOpcode::Rem => "Rem",
            BinaryOpcode::Add => "Add",
            BinaryOpcode::Sub => "Sub",
            BinaryOpcode::Shl => "Shl",
            BinaryOpcode::Shr => "Shr",
            BinaryOpcode::LT => "LT",
            BinaryOpcode::GT => "GT",
            BinaryOpcode::LE => "LE",
            BinaryOpcode::GE => "GE",
            BinaryOpcode::EQ => "EQ",
            BinaryOpcode::NE => "NE",
            BinaryOpcode::And => "And",
            BinaryOpcode::Xor => "Xor",
            BinaryOpcode::Or => "Or",
            BinaryOpcode::LAnd => "LAnd",
            BinaryOpcode::LOr => "LOr",
            BinaryOpcode::Assign => "Assign",
            BinaryOpcode::MulAssign => "MulAssign",
            BinaryOpcode::DivAssign => "DivAssign",
            BinaryOpcode::RemAssign => "RemAssign",
            BinaryOpcode::AddAssign => "AddAssign",
            BinaryOpcode::SubAssign => "SubAssign",
            BinaryOpcode::ShlAssign => "ShlAssign",
            BinaryOpcode::ShrAssign => "ShrAssign",
            BinaryOpcode::AndAssign => "AndAssign",
            BinaryOpcode::XorAssign => "XorAssign",
            BinaryOpcode::OrAssign => "OrAssign",
            BinaryOpcode::Comma => "Comma",
        }
    }
}

/// Types recorded on a compound assignment (`a += b`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompoundAssignInfo {
    pub lhs_type: QualType,
    pub result_type: QualType,
}

/// Binary operator payload; `compound` is only read by `CompoundAssignOperator`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BinaryInfo {
    pub opcode: BinaryOpcode,
    pub compound: Option<CompoundAssignInfo>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstructInfo {
    pub constructor_type: QualType,
    pub is_elidable: bool,
    pub requires_zero_init: bool,
}

/// `new` payload. Operands are children of the node and are referenced here
/// by identity only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NewInfo {
    pub is_array: bool,
    pub array_size: Option<StmtId>,
    pub initializer: Option<StmtId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ReceiverKind {
    #[default]
    Instance,
    Class(QualType),
    SuperInstance,
    SuperClass,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MessageInfo {
    pub selector: String,
    pub method: Option<DeclId>,
    pub receiver: ReceiverKind,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyRefTarget {
    /// Implicit property reached through accessor selectors.
    Methods {
        getter: Option<String>,
        setter: Option<String>,
    },
    Property(DeclId),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyRefInfo {
    pub target: PropertyRefTarget,
    pub is_super_receiver: bool,
    pub is_messaging_getter: bool,
    pub is_messaging_setter: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SubscriptKind {
    Array,
    Dictionary,
}

impl SubscriptKind {
    pub const fn name(self) -> &'static str {
        match self {
            SubscriptKind::Array => "ArraySubscript",
            SubscriptKind::Dictionary => "DictionarySubscript",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SubscriptRefInfo {
    pub kind: SubscriptKind,
    pub getter: Option<String>,
    pub setter: Option<String>,
}
