//! Declaration nodes.
//!
//! A [`Decl`] carries the fields every declaration has, one optional facet
//! per abstract hierarchy level (name, child context, value type, declared
//! type) and a leaf payload in [`DeclData`]. The exporter reads facets level
//! by level while walking a kind's parent chain.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::ids::{AttrId, CommentId, DeclId, StmtId, TypeId};
use crate::kind::DeclKind;
use crate::location::{SourceLocation, SourceRange};
use crate::qual_type::QualType;

bitflags! {
    /// Boolean properties common to all declarations.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DeclFlags: u8 {
        /// Not visible to name lookup (only meaningful for named decls).
        const HIDDEN = 1 << 0;
        /// Synthesized by the front end.
        const IMPLICIT = 1 << 1;
        const USED = 1 << 2;
        const REFERENCED = 1 << 3;
        const INVALID = 1 << 4;
        const MODULE_PRIVATE = 1 << 5;
    }
}

/// Link to another declaration of the same entity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Redeclaration {
    /// This is a redeclaration; the chain starts at the given decl.
    First(DeclId),
    /// The immediately preceding declaration.
    Previous(DeclId),
}

/// Name of a named declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclName {
    pub name: String,
    /// Fully qualified name, components separated by `::`.
    pub qualified_name: String,
}

impl DeclName {
    pub fn new(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        DeclName {
            name: name.into(),
            qualified_name: qualified_name.into(),
        }
    }

    /// Name whose qualified form is the name itself.
    pub fn simple(name: impl Into<String>) -> Self {
        let name = name.into();
        DeclName {
            qualified_name: name.clone(),
            name,
        }
    }

    /// Qualified name components, innermost first.
    pub fn qualified_components(&self) -> SmallVec<[&str; 4]> {
        let mut parts: SmallVec<[&str; 4]> = self.qualified_name.split("::").collect();
        parts.reverse();
        parts
    }
}

/// Child declarations of a declaration context.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DeclContextInfo {
    pub decls: Vec<DeclId>,
    pub has_external_lexical_storage: bool,
    pub has_external_visible_storage: bool,
}

impl DeclContextInfo {
    pub fn new(decls: Vec<DeclId>) -> Self {
        DeclContextInfo {
            decls,
            ..DeclContextInfo::default()
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decl {
    pub kind: DeclKind,
    pub range: SourceRange,
    pub semantic_parent: Option<DeclId>,
    pub lexical_parent: Option<DeclId>,
    pub redeclaration: Option<Redeclaration>,
    pub owning_module: Option<String>,
    pub flags: DeclFlags,
    pub attrs: Vec<AttrId>,
    pub full_comment: Option<CommentId>,
    /// Named level.
    pub name: Option<DeclName>,
    /// Declaration-context mixin.
    pub context: Option<DeclContextInfo>,
    /// Value level.
    pub value_type: Option<QualType>,
    /// Type-declaration level; `None` inside is a null type.
    pub type_for_decl: Option<TypeId>,
    pub data: DeclData,
}

impl Decl {
    pub fn new(kind: DeclKind, range: SourceRange) -> Self {
        Decl {
            kind,
            range,
            semantic_parent: None,
            lexical_parent: None,
            redeclaration: None,
            owning_module: None,
            flags: DeclFlags::empty(),
            attrs: Vec::new(),
            full_comment: None,
            name: None,
            context: None,
            value_type: None,
            type_for_decl: None,
            data: DeclData::None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: DeclName) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: DeclContextInfo) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_value_type(mut self, ty: QualType) -> Self {
        self.value_type = Some(ty);
        self
    }

    #[must_use]
    pub fn with_type_for_decl(mut self, ty: Option<TypeId>) -> Self {
        self.type_for_decl = ty;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: DeclData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: DeclFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Set both the semantic and the lexical parent.
    #[must_use]
    pub fn with_parent(mut self, parent: DeclId) -> Self {
        self.semantic_parent = Some(parent);
        self.lexical_parent = Some(parent);
        self
    }

    /// Simple name, or the empty string for unnamed declarations.
    pub fn name_str(&self) -> &str {
        self.name.as_ref().map_or("", |name| name.name.as_str())
    }
}

/// Leaf payload of a declaration, keyed by the level that emits it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DeclData {
    #[default]
    None,
    Namespace(NamespaceInfo),
    Enum(EnumInfo),
    Record(RecordInfo),
    EnumConstant { init: Option<StmtId> },
    /// Chain of fields reaching an anonymous member.
    IndirectField(Vec<DeclId>),
    Function(FunctionInfo),
    Field(FieldInfo),
    Var(VarInfo),
    /// Assembly text of a file-scope `asm`.
    FileScopeAsm(String),
    /// Imported module name.
    Import(String),
    UsingDirective(UsingDirectiveInfo),
    NamespaceAlias(NamespaceAliasInfo),
    ObjCMethod(ObjCMethodInfo),
    ObjCCategory(ObjCCategoryInfo),
    ObjCCategoryImpl(ObjCCategoryImplInfo),
    ObjCProtocol { protocols: Vec<DeclId> },
    ObjCInterface(ObjCInterfaceInfo),
    ObjCImplementation(ObjCImplementationInfo),
    ObjCCompatibleAlias { class_interface: Option<DeclId> },
    ObjCProperty(ObjCPropertyInfo),
    ObjCPropertyImpl(ObjCPropertyImplInfo),
    Block(BlockInfo),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NamespaceInfo {
    pub is_inline: bool,
    pub original: Option<DeclId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EnumScope {
    Class,
    Struct,
}

impl EnumScope {
    pub const fn name(self) -> &'static str {
        match self {
            EnumScope::Class => "Class",
            EnumScope::Struct => "Struct",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct EnumInfo {
    pub scope: Option<EnumScope>,
}

/// Record payload; the C++ fields are only read for `CXXRecord` and below.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RecordInfo {
    pub is_complete_definition: bool,
    pub bases: Vec<Option<TypeId>>,
    pub vbases: Vec<Option<TypeId>>,
    pub is_c_like: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StorageClass {
    Extern,
    Static,
    PrivateExtern,
    Auto,
    Register,
}

impl StorageClass {
    /// Source spelling of the specifier.
    pub const fn spelling(self) -> &'static str {
        match self {
            StorageClass::Extern => "extern",
            StorageClass::Static => "static",
            StorageClass::PrivateExtern => "__private_extern__",
            StorageClass::Auto => "auto",
            StorageClass::Register => "register",
        }
    }
}

/// Subject of a constructor (or ivar) initializer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum InitializerSubject {
    Member(DeclId),
    Delegating(QualType),
    BaseClass { ty: QualType, is_virtual: bool },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CtorInitializer {
    pub subject: InitializerSubject,
    pub init: Option<StmtId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FunctionInfo {
    pub storage_class: Option<StorageClass>,
    pub is_inline: bool,
    pub is_virtual: bool,
    pub is_pure: bool,
    pub is_deleted_as_written: bool,
    pub decls_in_prototype_scope: Vec<DeclId>,
    pub params: Vec<DeclId>,
    pub ctor_initializers: Vec<CtorInitializer>,
    pub body: Option<StmtId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum AccessControl {
    #[default]
    None,
    Private,
    Protected,
    Public,
    Package,
}

impl AccessControl {
    pub const fn name(self) -> &'static str {
        match self {
            AccessControl::None => "None",
            AccessControl::Private => "Private",
            AccessControl::Protected => "Protected",
            AccessControl::Public => "Public",
            AccessControl::Package => "Package",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct IvarInfo {
    pub is_synthesize: bool,
    pub access_control: AccessControl,
}

/// Field payload; `ivar` is only read for `ObjCIvar`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FieldInfo {
    pub is_mutable: bool,
    pub init: Option<StmtId>,
    pub bit_width: Option<StmtId>,
    pub ivar: IvarInfo,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TlsKind {
    #[default]
    None,
    Static,
    Dynamic,
}

impl TlsKind {
    pub const fn name(self) -> &'static str {
        match self {
            TlsKind::None => "Tls_none",
            TlsKind::Static => "Tls_static",
            TlsKind::Dynamic => "Tls_dynamic",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct VarInfo {
    pub storage_class: Option<StorageClass>,
    pub tls_kind: TlsKind,
    pub is_nrvo: bool,
    pub init: Option<StmtId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SpecifierKind {
    Identifier,
    Namespace,
    NamespaceAlias,
    TypeSpec,
    TypeSpecWithTemplate,
    Global,
    Super,
}

impl SpecifierKind {
    pub const fn name(self) -> &'static str {
        match self {
            SpecifierKind::Identifier => "Identifier",
            SpecifierKind::Namespace => "Namespace",
            SpecifierKind::NamespaceAlias => "NamespaceAlias",
            SpecifierKind::TypeSpec => "TypeSpec",
            SpecifierKind::TypeSpecWithTemplate => "TypeSpecWithTemplate",
            SpecifierKind::Global => "Global",
            SpecifierKind::Super => "Super",
        }
    }
}

/// One component of a `a::b::` qualifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NestedNameSpecifier {
    pub kind: SpecifierKind,
    /// Namespace or alias the component names, when it names one.
    pub decl: Option<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UsingDirectiveInfo {
    pub using_location: Option<SourceLocation>,
    pub namespace_key_location: Option<SourceLocation>,
    pub qualifier: Vec<NestedNameSpecifier>,
    pub nominated: Option<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NamespaceAliasInfo {
    pub namespace_location: Option<SourceLocation>,
    pub target_name_location: Option<SourceLocation>,
    pub qualifier: Vec<NestedNameSpecifier>,
    pub namespace: DeclId,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjCMethodInfo {
    pub is_instance: bool,
    pub result_type: QualType,
    pub params: Vec<DeclId>,
    pub is_variadic: bool,
    pub body: Option<StmtId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ObjCCategoryInfo {
    pub class_interface: Option<DeclId>,
    pub implementation: Option<DeclId>,
    pub protocols: Vec<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ObjCCategoryImplInfo {
    pub class_interface: Option<DeclId>,
    pub category: Option<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ObjCInterfaceInfo {
    pub super_class: Option<DeclId>,
    pub implementation: Option<DeclId>,
    pub protocols: Vec<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ObjCImplementationInfo {
    pub super_class: Option<DeclId>,
    pub class_interface: Option<DeclId>,
    pub ivar_initializers: Vec<CtorInitializer>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PropertyControl {
    #[default]
    None,
    Required,
    Optional,
}

impl PropertyControl {
    pub const fn name(self) -> &'static str {
        match self {
            PropertyControl::None => "None",
            PropertyControl::Required => "Required",
            PropertyControl::Optional => "Optional",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyAttribute {
    Readonly,
    Assign,
    Readwrite,
    Retain,
    Copy,
    Nonatomic,
    Atomic,
    Weak,
    Strong,
    UnsafeUnretained,
    Getter(DeclId),
    Setter(DeclId),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjCPropertyInfo {
    pub class_interface: Option<DeclId>,
    pub ty: QualType,
    pub control: PropertyControl,
    pub attributes: Vec<PropertyAttribute>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyImplementation {
    Synthesize,
    Dynamic,
}

impl PropertyImplementation {
    pub const fn name(self) -> &'static str {
        match self {
            PropertyImplementation::Synthesize => "Synthesize",
            PropertyImplementation::Dynamic => "Dynamic",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjCPropertyImplInfo {
    pub implementation: PropertyImplementation,
    pub property: Option<DeclId>,
    pub ivar: Option<DeclId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockCapture {
    pub is_by_ref: bool,
    pub is_nested: bool,
    pub variable: Option<DeclId>,
    pub copy_expr: Option<StmtId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockInfo {
    pub params: Vec<DeclId>,
    pub is_variadic: bool,
    pub captures_cxx_this: bool,
    pub captures: Vec<BlockCapture>,
    pub body: Option<StmtId>,
}
