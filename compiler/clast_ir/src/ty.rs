//! Type nodes.
//!
//! Types are defined once, in creation order, in the context's type arena.
//! Everything else mentions them by [`TypeId`]; a `None` type reference is
//! the null type.

use crate::ids::{DeclId, TypeId};
use crate::kind::TypeKind;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Type {
    pub kind: TypeKind,
    /// Spelling as written, e.g. `struct point *`.
    pub raw: String,
    /// Canonical type after removing sugar, when different from this one.
    pub desugared: Option<TypeId>,
    pub data: TypeData,
}

impl Type {
    pub fn new(kind: TypeKind, raw: impl Into<String>) -> Self {
        Type {
            kind,
            raw: raw.into(),
            desugared: None,
            data: TypeData::None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: TypeData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_desugared(mut self, ty: TypeId) -> Self {
        self.desugared = Some(ty);
        self
    }
}

/// Leaf payload of a type, keyed by the level that emits it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TypeData {
    #[default]
    None,
    /// Pointee, element, referenced, adjusted, or inner type.
    Child(Option<TypeId>),
    ConstantArray { element: Option<TypeId>, size: u64 },
    Builtin(BuiltinKind),
    /// `params` is `None` for functions without a prototype.
    Function {
        return_type: Option<TypeId>,
        params: Option<Vec<Option<TypeId>>>,
    },
    ObjCObject {
        base: Option<TypeId>,
        protocols: Vec<DeclId>,
    },
    ObjCInterface {
        base: Option<TypeId>,
        protocols: Vec<DeclId>,
        decl: DeclId,
    },
    /// Record or enum type naming its declaration.
    Tag(DeclId),
    Typedef { child: Option<TypeId>, decl: DeclId },
}

impl TypeData {
    /// Child type of pointer-, array- and wrapper-like types.
    pub fn child(&self) -> Option<Option<TypeId>> {
        match self {
            TypeData::Child(child) => Some(*child),
            TypeData::ConstantArray { element, .. } => Some(*element),
            _ => None,
        }
    }
}

/// Builtin type kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinKind {
    Void,
    Bool,
    CharU,
    UChar,
    WCharU,
    Char16,
    Char32,
    UShort,
    UInt,
    ULong,
    ULongLong,
    UInt128,
    CharS,
    SChar,
    WCharS,
    Short,
    Int,
    Long,
    LongLong,
    Int128,
    Half,
    Float,
    Double,
    LongDouble,
    NullPtr,
    ObjCId,
    ObjCClass,
    ObjCSel,
    Dependent,
    Overload,
    BoundMember,
    PseudoObject,
    UnknownAny,
    BuiltinFn,
    ARCUnbridgedCast,
}

impl BuiltinKind {
    /// Exported variant name.
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinKind::Void => "Void",
            BuiltinKind::Bool => "Bool",
            BuiltinKind::CharU => "Char_U",
            BuiltinKind::UChar => "UChar",
            BuiltinKind::WCharU => "WChar_U",
            BuiltinKind::Char16 => "Char16",
            BuiltinKind::Char32 => "Char32",
            BuiltinKind::UShort => "UShort",
            BuiltinKind::UInt => "UInt",
            BuiltinKind::ULong => "ULong",
            BuiltinKind::ULongLong => "ULongLong",
            BuiltinKind::UInt128 => "UInt128",
            BuiltinKind::CharS => "Char_S",
            BuiltinKind::SChar => "SChar",
            BuiltinKind::WCharS => "WChar_S",
            BuiltinKind::Short => "Short",
            BuiltinKind::Int => "Int",
            BuiltinKind::Long => "Long",
            BuiltinKind::LongLong => "LongLong",
            BuiltinKind::Int128 => "Int128",
            BuiltinKind::Half => "Half",
            BuiltinKind::Float => "Float",
            BuiltinKind::Double => "Double",
            BuiltinKind::LongDouble => "LongDouble",
            BuiltinKind::NullPtr => "NullPtr",
            BuiltinKind::ObjCId => "ObjCId",
            BuiltinKind::ObjCClass => "ObjCClass",
            BuiltinKind::ObjCSel => "ObjCSel",
            BuiltinKind::Dependent => "Dependent",
            BuiltinKind::Overload => "Overload",
            BuiltinKind::BoundMember => "BoundMember",
            BuiltinKind::PseudoObject => "PseudoObject",
            BuiltinKind::UnknownAny => "UnknownAny",
            BuiltinKind::BuiltinFn => "BuiltinFn",
            BuiltinKind::ARCUnbridgedCast => "ARCUnbridgedCast",
        }
    }

    /// C spelling used as the raw type string.
    pub const fn spelling(self) -> &'static str {
        match self {
            BuiltinKind::Void => "void",
            BuiltinKind::Bool => "_Bool",
            BuiltinKind::CharU | BuiltinKind::CharS => "char",
            BuiltinKind::UChar => "unsigned char",
            BuiltinKind::WCharU | BuiltinKind::WCharS => "wchar_t",
            BuiltinKind::Char16 => "char16_t",
            BuiltinKind::Char32 => "char32_t",
            BuiltinKind::UShort => "unsigned short",
            BuiltinKind::UInt => "unsigned int",
            BuiltinKind::ULong => "unsigned long",
            BuiltinKind::ULongLong => "unsigned long long",
            BuiltinKind::UInt128 => "unsigned __int128",
            BuiltinKind::SChar => "signed char",
            BuiltinKind::Short => "short",
            BuiltinKind::Int => "int",
            BuiltinKind::Long => "long",
            BuiltinKind::LongLong => "long long",
            BuiltinKind::Int128 => "__int128",
            BuiltinKind::Half => "half",
            BuiltinKind::Float => "float",
            BuiltinKind::Double => "double",
            BuiltinKind::LongDouble => "long double",
            BuiltinKind::NullPtr => "nullptr_t",
            BuiltinKind::ObjCId => "id",
            BuiltinKind::ObjCClass => "Class",
            BuiltinKind::ObjCSel => "SEL",
            BuiltinKind::Dependent => "<dependent type>",
            BuiltinKind::Overload => "<overloaded function type>",
            BuiltinKind::BoundMember => "<bound member function type>",
            BuiltinKind::PseudoObject => "<pseudo-object type>",
            BuiltinKind::UnknownAny => "<unknown type>",
            BuiltinKind::BuiltinFn => "<builtin fn type>",
            BuiltinKind::ARCUnbridgedCast => "<ARC unbridged cast type>",
        }
    }
}

