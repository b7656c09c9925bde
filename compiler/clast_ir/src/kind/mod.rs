//! Kind hierarchies for the four node families.
//!
//! Each family has one closed, fieldless enum listing abstract and concrete
//! kinds. Every kind names exactly one parent; the family root has none.
//! The tables are generated by [`define_kinds!`] so that each kind appears
//! in exactly one place, and consumers dispatch over them with exhaustive
//! `match`es.

use std::fmt;
use std::hash::Hash;

/// The four node families of a translation unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Family {
    Decl,
    Stmt,
    Type,
    Comment,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Decl, Family::Stmt, Family::Type, Family::Comment];

    pub const fn name(self) -> &'static str {
        match self {
            Family::Decl => "decl",
            Family::Stmt => "stmt",
            Family::Type => "type",
            Family::Comment => "comment",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common interface of the per-family kind enums.
pub trait NodeKind: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Family this kind enumeration belongs to.
    const FAMILY: Family;

    /// Every kind of the family, abstract kinds included, in table order.
    const ALL: &'static [Self];

    /// The declared parent kind; `None` for the family root.
    fn parent(self) -> Option<Self>;

    /// Short kind name, e.g. `Function` or `IfStmt`.
    fn name(self) -> &'static str;

    /// Tag used for the node's variant in exported documents,
    /// e.g. `FunctionDecl`, `IfStmt`, `PointerType`.
    fn variant_tag(self) -> &'static str;

    /// Abstract kinds only exist as levels of the hierarchy; no node has one.
    fn is_abstract(self) -> bool;

    /// Look up a kind received as data by its short name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Look up a kind received as data by its variant tag.
    fn from_variant_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.variant_tag() == tag)
    }

    /// `true` if `ancestor` is this kind or lies on its parent chain.
    fn inherits_from(self, ancestor: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Number of parent links between this kind and the family root.
    fn depth(self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(kind) = current {
            depth += 1;
            current = kind.parent();
        }
        depth
    }
}

/// Generate a kind enum and its [`NodeKind`] implementation.
///
/// Entries are `Variant: Parent` or `Variant: root`, optionally followed by
/// `[abstract]`. The variant tag is the variant name plus `suffix`.
macro_rules! define_kinds {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($family:ident, suffix = $suffix:literal) {
            $( $(#[$vmeta:meta])* $variant:ident : $parent:tt $([$abs:tt])? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[allow(clippy::upper_case_acronyms, reason = "kind names follow front-end spelling")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $crate::kind::NodeKind for $name {
            const FAMILY: $crate::kind::Family = $crate::kind::Family::$family;

            const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            fn parent(self) -> Option<Self> {
                match self {
                    $( Self::$variant => define_kinds!(@parent $parent), )*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )*
                }
            }

            fn variant_tag(self) -> &'static str {
                match self {
                    $( Self::$variant => concat!(stringify!($variant), $suffix), )*
                }
            }

            fn is_abstract(self) -> bool {
                match self {
                    $( Self::$variant => define_kinds!(@abstract $($abs)?), )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::kind::NodeKind::variant_tag(*self))
            }
        }
    };
    (@parent root) => { None };
    (@parent $parent:ident) => { Some(Self::$parent) };
    (@abstract abstract) => { true };
    (@abstract) => { false };
}

mod comment;
mod decl;
mod stmt;
mod ty;

pub use comment::CommentKind;
pub use decl::DeclKind;
pub use stmt::StmtKind;
pub use ty::TypeKind;

#[cfg(test)]
mod tests;
