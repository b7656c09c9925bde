//! Arena indices for the four node families plus attributes and temporaries.
//!
//! Every node lives in a flat arena owned by [`AstContext`](crate::AstContext)
//! and is addressed by a `u32` newtype. Cyclic links (redeclaration chains,
//! recursive types, parent pointers) are stored as these indices, never as
//! references.

use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid ID (sentinel value).
            pub const INVALID: $name = $name(u32::MAX);

            /// Create an ID from a raw arena index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid ID.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl Hash for $name {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

define_id!(
    /// Index into the declaration arena.
    DeclId
);
define_id!(
    /// Index into the statement arena (expressions included).
    StmtId
);
define_id!(
    /// Index into the type arena. Creation order is the order of the
    /// global type list emitted under the translation unit.
    TypeId
);
define_id!(
    /// Index into the documentation comment arena.
    CommentId
);
define_id!(
    /// Index into the attribute arena.
    AttrId
);
define_id!(
    /// Handle for a C++ temporary bound by a `CXXBindTemporaryExpr`.
    ///
    /// Temporaries carry no payload; only their identity is exported.
    TemporaryId
);

/// Index into the file table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        FileId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

crate::static_assert_size!(DeclId, 4);
crate::static_assert_size!(Option<FileId>, 8);
