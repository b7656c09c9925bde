//! Node identities.
//!
//! A [`NodeIdentity`] is an opaque, hashable, totally ordered token naming a
//! node independent of the node's position in any exported document. It is
//! derived from the node's arena handle, so it is stable for the lifetime of
//! an [`AstContext`](crate::AstContext) and never borrows the node.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::ids::{AttrId, CommentId, DeclId, StmtId, TemporaryId, TypeId};
use crate::kind::Family;

/// Handle to anything that can be named by an identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeRef {
    Decl(DeclId),
    Stmt(StmtId),
    Type(TypeId),
    Comment(CommentId),
    Attr(AttrId),
    Temporary(TemporaryId),
    /// Per-family placeholder substituted for an absent required child.
    Sentinel(Family),
    /// The null reference (absent type, missing link).
    Null,
}

impl NodeRef {
    /// Compute the identity token of this handle.
    pub const fn identity(self) -> NodeIdentity {
        let (tag, index): (u64, u64) = match self {
            NodeRef::Null => return NodeIdentity::NULL,
            NodeRef::Decl(id) => (TAG_DECL, id.raw() as u64),
            NodeRef::Stmt(id) => (TAG_STMT, id.raw() as u64),
            NodeRef::Type(id) => (TAG_TYPE, id.raw() as u64),
            NodeRef::Comment(id) => (TAG_COMMENT, id.raw() as u64),
            NodeRef::Attr(id) => (TAG_ATTR, id.raw() as u64),
            NodeRef::Temporary(id) => (TAG_TEMPORARY, id.raw() as u64),
            NodeRef::Sentinel(family) => (TAG_SENTINEL, family as u64),
        };
        NodeIdentity((tag << TAG_SHIFT) | (index << INDEX_SHIFT))
    }
}

impl From<DeclId> for NodeRef {
    fn from(id: DeclId) -> Self {
        NodeRef::Decl(id)
    }
}

impl From<StmtId> for NodeRef {
    fn from(id: StmtId) -> Self {
        NodeRef::Stmt(id)
    }
}

impl From<TypeId> for NodeRef {
    fn from(id: TypeId) -> Self {
        NodeRef::Type(id)
    }
}

impl From<CommentId> for NodeRef {
    fn from(id: CommentId) -> Self {
        NodeRef::Comment(id)
    }
}

impl From<Option<TypeId>> for NodeRef {
    fn from(id: Option<TypeId>) -> Self {
        id.map_or(NodeRef::Null, NodeRef::Type)
    }
}

const TAG_DECL: u64 = 1;
const TAG_STMT: u64 = 2;
const TAG_TYPE: u64 = 3;
const TAG_COMMENT: u64 = 4;
const TAG_ATTR: u64 = 5;
const TAG_TEMPORARY: u64 = 6;
const TAG_SENTINEL: u64 = 7;

const TAG_SHIFT: u32 = 40;
/// Low bits stay clear so raw identities look like aligned addresses.
const INDEX_SHIFT: u32 = 4;

/// Opaque identity token.
///
/// Displays as lowercase hex with a `0x` prefix (the raw form written when
/// an export keeps raw identities) and parses back from that form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct NodeIdentity(u64);

impl NodeIdentity {
    /// Identity of the null reference.
    pub const NULL: NodeIdentity = NodeIdentity(0);

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdentity({:#x})", self.0)
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for NodeIdentity {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u64::from_str_radix(digits, 16).map(NodeIdentity)
    }
}
