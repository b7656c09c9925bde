//! Qualified type references.

use crate::context::AstContext;
use crate::ids::TypeId;

/// A reference to a type plus its cv-qualifiers.
///
/// This is a *reference*: the type node itself is defined once in the
/// context's type arena. `ty == None` is the null type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct QualType {
    pub ty: Option<TypeId>,
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
}

impl QualType {
    /// Unqualified reference to `ty`.
    #[inline]
    pub const fn new(ty: TypeId) -> Self {
        QualType {
            ty: Some(ty),
            is_const: false,
            is_volatile: false,
            is_restrict: false,
        }
    }

    /// The null type.
    pub const NULL: QualType = QualType {
        ty: None,
        is_const: false,
        is_volatile: false,
        is_restrict: false,
    };

    #[must_use]
    pub const fn with_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    #[must_use]
    pub const fn with_volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    #[must_use]
    pub const fn with_restrict(mut self) -> Self {
        self.is_restrict = true;
        self
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.ty.is_none()
    }

    /// Source spelling, e.g. `const int *`.
    pub fn spelling(&self, ctx: &AstContext) -> String {
        match self.ty {
            Some(ty) => self.qualify(&ctx.ty(ty).raw),
            None => String::new(),
        }
    }

    /// Spelling of the fully desugared type, when it differs.
    pub fn desugared_spelling(&self, ctx: &AstContext) -> Option<String> {
        let ty = ctx.ty(self.ty?);
        let target = ctx.ty(ty.desugared?);
        (target.raw != ty.raw).then(|| self.qualify(&target.raw))
    }

    fn qualify(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 16);
        if self.is_const {
            out.push_str("const ");
        }
        if self.is_volatile {
            out.push_str("volatile ");
        }
        if self.is_restrict {
            out.push_str("restrict ");
        }
        out.push_str(raw);
        out
    }
}
