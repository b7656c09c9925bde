//! Export sessions.
//!
//! An [`ExportSession`] owns the state that outlives a single pass: the
//! sentinels, the location cursor and the identity table. Exports through
//! one session share identity numbering until the caller resets it, so the
//! same node keeps its anonymized id across documents.

use clast_ir::{AstContext, DeclId, DeclKind, NodeRef};
use clast_writer::DocumentWriter;
use tracing::{debug, debug_span};

use crate::exporter::Exporter;
use crate::identity::IdentityTable;
use crate::location::LocationCursor;
use crate::sentinel::Sentinels;
use crate::{ExportError, ExportOptions};

#[derive(Debug, Default)]
pub struct ExportSession {
    sentinels: Sentinels,
    cursor: LocationCursor,
    identities: IdentityTable,
    in_use: bool,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export the translation unit `root` of `ctx` into `writer`.
    ///
    /// Options and root are checked before anything is written. The location
    /// cursor starts fresh; the identity table carries over from earlier
    /// exports. A failed pass leaves the session unusable until [`reset`].
    ///
    /// [`reset`]: ExportSession::reset
    pub fn export<W: DocumentWriter + ?Sized>(
        &mut self,
        ctx: &AstContext,
        root: DeclId,
        writer: &mut W,
        options: &ExportOptions,
    ) -> Result<(), ExportError> {
        if self.in_use {
            return Err(ExportError::SessionInUse);
        }
        options.validate()?;
        check_root(ctx, root)?;

        let _span = debug_span!("export", root = ?NodeRef::Decl(root).identity()).entered();
        self.in_use = true;
        self.cursor.reset();
        debug!(
            decls = ctx.decl_count(),
            stmts = ctx.stmt_count(),
            types = ctx.type_count(),
            mode = ?options.identity_mode,
            "export started"
        );

        Exporter::new(
            ctx,
            writer,
            &self.sentinels,
            &mut self.cursor,
            &mut self.identities,
            options,
        )
        .decl(root)?;
        writer.finish()?;

        self.in_use = false;
        debug!(identities = self.identities.len(), "export finished");
        Ok(())
    }

    /// Forget all identities and clear the in-use guard.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.identities.reset();
        self.in_use = false;
    }

    /// Restart anonymized numbering at zero for the next export.
    pub fn reset_identities(&mut self) {
        self.identities.reset();
    }

    #[inline]
    pub fn identities(&self) -> &IdentityTable {
        &self.identities
    }

    #[inline]
    pub fn cursor(&self) -> &LocationCursor {
        &self.cursor
    }

    #[inline]
    pub fn sentinels(&self) -> &Sentinels {
        &self.sentinels
    }

    /// `true` while an export is running or after one failed.
    #[inline]
    pub fn is_in_use(&self) -> bool {
        self.in_use
    }
}

/// The root must exist and be a translation unit.
pub(crate) fn check_root(ctx: &AstContext, root: DeclId) -> Result<(), ExportError> {
    let decl = ctx.get_decl(root).ok_or(ExportError::DanglingRoot)?;
    if decl.kind == DeclKind::TranslationUnit {
        Ok(())
    } else {
        Err(ExportError::InvalidRoot(decl.kind))
    }
}
