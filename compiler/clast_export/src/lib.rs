//! clast export - single-pass document export of C-family syntax trees
//!
//! Serializes one translation unit from an [`AstContext`] into a structured
//! document through any [`DocumentWriter`]:
//! - Every node becomes `Variant(tag, Tuple(n))`, where `n` is the sum of
//!   the field counts along the kind's parent chain ([`Arity`])
//! - Declarations and statements are defined once at their lexical position;
//!   every other mention is a reference digest or a bare identity
//! - Identities are raw hex tokens or dense first-seen integers
//!   ([`IdentityMode`])
//! - Locations are written as deltas against the previous location
//!   ([`LocationCursor`])
//!
//! # Usage
//!
//! ```text
//! let (ctx, root) = builder.finish();
//! let json = export_to_writer(&ctx, root, Vec::new(), &ExportOptions::new())?;
//! ```
//!
//! For several documents that should share identity numbering, keep one
//! [`ExportSession`] and call [`ExportSession::export`] per document.

mod arity;
mod comment;
mod decl;
mod error;
mod exporter;
mod identity;
mod location;
mod options;
mod sentinel;
mod session;
mod stmt;
mod ty;

#[cfg(test)]
mod test_helpers;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Once;

use clast_ir::{AstContext, DeclId};
use clast_writer::{DocumentWriter, JsonWriter};

pub use arity::{array_arity, tuple_size_of, Arity, ArrayArity};
pub use error::{ConfigError, ExportError};
pub use identity::IdentityTable;
pub use location::LocationCursor;
pub use options::{DeclFilter, ExportOptions, IdentityMode, PathNormalizer, SkipFiles};
pub use sentinel::Sentinels;
pub use session::ExportSession;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=clast_export=debug` or `RUST_LOG=clast_export=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Export `root` as JSON text into `out` with a fresh session.
///
/// Returns the sink so in-memory buffers can be inspected.
pub fn export_to_writer<W: Write>(
    ctx: &AstContext,
    root: DeclId,
    out: W,
    options: &ExportOptions,
) -> Result<W, ExportError> {
    let mut writer = JsonWriter::new(out)
        .with_pretty(options.pretty_print)
        .with_dialect(options.dialect);
    ExportSession::new().export(ctx, root, &mut writer, options)?;
    Ok(writer.into_inner())
}

/// Export `root` as JSON text into the file at `path`.
///
/// Options and root are checked before the file is created, so a rejected
/// export leaves no file behind.
pub fn export_to_path(
    ctx: &AstContext,
    root: DeclId,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    options.validate()?;
    session::check_root(ctx, root)?;
    let file = File::create(path.as_ref())?;
    let mut out = export_to_writer(ctx, root, BufWriter::new(file), options)?;
    out.flush()?;
    Ok(())
}

/// Export `root` into an arbitrary document writer with a fresh session.
pub fn export_with<W: DocumentWriter + ?Sized>(
    ctx: &AstContext,
    root: DeclId,
    writer: &mut W,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    ExportSession::new().export(ctx, root, writer, options)
}
