//! Export options.
//!
//! Everything an export pass can be configured with is carried by
//! [`ExportOptions`]; there is no global or environment configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use clast_ir::{AstContext, Decl};
use clast_writer::JsonDialect;
use rustc_hash::FxHashSet;

use crate::ConfigError;

/// How node identities are written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IdentityMode {
    /// Storage-derived hex tokens: inspectable, not stable across runs.
    Raw,
    /// Dense integers in first-seen order: reproducible across runs.
    #[default]
    Anonymized,
}

/// Rewrites file names before they are written.
#[derive(Default)]
pub enum PathNormalizer {
    #[default]
    Identity,
    /// Remove a leading directory, e.g. the project root.
    StripPrefix(PathBuf),
    Custom(Box<dyn Fn(&str) -> String>),
}

impl PathNormalizer {
    pub fn normalize(&self, path: &str) -> String {
        match self {
            PathNormalizer::Identity => path.to_owned(),
            // Component-wise: `/src` does not strip `/srcfoo/a.c`.
            PathNormalizer::StripPrefix(prefix) => Path::new(path)
                .strip_prefix(prefix)
                .ok()
                .and_then(Path::to_str)
                .map_or_else(|| path.to_owned(), str::to_owned),
            PathNormalizer::Custom(f) => f(path),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let PathNormalizer::StripPrefix(prefix) = self {
            if prefix.as_os_str().is_empty() {
                return Err(ConfigError::EmptyStripPrefix);
            }
            if prefix.to_str().is_none() {
                return Err(ConfigError::NonUtf8Prefix(
                    prefix.to_string_lossy().into_owned(),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for PathNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathNormalizer::Identity => f.write_str("Identity"),
            PathNormalizer::StripPrefix(prefix) => {
                f.debug_tuple("StripPrefix").field(prefix).finish()
            }
            PathNormalizer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Decides which children of a declaration context are exported.
///
/// Filtered declarations are left out of the context's list entirely; the
/// list declares the filtered count.
pub trait DeclFilter {
    fn should_export(&self, ctx: &AstContext, decl: &Decl) -> bool;
}

/// Skips declarations whose range begins in one of the given files, e.g.
/// headers already exported with another translation unit.
#[derive(Clone, Debug, Default)]
pub struct SkipFiles {
    files: FxHashSet<String>,
}

impl SkipFiles {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SkipFiles {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl DeclFilter for SkipFiles {
    fn should_export(&self, ctx: &AstContext, decl: &Decl) -> bool {
        decl.range
            .file()
            .map_or(true, |file| !self.files.contains(ctx.file_name(file)))
    }
}

/// Options of one export pass.
#[derive(Default)]
pub struct ExportOptions {
    pub identity_mode: IdentityMode,
    /// Indent the document (text writers only).
    pub pretty_print: bool,
    pub dialect: JsonDialect,
    pub path_normalizer: PathNormalizer,
    pub decl_filter: Option<Box<dyn DeclFilter>>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_identity_mode(mut self, mode: IdentityMode) -> Self {
        self.identity_mode = mode;
        self
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: JsonDialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub fn with_path_normalizer(mut self, normalizer: PathNormalizer) -> Self {
        self.path_normalizer = normalizer;
        self
    }

    #[must_use]
    pub fn with_decl_filter(mut self, filter: impl DeclFilter + 'static) -> Self {
        self.decl_filter = Some(Box::new(filter));
        self
    }

    /// `true` when identities are written in raw form.
    pub fn emit_raw_identities(&self) -> bool {
        self.identity_mode == IdentityMode::Raw
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.path_normalizer.validate()
    }

    pub(crate) fn keeps(&self, ctx: &AstContext, decl: &Decl) -> bool {
        self.decl_filter
            .as_ref()
            .map_or(true, |filter| filter.should_export(ctx, decl))
    }
}

impl fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportOptions")
            .field("identity_mode", &self.identity_mode)
            .field("pretty_print", &self.pretty_print)
            .field("dialect", &self.dialect)
            .field("path_normalizer", &self.path_normalizer)
            .field("decl_filter", &self.decl_filter.is_some())
            .finish()
    }
}
