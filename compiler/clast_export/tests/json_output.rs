//! Text output of whole exports.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::PathBuf;

use clast_export::{
    export_to_path, export_to_writer, init_tracing, ConfigError, ExportError, ExportOptions,
    IdentityMode, PathNormalizer,
};
use clast_ir::{AstBuilder, AstContext, BuiltinKind, DeclId, QualType};
use clast_writer::JsonDialect;
use pretty_assertions::assert_eq;

fn empty_unit() -> (AstContext, DeclId) {
    AstBuilder::new("main.c").finish()
}

/// `int x;`
fn one_var() -> (AstContext, DeclId) {
    let mut b = AstBuilder::new("main.c");
    let root = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let range = b.range((1, 1), (1, 5));
    b.var(root, "x", QualType::new(int), None, range);
    b.finish()
}

fn export_string(unit: &(AstContext, DeclId), options: &ExportOptions) -> String {
    init_tracing();
    let bytes = export_to_writer(&unit.0, unit.1, Vec::new(), options).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_empty_unit_compact() {
    let text = export_string(&empty_unit(), &ExportOptions::new());
    assert_eq!(
        text,
        r#"["TranslationUnitDecl",[{"pointer":"0","source_range":[{},{}],"attributes":[]},[],{},[["NoneType",[{"pointer":"1","raw":""}]]]]]"#
    );
}

#[test]
fn test_empty_unit_yojson() {
    let options = ExportOptions::new().with_dialect(JsonDialect::Yojson);
    let text = export_string(&empty_unit(), &options);
    assert_eq!(
        text,
        r#"<"TranslationUnitDecl":({"pointer":"0","source_range":({},{}),"attributes":[]},[],{},[<"NoneType":({"pointer":"1","raw":""})>])>"#
    );
}

#[test]
fn test_empty_unit_raw_identities() {
    let options = ExportOptions::new().with_identity_mode(IdentityMode::Raw);
    let text = export_string(&empty_unit(), &options);
    assert!(text.contains(r#"{"pointer":"0x10000000000","source_range""#));
    assert!(text.contains(r#"["NoneType",[{"pointer":"0x0","raw":""}]]"#));
}

#[test]
fn test_variable_compact() {
    let text = export_string(&one_var(), &ExportOptions::new());
    assert_eq!(
        text,
        concat!(
            r#"["TranslationUnitDecl",[{"pointer":"0","source_range":[{},{}],"attributes":[]},"#,
            r#"[["VarDecl",[{"pointer":"1","source_range":[{"file":"main.c","line":1,"column":1},{"column":5}],"attributes":[]},"#,
            r#"{"name":"x","qual_name":["x"]},{"raw":"int","type_ptr":"2"},{}]]],{},"#,
            r#"[["BuiltinType",[{"pointer":"2","raw":"int"},"Int"]],["NoneType",[{"pointer":"3","raw":""}]]]]]"#,
        )
    );
}

#[test]
fn test_pretty_matches_compact_modulo_whitespace() {
    let unit = one_var();
    let compact = export_string(&unit, &ExportOptions::new());
    let pretty = export_string(&unit, &ExportOptions::new().with_pretty_print(true));

    assert!(pretty.ends_with('\n'));
    assert!(pretty.lines().count() > 10);
    assert!(pretty.contains("\n  "));
    let squeezed: String = pretty.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(squeezed, compact);
}

#[test]
fn test_stripped_file_names() {
    let mut b = AstBuilder::new("/work/src/main.c");
    let root = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let range = b.range((3, 1), (3, 5));
    b.var(root, "x", QualType::new(int), None, range);
    let unit = b.finish();

    let options = ExportOptions::new()
        .with_path_normalizer(PathNormalizer::StripPrefix(PathBuf::from("/work")));
    let text = export_string(&unit, &options);
    assert!(text.contains(r#""file":"src/main.c""#));
    assert!(!text.contains("/work"));
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("clast-export-{}-{name}", std::process::id()))
}

#[test]
fn test_export_to_path_writes_document() {
    let path = scratch_path("unit.json");
    let unit = empty_unit();
    export_to_path(&unit.0, unit.1, &path, &ExportOptions::new()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, export_string(&unit, &ExportOptions::new()));
}

#[test]
fn test_export_to_path_rejects_bad_options_before_creating_file() {
    let path = scratch_path("rejected.json");
    let unit = empty_unit();
    let options =
        ExportOptions::new().with_path_normalizer(PathNormalizer::StripPrefix(PathBuf::new()));

    let err = export_to_path(&unit.0, unit.1, &path, &options).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Config(ConfigError::EmptyStripPrefix)
    ));
    assert!(!path.exists());
}

#[test]
fn test_export_to_path_rejects_non_unit_root() {
    let path = scratch_path("var-root.json");
    let mut b = AstBuilder::new("main.c");
    let root = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let range = b.range((1, 1), (1, 5));
    let var = b.var(root, "x", QualType::new(int), None, range);
    let (ctx, _) = b.finish();

    let err = export_to_path(&ctx, var, &path, &ExportOptions::new()).unwrap_err();
    assert!(matches!(err, ExportError::InvalidRoot(_)));
    assert!(!path.exists());
}
