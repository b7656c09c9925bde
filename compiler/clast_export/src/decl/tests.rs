use clast_ir::{
    AstBuilder, Attr, BuiltinKind, Decl, DeclData, DeclFlags, DeclKind, DeclName, QualType,
    RecordInfo, Redeclaration, SourceRange, TypeKind,
};
use clast_writer::Value;
use pretty_assertions::assert_eq;

use crate::test_helpers::{export_unit, fields, record, try_record};
use crate::{ExportError, ExportOptions, SkipFiles};

fn strings(value: &Value) -> Vec<&str> {
    value.elements().iter().filter_map(Value::as_str).collect()
}

#[test]
fn test_translation_unit_layout() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let range = b.range((1, 1), (1, 10));
    b.var(tu, "x", QualType::new(int), None, range);
    let (ctx, root) = b.finish();

    let doc = export_unit(&ctx, root, &ExportOptions::new());
    assert_eq!(doc.tag(), Some("TranslationUnitDecl"));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 4);
    assert_eq!(
        tuple[0].field_names(),
        vec!["pointer", "source_range", "attributes"]
    );
    assert_eq!(tuple[1].elements().len(), 1);
    assert_eq!(tuple[1].at(0).unwrap().tag(), Some("VarDecl"));
    assert_eq!(tuple[2], Value::Object(Vec::new()));

    let types = tuple[3].elements();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].tag(), Some("BuiltinType"));
    assert_eq!(types[1].tag(), Some("NoneType"));
}

#[test]
fn test_function_levels_in_parent_order() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let fn_ty = b.function_type(int, &[int]);
    let param_range = b.range((1, 9), (1, 13));
    let param = b.param("a", QualType::new(int), param_range);
    let arg = b.decl_ref(param, param_range);
    let ret = b.return_stmt(Some(arg), b.range((1, 17), (1, 24)));
    let body = b.compound(vec![ret], b.range((1, 15), (1, 26)));
    let func = b.function(tu, "id", fn_ty, vec![param], Some(body), b.range((1, 1), (1, 26)));
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.decl(func));
    assert_eq!(doc.tag(), Some("FunctionDecl"));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 4);

    let name = &tuple[1];
    assert_eq!(name.field("name").and_then(Value::as_str), Some("id"));
    assert_eq!(strings(name.field("qual_name").unwrap()), vec!["id"]);

    assert_eq!(
        tuple[2].field("raw").and_then(Value::as_str),
        Some("int (int)")
    );

    let info = &tuple[3];
    assert_eq!(info.field_names(), vec!["parameters", "body"]);
    let params = info.field("parameters").unwrap().elements();
    assert_eq!(params[0].tag(), Some("ParmVarDecl"));
    assert_eq!(
        info.field("body").and_then(Value::tag),
        Some("CompoundStmt")
    );
}

#[test]
fn test_qualified_name_innermost_first() {
    let mut b = AstBuilder::new("main.cpp");
    let decl = b.ctx_mut().alloc_decl(
        Decl::new(DeclKind::Typedef, SourceRange::INVALID)
            .with_name(DeclName::new("size", "std::detail::size")),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.decl(decl));
    let qual_name = fields(&doc)[1].field("qual_name").unwrap();
    assert_eq!(strings(qual_name), vec!["size", "detail", "std"]);
}

#[test]
fn test_absent_declaration_is_sentinel() {
    let b = AstBuilder::new("main.c");
    let (ctx, _) = b.finish();

    let first = record(&ctx, |e| e.opt_decl(None));
    let second = record(&ctx, |e| e.opt_decl(None));
    assert_eq!(first.tag(), Some("EmptyDecl"));
    assert_eq!(fields(&first).len(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_abstract_kind_rejected() {
    let mut b = AstBuilder::new("main.c");
    let decl = b
        .ctx_mut()
        .alloc_decl(Decl::new(DeclKind::Named, SourceRange::INVALID));
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.decl(decl)).unwrap_err();
    assert!(matches!(
        err,
        ExportError::AbstractKind {
            name: "NamedDecl",
            ..
        }
    ));
}

#[test]
fn test_missing_payload_rejected() {
    let mut b = AstBuilder::new("main.c");
    let decl = b.ctx_mut().alloc_decl(
        Decl::new(DeclKind::Function, SourceRange::INVALID).with_name(DeclName::simple("f")),
    );
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.decl(decl)).unwrap_err();
    assert!(matches!(
        err,
        ExportError::MissingPayload {
            kind: "FunctionDecl",
            ..
        }
    ));
}

#[test]
fn test_redeclaration_is_a_reference() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let first = b.var(tu, "x", QualType::new(int), None, b.range((1, 1), (1, 12)));
    let second = b.var(tu, "x", QualType::new(int), None, b.range((2, 1), (2, 6)));
    b.ctx_mut().decl_mut(second).redeclaration = Some(Redeclaration::Previous(first));
    let (ctx, root) = b.finish();

    let doc = export_unit(&ctx, root, &ExportOptions::new());
    let decls = fields(&doc)[1].elements();
    assert_eq!(decls.len(), 2);

    let first_pointer = fields(&decls[0])[0].field("pointer").unwrap().clone();
    let previous = fields(&decls[1])[0].field("previous_decl").unwrap();
    assert_eq!(previous.tag(), Some("Previous"));
    assert_eq!(previous.argument(), Some(&first_pointer));
}

#[test]
fn test_flags_written_only_when_set() {
    let mut b = AstBuilder::new("main.c");
    let decl = b.ctx_mut().alloc_decl(
        Decl::new(DeclKind::Empty, SourceRange::INVALID)
            .with_flags(DeclFlags::IMPLICIT | DeclFlags::HIDDEN),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.decl(decl));
    let info = &fields(&doc)[0];
    // Hidden only applies to named declarations.
    assert_eq!(
        info.field_names(),
        vec!["pointer", "source_range", "is_implicit", "attributes"]
    );
    assert_eq!(info.field("is_implicit"), Some(&Value::Boolean(true)));
}

#[test]
fn test_attributes_are_tagged_variants() {
    let mut b = AstBuilder::new("main.c");
    let range = b.range((3, 1), (3, 30));
    let attr = b
        .ctx_mut()
        .alloc_attr(Attr::new("Aligned", range).with_parameters(["16".to_owned()]));
    let decl = b
        .ctx_mut()
        .alloc_decl(Decl::new(DeclKind::Empty, range));
    b.ctx_mut().decl_mut(decl).attrs.push(attr);
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.decl(decl));
    let attrs = fields(&doc)[0].field("attributes").unwrap().elements();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].tag(), Some("AlignedAttr"));
    let body = attrs[0].argument().unwrap();
    assert_eq!(strings(body.field("parameters").unwrap()), vec!["16"]);
}

#[test]
fn test_incomplete_cxx_record_is_empty_object() {
    let mut b = AstBuilder::new("main.cpp");
    let decl = b.ctx_mut().alloc_decl(
        Decl::new(DeclKind::CXXRecord, SourceRange::INVALID)
            .with_name(DeclName::simple("Fwd"))
            .with_data(DeclData::Record(RecordInfo::default())),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.decl(decl));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 8);
    assert_eq!(tuple[7], Value::Object(Vec::new()));
}

#[test]
fn test_record_type_for_decl() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let (record_decl, _) = b.record(tu, "point", b.range((1, 1), (1, 20)));
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.decl(record_decl));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 7);
    // Decl, Named, Type (opt_type, type_ptr), Tag context (decls, storage), Record
    assert_eq!(tuple[2].tag(), Some("Type"));
    assert_eq!(
        tuple[2].argument().and_then(Value::as_str),
        Some("struct point")
    );
    assert_eq!(
        tuple[6].field("is_complete_definition"),
        Some(&Value::Boolean(true))
    );
}

#[test]
fn test_skip_files_filters_context_children() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let header = b.ctx_mut().add_file("/usr/include/stdio.h");
    let header_range = SourceRange::point(clast_ir::SourceLocation::new(header, 10, 1));
    let main_range = b.range((1, 1), (1, 6));
    b.var(tu, "from_header", QualType::new(int), None, header_range);
    b.var(tu, "local", QualType::new(int), None, main_range);
    let (ctx, root) = b.finish();

    let options = ExportOptions::new().with_decl_filter(SkipFiles::new(["/usr/include/stdio.h"]));
    let doc = export_unit(&ctx, root, &options);
    let decls = fields(&doc)[1].elements();
    assert_eq!(decls.len(), 1);
    let name = fields(&decls[0])[1].field("name").and_then(Value::as_str);
    assert_eq!(name, Some("local"));
}

#[test]
fn test_shared_builtin_listed_once() {
    let mut b = AstBuilder::new("main.c");
    let first = b.builtin(BuiltinKind::Int);
    let second = b.builtin(BuiltinKind::Int);
    assert_eq!(first, second);
    let (ctx, root) = b.finish();
    assert_eq!(ctx.ty(first).kind, TypeKind::Builtin);

    let doc = export_unit(&ctx, root, &ExportOptions::new());
    assert_eq!(fields(&doc)[3].elements().len(), 2);
}
