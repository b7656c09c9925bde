use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_new_creates_translation_unit() {
    let builder = AstBuilder::new("main.c");
    let tu = builder.ctx().decl(builder.translation_unit());
    assert_eq!(tu.kind, DeclKind::TranslationUnit);
    assert!(tu.context.is_some());
    assert_eq!(builder.ctx().file_name(builder.main_file()), "main.c");
}

#[test]
fn test_builtins_are_shared() {
    let mut builder = AstBuilder::new("main.c");
    let a = builder.builtin(BuiltinKind::Int);
    let b = builder.builtin(BuiltinKind::Int);
    let c = builder.builtin(BuiltinKind::CharS);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(builder.ctx().ty(a).raw, "int");
}

#[test]
fn test_function_links_params() {
    let mut builder = AstBuilder::new("main.c");
    let tu = builder.translation_unit();
    let int = builder.builtin(BuiltinKind::Int);
    let fn_ty = builder.function_type(int, &[int]);
    let param = builder.param("x", QualType::new(int), builder.range((1, 9), (1, 13)));
    let f = builder.function(tu, "f", fn_ty, vec![param], None, builder.range((1, 1), (1, 14)));

    let ctx = builder.ctx();
    assert_eq!(ctx.ty(fn_ty).raw, "int (int)");
    assert_eq!(ctx.decl(param).semantic_parent, Some(f));
    assert_eq!(ctx.decl(f).semantic_parent, Some(tu));
    let decls = &ctx.decl(tu).context.as_ref().map(|c| c.decls.clone());
    assert_eq!(decls, &Some(vec![f]));
}

#[test]
fn test_record_members_are_qualified() {
    let mut builder = AstBuilder::new("main.c");
    let tu = builder.translation_unit();
    let int = builder.builtin(BuiltinKind::Int);
    let (record, record_ty) = builder.record(tu, "point", builder.range((1, 1), (4, 1)));
    let field = builder.field(record, "x", QualType::new(int), builder.range((2, 5), (2, 9)));

    let ctx = builder.ctx();
    assert_eq!(ctx.ty(record_ty).raw, "struct point");
    assert_eq!(ctx.decl(record).type_for_decl, Some(record_ty));
    let name = ctx.decl(field).name.as_ref().map(|n| n.qualified_name.as_str());
    assert_eq!(name, Some("point::x"));
}

#[test]
fn test_decl_stmt_keeps_initializer_on_variable() {
    let mut builder = AstBuilder::new("main.c");
    let int = builder.builtin(BuiltinKind::Int);
    let one = builder.int_literal(1, builder.range((2, 13), (2, 13)));
    let var = builder.local_var("y", QualType::new(int), Some(one), builder.range((2, 5), (2, 13)));
    let stmt = builder.decl_stmt(vec![var], builder.range((2, 5), (2, 14)));

    let ctx = builder.ctx();
    assert!(ctx.stmt(stmt).children.is_empty());
    assert!(matches!(&ctx.stmt(stmt).data, StmtData::Decls(decls) if decls == &[var]));
    assert!(matches!(&ctx.decl(var).data, DeclData::Var(info) if info.init == Some(one)));
}

#[test]
fn test_decl_ref_is_lvalue() {
    let mut builder = AstBuilder::new("main.c");
    let tu = builder.translation_unit();
    let int = builder.builtin(BuiltinKind::Int);
    let var = builder.var(tu, "g", QualType::new(int), None, builder.range((1, 1), (1, 6)));
    let r = builder.decl_ref(var, builder.range((3, 3), (3, 3)));

    let expr = builder.ctx().stmt(r).expr.as_ref().map(|e| e.value_kind);
    assert_eq!(expr, Some(ValueKind::LValue));
}

#[test]
fn test_finish_returns_root() {
    let builder = AstBuilder::new("main.c");
    let root = builder.translation_unit();
    let (ctx, finished) = builder.finish();
    assert_eq!(finished, root);
    assert_eq!(ctx.decl_count(), 1);
}
