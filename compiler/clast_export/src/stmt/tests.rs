use clast_ir::{
    AstBuilder, BinaryInfo, BinaryOpcode, BuiltinKind, CastBase, CastInfo, CastKind,
    CompoundAssignInfo, ExprInfo, MessageInfo, QualType, ReceiverKind, SourceRange, Stmt,
    StmtData, StmtKind, ValueKind,
};
use clast_writer::{DocumentWriter, RecordingWriter, Value};
use pretty_assertions::assert_eq;

use crate::exporter::Exporter;
use crate::identity::IdentityTable;
use crate::location::LocationCursor;
use crate::sentinel::Sentinels;
use crate::test_helpers::{fields, record, try_record};
use crate::{ExportError, ExportOptions};

#[test]
fn test_integer_literal_layout() {
    let mut b = AstBuilder::new("main.c");
    let lit = b.int_literal(42, b.range((1, 1), (1, 2)));
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(lit));
    assert_eq!(doc.tag(), Some("IntegerLiteral"));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 4);
    assert_eq!(tuple[0].field_names(), vec!["pointer", "source_range"]);
    assert!(tuple[1].elements().is_empty());
    assert_eq!(tuple[2].field_names(), vec!["qual_type"]);
    assert_eq!(
        tuple[3].field_names(),
        vec!["is_signed", "bitwidth", "value"]
    );
    assert_eq!(tuple[3].field("value").and_then(Value::as_str), Some("42"));
    assert_eq!(tuple[3].field("bitwidth").and_then(Value::as_integer), Some(32));
}

#[test]
fn test_absent_children_are_null_stmt_sentinels() {
    let mut b = AstBuilder::new("main.c");
    let body = b.compound(Vec::new(), b.range((1, 12), (1, 13)));
    let for_stmt = b.stmt(
        Stmt::new(StmtKind::ForStmt, b.range((1, 1), (1, 13)))
            .with_slots(vec![None, None, None, None, Some(body)]),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(for_stmt));
    let children = fields(&doc)[1].elements();
    assert_eq!(children.len(), 5);
    for sentinel in &children[..4] {
        assert_eq!(sentinel.tag(), Some("NullStmt"));
        assert_eq!(fields(sentinel).len(), 2);
    }
    // Every sentinel shares one identity.
    let pointer = |node: &Value| fields(node)[0].field("pointer").cloned();
    assert_eq!(pointer(&children[0]), pointer(&children[3]));
    assert_eq!(children[4].tag(), Some("CompoundStmt"));
}

#[test]
fn test_value_kind_written_when_not_rvalue() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let var = b.var(tu, "x", QualType::new(int), None, b.range((1, 1), (1, 6)));
    let use_site = b.decl_ref(var, b.range((2, 1), (2, 2)));
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(use_site));
    let tuple = fields(&doc);
    assert_eq!(tuple[2].field_names(), vec!["qual_type", "value_kind"]);
    assert_eq!(
        tuple[2].field("value_kind"),
        Some(&Value::SimpleVariant("LValue".to_owned()))
    );
    let decl_ref = tuple[3].field("decl_ref").unwrap();
    assert_eq!(
        decl_ref.field("kind"),
        Some(&Value::SimpleVariant("Var".to_owned()))
    );
}

#[test]
fn test_compound_assignment_extends_binary_operator() {
    let mut b = AstBuilder::new("main.c");
    let int = QualType::new(b.builtin(BuiltinKind::Int));
    let lhs = b.int_literal(1, b.range((1, 1), (1, 1)));
    let rhs = b.int_literal(2, b.range((1, 6), (1, 6)));
    let assign = b.stmt(
        Stmt::new(StmtKind::CompoundAssignOperator, b.range((1, 1), (1, 6)))
            .with_children([lhs, rhs])
            .with_expr(ExprInfo::new(int))
            .with_data(StmtData::Binary(BinaryInfo {
                opcode: BinaryOpcode::AddAssign,
                compound: Some(CompoundAssignInfo {
                    lhs_type: int,
                    result_type: int,
                }),
            })),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(assign));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 5);
    assert_eq!(
        tuple[3].field("kind"),
        Some(&Value::SimpleVariant("AddAssign".to_owned()))
    );
    assert_eq!(tuple[4].field_names(), vec!["lhs_type", "result_type"]);
}

#[test]
fn test_compound_assignment_without_types_is_rejected() {
    let mut b = AstBuilder::new("main.c");
    let int = QualType::new(b.builtin(BuiltinKind::Int));
    let lhs = b.int_literal(1, SourceRange::INVALID);
    let rhs = b.int_literal(2, SourceRange::INVALID);
    let assign = b.stmt(
        Stmt::new(StmtKind::CompoundAssignOperator, SourceRange::INVALID)
            .with_children([lhs, rhs])
            .with_expr(ExprInfo::new(int))
            .with_data(StmtData::Binary(BinaryInfo {
                opcode: BinaryOpcode::AddAssign,
                compound: None,
            })),
    );
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.stmt(assign)).unwrap_err();
    assert!(matches!(
        err,
        ExportError::MissingPayload {
            kind: "CompoundAssignOperator",
            ..
        }
    ));
}

#[test]
fn test_expression_without_expr_info_is_rejected() {
    let mut b = AstBuilder::new("main.c");
    let paren = b.stmt(Stmt::new(StmtKind::ParenExpr, SourceRange::INVALID));
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.stmt(paren)).unwrap_err();
    assert!(matches!(err, ExportError::MissingPayload { .. }));
}

#[test]
fn test_abstract_stmt_kind_is_rejected() {
    let mut b = AstBuilder::new("main.c");
    let expr = b.stmt(Stmt::new(StmtKind::Expr, SourceRange::INVALID));
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.stmt(expr)).unwrap_err();
    assert!(matches!(
        err,
        ExportError::AbstractKind { name: "Expr", .. }
    ));
}

#[test]
fn test_explicit_cast_levels() {
    let mut b = AstBuilder::new("main.c");
    let long = QualType::new(b.builtin(BuiltinKind::Long));
    let operand = b.int_literal(7, b.range((1, 8), (1, 8)));
    let mut info = CastInfo::new(CastKind::IntegralCast);
    info.written_type = Some(long);
    info.base_path.push(CastBase {
        name: "Base".to_owned(),
        is_virtual: true,
    });
    let cast = b.stmt(
        Stmt::new(StmtKind::CStyleCastExpr, b.range((1, 1), (1, 8)))
            .with_children([operand])
            .with_expr(ExprInfo::new(long))
            .with_data(StmtData::Cast(info)),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(cast));
    let tuple = fields(&doc);
    assert_eq!(tuple.len(), 5);
    assert_eq!(
        tuple[3].field("cast_kind"),
        Some(&Value::SimpleVariant("IntegralCast".to_owned()))
    );
    let base = tuple[3].field("base_path").unwrap().at(0).unwrap();
    assert_eq!(base.field_names(), vec!["name", "is_virtual"]);
    assert_eq!(tuple[4].field("raw").and_then(Value::as_str), Some("long"));
}

#[test]
fn test_cleanup_sub_expression_is_referenced_not_redefined() {
    let mut b = AstBuilder::new("main.cpp");
    let int = QualType::new(b.builtin(BuiltinKind::Int));
    let inner = b.int_literal(3, b.range((1, 1), (1, 1)));
    let cleanups = b.stmt(
        Stmt::new(StmtKind::ExprWithCleanups, b.range((1, 1), (1, 1)))
            .with_children([inner])
            .with_expr(ExprInfo::new(int))
            .with_data(StmtData::Cleanups {
                objects: Vec::new(),
                sub_expr: inner,
            }),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(cleanups));
    let tuple = fields(&doc);
    let defined = fields(&tuple[1].elements()[0])[0].field("pointer").unwrap();
    assert_eq!(tuple[3].field_names(), vec!["sub_expr"]);
    assert_eq!(tuple[3].field("sub_expr"), Some(defined));
}

#[test]
fn test_message_to_class_receiver() {
    let mut b = AstBuilder::new("main.m");
    let id = QualType::new(b.builtin(BuiltinKind::ObjCId));
    let message = b.stmt(
        Stmt::new(StmtKind::ObjCMessageExpr, SourceRange::INVALID)
            .with_expr(ExprInfo::new(id))
            .with_data(StmtData::Message(MessageInfo {
                selector: "alloc".to_owned(),
                method: None,
                receiver: ReceiverKind::Class(id),
            })),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(message));
    let info = &fields(&doc)[3];
    assert_eq!(info.field_names(), vec!["selector", "receiver_kind"]);
    let receiver = info.field("receiver_kind").unwrap();
    assert_eq!(receiver.tag(), Some("Class"));
    assert!(receiver.argument().unwrap().field("type_ptr").is_some());
}

#[test]
fn test_catch_all_handler() {
    let mut b = AstBuilder::new("main.m");
    let catch = b.stmt(
        Stmt::new(StmtKind::ObjCAtCatchStmt, SourceRange::INVALID)
            .with_data(StmtData::CatchParam(None)),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(catch));
    assert_eq!(
        fields(&doc)[2],
        Value::SimpleVariant("CatchAll".to_owned())
    );
}

#[test]
fn test_decl_stmt_defines_its_declarations() {
    let mut b = AstBuilder::new("main.c");
    let int = QualType::new(b.builtin(BuiltinKind::Int));
    let init = b.int_literal(0, b.range((2, 13), (2, 13)));
    let local = b.local_var("i", int, Some(init), b.range((2, 5), (2, 13)));
    let decl_stmt = b.decl_stmt(vec![local], b.range((2, 5), (2, 14)));
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.stmt(decl_stmt));
    let decls = fields(&doc)[2].elements();
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].tag(), Some("VarDecl"));
    let var_info = &fields(&decls[0])[3];
    assert_eq!(
        var_info.field("init_expr").and_then(Value::tag),
        Some("IntegerLiteral")
    );
}

#[test]
fn test_deeply_nested_expressions() {
    const DEPTH: usize = 20_000;

    let mut b = AstBuilder::new("main.c");
    let int = QualType::new(b.builtin(BuiltinKind::Int));
    let mut expr = b.int_literal(1, SourceRange::INVALID);
    for _ in 0..DEPTH {
        expr = b.stmt(
            Stmt::new(StmtKind::ParenExpr, SourceRange::INVALID)
                .with_children([expr])
                .with_expr(ExprInfo {
                    value_kind: ValueKind::RValue,
                    ..ExprInfo::new(int)
                }),
        );
    }
    let (ctx, _) = b.finish();

    // Folding into a `Value` would drop recursively; inspect the events.
    let options = ExportOptions::new();
    let sentinels = Sentinels::new();
    let mut cursor = LocationCursor::new();
    let mut identities = IdentityTable::new();
    let mut out = RecordingWriter::new();
    Exporter::new(
        &ctx,
        &mut out,
        &sentinels,
        &mut cursor,
        &mut identities,
        &options,
    )
    .stmt(expr)
    .unwrap();
    out.finish().unwrap();
    assert!(out.max_depth() > DEPTH);
    assert_eq!(identities.len(), DEPTH + 2);
}
