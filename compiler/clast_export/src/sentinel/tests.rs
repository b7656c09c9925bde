use clast_ir::{AstBuilder, Family, Stmt, StmtKind};
use clast_writer::Value;
use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{fields, try_record_with};
use crate::{ExportOptions, IdentityMode};

fn pointer(node: &Value) -> Option<&str> {
    fields(node)[0].field("pointer").and_then(Value::as_str)
}

#[test]
fn test_identities_differ_per_family() {
    let decl = Sentinels::identity(Family::Decl);
    let stmt = Sentinels::identity(Family::Stmt);
    let comment = Sentinels::identity(Family::Comment);
    assert_ne!(decl, stmt);
    assert_ne!(stmt, comment);
    assert_ne!(decl, comment);
    assert!(!stmt.is_null());
}

#[test]
fn test_sentinel_kinds() {
    let sentinels = Sentinels::new();
    assert_eq!(sentinels.decl().kind, DeclKind::Empty);
    assert_eq!(sentinels.stmt().kind, StmtKind::NullStmt);
    assert_eq!(sentinels.comment().kind, CommentKind::NoComment);
}

#[test]
fn test_raw_sentinel_pointer_matches_identity() {
    let mut b = AstBuilder::new("main.c");
    let body = b.compound(Vec::new(), b.range((1, 10), (1, 11)));
    let while_stmt = b.stmt(
        Stmt::new(StmtKind::WhileStmt, b.range((1, 1), (1, 11)))
            .with_slots(vec![None, None, Some(body)]),
    );
    let (ctx, _) = b.finish();

    let options = ExportOptions::new().with_identity_mode(IdentityMode::Raw);
    let doc = try_record_with(&ctx, &options, |e| e.stmt(while_stmt)).unwrap();
    let children = fields(&doc)[1].elements();
    let expected = Sentinels::identity(Family::Stmt).to_string();
    assert_eq!(pointer(&children[0]), Some(expected.as_str()));
    assert_eq!(pointer(&children[1]), Some(expected.as_str()));
    assert_ne!(pointer(&children[2]), Some(expected.as_str()));
}

#[test]
fn test_raw_decl_sentinel_pointer_matches_identity() {
    let (ctx, _) = AstBuilder::new("main.c").finish();
    let options = ExportOptions::new().with_identity_mode(IdentityMode::Raw);
    let doc = try_record_with(&ctx, &options, |e| e.opt_decl(None)).unwrap();
    assert_eq!(doc.tag(), Some("EmptyDecl"));
    let expected = Sentinels::identity(Family::Decl).to_string();
    assert_eq!(pointer(&doc), Some(expected.as_str()));
}
