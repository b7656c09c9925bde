use pretty_assertions::assert_eq;

use super::*;
use crate::comment::{Comment, CommentData};
use crate::kind::{CommentKind, StmtKind};
use crate::location::SourceRange;
use crate::qual_type::QualType;
use crate::ty::BuiltinKind;
use crate::AstBuilder;

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl<'ast> Visitor<'ast> for Recorder {
    fn visit_decl(&mut self, _id: DeclId, decl: &'ast Decl, ctx: &'ast AstContext) {
        self.events.push(format!("decl {} {}", decl.kind, decl.name_str()));
        walk_decl(self, decl, ctx);
    }

    fn visit_stmt(&mut self, _id: StmtId, stmt: &'ast Stmt, ctx: &'ast AstContext) {
        self.events.push(format!("stmt {}", stmt.kind));
        walk_stmt(self, stmt, ctx);
    }

    fn visit_type(&mut self, _id: TypeId, ty: &'ast Type, _ctx: &'ast AstContext) {
        self.events.push(format!("type {}", ty.raw));
    }

    fn visit_comment(&mut self, _id: CommentId, comment: &'ast Comment, ctx: &'ast AstContext) {
        self.events.push(format!("comment {}", comment.kind));
        walk_comment(self, comment, ctx);
    }
}

#[test]
fn test_walk_order_matches_definitions() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let fn_ty = b.function_type(int, &[]);
    let one = b.int_literal(1, b.range((2, 13), (2, 13)));
    let local = b.local_var("y", QualType::new(int), Some(one), b.range((2, 5), (2, 13)));
    let decl_stmt = b.decl_stmt(vec![local], b.range((2, 5), (2, 14)));
    let y = b.decl_ref(local, b.range((3, 12), (3, 12)));
    let ret = b.return_stmt(Some(y), b.range((3, 5), (3, 13)));
    let body = b.compound(vec![decl_stmt, ret], b.range((1, 9), (4, 1)));
    b.function(tu, "f", fn_ty, Vec::new(), Some(body), b.range((1, 1), (4, 1)));
    let (ctx, root) = b.finish();

    let mut recorder = Recorder::default();
    walk_translation_unit(&mut recorder, root, &ctx);

    assert_eq!(
        recorder.events,
        vec![
            "decl TranslationUnitDecl ",
            "decl FunctionDecl f",
            "stmt CompoundStmt",
            "stmt DeclStmt",
            "decl VarDecl y",
            "stmt IntegerLiteral",
            "stmt ReturnStmt",
            "stmt DeclRefExpr",
            "type int",
            "type int ()",
        ]
    );
}

#[test]
fn test_reference_links_are_not_followed() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let global = b.var(tu, "g", QualType::new(int), None, b.range((1, 1), (1, 6)));
    // A reference to `g` that is never placed in a definitional position.
    b.decl_ref(global, b.range((2, 1), (2, 1)));
    let (ctx, root) = b.finish();

    let mut recorder = Recorder::default();
    walk_translation_unit(&mut recorder, root, &ctx);

    let decls = recorder.events.iter().filter(|e| e.starts_with("decl ")).count();
    let stmts = recorder.events.iter().filter(|e| e.starts_with("stmt ")).count();
    assert_eq!(decls, 2);
    assert_eq!(stmts, 0);
}

#[test]
fn test_full_comment_is_walked_before_children() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let ctx = b.ctx_mut();
    let text = ctx.alloc_comment(
        Comment::new(CommentKind::TextComment, SourceRange::INVALID)
            .with_data(CommentData::Text(" doc".into())),
    );
    let paragraph = ctx.alloc_comment(
        Comment::new(CommentKind::ParagraphComment, SourceRange::INVALID).with_children([text]),
    );
    let full = ctx.alloc_comment(
        Comment::new(CommentKind::FullComment, SourceRange::INVALID)
            .with_slots(vec![Some(paragraph), None]),
    );
    let (record, _) = b.record(tu, "s", b.range((2, 1), (2, 12)));
    b.ctx_mut().decl_mut(record).full_comment = Some(full);
    let (ctx, root) = b.finish();

    let mut recorder = Recorder::default();
    walk_translation_unit(&mut recorder, root, &ctx);

    assert_eq!(
        &recorder.events[1..5],
        &[
            "decl RecordDecl s",
            "comment FullComment",
            "comment ParagraphComment",
            "comment TextComment",
        ]
    );
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let mut b = AstBuilder::new("main.c");
    let tu = b.translation_unit();
    let int = b.builtin(BuiltinKind::Int);
    let fn_ty = b.function_type(int, &[]);
    let mut inner = b.stmt(Stmt::new(StmtKind::NullStmt, SourceRange::INVALID));
    for _ in 0..20_000 {
        inner = b.compound(vec![inner], SourceRange::INVALID);
    }
    b.function(tu, "deep", fn_ty, Vec::new(), Some(inner), SourceRange::INVALID);
    let (ctx, root) = b.finish();

    let mut recorder = Recorder::default();
    walk_translation_unit(&mut recorder, root, &ctx);
    let stmts = recorder.events.iter().filter(|e| e.starts_with("stmt ")).count();
    assert_eq!(stmts, 20_001);
}
