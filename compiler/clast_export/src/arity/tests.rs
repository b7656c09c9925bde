use pretty_assertions::assert_eq;

use super::*;

fn check_recurrence<K: Arity>() {
    for &kind in K::ALL {
        let expected = kind.parent().map_or(0, Arity::tuple_size) + kind.own_field_count();
        assert_eq!(kind.tuple_size(), expected, "{kind:?}");
    }
}

#[test]
fn test_tuple_size_recurrence_holds_for_every_kind() {
    check_recurrence::<DeclKind>();
    check_recurrence::<StmtKind>();
    check_recurrence::<TypeKind>();
    check_recurrence::<CommentKind>();
}

#[test]
fn test_root_sizes() {
    assert_eq!(DeclKind::Decl.tuple_size(), 1);
    assert_eq!(StmtKind::Stmt.tuple_size(), 2);
    assert_eq!(TypeKind::Type.tuple_size(), 1);
    assert_eq!(CommentKind::Comment.tuple_size(), 2);
}

#[test]
fn test_sentinel_kinds_carry_only_root_fields() {
    assert_eq!(DeclKind::Empty.tuple_size(), 1);
    assert_eq!(StmtKind::NullStmt.tuple_size(), 2);
    assert_eq!(CommentKind::NoComment.tuple_size(), 2);
    assert_eq!(TypeKind::None.tuple_size(), 1);
}

#[test]
fn test_decl_sizes_follow_the_parent_chain() {
    // decl_info | decls, storage | named | opt_type, type_ptr | record info
    assert_eq!(DeclKind::Record.tuple_size(), 7);
    // ... | cxx record info
    assert_eq!(DeclKind::CXXRecord.tuple_size(), 8);
    // decl_info | named | qual_type | function info
    assert_eq!(DeclKind::Function.tuple_size(), 4);
    assert_eq!(DeclKind::CXXConstructor.tuple_size(), 4);
    assert_eq!(DeclKind::ParmVar.tuple_size(), 4);
    // decl_info | decls, storage, types
    assert_eq!(DeclKind::TranslationUnit.tuple_size(), 4);
    assert_eq!(DeclKind::Namespace.tuple_size(), 5);
}

#[test]
fn test_stmt_sizes_follow_the_parent_chain() {
    assert_eq!(StmtKind::CompoundStmt.tuple_size(), 2);
    assert_eq!(StmtKind::ParenExpr.tuple_size(), 3);
    assert_eq!(StmtKind::ImplicitCastExpr.tuple_size(), 4);
    assert_eq!(StmtKind::CStyleCastExpr.tuple_size(), 5);
    assert_eq!(StmtKind::CXXStaticCastExpr.tuple_size(), 6);
    assert_eq!(StmtKind::CompoundAssignOperator.tuple_size(), 5);
}

#[test]
fn test_type_and_comment_sizes() {
    assert_eq!(TypeKind::ConstantArray.tuple_size(), 3);
    assert_eq!(TypeKind::LValueReference.tuple_size(), 2);
    assert_eq!(TypeKind::ObjCInterface.tuple_size(), 3);
    assert_eq!(CommentKind::ParamCommandComment.tuple_size(), 4);
    assert_eq!(CommentKind::HTMLEndTagComment.tuple_size(), 3);
}

#[test]
fn test_lookup_by_name_and_tag() {
    assert_eq!(tuple_size_of(Family::Decl, "Record").unwrap(), 7);
    assert_eq!(tuple_size_of(Family::Decl, "RecordDecl").unwrap(), 7);
    assert_eq!(tuple_size_of(Family::Type, "PointerType").unwrap(), 2);
    assert_eq!(tuple_size_of(Family::Stmt, "IfStmt").unwrap(), 2);
    assert_eq!(tuple_size_of(Family::Comment, "TextComment").unwrap(), 3);
}

#[test]
fn test_unknown_kind_is_an_error() {
    let err = tuple_size_of(Family::Stmt, "CoroutineBodyStmt").unwrap_err();
    assert!(matches!(
        err,
        ExportError::UnknownKind { family: Family::Stmt, ref name } if name == "CoroutineBodyStmt"
    ));
}

#[test]
fn test_array_arity_sums_tuples() {
    let arity = array_arity([StmtKind::CompoundStmt, StmtKind::IntegerLiteral, StmtKind::NullStmt]);
    assert_eq!(
        arity,
        ArrayArity {
            elements: 3,
            fields: 2 + 4 + 2,
        }
    );
    assert_eq!(array_arity(std::iter::empty::<DeclKind>()), ArrayArity::default());
}
