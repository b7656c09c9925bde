use super::*;

fn check_family<K: NodeKind>() {
    let roots: Vec<K> = K::ALL.iter().copied().filter(|k| k.parent().is_none()).collect();
    assert_eq!(roots.len(), 1, "{:?} must have exactly one root", K::FAMILY);
    let root = roots[0];
    assert!(root.is_abstract());

    for &kind in K::ALL {
        assert!(kind.inherits_from(root), "{kind:?} does not reach the root");
        assert!(
            kind.depth() < K::ALL.len(),
            "{kind:?} parent chain does not terminate"
        );
        if let Some(parent) = kind.parent() {
            assert!(
                parent.is_abstract() || !kind.is_abstract(),
                "abstract {kind:?} below concrete {parent:?}"
            );
        }
    }
}

fn check_unique_names<K: NodeKind>() {
    for (i, a) in K::ALL.iter().enumerate() {
        for b in &K::ALL[i + 1..] {
            assert_ne!(a.name(), b.name());
            assert_ne!(a.variant_tag(), b.variant_tag());
        }
    }
}

#[test]
fn test_every_kind_reaches_its_root() {
    check_family::<DeclKind>();
    check_family::<StmtKind>();
    check_family::<TypeKind>();
    check_family::<CommentKind>();
}

#[test]
fn test_names_and_tags_are_unique() {
    check_unique_names::<DeclKind>();
    check_unique_names::<StmtKind>();
    check_unique_names::<TypeKind>();
    check_unique_names::<CommentKind>();
}

#[test]
fn test_variant_tags() {
    assert_eq!(DeclKind::Function.variant_tag(), "FunctionDecl");
    assert_eq!(DeclKind::CXXRecord.variant_tag(), "CXXRecordDecl");
    assert_eq!(DeclKind::Function.name(), "Function");
    assert_eq!(StmtKind::IfStmt.variant_tag(), "IfStmt");
    assert_eq!(TypeKind::Pointer.variant_tag(), "PointerType");
    assert_eq!(TypeKind::None.variant_tag(), "NoneType");
    assert_eq!(CommentKind::TextComment.variant_tag(), "TextComment");
    assert_eq!(DeclKind::Var.to_string(), "VarDecl");
}

#[test]
fn test_lookup_by_name_and_tag() {
    assert_eq!(DeclKind::from_name("Typedef"), Some(DeclKind::Typedef));
    assert_eq!(DeclKind::from_variant_tag("TypedefDecl"), Some(DeclKind::Typedef));
    assert_eq!(StmtKind::from_name("NoSuchStmt"), None);
    assert_eq!(TypeKind::from_variant_tag("Pointer"), None);
}

#[test]
fn test_parent_chains() {
    assert_eq!(DeclKind::CXXRecord.parent(), Some(DeclKind::Record));
    assert_eq!(DeclKind::Record.parent(), Some(DeclKind::Tag));
    assert_eq!(DeclKind::Decl.parent(), None);
    assert!(DeclKind::ParmVar.inherits_from(DeclKind::Value));
    assert!(!DeclKind::Typedef.inherits_from(DeclKind::Value));
    assert!(StmtKind::CXXStaticCastExpr.inherits_from(StmtKind::CXXNamedCastExpr));
    assert!(StmtKind::CompoundAssignOperator.is_expr());
    assert!(!StmtKind::IfStmt.is_expr());
    assert_eq!(StmtKind::CXXStaticCastExpr.depth(), 5);
}

#[test]
fn test_abstract_kinds() {
    assert!(DeclKind::Named.is_abstract());
    assert!(DeclKind::TypedefName.is_abstract());
    assert!(!DeclKind::Empty.is_abstract());
    assert!(StmtKind::Expr.is_abstract());
    assert!(TypeKind::Array.is_abstract());
    assert!(!TypeKind::None.is_abstract());
    assert!(CommentKind::HTMLTagComment.is_abstract());
}

#[test]
fn test_decl_context_kinds() {
    assert!(DeclKind::TranslationUnit.is_decl_context());
    assert!(DeclKind::CXXRecord.is_decl_context());
    assert!(DeclKind::ObjCCategoryImpl.is_decl_context());
    assert!(!DeclKind::Function.is_decl_context());
    assert!(!DeclKind::Var.is_decl_context());
}
