use clast_ir::{DeclId, NodeRef, StmtId};

use super::*;

#[test]
fn test_dense_ids_in_first_seen_order() {
    let mut table = IdentityTable::new();
    let a = NodeRef::Decl(DeclId::new(7)).identity();
    let b = NodeRef::Stmt(StmtId::new(7)).identity();

    assert_eq!(table.intern(a), 0);
    assert_eq!(table.intern(b), 1);
    assert_eq!(table.intern(a), 0);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(b), Some(1));
}

#[test]
fn test_unseen_identity_has_no_id() {
    let table = IdentityTable::new();
    assert!(table.is_empty());
    assert_eq!(table.get(NodeIdentity::NULL), None);
}

#[test]
fn test_reset_restarts_numbering() {
    let mut table = IdentityTable::new();
    let a = NodeRef::Decl(DeclId::new(1)).identity();
    let b = NodeRef::Decl(DeclId::new(2)).identity();
    table.intern(a);
    table.intern(b);

    table.reset();

    assert!(table.is_empty());
    assert_eq!(table.intern(b), 0);
}

#[test]
fn test_render_modes() {
    let mut table = IdentityTable::new();
    let id = NodeRef::Decl(DeclId::new(1)).identity();

    assert_eq!(table.render(id, IdentityMode::Raw), id.to_string());
    assert!(table.is_empty(), "raw rendering does not touch the table");
    assert_eq!(table.render(NodeIdentity::NULL, IdentityMode::Raw), "0x0");

    assert_eq!(table.render(id, IdentityMode::Anonymized), "0");
    assert_eq!(table.render(NodeIdentity::NULL, IdentityMode::Anonymized), "1");
    assert_eq!(table.render(id, IdentityMode::Anonymized), "0");
}
