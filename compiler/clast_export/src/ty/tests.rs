use clast_ir::{
    AstBuilder, BuiltinKind, Decl, DeclKind, DeclName, SourceRange, Type, TypeData, TypeKind,
};
use clast_writer::Value;
use pretty_assertions::assert_eq;

use crate::test_helpers::{fields, record, try_record};
use crate::ExportError;

#[test]
fn test_pointer_refers_to_pointee() {
    let mut b = AstBuilder::new("main.c");
    let int = b.builtin(BuiltinKind::Int);
    let ptr = b.pointer_to(int);
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.type_list());
    let types = doc.elements();
    assert_eq!(types.len(), 3);

    let pointer = &types[1];
    assert_eq!(pointer.tag(), Some("PointerType"));
    let tuple = fields(pointer);
    assert_eq!(tuple.len(), 2);
    assert_eq!(tuple[0].field("raw").and_then(Value::as_str), Some("int *"));
    let pointee = fields(&types[0])[0].field("pointer").unwrap();
    assert_eq!(&tuple[1], pointee);
    assert_eq!(ctx.ty(ptr).kind, TypeKind::Pointer);
}

#[test]
fn test_builtin_kind_is_simple_variant() {
    let mut b = AstBuilder::new("main.c");
    b.builtin(BuiltinKind::UInt);
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.type_list());
    let builtin = &doc.elements()[0];
    assert_eq!(
        fields(builtin)[1],
        Value::SimpleVariant("UInt".to_owned())
    );
}

#[test]
fn test_none_type_closes_list_with_null_pointer() {
    let mut b = AstBuilder::new("main.c");
    b.ctx_mut().alloc_type(
        Type::new(TypeKind::Pointer, "void *").with_data(TypeData::Child(None)),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.type_list());
    let types = doc.elements();
    let none = types.last().unwrap();
    assert_eq!(none.tag(), Some("NoneType"));
    let info = &fields(none)[0];
    assert_eq!(info.field_names(), vec!["pointer", "raw"]);
    assert_eq!(info.field("raw").and_then(Value::as_str), Some(""));
    // The absent pointee and the NoneType entry share the null identity.
    assert_eq!(Some(&fields(&types[0])[1]), info.field("pointer"));
}

#[test]
fn test_function_proto_levels() {
    let mut b = AstBuilder::new("main.c");
    let int = b.builtin(BuiltinKind::Int);
    let double = b.builtin(BuiltinKind::Double);
    let with_params = b.function_type(int, &[double, double]);
    let without_params = b.function_type(int, &[]);
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.type_list());
    let types = doc.elements();
    let proto = fields(&types[with_params.index()]);
    assert_eq!(proto.len(), 3);
    assert_eq!(proto[1].field_names(), vec!["return_type"]);
    assert_eq!(proto[2].field("params_type").unwrap().elements().len(), 2);

    let empty = fields(&types[without_params.index()]);
    assert_eq!(empty[2], Value::Object(Vec::new()));
}

#[test]
fn test_typedef_with_desugared_type() {
    let mut b = AstBuilder::new("main.c");
    let uint = b.builtin(BuiltinKind::UInt);
    let decl = b.ctx_mut().alloc_decl(
        Decl::new(DeclKind::Typedef, SourceRange::INVALID).with_name(DeclName::simple("u32")),
    );
    let typedef = b.ctx_mut().alloc_type(
        Type::new(TypeKind::Typedef, "u32")
            .with_desugared(uint)
            .with_data(TypeData::Typedef {
                child: Some(uint),
                decl,
            }),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.type_list());
    let tuple = fields(&doc.elements()[typedef.index()]);
    assert_eq!(
        tuple[0].field_names(),
        vec!["pointer", "raw", "desugared_type"]
    );
    assert_eq!(tuple[1].field_names(), vec!["child_type", "decl_ptr"]);
    assert_eq!(
        tuple[0].field("desugared_type"),
        tuple[1].field("child_type")
    );
}

#[test]
fn test_constant_array_size() {
    let mut b = AstBuilder::new("main.c");
    let char_ty = b.builtin(BuiltinKind::CharS);
    let array = b.ctx_mut().alloc_type(
        Type::new(TypeKind::ConstantArray, "char [16]").with_data(TypeData::ConstantArray {
            element: Some(char_ty),
            size: 16,
        }),
    );
    let (ctx, _) = b.finish();

    let doc = record(&ctx, |e| e.type_list());
    let tuple = fields(&doc.elements()[array.index()]);
    assert_eq!(tuple.len(), 3);
    assert_eq!(tuple[2].as_integer(), Some(16));
}

#[test]
fn test_child_kind_without_child_is_rejected() {
    let mut b = AstBuilder::new("main.c");
    b.ctx_mut()
        .alloc_type(Type::new(TypeKind::Pointer, "int *"));
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.type_list()).unwrap_err();
    assert!(matches!(
        err,
        ExportError::MissingPayload {
            kind: "PointerType",
            ..
        }
    ));
}

#[test]
fn test_abstract_type_kind_is_rejected() {
    let mut b = AstBuilder::new("main.c");
    b.ctx_mut().alloc_type(Type::new(TypeKind::Tag, "struct s"));
    let (ctx, _) = b.finish();

    let err = try_record(&ctx, |e| e.type_list()).unwrap_err();
    assert!(matches!(
        err,
        ExportError::AbstractKind {
            name: "TagType",
            ..
        }
    ));
}
