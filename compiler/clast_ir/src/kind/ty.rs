//! Type kinds.

define_kinds! {
    /// Type kinds. Variant tags carry a `Type` suffix.
    pub enum TypeKind (Type, suffix = "Type") {
        Type: root [abstract],
        /// The dedicated absent-type variant (`NoneType`).
        None: Type,
        Builtin: Type,
        Complex: Type,
        Pointer: Type,
        BlockPointer: Type,
        Reference: Type [abstract],
        LValueReference: Reference,
        RValueReference: Reference,
        MemberPointer: Type,
        Array: Type [abstract],
        ConstantArray: Array,
        IncompleteArray: Array,
        VariableArray: Array,
        DependentSizedArray: Array,
        DependentSizedExtVector: Type,
        Vector: Type,
        ExtVector: Vector,
        Function: Type [abstract],
        FunctionProto: Function,
        FunctionNoProto: Function,
        UnresolvedUsing: Type,
        Paren: Type,
        Typedef: Type,
        Adjusted: Type,
        Decayed: Adjusted,
        TypeOfExpr: Type,
        TypeOf: Type,
        Decltype: Type,
        UnaryTransform: Type,
        Tag: Type [abstract],
        Record: Tag,
        Enum: Tag,
        Elaborated: Type,
        Attributed: Type,
        TemplateTypeParm: Type,
        SubstTemplateTypeParm: Type,
        SubstTemplateTypeParmPack: Type,
        TemplateSpecialization: Type,
        Auto: Type,
        InjectedClassName: Type,
        DependentName: Type,
        DependentTemplateSpecialization: Type,
        PackExpansion: Type,
        ObjCObject: Type,
        ObjCInterface: ObjCObject,
        ObjCObjectPointer: Type,
        Atomic: Type,
    }
}
