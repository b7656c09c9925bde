//! Declaration kinds.

define_kinds! {
    /// Declaration kinds. Variant tags carry a `Decl` suffix.
    pub enum DeclKind (Decl, suffix = "Decl") {
        Decl: root [abstract],
        AccessSpec: Decl,
        Block: Decl,
        Captured: Decl,
        ClassScopeFunctionSpecialization: Decl,
        /// Also the kind of the declaration sentinel.
        Empty: Decl,
        FileScopeAsm: Decl,
        Friend: Decl,
        FriendTemplate: Decl,
        Import: Decl,
        LinkageSpec: Decl,
        Named: Decl [abstract],
        Label: Named,
        Namespace: Named,
        NamespaceAlias: Named,
        ObjCCompatibleAlias: Named,
        ObjCContainer: Named [abstract],
        ObjCCategory: ObjCContainer,
        ObjCImpl: ObjCContainer [abstract],
        ObjCCategoryImpl: ObjCImpl,
        ObjCImplementation: ObjCImpl,
        ObjCInterface: ObjCContainer,
        ObjCProtocol: ObjCContainer,
        ObjCMethod: Named,
        ObjCProperty: Named,
        Template: Named [abstract],
        ClassTemplate: Template,
        FunctionTemplate: Template,
        TypeAliasTemplate: Template,
        VarTemplate: Template,
        TemplateTemplateParm: Template,
        Type: Named [abstract],
        Tag: Type [abstract],
        Enum: Tag,
        Record: Tag,
        CXXRecord: Record,
        ClassTemplateSpecialization: CXXRecord,
        ClassTemplatePartialSpecialization: ClassTemplateSpecialization,
        TemplateTypeParm: Type,
        TypedefName: Type [abstract],
        TypeAlias: TypedefName,
        Typedef: TypedefName,
        UnresolvedUsingTypename: Type,
        Using: Named,
        UsingDirective: Named,
        UsingShadow: Named,
        Value: Named [abstract],
        Declarator: Value [abstract],
        Field: Declarator,
        ObjCAtDefsField: Field,
        ObjCIvar: Field,
        Function: Declarator,
        CXXMethod: Function,
        CXXConstructor: CXXMethod,
        CXXConversion: CXXMethod,
        CXXDestructor: CXXMethod,
        MSProperty: Declarator,
        NonTypeTemplateParm: Declarator,
        Var: Declarator,
        ImplicitParam: Var,
        ParmVar: Var,
        VarTemplateSpecialization: Var,
        VarTemplatePartialSpecialization: VarTemplateSpecialization,
        EnumConstant: Value,
        IndirectField: Value,
        UnresolvedUsingValue: Value,
        ObjCPropertyImpl: Decl,
        StaticAssert: Decl,
        TranslationUnit: Decl,
    }
}

impl DeclKind {
    /// Kinds whose nodes own a list of child declarations.
    pub fn is_decl_context(self) -> bool {
        use crate::kind::NodeKind;
        matches!(
            self,
            DeclKind::Block
                | DeclKind::Captured
                | DeclKind::LinkageSpec
                | DeclKind::Namespace
                | DeclKind::TranslationUnit
        ) || self.inherits_from(DeclKind::ObjCContainer)
            || self.inherits_from(DeclKind::Tag)
    }
}
