//! Statement and expression kinds.

define_kinds! {
    /// Statement kinds, expressions included. Variant tags are the kind names.
    pub enum StmtKind (Stmt, suffix = "") {
        Stmt: root [abstract],
        /// Also the kind of the statement sentinel.
        NullStmt: Stmt,
        CompoundStmt: Stmt,
        LabelStmt: Stmt,
        AttributedStmt: Stmt,
        IfStmt: Stmt,
        SwitchStmt: Stmt,
        WhileStmt: Stmt,
        DoStmt: Stmt,
        ForStmt: Stmt,
        GotoStmt: Stmt,
        IndirectGotoStmt: Stmt,
        ContinueStmt: Stmt,
        BreakStmt: Stmt,
        ReturnStmt: Stmt,
        DeclStmt: Stmt,
        SwitchCase: Stmt [abstract],
        CaseStmt: SwitchCase,
        DefaultStmt: SwitchCase,
        CapturedStmt: Stmt,
        AsmStmt: Stmt [abstract],
        GCCAsmStmt: AsmStmt,
        MSAsmStmt: AsmStmt,
        ObjCAtTryStmt: Stmt,
        ObjCAtCatchStmt: Stmt,
        ObjCAtFinallyStmt: Stmt,
        ObjCAtThrowStmt: Stmt,
        ObjCAtSynchronizedStmt: Stmt,
        ObjCForCollectionStmt: Stmt,
        ObjCAutoreleasePoolStmt: Stmt,
        CXXCatchStmt: Stmt,
        CXXTryStmt: Stmt,
        CXXForRangeStmt: Stmt,
        SEHTryStmt: Stmt,
        SEHExceptStmt: Stmt,
        SEHFinallyStmt: Stmt,
        SEHLeaveStmt: Stmt,
        MSDependentExistsStmt: Stmt,
        Expr: Stmt [abstract],
        PredefinedExpr: Expr,
        DeclRefExpr: Expr,
        IntegerLiteral: Expr,
        FloatingLiteral: Expr,
        ImaginaryLiteral: Expr,
        StringLiteral: Expr,
        CharacterLiteral: Expr,
        ParenExpr: Expr,
        UnaryOperator: Expr,
        OffsetOfExpr: Expr,
        UnaryExprOrTypeTraitExpr: Expr,
        ArraySubscriptExpr: Expr,
        CallExpr: Expr,
        CXXMemberCallExpr: CallExpr,
        CXXOperatorCallExpr: CallExpr,
        UserDefinedLiteral: CallExpr,
        CUDAKernelCallExpr: CallExpr,
        MemberExpr: Expr,
        CastExpr: Expr [abstract],
        ImplicitCastExpr: CastExpr,
        ExplicitCastExpr: CastExpr [abstract],
        CStyleCastExpr: ExplicitCastExpr,
        CXXFunctionalCastExpr: ExplicitCastExpr,
        CXXNamedCastExpr: ExplicitCastExpr [abstract],
        CXXStaticCastExpr: CXXNamedCastExpr,
        CXXDynamicCastExpr: CXXNamedCastExpr,
        CXXReinterpretCastExpr: CXXNamedCastExpr,
        CXXConstCastExpr: CXXNamedCastExpr,
        ObjCBridgedCastExpr: ExplicitCastExpr,
        BinaryOperator: Expr,
        CompoundAssignOperator: BinaryOperator,
        AbstractConditionalOperator: Expr [abstract],
        ConditionalOperator: AbstractConditionalOperator,
        BinaryConditionalOperator: AbstractConditionalOperator,
        CompoundLiteralExpr: Expr,
        ExtVectorElementExpr: Expr,
        InitListExpr: Expr,
        DesignatedInitExpr: Expr,
        ImplicitValueInitExpr: Expr,
        ParenListExpr: Expr,
        VAArgExpr: Expr,
        GenericSelectionExpr: Expr,
        PseudoObjectExpr: Expr,
        AtomicExpr: Expr,
        AddrLabelExpr: Expr,
        StmtExpr: Expr,
        ChooseExpr: Expr,
        GNUNullExpr: Expr,
        CXXBoolLiteralExpr: Expr,
        CXXNullPtrLiteralExpr: Expr,
        CXXThisExpr: Expr,
        CXXThrowExpr: Expr,
        CXXDefaultArgExpr: Expr,
        CXXDefaultInitExpr: Expr,
        CXXScalarValueInitExpr: Expr,
        CXXStdInitializerListExpr: Expr,
        CXXNewExpr: Expr,
        CXXDeleteExpr: Expr,
        CXXPseudoDestructorExpr: Expr,
        TypeTraitExpr: Expr,
        ArrayTypeTraitExpr: Expr,
        ExpressionTraitExpr: Expr,
        DependentScopeDeclRefExpr: Expr,
        CXXConstructExpr: Expr,
        CXXTemporaryObjectExpr: CXXConstructExpr,
        CXXBindTemporaryExpr: Expr,
        ExprWithCleanups: Expr,
        CXXUnresolvedConstructExpr: Expr,
        CXXDependentScopeMemberExpr: Expr,
        OverloadExpr: Expr [abstract],
        UnresolvedLookupExpr: OverloadExpr,
        UnresolvedMemberExpr: OverloadExpr,
        CXXNoexceptExpr: Expr,
        PackExpansionExpr: Expr,
        SizeOfPackExpr: Expr,
        SubstNonTypeTemplateParmExpr: Expr,
        SubstNonTypeTemplateParmPackExpr: Expr,
        FunctionParmPackExpr: Expr,
        MaterializeTemporaryExpr: Expr,
        LambdaExpr: Expr,
        CXXFoldExpr: Expr,
        CXXUuidofExpr: Expr,
        CXXTypeidExpr: Expr,
        ObjCStringLiteral: Expr,
        ObjCBoxedExpr: Expr,
        ObjCArrayLiteral: Expr,
        ObjCDictionaryLiteral: Expr,
        ObjCEncodeExpr: Expr,
        ObjCMessageExpr: Expr,
        ObjCSelectorExpr: Expr,
        ObjCProtocolExpr: Expr,
        ObjCIvarRefExpr: Expr,
        ObjCPropertyRefExpr: Expr,
        ObjCIsaExpr: Expr,
        ObjCIndirectCopyRestoreExpr: Expr,
        ObjCBoolLiteralExpr: Expr,
        ObjCSubscriptRefExpr: Expr,
        ShuffleVectorExpr: Expr,
        ConvertVectorExpr: Expr,
        BlockExpr: Expr,
        OpaqueValueExpr: Expr,
        TypoExpr: Expr,
        AsTypeExpr: Expr,
    }
}

impl StmtKind {
    /// `true` for expression kinds (which carry an expression facet).
    pub fn is_expr(self) -> bool {
        crate::kind::NodeKind::inherits_from(self, StmtKind::Expr)
    }
}
