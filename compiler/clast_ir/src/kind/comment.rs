//! Documentation comment kinds.

define_kinds! {
    /// Documentation comment kinds. Variant tags are the kind names.
    pub enum CommentKind (Comment, suffix = "") {
        Comment: root [abstract],
        /// Kind of the comment sentinel.
        NoComment: Comment,
        InlineContentComment: Comment [abstract],
        TextComment: InlineContentComment,
        InlineCommandComment: InlineContentComment,
        HTMLTagComment: InlineContentComment [abstract],
        HTMLStartTagComment: HTMLTagComment,
        HTMLEndTagComment: HTMLTagComment,
        BlockContentComment: Comment [abstract],
        ParagraphComment: BlockContentComment,
        BlockCommandComment: BlockContentComment,
        ParamCommandComment: BlockCommandComment,
        TParamCommandComment: BlockCommandComment,
        VerbatimBlockComment: BlockCommandComment,
        VerbatimLineComment: BlockCommandComment,
        VerbatimBlockLineComment: Comment,
        FullComment: Comment,
    }
}
