//! Documentation comment nodes.

use crate::ids::CommentId;
use crate::kind::CommentKind;
use crate::location::SourceRange;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    pub kind: CommentKind,
    pub range: SourceRange,
    /// Ordered children; `None` marks an absent required slot.
    pub children: Vec<Option<CommentId>>,
    pub data: CommentData,
}

impl Comment {
    pub fn new(kind: CommentKind, range: SourceRange) -> Self {
        Comment {
            kind,
            range,
            children: Vec::new(),
            data: CommentData::None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = CommentId>) -> Self {
        self.children = children.into_iter().map(Some).collect();
        self
    }

    #[must_use]
    pub fn with_slots(mut self, children: Vec<Option<CommentId>>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: CommentData) -> Self {
        self.data = data;
        self
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RenderKind {
    #[default]
    Normal,
    Bold,
    Monospaced,
    Emphasized,
}

impl RenderKind {
    pub const fn name(self) -> &'static str {
        match self {
            RenderKind::Normal => "Normal",
            RenderKind::Bold => "Bold",
            RenderKind::Monospaced => "Monospaced",
            RenderKind::Emphasized => "Emphasized",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParamDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl ParamDirection {
    pub const fn name(self) -> &'static str {
        match self {
            ParamDirection::In => "In",
            ParamDirection::Out => "Out",
            ParamDirection::InOut => "InOut",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HtmlAttribute {
    pub name: String,
    pub value: String,
}

/// Leaf payload of a comment, keyed by the level that emits it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CommentData {
    #[default]
    None,
    /// `TextComment`, `VerbatimBlockLineComment`: the text.
    Text(String),
    InlineCommand {
        name: String,
        render: RenderKind,
        args: Vec<String>,
    },
    HtmlStartTag {
        tag: String,
        attributes: Vec<HtmlAttribute>,
        self_closing: bool,
    },
    HtmlEndTag { tag: String },
    /// Block command payload; the variants below extend it.
    BlockCommand(BlockCommandInfo),
    ParamCommand {
        command: BlockCommandInfo,
        direction: ParamDirection,
        explicit_direction: bool,
        param_name: Option<String>,
        param_index: Option<u32>,
    },
    TParamCommand {
        command: BlockCommandInfo,
        param_name: Option<String>,
        position: Vec<u32>,
    },
    VerbatimBlock {
        command: BlockCommandInfo,
        close_name: String,
    },
    VerbatimLine {
        command: BlockCommandInfo,
        text: String,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockCommandInfo {
    pub name: String,
    pub args: Vec<String>,
}

impl CommentData {
    /// Block command fields shared by every block command variant.
    pub fn block_command(&self) -> Option<&BlockCommandInfo> {
        match self {
            CommentData::BlockCommand(command)
            | CommentData::ParamCommand { command, .. }
            | CommentData::TParamCommand { command, .. }
            | CommentData::VerbatimBlock { command, .. }
            | CommentData::VerbatimLine { command, .. } => Some(command),
            _ => None,
        }
    }

    /// Tag name shared by HTML start and end tags.
    pub fn html_tag(&self) -> Option<&str> {
        match self {
            CommentData::HtmlStartTag { tag, .. } | CommentData::HtmlEndTag { tag } => Some(tag),
            _ => None,
        }
    }
}
