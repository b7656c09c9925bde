//! Documentation comment dispatcher.
//!
//! Comments are defined once, under the `full_comment` field of the
//! declaration they document. The layout mirrors statements: the root
//! level carries `comment_info` and the ordered children, with the comment
//! sentinel standing in for absent children.

use clast_ir::stack::ensure_sufficient_stack;
use clast_ir::{Comment, CommentData, CommentId, CommentKind, Family, NodeKind, NodeRef};
use clast_writer::DocumentWriter;
use smallvec::SmallVec;
use tracing::trace;

use crate::arity::{array_arity, Arity};
use crate::exporter::{count, missing, ExportResult, Exporter};
use crate::ExportError;

impl<W: DocumentWriter + ?Sized> Exporter<'_, W> {
    /// Define the comment `id`.
    pub(crate) fn comment(&mut self, id: CommentId) -> ExportResult {
        let comment = self.comment_at(id)?;
        self.comment_node(NodeRef::Comment(id), comment)
    }

    fn opt_comment(&mut self, id: Option<CommentId>) -> ExportResult {
        match id {
            Some(id) => self.comment(id),
            None => {
                let sentinels = self.sentinels;
                self.comment_node(NodeRef::Sentinel(Family::Comment), sentinels.comment())
            }
        }
    }

    fn comment_node(&mut self, node: NodeRef, comment: &Comment) -> ExportResult {
        if comment.kind.is_abstract() {
            return Err(ExportError::AbstractKind {
                family: Family::Comment,
                name: comment.kind.variant_tag(),
            });
        }
        trace!(kind = %comment.kind, "comment");
        ensure_sufficient_stack(|| {
            self.out.begin_variant(comment.kind.variant_tag())?;
            self.out.begin_tuple(comment.kind.tuple_size())?;
            self.comment_fields(comment.kind, node, comment)?;
            self.end()?;
            self.end()
        })
    }

    fn comment_fields(
        &mut self,
        level: CommentKind,
        node: NodeRef,
        comment: &Comment,
    ) -> ExportResult {
        if let Some(parent) = level.parent() {
            self.comment_fields(parent, node, comment)?;
        }
        self.own_comment_fields(level, node, comment)
    }

    fn own_comment_fields(
        &mut self,
        level: CommentKind,
        node: NodeRef,
        comment: &Comment,
    ) -> ExportResult {
        let kind = comment.kind;
        match level {
            CommentKind::Comment => {
                self.out.begin_object(2)?;
                self.pointer_field("pointer", node)?;
                self.field("source_range")?;
                self.source_range(comment.range)?;
                self.end()?;

                let kinds = comment
                    .children
                    .iter()
                    .map(|child| match *child {
                        Some(id) => self.comment_at(id).map(|child| child.kind),
                        None => Ok(CommentKind::NoComment),
                    })
                    .collect::<ExportResult<SmallVec<[CommentKind; 8]>>>()?;
                let arity = array_arity(kinds);
                self.out.begin_array(arity.elements)?;
                for &child in &comment.children {
                    self.opt_comment(child)?;
                }
                self.end()
            }
            CommentKind::TextComment | CommentKind::VerbatimBlockLineComment => {
                match &comment.data {
                    CommentData::Text(text) => self.string(text),
                    _ => Err(missing(kind, "text")),
                }
            }
            CommentKind::InlineCommandComment => {
                let CommentData::InlineCommand { name, render, args } = &comment.data else {
                    return Err(missing(kind, "inline command"));
                };
                self.out.begin_object(2 + usize::from(!args.is_empty()))?;
                self.string_field("name", name)?;
                self.simple_variant_field("render_kind", render.name())?;
                if !args.is_empty() {
                    self.field("args")?;
                    self.string_list(args)?;
                }
                self.end()
            }
            CommentKind::HTMLTagComment => {
                let tag = comment
                    .data
                    .html_tag()
                    .ok_or_else(|| missing(kind, "tag name"))?;
                self.string(tag)
            }
            CommentKind::HTMLStartTagComment => {
                let CommentData::HtmlStartTag {
                    attributes,
                    self_closing,
                    ..
                } = &comment.data
                else {
                    return Err(missing(kind, "start tag"));
                };
                self.out
                    .begin_object(count(&[!attributes.is_empty(), *self_closing]))?;
                if !attributes.is_empty() {
                    self.field("attributes")?;
                    self.out.begin_array(attributes.len())?;
                    for attribute in attributes {
                        self.out.begin_object(2)?;
                        self.string_field("name", &attribute.name)?;
                        self.string_field("value", &attribute.value)?;
                        self.end()?;
                    }
                    self.end()?;
                }
                self.flag("is_self_closing", *self_closing)?;
                self.end()
            }
            CommentKind::BlockCommandComment => {
                let command = comment
                    .data
                    .block_command()
                    .ok_or_else(|| missing(kind, "block command"))?;
                self.out
                    .begin_object(1 + usize::from(!command.args.is_empty()))?;
                self.string_field("name", &command.name)?;
                if !command.args.is_empty() {
                    self.field("args")?;
                    self.string_list(&command.args)?;
                }
                self.end()
            }
            CommentKind::ParamCommandComment => {
                let CommentData::ParamCommand {
                    direction,
                    explicit_direction,
                    param_name,
                    param_index,
                    ..
                } = &comment.data
                else {
                    return Err(missing(kind, "parameter command"));
                };
                self.out.begin_object(
                    1 + count(&[
                        *explicit_direction,
                        param_name.is_some(),
                        param_index.is_some(),
                    ]),
                )?;
                self.simple_variant_field("direction", direction.name())?;
                self.flag("is_direction_explicit", *explicit_direction)?;
                if let Some(name) = param_name {
                    self.string_field("param_name", name)?;
                }
                if let Some(index) = *param_index {
                    self.field("param_index")?;
                    self.out.emit_unsigned(u64::from(index))?;
                }
                self.end()
            }
            CommentKind::TParamCommandComment => {
                let CommentData::TParamCommand {
                    param_name,
                    position,
                    ..
                } = &comment.data
                else {
                    return Err(missing(kind, "template parameter command"));
                };
                self.out
                    .begin_object(count(&[param_name.is_some(), !position.is_empty()]))?;
                if let Some(name) = param_name {
                    self.string_field("param_name", name)?;
                }
                if !position.is_empty() {
                    self.field("position")?;
                    self.out.begin_array(position.len())?;
                    for &index in position {
                        self.out.emit_unsigned(u64::from(index))?;
                    }
                    self.end()?;
                }
                self.end()
            }
            CommentKind::VerbatimBlockComment => {
                let CommentData::VerbatimBlock { close_name, .. } = &comment.data else {
                    return Err(missing(kind, "closing command"));
                };
                self.out.begin_object(1)?;
                self.string_field("close_name", close_name)?;
                self.end()
            }
            CommentKind::VerbatimLineComment => match &comment.data {
                CommentData::VerbatimLine { text, .. } => self.string(text),
                _ => Err(missing(kind, "verbatim text")),
            },
            CommentKind::NoComment
            | CommentKind::InlineContentComment
            | CommentKind::HTMLEndTagComment
            | CommentKind::BlockContentComment
            | CommentKind::ParagraphComment
            | CommentKind::FullComment => Ok(()),
        }
    }
}
