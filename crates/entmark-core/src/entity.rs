use crate::markup::TemplateKind;

/// A style annotation over a contiguous span of text.
///
/// `offset` and `length` are in text units (see [`crate::unit_len`]), the
/// counting scheme upstream payloads use, not bytes. Entities are plain
/// inputs: rendering never mutates them, only reorders its own working
/// copy.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "crate::wire::RawEntity", into = "crate::wire::RawEntity")
)]
pub struct Entity {
    pub offset: usize,
    pub length: usize,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(offset: usize, length: usize, kind: EntityKind) -> Self {
        Self {
            offset,
            length,
            kind,
        }
    }
}

/// The upstream entity set. Kinds without a markup mapping (plain mentions,
/// hashtags and the like) are carried through deserialization but rejected
/// with [`crate::MarkupError::UnsupportedMarkup`] when rendered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre { language: Option<String> },
    TextLink { url: String },
    TextMention { user_id: i64 },
    Mention,
    Hashtag,
    BotCommand,
    Url,
    Email,
    Spoiler,
    CustomEmoji { custom_emoji_id: String },
}

impl EntityKind {
    /// The wire name of this kind, as upstream payloads spell it.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Bold => "bold",
            EntityKind::Italic => "italic",
            EntityKind::Underline => "underline",
            EntityKind::Strikethrough => "strikethrough",
            EntityKind::Code => "code",
            EntityKind::Pre { .. } => "pre",
            EntityKind::TextLink { .. } => "text_link",
            EntityKind::TextMention { .. } => "text_mention",
            EntityKind::Mention => "mention",
            EntityKind::Hashtag => "hashtag",
            EntityKind::BotCommand => "bot_command",
            EntityKind::Url => "url",
            EntityKind::Email => "email",
            EntityKind::Spoiler => "spoiler",
            EntityKind::CustomEmoji { .. } => "custom_emoji",
        }
    }

    pub(crate) fn template_kind(&self) -> Option<TemplateKind> {
        match self {
            EntityKind::Bold => Some(TemplateKind::Bold),
            EntityKind::Italic => Some(TemplateKind::Italic),
            EntityKind::Underline => Some(TemplateKind::Underline),
            EntityKind::Strikethrough => Some(TemplateKind::Strikethrough),
            EntityKind::Code => Some(TemplateKind::Code),
            EntityKind::Pre { .. } => Some(TemplateKind::Pre),
            EntityKind::TextLink { .. } => Some(TemplateKind::TextLink),
            EntityKind::TextMention { .. } => Some(TemplateKind::TextMention),
            _ => None,
        }
    }
}

/// Target markup syntax family.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkupLanguage {
    Html,
    Markdown,
}

impl MarkupLanguage {
    /// Resolves an upstream parse-mode name. Unrecognized names fall back
    /// to HTML, matching the template table's default.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("markdown") || name.eq_ignore_ascii_case("markdownv2") {
            MarkupLanguage::Markdown
        } else {
            MarkupLanguage::Html
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MarkupLanguage::Html => "HTML",
            MarkupLanguage::Markdown => "Markdown",
        }
    }
}
