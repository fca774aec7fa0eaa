//! Boundary representation of entities: the flat records upstream message
//! payloads carry, with a `type` tag and kind-dependent auxiliary fields.
//! [`Entity`] serializes through [`RawEntity`] so the public type stays a
//! proper enum while the wire shape stays upstream's.

use crate::entity::{Entity, EntityKind};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct RawEntity {
    pub offset: usize,
    pub length: usize,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RawUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

// Upstream sends a full user object; only the id matters here, and unknown
// fields fall away in deserialization.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct RawUser {
    pub id: i64,
}

impl TryFrom<RawEntity> for Entity {
    type Error = WireError;

    fn try_from(raw: RawEntity) -> Result<Self, WireError> {
        let kind = match raw.kind.as_str() {
            "bold" => EntityKind::Bold,
            "italic" => EntityKind::Italic,
            "underline" => EntityKind::Underline,
            "strikethrough" => EntityKind::Strikethrough,
            "code" => EntityKind::Code,
            "pre" => EntityKind::Pre {
                language: raw.language,
            },
            "text_link" => EntityKind::TextLink {
                url: raw.url.ok_or(WireError::MissingField {
                    kind: "text_link",
                    field: "url",
                })?,
            },
            "text_mention" => EntityKind::TextMention {
                user_id: raw
                    .user
                    .ok_or(WireError::MissingField {
                        kind: "text_mention",
                        field: "user",
                    })?
                    .id,
            },
            "mention" => EntityKind::Mention,
            "hashtag" => EntityKind::Hashtag,
            "bot_command" => EntityKind::BotCommand,
            "url" => EntityKind::Url,
            "email" => EntityKind::Email,
            "spoiler" => EntityKind::Spoiler,
            "custom_emoji" => EntityKind::CustomEmoji {
                custom_emoji_id: raw.custom_emoji_id.ok_or(WireError::MissingField {
                    kind: "custom_emoji",
                    field: "custom_emoji_id",
                })?,
            },
            _ => return Err(WireError::UnknownKind(raw.kind)),
        };
        Ok(Entity {
            offset: raw.offset,
            length: raw.length,
            kind,
        })
    }
}

impl From<Entity> for RawEntity {
    fn from(entity: Entity) -> Self {
        let mut raw = RawEntity {
            offset: entity.offset,
            length: entity.length,
            kind: entity.kind.name().to_string(),
            url: None,
            user: None,
            language: None,
            custom_emoji_id: None,
        };
        match entity.kind {
            EntityKind::Pre { language } => raw.language = language,
            EntityKind::TextLink { url } => raw.url = Some(url),
            EntityKind::TextMention { user_id } => raw.user = Some(RawUser { id: user_id }),
            EntityKind::CustomEmoji { custom_emoji_id } => {
                raw.custom_emoji_id = Some(custom_emoji_id)
            }
            _ => {}
        }
        raw
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WireError {
    UnknownKind(String),
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::UnknownKind(kind) => write!(f, "unknown entity type `{}`", kind),
            WireError::MissingField { kind, field } => {
                write!(f, "`{}` entity is missing `{}`", kind, field)
            }
        }
    }
}

impl Error for WireError {}
