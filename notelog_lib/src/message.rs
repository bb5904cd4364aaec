use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Separates the category tag from the message text in rendered output.
pub const DELIM_MSG_TYPE: &str = ": ";

/// What kind of message a [`Message`] is.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(serialize = "info", serialize = "inf")]
    Info,
    #[strum(serialize = "warning", serialize = "warn", serialize = "wrn")]
    Warning,
    #[strum(serialize = "error", serialize = "err")]
    Error,
    /// Reserved. Renders with its own code but cannot be added through the
    /// categorized add methods and is never counted by `prevailing`.
    #[strum(serialize = "fatal", serialize = "ftl")]
    Fatal,
    #[strum(serialize = "success", serialize = "suc")]
    Success,
    /// Untagged application message.
    #[strum(serialize = "plain")]
    Plain,
}

impl Category {
    /// Short code written in front of rendered messages. Empty for [`Category::Plain`].
    pub fn code(self) -> &'static str {
        match self {
            Category::Info => "INF",
            Category::Warning => "WRN",
            Category::Error => "ERR",
            Category::Fatal => "FTL",
            Category::Success => "SUC",
            Category::Plain => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::Fatal => "fatal",
            Category::Success => "success",
            Category::Plain => "plain",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single categorized note. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MessageParts")]
pub struct Message {
    category: Category,
    prefix: String,
    text: String,
}

impl Message {
    /// Builds a message, trimming surrounding whitespace from `text`.
    pub fn new(category: Category, prefix: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self {
            category,
            prefix: prefix.into(),
            text: text.as_ref().trim().to_string(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders as `CODE[PREFIX]: text`, or just `text` for plain messages.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[derive(Deserialize)]
struct MessageParts {
    category: Category,
    prefix: String,
    text: String,
}

impl From<MessageParts> for Message {
    fn from(parts: MessageParts) -> Self {
        Message::new(parts.category, parts.prefix, parts.text)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.category != Category::Plain {
            f.write_str(self.category.code())?;
            if !self.prefix.is_empty() {
                write!(f, "[{}]", self.prefix)?;
            }
            f.write_str(DELIM_MSG_TYPE)?;
        }
        f.write_str(&self.text)
    }
}
