use std::fmt::Display;

use tracing::trace;

use crate::message::{Category, Message};

/// Line terminator written after every rendered message.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    /// `CrLf` on Windows targets, `Lf` everywhere else.
    pub fn native() -> Self {
        if cfg!(windows) {
            Newline::CrLf
        } else {
            Newline::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Ordered collection of categorized messages gathered over a unit of work.
///
/// Every mutation takes `&mut self`. Callers collecting from several threads
/// should keep one log per worker and [`merge`](MessageLog::merge) them
/// afterwards, or put the log behind their own lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    prefix: String,
    notes: Vec<Message>,
    newline: Newline,
}

impl MessageLog {
    /// Creates a log using the host's [`Newline::native`] terminator.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_newline(prefix, Newline::native())
    }

    pub fn with_newline(prefix: impl Into<String>, newline: Newline) -> Self {
        Self {
            prefix: prefix.into(),
            notes: Vec::new(),
            newline,
        }
    }

    pub fn default_prefix(&self) -> &str {
        &self.prefix
    }

    pub fn newline(&self) -> Newline {
        self.newline
    }

    pub fn add_info<I, S>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add(Category::Info, msgs);
    }

    pub fn add_warning<I, S>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add(Category::Warning, msgs);
    }

    pub fn add_error<I, S>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add(Category::Error, msgs);
    }

    pub fn add_success<I, S>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add(Category::Success, msgs);
    }

    /// Adds untagged application messages. These render as bare text.
    pub fn add_plain<I, S>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add(Category::Plain, msgs);
    }

    fn add<I, S>(&mut self, category: Category, msgs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for msg in msgs {
            self.notes
                .push(Message::new(category, self.prefix.as_str(), msg));
        }
    }

    /// Appends already built messages as-is, keeping their own prefix and category.
    pub fn append<I>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = Message>,
    {
        self.notes.extend(msgs);
    }

    /// Moves every message of `other` to the end of this log.
    pub fn merge(&mut self, other: MessageLog) {
        trace!(count = other.notes.len(), from = %other.prefix, into = %self.prefix, "merging logs");
        self.append(other.notes);
    }

    /// Drops all messages. Prefix and newline are kept.
    pub fn clear(&mut self) {
        trace!(count = self.notes.len(), prefix = %self.prefix, "clearing log");
        self.notes.clear();
    }

    pub fn has_errors(&self) -> bool {
        self.has(Category::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.has(Category::Warning)
    }

    pub fn has_infos(&self) -> bool {
        self.has(Category::Info)
    }

    pub fn has_successes(&self) -> bool {
        self.has(Category::Success)
    }

    fn has(&self, category: Category) -> bool {
        self.notes.iter().any(|n| n.category() == category)
    }

    /// Category holding a strict majority over each of the other taggable
    /// categories, or [`Category::Plain`] when there is none.
    pub fn prevailing(&self) -> Category {
        let (mut nfo, mut wrn, mut err, mut suc) = (0usize, 0usize, 0usize, 0usize);
        for note in &self.notes {
            match note.category() {
                Category::Info => nfo += 1,
                Category::Warning => wrn += 1,
                Category::Error => err += 1,
                Category::Success => suc += 1,
                Category::Fatal | Category::Plain => {}
            }
        }

        if nfo > wrn && nfo > err && nfo > suc {
            Category::Info
        } else if wrn > nfo && wrn > err && wrn > suc {
            Category::Warning
        } else if err > nfo && err > wrn && err > suc {
            Category::Error
        } else if suc > nfo && suc > wrn && suc > err {
            Category::Success
        } else {
            Category::Plain
        }
    }

    pub fn notes(&self) -> &[Message] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Every message on its own line, each followed by the log's newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for MessageLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lf = self.newline.as_str();
        for note in &self.notes {
            write!(f, "{note}{lf}")?;
        }
        Ok(())
    }
}

impl Extend<Message> for MessageLog {
    fn extend<T: IntoIterator<Item = Message>>(&mut self, iter: T) {
        self.append(iter);
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
