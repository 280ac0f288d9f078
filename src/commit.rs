//! The aggregated commit record a changelog is built from.

use std::fmt;

use url::Url;

use crate::{CommitBody, CommitFooter, CommitMessage, CommitType, Error, ErrorKind};

const BREAKING_MARKERS: [&str; 2] = ["BREAKING-CHANGE: ", "BREAKING CHANGE: "];

/// A part of a commit that can announce a breaking change.
pub trait BreakingChange {
    /// Whether this part announces a breaking change.
    fn is_breaking_change(&self) -> bool;

    /// The text describing the breaking change, or an empty string.
    fn breaking_change_description(&self) -> &str;
}

impl BreakingChange for CommitMessage<'_> {
    fn is_breaking_change(&self) -> bool {
        CommitMessage::is_breaking_change(self)
    }

    fn breaking_change_description(&self) -> &str {
        if CommitMessage::is_breaking_change(self) {
            self.message()
        } else {
            ""
        }
    }
}

/// Remove every breaking-change marker, wherever it appears.
fn strip_markers(description: &str) -> String {
    let mut description = description.to_owned();
    while let Some(marker) = BREAKING_MARKERS
        .into_iter()
        .find(|marker| description.contains(marker))
    {
        description = description.replace(marker, "");
    }
    description
}

/// A commit split into header, body and footer.
///
/// # Example
///
/// ```rust
/// use changelog_commit::{CommitFooter, CommitMessage, CommitType, ConventionalCommit};
///
/// let commit = ConventionalCommit::with_footer(
///     CommitMessage::new("fix!: remove deprecated field"),
///     CommitFooter::new("BREAKING-CHANGE: field X removed"),
/// );
///
/// assert_eq!(commit.type_(), CommitType::Fix);
/// assert!(commit.is_breaking_change());
/// assert_eq!(commit.breaking_change_description(), "field X removed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConventionalCommit<'a> {
    message: CommitMessage<'a>,
    body: CommitBody<'a>,
    footer: CommitFooter<'a>,
}

impl<'a> ConventionalCommit<'a> {
    /// Combine a header, body and footer.
    pub fn new(message: CommitMessage<'a>, body: CommitBody<'a>, footer: CommitFooter<'a>) -> Self {
        Self {
            message,
            body,
            footer,
        }
    }

    /// A commit that only has a header.
    pub fn from_message(message: CommitMessage<'a>) -> Self {
        Self::new(message, CommitBody::EMPTY, CommitFooter::EMPTY)
    }

    /// A commit with a header and footer but no body.
    pub fn with_footer(message: CommitMessage<'a>, footer: CommitFooter<'a>) -> Self {
        Self::new(message, CommitBody::EMPTY, footer)
    }

    /// Assemble a commit from its raw parts.
    pub fn builder() -> ConventionalCommitBuilder<'a> {
        ConventionalCommitBuilder::default()
    }

    /// The trimmed header as given.
    pub fn raw_message(&self) -> &'a str {
        self.message.raw_message()
    }

    /// The type of the commit.
    pub fn type_(&self) -> CommitType {
        self.message.type_()
    }

    /// The subject of the commit.
    pub fn message(&self) -> &str {
        self.message.message()
    }

    /// The scope, or an empty string.
    pub fn scope(&self) -> &'a str {
        self.message.scope()
    }

    /// The issue key, or an empty string.
    pub fn ticket(&self) -> &'a str {
        self.message.ticket()
    }

    /// The breaking line of the body, or an empty string.
    pub fn body(&self) -> &'a str {
        self.body.body()
    }

    /// The trimmed footer.
    pub fn footer(&self) -> &'a str {
        self.footer.footer()
    }

    /// Whether the header, body or footer announces a breaking change.
    pub fn is_breaking_change(&self) -> bool {
        self.message.is_breaking_change()
            || self.body.is_breaking_change()
            || self.footer.is_breaking_change()
    }

    /// Explanation for the breaking change, or an empty string.
    ///
    /// The footer is consulted first, then the body, then the header; the first one that is
    /// breaking supplies the text. `BREAKING-CHANGE: ` and `BREAKING CHANGE: ` markers are
    /// removed from it.
    pub fn breaking_change_description(&self) -> String {
        let parts: [&dyn BreakingChange; 3] = [&self.footer, &self.body, &self.message];
        parts
            .into_iter()
            .find(|part| part.is_breaking_change())
            .map(|part| strip_markers(part.breaking_change_description()))
            .unwrap_or_default()
    }

    /// The scope in bold, e.g. `**api**`.
    pub fn decorated_scope(&self) -> String {
        format!("**{}**", self.scope())
    }

    /// The ticket in bold, linked to `tracker` when one is given.
    ///
    /// The link is the URL in its serialized form, so a bare origin such as
    /// `https://jira.example.com` is written with a trailing `/`.
    pub fn decorated_ticket(&self, tracker: Option<&Url>) -> String {
        let decorated = match tracker {
            Some(tracker) => format!("**[{}]({tracker})**", self.ticket()),
            None => format!("**[{}]**", self.ticket()),
        };
        tracing::debug!(
            tracker = tracker.map(Url::as_str),
            ticket = %decorated,
            "decorated ticket"
        );
        decorated
    }
}

impl fmt::Display for ConventionalCommit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_message())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConventionalCommit<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ConventionalCommit", 6)?;
        state.serialize_field("type", &self.type_())?;
        state.serialize_field("scope", self.scope())?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("ticket", self.ticket())?;
        state.serialize_field("breaking", &self.is_breaking_change())?;
        state.serialize_field("breaking_description", &self.breaking_change_description())?;
        state.end()
    }
}

/// Assembles a [`ConventionalCommit`] from raw header, body lines and footer.
///
/// Only the header is required; a missing body or footer is empty.
#[derive(Clone, Debug, Default)]
pub struct ConventionalCommitBuilder<'a> {
    message: Option<&'a str>,
    body: Option<CommitBody<'a>>,
    footer: Option<&'a str>,
}

impl<'a> ConventionalCommitBuilder<'a> {
    /// The header line.
    pub fn message(mut self, header: &'a str) -> Self {
        self.message = Some(header);
        self
    }

    /// The body lines, in order.
    pub fn body<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.body = Some(CommitBody::new(lines));
        self
    }

    /// The footer line.
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Parse every part and combine them.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidInput`] when no header was given.
    pub fn build(self) -> Result<ConventionalCommit<'a>, Error> {
        let message = self
            .message
            .ok_or_else(|| Error::new(ErrorKind::InvalidInput).set_field("commit header"))?;

        Ok(ConventionalCommit::new(
            CommitMessage::new(message),
            self.body.unwrap_or(CommitBody::EMPTY),
            self.footer.map_or(CommitFooter::EMPTY, CommitFooter::new),
        ))
    }
}
