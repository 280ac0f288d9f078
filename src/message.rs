//! The header line of a commit.

use std::borrow::Cow;

use crate::parser::{find_issue_key, parse_header, Subject};
use crate::CommitType;

/// A parsed commit header.
///
/// Parsing is total. A header matching `type[(scope)][!]: subject`, with `type` one of the
/// [`CommitType`] tokens, is read field by field;
/// anything else is kept whole as the message, typed [`CommitType::Others`], with the first
/// issue key found in it as the ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitMessage<'a> {
    raw: &'a str,
    ty: CommitType,
    scope: &'a str,
    message: Cow<'a, str>,
    breaking: bool,
    ticket: &'a str,
}

impl<'a> CommitMessage<'a> {
    /// Parse a header line.
    pub fn new(raw: &'a str) -> Self {
        let raw = raw.trim();

        let Some(header) = parse_header(raw) else {
            tracing::trace!(header = raw, "header is not a conventional commit");
            return Self {
                raw,
                ty: CommitType::Others,
                scope: "",
                message: Cow::Borrowed(raw),
                breaking: false,
                ticket: find_issue_key(raw).unwrap_or_default(),
            };
        };

        let (message, ticket) = match header.subject {
            Subject::Plain(text) => (Cow::Borrowed(text), ""),
            Subject::Ticketed {
                before,
                ticket,
                after,
            } => {
                let mut message = String::with_capacity(before.len() + after.len());
                message.push_str(before.trim_end());
                message.push_str(after);
                (Cow::Owned(message.trim().to_owned()), ticket)
            }
        };

        Self {
            raw,
            ty: CommitType::of(header.type_),
            scope: header.scope.unwrap_or_default(),
            message,
            breaking: header.breaking,
            ticket,
        }
    }

    /// The trimmed header as given.
    pub fn raw_message(&self) -> &'a str {
        self.raw
    }

    /// The type of the commit.
    pub fn type_(&self) -> CommitType {
        self.ty
    }

    /// The subject, with any inline ticket removed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The scope, or an empty string.
    pub fn scope(&self) -> &'a str {
        self.scope
    }

    /// The issue key, or an empty string.
    pub fn ticket(&self) -> &'a str {
        self.ticket
    }

    /// Whether the header carries the `!` marker.
    pub fn is_breaking_change(&self) -> bool {
        self.breaking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn conventional_with_scope() {
        let message = CommitMessage::new("feat(api): add health endpoint");

        assert_eq!(message.type_(), CommitType::Feat);
        assert_eq!(message.scope(), "api");
        assert_eq!(message.message(), "add health endpoint");
        assert_eq!(message.ticket(), "");
        assert!(!message.is_breaking_change());
    }

    #[test]
    fn conventional_breaking_marker() {
        let message = CommitMessage::new("fix!: remove deprecated field");

        assert_eq!(message.type_(), CommitType::Fix);
        assert_eq!(message.scope(), "");
        assert_eq!(message.message(), "remove deprecated field");
        assert!(message.is_breaking_change());
    }

    #[test]
    fn conventional_with_ticket() {
        let message = CommitMessage::new("  feat(ui)!: dark mode (PROJ-42), by Ann  ");

        assert_eq!(message.raw_message(), "feat(ui)!: dark mode (PROJ-42), by Ann");
        assert_eq!(message.message(), "dark mode, by Ann");
        assert_eq!(message.ticket(), "PROJ-42");
        assert!(message.is_breaking_change());
    }

    #[test]
    fn conventional_ticket_at_end() {
        let message = CommitMessage::new("fix: handle empty input (CORE-7)");

        assert_eq!(message.message(), "handle empty input");
        assert_eq!(message.ticket(), "CORE-7");
    }

    #[test]
    fn conventional_ignores_bare_key() {
        let message = CommitMessage::new("fix: CORE-7 handle empty input");

        assert_eq!(message.message(), "CORE-7 handle empty input");
        assert_eq!(message.ticket(), "");
    }

    #[test]
    fn unknown_type_falls_back() {
        let message = CommitMessage::new("wip: update PROJ-123");

        assert_eq!(message.type_(), CommitType::Others);
        assert_eq!(message.scope(), "");
        assert_eq!(message.message(), "wip: update PROJ-123");
        assert_eq!(message.ticket(), "PROJ-123");
    }

    #[test]
    fn issue_key_as_type_falls_back() {
        let message = CommitMessage::new("PROJ-123: fix login");

        assert_eq!(message.type_(), CommitType::Others);
        assert_eq!(message.message(), "PROJ-123: fix login");
        assert_eq!(message.ticket(), "PROJ-123");
    }

    #[test]
    fn type_lookup_ignores_case() {
        let message = CommitMessage::new("Feat(core): half done");

        assert_eq!(message.type_(), CommitType::Feat);
        assert_eq!(message.scope(), "core");
        assert_eq!(message.message(), "half done");
    }

    #[test]
    fn missing_space_after_colon_falls_back() {
        let message = CommitMessage::new("feat:add x CORE-2");

        assert_eq!(message.type_(), CommitType::Others);
        assert_eq!(message.message(), "feat:add x CORE-2");
        assert_eq!(message.ticket(), "CORE-2");
    }

    #[test]
    fn ticket_inside_subject_stays_in_message() {
        let message = CommitMessage::new("fix: add (PROJ-1) stuff");

        assert_eq!(message.type_(), CommitType::Fix);
        assert_eq!(message.message(), "add (PROJ-1) stuff");
        assert_eq!(message.ticket(), "");
    }

    #[test]
    fn non_conventional_with_ticket() {
        let message = CommitMessage::new("update stuff PROJ-123");

        assert_eq!(message.type_(), CommitType::Others);
        assert_eq!(message.scope(), "");
        assert_eq!(message.message(), "update stuff PROJ-123");
        assert_eq!(message.ticket(), "PROJ-123");
        assert!(!message.is_breaking_change());
    }

    #[test]
    fn non_conventional_without_ticket() {
        let message = CommitMessage::new("Merge branch 'main'\n");

        assert_eq!(message.type_(), CommitType::Others);
        assert_eq!(message.message(), "Merge branch 'main'");
        assert_eq!(message.ticket(), "");
    }

    #[test]
    fn empty_header() {
        let message = CommitMessage::new("   ");

        assert_eq!(message.raw_message(), "");
        assert_eq!(message.type_(), CommitType::Others);
        assert_eq!(message.message(), "");
        assert_eq!(message.ticket(), "");
    }

    proptest! {
        #[test]
        fn non_conventional_keeps_whole_header(s in "[a-zA-Z0-9 .,'-]{0,60}") {
            // No ':' means the header grammar can never match.
            let message = CommitMessage::new(&s);
            prop_assert_eq!(message.type_(), CommitType::Others);
            prop_assert_eq!(message.message(), s.trim());
            prop_assert_eq!(message.scope(), "");
            prop_assert!(!message.is_breaking_change());
        }

        #[test]
        fn parse_is_total(s in "\\PC{0,80}") {
            let message = CommitMessage::new(&s);
            prop_assert_eq!(message.raw_message(), s.trim());
        }
    }
}
