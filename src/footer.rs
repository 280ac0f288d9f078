//! The trailing line of a commit.

use crate::commit::BreakingChange;

const BREAKING_PREFIX: &str = "BREAKING-CHANGE: ";

/// The footer of a commit.
///
/// A footer is breaking only when it starts with `BREAKING-CHANGE: `, before any trimming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitFooter<'a> {
    raw: &'a str,
    footer: &'a str,
    breaking: bool,
}

impl<'a> CommitFooter<'a> {
    /// A commit without a footer.
    pub const EMPTY: CommitFooter<'static> = CommitFooter {
        raw: "",
        footer: "",
        breaking: false,
    };

    /// Read a footer line.
    pub fn new(raw: &'a str) -> Self {
        match raw.strip_prefix(BREAKING_PREFIX) {
            Some(rest) => Self {
                raw,
                footer: rest.trim(),
                breaking: true,
            },
            None => Self {
                raw,
                footer: raw.trim(),
                breaking: false,
            },
        }
    }

    /// The trimmed footer, without the breaking-change prefix.
    pub fn footer(&self) -> &'a str {
        self.footer
    }

    /// Whether the footer announces a breaking change.
    pub fn is_breaking_change(&self) -> bool {
        self.breaking
    }
}

impl BreakingChange for CommitFooter<'_> {
    fn is_breaking_change(&self) -> bool {
        self.breaking
    }

    /// The untouched footer, prefix included, so the aggregate strips every marker the same way.
    fn breaking_change_description(&self) -> &str {
        if self.breaking {
            self.raw
        } else {
            ""
        }
    }
}
