//! The free-form lines between a commit header and its footer.

use crate::commit::BreakingChange;

const BREAKING_ARROW: &str = "BREAKING-CHANGE:";
const BREAKING_PHRASE: &str = "BREAKING CHANGE";

fn is_breaking_line(line: &str) -> bool {
    line.contains(BREAKING_ARROW) || line.contains(BREAKING_PHRASE)
}

/// The body of a commit.
///
/// A body only matters to a changelog when one of its lines announces a breaking change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitBody<'a> {
    lines: Vec<&'a str>,
    breaking_line: Option<&'a str>,
}

impl<'a> CommitBody<'a> {
    /// A commit without a body.
    pub const EMPTY: CommitBody<'static> = CommitBody {
        lines: Vec::new(),
        breaking_line: None,
    };

    /// Collect the body lines, in order.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<_> = lines.into_iter().collect();
        let breaking_line = lines.iter().copied().find(|line| is_breaking_line(line));
        Self {
            lines,
            breaking_line,
        }
    }

    /// The first line that mentions a breaking change, verbatim, or an empty string.
    pub fn body(&self) -> &'a str {
        self.breaking_line.unwrap_or_default()
    }

    /// Every body line as given.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Whether any line mentions a breaking change.
    pub fn is_breaking_change(&self) -> bool {
        self.breaking_line.is_some()
    }
}

impl BreakingChange for CommitBody<'_> {
    fn is_breaking_change(&self) -> bool {
        CommitBody::is_breaking_change(self)
    }

    fn breaking_change_description(&self) -> &str {
        self.body()
    }
}
