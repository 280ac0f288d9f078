//! The closed set of commit kinds a changelog is grouped by.

use std::fmt;

use unicase::UniCase;

/// The kind of change a commit introduces.
///
/// Variants are ordered by the priority their section takes in a changelog, so sorting or
/// keying a `BTreeMap` by `CommitType` yields display order.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "schemars", schemars(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitType {
    /// Commit type when introducing new features (correlates with `minor` in semver)
    Feat,
    /// Commit type when patching a bug (correlates with `patch` in semver)
    Fix,
    /// Possible commit type for performance optimizations.
    Perf,
    /// Possible commit type for refactoring code structure.
    Refactor,
    /// Possible commit type when reverting changes.
    Revert,
    /// Possible commit type for changing documentation.
    Docs,
    /// Possible commit type for changing code style.
    Style,
    /// Possible commit type for addressing tests.
    Test,
    /// Possible commit type for the build system or dependencies.
    Build,
    /// Possible commit type for continuous integration configuration.
    Ci,
    /// Possible commit type for other things.
    Chore,
    /// Anything that is not a recognised conventional commit type.
    Others,
}

impl CommitType {
    /// Every variant, in display order.
    pub const ALL: [CommitType; 12] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Revert,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Others,
    ];

    /// Look up the variant for a header token.
    ///
    /// The lookup ignores case and never fails: empty and unrecognised tokens map to
    /// [`CommitType::Others`].
    pub fn of(token: &str) -> Self {
        let token = UniCase::new(token);
        Self::ALL
            .into_iter()
            .find(|kind| UniCase::new(kind.prefix()) == token)
            .unwrap_or(CommitType::Others)
    }

    /// The canonical header token, e.g. `feat`.
    pub fn prefix(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Revert => "revert",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Others => "others",
        }
    }

    /// The changelog section title for this kind.
    pub fn full_name(self) -> &'static str {
        match self {
            CommitType::Feat => "Features",
            CommitType::Fix => "Bug Fixes",
            CommitType::Perf => "Performance Improvements",
            CommitType::Refactor => "Code Refactoring",
            CommitType::Revert => "Reverts",
            CommitType::Docs => "Documentation",
            CommitType::Style => "Styles",
            CommitType::Test => "Tests",
            CommitType::Build => "Build System",
            CommitType::Ci => "Continuous Integration",
            CommitType::Chore => "Chores",
            CommitType::Others => "Other Changes",
        }
    }

    /// Position of this kind's section in a changelog, lowest first.
    pub fn display_priority(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl From<&str> for CommitType {
    fn from(token: &str) -> Self {
        CommitType::of(token)
    }
}
