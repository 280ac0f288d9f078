//! Sorting parsed commits into changelog sections.

use std::collections::BTreeMap;

use crate::{CommitType, ConventionalCommit};

/// Group commits by type, in display order.
///
/// Commits keep their input order within a group. Types without commits are absent.
pub fn group_by_type<'c, 'a, I>(commits: I) -> BTreeMap<CommitType, Vec<&'c ConventionalCommit<'a>>>
where
    I: IntoIterator<Item = &'c ConventionalCommit<'a>>,
    'a: 'c,
{
    let mut groups: BTreeMap<_, Vec<_>> = BTreeMap::new();
    for commit in commits {
        groups.entry(commit.type_()).or_default().push(commit);
    }
    groups
}

/// The commits that announce a breaking change, in input order.
pub fn breaking_changes<'c, 'a, I>(commits: I) -> Vec<&'c ConventionalCommit<'a>>
where
    I: IntoIterator<Item = &'c ConventionalCommit<'a>>,
    'a: 'c,
{
    commits
        .into_iter()
        .filter(|commit| commit.is_breaking_change())
        .collect()
}
