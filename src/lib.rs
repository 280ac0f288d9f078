//! Classifies commit messages into changelog records, following the
//! [Conventional Commit] specification.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! A commit arrives already split into a header line, body lines and a footer line. Each part
//! is parsed on its own and never rejected: headers that do not follow the convention are
//! typed [`CommitType::Others`] and searched for an issue key instead.
//!
//! # Example
//!
//! ```rust
//! use changelog_commit::{CommitType, ConventionalCommit};
//!
//! let commit = ConventionalCommit::builder()
//!     .message("chore(deps): cleanup (OPS-17)")
//!     .body(["see notes", "BREAKING CHANGE: old API removed"])
//!     .build()
//!     .unwrap();
//!
//! // The header is read field by field.
//! assert_eq!(commit.type_(), CommitType::Chore);
//! assert_eq!(commit.scope(), "deps");
//! assert_eq!(commit.message(), "cleanup");
//! assert_eq!(commit.ticket(), "OPS-17");
//!
//! // A body line marks the commit as breaking, even though the header does not.
//! assert!(commit.is_breaking_change());
//! assert_eq!(commit.breaking_change_description(), "old API removed");
//!
//! // Fragments ready for a markdown changelog.
//! assert_eq!(commit.decorated_scope(), "**deps**");
//! assert_eq!(commit.decorated_ticket(None), "**[OPS-17]**");
//!
//! // Headers outside the convention still yield a record.
//! let commit = ConventionalCommit::builder()
//!     .message("update stuff PROJ-123")
//!     .build()
//!     .unwrap();
//! assert_eq!(commit.type_(), CommitType::Others);
//! assert_eq!(commit.message(), "update stuff PROJ-123");
//! assert_eq!(commit.ticket(), "PROJ-123");
//! ```

#![warn(missing_docs)]

mod body;
mod commit;
mod error;
mod footer;
mod group;
mod kind;
mod message;
mod parser;

pub use body::CommitBody;
pub use commit::{BreakingChange, ConventionalCommit, ConventionalCommitBuilder};
pub use error::{Error, ErrorKind};
pub use footer::CommitFooter;
pub use group::{breaking_changes, group_by_type};
pub use kind::CommitType;
pub use message::CommitMessage;
