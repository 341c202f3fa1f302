//! Source-control collaborator boundary
//!
//! The pipeline only needs three operations from git; they are expressed as
//! a trait so the selection and lookup stages can be unit-tested against an
//! in-memory fake. `SystemGit` is the real implementation.

pub mod system_git;

pub use system_git::SystemGit;

use crate::core::error::Result;

/// Remote git operations the pipeline depends on
///
/// All calls are synchronous and unretried; a failure surfaces immediately.
pub trait RemoteGit {
  /// List remote tags matching `refs/tags/v{major}.*` as (commit, tag_ref)
  ///
  /// Fails if the remote is unreachable or no tag matches.
  fn list_remote_tags(&self, major: u32) -> Result<Vec<(String, String)>>;

  /// Fetch the given refs from the remote (idempotent)
  fn fetch_refs(&self, refs: &[String]) -> Result<()>;

  /// Read a file's content at a specific commit
  ///
  /// Fails if the path does not exist at that revision.
  fn show_file(&self, commit: &str, path: &str) -> Result<String>;
}
