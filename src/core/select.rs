//! Version selection pipeline
//!
//! Narrows the raw remote tag list for a major version down to the releases
//! that should be published:
//!
//! 1. **Discover** - parse every `v{major}.*` tag, warn-and-skip the
//!    unparseable ones, sort newest first
//! 2. **Drop EOL lines** - one `-eol` tag poisons its whole minor line
//! 3. **Keep latest per line** - one GA per minor line, GA beats a
//!    pre-release at the same patch, unresolved pre-release trains survive

use crate::core::error::Result;
use crate::core::release::TaggedVersion;
use crate::core::vcs::RemoteGit;
use crate::core::version::Version;
use std::collections::{HashMap, HashSet};

/// Stage 1: parse remote tags into versions, newest first
///
/// Tags that fail to parse, or whose major does not match the requested one,
/// are skipped with a warning rather than failing the run.
pub fn versions_from_tags(git: &dyn RemoteGit, major: u32) -> Result<Vec<TaggedVersion>> {
  let tags = git.list_remote_tags(major)?;

  let mut versions = Vec::with_capacity(tags.len());
  for (commit, tag_ref) in tags {
    let tag_name = tag_ref.rsplit('/').next().unwrap_or(&tag_ref);
    match Version::parse(tag_name) {
      Ok(version) if version.major == major => {
        versions.push(TaggedVersion { version, commit, tag_ref });
      }
      Ok(version) => {
        eprintln!(
          "Warning: skipping tag {}: major {} does not match requested {}",
          tag_ref, version.major, major
        );
      }
      Err(e) => {
        eprintln!("Warning: skipping invalid tag {}: {}", tag_ref, e);
      }
    }
  }

  sort_newest_first(&mut versions);
  Ok(versions)
}

/// Stage 2: drop every minor line that contains an end-of-life marker
///
/// The `-eol` tag itself and all patches and pre-releases of that minor line
/// are excluded, not just the tagged entry.
pub fn filter_end_of_life(versions: Vec<TaggedVersion>) -> Vec<TaggedVersion> {
  let eol_lines: HashSet<String> = versions
    .iter()
    .filter(|tv| tv.version.is_end_of_life())
    .map(|tv| tv.version.minor_line())
    .collect();

  let mut kept: Vec<TaggedVersion> = versions
    .into_iter()
    .filter(|tv| !eol_lines.contains(&tv.version.minor_line()))
    .collect();

  sort_newest_first(&mut kept);
  kept
}

/// Stage 3: keep the publishable winners, input assumed newest first
///
/// First pass: one entry per `(major, minor, patch)` key, first seen wins,
/// except that a GA replaces a previously seen pre-release at the same key
/// (in place, keeping the earlier position).
///
/// Second pass: once a minor line has produced its GA winner nothing further
/// from that line is retained; pre-releases at other patch keys of a line
/// that has not yet produced a GA remain eligible.
pub fn keep_latest_per_line(versions: Vec<TaggedVersion>) -> Vec<TaggedVersion> {
  let mut per_patch: Vec<TaggedVersion> = Vec::new();
  let mut index: HashMap<(u32, u32, Option<u32>), usize> = HashMap::new();

  for tv in versions {
    let key = (tv.version.major, tv.version.minor, tv.version.patch);
    match index.get(&key) {
      None => {
        index.insert(key, per_patch.len());
        per_patch.push(tv);
      }
      Some(&at) => {
        // GA always takes precedence over a pre-release at the same patch
        if per_patch[at].version.is_prerelease() && !tv.version.is_prerelease() {
          per_patch[at] = tv;
        }
      }
    }
  }

  let mut kept = Vec::new();
  let mut lines_with_ga: HashSet<String> = HashSet::new();

  for tv in per_patch {
    if lines_with_ga.contains(&tv.version.minor_line()) {
      continue;
    }
    if !tv.version.is_prerelease() {
      lines_with_ga.insert(tv.version.minor_line());
    }
    kept.push(tv);
  }

  kept
}

/// Full selection pipeline for one major version
///
/// Returns an empty vector (not an error) when every tag is filtered away;
/// source-control failures propagate.
pub fn actual_versions(git: &dyn RemoteGit, major: u32) -> Result<Vec<TaggedVersion>> {
  let versions = versions_from_tags(git, major)?;
  if versions.is_empty() {
    return Ok(vec![]);
  }

  let versions = filter_end_of_life(versions);
  Ok(keep_latest_per_line(versions))
}

fn sort_newest_first(versions: &mut [TaggedVersion]) {
  versions.sort_by(|a, b| b.version.cmp(&a.version));
}
