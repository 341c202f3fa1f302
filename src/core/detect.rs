//! Per-revision distribution lookup
//!
//! Pairs every selected version with the base distributions its revision
//! actually builds against, by reading `debian/Dockerfile` and
//! `alpine/Dockerfile` at that commit. A missing or unparseable Dockerfile
//! skips that (version, kind) pair with a warning; it never fails the run.

use crate::core::distro::{DistroKind, Distribution};
use crate::core::release::{Release, TaggedVersion};
use crate::core::vcs::RemoteGit;

/// Lookup order is fixed: Debian first, then Alpine. The tag deriver relies
/// on distributions being consecutive per version in this order.
const LOOKUP_ORDER: [DistroKind; 2] = [DistroKind::Debian, DistroKind::Alpine];

/// Resolve the distribution for one commit and kind
fn distribution_for_commit(
  git: &dyn RemoteGit,
  commit: &str,
  kind: DistroKind,
) -> crate::core::error::Result<Distribution> {
  let path = format!("{}/Dockerfile", kind);
  let content = git.show_file(commit, &path)?;
  Ok(Distribution::from_dockerfile(&content, &path)?)
}

/// Expand selected versions into concrete releases
///
/// Output preserves selector order, with each version's distributions
/// consecutive; releases whose Dockerfile lookup failed are absent.
pub fn prepare_releases(git: &dyn RemoteGit, versions: &[TaggedVersion], verbose: bool) -> Vec<Release> {
  let mut releases = Vec::with_capacity(versions.len() * LOOKUP_ORDER.len());

  for tv in versions {
    for kind in LOOKUP_ORDER {
      match distribution_for_commit(git, &tv.commit, kind) {
        Ok(distribution) => {
          let release = Release {
            commit: tv.commit.clone(),
            version: tv.version.clone(),
            distribution,
            fetch_ref: tv.tag_ref.clone(),
          };
          if verbose {
            eprintln!("  Added: {}", release);
          }
          releases.push(release);
        }
        Err(e) => {
          eprintln!("Warning: failed to process {} for {}: {}", kind, tv.version, e);
        }
      }
    }
  }

  releases
}
