//! Docker tag derivation for stackbrew entries
//!
//! Given releases sorted newest first (distributions consecutive per
//! version), computes the alias tag set for each and anoints the releases
//! of exactly one minor line as "latest".

use crate::core::distro::Distribution;
use crate::core::release::Release;
use crate::core::version::Version;
use serde::Serialize;
use serde_json::json;

/// One stackbrew library entry, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
  pub tags: Vec<String>,
  pub commit: String,
  pub version: Version,
  pub distribution: Distribution,
  pub fetch_ref: String,
}

impl ManifestEntry {
  /// JSON view including the derived architecture list and directory
  pub fn to_json(&self) -> serde_json::Value {
    json!({
      "tags": self.tags,
      "architectures": self.distribution.architectures(),
      "git_commit": self.commit,
      "git_fetch": self.fetch_ref,
      "version": self.version,
      "directory": self.distribution.kind,
    })
  }
}

/// "Latest" pin over a newest-first release scan
///
/// Arms on the first GA seen, stays armed while the minor matches, and once
/// cleared never re-arms for the remainder of the scan.
enum Pin {
  Unset,
  Pinned(u32),
  Cleared,
}

impl Pin {
  fn observe(&mut self, version: &Version) -> bool {
    match *self {
      Pin::Unset => {
        if !version.is_prerelease() {
          *self = Pin::Pinned(version.minor);
          return true;
        }
        false
      }
      Pin::Pinned(minor) => {
        if minor != version.minor {
          *self = Pin::Cleared;
          return false;
        }
        true
      }
      Pin::Cleared => false,
    }
  }
}

/// Derive the tag set for one release
///
/// `version_tags` is the version itself, plus the minor line for GA
/// releases, plus the bare major for latest releases. The default
/// distribution additionally emits every version tag without a distro
/// suffix, and the literal `latest`.
pub fn tags_for_release(release: &Release, is_latest: bool) -> Vec<String> {
  let version = &release.version;
  let distribution = &release.distribution;

  let mut version_tags = vec![version.to_string()];
  if !version.is_prerelease() {
    version_tags.push(version.minor_line());
  }
  if is_latest {
    version_tags.push(version.major.to_string());
  }

  let mut tags = Vec::new();
  if distribution.is_default() {
    tags.extend(version_tags.iter().cloned());
  }

  for fragment in distribution.tag_fragments() {
    for version_tag in &version_tags {
      tags.push(format!("{}-{}", version_tag, fragment));
    }
  }

  if is_latest {
    if distribution.is_default() {
      tags.push("latest".to_string());
    }
    tags.extend(distribution.tag_fragments().into_iter().map(String::from));
  }

  tags
}

/// Generate stackbrew entries from releases
///
/// Contract: `releases` must be sorted by version descending with the
/// distributions of each version consecutive (the order `prepare_releases`
/// produces); the latest pin walks the sequence exactly once.
pub fn generate_library(releases: &[Release]) -> Vec<ManifestEntry> {
  let mut entries = Vec::with_capacity(releases.len());
  let mut pin = Pin::Unset;

  for release in releases {
    let is_latest = pin.observe(&release.version);
    let tags = tags_for_release(release, is_latest);

    if tags.is_empty() {
      eprintln!("Warning: no tags generated for {}", release);
      continue;
    }

    entries.push(ManifestEntry {
      tags,
      commit: release.commit.clone(),
      version: release.version.clone(),
      distribution: release.distribution.clone(),
      fetch_ref: release.fetch_ref.clone(),
    });
  }

  entries
}
