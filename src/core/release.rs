//! Data carried between pipeline stages

use crate::core::distro::Distribution;
use crate::core::version::Version;
use serde::Serialize;
use std::fmt;

/// A version selected for publication, still tied to its tag
#[derive(Debug, Clone)]
pub struct TaggedVersion {
  pub version: Version,
  pub commit: String,
  pub tag_ref: String,
}

/// A publishable release: one selected version on one base distribution
#[derive(Debug, Clone, Serialize)]
pub struct Release {
  pub commit: String,
  pub version: Version,
  pub distribution: Distribution,
  /// Git fetch reference, e.g. `refs/tags/v8.2.1`
  pub fetch_ref: String,
}

impl fmt::Display for Release {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let short = &self.commit[..self.commit.len().min(8)];
    write!(
      f,
      "{} {} {} {}",
      short, self.version, self.distribution.kind, self.distribution.name
    )
  }
}
