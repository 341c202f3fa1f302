//! CLI commands for stackbrew-gen
//!
//! - **generate**: print the stackbrew fragment for one major version
//! - **update**: splice a freshly generated fragment into an existing
//!   manifest document
//!
//! Both commands share the same pipeline driver: select versions from the
//! remote tags, fetch the tagged commits, look up each revision's base
//! distributions, derive tags. Diagnostics go to stderr; the manifest is the
//! only thing written to stdout.

pub mod generate;
pub mod update;

pub use generate::run_generate;
pub use update::run_update;

use crate::core::error::{Error, Result};
use crate::core::library::{self, ManifestEntry};
use crate::core::vcs::{RemoteGit, SystemGit};
use crate::core::{detect, select};

/// Run the full pipeline for one major version
///
/// Fails (exit code 1 at the CLI) when no versions survive selection or no
/// release could be paired with a distribution.
pub fn build_entries(major: u32, remote: &str, verbose: bool) -> Result<Vec<ManifestEntry>> {
  let git = SystemGit::new(remote);

  if verbose {
    eprintln!("Selecting versions for major {} from remote {}", major, remote);
  }

  let versions = select::actual_versions(&git, major)?;
  if versions.is_empty() {
    return Err(Error::message(format!("No versions found for major version {}", major)));
  }

  if verbose {
    for tv in &versions {
      eprintln!("  {} - {}", tv.version, &tv.commit[..tv.commit.len().min(8)]);
    }
  }

  // The Dockerfile lookups below read these commits locally
  let refs: Vec<String> = versions.iter().map(|tv| tv.commit.clone()).collect();
  git.fetch_refs(&refs)?;

  let releases = detect::prepare_releases(&git, &versions, verbose);
  if releases.is_empty() {
    return Err(Error::message("No releases prepared"));
  }

  let entries = library::generate_library(&releases);
  if entries.is_empty() {
    return Err(Error::message("No stackbrew content generated"));
  }

  if verbose {
    eprintln!("Generated {} stackbrew entries", entries.len());
  }

  Ok(entries)
}
