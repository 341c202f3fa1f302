//! End-to-end tests for `stackbrew-gen update`

use crate::helpers::{TestRepos, run_stackbrew, run_stackbrew_raw};
use anyhow::Result;

const HEADER: &str = "\
# this file is generated via https://github.com/example/docker-image\n\
\n\
Maintainers: Someone <someone@example.com> (@someone)\n\
GitRepo: https://github.com/example/docker-image.git\n";

fn stanza(tags: &str, fetch: &str) -> String {
  format!(
    "Tags: {}\nArchitectures: amd64, arm64v8\nGitCommit: {}\nGitFetch: {}\nDirectory: debian\n",
    tags,
    "a".repeat(40),
    fetch
  )
}

#[test]
fn test_update_replaces_major_in_place() -> Result<()> {
  let repos = TestRepos::new()?;
  repos.seed_standard_history()?;

  let seven = stanza("7.4.2, 7.4, 7.4.2-bookworm", "refs/tags/v7.4.2");
  let stale_eight = stanza("8.0.3, 8.0, 8.0.3-bookworm", "refs/tags/v8.0.3");
  let nine = stanza("9.0.0-m01, 9.0.0-m01-bookworm", "refs/tags/v9.0.0-m01");
  let manifest_path = repos.work.join("library");
  std::fs::write(
    &manifest_path,
    format!("{}\n{}\n{}\n{}", HEADER, seven, stale_eight, nine),
  )?;

  let output = run_stackbrew(
    &repos.work,
    &["update", "8", "--input", manifest_path.to_str().unwrap()],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  // Header preserved byte-for-byte at the top
  assert!(stdout.starts_with(HEADER));

  // Major 7 and 9 stanzas survive verbatim, stale 8 entries are gone
  assert!(stdout.contains(seven.trim_end()));
  assert!(stdout.contains(nine.trim_end()));
  assert!(!stdout.contains("8.0.3"));

  // Fresh 8.x entries sit between them
  let new_pos = stdout.find("Tags: 8.1.1, 8.1, 8,").expect("fresh entries present");
  assert!(stdout.find("Tags: 7.4.2").unwrap() < new_pos);
  assert!(new_pos < stdout.find("Tags: 9.0.0-m01").unwrap());

  Ok(())
}

#[test]
fn test_update_appends_when_major_absent() -> Result<()> {
  let repos = TestRepos::new()?;
  repos.seed_standard_history()?;

  let seven = stanza("7.4.2, 7.4, 7.4.2-bookworm", "refs/tags/v7.4.2");
  let manifest_path = repos.work.join("library");
  std::fs::write(&manifest_path, format!("{}\n{}", HEADER, seven))?;

  let output = run_stackbrew(
    &repos.work,
    &["update", "8", "--input", manifest_path.to_str().unwrap()],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.starts_with(HEADER));
  assert!(stdout.find("Tags: 7.4.2").unwrap() < stdout.find("Tags: 8.1.1").unwrap());

  Ok(())
}

#[test]
fn test_update_writes_output_file() -> Result<()> {
  let repos = TestRepos::new()?;
  repos.seed_standard_history()?;

  let manifest_path = repos.work.join("library");
  let out_path = repos.work.join("library.new");
  std::fs::write(&manifest_path, HEADER)?;

  let output = run_stackbrew(
    &repos.work,
    &[
      "update",
      "8",
      "--input",
      manifest_path.to_str().unwrap(),
      "--output",
      out_path.to_str().unwrap(),
    ],
  )?;

  // Nothing on stdout when writing to a file
  assert!(output.stdout.is_empty());

  let written = std::fs::read_to_string(&out_path)?;
  assert!(written.starts_with(HEADER.trim_end()));
  assert!(written.contains("Tags: 8.1.1, 8.1, 8,"));

  // The input file itself is untouched
  assert_eq!(std::fs::read_to_string(&manifest_path)?, HEADER);

  Ok(())
}

#[test]
fn test_update_is_stable_when_run_twice() -> Result<()> {
  let repos = TestRepos::new()?;
  repos.seed_standard_history()?;

  let manifest_path = repos.work.join("library");
  let seven = stanza("7.4.2, 7.4, 7.4.2-bookworm", "refs/tags/v7.4.2");
  std::fs::write(&manifest_path, format!("{}\n{}", HEADER, seven))?;

  let first = run_stackbrew(
    &repos.work,
    &["update", "8", "--input", manifest_path.to_str().unwrap()],
  )?;
  std::fs::write(&manifest_path, &first.stdout)?;

  let second = run_stackbrew(
    &repos.work,
    &["update", "8", "--input", manifest_path.to_str().unwrap()],
  )?;

  assert_eq!(first.stdout, second.stdout);

  Ok(())
}

#[test]
fn test_update_missing_input_exits_nonzero() -> Result<()> {
  let repos = TestRepos::new()?;
  repos.seed_standard_history()?;

  let output = run_stackbrew_raw(&repos.work, &["update", "8", "--input", "does-not-exist"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist"));

  Ok(())
}
