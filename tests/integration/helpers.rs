//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A product repository playing the remote: tagged commits carrying one
/// Dockerfile per distribution, plus a work-tree clone the CLI runs in
pub struct TestRepos {
  _remote_dir: TempDir,
  _work_dir: TempDir,
  pub remote: PathBuf,
  pub work: PathBuf,
}

impl TestRepos {
  /// Create an empty remote and a clone of it
  pub fn new() -> Result<Self> {
    let remote_dir = TempDir::new()?;
    let remote = remote_dir.path().to_path_buf();

    git(&remote, &["init", "--initial-branch=main"])?;
    git(&remote, &["config", "user.name", "Test User"])?;
    git(&remote, &["config", "user.email", "test@example.com"])?;
    // The CLI fetches tagged commits by SHA
    git(&remote, &["config", "uploadpack.allowAnySHA1InWant", "true"])?;

    std::fs::write(remote.join("README.md"), "# product\n")?;
    git(&remote, &["add", "."])?;
    git(&remote, &["commit", "-m", "Initial commit"])?;

    let work_dir = TempDir::new()?;
    let work = work_dir.path().join("clone");
    git(
      work_dir.path(),
      &["clone", remote.to_str().unwrap(), work.to_str().unwrap()],
    )?;
    git(&work, &["config", "user.name", "Test User"])?;
    git(&work, &["config", "user.email", "test@example.com"])?;

    Ok(Self {
      _remote_dir: remote_dir,
      _work_dir: work_dir,
      remote,
      work,
    })
  }

  /// Commit Dockerfiles to the remote and tag the commit
  ///
  /// `debian`/`alpine` are base image references for the FROM line; pass
  /// None to leave that Dockerfile out of the commit entirely.
  pub fn tag_release(&self, tag: &str, debian: Option<&str>, alpine: Option<&str>) -> Result<String> {
    match debian {
      Some(image) => {
        std::fs::create_dir_all(self.remote.join("debian"))?;
        std::fs::write(
          self.remote.join("debian/Dockerfile"),
          format!("FROM {}\nCOPY . /app\n", image),
        )?;
      }
      None => {
        let _ = std::fs::remove_dir_all(self.remote.join("debian"));
      }
    }
    match alpine {
      Some(image) => {
        std::fs::create_dir_all(self.remote.join("alpine"))?;
        std::fs::write(
          self.remote.join("alpine/Dockerfile"),
          format!("FROM {}\nCOPY . /app\n", image),
        )?;
      }
      None => {
        let _ = std::fs::remove_dir_all(self.remote.join("alpine"));
      }
    }

    git(&self.remote, &["add", "-A"])?;
    // Allow empty so several tags can share one tree
    git(&self.remote, &["commit", "--allow-empty", "-m", &format!("Release {}", tag)])?;
    git(&self.remote, &["tag", tag])?;

    let output = git(&self.remote, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Tag the current remote HEAD with an additional name
  pub fn tag_head(&self, tag: &str) -> Result<()> {
    git(&self.remote, &["tag", tag])?;
    Ok(())
  }

  /// Seed a standard 8.x history: an EOL'd 8.0 line, a GA 8.1 line and a
  /// milestone on 8.2
  pub fn seed_standard_history(&self) -> Result<()> {
    self.tag_release("v8.0.0", Some("debian:bookworm-slim"), Some("alpine:3.20"))?;
    self.tag_head("v8.0.0-eol")?;
    self.tag_release("v8.1.0", Some("debian:bookworm-slim"), Some("alpine:3.21"))?;
    self.tag_release("v8.1.1", Some("debian:bookworm-slim"), Some("alpine:3.22"))?;
    self.tag_release("v8.2.0-m01", Some("debian:bookworm-slim"), Some("alpine:3.22"))?;
    Ok(())
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the stackbrew-gen CLI, failing the test on non-zero exit
pub fn run_stackbrew(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_stackbrew_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "stackbrew-gen command failed: stackbrew-gen {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the stackbrew-gen CLI without asserting on the exit status
pub fn run_stackbrew_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_stackbrew-gen");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run stackbrew-gen")
}
