//! System git backend - zero dependencies
//!
//! Shells out to git for all remote operations. Subprocesses run with an
//! isolated environment (cleared env, whitelisted PATH/HOME, safe config
//! overrides) so global git configuration cannot change behavior.

use crate::core::error::{Error, GitError, Result, ResultExt};
use crate::core::vcs::RemoteGit;
use std::io::ErrorKind;
use std::process::Command;

/// Git backend using system git
pub struct SystemGit {
  /// Remote name or URL tags are listed from and refs fetched from
  remote: String,
}

impl SystemGit {
  pub fn new(remote: impl Into<String>) -> Self {
    Self { remote: remote.into() }
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }

  /// Run a prepared git command, mapping failures to GitError
  fn run(&self, cmd: &mut Command, what: &str) -> Result<std::process::Output> {
    let output = cmd.output().map_err(|e| {
      if e.kind() == ErrorKind::NotFound {
        Error::Git(GitError::GitNotFound)
      } else {
        Error::Io(e)
      }
    })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(Error::Git(GitError::CommandFailed {
        command: what.to_string(),
        stderr: stderr.trim().to_string(),
      }));
    }

    Ok(output)
  }
}

impl RemoteGit for SystemGit {
  fn list_remote_tags(&self, major: u32) -> Result<Vec<(String, String)>> {
    let pattern = format!("refs/tags/v{}.*", major);
    let output = self.run(
      self
        .git_cmd()
        .args(["ls-remote", "--refs", "--tags"])
        .arg(&self.remote)
        .arg(&pattern),
      &format!("git ls-remote --refs --tags {} {}", self.remote, pattern),
    )?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut tags = Vec::new();
    for line in stdout.lines() {
      // ls-remote output is "<sha>\t<ref>"
      if let Some((commit, tag_ref)) = line.split_once('\t') {
        tags.push((commit.to_string(), tag_ref.to_string()));
      }
    }

    if tags.is_empty() {
      return Err(Error::Git(GitError::NoTagsFound { major }));
    }

    Ok(tags)
  }

  fn fetch_refs(&self, refs: &[String]) -> Result<()> {
    if refs.is_empty() {
      return Ok(());
    }

    // Shallow CI checkouts need the full history behind the tagged commits;
    // --unshallow fails on an already-complete repo, so fall back to a
    // plain fetch in that case.
    let unshallow = self.run(
      self
        .git_cmd()
        .args(["fetch", "--unshallow"])
        .arg(&self.remote)
        .args(refs),
      &format!("git fetch --unshallow {}", self.remote),
    );

    if unshallow.is_ok() {
      return Ok(());
    }

    self
      .run(
        self.git_cmd().arg("fetch").arg(&self.remote).args(refs),
        &format!("git fetch {}", self.remote),
      )
      .map(|_| ())
  }

  fn show_file(&self, commit: &str, path: &str) -> Result<String> {
    let spec = format!("{}:{}", commit, path);
    let output = self
      .run(self.git_cmd().args(["show", &spec]), &format!("git show {}", spec))
      .map_err(|_| {
        Error::Git(GitError::FileNotFound {
          commit: commit.to_string(),
          path: path.to_string(),
        })
      })?;

    String::from_utf8(output.stdout).context(format!("Non-UTF-8 content in {}", spec))
  }
}
