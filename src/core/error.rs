//! Error types for stackbrew-gen with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and
//! provides contextual help messages to users.

use std::fmt;
use std::io;

/// Exit codes for stackbrew-gen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid args, missing files, empty selection)
  User = 1,
  /// System error (git, network, I/O)
  System = 2,
  /// Validation failure (malformed version or Dockerfile data)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for stackbrew-gen
#[derive(Debug)]
pub enum Error {
  /// Malformed version or distribution text
  Parse(ParseError),

  /// Git operation errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl Error {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    Error::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    Error::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      Error::Message { message, context, help } => Error::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      Error::Parse(_) => ExitCode::Validation,
      // An empty tag list is a usage-level outcome, not a git failure
      Error::Git(GitError::NoTagsFound { .. }) => ExitCode::User,
      Error::Git(_) => ExitCode::System,
      Error::Io(_) => ExitCode::System,
      Error::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      Error::Parse(e) => e.help_message(),
      Error::Git(e) => e.help_message(),
      Error::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Parse(e) => write!(f, "{}", e),
      Error::Git(e) => write!(f, "{}", e),
      Error::Io(e) => write!(f, "I/O error: {}", e),
      Error::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for Error {
  fn from(err: io::Error) -> Self {
    Error::Io(err)
  }
}

impl From<String> for Error {
  fn from(msg: String) -> Self {
    Error::message(msg)
  }
}

impl From<&str> for Error {
  fn from(msg: &str) -> Self {
    Error::message(msg)
  }
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Error::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for Error {
  fn from(err: std::string::FromUtf8Error) -> Self {
    Error::message(format!("UTF-8 conversion error: {}", err))
  }
}

impl From<ParseError> for Error {
  fn from(err: ParseError) -> Self {
    Error::Parse(err)
  }
}

impl From<GitError> for Error {
  fn from(err: GitError) -> Self {
    Error::Git(err)
  }
}

/// Parse errors for version strings and Dockerfile FROM lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  /// Version string does not match `<major>.<minor>[.<patch>]<suffix>`
  Version { input: String },

  /// Major version below 1
  MajorOutOfRange { input: String, major: u32 },

  /// Line is not a `FROM <image>` instruction
  FromLine { line: String },

  /// Base image is neither alpine nor debian
  UnsupportedImage { image: String },

  /// Dockerfile has no FROM line at all
  MissingFrom { path: String },
}

impl ParseError {
  fn help_message(&self) -> Option<String> {
    match self {
      ParseError::Version { .. } | ParseError::MajorOutOfRange { .. } => {
        Some("Versions should look like 'X.Y.Z' or 'vX.Y.Z' with an optional suffix such as '-m01' or '-rc1'.".to_string())
      }
      ParseError::FromLine { .. } | ParseError::UnsupportedImage { .. } | ParseError::MissingFrom { .. } => {
        Some("The Dockerfile must start from a supported base image (alpine:* or debian:*).".to_string())
      }
    }
  }
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::Version { input } => {
        write!(f, "Invalid version format: {}", input)
      }
      ParseError::MajorOutOfRange { input, major } => {
        write!(f, "Major version must be at least 1, got {} in: {}", major, input)
      }
      ParseError::FromLine { line } => {
        write!(f, "Invalid FROM line: {}", line)
      }
      ParseError::UnsupportedImage { image } => {
        write!(f, "Unsupported base image: {}", image)
      }
      ParseError::MissingFrom { path } => {
        write!(f, "No FROM line found in {}", path)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// git binary not on PATH
  GitNotFound,

  /// No remote tags match the requested major version
  NoTagsFound { major: u32 },

  /// File missing at a given revision
  FileNotFound { commit: String, path: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::CommandFailed { command, .. } => {
        if command.contains("ls-remote") {
          Some("Check that the remote repository exists and is accessible.".to_string())
        } else if command.contains("fetch") {
          Some("Ensure you have network access and proper git credentials.".to_string())
        } else {
          None
        }
      }
      GitError::GitNotFound => Some("Install git and make sure it is on PATH.".to_string()),
      GitError::NoTagsFound { major } => Some(format!(
        "Expected at least one tag matching refs/tags/v{}.* on the remote.",
        major
      )),
      GitError::FileNotFound { .. } => {
        Some("Verify that the commit exists locally (was it fetched?) and contains the requested file.".to_string())
      }
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::GitNotFound => {
        write!(f, "Git command not found. Is git installed?")
      }
      GitError::NoTagsFound { major } => {
        write!(f, "No tags found for major version {}", major)
      }
      GitError::FileNotFound { commit, path } => {
        write!(f, "Failed to get {} from {}", path, commit)
      }
    }
  }
}

/// Result type alias for stackbrew-gen
pub type Result<T> = std::result::Result<T, Error>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> Result<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> Result<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
  E: Into<Error>,
{
  fn context(self, ctx: impl Into<String>) -> Result<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> Result<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &Error) {
  eprintln!("\nError: {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("Help: {}\n", help);
  }
}

/// Convert anyhow::Error to Error (for helpers that produce anyhow results)
impl From<anyhow::Error> for Error {
  fn from(err: anyhow::Error) -> Self {
    Error::message(err.to_string())
  }
}
