//! Product version parsing and ordering
//!
//! Versions come from git tags such as `v8.2.1`, `v8.2.1-m01` or `v7.4.0-eol`.
//! The suffix carries lineage facts: a non-empty suffix marks a pre-release,
//! a suffix ending in `-eol` marks the whole minor line as end-of-life.

use crate::core::error::ParseError;
use std::cmp::Ordering;
use std::fmt;

/// A parsed product version
///
/// Immutable once constructed; `parse` is the only way to build one, so an
/// invalid version (major < 1, malformed numerics) is never observable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
  pub major: u32,
  pub minor: u32,
  pub patch: Option<u32>,
  /// Everything after the numeric part, leading `-` included (may be empty)
  pub suffix: String,
}

impl Version {
  /// Parse a version string such as `v8.2.1-m01`, `8.2` or `7.4.0-eol`
  ///
  /// An optional leading `v` is stripped. The major component must be a
  /// decimal integer without leading zeros and at least 1.
  pub fn parse(input: &str) -> Result<Self, ParseError> {
    let text = input.strip_prefix('v').unwrap_or(input);

    let (major, rest) = take_number(text).ok_or_else(|| ParseError::Version {
      input: input.to_string(),
    })?;

    // Reject leading zeros on the major ("01.2" is not a version)
    let major_len = text.len() - rest.len();
    if major_len > 1 && text.starts_with('0') {
      return Err(ParseError::Version {
        input: input.to_string(),
      });
    }
    if major < 1 {
      return Err(ParseError::MajorOutOfRange {
        input: input.to_string(),
        major,
      });
    }

    let rest = rest.strip_prefix('.').ok_or_else(|| ParseError::Version {
      input: input.to_string(),
    })?;
    let (minor, rest) = take_number(rest).ok_or_else(|| ParseError::Version {
      input: input.to_string(),
    })?;

    // A patch is only consumed when a digit follows the dot; otherwise the
    // dot belongs to the suffix ("8.2.x" keeps ".x" as suffix)
    let (patch, suffix) = match rest.strip_prefix('.') {
      Some(after_dot) => match take_number(after_dot) {
        Some((patch, tail)) => (Some(patch), tail),
        None => (None, rest),
      },
      None => (None, rest),
    };

    Ok(Version {
      major,
      minor,
      patch,
      suffix: suffix.to_string(),
    })
  }

  /// Whether this is a pre-release (any suffix at all)
  pub fn is_prerelease(&self) -> bool {
    !self.suffix.is_empty()
  }

  /// Whether this version marks its minor line end-of-life
  pub fn is_end_of_life(&self) -> bool {
    self.suffix.to_ascii_lowercase().ends_with("-eol")
  }

  /// The minor line this version belongs to (`"8.2"`)
  pub fn minor_line(&self) -> String {
    format!("{}.{}", self.major, self.minor)
  }

  /// Pre-release class weight: rc trains outrank milestone trains
  fn suffix_class(&self) -> u8 {
    let bare = self.suffix.trim_start_matches('-');
    if bare.starts_with("rc") {
      2
    } else if bare.starts_with('m') {
      1
    } else {
      0
    }
  }
}

/// Scan a leading run of ASCII digits; None if there is none
fn take_number(s: &str) -> Option<(u32, &str)> {
  let end = s.bytes().take_while(|b| b.is_ascii_digit()).count();
  if end == 0 {
    return None;
  }
  let value = s[..end].parse().ok()?;
  Some((value, &s[end..]))
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.major, self.minor)?;
    if let Some(patch) = self.patch {
      write!(f, ".{}", patch)?;
    }
    write!(f, "{}", self.suffix)
  }
}

impl Ord for Version {
  /// Strict total order used for sorting and "latest" detection
  ///
  /// Primary key is `(major, minor, patch-or-0)`. On a tie, a GA release
  /// (empty suffix) sorts after any pre-release; among pre-releases the
  /// class weight decides (`rc*` > `m*` > other), then the full suffix
  /// lexicographically.
  fn cmp(&self, other: &Self) -> Ordering {
    let key = (self.major, self.minor, self.patch.unwrap_or(0));
    let other_key = (other.major, other.minor, other.patch.unwrap_or(0));
    key
      .cmp(&other_key)
      .then_with(|| match (self.suffix.is_empty(), other.suffix.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => self
          .suffix_class()
          .cmp(&other.suffix_class())
          .then_with(|| self.suffix.cmp(&other.suffix)),
      })
  }
}

impl PartialOrd for Version {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl serde::Serialize for Version {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}
