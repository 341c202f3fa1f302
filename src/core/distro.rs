//! Base distribution parsing from Dockerfile FROM lines
//!
//! Each tagged revision carries one Dockerfile per supported base
//! distribution (`debian/Dockerfile`, `alpine/Dockerfile`). The FROM line
//! decides the concrete distribution name and, from that, the tag fragments
//! and CPU architectures an image entry advertises.

use crate::core::error::ParseError;
use serde::Serialize;
use std::fmt;

/// Supported base distribution kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistroKind {
  Alpine,
  Debian,
}

impl DistroKind {
  /// Directory name inside the product repo holding this kind's Dockerfile
  pub fn as_str(self) -> &'static str {
    match self {
      DistroKind::Alpine => "alpine",
      DistroKind::Debian => "debian",
    }
  }
}

impl fmt::Display for DistroKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A concrete base distribution (`alpine3.22`, `bookworm`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
  pub kind: DistroKind,
  pub name: String,
}

impl Distribution {
  /// Parse a distribution from a Dockerfile FROM line
  ///
  /// `FROM alpine:3.22` → alpine / `alpine3.22`
  /// `FROM debian:bookworm-slim` → debian / `bookworm`
  pub fn from_dockerfile_line(from_line: &str) -> Result<Self, ParseError> {
    let mut parts = from_line.split_whitespace();
    let keyword = parts.next();
    let image = parts.next();

    let image = match (keyword, image) {
      (Some(kw), Some(image)) if kw.eq_ignore_ascii_case("from") => image,
      _ => {
        return Err(ParseError::FromLine {
          line: from_line.to_string(),
        });
      }
    };

    if let Some(idx) = image.find("alpine:") {
      let tag = &image[idx + "alpine:".len()..];
      Ok(Distribution {
        kind: DistroKind::Alpine,
        name: format!("alpine{}", tag),
      })
    } else if let Some(idx) = image.find("debian:") {
      let tag = &image[idx + "debian:".len()..];
      Ok(Distribution {
        kind: DistroKind::Debian,
        name: tag.replace("-slim", ""),
      })
    } else {
      Err(ParseError::UnsupportedImage {
        image: image.to_string(),
      })
    }
  }

  /// Parse the distribution out of full Dockerfile content (first FROM line)
  pub fn from_dockerfile(content: &str, path: &str) -> Result<Self, ParseError> {
    let from_line = content
      .lines()
      .map(str::trim)
      .find(|line| line.get(..5).is_some_and(|head| head.eq_ignore_ascii_case("from ")))
      .ok_or_else(|| ParseError::MissingFrom { path: path.to_string() })?;

    Self::from_dockerfile_line(from_line)
  }

  /// Whether this is the default distribution (Debian entries get bare tags)
  pub fn is_default(&self) -> bool {
    self.kind == DistroKind::Debian
  }

  /// Tag name fragments for this distribution
  ///
  /// Alpine entries are reachable both by kind (`-alpine`) and by concrete
  /// name (`-alpine3.22`); Debian entries only by concrete name.
  pub fn tag_fragments(&self) -> Vec<&str> {
    match self.kind {
      DistroKind::Alpine => vec![self.kind.as_str(), &self.name],
      DistroKind::Debian => vec![&self.name],
    }
  }

  /// CPU architectures published for this distribution kind
  pub fn architectures(&self) -> &'static [&'static str] {
    match self.kind {
      DistroKind::Alpine => &[
        "amd64", "arm32v6", "arm32v7", "arm64v8", "i386", "ppc64le", "riscv64", "s390x",
      ],
      // Debian list doubles as the fallback for anything unrecognized
      DistroKind::Debian => &[
        "amd64", "arm32v5", "arm32v7", "arm64v8", "i386", "mips64le", "ppc64le", "s390x",
      ],
    }
  }
}
