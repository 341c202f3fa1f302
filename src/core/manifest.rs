//! Manifest rendering and update-in-place merging
//!
//! The stackbrew manifest is a free-text header followed by blank-line
//! separated stanzas of five labeled lines (`Tags`, `Architectures`,
//! `GitCommit`, `GitFetch`, `Directory`). Updating means replacing all
//! stanzas of one major version in place, leaving the header and every
//! other stanza untouched.

use crate::core::library::ManifestEntry;

/// Render entries to manifest text, blank line between stanzas
pub fn render(entries: &[ManifestEntry]) -> String {
  let mut out = String::new();
  for (i, entry) in entries.iter().enumerate() {
    if i > 0 {
      out.push('\n');
    }
    out.push_str(&render_entry(entry));
  }
  out
}

fn render_entry(entry: &ManifestEntry) -> String {
  format!(
    "Tags: {}\nArchitectures: {}\nGitCommit: {}\nGitFetch: {}\nDirectory: {}\n",
    entry.tags.join(", "),
    entry.distribution.architectures().join(", "),
    entry.commit,
    entry.fetch_ref,
    entry.distribution.kind,
  )
}

const ENTRY_LABELS: [&str; 4] = ["Architectures:", "GitCommit:", "GitFetch:", "Directory:"];

/// Splice freshly generated content for one major version into a document
///
/// The header (everything before the first `Tags:` line) is preserved
/// byte-for-byte. Existing stanzas are partitioned positionally: stanzas
/// before the first target-major stanza stay in front, the target-major
/// block is replaced by `new_content`, everything from the first subsequent
/// non-matching stanza on stays behind it. A document with no `Tags:` line
/// at all gets the new content appended instead.
pub fn update_content(existing: &str, major: u32, new_content: &str) -> String {
  let lines: Vec<&str> = existing.split('\n').collect();

  let Some(first_entry) = lines.iter().position(|line| line.starts_with("Tags:")) else {
    return format!("{}\n\n{}", existing.trim_end(), new_content);
  };

  let header = &lines[..first_entry];
  let entries = parse_entries(&lines[first_entry..]);

  let mut before: Vec<Vec<String>> = Vec::new();
  let mut after: Vec<Vec<String>> = Vec::new();
  let mut target_seen = false;

  for entry in entries {
    if entry_belongs_to_major(&entry, major) {
      target_seen = true;
    } else if !target_seen {
      before.push(entry);
    } else {
      after.push(entry);
    }
  }

  let mut result: Vec<String> = header.iter().map(|s| s.to_string()).collect();

  for entry in before {
    push_separated(&mut result, entry);
  }
  push_separated(&mut result, new_content.split('\n').map(String::from).collect());
  for entry in after {
    push_separated(&mut result, entry);
  }

  result.join("\n")
}

/// Append an entry's lines, inserting a blank line when the previous
/// emitted line is non-blank
fn push_separated(result: &mut Vec<String>, entry: Vec<String>) {
  if result.last().is_some_and(|line| !line.trim().is_empty()) {
    result.push(String::new());
  }
  result.extend(entry);
}

/// Group entry lines: each group runs from a `Tags:` line up to the next
///
/// Trailing blank lines stay attached to the preceding group, so stanza
/// spacing survives reassembly. Lines that are neither labels nor blanks
/// are dropped, matching the update semantics of the published manifests.
fn parse_entries(lines: &[&str]) -> Vec<Vec<String>> {
  let mut entries: Vec<Vec<String>> = Vec::new();
  let mut current: Vec<String> = Vec::new();

  for raw in lines {
    let line = raw.trim_end();

    if line.starts_with("Tags:") {
      if !current.is_empty() {
        entries.push(std::mem::take(&mut current));
      }
      current.push(line.to_string());
    } else if !current.is_empty()
      && (line.trim().is_empty() || ENTRY_LABELS.iter().any(|label| line.starts_with(label)))
    {
      current.push(line.to_string());
    }
  }

  if !current.is_empty() {
    entries.push(current);
  }

  entries
}

/// Whether any tag on the stanza's `Tags:` line belongs to the major
/// version (`8`, `8.2`, `8.2.1-m01`, `8-alpine`, ...)
fn entry_belongs_to_major(entry: &[String], major: u32) -> bool {
  let Some(tags_line) = entry.iter().find(|line| line.starts_with("Tags:")) else {
    return false;
  };

  let major_str = major.to_string();
  tags_line["Tags:".len()..].split(',').map(str::trim).any(|tag| {
    tag
      .strip_prefix(&major_str)
      .is_some_and(|rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('-'))
  })
}
