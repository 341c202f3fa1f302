//! `stackbrew-gen update` - splice fresh entries into an existing manifest

use crate::commands::build_entries;
use crate::core::error::{Error, Result, ResultExt};
use crate::core::manifest;
use std::path::PathBuf;

/// Run the update command
pub fn run_update(
  major: u32,
  input: PathBuf,
  output: Option<PathBuf>,
  remote: String,
  verbose: bool,
) -> Result<()> {
  if !input.exists() {
    return Err(Error::with_help(
      format!("Input file does not exist: {}", input.display()),
      "Pass the path of the stackbrew library file to update with --input.",
    ));
  }

  let entries = build_entries(major, &remote, verbose)?;
  let new_content = manifest::render(&entries);

  let existing =
    std::fs::read_to_string(&input).with_context(|| format!("Failed to read {}", input.display()))?;
  let updated = manifest::update_content(&existing, major, new_content.trim_end());

  match output {
    Some(path) => {
      std::fs::write(&path, &updated).with_context(|| format!("Failed to write {}", path.display()))?;
      if verbose {
        eprintln!("Updated {} for major version {}", path.display(), major);
      }
    }
    None => println!("{}", updated),
  }

  Ok(())
}
