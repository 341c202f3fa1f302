//! `stackbrew-gen generate` - print the manifest fragment for a major version

use crate::commands::build_entries;
use crate::core::error::Result;
use crate::core::manifest;

/// Run the generate command
pub fn run_generate(major: u32, remote: String, verbose: bool, json: bool) -> Result<()> {
  let entries = build_entries(major, &remote, verbose)?;

  if json {
    let values: Vec<serde_json::Value> = entries.iter().map(|e| e.to_json()).collect();
    println!("{}", serde_json::to_string_pretty(&values)?);
  } else {
    println!("{}", manifest::render(&entries).trim_end());
  }

  Ok(())
}
