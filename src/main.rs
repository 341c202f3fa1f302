mod commands;
mod core;

use clap::{Parser, Subcommand};
use crate::core::error::{Error, print_error};
use std::path::PathBuf;

/// Generate and update Docker stackbrew library manifests from release tags
#[derive(Parser)]
#[command(name = "stackbrew-gen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate stackbrew library content for a major version
  Generate {
    /// Major version to process (e.g. 8 for the 8.x line)
    major_version: u32,
    /// Git remote to list tags from and fetch refs from
    #[arg(long, default_value = "origin")]
    remote: String,
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
    /// Output entries in JSON format instead of manifest text
    #[arg(long)]
    json: bool,
  },

  /// Update a stackbrew library file, replacing entries for a major version
  Update {
    /// Major version to update (e.g. 8 for the 8.x line)
    major_version: u32,
    /// Path to the stackbrew library file to update
    #[arg(short, long)]
    input: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Git remote to list tags from and fetch refs from
    #[arg(long, default_value = "origin")]
    remote: String,
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Generate {
      major_version,
      remote,
      verbose,
      json,
    } => commands::run_generate(major_version, remote, verbose, json),
    Commands::Update {
      major_version,
      input,
      output,
      remote,
      verbose,
    } => commands::run_update(major_version, input, output, remote, verbose),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: Error) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
