//! CLI argument parsing for the help designer.
//!
//! Every command works on the same in-memory design, seeded from defaults, an
//! optional JSON file, and per-field overrides (in that order).
use crate::program::{self, ProgramSpec, MAX_WIDTH, MIN_WIDTH};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "help-designer",
    version,
    about = "Design a command-line help menu and export it as a clap program",
    after_help = "Commands:\n  design   Interactive designer with live preview (default)\n  preview  Print the rendered help menu\n  export   Write cli.rs to the current directory\n\nExamples:\n  help-designer\n  help-designer preview --name mycli --width 60\n  help-designer export --seed design.json"
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub design: DesignArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive designer with live preview
    Design(DesignArgs),
    /// Print the rendered help menu
    Preview(DesignArgs),
    /// Write generated code to cli.rs in the current directory
    Export(DesignArgs),
}

/// Inputs that seed the initial design.
#[derive(Args, Debug, Clone, Default)]
pub struct DesignArgs {
    /// JSON file with name, description, width and args
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Program name shown in the usage line
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Program description shown above the usage line
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Terminal width used to wrap the help menu
    #[arg(
        long,
        value_name = "COLUMNS",
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_WIDTH)..=i64::from(MAX_WIDTH))
    )]
    pub width: Option<u16>,

    /// Emit debug logging to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl DesignArgs {
    /// Resolve the starting design from defaults, seed file, and flags.
    pub fn load_spec(&self) -> Result<ProgramSpec> {
        let mut spec = ProgramSpec::default();
        if let Some(path) = &self.seed {
            program::load_seed(path)?.apply(&mut spec);
            tracing::debug!(path = %path.display(), "applied seed file");
        }
        if let Some(name) = &self.name {
            spec.name = name.clone();
        }
        if let Some(description) = &self.description {
            spec.description = description.clone();
        }
        if let Some(width) = self.width {
            spec.set_width(width);
        }
        Ok(spec)
    }
}

impl RootArgs {
    /// Subcommand to run; the bare invocation opens the designer.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Design(self.design))
    }
}
