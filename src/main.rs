use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod cli;
mod designer;
mod export;
mod help;
mod program;
mod registry;

use cli::{Command, DesignArgs, RootArgs};

const LOG_FILE_NAME: &str = "help-designer.log";

fn main() -> Result<()> {
    let command = RootArgs::parse().into_command();
    match command {
        Command::Design(args) => {
            init_tracing(&args, LogTarget::File)?;
            designer::run(&args)
        }
        Command::Preview(args) => {
            init_tracing(&args, LogTarget::Stderr)?;
            cmd_preview(&args)
        }
        Command::Export(args) => {
            init_tracing(&args, LogTarget::Stderr)?;
            cmd_export(&args)
        }
    }
}

fn cmd_preview(args: &DesignArgs) -> Result<()> {
    let spec = args.load_spec()?;
    let help = help::render_help(&spec)?;
    print!("{help}");
    Ok(())
}

fn cmd_export(args: &DesignArgs) -> Result<()> {
    let spec = args.load_spec()?;
    let cwd = std::env::current_dir().context("resolve current directory")?;
    let path = export::export_code(&spec, &cwd)?;
    println!("{}", export::export_message(&path));
    Ok(())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    /// The designer owns the terminal, so logs go to a file in the temp dir.
    File,
}

fn init_tracing(args: &DesignArgs, target: LogTarget) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::new(value),
        _ if args.verbose => EnvFilter::new("debug"),
        _ if target == LogTarget::File => return Ok(()),
        _ => EnvFilter::new("warn"),
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File => {
            let path = std::env::temp_dir().join(LOG_FILE_NAME);
            let file =
                File::create(&path).with_context(|| format!("create log {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
    }
    Ok(())
}
