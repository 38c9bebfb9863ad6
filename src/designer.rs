//! Interactive help-menu designer.
//!
//! A full-screen terminal window with the program fields, a width slider, one
//! editable row per argument and a live preview of the rendered help menu.
//! Every edit re-renders the preview.
mod app;
mod external;
mod format;
mod text;
mod ui;

use crate::cli::DesignArgs;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal};

const EVENT_POLL_MS: u64 = 200;
const WIDTH_STEP: i32 = 1;
const WIDTH_PAGE: i32 = 10;
const PREVIEW_PAGE: i16 = 10;

/// Column of an argument row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ArgField {
    Name,
    Flags,
    Help,
    Kind,
}

impl ArgField {
    const ALL: [ArgField; 4] = [ArgField::Name, ArgField::Flags, ArgField::Help, ArgField::Kind];

    fn index(self) -> usize {
        match self {
            ArgField::Name => 0,
            ArgField::Flags => 1,
            ArgField::Help => 2,
            ArgField::Kind => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ArgField::Name => "Name",
            ArgField::Flags => "Flags",
            ArgField::Help => "Help",
            ArgField::Kind => "Kind",
        }
    }
}

/// Widget that currently receives keystrokes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
    Name,
    Description,
    Width,
    Arg(usize, ArgField),
}

/// Run the designer, falling back to a printed preview for non-TTY environments.
pub fn run(args: &DesignArgs) -> Result<()> {
    let spec = args.load_spec()?;
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return text::run_text_preview(&spec);
    }
    let export_dir = std::env::current_dir().context("resolve current directory")?;
    ui::run_tui(spec, export_dir)
}
