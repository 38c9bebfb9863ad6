mod actions;
mod state;
mod view;


use super::Focus;
use crate::program::ProgramSpec;
use std::path::PathBuf;

pub(super) struct App {
    spec: ProgramSpec,
    /// Directory the fixed export file is written to.
    export_dir: PathBuf,
    focus: Focus,
    /// Rendered help text, or the reason it could not be rendered.
    preview: Result<String, String>,
    preview_scroll: u16,
    last_export: Option<PathBuf>,
    message: Option<String>,
    /// Modal confirmation; any key dismisses it.
    dialog: Option<String>,
    show_help: bool,
}
