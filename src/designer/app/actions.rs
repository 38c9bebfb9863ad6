//! Actions for the designer TUI.

use super::super::external::{
    open_in_editor, run_external, try_copy_to_clipboard, DesignerTerminal, ScreenGuard,
};
use super::App;
use crate::export::{export_code, export_message};
use anyhow::{anyhow, Result};
use std::io::{self, BufRead, Write};

impl App {
    /// Write the generated program and raise the confirmation dialog.
    pub(in crate::designer) fn export(&mut self) {
        match export_code(&self.spec, &self.export_dir) {
            Ok(path) => {
                self.dialog = Some(export_message(&path));
                self.message = Some(format!("wrote {}", path.display()));
                self.last_export = Some(path);
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "export failed");
                self.set_message(format!("export failed: {err:#}"));
            }
        }
    }

    pub(in crate::designer) fn copy_preview(
        &mut self,
        guard: &mut ScreenGuard,
        terminal: &mut DesignerTerminal,
    ) -> Result<()> {
        let text = self
            .preview
            .as_ref()
            .map_err(|err| anyhow!("nothing to copy: {err}"))?
            .clone();
        if try_copy_to_clipboard(&text)? {
            self.set_message("copied preview to clipboard".to_string());
            return Ok(());
        }
        run_external(guard, terminal, || {
            show_until_enter(&text, &mut io::stdin().lock(), &mut io::stdout().lock())
        })?;
        self.set_message("no clipboard helper found; preview shown in the terminal".to_string());
        Ok(())
    }

    pub(in crate::designer) fn open_export(
        &mut self,
        guard: &mut ScreenGuard,
        terminal: &mut DesignerTerminal,
    ) -> Result<()> {
        let Some(path) = self.last_export.clone() else {
            return Err(anyhow!("nothing exported yet (Ctrl-E to export)"));
        };
        run_external(guard, terminal, || open_in_editor(&path))
    }
}

/// Print `text` on the normal screen and hold it there until Enter is pressed.
fn show_until_enter(text: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    output.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(output)?;
    }
    write!(output, "\n-- press Enter to return to the designer --")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
