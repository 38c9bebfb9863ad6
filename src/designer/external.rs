use anyhow::{anyhow, Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use shell_words::split as shell_split;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

const CLIPBOARD_HELPERS: [(&str, &[&str]); 4] = [
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

pub(super) type DesignerTerminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

pub(super) fn open_in_editor(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!("missing file {}", path.display()));
    }
    let cmd = resolve_command(&["VISUAL", "EDITOR"], "vi");
    run_command(cmd, path)
}

fn resolve_command(vars: &[&str], fallback: &str) -> Vec<String> {
    for var in vars {
        let Ok(value) = std::env::var(var) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        if let Ok(parts) = shell_split(&value) {
            if !parts.is_empty() {
                return parts;
            }
        }
    }
    vec![fallback.to_string()]
}

fn run_command(mut cmd: Vec<String>, path: &Path) -> Result<()> {
    if cmd.is_empty() {
        return Err(anyhow!("missing command"));
    }
    let program = cmd.remove(0);
    let status = Command::new(&program)
        .args(cmd)
        .arg(path)
        .status()
        .with_context(|| format!("run {program}"))?;
    if !status.success() {
        return Err(anyhow!("{program} exited with {status}"));
    }
    Ok(())
}

/// Pipe `text` into the first clipboard helper that is installed.
pub(super) fn try_copy_to_clipboard(text: &str) -> Result<bool> {
    for (program, args) in CLIPBOARD_HELPERS {
        let mut command = Command::new(program);
        command
            .args(args.iter())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(_) => continue,
        };
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes()).ok();
        }
        // Close stdin so the helper sees EOF.
        drop(child.stdin.take());
        let status = child.wait()?;
        if status.success() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Hand the terminal to `f`, then restore the designer screen.
///
/// Failing to take the screen back is reported even when `f` succeeded, so the
/// caller never keeps drawing into a cooked terminal.
pub(super) fn run_external<M, B, F>(
    guard: &mut ScreenGuard<M>,
    terminal: &mut ratatui::Terminal<B>,
    f: F,
) -> Result<()>
where
    M: ScreenMode,
    B: Backend,
    F: FnOnce() -> Result<()>,
{
    guard.release()?;
    let outcome = f();
    guard.take_back()?;
    terminal.clear().context("redraw designer screen")?;
    outcome
}

/// Switches the terminal between the designer screen and the normal one.
pub(super) trait ScreenMode {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode plus the alternate screen, driven through crossterm.
#[derive(Debug, Default)]
pub(super) struct CrosstermScreen;

impl ScreenMode for CrosstermScreen {
    fn enter(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        enable_raw_mode()
    }

    fn leave(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)
    }
}

/// Holds the designer screen and gives it back on drop.
pub(super) struct ScreenGuard<M: ScreenMode = CrosstermScreen> {
    mode: M,
    held: bool,
}

impl ScreenGuard {
    pub(super) fn acquire() -> Result<Self> {
        ScreenGuard::with_mode(CrosstermScreen)
    }
}

impl<M: ScreenMode> ScreenGuard<M> {
    fn with_mode(mode: M) -> Result<Self> {
        let mut guard = Self { mode, held: false };
        guard.take_back()?;
        Ok(guard)
    }

    pub(super) fn release(&mut self) -> Result<()> {
        if !self.held {
            return Ok(());
        }
        self.held = false;
        self.mode.leave().context("leave designer screen")
    }

    pub(super) fn take_back(&mut self) -> Result<()> {
        if self.held {
            return Ok(());
        }
        // Marked held first so a half-entered screen is still left on drop.
        self.held = true;
        self.mode.enter().context("enter designer screen")
    }
}

impl<M: ScreenMode> Drop for ScreenGuard<M> {
    fn drop(&mut self) {
        self.release().ok();
    }
}
