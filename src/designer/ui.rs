//! TUI event loop for the designer.

use super::app::App;
use super::external::ScreenGuard;
use super::EVENT_POLL_MS;
use crate::program::ProgramSpec;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

pub(super) fn run_tui(spec: ProgramSpec, export_dir: PathBuf) -> Result<()> {
    let mut app = App::new(spec, export_dir);

    let mut guard = ScreenGuard::acquire()?;
    let mut terminal = {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        ratatui::Terminal::new(backend).context("init terminal")?
    };

    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("draw designer ui")?;

        if !event::poll(Duration::from_millis(EVENT_POLL_MS)).context("poll event")? {
            continue;
        }
        let Event::Key(key) = event::read().context("read event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if app.has_dialog() {
            app.dismiss_dialog();
            continue;
        }
        let Some(action) = action_from_key(key) else {
            continue;
        };
        match action {
            Action::Quit => {
                if app.is_help_shown() {
                    app.toggle_help();
                } else {
                    break;
                }
            }
            Action::NextField => app.next_field(),
            Action::PrevField => app.prev_field(),
            Action::Up => app.move_up(),
            Action::Down => app.move_down(),
            Action::Left => app.move_left(),
            Action::Right => app.move_right(),
            Action::PageUp => app.page(false),
            Action::PageDown => app.page(true),
            Action::Insert(c) => app.insert_char(c),
            Action::Newline => app.newline(),
            Action::Backspace => app.backspace(),
            Action::ClearField => app.clear_field(),
            Action::AddArgument => app.add_argument(),
            Action::RemoveArgument => app.remove_argument(),
            Action::Export => app.export(),
            Action::CopyPreview => {
                if let Err(err) = app.copy_preview(&mut guard, &mut terminal) {
                    app.set_message(format!("copy failed: {err}"));
                }
            }
            Action::OpenExport => {
                if let Err(err) = app.open_export(&mut guard, &mut terminal) {
                    app.set_message(format!("open editor failed: {err}"));
                }
            }
            Action::ToggleHelp => app.toggle_help(),
        }
    }

    drop(guard);
    terminal.show_cursor().ok();
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Quit,
    NextField,
    PrevField,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Insert(char),
    Newline,
    Backspace,
    ClearField,
    AddArgument,
    RemoveArgument,
    Export,
    CopyPreview,
    OpenExport,
    ToggleHelp,
}

fn action_from_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::AddArgument),
            KeyCode::Char('d') => Some(Action::RemoveArgument),
            KeyCode::Char('e') => Some(Action::Export),
            KeyCode::Char('y') => Some(Action::CopyPreview),
            KeyCode::Char('o') => Some(Action::OpenExport),
            KeyCode::Char('u') => Some(Action::ClearField),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextField),
        KeyCode::BackTab => Some(Action::PrevField),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Enter => Some(Action::Newline),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        let key = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(action_from_key(key), Some(Action::Export));
        let key = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(action_from_key(key), Some(Action::Insert('e')));
        let key = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(action_from_key(key), Some(Action::Insert('E')));
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(action_from_key(key), Some(Action::AddArgument));
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(action_from_key(key), Some(Action::Quit));
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action_from_key(key), Some(Action::Newline));
    }

    #[test]
    fn unbound_control_keys_are_ignored() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(action_from_key(key), None);
    }
}
