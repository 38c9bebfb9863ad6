//! Design state and focus management for the designer TUI.

use super::super::{ArgField, Focus, PREVIEW_PAGE, WIDTH_PAGE, WIDTH_STEP};
use super::App;
use crate::help::render_help;
use crate::program::ProgramSpec;
use crate::registry::{ArgKind, ArgumentDescriptor};
use std::path::PathBuf;

impl App {
    pub(in crate::designer) fn new(spec: ProgramSpec, export_dir: PathBuf) -> Self {
        let mut app = Self {
            spec,
            export_dir,
            focus: Focus::Name,
            preview: Ok(String::new()),
            preview_scroll: 0,
            last_export: None,
            message: None,
            dialog: None,
            show_help: false,
        };
        app.refresh_preview();
        app
    }

    /// Re-render the preview from the current design.
    fn refresh_preview(&mut self) {
        self.preview = render_help(&self.spec).map_err(|err| format!("{err:#}"));
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let lines = match &self.preview {
            Ok(text) => text.lines().count(),
            Err(_) => 1,
        };
        let max_scroll = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
        self.preview_scroll = self.preview_scroll.min(max_scroll);
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Name, Focus::Description, Focus::Width];
        for row in 0..self.spec.args.len() {
            order.extend(ArgField::ALL.iter().map(|field| Focus::Arg(row, *field)));
        }
        order
    }

    pub(in crate::designer) fn next_field(&mut self) {
        self.step_focus(1);
    }

    pub(in crate::designer) fn prev_field(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.focus = order[next as usize];
    }

    pub(in crate::designer) fn move_up(&mut self) {
        self.focus = match self.focus {
            Focus::Name | Focus::Description => Focus::Name,
            Focus::Width => Focus::Description,
            Focus::Arg(0, _) => Focus::Width,
            Focus::Arg(row, field) => Focus::Arg(row - 1, field),
        };
    }

    pub(in crate::designer) fn move_down(&mut self) {
        let rows = self.spec.args.len();
        self.focus = match self.focus {
            Focus::Name => Focus::Description,
            Focus::Description => Focus::Width,
            Focus::Width => Focus::Arg(0, ArgField::Name),
            Focus::Arg(row, field) if row + 1 < rows => Focus::Arg(row + 1, field),
            focus => focus,
        };
    }

    pub(in crate::designer) fn move_left(&mut self) {
        match self.focus {
            Focus::Width => self.adjust_width(-WIDTH_STEP),
            Focus::Arg(_, ArgField::Kind) => self.toggle_kind(),
            Focus::Arg(row, field) if field.index() > 0 => {
                self.focus = Focus::Arg(row, ArgField::ALL[field.index() - 1]);
            }
            _ => {}
        }
    }

    pub(in crate::designer) fn move_right(&mut self) {
        match self.focus {
            Focus::Width => self.adjust_width(WIDTH_STEP),
            Focus::Arg(_, ArgField::Kind) => self.toggle_kind(),
            Focus::Arg(row, field) => {
                self.focus = Focus::Arg(row, ArgField::ALL[field.index() + 1]);
            }
            _ => {}
        }
    }

    /// PageUp/PageDown: coarse slider steps on the width, preview scrolling elsewhere.
    pub(in crate::designer) fn page(&mut self, forward: bool) {
        if self.focus == Focus::Width {
            self.adjust_width(if forward { WIDTH_PAGE } else { -WIDTH_PAGE });
        } else {
            self.scroll_preview(if forward { PREVIEW_PAGE } else { -PREVIEW_PAGE });
        }
    }

    fn adjust_width(&mut self, delta: i32) {
        self.spec.adjust_width(delta);
        self.refresh_preview();
    }

    pub(in crate::designer) fn scroll_preview(&mut self, delta: i16) {
        let next = i32::from(self.preview_scroll) + i32::from(delta);
        self.preview_scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX);
        self.clamp_scroll();
    }

    pub(in crate::designer) fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Width => {}
            Focus::Arg(_, ArgField::Kind) => match c {
                ' ' => self.toggle_kind(),
                'f' => self.set_kind(ArgKind::Flag),
                'o' => self.set_kind(ArgKind::Option),
                _ => {}
            },
            _ => self.edit_text(|text| text.push(c)),
        }
    }

    /// Enter: newline in the description, next field everywhere else.
    pub(in crate::designer) fn newline(&mut self) {
        if self.focus == Focus::Description {
            self.edit_text(|text| text.push('\n'));
        } else {
            self.next_field();
        }
    }

    pub(in crate::designer) fn backspace(&mut self) {
        self.edit_text(|text| {
            text.pop();
        });
    }

    pub(in crate::designer) fn clear_field(&mut self) {
        self.edit_text(String::clear);
    }

    fn edit_text<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut String),
    {
        match self.focus {
            Focus::Name => edit(&mut self.spec.name),
            Focus::Description => edit(&mut self.spec.description),
            Focus::Width | Focus::Arg(_, ArgField::Kind) => return,
            Focus::Arg(row, field) => {
                let Some(mut descriptor) = self.spec.args.get(row).cloned() else {
                    return;
                };
                match field {
                    ArgField::Name => edit(&mut descriptor.name),
                    ArgField::Flags => edit(&mut descriptor.flags),
                    ArgField::Help => edit(&mut descriptor.help),
                    ArgField::Kind => return,
                }
                self.spec.args.update(row, descriptor);
            }
        }
        self.refresh_preview();
    }

    fn toggle_kind(&mut self) {
        if let Some(kind) = self.focused_descriptor().map(|descriptor| descriptor.kind) {
            self.set_kind(kind.toggled());
        }
    }

    fn set_kind(&mut self, kind: ArgKind) {
        let Focus::Arg(row, _) = self.focus else {
            return;
        };
        let Some(mut descriptor) = self.spec.args.get(row).cloned() else {
            return;
        };
        descriptor.kind = kind;
        self.spec.args.update(row, descriptor);
        self.refresh_preview();
    }

    fn focused_descriptor(&self) -> Option<&ArgumentDescriptor> {
        match self.focus {
            Focus::Arg(row, _) => self.spec.args.get(row),
            _ => None,
        }
    }

    pub(in crate::designer) fn add_argument(&mut self) {
        let row = self.spec.args.add();
        self.focus = Focus::Arg(row, ArgField::Name);
        self.set_message(format!("added argument {}", row + 1));
        self.refresh_preview();
    }

    pub(in crate::designer) fn remove_argument(&mut self) {
        let Focus::Arg(row, field) = self.focus else {
            self.set_message("select an argument row to remove".to_string());
            return;
        };
        if !self.spec.args.remove(row) {
            self.set_message("at least one argument is required".to_string());
            return;
        }
        let last = self.spec.args.len() - 1;
        self.focus = Focus::Arg(row.min(last), field);
        self.set_message(format!("removed argument {}", row + 1));
        self.refresh_preview();
    }

    pub(in crate::designer) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(in crate::designer) fn is_help_shown(&self) -> bool {
        self.show_help
    }

    pub(in crate::designer) fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub(in crate::designer) fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub(in crate::designer) fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }
}
