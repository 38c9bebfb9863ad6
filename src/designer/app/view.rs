use super::super::format::{field_text, multiline_text, truncate_text};
use super::super::{ArgField, Focus};
use super::App;
use crate::program::{MAX_WIDTH, MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, LineGauge, Paragraph, Row, Table, TableState, Wrap,
};
use ratatui::Frame;
use std::cmp::min;

const TITLE: &str = concat!("CLI Help Menu Designer v", env!("CARGO_PKG_VERSION"));
const MAX_VISIBLE_ROWS: usize = 8;
const NAME_COLUMN: u16 = 14;
const FLAGS_COLUMN: u16 = 18;
const HELP_COLUMN: u16 = 32;
const KIND_COLUMN: u16 = 8;

impl App {
    pub(in crate::designer) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let table_rows = min(self.spec.args.len(), MAX_VISIBLE_ROWS) as u16;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(table_rows + 3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_title(frame, layout[0]);
        self.draw_name(frame, layout[1]);
        self.draw_description(frame, layout[2]);
        self.draw_width(frame, layout[3]);
        self.draw_arguments(frame, layout[4]);
        self.draw_preview(frame, layout[5]);
        self.draw_footer(frame, layout[6]);

        if self.show_help {
            self.draw_help(frame);
        }
        if let Some(dialog) = &self.dialog {
            draw_dialog(frame, dialog);
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | export dir: "),
            Span::raw(self.export_dir.display().to_string()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_name(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Name;
        let text = field_text(&self.spec.name, focused, area.width.saturating_sub(2) as usize);
        let paragraph = Paragraph::new(text).block(field_block("Program Name", focused));
        frame.render_widget(paragraph, area);
    }

    fn draw_description(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Description;
        let text = multiline_text(&self.spec.description, focused);
        // Keep the last lines visible while typing.
        let lines = text.lines().count().max(1) as u16;
        let inner = area.height.saturating_sub(2);
        let scroll = lines.saturating_sub(inner);
        let paragraph = Paragraph::new(text)
            .block(field_block("Program Description (Enter for newline)", focused))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_width(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Width;
        let width = self.spec.width();
        let ratio = f64::from(width - MIN_WIDTH) / f64::from(MAX_WIDTH - MIN_WIDTH);
        let title = format!("Terminal Width ({MIN_WIDTH}-{MAX_WIDTH}, Left/Right to slide)");
        let gauge = LineGauge::default()
            .block(field_block(&title, focused))
            .filled_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!("{width:>3} columns "));
        frame.render_widget(gauge, area);
    }

    fn draw_arguments(&self, frame: &mut Frame, area: Rect) {
        let focused_row = match self.focus {
            Focus::Arg(row, _) => Some(row),
            _ => None,
        };
        let can_remove = self.spec.args.len() > 1;
        let header = Row::new(
            ["#"]
                .into_iter()
                .chain(ArgField::ALL.iter().map(|field| field.label()))
                .chain([""])
                .map(Cell::from)
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self
            .spec
            .args
            .iter()
            .enumerate()
            .map(|(row, descriptor)| {
                let mut cells = vec![Cell::from(format!("{}", row + 1))];
                for field in ArgField::ALL {
                    let focused = self.focus == Focus::Arg(row, field);
                    let text = match field {
                        ArgField::Name => {
                            field_text(&descriptor.name, focused, NAME_COLUMN as usize)
                        }
                        ArgField::Flags => {
                            field_text(&descriptor.flags, focused, FLAGS_COLUMN as usize)
                        }
                        ArgField::Help => {
                            field_text(&descriptor.help, focused, HELP_COLUMN as usize)
                        }
                        ArgField::Kind if focused => format!("<{}>", descriptor.kind.as_str()),
                        ArgField::Kind => descriptor.kind.as_str().to_string(),
                    };
                    let style = if focused {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };
                    cells.push(Cell::from(text).style(style));
                }
                let remove_style = if can_remove {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };
                cells.push(Cell::from("[x]").style(remove_style));
                let row_style = if focused_row == Some(row) {
                    Style::default().fg(Color::Yellow)
                } else if descriptor.has_flags() {
                    Style::default()
                } else {
                    // rows without flags are not rendered
                    Style::default().add_modifier(Modifier::DIM)
                };
                Row::new(cells).style(row_style)
            })
            .collect::<Vec<_>>();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(NAME_COLUMN + 1),
            Constraint::Length(FLAGS_COLUMN + 1),
            Constraint::Min(HELP_COLUMN / 2),
            Constraint::Length(KIND_COLUMN + 2),
            Constraint::Length(3),
        ];
        let title = format!(
            "Arguments ({}) | Ctrl-A add | Ctrl-D remove",
            self.spec.args.len()
        );
        let table = Table::new(rows, widths)
            .header(header)
            .block(field_block(&title, focused_row.is_some()));
        let mut state = TableState::default();
        state.select(focused_row);
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_preview(&self, frame: &mut Frame, area: Rect) {
        let title = format!("Help Menu Preview ({} columns)", self.spec.width());
        let block = Block::default().borders(Borders::ALL).title(title);
        let paragraph = match &self.preview {
            Ok(help) => Paragraph::new(Text::from(help.as_str()))
                .block(block)
                .scroll((self.preview_scroll, 0)),
            Err(err) => Paragraph::new(Line::from(Span::styled(
                format!("error: {err}"),
                Style::default().fg(Color::Red),
            )))
            .block(block)
            .wrap(Wrap { trim: true }),
        };
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let message = self.message.clone().unwrap_or_else(|| {
            "Tab next | arrows move | ^A add | ^D remove | ^E export | ^Y copy | ^O open export | F1 help | ^Q quit"
                .to_string()
        });
        let message = truncate_text(&message, area.width as usize);
        let paragraph =
            Paragraph::new(message).style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame) {
        let area = centered_rect(70, 70, frame.area());
        let lines = vec![
            Line::from("Keys:"),
            Line::from("  Tab / Shift+Tab: next / previous field"),
            Line::from("  Up/Down: move between fields and argument rows"),
            Line::from("  Left/Right: slide width, toggle kind, change column"),
            Line::from("  PageUp/PageDown: slide width by 10, or scroll preview"),
            Line::from("  Enter: newline in description, next field elsewhere"),
            Line::from("  Space / f / o: toggle kind, set flag, set option"),
            Line::from("  Backspace / Ctrl-U: delete character / clear field"),
            Line::from("  Ctrl-A: add argument"),
            Line::from("  Ctrl-D: remove focused argument"),
            Line::from("  Ctrl-E: export code to cli.rs"),
            Line::from("  Ctrl-Y: copy preview to clipboard"),
            Line::from("  Ctrl-O: open exported file in $VISUAL / $EDITOR"),
            Line::from("  F1: toggle help"),
            Line::from("  Ctrl-Q / Esc: quit"),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title.to_string())
}

fn draw_dialog(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 20, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("press any key"),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Export"))
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
