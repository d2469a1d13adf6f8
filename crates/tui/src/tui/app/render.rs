use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

use taskdeck_core::display_range;

use crate::tui::constants::{APP_VERSION, SKELETON_CELL};
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, ellipsize, format_datetime, format_opt_date,
    inset_rect, kind_style, priority_style, status_style, BG_ACCENT, BG_BASE, BG_PANEL, FG_ACCENT,
};

use super::forms::FieldWidget;
use super::{App, ConfirmChoice, Listing, LoadState, Mode, Tab};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_tabs(f, chunks[1]);
        self.draw_body(f, chunks[2]);
        self.draw_footer(f, chunks[3]);

        match self.mode {
            Mode::Form => self.draw_form_overlay(f, size),
            Mode::ConfirmDelete => self.draw_confirm_overlay(f, size),
            Mode::Inspect => self.draw_detail_overlay(f, size),
            Mode::Help => self.draw_help_overlay(f, size),
            Mode::Normal | Mode::Search => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let mut left_spans = vec![
            Span::styled(
                format!(" taskdeck v{} ", APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("— {}", self.active.description())),
        ];

        let search = &self.active_store().query.search;
        if self.mode == Mode::Search {
            left_spans.push(Span::raw("  "));
            left_spans.push(Span::styled(
                format!("🔍 {}▏", self.search_input.as_str()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if !search.trim().is_empty() {
            left_spans.push(Span::raw("  "));
            left_spans.push(Span::styled(
                format!("🔍 {}", search),
                Style::default().fg(Color::Yellow),
            ));
        }

        f.render_widget(
            Paragraph::new(Line::from(left_spans)).style(Style::default().bg(BG_BASE)),
            cols[0],
        );

        let endpoint = self.service.config().endpoint().to_string();
        let right = Paragraph::new(Line::from(vec![Span::styled(
            endpoint,
            Style::default().fg(Color::DarkGray),
        )]))
        .alignment(Alignment::Right)
        .style(Style::default().bg(BG_BASE));
        f.render_widget(right, cols[1]);
    }

    fn draw_tabs(&self, f: &mut Frame<'_>, area: Rect) {
        let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
        let selected = Tab::ALL
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Views"))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .bg(BG_ACCENT)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }

    fn draw_body(&mut self, f: &mut Frame<'_>, area: Rect) {
        let store = self.active_store();

        if store.shows_skeleton() {
            self.draw_skeleton(f, area);
            return;
        }
        if store.listing.is_empty() {
            self.draw_empty_state(f, area);
            return;
        }

        let header = self.header_row();
        let (rows, widths) = self.body_rows();

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .bg(BG_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Column headers carry the active sort arrow; the digit prefix matches
    /// the key that toggles the column.
    fn header_row(&self) -> Row<'static> {
        let sort = self.active_store().query.sort;
        let cells: Vec<Cell> = self
            .active
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, (label, column))| {
                let marker = match (column, sort) {
                    (Some(column), Some(selection)) if *column == selection.column => {
                        format!(" {}", selection.order.arrow())
                    }
                    _ => String::new(),
                };
                Cell::from(format!("{} {}{}", idx + 1, label, marker))
            })
            .collect();
        Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD))
    }

    fn body_rows(&self) -> (Vec<Row<'static>>, Vec<Constraint>) {
        match &self.active_store().listing {
            Listing::Activities(items) => (
                items
                    .iter()
                    .map(|activity| {
                        Row::new(vec![
                            Cell::from(ellipsize(&activity.action, 48)),
                            Cell::from(activity.kind.label()).style(kind_style(activity.kind)),
                            Cell::from(activity.user.name.clone()),
                            Cell::from(
                                activity
                                    .target_user
                                    .as_ref()
                                    .map(|user| user.name.clone())
                                    .or_else(|| {
                                        activity
                                            .project
                                            .as_ref()
                                            .map(|project| project.name.clone())
                                    })
                                    .or_else(|| {
                                        activity.task.as_ref().map(|task| task.title.clone())
                                    })
                                    .unwrap_or_default(),
                            ),
                            Cell::from(format_datetime(&activity.created_at)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Percentage(34),
                    Constraint::Length(14),
                    Constraint::Percentage(14),
                    Constraint::Percentage(18),
                    Constraint::Length(16),
                ],
            ),
            Listing::Tasks(items) => (
                items
                    .iter()
                    .map(|task| {
                        Row::new(vec![
                            Cell::from(ellipsize(&task.title, 40)),
                            Cell::from(task.status.label()).style(status_style(task.status)),
                            Cell::from(task.priority.label())
                                .style(priority_style(task.priority)),
                            Cell::from(format_opt_date(task.due_date.as_ref())),
                            Cell::from(task.project.name.clone()),
                            Cell::from(
                                task.assignee
                                    .as_ref()
                                    .map(|user| user.name.clone())
                                    .unwrap_or_default(),
                            ),
                            Cell::from(format_datetime(&task.created_at)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Percentage(28),
                    Constraint::Length(12),
                    Constraint::Length(7),
                    Constraint::Length(11),
                    Constraint::Percentage(14),
                    Constraint::Percentage(14),
                    Constraint::Length(16),
                ],
            ),
            Listing::Users(items) => (
                items
                    .iter()
                    .map(|user| {
                        Row::new(vec![
                            Cell::from(user.name.clone()),
                            Cell::from(user.email.clone()),
                            Cell::from(format_datetime(&user.created_at)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Percentage(35),
                    Constraint::Percentage(40),
                    Constraint::Length(16),
                ],
            ),
            Listing::Projects(items) => (
                items
                    .iter()
                    .map(|project| {
                        Row::new(vec![
                            Cell::from(project.name.clone()),
                            Cell::from(ellipsize(
                                project.description.as_deref().unwrap_or_default(),
                                56,
                            )),
                            Cell::from(format_datetime(&project.created_at)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Percentage(30),
                    Constraint::Percentage(45),
                    Constraint::Length(16),
                ],
            ),
            Listing::Tags(items) => (
                items
                    .iter()
                    .map(|tag| {
                        Row::new(vec![
                            Cell::from(tag.name.clone()),
                            Cell::from(tag.color.clone().unwrap_or_default()),
                            Cell::from(format_datetime(&tag.created_at)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Percentage(40),
                    Constraint::Length(12),
                    Constraint::Length(16),
                ],
            ),
        }
    }

    /// First-load placeholder: one shimmer row per requested page slot.
    fn draw_skeleton(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = self.active.columns();
        let header = Row::new(
            columns
                .iter()
                .map(|(label, _)| Cell::from(*label))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let count = self.active_store().query.page_size.min(20) as usize;
        let rows: Vec<Row> = (0..count)
            .map(|_| {
                Row::new(
                    columns
                        .iter()
                        .map(|_| {
                            Cell::from(SKELETON_CELL)
                                .style(Style::default().fg(Color::DarkGray))
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let widths: Vec<Constraint> = columns
            .iter()
            .map(|_| Constraint::Ratio(1, columns.len() as u32))
            .collect();

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title(accent_title("Loading…"))
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(BG_PANEL)),
        );
        f.render_widget(table, area);
    }

    fn draw_empty_state(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let searching = !self.active_store().query.search.trim().is_empty();
        let heading = if searching {
            "No matches for this search 🔍"
        } else {
            match self.active {
                Tab::Activities => "No activity yet 📡",
                Tab::Tasks => "No tasks yet ✅",
                Tab::Users => "No users found 👤",
                Tab::Projects => "No projects yet 📂",
                Tab::Tags => "No tags yet 🏷",
            }
        };

        let mut lines: Vec<Line<'static>> = vec![
            Line::from(vec![Span::styled(
                heading,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::default(),
        ];

        let hint_style = Style::default().fg(Color::Gray);
        if searching {
            lines.push(Line::from(vec![Span::styled(
                "Press '/' to adjust the search, or Esc then '/' to clear it.",
                hint_style,
            )]));
        } else if self.active.supports_crud() {
            lines.push(Line::from(vec![Span::styled(
                "Press 'a' to create the first entry.",
                hint_style,
            )]));
        }
        lines.push(Line::from(vec![Span::styled(
            "Press 'r' to refetch from the server.",
            hint_style,
        )]));

        let width = inner.width.min(80).max(1);
        let height = (lines.len() as u16).saturating_add(2).min(inner.height);
        let content_area = centered_rect(width, height.max(3).min(inner.height), inner);
        f.render_widget(Clear, content_area);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .style(Style::default().bg(BG_PANEL)),
            content_area,
        );
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(
                status.text().to_string(),
                status.style(),
            )])
        } else {
            Line::from(vec![Span::raw("Ready")])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        f.render_widget(Paragraph::new(self.pagination_line()), lines[1]);

        let help = match self.mode {
            Mode::Normal => {
                "tab views | j/k rows | ←/→ pages | -/+ page size | 1-9 sort | / search | a add ✚ | e edit ✏️ | x delete 🗑 | enter details | r refetch 🔄 | h help | q quit"
            }
            Mode::Search => "Type to filter • Enter apply now • Esc close",
            Mode::Form => "Tab/Shift+Tab fields • ←/→ choices • Enter submit • Esc cancel",
            Mode::ConfirmDelete => "←/→ choose • Enter confirm • Esc cancel",
            Mode::Inspect | Mode::Help => "Enter/Esc to close",
        };
        f.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(
                help,
                Style::default().fg(Color::DarkGray),
            )])),
            lines[2],
        );
    }

    fn pagination_line(&self) -> Line<'static> {
        let store = self.active_store();
        let mut spans: Vec<Span> = Vec::new();

        if let Some(info) = store.page_info {
            match display_range(
                store.query.page as i64,
                store.query.page_size as i64,
                info.total_count,
            ) {
                Some((first, last)) => {
                    spans.push(Span::styled(
                        format!("Showing {} to {} of {}", first, last, info.total_count),
                        Style::default().fg(FG_ACCENT),
                    ));
                    spans.push(Span::raw(format!(
                        "  •  Page {} of {}",
                        store.query.page,
                        info.total_pages.max(1)
                    )));
                }
                None => {
                    spans.push(Span::styled(
                        "Showing 0 of 0",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
        } else {
            spans.push(Span::styled(
                "Waiting for first page…",
                Style::default().fg(Color::DarkGray),
            ));
        }

        spans.push(Span::raw(format!("  •  {}/page", store.query.page_size)));

        if store.is_loading() && !store.listing.is_empty() {
            spans.push(Span::styled(
                "  ⟳ refreshing…",
                Style::default().fg(Color::Yellow),
            ));
        }
        if let LoadState::Error(_) = store.load {
            spans.push(Span::styled(
                "  ⚠ last fetch failed",
                Style::default().fg(Color::Red),
            ));
        }

        Line::from(spans)
    }

    fn draw_form_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let Some(form) = self.form.as_ref() else {
            return;
        };

        let width = min(area.width.saturating_sub(10), 72).max(40);
        // Two lines per field leaves room for inline errors.
        let height = (form.fields.len() as u16 * 2 + 6).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(form.title()))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        for (idx, field) in form.fields.iter().enumerate() {
            let focused = idx == form.focus;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if field.required { "*" } else { " " };

            let value = match &field.widget {
                FieldWidget::Text(buffer) => {
                    if focused {
                        format!("{}▏", buffer.as_str())
                    } else {
                        buffer.as_str().to_string()
                    }
                }
                FieldWidget::Select { .. } => {
                    if focused {
                        format!("◂ {} ▸", field.display_value())
                    } else {
                        field.display_value().to_string()
                    }
                }
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{}{:<26}", marker, field.label), label_style),
                Span::raw(value),
            ]));

            if let Some(message) = form.errors.get(field.key) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(message.to_string(), Style::default().fg(Color::Red)),
                ]));
            } else {
                lines.push(Line::default());
            }
        }

        if let Some(error) = &form.submit_error {
            lines.push(Line::from(vec![Span::styled(
                error.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]));
        } else if form.submitting {
            lines.push(Line::from(vec![Span::styled(
                "Submitting…",
                Style::default().fg(Color::Yellow),
            )]));
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }

    fn draw_confirm_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(20), 60).max(40);
        let popup_area = centered_rect(width, 8, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🗑 Confirm Deletion"))
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let label = self
            .confirm_target
            .as_ref()
            .map(|(_, label)| label.as_str())
            .unwrap_or("selected entry");

        let mut lines = vec![
            Line::from(vec![Span::styled(
                "This action cannot be undone.",
                Style::default().fg(Color::Red),
            )]),
            Line::from(vec![Span::styled(
                format!("Delete '{}'?", ellipsize(label, 40)),
                Style::default().fg(Color::White),
            )]),
            Line::default(),
        ];

        let yes_style = if self.confirm_choice == ConfirmChoice::Yes {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };
        let no_style = if self.confirm_choice == ConfirmChoice::No {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled("  Yes  ", yes_style),
            Span::raw("    "),
            Span::styled("  No  ", no_style),
        ]));

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }

    fn draw_detail_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let Some(entries) = self.inspect_entries.as_ref() else {
            return;
        };
        if entries.is_empty() {
            return;
        }

        let width = min(area.width.saturating_sub(20), 90).max(40);
        let height = (entries.len() as u16 + 6)
            .min(area.height.saturating_sub(2))
            .max(6);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🗒 Details"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let rows: Vec<Row> = entries
            .iter()
            .map(|(key, value)| {
                Row::new(vec![
                    Cell::from(key.clone())
                        .style(Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD)),
                    Cell::from(value.clone()),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(20)])
            .block(Block::default().style(Style::default().bg(BG_PANEL)))
            .column_spacing(2);
        f.render_widget(table, inset_rect(inner, 1));
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let entries = build_help_lines();
        let width = min(area.width.saturating_sub(10), 90);
        let height = min(entries.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let lines: Vec<Line> = entries
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(format!("{:<18}", combo), Style::default().fg(Color::Cyan)),
                    Span::raw(desc),
                ])
            })
            .collect();

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }
}
