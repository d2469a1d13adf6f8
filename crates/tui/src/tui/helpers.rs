use std::cmp::min;

use chrono::{DateTime, Local, NaiveDate, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use taskdeck_core::model::{ActivityKind, TaskPriority, TaskStatus};

pub const BG_BASE: Color = Color::Rgb(15, 18, 24);
pub const BG_PANEL: Color = Color::Rgb(23, 27, 35);
pub const BG_ACCENT: Color = Color::Rgb(33, 38, 48);
pub const FG_ACCENT: Color = Color::Rgb(125, 160, 250);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}

pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = (*value).into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_opt_date(value: Option<&NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Todo => Style::default().fg(Color::Gray),
        TaskStatus::InProgress => Style::default().fg(Color::Yellow),
        TaskStatus::Done => Style::default().fg(Color::Green),
    }
}

pub fn priority_style(priority: TaskPriority) -> Style {
    match priority {
        TaskPriority::Low => Style::default().fg(Color::Blue),
        TaskPriority::Medium => Style::default().fg(Color::Yellow),
        TaskPriority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn kind_style(kind: ActivityKind) -> Style {
    match kind {
        ActivityKind::Create => Style::default().fg(Color::Green),
        ActivityKind::Update => Style::default().fg(Color::Cyan),
        ActivityKind::Delete => Style::default().fg(Color::Red),
        ActivityKind::Comment => Style::default().fg(Color::Magenta),
        ActivityKind::Assign => Style::default().fg(Color::Blue),
        ActivityKind::StatusChange => Style::default().fg(Color::Yellow),
    }
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab / Shift+Tab", "Switch dashboard views"),
        ("j / k or ↓ / ↑", "Move row selection"),
        ("← / →", "Previous / next page"),
        ("- / +", "Cycle rows per page"),
        ("1-9", "Sort by column (again to flip order)"),
        ("/", "Search the current view"),
        ("a", "Create (tasks and activity views)"),
        ("e", "Edit selected row"),
        ("x / Delete", "Delete selected row (with confirmation)"),
        ("Enter", "Row details"),
        ("r", "Refetch now"),
        ("h", "Toggle this help overlay"),
        ("q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_keeps_short_text_intact() {
        assert_eq!(ellipsize("deploy", 10), "deploy");
        assert_eq!(ellipsize("a much longer piece of text", 10), "a much lo…");
    }

    #[test]
    fn centered_rect_stays_within_bounds() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = centered_rect(120, 40, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
