use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

use crate::tui::{
    screens::Status,
    views::{ColorStyle, style::StatusStyle},
};

#[derive(Default)]
pub struct StatusBar;

impl StatusBar {
    pub fn get_status_line(status: &Status, status_style: &StatusStyle) -> String {
        let icon = match status {
            Status::Idle => &status_style.idle_icon,
            Status::Modified => &status_style.modified_icon,
            Status::Saved => &status_style.saved_icon,
            Status::Error(_) => &status_style.error_icon,
        };
        format!("{} {} ", status, icon)
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        status: &Status,
        title: &str,
        area: Rect,
        status_style: &StatusStyle,
        color_style: &ColorStyle,
    ) {
        let mut outer_block = Block::default();

        if let Some(borders) = status_style.borders {
            outer_block = outer_block.borders(borders);
        }

        outer_block = outer_block.border_style(
            Style::default()
                .fg(color_style.borders_status)
                .bg(color_style.background_status),
        );

        let inner_area = outer_block.inner(area);

        frame.render_widget(outer_block, area);

        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner_area);

        let status_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(status_style.left_split),
                Constraint::Percentage(status_style.right_split),
            ])
            .split(vertical_chunks[1]);

        let status_line = Self::get_status_line(status, status_style);

        let mut text_style = Style::default()
            .fg(color_style.text_status)
            .bg(color_style.background_status);

        if let Some(font_weight) = status_style.font_weight {
            text_style = text_style.add_modifier(font_weight);
        }

        let left_status = Paragraph::new(title)
            .alignment(Alignment::Left)
            .style(text_style);
        let right_status = Paragraph::new(status_line)
            .alignment(Alignment::Right)
            .style(text_style);

        frame.render_widget(left_status, status_chunks[0]);
        frame.render_widget(right_status, status_chunks[1]);
    }
}
