use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    form::CounterQuestion,
    tui::{
        strings::CounterStrings,
        views::{ColorStyle, style::CounterStyle},
    },
};

const BUTTON_WIDTH: u16 = 11;
const BUTTON_HEIGHT: u16 = 3;

/// Renders one counter question: label, hint and the `[-] value [+]` row.
///
/// Button affordances are read from the question on every frame.
#[derive(Default)]
pub struct CounterView {
    decrease_caption: String,
    increase_caption: String,
}

impl CounterView {
    /// Sets the button captions, e.g. `- (←)`.
    pub fn configure(&mut self, style: &CounterStyle, decrease_key: &str, increase_key: &str) {
        self.decrease_caption = format!("{} ({})", style.decrease_label, decrease_key);
        self.increase_caption = format!("{} ({})", style.increase_label, increase_key);
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        question: Option<&CounterQuestion>,
        counter_style: &CounterStyle,
        color_style: &ColorStyle,
    ) {
        let mut outer_block = Block::default().style(
            Style::default()
                .fg(color_style.text_counter)
                .bg(color_style.background_counter),
        );

        if let Some(borders) = counter_style.borders {
            outer_block = outer_block
                .borders(borders)
                .border_style(Style::default().fg(color_style.borders_counter));
        }

        let Some(question) = question else {
            frame.render_widget(outer_block, area);
            return;
        };

        if question.read_only {
            outer_block = outer_block.title(format!(
                "{} ({})",
                question.name,
                CounterStrings::LABEL_READ_ONLY
            ));
        } else {
            outer_block = outer_block.title(question.name.as_str());
        }

        let inner_area = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Min(0),
            ])
            .split(inner_area);

        let mut label_style = Style::default().fg(color_style.text_counter);
        if let Some(font_weight) = counter_style.font_weight {
            label_style = label_style.add_modifier(font_weight);
        }
        let label = Paragraph::new(question.label.as_str())
            .style(label_style)
            .wrap(Wrap { trim: true });
        frame.render_widget(label, vertical_chunks[0]);

        if counter_style.show_hint
            && let Some(hint) = &question.hint
        {
            let hint = Paragraph::new(hint.as_str())
                .style(
                    Style::default()
                        .fg(color_style.text_hint)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, vertical_chunks[1]);
        }

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(vertical_chunks[2]);

        self.render_button(
            frame,
            row[0],
            &self.decrease_caption,
            question.decrease_enabled(),
            color_style,
        );
        self.render_button(
            frame,
            row[2],
            &self.increase_caption,
            question.increase_enabled(),
            color_style,
        );

        let value = value_text(question, counter_style);
        let value_paragraph = Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(label_style)
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
        frame.render_widget(value_paragraph, row[1]);
    }

    fn render_button(
        &self,
        frame: &mut Frame,
        area: Rect,
        caption: &str,
        enabled: bool,
        color_style: &ColorStyle,
    ) {
        let color = if enabled {
            color_style.button_enabled
        } else {
            color_style.button_disabled
        };
        let mut style = Style::default().fg(color);
        if enabled {
            style = style.add_modifier(Modifier::BOLD);
        }

        let button = Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(button, area);
    }
}

/// Text shown between the buttons: the value, or `empty_placeholder`
/// (empty by default) when unanswered.
pub fn value_text(question: &CounterQuestion, counter_style: &CounterStyle) -> String {
    match question.answer() {
        Some(_) => question.display_text(),
        None => counter_style.empty_placeholder.clone(),
    }
}
