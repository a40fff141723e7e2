use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use crate::{
    form::CounterQuestion,
    tui::{
        strings::CounterStrings,
        views::{ColorStyle, style::ListStyle},
    },
};

#[derive(Default)]
struct AnswerCountCache {
    answered: usize,
    total: usize,
    formatted_value: String,
}

impl AnswerCountCache {
    fn get_answer_count(&mut self, answered: usize, total: usize) -> &str {
        let cache_invalid = self.formatted_value.is_empty()
            || answered != self.answered
            || total != self.total;

        if cache_invalid {
            self.formatted_value = format!("[{}/{}]", answered, total);
            self.answered = answered;
            self.total = total;
        }

        &self.formatted_value
    }
}

/// Left-hand list of questions with their answered marker and current value.
#[derive(Default)]
pub struct QuestionList {
    list_state: ListState,
    answer_count_cache: AnswerCountCache,
}

impl QuestionList {
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    /// Moves the selection down, stopping at the last of `len` questions.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = (self.selected() + 1).min(len - 1);
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let previous = self.selected().saturating_sub(1);
        self.list_state.select(Some(previous));
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        questions: &[CounterQuestion],
        list_style: &ListStyle,
        color_style: &ColorStyle,
    ) {
        let render_items: Vec<ListItem> = questions
            .iter()
            .map(|question| -> ListItem<'static> {
                let icon = if question.answer().is_some() {
                    &list_style.icon_answered
                } else {
                    &list_style.icon_unanswered
                };
                match question.answer() {
                    Some(_) => ListItem::new(format!(
                        "{} {}: {}",
                        icon,
                        question.label,
                        question.display_text()
                    )),
                    None => ListItem::new(format!("{} {}", icon, question.label)),
                }
            })
            .collect();

        let apply_font_weight = |style: Style| -> Style {
            list_style
                .font_weight
                .map_or(style, |m| style.add_modifier(m))
        };

        let list = List::new(render_items)
            .style(apply_font_weight(
                Style::default()
                    .fg(color_style.text_list)
                    .bg(color_style.background_list),
            ))
            .highlight_style(apply_font_weight(
                Style::default()
                    .bg(color_style.highlights_background)
                    .fg(color_style.highlights_text),
            ))
            .highlight_symbol(list_style.highlight_symbol.as_str());

        let mut outer_block = Block::default().title(CounterStrings::TITLE_QUESTIONS);

        if let Some(borders) = list_style.borders {
            outer_block = outer_block.borders(borders).border_style(
                Style::default()
                    .fg(color_style.borders_list)
                    .bg(color_style.background_list),
            );
        }

        let inner_area = outer_block.inner(area);

        frame.render_widget(outer_block, area);

        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner_area);

        let answered = questions.iter().filter(|q| q.answer().is_some()).count();
        let count_text = self
            .answer_count_cache
            .get_answer_count(answered, questions.len());

        let answer_count = Paragraph::new(count_text)
            .alignment(Alignment::Right)
            .style(apply_font_weight(
                Style::default()
                    .fg(color_style.text_list)
                    .bg(color_style.background_list),
            ));

        frame.render_widget(answer_count, vertical_chunks[1]);
        frame.render_stateful_widget(list, vertical_chunks[0], &mut self.list_state);
    }
}
