use ratatui::{
    Frame,
    layout::{Direction, Layout, Rect},
};
use tracing::debug;

use crate::{
    form::{CounterQuestion, Form},
    tui::{
        events::InputEvent,
        intent::Intent,
        key_bindings::ParsedKeyBindings,
        screens::Status,
        views::{CounterView, QuestionList, Styles},
    },
};

/// The form-filling screen: question list on the left, selected counter on the right.
///
/// Events mutate the selected question through its counter operations; the
/// button affordances are never cached here, the counter view re-reads them
/// from the question when it renders.
pub struct FormScreen {
    form: Form,
    question_list: QuestionList,
    counter_view: CounterView,
    status: Status,
}

impl FormScreen {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            question_list: QuestionList::default(),
            counter_view: CounterView::default(),
            status: Status::default(),
        }
    }

    pub fn on_enter(&mut self, styles: &Styles, keybindings: &ParsedKeyBindings) {
        self.counter_view.configure(
            &styles.counter,
            &keybindings.decrease.to_string(),
            &keybindings.increase.to_string(),
        );
        self.question_list.select_first();
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Intent {
        match event {
            InputEvent::Back => Intent::Quit,
            InputEvent::Save => Intent::Save,
            InputEvent::PreviousQuestion => {
                self.question_list.select_previous();
                Intent::None
            }
            InputEvent::NextQuestion => {
                self.question_list.select_next(self.form.len());
                Intent::None
            }
            InputEvent::Increase => self.mutate_selected(CounterQuestion::increase),
            InputEvent::Decrease => self.mutate_selected(CounterQuestion::decrease),
            InputEvent::Clear => self.mutate_selected(CounterQuestion::clear),
        }
    }

    fn mutate_selected(&mut self, operation: fn(&mut CounterQuestion) -> bool) -> Intent {
        let idx = self.question_list.selected();
        if let Some(question) = self.form.question_at_mut(idx)
            && operation(question)
        {
            debug!(
                question = %question.name,
                value = ?question.answer(),
                "answer changed"
            );
            self.status = Status::Modified;
        }
        Intent::None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(styles.screen_scaffold.constraints())
            .split(area);

        self.question_list.render(
            frame,
            chunks[0],
            self.form.questions(),
            &styles.list,
            &styles.colors,
        );

        let selected = self.form.questions().get(self.question_list.selected());
        self.counter_view
            .render(frame, chunks[1], selected, &styles.counter, &styles.colors);
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn selected_question(&self) -> Option<&CounterQuestion> {
        self.form.questions().get(self.question_list.selected())
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
