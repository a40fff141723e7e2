use anyhow::{Context, Result, ensure};
use tracing::info;

use crate::{app::App, cli::AnswerArgs, form::CounterQuestion};

/// A single operation requested through `tally answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOperation {
    Show,
    Increase,
    Decrease,
    Clear,
    Set(i64),
}

impl From<&AnswerArgs> for AnswerOperation {
    fn from(args: &AnswerArgs) -> Self {
        match args {
            AnswerArgs { increase: true, .. } => AnswerOperation::Increase,
            AnswerArgs { decrease: true, .. } => AnswerOperation::Decrease,
            AnswerArgs { clear: true, .. } => AnswerOperation::Clear,
            AnswerArgs {
                set: Some(value), ..
            } => AnswerOperation::Set(*value),
            _ => AnswerOperation::Show,
        }
    }
}

/// Applies `operation` to `question`, the way pressing its button would.
///
/// Returns `true` if the answer changed. Read-only questions reject every
/// operation except `Show`.
pub fn apply_operation(question: &mut CounterQuestion, operation: AnswerOperation) -> Result<bool> {
    ensure!(
        operation == AnswerOperation::Show || !question.read_only,
        "Question '{}' is read-only",
        question.name
    );

    let changed = match operation {
        AnswerOperation::Show => false,
        AnswerOperation::Increase => question.increase(),
        AnswerOperation::Decrease => question.decrease(),
        AnswerOperation::Clear => question.clear(),
        AnswerOperation::Set(value) => {
            let before = question.answer();
            question.set_answer(Some(value));
            before != question.answer()
        }
    };

    Ok(changed)
}

/// Runs `tally answer` and returns the text to print.
pub fn answer_cli(mut app: App, args: &AnswerArgs) -> Result<String> {
    let operation = AnswerOperation::from(args);

    let title = app.form.title.clone();
    let question = app.form.question_mut(&args.question).with_context(|| {
        format!(
            "Question '{}' not found in form '{}'",
            args.question, title
        )
    })?;

    let changed = apply_operation(question, operation)?;
    let display_text = question.display_text();

    if changed {
        info!(
            question = %args.question,
            ?operation,
            value = %display_text,
            "answer updated from cli"
        );
    }

    // Out-of-range stored values read as unchanged but still need rewriting
    if operation != AnswerOperation::Show {
        app.form.write_answers(app.answers.as_mut());
        if app.answers.is_dirty() {
            app.answers.flush()?;
        }
    }

    Ok(display_text)
}
