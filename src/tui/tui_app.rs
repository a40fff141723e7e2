use crate::{
    app::App,
    configs::Config,
    form::AnswerSource,
    tui::{
        events::{InputEvent, handle_key},
        intent::Intent,
        key_bindings::ParsedKeyBindings,
        screens::{FormScreen, Status},
        views::{StatusBar, Styles},
    },
};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};
use std::{io, time::Duration};
use tracing::{info, warn};

const SECOND_IN_MILLIS: u64 = 1000;
const RENDER_FPS: u64 = 30;
const BAR_HEIGHT: u16 = 3;

pub struct TuiApp {
    config: Config,
    answers: Box<dyn AnswerSource>,
    screen: FormScreen,
    should_quit: bool,
    keybindings: ParsedKeyBindings,
    styles: Styles,
    status_bar: StatusBar,
}

impl TuiApp {
    pub fn new(app: App) -> Result<Self> {
        let App {
            config,
            form,
            answers,
        } = app;
        let keybindings = ParsedKeyBindings::from(&config.keybindings)?;
        let styles = Styles::try_from(&config.styles)?;

        let mut screen = FormScreen::new(form);
        screen.on_enter(&styles, &keybindings);

        Ok(Self {
            config,
            answers,
            screen,
            should_quit: false,
            keybindings,
            styles,
            status_bar: StatusBar,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!(title = %self.screen.form().title, "form opened");

        loop {
            let mut constraints = vec![Constraint::Min(0)];
            if self.config.status_bar {
                constraints.push(Constraint::Length(BAR_HEIGHT));
            }

            terminal.draw(|frame| {
                let background_block =
                    Block::default().style(Style::default().bg(self.styles.colors.background));
                frame.render_widget(background_block, frame.area());

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(constraints)
                    .split(frame.area());

                self.screen.render(frame, chunks[0], &self.styles);

                if self.config.status_bar {
                    self.status_bar.render(
                        frame,
                        self.screen.status(),
                        &self.screen.form().title,
                        chunks[1],
                        &self.styles.status,
                        &self.styles.colors,
                    );
                }
            })?;

            self.poll_events()?;

            if self.should_quit {
                break;
            }
        }

        if self.config.save_on_exit {
            self.save().context("Failed to save answers on exit")?;
        }

        Ok(())
    }

    fn poll_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(
            SECOND_IN_MILLIS.div_euclid(RENDER_FPS),
        ))? && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return Ok(());
            }

            if let Some(input_event) = handle_key(&key, &self.keybindings) {
                self.handle_event(input_event);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: InputEvent) {
        match self.screen.handle_event(event) {
            Intent::Quit => self.should_quit = true,
            Intent::Save => {
                if let Err(err) = self.save() {
                    warn!(error = %err, "saving answers failed");
                    self.screen.set_status(Status::Error(err.to_string()));
                }
            }
            Intent::None => {}
        }
    }

    fn save(&mut self) -> Result<()> {
        self.screen.form().write_answers(self.answers.as_mut());
        self.answers.flush()?;
        info!(
            answered = self.screen.form().answered_count(),
            total = self.screen.form().len(),
            "answers saved"
        );
        self.screen.set_status(Status::Saved);
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}
