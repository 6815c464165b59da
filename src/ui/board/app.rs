//! Event loop and key dispatch for the board.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::error::Result;
use crate::profile::ProfileStore;
use crate::status::{Direction, Status};
use crate::storage::SlotStore;
use crate::task::TaskStore;

use super::actions::{self, ActionOutcome};
use super::editor::{EditorAction, EditorKind, EditorState};
use super::model::{BoardModel, Tab};
use super::view;

const EVENT_POLL_MS: u64 = 120;

#[derive(Debug, Clone, Copy)]
pub enum StatusKind {
    Info,
    Error,
}

pub struct App<S: SlotStore> {
    pub(crate) config: Config,
    pub(crate) tasks: TaskStore<S>,
    pub(crate) profile: ProfileStore<S>,
    pub(crate) model: BoardModel,
    pub(crate) editor: Option<EditorState>,
    pub(crate) alert: Option<(StatusKind, String)>,
    should_quit: bool,
}

impl<S: SlotStore> App<S> {
    pub fn new(config: Config, tasks: TaskStore<S>, profile: ProfileStore<S>) -> Self {
        Self {
            config,
            tasks,
            profile,
            model: BoardModel::new(Local::now().date_naive()),
            editor: None,
            alert: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        self.alert = None;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.model.next_tab(),
            KeyCode::BackTab => self.model.prev_tab(),
            _ => match self.model.tab {
                Tab::Calendar => self.handle_calendar_key(key),
                Tab::Profile => self.handle_profile_key(key),
                _ => self.handle_column_key(key),
            },
        }
    }

    fn handle_column_key(&mut self, key: KeyEvent) {
        let Some(status) = self.model.tab.status() else {
            return;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.tasks.count_by_status(status);
                self.model.select_next(len);
            }
            KeyCode::Up | KeyCode::Char('k') => self.model.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.move_selected(Direction::Forward),
            KeyCode::Left | KeyCode::Char('h') => self.move_selected(Direction::Backward),
            KeyCode::Char('a') => self.editor = Some(EditorState::new_task()),
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_task_id() {
                    if let Some(task) = self.tasks.get(&id) {
                        self.editor = Some(EditorState::edit_task(task));
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task_id() {
                    let outcome = actions::delete_task(&mut self.tasks, &id);
                    self.finish_action(outcome, status);
                }
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => self.model.prev_month(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => self.model.next_month(),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('e') {
            self.editor = Some(EditorState::edit_profile(self.profile.profile()));
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match editor.handle_key(key) {
            EditorAction::None => {}
            EditorAction::Cancel => self.editor = None,
            EditorAction::Submit => self.submit_editor(),
        }
    }

    fn submit_editor(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        match editor.kind() {
            EditorKind::NewTask | EditorKind::EditTask => {
                let form = editor.task_form();
                match actions::submit_form(&mut self.tasks, &form) {
                    Ok(outcome) => {
                        self.alert = Some((StatusKind::Info, outcome.message));
                        if let Some(status) = self.model.tab.status() {
                            self.model.clamp_selection(self.tasks.count_by_status(status));
                        }
                    }
                    Err(message) => {
                        // Validation failed after all; reopen with the error.
                        let mut editor = editor;
                        editor.set_error(message);
                        self.editor = Some(editor);
                    }
                }
            }
            EditorKind::Profile => {
                let updated = editor.profile(self.profile.profile());
                self.profile.update(updated);
                self.alert = Some((StatusKind::Info, "profile saved".to_string()));
            }
        }
    }

    fn move_selected(&mut self, direction: Direction) {
        let Some(status) = self.model.tab.status() else {
            return;
        };
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let outcome = actions::move_task(&mut self.tasks, &id, direction);
        self.finish_action(outcome, status);
    }

    fn finish_action(&mut self, outcome: ActionOutcome, status: Status) {
        let kind = if outcome.changed {
            StatusKind::Info
        } else {
            StatusKind::Error
        };
        self.alert = Some((kind, outcome.message));
        self.model.clamp_selection(self.tasks.count_by_status(status));
    }

    fn selected_task_id(&self) -> Option<String> {
        let status = self.model.tab.status()?;
        self.tasks
            .by_status(status)
            .get(self.model.selected)
            .map(|task| task.id.clone())
    }
}

/// Run the board over the given stores until the user quits.
pub fn run<S: SlotStore>(
    config: Config,
    mut tasks: TaskStore<S>,
    mut profile: ProfileStore<S>,
) -> Result<()> {
    tasks.load();
    profile.load();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, tasks, profile);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<S: SlotStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::render(frame, app))?;
        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}
