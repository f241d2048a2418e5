use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::{Notice, RelativeListManager, RelativesSnapshot, Summary};
use crate::data::KeyValueStore;
use crate::ui::action::{Action, KeyContext};
use crate::ui::components::{
    AlertDialog, AlertDialogState, InstructionBar, RelativeList, SummaryDialog,
};
use crate::ui::events::AppEvent;
use crate::ui::form_state::{FormField, RelativeFormState};
use crate::ui::terminal_guard::TerminalGuard;

/// Relatives form application state
pub struct App {
    manager: RelativeListManager,
    /// Latest state published by the manager
    snapshot: RelativesSnapshot,
    form: RelativeFormState,
    alert: AlertDialogState,
    /// Loaded when the manager opens the summary
    summary: Option<Summary>,
    summary_scroll: u16,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let notice_tx = event_tx.clone();
        let notifier = move |notice: Notice| {
            if notice_tx.send(AppEvent::Notice(notice)).is_err() {
                tracing::debug!("Notice dropped: app event channel closed");
            }
        };

        let mut manager = RelativeListManager::load(store, Box::new(notifier), config);
        manager.subscribe(Box::new(move |snapshot: &RelativesSnapshot| {
            if event_tx.send(AppEvent::Changed(snapshot.clone())).is_err() {
                tracing::debug!("Snapshot dropped: app event channel closed");
            }
        }));

        let snapshot = manager.snapshot();
        let form = RelativeFormState::new(&snapshot);

        Self {
            manager,
            snapshot,
            form,
            alert: AlertDialogState::new(),
            summary: None,
            summary_scroll: 0,
            event_rx,
            should_quit: false,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key);
                            }
                        }
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn snapshot(&self) -> &RelativesSnapshot {
        &self.snapshot
    }

    pub fn form(&self) -> &RelativeFormState {
        &self.form
    }

    pub fn alert(&self) -> &AlertDialogState {
        &self.alert
    }

    fn key_context(&self) -> KeyContext {
        if self.alert.is_visible() || self.snapshot.summary_open {
            KeyContext::Dialog
        } else if self.form.focus == FormField::Relation {
            KeyContext::RelationField
        } else {
            KeyContext::TextField
        }
    }

    /// Handle one key press and apply every event it produced
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = Action::from_key(key, self.key_context()) {
            self.handle_action(action);
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Changed(snapshot) => {
                if snapshot.summary_open && self.summary.is_none() {
                    self.summary = Some(self.manager.summary());
                    self.summary_scroll = 0;
                } else if !snapshot.summary_open {
                    self.summary = None;
                }
                self.form.sync(&snapshot);
                self.snapshot = snapshot;
            }
            AppEvent::Notice(notice) => {
                tracing::debug!(notice = %notice, "Showing notice");
                self.alert.show(notice);
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Dismiss => {
                if self.alert.is_visible() {
                    self.alert.hide();
                } else {
                    self.manager.close_summary();
                }
            }
            Action::ScrollUp => {
                self.summary_scroll = self.summary_scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                if self.summary.is_some() {
                    self.summary_scroll = self.summary_scroll.saturating_add(1);
                }
            }
            Action::AddRelative => {
                let id = self.manager.add();
                self.drain_events();
                self.form.select_id(id, &self.snapshot);
            }
            Action::DeleteRelative => {
                if let Some(id) = self.form.selected_id() {
                    self.manager.delete(id);
                }
            }
            Action::Submit => {
                self.manager.submit();
            }
            Action::CheckRecord => {
                self.form.show_errors = true;
                self.dispatch_edit();
            }
            Action::SelectNext => self.form.select_next(&self.snapshot),
            Action::SelectPrev => self.form.select_prev(&self.snapshot),
            Action::NextField => self.form.focus = self.form.focus.next(),
            Action::PrevField => self.form.focus = self.form.focus.prev(),
            Action::NextOption => {
                self.form.relation = self.form.relation.next();
                self.dispatch_edit();
            }
            Action::PrevOption => {
                self.form.relation = self.form.relation.prev();
                self.dispatch_edit();
            }
            Action::InsertChar(c) => {
                if let Some(input) = self.form.focused_input() {
                    input.insert_char(c);
                    self.dispatch_edit();
                }
            }
            Action::Backspace => {
                if self.form.focused_input().is_some_and(|i| i.delete_char()) {
                    self.dispatch_edit();
                }
            }
            Action::Delete => {
                if self.form.focused_input().is_some_and(|i| i.delete_forward()) {
                    self.dispatch_edit();
                }
            }
            Action::MoveCursorLeft => {
                if let Some(input) = self.form.focused_input() {
                    input.move_left();
                }
            }
            Action::MoveCursorRight => {
                if let Some(input) = self.form.focused_input() {
                    input.move_right();
                }
            }
            Action::MoveCursorStart => {
                if let Some(input) = self.form.focused_input() {
                    input.move_start();
                }
            }
            Action::MoveCursorEnd => {
                if let Some(input) = self.form.focused_input() {
                    input.move_end();
                }
            }
        }
    }

    /// Send the typed fields of the expanded record to the manager
    fn dispatch_edit(&mut self) {
        if let Some(draft) = self.form.draft() {
            self.manager.edit(draft);
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "Relatives Form",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} relative(s)", self.snapshot.relatives.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        f.render_widget(title, chunks[0]);

        f.render_widget(RelativeList::new(&self.snapshot, &self.form), chunks[1]);

        InstructionBar::new(vec![
            ("^A", "Add Relative"),
            ("^D", "Delete Relative"),
            ("^S", "Submit"),
            ("Enter", "Can I save this"),
            ("Esc", "Quit"),
        ])
        .render(chunks[2], f.buffer_mut());

        if let Some(summary) = &self.summary {
            self.summary_scroll = self
                .summary_scroll
                .min(SummaryDialog::max_scroll(summary, f.area()));
            f.render_widget(
                SummaryDialog::new(summary).scroll(self.summary_scroll),
                f.area(),
            );
        }

        if self.alert.is_visible() {
            f.render_widget(AlertDialog::new(&self.alert), f.area());
        }
    }
}
