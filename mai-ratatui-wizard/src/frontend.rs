//! Ratatui frontend implementation for the SurveyFrontend trait.
//!
//! Provides a terminal UI with a progress bar, one page of statements per
//! screen and keyboard navigation, followed by the info form.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mai_survey::{
    Completion, FlowController, InfoField, Question, QuestionId, SurveyError, SurveyFrontend,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for the Ratatui frontend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the survey (e.g., pressed Esc).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// Terminal setup, drawing or input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RatatuiError> for SurveyError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::backend(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI frontend.
///
/// Presents one page of statements at a time with progress tracking and
/// keyboard navigation, then the info form.
#[derive(Debug, Clone)]
pub struct RatatuiFrontend {
    /// Title shown at the top of the wizard.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFrontend {
    /// Create a new Ratatui frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// What the event loop should do after a key press.
#[derive(Debug)]
enum Action {
    Continue,
    Submit(Completion),
    Cancel,
}

/// Presentation state layered over the controller.
///
/// The controller owns position and answers; this only tracks the
/// highlighted row, the focused info field and the last error shown.
struct WizardState {
    /// Highlighted statement on the current page.
    cursor: usize,
    /// Focused info field, index into `InfoField::ALL`.
    field: usize,
    /// Current error message.
    error_message: Option<String>,
    /// Theme.
    theme: Theme,
    /// Title.
    title: String,
}

impl WizardState {
    fn new(theme: Theme, title: String) -> Self {
        Self {
            cursor: 0,
            field: 0,
            error_message: None,
            theme,
            title,
        }
    }

    fn focused_field(&self) -> InfoField {
        InfoField::ALL[self.field]
    }

    fn highlighted(&self, controller: &FlowController) -> Option<QuestionId> {
        controller
            .current_page_questions()
            .get(self.cursor)
            .map(Question::id)
    }

    fn handle_key(&mut self, controller: &mut FlowController, key: KeyCode) -> Action {
        if key == KeyCode::Esc {
            return Action::Cancel;
        }
        if controller.is_info_stage() {
            self.handle_info_key(controller, key)
        } else {
            self.handle_page_key(controller, key);
            Action::Continue
        }
    }

    fn handle_page_key(&mut self, controller: &mut FlowController, key: KeyCode) {
        let page_len = controller.current_page_questions().len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < page_len {
                    self.cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('t') | KeyCode::Char('T') => {
                self.answer(controller, Some(true));
            }
            KeyCode::Right | KeyCode::Char('f') | KeyCode::Char('F') => {
                self.answer(controller, Some(false));
            }
            KeyCode::Char(' ') => self.answer(controller, None),
            KeyCode::Enter | KeyCode::PageDown => self.next_page(controller),
            KeyCode::PageUp | KeyCode::Backspace => self.prev_page(controller),
            _ => {}
        }
    }

    /// Answer the highlighted statement; `None` toggles it.
    ///
    /// An explicit answer moves the cursor down one row.
    fn answer(&mut self, controller: &mut FlowController, value: Option<bool>) {
        let Some(id) = self.highlighted(controller) else {
            return;
        };
        let toggled = value.is_none();
        let value = value.unwrap_or_else(|| !controller.answers().get(id).unwrap_or(false));

        match controller.set_answer(id, value) {
            Ok(()) => {
                self.error_message = None;
                if !toggled && self.cursor + 1 < controller.current_page_questions().len() {
                    self.cursor += 1;
                }
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    fn next_page(&mut self, controller: &mut FlowController) {
        let missing = controller.unanswered_on_page();
        if let Some(first) = missing.first() {
            self.cursor = controller
                .current_page_questions()
                .iter()
                .position(|question| question.id() == *first)
                .unwrap_or(0);
            self.error_message = Some(format!(
                "Answer every statement first (missing: {})",
                missing
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
            return;
        }

        match controller.go_next() {
            Ok(step) => {
                debug!(step, "wizard advanced");
                self.cursor = 0;
                self.field = 0;
                self.error_message = None;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    fn prev_page(&mut self, controller: &mut FlowController) {
        controller.go_prev();
        self.cursor = 0;
        self.error_message = None;
    }

    fn handle_info_key(&mut self, controller: &mut FlowController, key: KeyCode) -> Action {
        let field = self.focused_field();
        match key {
            KeyCode::Up | KeyCode::BackTab => {
                self.field = self.field.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.field = (self.field + 1).min(InfoField::ALL.len() - 1);
            }
            KeyCode::Char(c) => {
                let mut value = controller.info().get(field).to_string();
                value.push(c);
                controller.set_info_field(field, value);
                self.error_message = None;
            }
            KeyCode::Backspace => {
                let mut value = controller.info().get(field).to_string();
                value.pop();
                controller.set_info_field(field, value);
            }
            KeyCode::PageUp => self.prev_page(controller),
            KeyCode::Enter => return self.submit(controller),
            _ => {}
        }
        Action::Continue
    }

    fn submit(&mut self, controller: &mut FlowController) -> Action {
        let missing = controller.info().missing();
        if let Some(first) = missing.first() {
            self.field = InfoField::ALL
                .iter()
                .position(|field| field == first)
                .unwrap_or(0);
            self.error_message = Some(format!(
                "Please fill in: {}",
                missing
                    .iter()
                    .map(|field| field.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
            return Action::Continue;
        }

        match controller.submit() {
            Ok(completion) => Action::Submit(completion),
            Err(err) => {
                self.error_message = Some(err.to_string());
                Action::Continue
            }
        }
    }
}

fn draw_ui(frame: &mut Frame, state: &WizardState, controller: &FlowController) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(state.theme.background)),
        area,
    );

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Progress bar
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Error message
            Constraint::Length(2), // Help
        ])
        .split(area);

    // Header
    let subtitle = if controller.is_info_stage() {
        "About you".to_string()
    } else {
        format!(
            "Page {} of {}",
            controller.current_step() + 1,
            controller.total_pages()
        )
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(state.title.clone(), Style::default().bold())),
        Line::from(subtitle),
    ])
    .style(Style::default().fg(state.theme.primary))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(state.theme.border)),
    );
    frame.render_widget(header, chunks[0]);

    // Progress
    let (answered, total) = controller.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(state.theme.primary))
        .ratio(answered as f64 / total.max(1) as f64)
        .label(format!("{answered} / {total} answered"));
    frame.render_widget(gauge, chunks[1]);

    if controller.is_info_stage() {
        draw_info_form(frame, state, controller, chunks[2]);
    } else {
        draw_page(frame, state, controller, chunks[2]);
    }

    // Error message
    if let Some(error) = &state.error_message {
        let error_widget = Paragraph::new(error.clone())
            .style(Style::default().fg(state.theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[3]);
    }

    // Help bar
    let help_text = if controller.is_info_stage() {
        "Tab/↑/↓: Field  Enter: Submit  PgUp: Back  Esc: Cancel"
    } else {
        "↑/↓: Move  t/←: True  f/→: False  Space: Toggle  Enter: Next  PgUp: Back  Esc: Cancel"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(state.theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(state.theme.border)),
        );
    frame.render_widget(help, chunks[4]);
}

fn draw_page(frame: &mut Frame, state: &WizardState, controller: &FlowController, area: Rect) {
    let questions = controller.current_page_questions();
    let items: Vec<ListItem> = questions
        .iter()
        .map(|question| {
            let (marker, marker_style) = match controller.answers().get(question.id()) {
                Some(true) => ("[T]", Style::default().fg(state.theme.success)),
                Some(false) => ("[F]", Style::default().fg(state.theme.secondary)),
                None => ("[ ]", Style::default().fg(state.theme.border)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style.bold()),
                Span::raw(format!(" {:>2}. ", question.id())),
                Span::styled(
                    question.prompt_long().to_string(),
                    Style::default().fg(state.theme.text),
                ),
            ]))
        })
        .collect();

    let title = match controller.current_page() {
        Some(page) => format!(" Statements {}-{} ", page.first_id(), page.last_id()),
        None => " Statements ".to_string(),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.border))
                .title(title)
                .title_style(Style::default().fg(state.theme.secondary)),
        )
        .highlight_style(Style::default().fg(state.theme.highlight).bold())
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor.min(questions.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_info_form(frame: &mut Frame, state: &WizardState, controller: &FlowController, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, field) in InfoField::ALL.into_iter().enumerate() {
        let focused = index == state.field;
        let border = if focused {
            state.theme.highlight
        } else {
            state.theme.border
        };
        let value = controller.info().get(field);
        let input = Paragraph::new(value.to_string())
            .style(Style::default().fg(state.theme.text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(format!(" {} ", field.label()))
                    .title_style(Style::default().fg(state.theme.secondary)),
            );
        frame.render_widget(input, rows[index]);

        if focused {
            let cursor_x = rows[index].x + 1 + value.chars().count() as u16;
            let cursor_y = rows[index].y + 1;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl SurveyFrontend for RatatuiFrontend {
    type Error = RatatuiError;

    fn collect(&self, controller: &mut FlowController) -> Result<Completion, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = WizardState::new(self.theme.clone(), self.title.clone());

        let result = run_wizard(&mut terminal, &mut state, controller);

        self.restore_terminal(&mut terminal)?;
        result
    }
}

fn run_wizard(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut WizardState,
    controller: &mut FlowController,
) -> Result<Completion, RatatuiError> {
    loop {
        terminal.draw(|frame| draw_ui(frame, state, controller))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("wizard interrupted");
            return Err(RatatuiError::Cancelled);
        }

        match state.handle_key(controller, key.code) {
            Action::Continue => {}
            Action::Submit(completion) => return Ok(completion),
            Action::Cancel => {
                info!("wizard cancelled");
                return Err(RatatuiError::Cancelled);
            }
        }
    }
}
