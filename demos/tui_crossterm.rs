//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to integrate tally_mini into a terminal
//! application: the app owns the text field and the chip row, the engine
//! owns the token lifecycle. Run with: cargo run --example tui_crossterm

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use tally_mini::{
    Engine, HostField, InputEvent, KeyCode, KeyEvent, Modifiers,
    types::{Outcome, Token, TokenId},
};

/// Host-side state: the visible input text and the rendered chip row.
struct DemoField {
    text: String,
    chips: Vec<(TokenId, String)>,
}

impl DemoField {
    fn new() -> Self {
        Self {
            text: String::new(),
            chips: Vec::new(),
        }
    }
}

impl HostField for DemoField {
    fn render(&mut self, token: &Token) {
        self.chips.push((token.id, token.text.clone()));
    }

    fn unrender(&mut self, id: TokenId) {
        self.chips.retain(|(chip_id, _)| *chip_id != id);
    }

    fn focus(&mut self) {
        // The input line is the only focusable element here
    }

    fn field_text(&self) -> String {
        self.text.clone()
    }

    fn set_field_text(&mut self, value: &str) {
        self.text = value.to_string();
    }
}

struct App {
    engine: Engine,
    field: DemoField,
    message: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            field: DemoField::new(),
            message: "type words, commit with space/enter/comma/semicolon".to_string(),
            should_quit: false,
        }
    }

    fn cycle_mode(&mut self) {
        let next = match self.engine.snapshot().mode {
            "NONE" => "EMAIL",
            "EMAIL" => "HASHTAG",
            _ => "NONE",
        };
        self.engine.set_type(next);
        self.message = format!("mode: {next}");
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        if event.code == CKeyCode::Esc {
            self.should_quit = true;
            return;
        }
        if event.code == CKeyCode::F(2) {
            self.cycle_mode();
            return;
        }

        let Some(tally_event) = convert_crossterm_event(event) else {
            return;
        };

        // Press phase: the engine either consumes the keystroke (commit
        // trip) or lets its default effect through.
        let press_outcome = self
            .engine
            .handle_event(&mut self.field, InputEvent::Press(tally_event));
        match &press_outcome {
            Outcome::Committed(token) => {
                self.message = format!("committed {:?} as #{}", token.text, token.id);
            }
            Outcome::Suppressed => {
                self.message = "rejected — keep editing".to_string();
            }
            Outcome::Ignored => match tally_event.code {
                KeyCode::Char(c) if !tally_event.mods.intersects(Modifiers::CTRL) => {
                    self.field.text.push(c);
                }
                KeyCode::Backspace => {
                    self.field.text.pop();
                }
                _ => {}
            },
            Outcome::Removed(_) => {}
        }

        // Release phase: backspace-on-empty chip deletion.
        let release_outcome = self
            .engine
            .handle_event(&mut self.field, InputEvent::Release(tally_event));
        if let Outcome::Removed(token) = release_outcome {
            self.message = format!("removed {:?}", token.text);
        }
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let code = match event.code {
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Char(' ') => KeyCode::Space,
        CKeyCode::Char(',') => KeyCode::Comma,
        CKeyCode::Char(';') => KeyCode::Semicolon,
        CKeyCode::Char(c) => KeyCode::Char(c),
        _ => return None,
    };

    Some(KeyEvent { code, mods })
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(1)].as_ref())
        .split(f.size());

    // Chip row + input text
    let mut spans = vec![];
    for (_, text) in &app.field.chips {
        spans.push(Span::styled(
            format!(" {text} \u{00d7}"),
            Style::default().bg(Color::Blue).fg(Color::White),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(app.field.text.as_str()));
    let line = Line::from(spans);
    let cursor_col = line.width() as u16;

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("tally_mini demo"),
    );
    f.render_widget(input, chunks[0]);

    // Status line
    let snapshot = app.engine.snapshot();
    let status = Paragraph::new(format!(
        "{} | mode {} | {} item(s)",
        app.message, snapshot.mode, snapshot.item_count
    ))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    let help = Paragraph::new("F2 cycle mode · backspace on empty input removes a chip · Esc quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);

    f.set_cursor(chunks[0].x + 1 + cursor_col, chunks[0].y + 1);
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
