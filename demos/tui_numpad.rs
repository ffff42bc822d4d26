//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to host numpad_mini in a terminal application.
//! Run with: cargo run --example tui_numpad
//! Set `NUMPAD_LOG=debug` (and redirect stderr) to see engine logs.

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use numpad_mini::{
    AuxKey, EventMask, Key, NumberPad, OutputControlDataType, PadEvent, PadObserver,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const LOG_LINES: usize = 8;

/// Keeps the most recent pad notifications for display.
#[derive(Default)]
struct EventLog {
    lines: RefCell<VecDeque<String>>,
}

impl PadObserver for EventLog {
    fn on_event(&self, event: &PadEvent) {
        let mut lines = self.lines.borrow_mut();
        if lines.len() == LOG_LINES {
            lines.pop_front();
        }
        lines.push_back(format!("{event:?}"));
    }
}

struct App {
    pad: NumberPad,
    log: Rc<EventLog>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let mut pad = NumberPad::new();
        let log = Rc::new(EventLog::default());
        pad.subscribe(&log, EventMask::all());
        Self {
            pad,
            log,
            should_quit: false,
        }
    }

    fn cycle_mode(&mut self) {
        let next = match self.pad.configuration().borrow().output_control_data_type() {
            OutputControlDataType::Integer => OutputControlDataType::Money,
            OutputControlDataType::Money => OutputControlDataType::Percentage,
            OutputControlDataType::Percentage => OutputControlDataType::Integer,
        };
        self.pad.change_output_control_data_type(next);
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        match event.code {
            CKeyCode::Esc | CKeyCode::Char('q') => self.should_quit = true,
            CKeyCode::Char('m') => self.cycle_mode(),
            other => {
                if let Some(key) = convert_crossterm_key(other) {
                    self.pad.handle_key(key);
                }
            }
        }
    }
}

fn convert_crossterm_key(code: CKeyCode) -> Option<Key> {
    match code {
        CKeyCode::Backspace | CKeyCode::Delete => Some(Key::Backspace),
        CKeyCode::Left => Some(Key::Aux(AuxKey::Left)),
        CKeyCode::Right => Some(Key::Aux(AuxKey::Right)),
        CKeyCode::Char('d') => Some(Key::DoubleZero),
        CKeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let snapshot = app.pad.snapshot();

    let value = Paragraph::new(snapshot.display_text.as_str())
        .alignment(Alignment::Right)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("numpad_mini demo"));
    f.render_widget(value, chunks[0]);

    let details = Paragraph::new(vec![
        Line::from(format!(
            "raw: {:?}   mode: {:?}",
            snapshot.raw, snapshot.data_type
        )),
        Line::from(format!(
            "decimal: {}   integer: {}",
            snapshot.decimal_value, snapshot.integer_value
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(details, chunks[1]);

    let lines: Vec<Line> = app
        .log
        .lines
        .borrow()
        .iter()
        .map(|l| Line::from(l.clone()))
        .collect();
    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("events"));
    f.render_widget(log, chunks[2]);

    let help = Paragraph::new("0-9 digits  d 00  ⌫ backspace  c clear  ←/→ aux  m mode  q quit")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn main() -> Result<(), io::Error> {
    if let Ok(filter) = std::env::var("NUMPAD_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(io::stderr)
            .init();
    }

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
            if key.kind != KeyEventKind::Press {
                continue;
            }
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
