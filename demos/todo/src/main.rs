//! Todo - uniflow example app
//!
//! The terminal UI is the store's only subscriber: every key press maps to
//! an action, every dispatch marks the screen dirty, and rendering is a pure
//! function of the current state.
//!
//! Keys (normal mode): i = add todo, j/k = move, space = toggle,
//! tab = cycle filter, d = dump state to log, q = quit.

use std::cell::Cell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Terminal,
};
use tracing_subscriber::EnvFilter;
use uniflow::Store;

use todo::{todo_app, visible_todos, ActionCreators, AppState, TodoAction, VisibilityFilter};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Insert,
}

fn main() -> io::Result<()> {
    init_tracing()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file so the alternate screen stays clean. The filter comes from
/// `UNIFLOW_LOG` (e.g. `UNIFLOW_LOG=uniflow_core=trace`).
fn init_tracing() -> io::Result<()> {
    let log_file = File::create("todo.log")?;
    let filter = EnvFilter::try_from_env("UNIFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    // Store = composed slice reducers + seeded defaults
    let store: Store<AppState, TodoAction> = Store::new(todo_app());
    let mut creators = ActionCreators::new();

    // The subscription is the render trigger: any completed dispatch marks
    // the screen dirty.
    let dirty = Rc::new(Cell::new(true));
    let _sub = store.subscribe({
        let dirty = Rc::clone(&dirty);
        move || dirty.set(true)
    });

    // View-local state: the input buffer and cursor never enter the store.
    let mut mode = Mode::Normal;
    let mut input = String::new();
    let mut selected: usize = 0;

    loop {
        if dirty.replace(false) {
            let state = store.state();
            let visible = visible_todos(&state.todos, state.visibility_filter);
            if selected >= visible.len() {
                selected = visible.len().saturating_sub(1);
            }
            terminal.draw(|frame| draw(frame, &state, mode, &input, selected))?;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let redraw = match mode {
                    Mode::Normal => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('i') => {
                            mode = Mode::Insert;
                            true
                        }
                        KeyCode::Char('j') | KeyCode::Down => {
                            selected = selected.saturating_add(1);
                            true
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            selected = selected.saturating_sub(1);
                            true
                        }
                        KeyCode::Char(' ') => {
                            let state = store.state();
                            let visible =
                                visible_todos(&state.todos, state.visibility_filter);
                            if let Some(item) = visible.get(selected) {
                                dispatch(&store, creators.toggle_todo(item.id));
                            }
                            false
                        }
                        KeyCode::Tab => {
                            let filter = store.with_state_ref(|s| s.visibility_filter);
                            dispatch(&store, creators.set_visibility_filter(filter.next()));
                            false
                        }
                        KeyCode::Char('d') => {
                            dump_state(&store.state());
                            false
                        }
                        _ => false,
                    },
                    Mode::Insert => match key.code {
                        KeyCode::Esc => {
                            input.clear();
                            mode = Mode::Normal;
                            true
                        }
                        KeyCode::Enter => {
                            let text = input.trim().to_string();
                            if !text.is_empty() {
                                dispatch(&store, creators.add_todo(text));
                            }
                            input.clear();
                            mode = Mode::Normal;
                            true
                        }
                        KeyCode::Backspace => {
                            input.pop();
                            true
                        }
                        KeyCode::Char(c) => {
                            input.push(c);
                            true
                        }
                        _ => false,
                    },
                };
                if redraw {
                    dirty.set(true);
                }
            }
            Event::Resize(..) => dirty.set(true),
            _ => {}
        }
    }

    Ok(())
}

fn dispatch(store: &Store<AppState, TodoAction>, action: TodoAction) {
    if let Err(err) = store.dispatch(action) {
        tracing::warn!(%err, "dispatch failed");
    }
}

fn dump_state(state: &AppState) {
    match serde_json::to_string(state) {
        Ok(json) => tracing::info!(state = %json, "state dump"),
        Err(err) => tracing::warn!(%err, "state dump failed"),
    }
}

fn draw(
    frame: &mut ratatui::Frame,
    state: &AppState,
    mode: Mode,
    input: &str,
    selected: usize,
) {
    let [input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    // Input line
    let input_text = if mode == Mode::Insert {
        format!("{input}\u{2588}")
    } else {
        String::from("press i to add a todo")
    };
    let input_style = if mode == Mode::Insert {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input_widget = Paragraph::new(input_text).style(input_style).block(
        Block::default()
            .title(" Add Todo ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input_widget, input_area);

    // Visible todos
    let visible = visible_todos(&state.todos, state.visibility_filter);
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if item.completed { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if item.completed {
                style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
            }
            if i == selected && mode == Mode::Normal {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!(" {marker} {}", item.text),
                style,
            )))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" Todos ({}) ", visible.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, list_area);

    // Footer: filter links + help
    let mut spans = vec![Span::raw("Show: ")];
    for filter in VisibilityFilter::all() {
        let style = if *filter == state.visibility_filter {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(filter.label(), style));
        spans.push(Span::raw("  "));
    }
    let help = match mode {
        Mode::Normal => "i: add  j/k: move  space: toggle  tab: filter  d: dump  q: quit",
        Mode::Insert => "enter: save  esc: cancel",
    };
    let footer = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(footer, footer_area);
}
