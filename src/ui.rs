//! Layout and screens for the catalog view.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::components::{Component, DetailModal, DetailModalProps, SearchBar, SearchBarProps};
use crate::state::AppState;

pub const BG_BASE: Color = Color::Rgb(12, 18, 28);
pub const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct Ui {
    search: SearchBar,
    modal: DetailModal,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            search: SearchBar,
            modal: DetailModal,
        }
    }

    pub fn handle_event(&mut self, event: &Event, state: &AppState) -> Vec<Action> {
        match event {
            Event::Resize(width, height) => vec![Action::UiTerminalResize(*width, *height)],
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, state),
            _ => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, state: &AppState) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }
        if let Some(detail) = state.detail.as_ref() {
            return self.modal.handle_key(
                key,
                DetailModalProps {
                    detail,
                    chart: &state.chart,
                },
            );
        }
        // The loading and welcome screens carry no text input.
        if state.is_loading() || state.show_welcome() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') => vec![Action::Quit],
                _ => Vec::new(),
            };
        }
        self.search.handle_key(
            key,
            SearchBarProps {
                entities: &state.pokemons,
                query: &state.search.query,
                matches: &state.search.matches,
                selected: state.search.selected,
                on_choose: Action::MatchChoose,
            },
        )
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(frame, layout[0]);
        self.render_body(frame, layout[1], state);
        render_footer(frame, layout[2], state);

        if let Some(detail) = state.detail.as_ref() {
            self.modal.render(
                frame,
                area,
                DetailModalProps {
                    detail,
                    chart: &state.chart,
                },
            );
        }
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.is_loading() {
            render_loading(frame, area, state);
            return;
        }
        if state.pokemons.is_empty() {
            render_welcome(frame, area);
            return;
        }
        self.search.render(
            frame,
            area,
            SearchBarProps {
                entities: &state.pokemons,
                query: &state.search.query,
                matches: &state.search.matches,
                selected: state.search.selected,
                on_choose: Action::MatchChoose,
            },
        );
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "POKEDEX",
        Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(TEXT_DIM).bg(BG_PANEL)),
    );
    frame.render_widget(title, area);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let spinner = SPINNER[(state.tick as usize) % SPINNER.len()];
    let loading = Paragraph::new(format!("{spinner} Loading pokedex..."))
        .alignment(Alignment::Center)
        .style(Style::default().fg(ACCENT_TEAL));
    let centered = centered_rect(60, 20, area);
    frame.render_widget(loading, centered);
}

// Shown both before the first load and after a failed one; the status
// line is the only place the difference is visible.
fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to the pokedex!",
            Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("No catalog entries to show."),
        Line::from("Once the list has loaded, type to search it and"),
        Line::from("press enter on a match to open its stats."),
        Line::default(),
        Line::from(Span::styled(
            "If nothing ever appears, check the status line below.",
            Style::default().fg(TEXT_DIM),
        )),
    ];
    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_MAIN));
    let centered = centered_rect(70, 60, area);
    frame.render_widget(welcome, centered);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints: Vec<Span> = if state.modal_open() {
        vec![
            Span::styled("s", hint_key()),
            Span::styled(" save pdf  ", hint_label()),
            Span::styled("esc", hint_key()),
            Span::styled(" close", hint_label()),
        ]
    } else {
        vec![
            Span::styled("type", hint_key()),
            Span::styled(" filter  ", hint_label()),
            Span::styled("↑↓", hint_key()),
            Span::styled(" move  ", hint_label()),
            Span::styled("enter", hint_key()),
            Span::styled(" open  ", hint_label()),
            Span::styled("esc", hint_key()),
            Span::styled(" clear/quit", hint_label()),
        ]
    };

    let status = state.message.clone().unwrap_or_else(|| {
        if state.is_loading() {
            "Loading pokedex...".to_string()
        } else if state.detail_pending.is_some() {
            "Loading pokemon...".to_string()
        } else {
            String::new()
        }
    });

    let mut spans = hints;
    if !status.is_empty() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status, Style::default().fg(ACCENT_GOLD)));
    }
    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(TEXT_DIM).bg(BG_PANEL)),
    );
    frame.render_widget(footer, area);
}

fn hint_key() -> Style {
    Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD)
}

fn hint_label() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Rect centered in `area`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
