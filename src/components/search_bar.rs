use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::PokemonSummary;
use crate::ui::{ACCENT_GOLD, BG_PANEL, TEXT_DIM, TEXT_MAIN};

const PLACEHOLDER: &str = "Search the Pokedex..";

/// Everything the search filter needs from its owner: the entity list,
/// the derived view over it and a way to report a chosen entry. Nothing
/// else crosses the seam.
pub struct SearchBarProps<'a> {
    pub entities: &'a [PokemonSummary],
    pub query: &'a str,
    pub matches: &'a [usize],
    pub selected: usize,
    pub on_choose: fn(usize) -> Action,
}

pub struct SearchBar;

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_key(&mut self, key: &KeyEvent, props: Self::Props<'_>) -> Vec<Action> {
        match key.code {
            KeyCode::Esc => {
                if props.query.is_empty() {
                    vec![Action::Quit]
                } else {
                    vec![Action::SearchClear]
                }
            }
            KeyCode::Enter => match props.matches.get(props.selected) {
                Some(&index) => vec![(props.on_choose)(index)],
                None => Vec::new(),
            },
            KeyCode::Up => vec![Action::MatchMove(-1)],
            KeyCode::Down => vec![Action::MatchMove(1)],
            KeyCode::Backspace => vec![Action::SearchBackspace],
            KeyCode::Char(ch) => vec![Action::SearchInput(ch)],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let layout =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);

        let input_line = if props.query.is_empty() {
            Line::from(vec![
                Span::styled("█", Style::default().fg(ACCENT_GOLD)),
                Span::styled(PLACEHOLDER, Style::default().fg(TEXT_DIM)),
            ])
        } else {
            Line::from(vec![
                Span::styled(props.query.to_string(), Style::default().fg(TEXT_MAIN)),
                Span::styled("█", Style::default().fg(ACCENT_GOLD)),
            ])
        };
        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("SEARCH")
                .style(Style::default().fg(TEXT_DIM).bg(BG_PANEL)),
        );
        frame.render_widget(input, layout[0]);

        // Matches only render while there are some; an empty query shows
        // nothing under the box by design.
        if props.matches.is_empty() {
            if !props.query.is_empty() {
                let empty = Paragraph::new("No match.")
                    .style(Style::default().fg(TEXT_DIM));
                frame.render_widget(empty, layout[1]);
            }
            return;
        }

        let items: Vec<ListItem> = props
            .matches
            .iter()
            .filter_map(|idx| props.entities.get(*idx))
            .map(|entry| ListItem::new(entry.name.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("RESULTS")
                    .style(Style::default().fg(TEXT_DIM)),
            )
            .style(Style::default().fg(TEXT_MAIN))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT_GOLD)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(props.selected.min(props.matches.len() - 1)));
        frame.render_stateful_widget(list, layout[1], &mut list_state);
    }
}
