use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::{ChartSeries, PokemonDetail};
use crate::ui::{centered_rect, ACCENT_GOLD, BG_PANEL, TEXT_DIM, TEXT_MAIN};

/// Bar palette from the original chart config, cycled per bar.
const CHART_COLORS: [Color; 5] = [
    Color::Rgb(255, 187, 17),
    Color::Rgb(236, 240, 241),
    Color::Rgb(80, 175, 149),
    Color::Rgb(243, 186, 47),
    Color::Rgb(42, 113, 208),
];

pub struct DetailModalProps<'a> {
    pub detail: &'a PokemonDetail,
    pub chart: &'a ChartSeries,
}

pub struct DetailModal;

impl Component<Action> for DetailModal {
    type Props<'a> = DetailModalProps<'a>;

    fn handle_key(&mut self, key: &KeyEvent, _props: Self::Props<'_>) -> Vec<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => vec![Action::ModalDismiss],
            KeyCode::Char('s') => vec![Action::ExportRequest],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 30 || area.height < 12 {
            return;
        }
        let modal_area = centered_rect(70, 80, area);
        frame.render_widget(Clear, modal_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", props.detail.name))
            .style(Style::default().fg(TEXT_MAIN).bg(BG_PANEL));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let info_height = props.detail.stats.len() as u16 + 3;
        let layout = Layout::vertical([
            Constraint::Length(info_height),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(inner);

        render_info(frame, layout[0], props.detail);
        render_chart(frame, layout[1], props.chart);
        render_hints(frame, layout[2]);
    }
}

fn render_info(frame: &mut Frame, area: Rect, detail: &PokemonDetail) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Pokemon: ", Style::default().fg(TEXT_DIM)),
        Span::styled(
            detail.name.clone(),
            Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(sprite) = &detail.sprite {
        lines.push(Line::from(Span::styled(
            format!("Sprite: {sprite}"),
            Style::default().fg(TEXT_DIM),
        )));
    }
    lines.push(Line::default());
    for stat in &detail.stats {
        lines.push(Line::from(format!("{:<18}{:>4}", stat.name, stat.base)));
    }
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(TEXT_MAIN)),
        area,
    );
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &ChartSeries) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Pokemon Stats")
        .style(Style::default().fg(TEXT_DIM));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    // Legend pinned to the top, as the original chart config had it.
    let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);
    let legend = Paragraph::new(Line::from(vec![
        Span::styled("■ ", Style::default().fg(ACCENT_GOLD)),
        Span::styled("stats", Style::default().fg(TEXT_DIM)),
    ]));
    frame.render_widget(legend, layout[0]);

    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .enumerate()
        .map(|(index, (label, value))| {
            Bar::default()
                .value(*value)
                .label(Line::from(short_label(label)))
                .style(Style::default().fg(CHART_COLORS[index % CHART_COLORS.len()]))
        })
        .collect();
    let chart_widget = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1);
    frame.render_widget(chart_widget, layout[1]);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("s", Style::default().fg(ACCENT_GOLD)),
        Span::styled(" save pdf   ", Style::default().fg(TEXT_DIM)),
        Span::styled("esc", Style::default().fg(ACCENT_GOLD)),
        Span::styled(" close", Style::default().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

fn short_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SAT".to_string(),
        "special-defense" => "SDF".to_string(),
        "speed" => "SPD".to_string(),
        other => other.chars().take(6).collect(),
    }
}
