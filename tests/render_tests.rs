//! Screen snapshot tests against ratatui's TestBackend.

use dexview::action::Action;
use dexview::reducer::reducer;
use dexview::state::{AppState, PokemonDetail, PokemonSummary, StatValue};
use dexview::ui::Ui;
use ratatui::{backend::TestBackend, Terminal};

fn render_to_string(state: &AppState) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut ui = Ui::new();
    terminal.draw(|frame| ui.render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            match buffer.cell((x, y)) {
                Some(cell) => text.push_str(cell.symbol()),
                None => text.push(' '),
            }
        }
        text.push('\n');
    }
    text
}

fn saur_catalog() -> Vec<PokemonSummary> {
    ["bulbasaur", "ivysaur", "venusaur"]
        .iter()
        .map(|name| PokemonSummary {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{name}"),
        })
        .collect()
}

#[test]
fn loading_screen_shows_an_indicator_instead_of_the_list() {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);

    let output = render_to_string(&state);
    assert!(output.contains("Loading pokedex"), "should show loading text");
    assert!(!output.contains("SEARCH"), "list UI must be hidden while loading");
}

#[test]
fn welcome_screen_renders_before_first_load() {
    let state = AppState::default();
    let output = render_to_string(&state);
    assert!(output.contains("Welcome to the pokedex!"));
}

#[test]
fn failed_load_is_visually_the_welcome_screen_plus_status() {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);
    reducer(&mut state, Action::CatalogDidError("connection refused".into()));

    let output = render_to_string(&state);
    assert!(output.contains("Welcome to the pokedex!"));
    assert!(output.contains("Catalog error"), "failure only surfaces on the status line");
}

#[test]
fn ready_screen_shows_search_box_and_matches() {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);
    reducer(&mut state, Action::CatalogDidLoad(saur_catalog()));

    let output = render_to_string(&state);
    assert!(output.contains("SEARCH"));
    // Empty query: the catalog must not spill under the box.
    assert!(!output.contains("bulbasaur"));

    for ch in "saur".chars() {
        reducer(&mut state, Action::SearchInput(ch));
    }
    let output = render_to_string(&state);
    assert!(output.contains("bulbasaur"));
    assert!(output.contains("ivysaur"));
    assert!(output.contains("venusaur"));
}

#[test]
fn unmatched_query_shows_no_match() {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);
    reducer(&mut state, Action::CatalogDidLoad(saur_catalog()));
    for ch in "mew".chars() {
        reducer(&mut state, Action::SearchInput(ch));
    }

    let output = render_to_string(&state);
    assert!(output.contains("No match."));
}

#[test]
fn modal_shows_detail_and_chart_title() {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);
    reducer(&mut state, Action::CatalogDidLoad(saur_catalog()));
    reducer(&mut state, Action::MatchChoose(0));
    reducer(
        &mut state,
        Action::DetailDidLoad {
            name: "bulbasaur".into(),
            detail: PokemonDetail {
                name: "bulbasaur".into(),
                sprite: None,
                stats: vec![
                    StatValue {
                        name: "hp".into(),
                        base: 45,
                    },
                    StatValue {
                        name: "attack".into(),
                        base: 49,
                    },
                ],
            },
        },
    );

    let output = render_to_string(&state);
    assert!(output.contains("bulbasaur"));
    assert!(output.contains("Pokemon Stats"));
    assert!(output.contains("hp"));
    assert!(output.contains("attack"));
    assert!(output.contains("45"));
    assert!(output.contains("save pdf"));
}

#[test]
fn dismissing_the_modal_restores_the_search_screen() {
    let mut state = AppState::default();
    reducer(&mut state, Action::Init);
    reducer(&mut state, Action::CatalogDidLoad(saur_catalog()));
    reducer(&mut state, Action::MatchChoose(0));
    reducer(
        &mut state,
        Action::DetailDidLoad {
            name: "bulbasaur".into(),
            detail: PokemonDetail {
                name: "bulbasaur".into(),
                sprite: None,
                stats: Vec::new(),
            },
        },
    );
    reducer(&mut state, Action::ModalDismiss);

    let output = render_to_string(&state);
    assert!(!output.contains("Pokemon Stats"));
    assert!(output.contains("SEARCH"));
}
