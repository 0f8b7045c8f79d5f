//! Reducer - pure function: (state, action) -> Dispatch

use crate::action::Action;
use crate::effect::Effect;
use crate::export;
use crate::state::{AppState, CatalogPhase, ChartSeries};

/// Outcome of one dispatch: whether the UI must re-render plus any
/// side effects the runtime should execute.
#[derive(Debug, Default)]
pub struct Dispatch {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl Dispatch {
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

/// The reducer handles all state transitions.
pub fn reducer(state: &mut AppState, action: Action) -> Dispatch {
    match action {
        Action::Init => {
            state.phase = CatalogPhase::Loading;
            state.message = None;
            Dispatch::changed_with(Effect::LoadCatalog)
        }

        Action::CatalogDidLoad(entries) => {
            state.pokemons = entries;
            state.phase = CatalogPhase::Ready;
            state.rebuild_matches();
            Dispatch::changed()
        }

        Action::CatalogDidError(error) => {
            state.phase = CatalogPhase::Failed;
            state.pokemons.clear();
            state.rebuild_matches();
            state.message = Some(format!("Catalog error: {error}"));
            Dispatch::changed()
        }

        Action::SearchInput(ch) => {
            state.search.query.push(ch);
            state.rebuild_matches();
            Dispatch::changed()
        }

        Action::SearchBackspace => {
            if state.search.query.pop().is_none() {
                return Dispatch::unchanged();
            }
            state.rebuild_matches();
            Dispatch::changed()
        }

        Action::SearchClear => {
            if state.search.query.is_empty() {
                return Dispatch::unchanged();
            }
            state.search.query.clear();
            state.rebuild_matches();
            Dispatch::changed()
        }

        Action::MatchMove(delta) => {
            if state.search.matches.is_empty() {
                return Dispatch::unchanged();
            }
            let last = state.search.matches.len() - 1;
            let current = state.search.selected.min(last);
            let next = if delta < 0 {
                current.saturating_sub(delta.unsigned_abs() as usize)
            } else {
                (current + delta as usize).min(last)
            };
            if next == state.search.selected {
                return Dispatch::unchanged();
            }
            state.search.selected = next;
            Dispatch::changed()
        }

        Action::MatchChoose(index) => {
            let Some(summary) = state.pokemons.get(index).cloned() else {
                return Dispatch::unchanged();
            };
            state.detail_pending = Some(summary.name.clone());
            state.message = Some(format!("Loading {}...", summary.name));
            Dispatch::changed_with(Effect::LoadDetail {
                name: summary.name,
                url: summary.url,
            })
        }

        Action::DetailDidLoad { name, detail } => {
            // Stale responses from an earlier selection are discarded.
            if state.detail_pending.as_deref() != Some(name.as_str()) {
                return Dispatch::unchanged();
            }
            state.detail_pending = None;
            state.message = None;
            state.chart = ChartSeries::from_stats(&detail.stats);
            state.detail = Some(detail);
            Dispatch::changed()
        }

        Action::DetailDidError { name, error } => {
            if state.detail_pending.as_deref() == Some(name.as_str()) {
                state.detail_pending = None;
            }
            state.message = Some(format!("Detail error for {name}: {error}"));
            Dispatch::changed()
        }

        Action::ModalDismiss => {
            if state.detail.take().is_none() {
                return Dispatch::unchanged();
            }
            // The chart stays as-is; it only renders while the modal is
            // open and is rebuilt on the next selection.
            Dispatch::changed()
        }

        Action::ExportRequest => {
            // Only meaningful while the modal content exists on screen.
            let Some(detail) = state.detail.as_ref() else {
                return Dispatch::unchanged();
            };
            let lines = export::modal_lines(detail, &state.chart);
            state.message = Some(format!("Exporting {}...", export::EXPORT_FILE));
            Dispatch::changed_with(Effect::ExportPdf { lines })
        }

        Action::ExportDidSave(path) => {
            state.message = Some(format!("Saved {path}"));
            Dispatch::changed()
        }

        Action::ExportDidError(error) => {
            state.message = Some(format!("Export error: {error}"));
            Dispatch::changed()
        }

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            Dispatch::changed()
        }

        Action::Tick => {
            if state.is_loading() || state.detail_pending.is_some() {
                state.tick = state.tick.wrapping_add(1);
                Dispatch::changed()
            } else {
                Dispatch::unchanged()
            }
        }

        Action::Quit => Dispatch::unchanged(),
    }
}
