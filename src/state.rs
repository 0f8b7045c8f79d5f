//! Application state - single source of truth for the catalog view.

use serde::{Deserialize, Serialize};

/// Minimal catalog entry: a name plus the URL its detail is fetched from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

/// One named base stat from the detail endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub base: u16,
}

/// Full record fetched on demand when a summary is chosen. Replaced
/// wholesale on each new selection, cleared when the modal closes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub sprite: Option<String>,
    pub stats: Vec<StatValue>,
}

/// Chart-ready series derived from detail stats, same order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn from_stats(stats: &[StatValue]) -> Self {
        Self {
            labels: stats.iter().map(|stat| stat.name.clone()).collect(),
            values: stats.iter().map(|stat| u64::from(stat.base)).collect(),
        }
    }
}

/// Catalog lifecycle: Idle -> Loading -> Ready | Failed. `Failed`
/// renders the same welcome screen as `Idle`; only the status line
/// tells them apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CatalogPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    /// Indices into the catalog, original order preserved. Kept empty
    /// while the query is empty so the full list never renders under
    /// the search box.
    pub matches: Vec<usize>,
    pub selected: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    pub phase: CatalogPhase,
    pub pokemons: Vec<PokemonSummary>,
    pub search: SearchState,
    pub detail: Option<PokemonDetail>,
    /// Request token for the in-flight detail fetch. A response is
    /// applied only while its name still matches this token.
    pub detail_pending: Option<String>,
    pub chart: ChartSeries,
    pub message: Option<String>,
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            terminal_size: (80, 24),
            phase: CatalogPhase::Idle,
            pokemons: Vec::new(),
            search: SearchState::default(),
            detail: None,
            detail_pending: None,
            chart: ChartSeries::default(),
            message: None,
            tick: 0,
        }
    }
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.phase == CatalogPhase::Loading
    }

    /// The welcome screen covers both "never loaded" and "load failed";
    /// the two are intentionally indistinguishable here.
    pub fn show_welcome(&self) -> bool {
        !self.is_loading() && self.pokemons.is_empty()
    }

    pub fn modal_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn rebuild_matches(&mut self) {
        self.search.matches = filter_matches(&self.pokemons, &self.search.query);
        self.search.selected = 0;
    }

    pub fn selected_match(&self) -> Option<&PokemonSummary> {
        self.search
            .matches
            .get(self.search.selected)
            .and_then(|idx| self.pokemons.get(*idx))
    }
}

/// Case-insensitive substring filter over entity names. Original order,
/// no ranking, no debounce. An empty query yields no matches rather
/// than the whole catalog.
pub fn filter_matches(entities: &[PokemonSummary], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    entities
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PokemonSummary> {
        ["bulbasaur", "ivysaur", "venusaur"]
            .iter()
            .map(|name| PokemonSummary {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{name}"),
            })
            .collect()
    }

    #[test]
    fn substring_match_preserves_order() {
        let entities = catalog();
        assert_eq!(filter_matches(&entities, "saur"), vec![0, 1, 2]);
        assert_eq!(filter_matches(&entities, "ivy"), vec![1]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let entities = catalog();
        assert_eq!(filter_matches(&entities, "SAUR"), vec![0, 1, 2]);
        assert_eq!(filter_matches(&entities, "IvY"), vec![1]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let entities = catalog();
        assert!(filter_matches(&entities, "").is_empty());
        assert!(filter_matches(&[], "").is_empty());
    }

    #[test]
    fn unmatched_query_is_empty_too() {
        let entities = catalog();
        assert!(filter_matches(&entities, "charizard").is_empty());
    }

    #[test]
    fn chart_series_mirrors_stats_in_order() {
        let stats = vec![
            StatValue {
                name: "hp".into(),
                base: 45,
            },
            StatValue {
                name: "attack".into(),
                base: 49,
            },
        ];
        let series = ChartSeries::from_stats(&stats);
        assert_eq!(series.labels, vec!["hp", "attack"]);
        assert_eq!(series.values, vec![45, 49]);
        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.labels.len(), stats.len());
    }
}
