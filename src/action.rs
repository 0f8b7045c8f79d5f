//! Actions: user intents plus async completion events.

use serde::{Deserialize, Serialize};

use crate::state::{PokemonDetail, PokemonSummary};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Init,
    CatalogDidLoad(Vec<PokemonSummary>),
    CatalogDidError(String),

    /// Append one character to the search query.
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    /// Move the match highlight by a signed amount.
    MatchMove(i16),
    /// Choose an entry by its index into the full catalog.
    MatchChoose(usize),

    DetailDidLoad { name: String, detail: PokemonDetail },
    DetailDidError { name: String, error: String },
    ModalDismiss,

    ExportRequest,
    ExportDidSave(String),
    ExportDidError(String),

    UiTerminalResize(u16, u16),
    Tick,
    Quit,
}
