//! PokeAPI client.

use serde::Deserialize;

use crate::state::{PokemonDetail, PokemonSummary, StatValue};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Debug)]
pub enum ApiError {
    Request(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "request failed: {}", e),
            ApiError::Status(code) => write!(f, "unexpected status: {}", code),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    sprites: SpriteSet,
    stats: Vec<StatSlot>,
}

#[derive(Clone, Debug, Deserialize)]
struct SpriteSet {
    front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct StatSlot {
    base_stat: u16,
    stat: NamedResource,
}

/// Fetch the catalog page: ordered summaries, one per entry.
pub async fn fetch_catalog(base: &str) -> Result<Vec<PokemonSummary>, ApiError> {
    let url = format!("{base}/pokemon");
    let data: ListResponse = fetch_json(&url).await?;
    Ok(data
        .results
        .into_iter()
        .map(|entry| PokemonSummary {
            name: entry.name,
            url: entry.url,
        })
        .collect())
}

/// Fetch one entry's detail from the URL its summary carries.
pub async fn fetch_detail(url: &str) -> Result<PokemonDetail, ApiError> {
    let data: PokemonResponse = fetch_json(url).await?;
    Ok(detail_from_response(data))
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = reqwest::get(url).await.map_err(ApiError::Request)?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    response.json().await.map_err(ApiError::Request)
}

fn detail_from_response(response: PokemonResponse) -> PokemonDetail {
    PokemonDetail {
        name: response.name,
        sprite: response.sprites.front_default,
        stats: response
            .stats
            .into_iter()
            .map(|slot| StatValue {
                name: slot.stat.name,
                base: slot.base_stat,
            })
            .collect(),
    }
}
