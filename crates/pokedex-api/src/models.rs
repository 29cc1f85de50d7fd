//! Internal wire types for `PokeAPI` responses.
//!
//! These types never leave the crate. Consumers see the core domain types
//! produced by `parsing`.

use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Validated configuration used by the client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// List endpoint
    pub base_url: Url,
    /// `limit` query parameter, always at least 1
    pub page_size: u32,
}

// ============================================================================
// List endpoint
// ============================================================================

/// Body of `GET {base_url}?limit=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<NamedResource>,
}

/// A `{name, url}` reference, used throughout the API.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// ============================================================================
// Detail endpoint
// ============================================================================

/// The subset of a pokemon resource the client reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: i64,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}
