//! Synthetic record generation for locally added entries.

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::record::{Record, RecordAbility, RecordType};

const TYPES: &[&str] = &[
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

const NAMES: &[&str] = &[
    "bulbasaur",
    "charmander",
    "squirtle",
    "pikachu",
    "eevee",
    "mewtwo",
    "gengar",
    "dragonite",
    "snorlax",
    "gyarados",
    "alakazam",
    "machamp",
    "lapras",
    "vaporeon",
    "jolteon",
    "flareon",
    "espeon",
    "umbreon",
    "leafeon",
    "glaceon",
];

/// Highest National Pokédex number used for generated species.
pub const MAX_SPECIES: u32 = 898;

const RECORD_URL_BASE: &str = "https://pokeapi.co/api/v2/pokemon";
const ARTWORK_URL_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Id for a locally created record: current Unix time in milliseconds.
pub fn new_record_id() -> i64 {
    Utc::now().timestamp_millis()
}

/// Build a detail-complete record with randomized fields.
pub fn generate_record<R: Rng + ?Sized>(rng: &mut R, id: i64) -> Record {
    let species = rng.random_range(1..=MAX_SPECIES);
    let name = NAMES.choose(rng).copied().unwrap_or("missingno");

    let type_count = if rng.random_bool(0.3) { 2 } else { 1 };
    let types = TYPES
        .choose_multiple(rng, type_count)
        .map(|name| RecordType::new(*name))
        .collect();

    let ability_count = if rng.random_bool(0.5) { 2 } else { 1 };
    let abilities = (0..ability_count)
        .map(|i| RecordAbility::new(format!("ability-{}", rng.random_range(1..=100)), i > 0))
        .collect();

    Record {
        id,
        name: name.to_string(),
        url: format!("{RECORD_URL_BASE}/{species}/"),
        height: Some(rng.random_range(3..=25)),
        weight: Some(rng.random_range(40..=1000)),
        types: Some(types),
        abilities: Some(abilities),
        sprite: Some(format!("{ARTWORK_URL_BASE}/{species}.png")),
    }
}
