//! Conversions from wire types into core domain types.

use pokedex_core::{Record, RecordAbility, RecordDetails, RecordType};

use crate::models::{ListResponse, PokemonResponse};

/// Path segment that precedes a record id in resource urls.
const ID_SEGMENT: &str = "/pokemon/";

/// Extract the record id from a resource url.
///
/// Takes the digits of the last `/pokemon/<digits>/` segment. When the url
/// has no such segment, falls back to `index + 1` (the position in the list
/// response, 1-based).
///
/// ```
/// use pokedex_api::parse_record_id;
///
/// assert_eq!(parse_record_id("https://pokeapi.co/api/v2/pokemon/25/", 0), 25);
/// assert_eq!(parse_record_id("https://example.com/other", 4), 5);
/// ```
pub fn parse_record_id(url: &str, index: usize) -> i64 {
    url.rmatch_indices(ID_SEGMENT)
        .find_map(|(pos, _)| {
            let rest = &url[pos + ID_SEGMENT.len()..];
            let (digits, _) = rest.split_once('/')?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok()
        })
        .unwrap_or_else(|| i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1)))
}

/// Convert a list body into summary records, in response order.
pub fn parse_list_response(response: ListResponse) -> Vec<Record> {
    response
        .results
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Record::summary(parse_record_id(&entry.url, index), entry.name, entry.url)
        })
        .collect()
}

/// Convert a pokemon body into the detail fields the core merges.
pub fn parse_pokemon_response(response: PokemonResponse) -> RecordDetails {
    RecordDetails {
        id: response.id,
        name: response.name,
        height: response.height,
        weight: response.weight,
        types: response
            .types
            .into_iter()
            .map(|slot| RecordType::new(slot.kind.name))
            .collect(),
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| RecordAbility::new(slot.ability.name, slot.is_hidden))
            .collect(),
        sprite: response.sprites.front_default,
    }
}
