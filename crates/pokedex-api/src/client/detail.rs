//! Detail endpoint.

use pokedex_core::RecordDetails;
use tracing::debug;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::PokemonResponse;
use crate::parsing::parse_pokemon_response;
use crate::url::parse_detail_url;

use super::CatalogClient;

impl<B: HttpBackend> CatalogClient<B> {
    /// Fetch the full resource behind a record's url.
    pub(crate) async fn fetch_details(&self, raw_url: &str) -> ApiResult<RecordDetails> {
        let url = parse_detail_url(raw_url)?;
        let response: PokemonResponse = self.backend.get_json(&url).await?;

        debug!(id = response.id, name = %response.name, "Details fetched");
        Ok(parse_pokemon_response(response))
    }
}
