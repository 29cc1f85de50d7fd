//! List endpoint.

use pokedex_core::Record;
use tracing::debug;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::ListResponse;
use crate::parsing::parse_list_response;
use crate::url::build_list_url;

use super::CatalogClient;

impl<B: HttpBackend> CatalogClient<B> {
    /// Fetch one page of summaries, in API order.
    pub(crate) async fn list_page(&self) -> ApiResult<Vec<Record>> {
        let url = build_list_url(&self.config);
        let response: ListResponse = self.backend.get_json(&url).await?;

        debug!(
            returned = response.results.len(),
            total = ?response.count,
            "List page fetched"
        );
        Ok(parse_list_response(response))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::CatalogClient;
    use crate::client::tests::test_config;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_page_requests_limit_and_maps_ids() {
        let backend = FakeBackend::new().with_response(
            "pokemon?limit=20",
            CannedResponse::Json(json!({
                "count": 1302,
                "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                    {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
                ]
            })),
        );
        let client = CatalogClient::with_backend(test_config(), backend);

        let records = client.list_page().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!((records[0].id, records[0].name.as_str()), (1, "bulbasaur"));
        assert_eq!((records[1].id, records[1].name.as_str()), (2, "ivysaur"));
        assert_eq!(
            client.backend.requests(),
            vec!["https://pokeapi.co/api/v2/pokemon?limit=20".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_page_error_status() {
        let backend = FakeBackend::new().with_response("pokemon", CannedResponse::Status(503));
        let client = CatalogClient::with_backend(test_config(), backend);

        let err = client.list_page().await.unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 503, .. }));
    }
}
