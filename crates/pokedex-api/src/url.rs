//! URL construction helpers for the catalog API.

use crate::error::ApiResult;
use crate::models::ApiConfig;
use url::Url;

/// Build the list URL: `{base_url}?limit={page_size}`.
///
/// Any query already present on the base url is replaced.
pub fn build_list_url(config: &ApiConfig) -> Url {
    let mut url = config.base_url.clone();
    url.set_query(Some(&format!("limit={}", config.page_size)));
    url
}

/// Parse a record's resource url before requesting it.
pub fn parse_detail_url(raw: &str) -> ApiResult<Url> {
    Ok(Url::parse(raw)?)
}
