use super::http::get_json;
use crate::lookup::{IpInfoResponse, LookupError, LookupResult};

/// Look up the caller's public IP and location. One request, no retries.
pub async fn fetch_lookup(url: &str) -> Result<LookupResult, LookupError> {
    let raw: IpInfoResponse = get_json(url).await?;
    Ok(raw.into())
}
