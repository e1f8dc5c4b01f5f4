//! HTTP GET abstraction for the browser and native builds
//! Uses gloo-net in the browser (csr), reqwest natively (server)

use serde::de::DeserializeOwned;

use crate::lookup::LookupError;

#[cfg(feature = "server")]
mod native {
    use super::*;

    /// Shared HTTP client for connection pooling
    static HTTP_CLIENT: std::sync::OnceLock<reqwest::Client> = std::sync::OnceLock::new();

    fn get_client() -> &'static reqwest::Client {
        HTTP_CLIENT.get_or_init(reqwest::Client::new)
    }

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LookupError> {
        let response = get_client()
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            leptos::logging::warn!("HTTP error for {}: {}", url, status);
            return Err(LookupError::Http {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(feature = "server")]
pub use native::*;

#[cfg(all(feature = "csr", not(feature = "server")))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LookupError> {
    let response = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.ok() {
        leptos::logging::warn!("HTTP error for {}: {}", url, response.status());
        return Err(LookupError::Http {
            status: response.status(),
        });
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

// Fallback for when neither feature is enabled (cargo check)
#[cfg(not(any(feature = "server", feature = "csr")))]
pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, LookupError> {
    Err(LookupError::unexpected("no HTTP transport compiled in"))
}
