//! API utilities for talking to the PokeAPI
//!
//! Provides the injected [`ApiConfig`], a thin GET wrapper over `gloo-net`
//! with status validation, and [`AbortSlot`] for cancelling superseded requests.

use contracts::shared::config::{ApiConfig, ApiConfigOverrides};
use contracts::shared::error::FetchError;
use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, AbortSignal};

/// Build the API configuration from the page query string
///
/// Recognised parameters: `api_base` and `limit`, e.g.
/// `?api_base=http://localhost:8000/api/v2&limit=20`.
/// Anything missing or malformed falls back to the defaults.
pub fn load_api_config() -> ApiConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let config = ApiConfig::with_overrides(parse_overrides(&search));
    log::debug!("API config: base={} page_size={}", config.base_url, config.page_size);
    config
}

fn parse_overrides(search: &str) -> ApiConfigOverrides {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Configuration provided by the root component
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

/// Issue a GET and reject non-success statuses
pub async fn get(url: &str, signal: Option<&AbortSignal>) -> Result<Response, FetchError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    ensure_ok(&response)?;
    Ok(response)
}

pub fn ensure_ok(response: &Response) -> Result<(), FetchError> {
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(())
}

/// Decode a JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Holds the abort controller of the request currently in flight for one loader
#[derive(Clone, Copy)]
pub struct AbortSlot(StoredValue<Option<AbortController>, LocalStorage>);

impl AbortSlot {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    /// Abort the request in flight, if any, and return the signal for the next one
    pub fn renew(&self) -> Option<AbortSignal> {
        let next = AbortController::new().ok();
        let signal = next.as_ref().map(|controller| controller.signal());

        let mut previous = None;
        self.0
            .update_value(|slot| previous = std::mem::replace(slot, next));
        if let Some(controller) = previous {
            controller.abort();
        }

        signal
    }

    pub fn abort(&self) {
        let mut previous = None;
        self.0.update_value(|slot| previous = slot.take());
        if let Some(controller) = previous {
            controller.abort();
        }
    }
}

impl Default for AbortSlot {
    fn default() -> Self {
        Self::new()
    }
}
