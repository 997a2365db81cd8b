//! HTTP client for the tarot card API.
//!
//! Two endpoints, both `GET`:
//! - `{base}/` → JSON array of cards
//! - `{base}/{id}` → JSON card, or 404

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::source::CardSource;
use crate::cards::{CardId, TarotCard};
use crate::core::config::ApiConfig;
use crate::core::error::{Result, TarotError};

/// Blocking HTTP client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct TarotApiClient {
    http: Client,
    config: ApiConfig,
}

impl TarotApiClient {
    /// Build a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|e| TarotError::Client(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, id: Option<&CardId>) -> Result<T> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().map_err(transport_error)?;
        check_status(response.status(), id)?;
        decode(response)
    }
}

impl CardSource for TarotApiClient {
    fn fetch_all(&self) -> Result<Vec<TarotCard>> {
        let url = self.config.list_url();
        match self.get_json::<Vec<TarotCard>>(&url, None) {
            Ok(cards) => {
                info!(count = cards.len(), "fetched tarot cards");
                Ok(cards)
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch tarot cards");
                Err(err)
            }
        }
    }

    fn fetch_by_id(&self, id: &CardId) -> Result<TarotCard> {
        if !id.is_valid() {
            return Err(TarotError::InvalidId);
        }
        let url = self.config.card_url(id.as_str());
        match self.get_json::<TarotCard>(&url, Some(id)) {
            Ok(card) => {
                info!(%id, name = %card.arcane_name, "fetched card");
                Ok(card)
            }
            Err(err) => {
                warn!(%id, error = %err, "failed to fetch card");
                Err(err)
            }
        }
    }
}

/// Map a response status onto the error taxonomy.
///
/// A 404 is `CardNotFound` only when a specific card was requested.
pub(crate) fn check_status(status: StatusCode, id: Option<&CardId>) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(TarotError::CardNotFound { id: id.clone() }),
        _ => Err(TarotError::Status {
            status: status.as_u16(),
        }),
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().map_err(transport_error)?;
    serde_json::from_str(&body).map_err(TarotError::from)
}

fn transport_error(err: reqwest::Error) -> TarotError {
    if err.is_decode() {
        TarotError::Decode(err.to_string())
    } else {
        TarotError::Network(err.to_string())
    }
}
