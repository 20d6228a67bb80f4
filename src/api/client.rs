//! HTTP client for the weather statistics backend.
//!
//! The plugin runtime cannot block on a response, so each of the three backend
//! operations is split in two halves: a request builder that produces an
//! [`ApiRequest`] for the runtime to execute, and a decoder that turns the
//! `(status, body)` of the matching result event into a typed value.
//!
//! | Operation    | Endpoint                 | Decoded as                         |
//! |--------------|--------------------------|------------------------------------|
//! | health check | `GET /api/health`        | `Result<HealthStatus>`             |
//! | list cities  | `GET /api/cities?search` | `Result<CitiesResponse>`           |
//! | fetch city   | `GET /api/cities/{name}` | `Result<Option<CityResponse>>`     |
//!
//! No retries, no timeouts, no caching.

use super::request::{ApiRequest, RequestContext, RequestKind};
use crate::domain::{CityMap, CityStats, HealthStatus, Result, WeatherdashError};
use serde::Deserialize;

/// Backend address used when the plugin configuration does not set `api_url`.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

const NOT_FOUND: u16 = 404;

/// Body of `GET /api/cities`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CitiesResponse {
    #[serde(default)]
    pub cities: CityMap,

    /// Number of cities the backend reports for this query.
    #[serde(default)]
    pub total_cities: Option<usize>,
}

/// Body of `GET /api/cities/{name}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityResponse {
    pub city: String,
    pub statistics: CityStats,
}

/// Request builder and response decoder bound to one backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiClient {
    /// Creates a client for `base_url`, dropping any trailing slashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherdash::api::ApiClient;
    ///
    /// let client = ApiClient::new("http://localhost:8080/");
    /// assert_eq!(client.base_url(), "http://localhost:8080");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the `GET /api/health` probe.
    #[must_use]
    pub fn health_request(&self) -> ApiRequest {
        ApiRequest {
            url: format!("{}/api/health", self.base_url),
            context: RequestContext {
                kind: RequestKind::Health,
                seq: 0,
                subject: String::new(),
            },
        }
    }

    /// Builds `GET /api/cities`, adding `search=<query>` only for a non-empty
    /// query.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherdash::api::ApiClient;
    ///
    /// let client = ApiClient::default();
    /// assert_eq!(client.cities_request("", 1).url, "http://127.0.0.1:5000/api/cities");
    /// assert_eq!(
    ///     client.cities_request("Dar es", 2).url,
    ///     "http://127.0.0.1:5000/api/cities?search=Dar%20es",
    /// );
    /// ```
    #[must_use]
    pub fn cities_request(&self, query: &str, seq: u64) -> ApiRequest {
        let url = if query.is_empty() {
            format!("{}/api/cities", self.base_url)
        } else {
            format!(
                "{}/api/cities?search={}",
                self.base_url,
                urlencoding::encode(query)
            )
        };
        ApiRequest {
            url,
            context: RequestContext {
                kind: RequestKind::Cities,
                seq,
                subject: query.to_string(),
            },
        }
    }

    /// Builds `GET /api/cities/{name}` with the name percent-encoded as a path
    /// segment.
    #[must_use]
    pub fn city_request(&self, name: &str, kind: RequestKind, seq: u64) -> ApiRequest {
        ApiRequest {
            url: format!("{}/api/cities/{}", self.base_url, urlencoding::encode(name)),
            context: RequestContext {
                kind,
                seq,
                subject: name.to_string(),
            },
        }
    }

    /// Decodes a health probe result.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherdashError::Http`] for a non-success status and
    /// [`WeatherdashError::Decode`] for an unexpected body.
    pub fn decode_health(status: u16, body: &[u8]) -> Result<HealthStatus> {
        ensure_success(status, body)?;
        Ok(serde_json::from_slice(body)?)
    }

    /// Decodes a city list result.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherdashError::Http`] for a non-success status and
    /// [`WeatherdashError::Decode`] for an unexpected body.
    pub fn decode_cities(status: u16, body: &[u8]) -> Result<CitiesResponse> {
        ensure_success(status, body)?;
        Ok(serde_json::from_slice(body)?)
    }

    /// Decodes a single-city result. A 404 is the recognized "not found"
    /// outcome and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherdashError::Http`] for any other non-success status and
    /// [`WeatherdashError::Decode`] for an unexpected body.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherdash::api::ApiClient;
    ///
    /// let missing = ApiClient::decode_city(404, br#"{"error": "City not found"}"#).unwrap();
    /// assert!(missing.is_none());
    /// assert!(ApiClient::decode_city(500, b"boom").is_err());
    /// ```
    pub fn decode_city(status: u16, body: &[u8]) -> Result<Option<CityResponse>> {
        if status == NOT_FOUND {
            return Ok(None);
        }
        ensure_success(status, body)?;
        Ok(Some(serde_json::from_slice(body)?))
    }
}

fn ensure_success(status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(WeatherdashError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        })
    }
}
