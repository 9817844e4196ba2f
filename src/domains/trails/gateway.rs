//! Overpass API gateway.
//!
//! Executes rendered Overpass QL against the configured endpoint with
//! timeout, bounded exponential-backoff retries, and shared request
//! pacing. Failures are classified so callers can distinguish a rejected
//! query from an unavailable service from an unparseable payload; none of
//! them is ever reported as an empty result.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::core::config::OverpassConfig;

use super::pacer::RequestPacer;
use super::types::RawElement;

/// Errors from executing a query against Overpass.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request exceeded its deadline. Retried; surfaced as-is once
    /// the retry ceiling is reached.
    #[error("Overpass request timed out")]
    Timeout,

    /// A transient failure (connection error, 429, or 5xx). Retried with
    /// backoff, then surfaced.
    #[error("Overpass unavailable: {0}")]
    Transient(String),

    /// Overpass rejected the query itself (4xx). Never retried.
    #[error("Overpass rejected the query: {0}")]
    InvalidQuery(String),

    /// The response body could not be parsed as an element list. Never
    /// retried, never coerced into "zero trails".
    #[error("Malformed Overpass response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Whether another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transient(_))
    }
}

/// Top-level shape of an Overpass JSON response.
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<RawElement>,
}

/// Rate-limited, retrying client for the Overpass interpreter endpoint.
pub struct OverpassGateway {
    client: reqwest::Client,
    config: OverpassConfig,
    pacer: Arc<RequestPacer>,
}

impl OverpassGateway {
    pub fn new(config: OverpassConfig, pacer: Arc<RequestPacer>) -> crate::core::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                crate::core::Error::internal(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config,
            pacer,
        })
    }

    /// Execute a rendered query, retrying transient failures with
    /// exponential backoff. At most one request is in flight per call.
    #[instrument(skip(self, query_text), fields(query_len = query_text.len()))]
    pub async fn execute(&self, query_text: &str) -> Result<Vec<RawElement>, GatewayError> {
        let mut last_error = GatewayError::Transient("no attempt made".to_string());

        for attempt in 0..self.config.max_retries {
            if attempt > 0 {
                let delay = self.config.base_delay_ms * 2u64.pow(attempt - 1);
                debug!(
                    "Retrying Overpass request (attempt {}/{}) after {}ms",
                    attempt + 1,
                    self.config.max_retries,
                    delay
                );
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            self.pacer.pace().await;

            match self.try_request(query_text).await {
                Ok(elements) => return Ok(elements),
                Err(e) if e.is_retryable() => {
                    warn!("Overpass attempt {} failed: {}", attempt + 1, e);
                    last_error = e;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }

    /// One attempt: POST the query, classify the status, parse the body.
    async fn try_request(&self, query_text: &str) -> Result<Vec<RawElement>, GatewayError> {
        let response = self
            .client
            .post(&self.config.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(query_text.to_string())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::Transient(format!("Connection failed: {e}"))
                } else {
                    GatewayError::Transient(e.to_string())
                }
            })?;

        let status = response.status();
        Self::classify_status(status)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transient(format!("Failed to read body: {e}")))?;

        debug!("Overpass response received: {} bytes", body.len());
        Self::parse_elements(&body)
    }

    /// Map an HTTP status to an error class. 429 counts as transient
    /// (fair-use throttling), other 4xx mean the query itself was bad.
    fn classify_status(status: StatusCode) -> Result<(), GatewayError> {
        if status.as_u16() == 429 {
            return Err(GatewayError::Transient("Rate limit exceeded".to_string()));
        }
        if status.is_server_error() {
            return Err(GatewayError::Transient(format!("Server error ({status})")));
        }
        if status.is_client_error() {
            return Err(GatewayError::InvalidQuery(format!(
                "Client error ({status})"
            )));
        }
        Ok(())
    }

    /// Parse the response body into raw elements. A body without a valid
    /// `elements` array is a malformed response, not an empty result.
    fn parse_elements(body: &[u8]) -> Result<Vec<RawElement>, GatewayError> {
        let parsed: OverpassResponse = serde_json::from_slice(body)
            .map_err(|e| GatewayError::MalformedResponse(format!("JSON parse error: {e}")))?;
        Ok(parsed.elements)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Local listener that accepts connections but never responds, so
    /// every request runs into the client deadline.
    fn silent_server() -> (String, Arc<AtomicUsize>) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let accepted = Arc::new(AtomicUsize::new(0));
        let counter = accepted.clone();
        std::thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                counter.fetch_add(1, Ordering::SeqCst);
                held.push(stream);
            }
        });
        (url, accepted)
    }

    #[tokio::test]
    async fn test_deadline_exceeded_on_every_attempt_surfaces_timeout() {
        let (url, accepted) = silent_server();
        let config = OverpassConfig {
            url,
            request_timeout_secs: 1,
            max_retries: 2,
            base_delay_ms: 1,
            ..OverpassConfig::default()
        };
        let gateway =
            OverpassGateway::new(config, Arc::new(RequestPacer::new(Duration::ZERO))).unwrap();

        let err = gateway.execute("[out:json];way;out;").await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
        // Retried up to the configured ceiling, then stopped.
        assert_eq!(accepted.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_classify_success() {
        assert!(OverpassGateway::classify_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn test_classify_rate_limit_is_transient() {
        let err = OverpassGateway::classify_status(StatusCode::TOO_MANY_REQUESTS).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_classify_server_error_is_transient() {
        let err = OverpassGateway::classify_status(StatusCode::BAD_GATEWAY).unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_classify_bad_query_not_retried() {
        let err = OverpassGateway::classify_status(StatusCode::BAD_REQUEST).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidQuery(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_timeout_is_retryable() {
        assert!(GatewayError::Timeout.is_retryable());
    }

    #[test]
    fn test_malformed_response_not_retryable() {
        assert!(!GatewayError::MalformedResponse("x".to_string()).is_retryable());
    }

    #[test]
    fn test_parse_valid_response() {
        let body = br#"{
            "version": 0.6,
            "elements": [
                {"type": "way", "id": 1, "geometry": [{"lat": 1.0, "lon": 2.0}], "tags": {"highway": "path"}}
            ]
        }"#;
        let elements = OverpassGateway::parse_elements(body).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id, 1);
    }

    #[test]
    fn test_parse_empty_element_list_is_success() {
        let body = br#"{"elements": []}"#;
        let elements = OverpassGateway::parse_elements(body).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_malformed_not_empty() {
        let err = OverpassGateway::parse_elements(b"<html>watchdog</html>").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_missing_elements_key_is_malformed() {
        let err = OverpassGateway::parse_elements(br#"{"version": 0.6}"#).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }
}
