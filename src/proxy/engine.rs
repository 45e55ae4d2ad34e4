//! Engine API client
//!
//! Forwards proxied requests to an endpoint's engine and buffers the reply.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::proxy::response::ProxyResponse;
use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderName, Method, header};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, instrument};

/// Header naming the principal on whose behalf a request is made
pub const USER_HEADER: &str = "x-harbormaster-user";

/// Headers that only make sense on a single connection, plus the ones the
/// client recomputes itself
const SKIPPED_HEADERS: [HeaderName; 10] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
    header::CONTENT_LENGTH,
    header::ACCEPT_ENCODING,
];

/// HTTP client for engine APIs
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: Client,
}

impl EngineClient {
    /// Create a new engine client from configuration
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .user_agent(format!("harbormaster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }

    /// Forward one request to the engine
    #[instrument(skip(self, headers, body), fields(method = %method))]
    pub async fn forward(
        &self,
        url: Url,
        method: Method,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<ProxyResponse, EngineError> {
        debug!(%url, "Forwarding to engine");

        let response = self
            .http
            .request(method, url)
            .headers(forwarded_headers(headers))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let mut headers = response.headers().clone();
        for name in &SKIPPED_HEADERS {
            headers.remove(name);
        }
        let body = response.bytes().await?;

        Ok(ProxyResponse::new(status, headers, body))
    }
}

/// Join an endpoint base URL and a request path
///
/// Engine addresses written as `tcp://host:port` are reached over plain HTTP.
pub fn engine_url(base_url: &str, path_and_query: &str) -> Result<Url, EngineError> {
    let base = match base_url.strip_prefix("tcp://") {
        Some(rest) => format!("http://{}", rest),
        None => base_url.to_string(),
    };

    let joined = format!("{}{}", base.trim_end_matches('/'), path_and_query);
    let url = Url::parse(&joined).map_err(|e| EngineError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(EngineError::InvalidUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = headers.clone();
    for name in &SKIPPED_HEADERS {
        forwarded.remove(name);
    }
    forwarded.remove(USER_HEADER);
    forwarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_engine_url() {
        let url = engine_url("http://10.0.0.5:2375/", "/v1.41/services?filters=x").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:2375/v1.41/services?filters=x");

        let url = engine_url("tcp://10.0.0.5:2375", "/info").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:2375/info");
    }

    #[test]
    fn test_engine_url_keeps_encoding() {
        let url = engine_url("http://10.0.0.5:2375", "/v1.41/%73ervices%3Fx").unwrap();
        assert_eq!(url.path(), "/v1.41/%73ervices%3Fx");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_engine_url_rejects_unsupported() {
        assert!(matches!(
            engine_url("unix:///var/run/docker.sock", "/info"),
            Err(EngineError::InvalidUrl { .. })
        ));
        assert!(matches!(
            engine_url("not a url", "/info"),
            Err(EngineError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_forwarded_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("7"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let forwarded = forwarded_headers(&headers);
        assert!(forwarded.get(USER_HEADER).is_none());
        assert!(forwarded.get(header::CONNECTION).is_none());
        assert_eq!(forwarded[header::ACCEPT], "application/json");
    }
}
