// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Remote content retrieval over HTTP.
//!
//! The body is returned as text whatever the response status; callers that
//! care about the status should look at the logs or use their own client.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::Instrument;

use crate::config::consts::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::errors::FetchError;
use crate::observability::messages::{fetch::*, StructuredLog};

/// Source of remote text content.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `ContentFetcher` backed by a reusable `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start_msg = FetchStarted { url };
        let span = start_msg.span("fetch_url");
        start_msg.log();

        let start_time = Instant::now();

        let result = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(|source| FetchError::Body {
                url: url.to_string(),
                source,
            })?;

            Ok::<_, FetchError>((status, body))
        }
        .instrument(span)
        .await;

        match result {
            Ok((status, body)) => {
                FetchCompleted {
                    url,
                    status,
                    body_size: body.len(),
                    duration: start_time.elapsed(),
                }
                .log();
                Ok(body)
            }
            Err(error) => {
                FetchFailed { url, error: &error }.log();
                Err(error)
            }
        }
    }
}

/// Fetch `url` with a default client and timeout.
pub async fn fetch_url(url: &str) -> Result<String, FetchError> {
    HttpFetcher::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))?
        .fetch(url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the URL to request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/page", addr)
    }

    fn local_fetcher() -> HttpFetcher {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpFetcher::with_client(client)
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once("HTTP/1.1 200 OK", "hello world").await;

        let body = local_fetcher().fetch(&url).await.unwrap();
        assert_eq!(body, "hello world");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_for_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "missing").await;

        let body = local_fetcher().fetch(&url).await.unwrap();
        assert_eq!(body, "missing");
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let result = local_fetcher().fetch("not a url").await;

        match result {
            Err(FetchError::Request { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = local_fetcher().fetch(&format!("http://{}/", addr)).await;
        assert!(matches!(result, Err(FetchError::Request { .. })));
    }

    #[test]
    fn test_http_fetcher_builds_with_timeout() {
        assert!(HttpFetcher::new(Duration::from_secs(1)).is_ok());
    }
}
