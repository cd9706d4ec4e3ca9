use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider answered with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Provider returned an empty body")]
    Empty,
}

/// Performs one GET and hands back the raw body.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        debug!(%url, "GET");

        let res = self.http.get(url.clone()).send().await?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(body.to_vec())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("{\"error\":true}"), "{\"error\":true}");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundary() {
        let body = "°".repeat(300);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
