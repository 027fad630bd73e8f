//! HTTP client for the optimizer service

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::infrastructure::traits::{OptimizerClient, OptimizerReply};
use crate::infrastructure::{InfraError, InfraResult};

/// JSON body of `POST /optimize`.
#[derive(Debug, Serialize)]
struct OptimizeRequest<'a> {
    expression: &'a str,
}

/// Blocking reqwest client for `POST <base_url>/optimize`.
pub struct HttpOptimizerClient {
    endpoint: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

impl HttpOptimizerClient {
    /// Create a client with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> InfraResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InfraError::Http {
                message: format!("build http client: {}", e),
            })?;
        Ok(Self {
            endpoint: format!("{}/optimize", base_url.trim_end_matches('/')),
            timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OptimizerClient for HttpOptimizerClient {
    #[instrument(level = "debug", skip(self, expression), fields(endpoint = %self.endpoint))]
    fn optimize(&self, expression: &str) -> Result<OptimizerReply, String> {
        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(&OptimizeRequest { expression })
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    format!("request timed out after {}s", self.timeout.as_secs())
                } else {
                    e.to_string()
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| e.to_string())?;
        debug!(status, bytes = body.len(), "optimizer replied");
        Ok(OptimizerReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let client = HttpOptimizerClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/optimize");
    }
}
