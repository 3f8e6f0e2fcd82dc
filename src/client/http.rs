//! `POST /calculate` over reqwest.

use async_trait::async_trait;

use crate::client::Calculator;
use crate::config::ServerConfig;
use crate::constants::CALCULATE_PATH;
use crate::error::CalcError;
use crate::models::{CalculationRequest, CalculationResponse};

/// Calculator backed by the remote JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpCalculator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCalculator {
    /// Build a dispatcher for the configured server.
    ///
    /// Without a configured timeout the request waits for as long as the
    /// server takes.
    pub fn new(config: &ServerConfig) -> Result<Self, CalcError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.url),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join the server base URL and the endpoint path.
fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), CALCULATE_PATH)
}

#[async_trait]
impl Calculator for HttpCalculator {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalcError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            num1 = request.num1,
            num2 = request.num2,
            operation = %request.operation,
            "sending calculation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        // The body decides success or failure; the status is only logged.
        let status = response.status();
        let body: CalculationResponse = response.json().await.map_err(|e| {
            tracing::warn!(%status, error = %e, "undecodable calculation response");
            CalcError::Transport(format!("malformed response (HTTP {status}): {e}"))
        })?;

        let outcome = body.into_result();
        match &outcome {
            Ok(value) => tracing::debug!(%status, result = value, "calculation succeeded"),
            Err(e) => tracing::info!(%status, error = %e, "calculation rejected"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_config(url: &str) -> ServerConfig {
        ServerConfig {
            url: url.to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn endpoint_trims_trailing_slashes() {
        assert_eq!(endpoint_url("http://calc.local/"), "http://calc.local/calculate");
        assert_eq!(endpoint_url("http://calc.local"), "http://calc.local/calculate");
    }

    #[tokio::test]
    async fn posts_json_body_and_returns_result() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"num1": 4.0, "num2": 2.0, "operation": "+"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": 6})))
            .expect(1)
            .mount(&server)
            .await;

        let calc = HttpCalculator::new(&server_config(&server.uri())).unwrap();
        let result = calc
            .calculate(&CalculationRequest::new(4.0, 2.0, Operation::Add))
            .await
            .unwrap();
        assert_eq!(result, 6.0);
    }

    #[tokio::test]
    async fn error_field_becomes_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "overflow"})),
            )
            .mount(&server)
            .await;

        let calc = HttpCalculator::new(&server_config(&server.uri())).unwrap();
        let err = calc
            .calculate(&CalculationRequest::new(1e308, 10.0, Operation::Multiply))
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::ServerCalculation("overflow".into()));
    }

    #[tokio::test]
    async fn error_field_is_honored_on_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Unknown operation"})),
            )
            .mount(&server)
            .await;

        let calc = HttpCalculator::new(&server_config(&server.uri())).unwrap();
        let err = calc
            .calculate(&CalculationRequest::new(1.0, 2.0, Operation::Add))
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::ServerCalculation("Unknown operation".into()));
    }

    #[tokio::test]
    async fn result_is_honored_on_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"result": 2})))
            .mount(&server)
            .await;

        let calc = HttpCalculator::new(&server_config(&server.uri())).unwrap();
        let result = calc
            .calculate(&CalculationRequest::new(4.0, 2.0, Operation::Divide))
            .await
            .unwrap();
        assert_eq!(result, 2.0);
    }

    #[tokio::test]
    async fn malformed_body_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let calc = HttpCalculator::new(&server_config(&server.uri())).unwrap();
        let err = calc
            .calculate(&CalculationRequest::new(4.0, 2.0, Operation::Add))
            .await
            .unwrap_err();
        match err {
            CalcError::Transport(msg) => assert!(msg.contains("malformed response"), "{msg}"),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let calc = HttpCalculator::new(&server_config("http://127.0.0.1:9")).unwrap();
        let err = calc
            .calculate(&CalculationRequest::new(4.0, 2.0, Operation::Add))
            .await
            .unwrap_err();
        assert!(matches!(err, CalcError::Transport(_)));
    }

    #[tokio::test]
    async fn zero_timeout_waits_for_the_answer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": 6})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ServerConfig {
            url: server.uri(),
            timeout_secs: Some(0),
        };
        let calc = HttpCalculator::new(&config).unwrap();
        let result = calc
            .calculate(&CalculationRequest::new(4.0, 2.0, Operation::Add))
            .await
            .unwrap();
        assert_eq!(result, 6.0);
    }

    #[tokio::test]
    async fn configured_timeout_surfaces_as_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"result": 1}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = ServerConfig {
            url: server.uri(),
            timeout_secs: Some(1),
        };
        let calc = HttpCalculator::new(&config).unwrap();
        let err = calc
            .calculate(&CalculationRequest::new(0.5, 0.5, Operation::Add))
            .await
            .unwrap_err();
        assert!(matches!(err, CalcError::Transport(_)));
    }
}
