use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::provider::PredictionService;
use crate::models::{PredictionRequest, PredictionResponse};

/// Path of the prediction endpoint, resolved against the server origin.
const PREDICT_PATH: &str = "/predict";

/// Client for the match prediction backend.
#[derive(Clone)]
pub struct HttpPredictionClient {
    http: Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    /// `timeout` of `None` waits for the backend indefinitely.
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(server_url)
            .with_context(|| format!("Invalid prediction server URL '{}'", server_url))?;
        let endpoint = base
            .join(PREDICT_PATH)
            .context("Failed to build prediction endpoint URL")?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(HttpPredictionClient { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    fn name(&self) -> &str {
        "prediction-api"
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        debug!(
            "POST {} ({} vs {})",
            self.endpoint, request.home_team, request.away_team
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .context("Prediction request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if body.trim().is_empty() {
                anyhow::bail!("Prediction service error {}", status);
            }
            anyhow::bail!("Prediction service error {}: {}", status, body.trim());
        }

        let prediction: PredictionResponse = resp
            .json()
            .await
            .context("Failed to parse prediction response")?;

        info!(
            "Prediction received for '{} vs {}': {}/{}/{}",
            request.home_team,
            request.away_team,
            prediction.match_result.home_win,
            prediction.match_result.draw,
            prediction.match_result.away_win
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<PredictionRequest>>>;

    fn sample_response() -> serde_json::Value {
        serde_json::json!({
            "match_result": {"home_win": "%52.1", "draw": "%24.3", "away_win": "%23.6"},
            "score": {"prediction": "2-1", "probability": "%11.4"},
            "htft": {"prediction": "1/1", "probability": "%31.0"},
            "btts": {"prediction": "Var", "probability": "%58.2"}
        })
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn recording_app(received: Received) -> String {
        async fn handler(
            State(received): State<Received>,
            Json(req): Json<PredictionRequest>,
        ) -> Json<serde_json::Value> {
            received.lock().unwrap().push(req);
            Json(sample_response())
        }
        serve(
            Router::new()
                .route("/predict", post(handler))
                .with_state(received),
        )
        .await
    }

    fn request(home: &str, away: &str) -> PredictionRequest {
        PredictionRequest {
            home_team: home.into(),
            away_team: away.into(),
        }
    }

    #[test]
    fn test_endpoint_is_root_relative() {
        let client = HttpPredictionClient::new("http://localhost:5000/app/", None).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:5000/predict");
    }

    #[test]
    fn test_invalid_server_url_rejected() {
        assert!(HttpPredictionClient::new("not a url", None).is_err());
    }

    #[tokio::test]
    async fn test_posts_json_body_and_parses_response() {
        let received: Received = Arc::default();
        let base = recording_app(received.clone()).await;
        let client = HttpPredictionClient::new(&base, None).unwrap();

        let resp = client
            .predict(&request("Beşiktaş", "Trabzonspor"))
            .await
            .unwrap();

        // The Json extractor only accepts application/json bodies.
        assert_eq!(*received.lock().unwrap(), vec![request("Beşiktaş", "Trabzonspor")]);
        assert_eq!(resp.match_result.home_win, "%52.1");
        assert_eq!(resp.btts.to_string(), "Var (%58.2)");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        async fn handler() -> (StatusCode, &'static str) {
            (StatusCode::INTERNAL_SERVER_ERROR, "model not loaded")
        }
        let base = serve(Router::new().route("/predict", post(handler))).await;
        let client = HttpPredictionClient::new(&base, None).unwrap();

        let err = client.predict(&request("A", "B")).await.unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.contains("500"), "unexpected error: {}", text);
        assert!(text.contains("model not loaded"), "unexpected error: {}", text);
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        async fn handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({"match_result": {"home_win": "%40.0"}}))
        }
        let base = serve(Router::new().route("/predict", post(handler))).await;
        let client = HttpPredictionClient::new(&base, None).unwrap();

        let err = client.predict(&request("A", "B")).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse prediction response"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpPredictionClient::new(&format!("http://{}", addr), None).unwrap();
        let err = client.predict(&request("A", "B")).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Prediction request failed"));
    }
}
