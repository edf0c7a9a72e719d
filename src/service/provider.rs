use anyhow::Result;
use async_trait::async_trait;

use crate::models::{PredictionRequest, PredictionResponse};

/// Trait that every prediction backend must implement.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Ask the backend for one match prediction. Resolves once the backend
    /// replies or the transport fails; dropping the future abandons the call.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
