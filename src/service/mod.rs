pub mod http;
pub mod provider;

pub use http::HttpPredictionClient;
pub use provider::PredictionService;
