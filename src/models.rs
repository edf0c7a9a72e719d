use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FormError;

/// Opaque team identifier shared by the selectors and the prediction API.
/// The empty string stands for "no team selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(name: impl Into<String>) -> Self {
        TeamId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        TeamId(s.to_string())
    }
}

impl From<String> for TeamId {
    fn from(s: String) -> Self {
        TeamId(s)
    }
}

/// Display-ready probability as sent by the backend (e.g. "45%", "%45.0").
pub type Probability = String;

/// The two teams read from the form at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub home_team: TeamId,
    pub away_team: TeamId,
}

impl Selection {
    /// Build a selection, rejecting the same team on both sides.
    /// Two unset values count as the same team.
    pub fn new(home_team: TeamId, away_team: TeamId) -> Result<Self, FormError> {
        if home_team == away_team {
            return Err(FormError::DuplicateTeams);
        }
        Ok(Selection {
            home_team,
            away_team,
        })
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
        }
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub home_team: TeamId,
    pub away_team: TeamId,
}

/// Successful `POST /predict` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub match_result: MatchResult,
    pub score: PredictionLine,
    /// Half-time / full-time pairing
    pub htft: PredictionLine,
    /// Both teams to score
    pub btts: PredictionLine,
}

/// 1X2 probabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_win: Probability,
    pub draw: Probability,
    pub away_win: Probability,
}

/// A single predicted outcome with its probability, e.g. "2-1" at "18%".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionLine {
    pub prediction: String,
    pub probability: Probability,
}

impl fmt::Display for PredictionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.prediction, self.probability)
    }
}
