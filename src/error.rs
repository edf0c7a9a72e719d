//! Error types for the prediction form

use thiserror::Error;

use crate::models::TeamId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Same team (or nothing at all) selected on both sides.
    #[error("home and away team must be different")]
    DuplicateTeams,

    /// Network failure, non-success status or undecodable response body.
    #[error("prediction request failed: {0}")]
    Transport(String),

    #[error("team '{0}' is not offered by this selector")]
    UnknownTeam(TeamId),

    /// The option exists but is disabled because the other side holds it.
    #[error("team '{0}' is already selected on the other side")]
    TeamUnavailable(TeamId),
}
