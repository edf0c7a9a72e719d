use std::sync::Arc;
use tracing::{debug, info, warn};

use super::display::{DisplaySink, ResultField, SubmitLabel};
use super::selector::TeamSelector;
use super::text::FormText;
use crate::error::FormError;
use crate::models::{PredictionResponse, Selection, TeamId};
use crate::service::PredictionService;

/// Affordance of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Submitting,
}

/// Drives the prediction workflow of one page:
/// pick two distinct teams → submit → show result.
pub struct FormController<D: DisplaySink> {
    service: Arc<dyn PredictionService>,
    display: D,
    home: TeamSelector,
    away: TeamSelector,
    state: UiState,
    text: FormText,
}

impl<D: DisplaySink> FormController<D> {
    /// Bind a controller to its display and backend. Both selectors offer
    /// the same list of teams.
    pub fn new(
        service: Arc<dyn PredictionService>,
        display: D,
        teams: &[TeamId],
        text: FormText,
    ) -> Self {
        FormController {
            service,
            display,
            home: TeamSelector::new(teams.iter().cloned()),
            away: TeamSelector::new(teams.iter().cloned()),
            state: UiState::Idle,
            text,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn home(&self) -> &TeamSelector {
        &self.home
    }

    pub fn away(&self) -> &TeamSelector {
        &self.away
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Set the home selector as a user would and fire its change handler.
    /// `None` clears the selector.
    pub fn select_home(&mut self, team: Option<TeamId>) -> Result<(), FormError> {
        pick(&mut self.home, team)?;
        self.on_home_team_change();
        Ok(())
    }

    /// Set the away selector as a user would and fire its change handler.
    pub fn select_away(&mut self, team: Option<TeamId>) -> Result<(), FormError> {
        pick(&mut self.away, team)?;
        self.on_away_team_change();
        Ok(())
    }

    pub fn on_home_team_change(&mut self) {
        debug!("Home team changed to '{}'", self.home.value_or_empty());
        exclude_from_counterpart(&self.home, &mut self.away);
    }

    pub fn on_away_team_change(&mut self) {
        debug!("Away team changed to '{}'", self.away.value_or_empty());
        exclude_from_counterpart(&self.away, &mut self.home);
    }

    /// Validate the current selection, request a prediction and render it.
    ///
    /// Validation failures and transport failures are both shown to the user
    /// through [`DisplaySink::notify`] before being returned.
    pub async fn on_submit(&mut self) -> Result<PredictionResponse, FormError> {
        let selection =
            match Selection::new(self.home.value_or_empty(), self.away.value_or_empty()) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Submit rejected: {}", e);
                    self.display.notify(self.text.duplicate_teams);
                    return Err(e);
                }
            };

        info!(
            "Requesting prediction from {}: {} vs {}",
            self.service.name(),
            selection.home_team,
            selection.away_team
        );
        self.set_state(UiState::Submitting);

        let result = self.service.predict(&selection.to_request()).await;

        let outcome = match result {
            Ok(response) => {
                self.render(&response);
                info!(
                    "Prediction shown for {} vs {}",
                    selection.home_team, selection.away_team
                );
                Ok(response)
            }
            Err(e) => {
                let detail = format!("{:#}", e);
                warn!("Prediction failed: {}", detail);
                self.display
                    .notify(&format!("{}{}", self.text.failure_prefix, detail));
                Err(FormError::Transport(detail))
            }
        };

        self.set_state(UiState::Idle);
        outcome
    }

    fn render(&mut self, response: &PredictionResponse) {
        let m = &response.match_result;
        self.display.set_text(ResultField::HomeWin, &m.home_win);
        self.display.set_text(ResultField::Draw, &m.draw);
        self.display.set_text(ResultField::AwayWin, &m.away_win);
        self.display
            .set_text(ResultField::Score, &response.score.to_string());
        self.display
            .set_text(ResultField::HalfTimeFullTime, &response.htft.to_string());
        self.display
            .set_text(ResultField::BothTeamsToScore, &response.btts.to_string());
        self.display.show_results();
    }

    fn set_state(&mut self, state: UiState) {
        self.state = state;
        match state {
            UiState::Idle => self
                .display
                .render_submit(true, SubmitLabel::Text(self.text.submit)),
            UiState::Submitting => self
                .display
                .render_submit(false, SubmitLabel::Loading(self.text.predicting)),
        }
    }
}

fn pick(selector: &mut TeamSelector, team: Option<TeamId>) -> Result<(), FormError> {
    match team.filter(|t| !t.is_empty()) {
        None => selector.clear(),
        Some(team) => {
            if !selector.is_offered(&team) {
                return Err(FormError::UnknownTeam(team));
            }
            if selector.is_disabled(&team) {
                return Err(FormError::TeamUnavailable(team));
            }
            selector.set_value(Some(team));
        }
    }
    Ok(())
}

/// Keep `changed`'s team out of `other`: drop it as a value and disable
/// exactly that option.
fn exclude_from_counterpart(changed: &TeamSelector, other: &mut TeamSelector) {
    let selected = changed.value_or_empty();
    if other.value_or_empty() == selected {
        other.clear();
    }
    other.enable_all();
    if !selected.is_empty() {
        other.disable(&selected);
    }
}
