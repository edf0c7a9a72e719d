use crate::models::TeamId;

/// One entry in a team selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOption {
    pub team: TeamId,
    pub disabled: bool,
}

/// Model of a single team `<select>` control: the offered teams with their
/// enabled state, plus the current value.
#[derive(Debug, Clone, Default)]
pub struct TeamSelector {
    options: Vec<TeamOption>,
    value: Option<TeamId>,
}

impl TeamSelector {
    pub fn new<I>(teams: I) -> Self
    where
        I: IntoIterator<Item = TeamId>,
    {
        let mut options: Vec<TeamOption> = Vec::new();
        for team in teams {
            if options.iter().any(|o| o.team == team) {
                continue;
            }
            options.push(TeamOption {
                team,
                disabled: false,
            });
        }
        TeamSelector {
            options,
            value: None,
        }
    }

    pub fn options(&self) -> &[TeamOption] {
        &self.options
    }

    pub fn value(&self) -> Option<&TeamId> {
        self.value.as_ref()
    }

    /// Current value, with "unset" mapped to the empty team id.
    pub fn value_or_empty(&self) -> TeamId {
        self.value.clone().unwrap_or_default()
    }

    pub fn set_value(&mut self, value: Option<TeamId>) {
        self.value = value.filter(|t| !t.is_empty());
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn is_offered(&self, team: &TeamId) -> bool {
        self.options.iter().any(|o| &o.team == team)
    }

    pub fn is_disabled(&self, team: &TeamId) -> bool {
        self.options
            .iter()
            .any(|o| &o.team == team && o.disabled)
    }

    pub fn enable_all(&mut self) {
        for option in &mut self.options {
            option.disabled = false;
        }
    }

    pub fn disable(&mut self, team: &TeamId) {
        for option in self.options.iter_mut().filter(|o| &o.team == team) {
            option.disabled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> TeamSelector {
        TeamSelector::new(["Arsenal", "Chelsea", "Everton"].map(TeamId::from))
    }

    #[test]
    fn test_new_selector_is_unset_and_enabled() {
        let s = selector();
        assert!(s.value().is_none());
        assert_eq!(s.value_or_empty(), TeamId::default());
        assert!(s.options().iter().all(|o| !o.disabled));
    }

    #[test]
    fn test_duplicate_teams_collapsed() {
        let s = TeamSelector::new(["Arsenal", "Arsenal", "Chelsea"].map(TeamId::from));
        assert_eq!(s.options().len(), 2);
    }

    #[test]
    fn test_disable_then_enable_all() {
        let mut s = selector();
        s.disable(&"Chelsea".into());
        assert!(s.is_disabled(&"Chelsea".into()));
        assert!(!s.is_disabled(&"Arsenal".into()));
        s.enable_all();
        assert!(!s.is_disabled(&"Chelsea".into()));
    }

    #[test]
    fn test_empty_value_means_unset() {
        let mut s = selector();
        s.set_value(Some(TeamId::default()));
        assert!(s.value().is_none());
    }
}
