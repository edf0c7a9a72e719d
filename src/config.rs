use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::form::FormText;

/// Match prediction form for the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "match-predict-form", version, about)]
pub struct Config {
    /// Prediction server origin; requests go to `<origin>/predict`
    #[arg(
        long,
        env = "PREDICTION_SERVER_URL",
        default_value = "http://127.0.0.1:5000"
    )]
    pub server_url: String,

    /// Home team. With --away, predicts once and exits
    #[arg(long = "home", env = "HOME_TEAM")]
    pub home_team: Option<String>,

    /// Away team. With --home, predicts once and exits
    #[arg(long = "away", env = "AWAY_TEAM")]
    pub away_team: Option<String>,

    /// Teams offered by both selectors (comma separated)
    #[arg(long, env = "TEAMS", value_delimiter = ',')]
    pub teams: Vec<String>,

    /// Directory of per-team `<team>.csv` stats files to take the team list from
    #[arg(long, env = "STATS_DIR")]
    pub stats_dir: Option<PathBuf>,

    /// Language of labels and notifications
    #[arg(long, env = "FORM_LANG", value_enum, default_value = "en")]
    pub lang: Language,

    /// Give up on a prediction request after this many seconds (default: wait indefinitely)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Tr,
}

impl Language {
    pub fn text(self) -> FormText {
        match self {
            Language::En => FormText::english(),
            Language::Tr => FormText::turkish(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.server_url)
            .map_err(|e| anyhow::anyhow!("server_url '{}' is invalid: {}", self.server_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("server_url must use http or https, got '{}'", url.scheme());
        }
        if self.request_timeout_secs == Some(0) {
            anyhow::bail!("request_timeout_secs must be positive");
        }
        if let (Some(home), Some(away)) = (&self.home_team, &self.away_team) {
            if home == away {
                anyhow::bail!("home and away team must be different (both are '{}')", home);
            }
        }
        if self.teams.iter().any(|t| t.trim().is_empty()) {
            anyhow::bail!("teams list contains an empty entry");
        }
        if let Some(dir) = &self.stats_dir {
            if !dir.is_dir() {
                anyhow::bail!("stats_dir '{}' is not a directory", dir.display());
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Both teams given on the command line: predict once and exit.
    pub fn one_shot(&self) -> Option<(&str, &str)> {
        match (&self.home_team, &self.away_team) {
            (Some(home), Some(away)) => Some((home.as_str(), away.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["match-predict-form"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = parse(&[]);
        config.validate().unwrap();
        assert_eq!(config.server_url, "http://127.0.0.1:5000");
        assert_eq!(config.lang, Language::En);
        assert!(config.request_timeout().is_none());
        assert!(config.one_shot().is_none());
    }

    #[test]
    fn test_teams_split_on_commas() {
        let config = parse(&["--teams", "Galatasaray,Fenerbahçe,Beşiktaş"]);
        assert_eq!(config.teams, vec!["Galatasaray", "Fenerbahçe", "Beşiktaş"]);
    }

    #[test]
    fn test_one_shot_needs_both_teams() {
        let config = parse(&["--home", "Göztepe", "--away", "Samsunspor"]);
        assert_eq!(config.one_shot(), Some(("Göztepe", "Samsunspor")));
        assert!(parse(&["--home", "Göztepe"]).one_shot().is_none());
    }

    #[test]
    fn test_rejects_same_team_twice() {
        let config = parse(&["--home", "Kasımpaşa", "--away", "Kasımpaşa"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_url_and_zero_timeout() {
        assert!(parse(&["--server-url", "ftp://example.com"]).validate().is_err());
        assert!(parse(&["--server-url", "nope"]).validate().is_err());
        assert!(parse(&["--request-timeout-secs", "0"]).validate().is_err());
    }

    #[test]
    fn test_turkish_language() {
        let config = parse(&["--lang", "tr"]);
        assert_eq!(config.lang.text().submit, "Tahmin Yap");
    }
}
