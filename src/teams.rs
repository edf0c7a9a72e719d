//! Team catalogue for the selectors.
//!
//! The prediction backend keeps one `<team>.csv` stats file per team, so the
//! file stems of a stats directory double as the list of teams it can
//! predict for.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::models::TeamId;

/// Sorted team names taken from the `*.csv` files in `dir`.
pub fn from_stats_dir(dir: &Path) -> Result<Vec<TeamId>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read stats directory {}", dir.display()))?;

    let mut teams = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            teams.push(TeamId::new(stem));
        }
    }
    teams.sort();
    Ok(teams)
}

/// Choose the selector options: an explicit `--teams` list wins, then the
/// stats directory, then whatever `--home`/`--away` name.
pub fn resolve(config: &Config) -> Result<Vec<TeamId>> {
    let teams: Vec<TeamId> = if !config.teams.is_empty() {
        config
            .teams
            .iter()
            .map(|t| TeamId::new(t.trim()))
            .collect()
    } else if let Some(dir) = &config.stats_dir {
        from_stats_dir(dir)?
    } else {
        config
            .home_team
            .iter()
            .chain(config.away_team.iter())
            .map(|t| TeamId::new(t.as_str()))
            .collect()
    };

    if teams.is_empty() {
        anyhow::bail!("No teams available: pass --teams, --stats-dir or --home/--away");
    }
    info!("{} team(s) available", teams.len());
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "match-predict-form-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_stats_dir_lists_csv_stems_sorted() {
        let dir = scratch_dir("stats");
        for name in ["Trabzonspor.csv", "Alanyaspor.csv", "notes.txt", "Konyaspor.csv"] {
            std::fs::write(dir.join(name), "Tarih,Rakip\n").unwrap();
        }
        std::fs::create_dir(dir.join("archive.csv")).unwrap();

        let teams = from_stats_dir(&dir).unwrap();
        assert_eq!(
            teams,
            ["Alanyaspor", "Konyaspor", "Trabzonspor"].map(TeamId::from).to_vec()
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_stats_dir_is_an_error() {
        assert!(from_stats_dir(Path::new("/definitely/not/here")).is_err());
    }

    #[test]
    fn test_explicit_list_wins() {
        let config = Config::try_parse_from([
            "match-predict-form",
            "--teams",
            "Sivasspor, Rizespor",
            "--home",
            "Antalyaspor",
        ])
        .unwrap();
        assert_eq!(
            resolve(&config).unwrap(),
            ["Sivasspor", "Rizespor"].map(TeamId::from).to_vec()
        );
    }

    #[test]
    fn test_falls_back_to_one_shot_pair() {
        let config =
            Config::try_parse_from(["match-predict-form", "--home", "Kayserispor", "--away", "Hatayspor"])
                .unwrap();
        assert_eq!(
            resolve(&config).unwrap(),
            ["Kayserispor", "Hatayspor"].map(TeamId::from).to_vec()
        );
    }

    #[test]
    fn test_no_teams_is_an_error() {
        let config = Config::try_parse_from(["match-predict-form"]).unwrap();
        assert!(resolve(&config).is_err());
    }
}
