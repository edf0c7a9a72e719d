use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::form::{DisplaySink, FormController};
use crate::models::TeamId;

const HELP: &str = "\
commands:
  home <team>        select the home team
  away <team>        select the away team
  clear home|away    clear a selection
  teams              list teams (x = unavailable)
  predict            submit the form
  help               show this help
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home(TeamId),
    Away(TeamId),
    ClearHome,
    ClearAway,
    Teams,
    Predict,
    Help,
    Quit,
}

/// Parse one input line. Team names run to the end of the line and may
/// contain spaces.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match (word.to_lowercase().as_str(), rest) {
        ("home", "") | ("away", "") => return Err(format!("usage: {} <team>", word)),
        ("home", team) => Command::Home(TeamId::new(team)),
        ("away", team) => Command::Away(TeamId::new(team)),
        ("clear", "home") => Command::ClearHome,
        ("clear", "away") => Command::ClearAway,
        ("clear", _) => return Err("usage: clear home|away".to_string()),
        ("teams", "") => Command::Teams,
        ("predict", "") => Command::Predict,
        ("help", "") | ("?", "") => Command::Help,
        ("quit", "") | ("exit", "") => Command::Quit,
        _ => return Err(format!("unknown command '{}' (try 'help')", line)),
    };
    Ok(Some(cmd))
}

/// Interactive front-end: feeds stdin commands to a [`FormController`].
pub struct Session<D: DisplaySink, W: Write> {
    form: FormController<D>,
    out: W,
}

impl<D: DisplaySink, W: Write> Session<D, W> {
    pub fn new(form: FormController<D>, out: W) -> Self {
        Session { form, out }
    }

    pub fn form(&self) -> &FormController<D> {
        &self.form
    }

    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{}", HELP)?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let cmd = match parse_command(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(msg) => {
                    writeln!(self.out, "{}", msg)?;
                    continue;
                }
            };
            if cmd == Command::Quit {
                break;
            }
            self.execute(cmd).await?;
        }
        info!("Session ended");
        Ok(())
    }

    async fn execute(&mut self, cmd: Command) -> Result<()> {
        let selected = match cmd {
            Command::Home(team) => self.form.select_home(Some(team)),
            Command::Away(team) => self.form.select_away(Some(team)),
            Command::ClearHome => self.form.select_home(None),
            Command::ClearAway => self.form.select_away(None),
            Command::Teams => return self.list_teams(),
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(());
            }
            Command::Predict => {
                // Failures were already shown through the display.
                let _ = self.form.on_submit().await;
                debug!("Form state after submit: {:?}", self.form.state());
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };
        match selected {
            Ok(()) => self.write_selection(),
            Err(e) => writeln!(self.out, "! {}", e).map_err(Into::into),
        }
    }

    fn write_selection(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "home: {}  away: {}",
            self.form.home().value().map_or("-", TeamId::as_str),
            self.form.away().value().map_or("-", TeamId::as_str),
        )?;
        Ok(())
    }

    fn list_teams(&mut self) -> Result<()> {
        writeln!(self.out, "{:<24} home away", "team")?;
        for option in self.form.home().options() {
            let away_disabled = self.form.away().is_disabled(&option.team);
            writeln!(
                self.out,
                "{:<24} {:<4} {}",
                option.team.as_str(),
                if option.disabled { "x" } else { "" },
                if away_disabled { "x" } else { "" },
            )?;
        }
        Ok(())
    }
}
