// src/adapter/command.rs
// Line-oriented user controls

use std::str::FromStr;

use crate::application::usecase::SessionState;
use crate::domain::errors::CommandError;
use crate::domain::model::Pair;

pub const HELP: &str = "\
Commands:
  refresh (or empty line)  re-run the dashboard
  pair <BTC|ETH>           select the cryptocurrency
  threshold <percent>      set the arbitrage alert threshold
  headline <text>          set the headline to score (empty clears it)
  auto <on|off>            toggle auto-refresh
  help                     show this message
  quit                     exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    SelectPair(Pair),
    SetThreshold(f64),
    SetHeadline(String),
    AutoRefresh(bool),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" | "r" | "refresh" => Ok(Command::Refresh),
            "pair" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("pair".to_string()));
                }
                Ok(Command::SelectPair(Pair::from_selector(rest)))
            }
            "threshold" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("threshold".to_string()));
                }
                let value: f64 = rest
                    .parse()
                    .map_err(|_| CommandError::InvalidThreshold(rest.to_string()))?;
                if !value.is_finite() || value < 0.0 {
                    return Err(CommandError::InvalidThreshold(rest.to_string()));
                }
                Ok(Command::SetThreshold(value))
            }
            "headline" => Ok(Command::SetHeadline(rest.to_string())),
            "auto" => match rest.to_lowercase().as_str() {
                "on" | "true" | "1" => Ok(Command::AutoRefresh(true)),
                "off" | "false" | "0" => Ok(Command::AutoRefresh(false)),
                "" => Err(CommandError::MissingArgument("auto".to_string())),
                other => Err(CommandError::InvalidToggle(other.to_string())),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl Command {
    /// Apply to the session. Returns true when the dashboard should refresh,
    /// as any control change re-runs the cycle.
    pub fn apply(self, session: &mut SessionState) -> bool {
        match self {
            Command::Refresh => true,
            Command::SelectPair(pair) => {
                session.pair = pair;
                true
            }
            Command::SetThreshold(threshold) => {
                session.threshold_percent = threshold;
                true
            }
            Command::SetHeadline(headline) => {
                session.headline = headline;
                true
            }
            Command::AutoRefresh(enabled) => {
                session.auto_refresh = enabled;
                true
            }
            Command::Help | Command::Quit => false,
        }
    }
}
