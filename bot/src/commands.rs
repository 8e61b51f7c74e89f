//! Bot text-command parsing
//!
//! Turns incoming message text into a [`Command`]. Slash commands may carry
//! a `@botname` suffix (group chats); bare text is treated as a birth date.

use chrono::NaiveDate;
use lifeweeks_core::{parse_birth_date, DateParseError};
use thiserror::Error;

/// Actions a user can trigger via message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greeting and usage hint.
    Start,
    /// Full usage help.
    Help,
    /// Compact poster with a caption.
    Poster(NaiveDate),
    /// 1080x1920 story poster, no caption.
    Story(NaiveDate),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("/story needs a birth date, e.g. /story 02.03.2000")]
    MissingDate,

    #[error(transparent)]
    Date(#[from] DateParseError),
}

/// Parse a message text into a command.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = strip_mention(parts[0]).to_lowercase();

    match command.as_str() {
        "/start" => Ok(Command::Start),
        "/help" => Ok(Command::Help),
        "/story" => {
            let date_text = parts.get(1).ok_or(CommandError::MissingDate)?;
            Ok(Command::Story(parse_birth_date(date_text)?))
        }
        other if other.starts_with('/') => Err(CommandError::UnknownCommand(other.to_string())),
        // Anything else is a birth-date attempt
        _ => Ok(Command::Poster(parse_birth_date(input)?)),
    }
}

/// Drop a trailing `@botname` from a slash command.
fn strip_mention(token: &str) -> &str {
    if token.starts_with('/') {
        token.split('@').next().unwrap_or(token)
    } else {
        token
    }
}

/// Usage help shown for /help and unrecognized input.
pub fn help_text() -> String {
    "Send me your birth date and I will draw your life in weeks \u{1F4C6}\n\n\
     Accepted formats: 02.03.2000 or 2000-03-02\n\n\
     Commands:\n\
     /story <date> - portrait poster sized for stories\n\
     /help - this message"
        .to_string()
}
