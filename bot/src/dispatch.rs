//! Update dispatch
//!
//! `build_reply` is the pure half: message text in, [`Reply`] out. Bad user
//! input (unparsable dates, future birth dates, implausible ages) becomes
//! friendly reply text; only real rendering or transport failures surface as
//! errors. `handle_update` sends the reply through the [`TelegramApi`] port.

use chrono::NaiveDate;

use lifeweeks_core::{render_life_poster, AgeError, RenderError, RenderStyle, ValidationPolicy};

use crate::commands::{help_text, parse_command, Command, CommandError};
use crate::error::BotError;
use crate::telegram::{TelegramApi, Update};

/// What the bot sends back for one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Photo { png: Vec<u8>, caption: Option<String> },
}

const GREETING: &str = "Hi \u{1F44B}\n\n\
    Send me your birth date (02.03.2000 or 2000-03-02) and I will reply with \
    a poster of your life in weeks: one cell per week, 90 years of rows.\n\n\
    Try /help for all commands.";

/// Decide the reply for one message text. Pure: no I/O.
pub fn build_reply(
    text: &str,
    today: NaiveDate,
    policy: ValidationPolicy,
) -> Result<Reply, RenderError> {
    match parse_command(text) {
        Ok(Command::Start) => Ok(Reply::Text(GREETING.to_string())),
        Ok(Command::Help) => Ok(Reply::Text(help_text())),
        Ok(Command::Poster(birth)) => {
            poster_reply(birth, today, &RenderStyle::compact(), policy, true)
        }
        Ok(Command::Story(birth)) => {
            poster_reply(birth, today, &RenderStyle::story(), policy, false)
        }
        Err(e) => Ok(Reply::Text(rejection_text(e))),
    }
}

fn poster_reply(
    birth: NaiveDate,
    today: NaiveDate,
    style: &RenderStyle,
    policy: ValidationPolicy,
    with_caption: bool,
) -> Result<Reply, RenderError> {
    match render_life_poster(birth, today, style, policy) {
        Ok(poster) => Ok(Reply::Photo {
            png: poster.png,
            caption: with_caption.then_some(poster.caption),
        }),
        Err(RenderError::Age(age)) => Ok(Reply::Text(age_text(age))),
        Err(e) => Err(e),
    }
}

fn rejection_text(err: CommandError) -> String {
    match err {
        CommandError::Date(_) => {
            "I couldn't read that as a date \u{1F615}\n\
             Send it as 02.03.2000 or 2000-03-02."
                .to_string()
        }
        CommandError::MissingDate => err.to_string(),
        CommandError::Empty | CommandError::UnknownCommand(_) => help_text(),
    }
}

fn age_text(err: AgeError) -> String {
    match err {
        AgeError::BirthInFuture { .. } => {
            "That birth date is in the future - nothing lived yet \u{1F52E}".to_string()
        }
        AgeError::ImplausibleAge { years, max } => format!(
            "{years} years would be quite a record - I only believe ages up to {max} \u{1F9D3}"
        ),
    }
}

/// Handle one incoming update end to end.
pub async fn handle_update(
    api: &impl TelegramApi,
    update: Update,
    today: NaiveDate,
    policy: ValidationPolicy,
) -> Result<(), BotError> {
    let Some(message) = update.message else {
        return Ok(());
    };
    let Some(text) = message.text.as_deref() else {
        // Stickers, photos, joins: nothing to reply to
        return Ok(());
    };

    tracing::debug!(chat_id = message.chat.id, text, "handling message");

    match build_reply(text, today, policy)? {
        Reply::Text(reply) => api.send_message(message.chat.id, &reply).await?,
        Reply::Photo { png, caption } => {
            api.send_photo(message.chat.id, png, caption.as_deref())
                .await?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{text_update, update_without_message, update_without_text, MockTelegramApi, Sent};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
    }

    #[test]
    fn date_text_yields_a_captioned_photo() {
        let reply = build_reply("02.03.2000", today(), ValidationPolicy::Strict).unwrap();
        match reply {
            Reply::Photo { png, caption } => {
                assert!(!png.is_empty());
                assert!(caption.unwrap().contains("Weeks lived: 1252"));
            }
            other => panic!("expected photo, got {other:?}"),
        }
    }

    #[test]
    fn story_photo_has_no_caption() {
        let reply = build_reply("/story 02.03.2000", today(), ValidationPolicy::Strict).unwrap();
        assert!(matches!(reply, Reply::Photo { caption: None, .. }));
    }

    #[test]
    fn start_and_help_reply_with_text() {
        assert!(matches!(
            build_reply("/start", today(), ValidationPolicy::Strict),
            Ok(Reply::Text(t)) if t.contains("birth date")
        ));
        assert!(matches!(
            build_reply("/help", today(), ValidationPolicy::Strict),
            Ok(Reply::Text(t)) if t.contains("/story")
        ));
    }

    #[test]
    fn unreadable_dates_get_a_hint_not_an_error() {
        let reply = build_reply("not-a-date", today(), ValidationPolicy::Strict).unwrap();
        assert!(matches!(reply, Reply::Text(t) if t.contains("couldn't read")));
    }

    #[test]
    fn implausible_age_is_reported_under_strict() {
        let reply = build_reply("01.01.1900", today(), ValidationPolicy::Strict).unwrap();
        assert!(matches!(reply, Reply::Text(t) if t.contains("record")));
    }

    #[test]
    fn implausible_age_renders_a_full_grid_under_clamp() {
        let reply = build_reply("01.01.1900", today(), ValidationPolicy::Clamp).unwrap();
        match reply {
            Reply::Photo { caption, .. } => {
                assert!(caption.unwrap().contains("Weeks remaining: 0"))
            }
            other => panic!("expected photo, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn handle_update_sends_a_photo_for_a_date() {
        let api = MockTelegramApi::new();
        let update = text_update(1001, "02.03.2000");
        handle_update(&api, update, today(), ValidationPolicy::Strict)
            .await
            .unwrap();

        let sent = api.sent();
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            Sent::Photo { chat_id, caption, .. } => {
                assert_eq!(*chat_id, 1001);
                assert!(caption.as_deref().unwrap().contains("1252"));
            }
            other => panic!("expected photo, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn handle_update_sends_text_for_commands() {
        let api = MockTelegramApi::new();
        handle_update(&api, text_update(7, "/start"), today(), ValidationPolicy::Strict)
            .await
            .unwrap();

        let sent = api.sent();
        assert!(matches!(&sent[0], Sent::Message { chat_id: 7, .. }));
    }

    #[tokio::test]
    async fn updates_without_text_are_ignored() {
        let api = MockTelegramApi::new();
        handle_update(&api, update_without_message(), today(), ValidationPolicy::Strict)
            .await
            .unwrap();
        handle_update(&api, update_without_text(9), today(), ValidationPolicy::Strict)
            .await
            .unwrap();
        assert!(api.sent().is_empty());
    }
}
