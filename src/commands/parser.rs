//! Argument extraction for the `/stats` and `/verify` commands.
//!
//! The two commands recognize the player tag differently:
//! - `/stats` takes the first hashtag entity annotated by Telegram, so a tag the
//!   client didn't mark as a hashtag is not found
//! - `/verify` reads the raw text: `/verify #playerTag apiToken`

use log::debug;

use crate::{
    commands::{CommandMessage, SpanKind},
    error::CommandError,
    utils::utf16_substring,
};

const STATS_USAGE: &str = "Enter the player's tag after the command, starting with the #";
const VERIFY_USAGE: &str = "Enter the player's tag and the verification code after the command";

/// Extracts the player tag from the first hashtag entity of the message.
///
/// # Errors
///
/// Returns [`CommandError::Usage`] if the message has no text, no hashtag entity,
/// or if the entity doesn't fit in the text.
///
/// # Examples
///
/// ```no_run
/// let message = CommandMessage {
///     text: Some("/stats #2PP".to_owned()),
///     spans: vec![TextSpan { kind: SpanKind::Hashtag, offset: 7, length: 4 }],
///     ..Default::default()
/// };
/// assert_eq!(parse_tag_from_message(&message).unwrap(), "#2PP");
/// ```
pub fn parse_tag_from_message(message: &CommandMessage) -> Result<String, CommandError> {
    let usage = || CommandError::Usage(STATS_USAGE.to_owned());

    let text = message.text.as_deref().ok_or_else(usage)?;
    let span = message
        .spans
        .iter()
        .find(|span| span.kind == SpanKind::Hashtag)
        .ok_or_else(usage)?;

    let tag = utf16_substring(text, span.offset, span.length).ok_or_else(usage)?;
    debug!("parsed tag {} from message {}", tag, message.message_id);

    Ok(tag)
}

/// Extracts the player tag and the verification code from the command text.
///
/// The text must read `/command #tag code`, where the tag is made of ASCII
/// letters, digits and underscores. The code is the run of such characters at
/// the start of the third token, so `xyz-789` reads as `xyz`. Extra whitespace
/// is ignored.
///
/// # Errors
///
/// Returns [`CommandError::Usage`] if the tag or the code is missing or malformed.
///
/// # Examples
///
/// ```no_run
/// let (tag, code) = parse_tag_and_code("/verify #ABC123 xyz789").unwrap();
/// assert_eq!(tag, "#ABC123");
/// assert_eq!(code, "xyz789");
/// ```
pub fn parse_tag_and_code(text: &str) -> Result<(String, String), CommandError> {
    let usage = || CommandError::Usage(VERIFY_USAGE.to_owned());

    let mut tokens = text.split_whitespace();

    match tokens.next() {
        Some(command) if command.starts_with('/') => {}
        _ => return Err(usage()),
    }

    let tag = tokens
        .next()
        .filter(|tag| tag.strip_prefix('#').is_some_and(is_word))
        .ok_or_else(usage)?;
    let code = tokens
        .next()
        .map(word_prefix)
        .filter(|code| !code.is_empty())
        .ok_or_else(usage)?;

    debug!("parsed tag {} and a verification code", tag);

    Ok((tag.to_owned(), code.to_owned()))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_word_char)
}

fn word_prefix(token: &str) -> &str {
    let end = token.find(|c| !is_word_char(c)).unwrap_or(token.len());
    &token[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TextSpan;

    fn create_message(text: Option<&str>, spans: Vec<TextSpan>) -> CommandMessage {
        CommandMessage {
            chat_id: 1,
            message_id: 10,
            text: text.map(str::to_owned),
            spans,
        }
    }

    fn span(kind: SpanKind, offset: usize, length: usize) -> TextSpan {
        TextSpan {
            kind,
            offset,
            length,
        }
    }

    #[test]
    fn test_parse_tag_from_message() {
        let message = create_message(
            Some("/stats #2PP"),
            vec![
                span(SpanKind::BotCommand, 0, 6),
                span(SpanKind::Hashtag, 7, 4),
            ],
        );

        assert_eq!(parse_tag_from_message(&message).unwrap(), "#2PP");
    }

    #[test]
    fn test_parse_tag_from_message_takes_first_hashtag() {
        let message = create_message(
            Some("/stats #2PP #999"),
            vec![
                span(SpanKind::BotCommand, 0, 6),
                span(SpanKind::Hashtag, 7, 4),
                span(SpanKind::Hashtag, 12, 4),
            ],
        );

        assert_eq!(parse_tag_from_message(&message).unwrap(), "#2PP");
    }

    #[test]
    fn test_parse_tag_from_message_with_emoji() {
        let message = create_message(
            Some("/stats 🏆 #2PP"),
            vec![span(SpanKind::Hashtag, 10, 4)],
        );

        assert_eq!(parse_tag_from_message(&message).unwrap(), "#2PP");
    }

    #[test]
    fn test_parse_tag_from_message_without_hashtag() {
        // The client didn't annotate the tag: plain text isn't scanned
        let message = create_message(
            Some("/stats #2PP"),
            vec![span(SpanKind::BotCommand, 0, 6)],
        );

        let result = parse_tag_from_message(&message);
        assert!(matches!(result, Err(CommandError::Usage(msg)) if msg == STATS_USAGE));
    }

    #[test]
    fn test_parse_tag_from_message_without_spans() {
        let message = create_message(Some("/stats"), vec![]);
        assert!(matches!(
            parse_tag_from_message(&message),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_from_message_without_text() {
        let message = create_message(None, vec![span(SpanKind::Hashtag, 7, 4)]);
        assert!(matches!(
            parse_tag_from_message(&message),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_from_message_span_out_of_text() {
        let message = create_message(Some("/stats #2"), vec![span(SpanKind::Hashtag, 7, 4)]);
        assert!(matches!(
            parse_tag_from_message(&message),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_and_code() {
        let (tag, code) = parse_tag_and_code("/verify #ABC123 xyz789").unwrap();
        assert_eq!(tag, "#ABC123");
        assert_eq!(code, "xyz789");
    }

    #[test]
    fn test_parse_tag_and_code_extra_whitespace() {
        let (tag, code) = parse_tag_and_code("  /verify   #ABC123 \t xyz789  \n").unwrap();
        assert_eq!(tag, "#ABC123");
        assert_eq!(code, "xyz789");
    }

    #[test]
    fn test_parse_tag_and_code_with_bot_name() {
        let (tag, code) = parse_tag_and_code("/verify@coc_helper_bot #ABC123 xyz789").unwrap();
        assert_eq!(tag, "#ABC123");
        assert_eq!(code, "xyz789");
    }

    #[test]
    fn test_parse_tag_and_code_missing_code() {
        let result = parse_tag_and_code("/verify #ABC123");
        assert!(matches!(result, Err(CommandError::Usage(msg)) if msg == VERIFY_USAGE));
    }

    #[test]
    fn test_parse_tag_and_code_missing_tag() {
        assert!(matches!(
            parse_tag_and_code("/verify"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_and_code_tag_without_hash() {
        assert!(matches!(
            parse_tag_and_code("/verify ABC123 xyz789"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_and_code_empty_tag() {
        assert!(matches!(
            parse_tag_and_code("/verify # xyz789"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_and_code_malformed_code() {
        assert!(matches!(
            parse_tag_and_code("/verify #ABC123 <b>"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_and_code_code_stops_at_punctuation() {
        let (tag, code) = parse_tag_and_code("/verify #ABC123 xyz-789").unwrap();
        assert_eq!(tag, "#ABC123");
        assert_eq!(code, "xyz");
    }

    #[test]
    fn test_parse_tag_and_code_rejects_non_ascii() {
        assert!(matches!(
            parse_tag_and_code("/verify #ÀBC xyz789"),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            parse_tag_and_code("/verify #ABC123 é"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_tag_and_code_not_a_command() {
        assert!(matches!(
            parse_tag_and_code("#ABC123 xyz789"),
            Err(CommandError::Usage(_))
        ));
    }
}
