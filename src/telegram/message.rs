//! Conversion of Telegram messages into command messages.

use teloxide::types::{Message, MessageEntityKind};

use crate::commands::{CommandMessage, SpanKind, TextSpan};

impl From<&Message> for CommandMessage {
    fn from(message: &Message) -> Self {
        let spans = message
            .entities()
            .unwrap_or_default()
            .iter()
            .map(|entity| TextSpan {
                kind: match entity.kind {
                    MessageEntityKind::Hashtag => SpanKind::Hashtag,
                    MessageEntityKind::BotCommand => SpanKind::BotCommand,
                    _ => SpanKind::Other,
                },
                offset: entity.offset,
                length: entity.length,
            })
            .collect();

        CommandMessage {
            chat_id: message.chat.id.0,
            message_id: message.id.0,
            text: message.text().map(str::to_owned),
            spans,
        }
    }
}
