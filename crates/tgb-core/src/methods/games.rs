use super::require_target;
use crate::types::{EditResult, GameHighScore, InlineKeyboardMarkup, Message};

api_method! {
    SendGame("sendGame") -> Message {
        chat_id: i64,
        game_short_name: String,
    }
    optional {
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: InlineKeyboardMarkup,
    }
}

api_method! {
    SetGameScore("setGameScore") -> EditResult {
        user_id: i64,
        score: i64,
    }
    optional {
        force: bool,
        disable_edit_message: bool,
        chat_id: i64,
        message_id: i32,
        inline_message_id: String,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}

api_method! {
    GetGameHighScores("getGameHighScores") -> Vec<GameHighScore> {
        user_id: i64,
    }
    optional {
        chat_id: i64,
        message_id: i32,
        inline_message_id: String,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}
