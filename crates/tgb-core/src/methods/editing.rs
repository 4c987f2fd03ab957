use super::require_target;
use crate::{
    domain::Recipient,
    types::{EditResult, InlineKeyboardMarkup, InputMedia, ParseMode},
};

api_method! {
    EditMessageText("editMessageText") -> EditResult {
        text: String,
    }
    optional {
        chat_id: Recipient,
        message_id: i32,
        inline_message_id: String,
        parse_mode: ParseMode,
        disable_web_page_preview: bool,
        reply_markup: InlineKeyboardMarkup,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}

api_method! {
    EditMessageCaption("editMessageCaption") -> EditResult {}
    optional {
        chat_id: Recipient,
        message_id: i32,
        inline_message_id: String,
        caption: String,
        parse_mode: ParseMode,
        reply_markup: InlineKeyboardMarkup,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}

api_method! {
    /// Replaces the media of a message; an uploaded replacement is attached
    /// the same way as a media group item.
    EditMessageMedia("editMessageMedia") -> EditResult {
        media: InputMedia,
    }
    optional {
        chat_id: Recipient,
        message_id: i32,
        inline_message_id: String,
        reply_markup: InlineKeyboardMarkup,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}

api_method! {
    EditMessageReplyMarkup("editMessageReplyMarkup") -> EditResult {}
    optional {
        chat_id: Recipient,
        message_id: i32,
        inline_message_id: String,
        reply_markup: InlineKeyboardMarkup,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}

api_method! {
    EditMessageLiveLocation("editMessageLiveLocation") -> EditResult {
        latitude: f64,
        longitude: f64,
    }
    optional {
        chat_id: Recipient,
        message_id: i32,
        inline_message_id: String,
        reply_markup: InlineKeyboardMarkup,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}

api_method! {
    StopMessageLiveLocation("stopMessageLiveLocation") -> EditResult {}
    optional {
        chat_id: Recipient,
        message_id: i32,
        inline_message_id: String,
        reply_markup: InlineKeyboardMarkup,
    }
    check(&m) {
        require_target(m.chat_id.is_some(), m.message_id, m.inline_message_id.as_deref())
    }
}
