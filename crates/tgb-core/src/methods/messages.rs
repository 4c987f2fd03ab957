use crate::{
    domain::Recipient,
    types::{
        ChatAction, File, InputFile, InputMedia, Message, ParseMode, ReplyMarkup, Update, User,
        UserProfilePhotos,
    },
};

api_method! {
    /// Basic information about the bot. Sent as a bare `GET`.
    GetMe("getMe") -> User {}
}

api_method! {
    /// Manual update fetch. Polling loops are up to the caller.
    GetUpdates("getUpdates") -> Vec<Update> {}
    optional {
        offset: i64,
        limit: u32,
        timeout: u32,
        allowed_updates: Vec<String>,
    }
}

api_method! {
    SendMessage("sendMessage") -> Message {
        chat_id: Recipient,
        text: String,
    }
    optional {
        parse_mode: ParseMode,
        disable_web_page_preview: bool,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    ForwardMessage("forwardMessage") -> Message {
        chat_id: Recipient,
        from_chat_id: Recipient,
        message_id: i32,
    }
    optional {
        disable_notification: bool,
    }
}

api_method! {
    SendPhoto("sendPhoto") -> Message {
        chat_id: Recipient,
        photo: InputFile,
    }
    optional {
        caption: String,
        parse_mode: ParseMode,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendAudio("sendAudio") -> Message {
        chat_id: Recipient,
        audio: InputFile,
    }
    optional {
        caption: String,
        parse_mode: ParseMode,
        duration: u32,
        performer: String,
        title: String,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendDocument("sendDocument") -> Message {
        chat_id: Recipient,
        document: InputFile,
    }
    optional {
        caption: String,
        parse_mode: ParseMode,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendVideo("sendVideo") -> Message {
        chat_id: Recipient,
        video: InputFile,
    }
    optional {
        duration: u32,
        width: u32,
        height: u32,
        caption: String,
        parse_mode: ParseMode,
        supports_streaming: bool,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendVoice("sendVoice") -> Message {
        chat_id: Recipient,
        voice: InputFile,
    }
    optional {
        caption: String,
        parse_mode: ParseMode,
        duration: u32,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    /// A rounded square video message.
    SendVideoNote("sendVideoNote") -> Message {
        chat_id: Recipient,
        video_note: InputFile,
    }
    optional {
        duration: u32,
        length: u32,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    /// An album of 2-10 photos and videos. Uploaded items are attached under
    /// generated part names.
    SendMediaGroup("sendMediaGroup") -> Vec<Message> {
        chat_id: Recipient,
        media: Vec<InputMedia>,
    }
    optional {
        disable_notification: bool,
        reply_to_message_id: i32,
    }
}

api_method! {
    SendLocation("sendLocation") -> Message {
        chat_id: Recipient,
        latitude: f64,
        longitude: f64,
    }
    optional {
        live_period: u32,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendVenue("sendVenue") -> Message {
        chat_id: Recipient,
        latitude: f64,
        longitude: f64,
        title: String,
        address: String,
    }
    optional {
        foursquare_id: String,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendContact("sendContact") -> Message {
        chat_id: Recipient,
        phone_number: String,
        first_name: String,
    }
    optional {
        last_name: String,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    SendChatAction("sendChatAction") -> bool {
        chat_id: Recipient,
        action: ChatAction,
    }
}

api_method! {
    GetUserProfilePhotos("getUserProfilePhotos") -> UserProfilePhotos {
        user_id: i64,
    }
    optional {
        offset: u32,
        limit: u32,
    }
}

api_method! {
    GetFile("getFile") -> File {
        file_id: String,
    }
}

api_method! {
    DeleteMessage("deleteMessage") -> bool {
        chat_id: Recipient,
        message_id: i32,
    }
}
