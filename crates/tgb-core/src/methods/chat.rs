use super::require_len;
use crate::{
    domain::Recipient,
    types::{Chat, ChatMember, InputFile},
};

api_method! {
    KickChatMember("kickChatMember") -> bool {
        chat_id: Recipient,
        user_id: i64,
    }
    optional {
        until_date: i64,
    }
}

api_method! {
    UnbanChatMember("unbanChatMember") -> bool {
        chat_id: Recipient,
        user_id: i64,
    }
}

api_method! {
    RestrictChatMember("restrictChatMember") -> bool {
        chat_id: Recipient,
        user_id: i64,
    }
    optional {
        until_date: i64,
        can_send_messages: bool,
        can_send_media_messages: bool,
        can_send_other_messages: bool,
        can_add_web_page_previews: bool,
    }
}

api_method! {
    PromoteChatMember("promoteChatMember") -> bool {
        chat_id: Recipient,
        user_id: i64,
    }
    optional {
        can_change_info: bool,
        can_post_messages: bool,
        can_edit_messages: bool,
        can_delete_messages: bool,
        can_invite_users: bool,
        can_restrict_members: bool,
        can_pin_messages: bool,
        can_promote_members: bool,
    }
}

api_method! {
    ExportChatInviteLink("exportChatInviteLink") -> String {
        chat_id: Recipient,
    }
}

api_method! {
    SetChatPhoto("setChatPhoto") -> bool {
        chat_id: Recipient,
        photo: InputFile,
    }
}

api_method! {
    DeleteChatPhoto("deleteChatPhoto") -> bool {
        chat_id: Recipient,
    }
}

api_method! {
    SetChatTitle("setChatTitle") -> bool {
        chat_id: Recipient,
        title: String,
    }
    check(&m) {
        require_len("title", &m.title, 1, 255)
    }
}

api_method! {
    SetChatDescription("setChatDescription") -> bool {
        chat_id: Recipient,
        description: String,
    }
    check(&m) {
        require_len("description", &m.description, 0, 255)
    }
}

api_method! {
    PinChatMessage("pinChatMessage") -> bool {
        chat_id: Recipient,
        message_id: i32,
    }
    optional {
        disable_notification: bool,
    }
}

api_method! {
    UnpinChatMessage("unpinChatMessage") -> bool {
        chat_id: Recipient,
    }
}

api_method! {
    LeaveChat("leaveChat") -> bool {
        chat_id: Recipient,
    }
}

api_method! {
    GetChat("getChat") -> Chat {
        chat_id: Recipient,
    }
}

api_method! {
    GetChatAdministrators("getChatAdministrators") -> Vec<ChatMember> {
        chat_id: Recipient,
    }
}

api_method! {
    GetChatMembersCount("getChatMembersCount") -> i32 {
        chat_id: Recipient,
    }
}

api_method! {
    GetChatMember("getChatMember") -> ChatMember {
        chat_id: Recipient,
        user_id: i64,
    }
}

api_method! {
    SetChatStickerSet("setChatStickerSet") -> bool {
        chat_id: Recipient,
        sticker_set_name: String,
    }
}

api_method! {
    DeleteChatStickerSet("deleteChatStickerSet") -> bool {
        chat_id: Recipient,
    }
}
