use super::require_upload;
use crate::{
    domain::Recipient,
    types::{File, InputFile, MaskPosition, Message, ReplyMarkup, StickerSet},
};

api_method! {
    SendSticker("sendSticker") -> Message {
        chat_id: Recipient,
        sticker: InputFile,
    }
    optional {
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: ReplyMarkup,
    }
}

api_method! {
    GetStickerSet("getStickerSet") -> StickerSet {
        name: String,
    }
}

api_method! {
    /// Uploads a PNG once so it can be reused by file id in the set methods.
    UploadStickerFile("uploadStickerFile") -> File {
        user_id: i64,
        png_sticker: InputFile,
    }
    check(&m) {
        require_upload("png_sticker", &m.png_sticker)
    }
}

api_method! {
    CreateNewStickerSet("createNewStickerSet") -> bool {
        user_id: i64,
        name: String,
        title: String,
        png_sticker: InputFile,
        emojis: String,
    }
    optional {
        contains_masks: bool,
        mask_position: MaskPosition,
    }
}

api_method! {
    AddStickerToSet("addStickerToSet") -> bool {
        user_id: i64,
        name: String,
        png_sticker: InputFile,
        emojis: String,
    }
    optional {
        mask_position: MaskPosition,
    }
}

api_method! {
    SetStickerPositionInSet("setStickerPositionInSet") -> bool {
        sticker: String,
        position: u32,
    }
}

api_method! {
    DeleteStickerFromSet("deleteStickerFromSet") -> bool {
        sticker: String,
    }
}
