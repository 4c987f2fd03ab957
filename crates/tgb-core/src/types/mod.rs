//! Data-transfer types exchanged with the Bot API.
//!
//! Only the fields the client itself relies on are typed; everything else a
//! response carries is kept in `extra` so nothing is silently dropped.

pub mod chat;
pub mod inline;
pub mod input;
pub mod markup;
pub mod message;
pub mod payments;
pub mod stickers;

pub use chat::{Chat, ChatMember, File, PhotoSize, User, UserProfilePhotos};
pub use inline::InlineQueryResult;
pub use input::{InputFile, InputMedia, InputMediaKind};
pub use markup::{
    ChatAction, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    ParseMode, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
};
pub use message::{EditResult, GameHighScore, Message, Update};
pub use payments::{LabeledPrice, ShippingOption};
pub use stickers::{MaskPosition, Sticker, StickerSet};
