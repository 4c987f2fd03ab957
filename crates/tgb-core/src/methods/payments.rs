use crate::types::{InlineKeyboardMarkup, LabeledPrice, Message, ShippingOption};

api_method! {
    SendInvoice("sendInvoice") -> Message {
        chat_id: i64,
        title: String,
        description: String,
        payload: String,
        provider_token: String,
        start_parameter: String,
        currency: String,
        prices: Vec<LabeledPrice>,
    }
    optional {
        provider_data: String,
        photo_url: String,
        photo_size: u32,
        photo_width: u32,
        photo_height: u32,
        need_name: bool,
        need_phone_number: bool,
        need_email: bool,
        need_shipping_address: bool,
        send_phone_number_to_provider: bool,
        send_email_to_provider: bool,
        is_flexible: bool,
        disable_notification: bool,
        reply_to_message_id: i32,
        reply_markup: InlineKeyboardMarkup,
    }
}

api_method! {
    AnswerShippingQuery("answerShippingQuery") -> bool {
        shipping_query_id: String,
        ok: bool,
    }
    optional {
        shipping_options: Vec<ShippingOption>,
        error_message: String,
    }
}

api_method! {
    AnswerPreCheckoutQuery("answerPreCheckoutQuery") -> bool {
        pre_checkout_query_id: String,
        ok: bool,
    }
    optional {
        error_message: String,
    }
}
