use crate::types::InlineQueryResult;

api_method! {
    AnswerCallbackQuery("answerCallbackQuery") -> bool {
        callback_query_id: String,
    }
    optional {
        text: String,
        show_alert: bool,
        url: String,
        cache_time: u32,
    }
}

api_method! {
    AnswerInlineQuery("answerInlineQuery") -> bool {
        inline_query_id: String,
        results: Vec<InlineQueryResult>,
    }
    optional {
        cache_time: u32,
        is_personal: bool,
        next_offset: String,
        switch_pm_text: String,
        switch_pm_parameter: String,
    }
}
