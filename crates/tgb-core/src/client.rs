use std::{future::Future, sync::Arc};

use crate::{
    methods::Method,
    request::ApiRequest,
    response,
    transport::Transport,
    Error, Result,
};

/// Handle to the Bot API.
///
/// Cheap to clone; every clone shares the same transport. Calls are
/// independent of each other and may run concurrently.
#[derive(Clone)]
pub struct Bot {
    transport: Arc<dyn Transport>,
}

impl Bot {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validate and encode a call without sending it.
    pub fn prepare<M: Method>(&self, method: M) -> Result<ApiRequest> {
        let body = method.into_params()?.encode()?;
        Ok(ApiRequest {
            method: M::NAME,
            body,
        })
    }

    /// Send a call and unwrap its result.
    ///
    /// Arguments are validated and encoded right here, before the returned
    /// future exists: a malformed call never reaches the transport.
    pub fn call<M: Method>(&self, method: M) -> impl Future<Output = Result<M::Output>> + Send {
        let prepared = self.prepare(method);
        let transport = Arc::clone(&self.transport);

        async move {
            let request = prepared?;
            let name = request.method;
            tracing::debug!(
                method = name,
                http = request.http_method(),
                multipart = request.is_multipart(),
                "bot api call"
            );

            let body = transport.execute(request).await.map_err(|e| {
                tracing::debug!(method = name, error = %e, "bot api transport failure");
                Error::Transport(e)
            })?;

            response::decode::<M::Output>(name, &body).inspect_err(|e| {
                if let Error::Api(api) = e {
                    tracing::warn!(
                        method = name,
                        code = api.code,
                        description = %api.description,
                        "bot api rejected call"
                    );
                }
            })
        }
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::TransportError,
        methods::*,
        request::{FormPart, RequestBody},
        types::{EditResult, InputFile, InputMedia, ParseMode},
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replies with a canned body and records every request it receives.
    struct FakeTransport {
        reply: Mutex<std::result::Result<Vec<u8>, String>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        fn replying(body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Ok(body.to_string().into_bytes())),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Err(msg.to_string())),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last(&self) -> ApiRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn execute(&self, request: ApiRequest) -> std::result::Result<Vec<u8>, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.reply
                .lock()
                .unwrap()
                .clone()
                .map_err(TransportError::Http)
        }
    }

    fn message_json(id: i32) -> serde_json::Value {
        json!({
            "message_id": id,
            "date": 1_700_000_000,
            "chat": {"id": 42, "type": "private", "first_name": "Ann"},
            "text": "hello"
        })
    }

    #[tokio::test]
    async fn ok_envelope_resolves_to_typed_result() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": message_json(7)}));
        let bot = Bot::new(fake.clone());

        let msg = bot.call(SendMessage::new(42i64, "hello")).await.unwrap();
        assert_eq!(msg.message_id, 7);
        assert_eq!(msg.chat.id, 42);
        assert_eq!(msg.text.as_deref(), Some("hello"));
        assert!(msg.sent_at().is_some());

        let req = fake.last();
        assert_eq!(req.method, "sendMessage");
        assert_eq!(req.http_method(), "POST");
    }

    #[tokio::test]
    async fn scalar_and_list_results_decode() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": 12}));
        let count = Bot::new(fake).call(GetChatMembersCount::new("@chan")).await.unwrap();
        assert_eq!(count, 12);

        let fake = FakeTransport::replying(json!({"ok": true, "result": "https://t.me/joinchat/x"}));
        let link = Bot::new(fake).call(ExportChatInviteLink::new(-100i64)).await.unwrap();
        assert_eq!(link, "https://t.me/joinchat/x");

        let fake = FakeTransport::replying(
            json!({"ok": true, "result": [message_json(1), message_json(2)]}),
        );
        let sent = Bot::new(fake)
            .call(SendMediaGroup::new(
                1i64,
                vec![
                    InputMedia::photo(InputFile::file_id("a")),
                    InputMedia::photo(InputFile::file_id("b")),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(sent.len(), 2);
    }

    #[tokio::test]
    async fn edit_results_cover_chat_and_inline_messages() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": message_json(3)}));
        let res = Bot::new(fake)
            .call(EditMessageText::new("new").chat_id(42i64).message_id(3))
            .await
            .unwrap();
        assert_eq!(res.message().map(|m| m.message_id), Some(3));

        let fake = FakeTransport::replying(json!({"ok": true, "result": true}));
        let res = Bot::new(fake)
            .call(EditMessageText::new("new").inline_message_id("inl"))
            .await
            .unwrap();
        assert_eq!(res, EditResult::Inline(true));
    }

    #[tokio::test]
    async fn api_rejection_is_an_api_error() {
        let fake = FakeTransport::replying(
            json!({"ok": false, "error_code": 400, "description": "Bad Request: test"}),
        );
        let bot = Bot::new(fake.clone());

        let err = bot.call(LeaveChat::new(1i64)).await.unwrap_err();
        let Error::Api(api) = err else {
            panic!("expected api error, got {err:?}");
        };
        assert_eq!(api.code, 400);
        assert_eq!(api.description, "Bad Request: test");

        let err = bot.call(GetMe::new()).await.unwrap_err();
        assert_eq!(err.api_code(), Some(400));
        assert_eq!(fake.calls(), 2);
    }

    #[tokio::test]
    async fn transport_failure_is_not_an_api_error() {
        let fake = FakeTransport::failing("connection refused");
        let err = Bot::new(fake).call(GetMe::new()).await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Http(_))), "{err:?}");
        assert_eq!(err.api_code(), None);
    }

    #[tokio::test]
    async fn missing_edit_target_fails_before_transport() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": true}));
        let bot = Bot::new(fake.clone());

        let err = bot
            .prepare(EditMessageCaption::new().caption("c"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        // the future is built after validation and carries the error
        let pending = bot.call(EditMessageText::new("t").message_id(1));
        assert_eq!(fake.calls(), 0);
        assert!(matches!(pending.await, Err(Error::InvalidArgument(_))));
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn bad_dynamic_identifier_fails_before_transport() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": message_json(1)}));
        let bot = Bot::new(fake.clone());

        for raw in [json!(3.25), json!(null), json!(["@chan"]), json!({"id": 1})] {
            let sent = match crate::domain::Recipient::try_from(raw) {
                Ok(chat) => bot.call(SendMessage::new(chat, "hi")).await,
                Err(e) => Err(e),
            };
            assert!(matches!(sent, Err(Error::InvalidArgument(_))), "{sent:?}");
        }
        assert_eq!(fake.calls(), 0);

        let chat = crate::domain::Recipient::try_from(json!(-1001)).unwrap();
        bot.call(SendMessage::new(chat, "hi")).await.unwrap();
        let RequestBody::Json(body) = fake.last().body else {
            panic!("expected json body");
        };
        assert_eq!(body["chat_id"], "-1001");
    }

    #[tokio::test]
    async fn empty_reference_fails_before_transport() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": message_json(1)}));
        let bot = Bot::new(fake.clone());

        let err = bot
            .call(SendPhoto::new(1i64, InputFile::file_id("")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn uploaded_photo_goes_out_as_multipart() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": message_json(9)}));
        let bot = Bot::new(fake.clone());

        bot.call(
            SendPhoto::new(42i64, InputFile::memory("cat.png", b"\x89PNG".to_vec()))
                .caption("a cat")
                .parse_mode(ParseMode::Markdown)
                .reply_to_message_id(5),
        )
        .await
        .unwrap();

        let RequestBody::Multipart(parts) = fake.last().body else {
            panic!("expected multipart body");
        };
        let files: Vec<_> = parts
            .iter()
            .filter(|p| matches!(p, FormPart::File { .. }))
            .map(FormPart::name)
            .collect();
        assert_eq!(files, vec!["photo"]);

        let texts: Vec<_> = parts
            .iter()
            .filter_map(|p| match p {
                FormPart::Text { name, value } => Some((name.as_str(), value.as_str())),
                FormPart::File { .. } => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                ("chat_id", "42"),
                ("caption", "a cat"),
                ("parse_mode", "Markdown"),
                ("reply_to_message_id", "5"),
            ]
        );
    }

    #[tokio::test]
    async fn referenced_photo_goes_out_as_json() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": message_json(9)}));
        let bot = Bot::new(fake.clone());

        bot.call(SendPhoto::new("@chan", InputFile::file_id("AgADBAAD")))
            .await
            .unwrap();

        let RequestBody::Json(body) = fake.last().body else {
            panic!("expected json body");
        };
        assert_eq!(body["photo"], "AgADBAAD");
        assert_eq!(body["chat_id"], "@chan");
        assert!(!body.contains_key("caption"));
    }

    #[tokio::test]
    async fn parameterless_call_is_a_get() {
        let fake = FakeTransport::replying(
            json!({"ok": true, "result": {"id": 1, "is_bot": true, "first_name": "b"}}),
        );
        let bot = Bot::new(fake.clone());
        let me = bot.call(GetMe::new()).await.unwrap();
        assert!(me.is_bot);
        assert_eq!(fake.last().body, RequestBody::Empty);
        assert_eq!(fake.last().http_method(), "GET");
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_transport() {
        let fake = FakeTransport::replying(json!({"ok": true, "result": true}));
        let bot = Bot::new(fake.clone());

        let calls = (0..8).map(|i| {
            let bot = bot.clone();
            tokio::spawn(async move { bot.call(DeleteMessage::new(1i64, i)).await })
        });
        for handle in calls.collect::<Vec<_>>() {
            assert!(handle.await.unwrap().unwrap());
        }
        assert_eq!(fake.calls(), 8);
    }
}
