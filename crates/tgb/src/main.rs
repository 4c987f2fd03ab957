use anyhow::{bail, Context};

use tgb_core::{
    config::Config,
    methods::{GetMe, SendMessage},
    Recipient,
};

const USAGE: &str = "usage: tgb [send <chat_id|@channel> <text>]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tgb_core::logging::init("tgb")?;

    let cfg = Config::load()?;
    let bot = tgb_http::connect(&cfg)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let me = bot.call(GetMe::new()).await.context("getMe failed")?;
            println!(
                "{} (@{})",
                me.first_name,
                me.username.as_deref().unwrap_or("-")
            );
        }
        [cmd, chat, text @ ..] if cmd == "send" && !text.is_empty() => {
            let chat = parse_chat(chat);
            let msg = bot
                .call(SendMessage::new(chat.clone(), text.join(" ")))
                .await
                .with_context(|| format!("sending to {chat} failed"))?;
            println!("sent message {} to {}", msg.message_id, msg.chat.id);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn parse_chat(raw: &str) -> Recipient {
    raw.parse::<i64>()
        .map(Recipient::Id)
        .unwrap_or_else(|_| Recipient::from(raw))
}
