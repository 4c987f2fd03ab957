//! The Bot API method table.
//!
//! Every remote method is one `api_method!` entry: its wire name, its fields
//! (required first, then optional), its result type and an optional pre-check.
//! Field names are the wire names. All entries share the generic call path in
//! [`Bot::call`](crate::client::Bot::call).

use serde::de::DeserializeOwned;

use crate::{errors::Error, request::Params, types::InputFile, Result};

/// A Bot API method: how to name it, build its parameters, and type its result.
pub trait Method {
    type Output: DeserializeOwned + Send + 'static;
    const NAME: &'static str;

    /// Validate the arguments and build the parameter set. Runs before any I/O.
    fn into_params(self) -> Result<Params>;
}

macro_rules! api_method {
    (
        $(#[$meta:meta])*
        $name:ident($wire:literal) -> $output:ty {
            $( $req:ident : $req_ty:ty ),* $(,)?
        }
        $( optional { $( $opt:ident : $opt_ty:ty ),* $(,)? } )?
        $( check(&$this:ident) $check:block )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            $( pub $req: $req_ty, )*
            $( $( pub $opt: Option<$opt_ty>, )* )?
        }

        impl $name {
            #[allow(clippy::new_without_default, clippy::too_many_arguments)]
            pub fn new($( $req: impl Into<$req_ty> ),*) -> Self {
                Self {
                    $( $req: $req.into(), )*
                    $( $( $opt: None, )* )?
                }
            }

            $( $(
                pub fn $opt(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt = Some(value.into());
                    self
                }
            )* )?
        }

        impl $crate::methods::Method for $name {
            type Output = $output;
            const NAME: &'static str = $wire;

            fn into_params(self) -> $crate::Result<$crate::request::Params> {
                $(
                    let checked: $crate::Result<()> = {
                        let $this = &self;
                        $check
                    };
                    checked?;
                )?
                #[allow(unused_mut)]
                let mut params = $crate::request::Params::new();
                $( params.push(stringify!($req), self.$req)?; )*
                $( $( params.push_opt(stringify!($opt), self.$opt)?; )* )?
                Ok(params)
            }
        }
    };
}

mod chat;
mod editing;
mod games;
mod messages;
mod payments;
mod queries;
mod stickers;

pub use chat::*;
pub use editing::*;
pub use games::*;
pub use messages::*;
pub use payments::*;
pub use queries::*;
pub use stickers::*;

/// Edit-style methods address either `chat_id` + `message_id` or
/// `inline_message_id`. Supplying both is left to Telegram to judge.
pub(crate) fn require_target(
    has_chat: bool,
    message_id: Option<i32>,
    inline_message_id: Option<&str>,
) -> Result<()> {
    let inline = inline_message_id.is_some_and(|id| !id.is_empty());
    if (has_chat && message_id.is_some()) || inline {
        Ok(())
    } else {
        Err(Error::invalid(
            "either `chat_id` and `message_id` or `inline_message_id` must be provided",
        ))
    }
}

/// Length bounds in characters, as Telegram counts them.
pub(crate) fn require_len(name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "`{name}` must be {min} to {max} characters long, got {len}"
        )))
    }
}

pub(crate) fn require_upload(name: &str, file: &InputFile) -> Result<()> {
    if file.is_upload() {
        Ok(())
    } else {
        Err(Error::invalid(format!("`{name}` must be uploaded content, got {file:?}")))
    }
}
