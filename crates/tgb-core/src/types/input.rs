use std::{fmt, path::PathBuf};

use serde::Serialize;

use super::markup::ParseMode;

/// Content to send: either bytes to upload or a reference Telegram resolves itself.
#[derive(Clone, PartialEq, Eq)]
pub enum InputFile {
    /// A local file, read when the request is sent.
    Path(PathBuf),
    /// In-memory content with the file name to report in the upload.
    Memory { file_name: String, data: Vec<u8> },
    /// A `file_id` of content already stored on Telegram's servers.
    FileId(String),
    /// An HTTP URL Telegram downloads itself.
    Url(String),
}

impl InputFile {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        InputFile::Path(path.into())
    }

    pub fn memory(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        InputFile::Memory {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }

    /// Whether sending this content needs a multipart upload.
    pub fn is_upload(&self) -> bool {
        matches!(self, InputFile::Path(_) | InputFile::Memory { .. })
    }

    /// The string sent on the wire for references; `None` for uploads.
    pub fn reference(&self) -> Option<&str> {
        match self {
            InputFile::FileId(s) | InputFile::Url(s) => Some(s),
            InputFile::Path(_) | InputFile::Memory { .. } => None,
        }
    }
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFile::Path(p) => f.debug_tuple("Path").field(p).finish(),
            InputFile::Memory { file_name, data } => f
                .debug_struct("Memory")
                .field("file_name", file_name)
                .field("len", &data.len())
                .finish(),
            InputFile::FileId(id) => f.debug_tuple("FileId").field(id).finish(),
            InputFile::Url(url) => f.debug_tuple("Url").field(url).finish(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMediaKind {
    Photo,
    Video,
    Animation,
    Audio,
    Document,
}

/// One item of `sendMediaGroup`, or the replacement content of `editMessageMedia`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputMedia {
    pub kind: InputMediaKind,
    pub media: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration: Option<u32>,
    pub supports_streaming: Option<bool>,
    pub performer: Option<String>,
    pub title: Option<String>,
}

impl InputMedia {
    pub fn new(kind: InputMediaKind, media: InputFile) -> Self {
        Self {
            kind,
            media,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
            performer: None,
            title: None,
        }
    }

    pub fn photo(media: InputFile) -> Self {
        Self::new(InputMediaKind::Photo, media)
    }

    pub fn video(media: InputFile) -> Self {
        Self::new(InputMediaKind::Video, media)
    }

    pub fn document(media: InputFile) -> Self {
        Self::new(InputMediaKind::Document, media)
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// The JSON descriptor of this item, with `media` already resolved to a
    /// reference or an `attach://` name.
    pub(crate) fn descriptor(&self, media: &str) -> serde_json::Value {
        #[derive(Serialize)]
        struct Descriptor<'a> {
            #[serde(rename = "type")]
            kind: InputMediaKind,
            media: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            caption: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            parse_mode: Option<ParseMode>,
            #[serde(skip_serializing_if = "Option::is_none")]
            width: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            height: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            duration: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supports_streaming: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            performer: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
        }

        let d = Descriptor {
            kind: self.kind,
            media,
            caption: self.caption.as_deref(),
            parse_mode: self.parse_mode,
            width: self.width,
            height: self.height,
            duration: self.duration,
            supports_streaming: self.supports_streaming,
            performer: self.performer.as_deref(),
            title: self.title.as_deref(),
        };
        // Only strings, integers, booleans and unit enums: cannot fail.
        serde_json::to_value(d).unwrap_or(serde_json::Value::Null)
    }
}
