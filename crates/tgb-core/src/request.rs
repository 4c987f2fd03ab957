//! Request construction: parameter sets and their two wire encodings.
//!
//! A call without uploadable content is a single JSON object. As soon as one
//! parameter carries bytes to upload the whole call switches to
//! `multipart/form-data`, every scalar becoming a text part.

use std::{fmt, path::PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    domain::Recipient,
    errors::Error,
    types::{
        ChatAction, InlineKeyboardMarkup, InlineQueryResult, InputFile, InputMedia, LabeledPrice,
        MaskPosition, ParseMode, ReplyMarkup, ShippingOption,
    },
    Result,
};

/// A single parameter value, before encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Json(Value),
    File(InputFile),
    Media(InputMedia),
    MediaGroup(Vec<InputMedia>),
}

impl ParamValue {
    fn has_upload(&self) -> bool {
        match self {
            ParamValue::Json(_) => false,
            ParamValue::File(f) => f.is_upload(),
            ParamValue::Media(m) => m.media.is_upload(),
            ParamValue::MediaGroup(items) => items.iter().any(|m| m.media.is_upload()),
        }
    }
}

/// Conversion of a typed argument into its parameter value.
pub trait IntoParam {
    fn into_param(self) -> Result<ParamValue>;
}

fn json_param<T: Serialize>(value: &T) -> Result<ParamValue> {
    let value = serde_json::to_value(value)
        .map_err(|e| Error::invalid(format!("unserializable parameter: {e}")))?;
    // serde_json turns non-finite floats into null, at any depth
    if contains_null(&value) {
        return Err(Error::invalid(format!("parameter holds a null or non-finite value: {value}")));
    }
    Ok(ParamValue::Json(value))
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}

macro_rules! json_params {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoParam for $ty {
                fn into_param(self) -> Result<ParamValue> {
                    json_param(&self)
                }
            }
        )*
    };
}

json_params!(
    String,
    bool,
    i32,
    i64,
    u32,
    f64,
    ParseMode,
    ChatAction,
    ReplyMarkup,
    InlineKeyboardMarkup,
    MaskPosition,
    Vec<String>,
    Vec<LabeledPrice>,
    Vec<ShippingOption>,
    Vec<InlineQueryResult>,
);

impl IntoParam for Recipient {
    fn into_param(self) -> Result<ParamValue> {
        Ok(ParamValue::Json(Value::String(self.resolve())))
    }
}

impl IntoParam for InputFile {
    fn into_param(self) -> Result<ParamValue> {
        Ok(ParamValue::File(self))
    }
}

impl IntoParam for InputMedia {
    fn into_param(self) -> Result<ParamValue> {
        Ok(ParamValue::Media(self))
    }
}

impl IntoParam for Vec<InputMedia> {
    fn into_param(self) -> Result<ParamValue> {
        Ok(ParamValue::MediaGroup(self))
    }
}

/// Ordered wire field name → value mapping. Absent values are never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(&'static str, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl IntoParam) -> Result<()> {
        let value = value.into_param()?;
        if value == ParamValue::Json(Value::Null) {
            return Err(Error::invalid(format!("`{name}` has no value")));
        }
        self.entries.push((name, value));
        Ok(())
    }

    pub fn push_opt<T: IntoParam>(&mut self, name: &'static str, value: Option<T>) -> Result<()> {
        match value {
            Some(v) => self.push(name, v),
            None => Ok(()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_upload(&self) -> bool {
        self.entries.iter().any(|(_, v)| v.has_upload())
    }

    pub fn encode(self) -> Result<RequestBody> {
        if self.entries.is_empty() {
            Ok(RequestBody::Empty)
        } else if self.has_upload() {
            self.encode_multipart()
        } else {
            self.encode_json()
        }
    }

    fn encode_json(self) -> Result<RequestBody> {
        let mut body = Map::new();
        for (name, value) in self.entries {
            let value = match value {
                ParamValue::Json(v) => v,
                ParamValue::File(f) => Value::String(reference(name, &f)?.to_string()),
                ParamValue::Media(m) => m.descriptor(reference(name, &m.media)?),
                ParamValue::MediaGroup(items) => Value::Array(
                    items
                        .iter()
                        .map(|m| Ok(m.descriptor(reference(name, &m.media)?)))
                        .collect::<Result<_>>()?,
                ),
            };
            body.insert(name.to_string(), value);
        }
        Ok(RequestBody::Json(body))
    }

    fn encode_multipart(self) -> Result<RequestBody> {
        let mut parts = Vec::new();
        let mut attached = 0usize;

        for (name, value) in self.entries {
            match value {
                ParamValue::Json(v) => parts.push(FormPart::text(name, form_text(v))),
                ParamValue::File(f) => match content(name, f)? {
                    Content::Reference(r) => parts.push(FormPart::text(name, r)),
                    Content::Upload(upload) => parts.push(upload.into_part(name.to_string())),
                },
                ParamValue::Media(m) => {
                    let media = attach(name, &m.media, &mut parts, &mut attached)?;
                    parts.push(FormPart::text(name, m.descriptor(&media).to_string()));
                }
                ParamValue::MediaGroup(items) => {
                    // File parts first, then the descriptor array naming them.
                    let refs = items
                        .iter()
                        .map(|m| attach(name, &m.media, &mut parts, &mut attached))
                        .collect::<Result<Vec<_>>>()?;
                    let descriptors = items
                        .iter()
                        .zip(&refs)
                        .map(|(m, r)| m.descriptor(r))
                        .collect::<Vec<_>>();
                    parts.push(FormPart::text(name, Value::Array(descriptors).to_string()));
                }
            }
        }
        Ok(RequestBody::Multipart(parts))
    }
}

/// Scalars as their plain string form, structured values as JSON text.
fn form_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn reference<'a>(name: &str, file: &'a InputFile) -> Result<&'a str> {
    match file.reference() {
        Some("") => Err(Error::invalid(format!("`{name}` references an empty file id or url"))),
        Some(r) => Ok(r),
        None => Err(Error::invalid(format!(
            "`{name}` carries an upload outside of a multipart request"
        ))),
    }
}

enum Content {
    Reference(String),
    Upload(Upload),
}

struct Upload {
    file_name: String,
    source: UploadSource,
}

impl Upload {
    fn into_part(self, name: String) -> FormPart {
        FormPart::File {
            name,
            file_name: self.file_name,
            source: self.source,
        }
    }
}

fn content(name: &str, file: InputFile) -> Result<Content> {
    match file {
        InputFile::Path(path) => {
            let file_name = path
                .file_name()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::invalid(format!("`{name}`: {} has no file name", path.display()))
                })?;
            Ok(Content::Upload(Upload {
                file_name,
                source: UploadSource::Path(path),
            }))
        }
        InputFile::Memory { file_name, data } => {
            if file_name.trim().is_empty() {
                return Err(Error::invalid(format!("`{name}`: upload needs a file name")));
            }
            Ok(Content::Upload(Upload {
                file_name,
                source: UploadSource::Memory(data),
            }))
        }
        other => reference(name, &other).map(|r| Content::Reference(r.to_string())),
    }
}

/// Emits the file part of an uploaded media item under a generated name and
/// returns what its descriptor's `media` field must say.
fn attach(
    name: &str,
    media: &InputFile,
    parts: &mut Vec<FormPart>,
    attached: &mut usize,
) -> Result<String> {
    match content(name, media.clone())? {
        Content::Reference(r) => Ok(r),
        Content::Upload(upload) => {
            let part_name = format!("attach_{}", *attached);
            *attached += 1;
            parts.push(upload.into_part(part_name.clone()));
            Ok(format!("attach://{part_name}"))
        }
    }
}

/// Encoded body of a call.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// No parameters: sent as `GET`.
    Empty,
    Json(Map<String, Value>),
    Multipart(Vec<FormPart>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        source: UploadSource,
    },
}

impl FormPart {
    fn text(name: &str, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum UploadSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

impl fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadSource::Path(p) => f.debug_tuple("Path").field(p).finish(),
            UploadSource::Memory(data) => write!(f, "Memory({} bytes)", data.len()),
        }
    }
}

/// A fully encoded call, ready for a [`Transport`](crate::transport::Transport).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: &'static str,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn is_multipart(&self) -> bool {
        matches!(self.body, RequestBody::Multipart(_))
    }

    pub fn http_method(&self) -> &'static str {
        match self.body {
            RequestBody::Empty => "GET",
            _ => "POST",
        }
    }
}
