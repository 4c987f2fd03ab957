use std::fmt;

use crate::{errors::Error, Result};

/// Target of a call: a numeric chat/user id or a public handle such as `@channel`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Recipient {
    Id(i64),
    Username(String),
}

impl Recipient {
    /// Wire form: the decimal string of an id, or the handle unchanged.
    pub fn resolve(&self) -> String {
        match self {
            Recipient::Id(id) => id.to_string(),
            Recipient::Username(name) => name.clone(),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Id(id) => write!(f, "{id}"),
            Recipient::Username(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Recipient {
    fn from(id: i64) -> Self {
        Recipient::Id(id)
    }
}

impl From<i32> for Recipient {
    fn from(id: i32) -> Self {
        Recipient::Id(i64::from(id))
    }
}

impl From<String> for Recipient {
    fn from(name: String) -> Self {
        Recipient::Username(name)
    }
}

impl From<&str> for Recipient {
    fn from(name: &str) -> Self {
        Recipient::Username(name.to_string())
    }
}

/// Accepts identifiers coming from loosely-typed sources (config files, JSON
/// payloads). Only integers and strings are identifiers.
impl TryFrom<serde_json::Value> for Recipient {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Recipient::Id)
                .ok_or_else(|| Error::invalid(format!("{n} neither string nor integer"))),
            serde_json::Value::String(s) => Ok(Recipient::Username(s)),
            other => Err(Error::invalid(format!("{other} neither string nor integer"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_resolve_to_decimal() {
        assert_eq!(Recipient::from(42i32).resolve(), "42");
        assert_eq!(Recipient::from(-1001234567890i64).resolve(), "-1001234567890");
        assert_eq!(Recipient::from(i64::MAX).resolve(), "9223372036854775807");
        assert_eq!(Recipient::from(0i64).resolve(), "0");
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(Recipient::from("@channel").resolve(), "@channel");
        assert_eq!(Recipient::from("007".to_string()).resolve(), "007");
    }

    #[test]
    fn dynamic_values_accept_only_integers_and_strings() {
        assert_eq!(Recipient::try_from(json!(15)).unwrap(), Recipient::Id(15));
        assert_eq!(
            Recipient::try_from(json!("@news")).unwrap(),
            Recipient::Username("@news".into())
        );

        for bad in [json!(1.5), json!(true), json!(null), json!([1]), json!({"id": 1})] {
            let err = Recipient::try_from(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{err}");
        }
    }
}
