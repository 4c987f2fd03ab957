use std::{env, fmt, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client configuration.
///
/// The token is the only required value; everything else has a default.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub api_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from the process environment, after importing `.env` if present.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in [`Config::load`]).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let mut cfg = Self::new(bot_token.trim());

        if let Some(url) = lookup("TELEGRAM_API_URL").and_then(non_empty) {
            cfg.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_secs(&lookup, "TELEGRAM_CONNECT_TIMEOUT_SECS")? {
            cfg.connect_timeout = secs;
        }
        if let Some(secs) = parse_secs(&lookup, "TELEGRAM_REQUEST_TIMEOUT_SECS")? {
            cfg.request_timeout = secs;
        }

        Ok(cfg)
    }

    /// Base endpoint every method name is appended to.
    pub fn endpoint(&self) -> String {
        format!("{}/bot{}", self.api_url, self.bot_token)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    let Some(raw) = lookup(key).and_then(non_empty) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::Config(format!(
            "{key} must be a positive number of seconds, got {raw:?}"
        ))),
        Ok(secs) => Ok(Some(Duration::from_secs(secs))),
    }
}

/// Imports `KEY=value` lines from `path`; variables already set win.
fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };
    for (key, value) in dotenv_pairs(&contents) {
        if env::var_os(key).is_none() {
            env::set_var(key, value);
        }
    }
}

fn dotenv_pairs(contents: &str) -> impl Iterator<Item = (&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim(), unquote(v.trim())))
        .filter(|(k, _)| !k.is_empty())
}

fn unquote(val: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| val.strip_prefix(*q)?.strip_suffix(*q))
        .unwrap_or(val)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_match_the_public_api() {
        let cfg = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(cfg.endpoint(), "https://api.telegram.org/bot123:abc");
        assert_eq!(cfg.connect_timeout, Duration::from_secs(60));
        assert_eq!(cfg.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = Config::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("TELEGRAM_API_URL", "http://localhost:8081/"),
            ("TELEGRAM_CONNECT_TIMEOUT_SECS", "5"),
            ("TELEGRAM_REQUEST_TIMEOUT_SECS", "120"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint(), "http://localhost:8081/bott");
        assert_eq!(cfg.connect_timeout, Duration::from_secs(5));
        assert_eq!(cfg.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn bad_timeouts_are_rejected() {
        for bad in ["0", "soon", "-3"] {
            let err = Config::from_lookup(lookup(&[
                ("TELEGRAM_BOT_TOKEN", "t"),
                ("TELEGRAM_REQUEST_TIMEOUT_SECS", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{bad}");
        }
    }

    #[test]
    fn debug_redacts_token() {
        let dbg = format!("{:?}", Config::new("secret-token"));
        assert!(!dbg.contains("secret-token"));
    }

    #[test]
    fn dotenv_lines_are_parsed_leniently() {
        let contents = "# comment\n\nTELEGRAM_BOT_TOKEN = \"1:x\"\nnot a pair\n=orphan\nTELEGRAM_API_URL='http://h'\n";
        assert_eq!(
            dotenv_pairs(contents).collect::<Vec<_>>(),
            vec![
                ("TELEGRAM_BOT_TOKEN", "1:x"),
                ("TELEGRAM_API_URL", "http://h"),
            ]
        );
    }

    #[test]
    fn unquote_strips_matching_quotes_only() {
        assert_eq!(unquote("\"a b\""), "a b");
        assert_eq!(unquote("'x'"), "x");
        assert_eq!(unquote("\"x'"), "\"x'");
        assert_eq!(unquote("plain"), "plain");
    }
}
