use crate::debug::DebugLevel;
use crate::error::ApiClientError;
use http::uri::Scheme;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://develop.ivcap.net";

pub const ENV_URL: &str = "IVCAP_URL";
pub const ENV_RESTORE_BODY: &str = "IVCAP_RESTORE_BODY";
pub const ENV_TIMEOUT_SECS: &str = "IVCAP_TIMEOUT_SECS";

/// Where and how the client talks to the gateway. Fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub scheme: Scheme,
    /// `host[:port]`.
    pub host: String,
    /// Keep the raw body on decoded responses.
    pub restore_response_body: bool,
    pub timeout: Option<Duration>,
    pub debug_level: DebugLevel,
}

impl ClientConfig {
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into(),
            restore_response_body: false,
            timeout: None,
            debug_level: DebugLevel::None,
        }
    }

    /// Accepts `http://host[:port]` or `https://host[:port]`, optionally
    /// with a trailing `/`.
    pub fn from_url(s: &str) -> Result<Self, ApiClientError> {
        let url = url::Url::parse(s.trim())
            .map_err(|e| ApiClientError::Config(format!("invalid gateway URL {s:?}: {e}")))?;
        let scheme = match url.scheme() {
            "http" => Scheme::HTTP,
            "https" => Scheme::HTTPS,
            other => {
                return Err(ApiClientError::Config(format!(
                    "unsupported scheme {other:?} in {s:?}"
                )));
            }
        };
        let host = url
            .host_str()
            .ok_or_else(|| ApiClientError::Config(format!("missing host in {s:?}")))?;
        if !matches!(url.path(), "" | "/") || url.query().is_some() || url.fragment().is_some() {
            return Err(ApiClientError::Config(format!(
                "gateway URL {s:?} must not carry a path, query or fragment"
            )));
        }
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self::new(scheme, host))
    }

    /// Reads `IVCAP_URL`, `IVCAP_RESTORE_BODY` and `IVCAP_TIMEOUT_SECS`,
    /// after loading a `.env` file when one exists.
    pub fn from_env() -> Result<Self, ApiClientError> {
        dotenvy::dotenv().ok();
        let url = dotenvy::var(ENV_URL).unwrap_or_else(|_| DEFAULT_URL.to_string());
        let mut cfg = Self::from_url(&url)?;
        if let Ok(v) = dotenvy::var(ENV_RESTORE_BODY) {
            cfg.restore_response_body = parse_bool(ENV_RESTORE_BODY, &v)?;
        }
        if let Ok(v) = dotenvy::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = v.trim().parse().map_err(|_| {
                ApiClientError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {v:?}"))
            })?;
            cfg.timeout = Some(Duration::from_secs(secs));
        }
        Ok(cfg)
    }

    #[inline]
    pub fn with_restore_response_body(mut self, v: bool) -> Self {
        self.restore_response_body = v;
        self
    }

    #[inline]
    pub fn with_timeout(mut self, d: Duration) -> Self {
        self.timeout = Some(d);
        self
    }

    #[inline]
    pub fn with_debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_level = level;
        self
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Scheme::HTTPS, "develop.ivcap.net")
    }
}

fn parse_bool(var: &str, v: &str) -> Result<bool, ApiClientError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ApiClientError::Config(format!(
            "{var} must be a boolean, got {v:?}"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_gateway_urls() {
        let c = ClientConfig::from_url("https://develop.ivcap.net").unwrap();
        assert_eq!(c.scheme, Scheme::HTTPS);
        assert_eq!(c.host, "develop.ivcap.net");
        assert!(!c.restore_response_body);

        let c = ClientConfig::from_url("http://localhost:8080/").unwrap();
        assert_eq!(c.base_url(), "http://localhost:8080");
    }

    #[test]
    fn rejects_odd_urls() {
        for bad in [
            "ftp://example.com",
            "https://example.com/1/artifacts",
            "https://example.com?x=1",
            "not a url",
        ] {
            assert!(
                matches!(ClientConfig::from_url(bad), Err(ApiClientError::Config(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn bool_values() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }

    #[test]
    fn default_targets_develop() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_URL);
    }
}
