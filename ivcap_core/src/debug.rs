use crate::codec::{self, Format};
use crate::transport::RequestMeta;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};

/// Body previews are cut at this many characters.
pub(crate) const BODY_PREVIEW_CHARS: usize = 32 * 1024;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum DebugLevel {
    #[default]
    None = 0,
    V = 1,
    VV = 2,
}

impl DebugLevel {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != DebugLevel::None
    }

    #[inline]
    pub fn is_verbose(self) -> bool {
        self >= DebugLevel::V
    }

    #[inline]
    pub fn is_very_verbose(self) -> bool {
        self >= DebugLevel::VV
    }
}

impl core::fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DebugLevel::None => f.write_str("none"),
            DebugLevel::V => f.write_str("v"),
            DebugLevel::VV => f.write_str("vv"),
        }
    }
}

/// Receives the diagnostic events of a request. The client only calls the
/// `request_*`/`response_*` hooks the active level asks for.
pub trait DebugSink: Send + Sync + 'static {
    fn request_start(&self, dbg: DebugLevel, meta: &RequestMeta, url: &str);
    fn request_headers(&self, dbg: DebugLevel, headers: &HeaderMap);
    /// `None` for streamed bodies, which are never buffered for display.
    fn request_body(&self, dbg: DebugLevel, body: Option<&Bytes>, format: Format);

    fn response_status(&self, dbg: DebugLevel, meta: &RequestMeta, status: StatusCode, url: &str);
    fn response_headers(&self, dbg: DebugLevel, headers: &HeaderMap);
    fn response_body(&self, dbg: DebugLevel, body: &Bytes, format: Format);
}

#[derive(Default)]
pub struct NoopDebugSink;
impl DebugSink for NoopDebugSink {
    #[inline]
    fn request_start(&self, _: DebugLevel, _: &RequestMeta, _: &str) {}
    #[inline]
    fn request_headers(&self, _: DebugLevel, _: &HeaderMap) {}
    #[inline]
    fn request_body(&self, _: DebugLevel, _: Option<&Bytes>, _: Format) {}
    #[inline]
    fn response_status(&self, _: DebugLevel, _: &RequestMeta, _: StatusCode, _: &str) {}
    #[inline]
    fn response_headers(&self, _: DebugLevel, _: &HeaderMap) {}
    #[inline]
    fn response_body(&self, _: DebugLevel, _: &Bytes, _: Format) {}
}

/// Plain `[ivcap:<level>]` lines on stderr.
#[derive(Default)]
pub struct StderrDebugSink;
impl DebugSink for StderrDebugSink {
    fn request_start(&self, dbg: DebugLevel, meta: &RequestMeta, url: &str) {
        eprintln!("[ivcap:{}] -> {} {} ({})", dbg, meta.method, url, meta);
    }

    fn request_headers(&self, dbg: DebugLevel, headers: &HeaderMap) {
        eprintln!("[ivcap:{}] request headers:", dbg);
        for (k, v) in headers.iter() {
            eprintln!("  {}: {}", k, header_value_for_debug(k, v));
        }
    }

    fn request_body(&self, dbg: DebugLevel, body: Option<&Bytes>, format: Format) {
        match body {
            Some(body) => eprintln!(
                "[ivcap:{}] request body ({} bytes): {}",
                dbg,
                body.len(),
                codec::format_bytes_for_debug(format, body, BODY_PREVIEW_CHARS)
            ),
            None => eprintln!("[ivcap:{}] request body: <stream>", dbg),
        }
    }

    fn response_status(&self, dbg: DebugLevel, meta: &RequestMeta, status: StatusCode, url: &str) {
        let outcome = if status.is_success() { "ok" } else { "error" };
        eprintln!(
            "[ivcap:{}] <- {} {} ({}, {})",
            dbg,
            status.as_u16(),
            url,
            meta,
            outcome
        );
    }

    fn response_headers(&self, dbg: DebugLevel, headers: &HeaderMap) {
        eprintln!("[ivcap:{}] response headers:", dbg);
        for (k, v) in headers.iter() {
            eprintln!("  {}: {}", k, header_value_for_debug(k, v));
        }
    }

    fn response_body(&self, dbg: DebugLevel, body: &Bytes, format: Format) {
        eprintln!(
            "[ivcap:{}] response body ({} bytes): {}",
            dbg,
            body.len(),
            codec::format_bytes_for_debug(format, body, BODY_PREVIEW_CHARS)
        );
    }
}

/// Structured `tracing` events at DEBUG (V) and TRACE (VV).
#[derive(Default)]
pub struct TracingDebugSink;
impl DebugSink for TracingDebugSink {
    fn request_start(&self, dbg: DebugLevel, meta: &RequestMeta, url: &str) {
        tracing::debug!(
            service = meta.service,
            method = meta.operation,
            http_method = %meta.method,
            url,
            level = %dbg,
            "sending request"
        );
    }

    fn request_headers(&self, _: DebugLevel, headers: &HeaderMap) {
        for (k, v) in headers.iter() {
            tracing::trace!(header = %k, value = %header_value_for_debug(k, v), "request header");
        }
    }

    fn request_body(&self, _: DebugLevel, body: Option<&Bytes>, format: Format) {
        match body {
            Some(body) => tracing::trace!(
                bytes = body.len(),
                body = %codec::format_bytes_for_debug(format, body, BODY_PREVIEW_CHARS),
                "request body"
            ),
            None => tracing::trace!("request body is streamed"),
        }
    }

    fn response_status(&self, _: DebugLevel, meta: &RequestMeta, status: StatusCode, url: &str) {
        tracing::debug!(
            service = meta.service,
            method = meta.operation,
            status = status.as_u16(),
            url,
            "received response"
        );
    }

    fn response_headers(&self, _: DebugLevel, headers: &HeaderMap) {
        for (k, v) in headers.iter() {
            tracing::trace!(header = %k, value = %header_value_for_debug(k, v), "response header");
        }
    }

    fn response_body(&self, _: DebugLevel, body: &Bytes, format: Format) {
        tracing::trace!(
            bytes = body.len(),
            body = %codec::format_bytes_for_debug(format, body, BODY_PREVIEW_CHARS),
            "response body"
        );
    }
}

fn is_sensitive_header_name(name: &HeaderName) -> bool {
    // HeaderName::as_str() is normalized to lowercase.
    let n = name.as_str();
    matches!(n, "authorization" | "proxy-authorization" | "cookie" | "set-cookie")
        || n.contains("token")
        || n.contains("secret")
        || n.contains("api-key")
        || n.contains("apikey")
        || n.ends_with("-key")
}

pub(crate) fn header_value_for_debug(name: &HeaderName, value: &HeaderValue) -> String {
    if is_sensitive_header_name(name) || value.is_sensitive() {
        "<redacted>".to_string()
    } else {
        value.to_str().unwrap_or("<non-utf8>").to_string()
    }
}
