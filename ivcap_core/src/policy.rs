use crate::endpoint::RequestError;
use core::time::Duration;
use http::header::{ACCEPT, HeaderName};
use http::{HeaderMap, HeaderValue};

/// Headers, query and timeout of one request, filled by the client and then
/// by the endpoint.
#[derive(Debug, Default)]
pub struct Policy {
    headers: HeaderMap,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
    // Set once the endpoint has set or removed Accept itself.
    accept_explicit: bool,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[inline]
    pub fn set_timeout(&mut self, d: Option<Duration>) {
        self.timeout = d;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        if name == ACCEPT {
            self.accept_explicit = true;
        }
        self.headers.insert(name, value);
    }

    /// Sets a header from caller data.
    pub fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), RequestError> {
        let hn = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| RequestError::InvalidHeader(name))?;
        let hv = HeaderValue::from_str(value).map_err(|_| RequestError::InvalidHeader(name))?;
        self.insert_header(hn, hv);
        Ok(())
    }

    pub fn set_header_opt(
        &mut self,
        name: &'static str,
        value: Option<&str>,
    ) -> Result<(), RequestError> {
        match value {
            Some(v) => self.set_header(name, v),
            None => Ok(()),
        }
    }

    /// Decoder-driven Accept. Leaves an Accept the endpoint set or removed alone.
    pub fn ensure_accept(&mut self, ct: &'static str) {
        if ct.is_empty() || self.accept_explicit {
            return;
        }
        self.headers.insert(ACCEPT, HeaderValue::from_static(ct));
    }

    /// Appends, duplicates allowed.
    pub fn push_query(&mut self, key: &str, value: impl Into<String>) {
        self.query.push((key.to_string(), value.into()));
    }

    pub fn push_query_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.push_query(key, v.to_string());
        }
    }

    pub fn into_parts(self) -> (HeaderMap, Vec<(String, String)>, Option<Duration>) {
        (self.headers, self.query, self.timeout)
    }
}
