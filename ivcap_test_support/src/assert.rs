use crate::mock::RecordedRequest;
use http::header::HeaderName;
use std::collections::BTreeSet;
use std::fmt::Write as _;

pub struct RequestAssert<'a> {
    req: &'a RecordedRequest,
}

pub fn assert_request(req: &RecordedRequest) -> RequestAssert<'_> {
    RequestAssert { req }
}

impl<'a> RequestAssert<'a> {
    pub fn operation(self, service: &str, method: &str) -> Self {
        let got = (self.req.meta.service, self.req.meta.operation);
        if got != (service, method) {
            panic!(
                "operation mismatch\n  expected: {service}.{method}\n  got: {}.{}\n  url: {}",
                got.0, got.1, self.req.url
            );
        }
        self
    }

    pub fn method(self, expected: http::Method) -> Self {
        if self.req.meta.method != expected {
            panic!(
                "HTTP method mismatch\n  expected: {expected}\n  got: {}\n  url: {}",
                self.req.meta.method, self.req.url
            );
        }
        self
    }

    pub fn host(self, expected: &str) -> Self {
        let got = self.req.url.host_str().unwrap_or("");
        if got != expected {
            panic!(
                "host mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }

    pub fn path(self, expected: &str) -> Self {
        let got = self.req.url.path();
        if got != expected {
            panic!(
                "path mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }

    pub fn timeout(self, expected: Option<std::time::Duration>) -> Self {
        let got = self.req.timeout;
        if got != expected {
            panic!(
                "timeout mismatch\n  expected: {:?}\n  got: {:?}\n  url: {}",
                expected, got, self.req.url
            );
        }
        self
    }

    pub fn body_present(self) -> Self {
        if self.req.body.is_none() {
            panic!("expected body present, but body=None\nurl: {}", self.req.url);
        }
        self
    }

    pub fn body_absent(self) -> Self {
        if self.req.body.is_some() {
            panic!("expected body absent, but body=Some(..)\nurl: {}", self.req.url);
        }
        self
    }

    pub fn body_eq(self, expected: &[u8]) -> Self {
        match self.req.body.as_deref() {
            Some(got) if got == expected => {}
            got => panic!(
                "body mismatch\n  expected: {:?}\n  got: {:?}\n  url: {}",
                String::from_utf8_lossy(expected),
                got.map(String::from_utf8_lossy),
                self.req.url
            ),
        }
        self
    }

    /// Compares the body as JSON, ignoring key order and whitespace.
    pub fn body_json(self, expected: serde_json::Value) -> Self {
        let got: serde_json::Value = match self.req.body.as_deref() {
            Some(b) => serde_json::from_slice(b)
                .unwrap_or_else(|e| panic!("body is not JSON ({e})\n  url: {}", self.req.url)),
            None => panic!("expected JSON body, but body=None\nurl: {}", self.req.url),
        };
        if got != expected {
            panic!(
                "JSON body mismatch\n  expected: {expected}\n  got: {got}\n  url: {}",
                self.req.url
            );
        }
        self
    }

    pub fn streamed(self) -> Self {
        if !self.req.streamed {
            panic!("expected a streamed body\nurl: {}", self.req.url);
        }
        self
    }

    pub fn header(self, name: impl IntoHeaderName, expected: &str) -> Self {
        let name = name.into_header_name();
        let got = self.req.headers.get(&name).and_then(|v| v.to_str().ok());
        match got {
            Some(v) if v == expected => {}
            Some(v) => {
                panic!(
                    "header mismatch\n  header: {}\n  expected: {}\n  got: {}\n  url: {}",
                    name, expected, v, self.req.url
                );
            }
            None => {
                panic!(
                    "missing header\n  header: {}\n  expected: {}\n  url: {}",
                    name, expected, self.req.url
                );
            }
        }
        self
    }

    pub fn header_absent(self, name: impl IntoHeaderName) -> Self {
        let name = name.into_header_name();
        if self.req.headers.contains_key(&name) {
            let got = self.req.headers.get(&name).and_then(|v| v.to_str().ok());
            panic!(
                "expected header absent\n  header: {}\n  got: {:?}\n  url: {}",
                name, got, self.req.url
            );
        }
        self
    }

    pub fn query_has(self, key: &str, expected_value: &str) -> Self {
        let pairs = self.query_pairs();
        if !pairs.iter().any(|(k, v)| k == key && v == expected_value) {
            panic!(
                "missing query pair\n  expected: {}={}\n  got: {}\n  url: {}",
                key,
                expected_value,
                format_pairs(&pairs),
                self.req.url
            );
        }
        self
    }

    pub fn query_absent(self, key: &str) -> Self {
        let pairs = self.query_pairs();
        if pairs.iter().any(|(k, _)| k == key) {
            panic!(
                "expected query key absent\n  key: {}\n  got: {}\n  url: {}",
                key,
                format_pairs(&pairs),
                self.req.url
            );
        }
        self
    }

    pub fn query_keys_exact(self, expected_keys: &[&str]) -> Self {
        let pairs = self.query_pairs();
        let got: BTreeSet<String> = pairs.iter().map(|(k, _)| k.clone()).collect();
        let exp: BTreeSet<String> = expected_keys.iter().map(|s| s.to_string()).collect();
        if got != exp {
            panic!(
                "query key-set mismatch\n  expected: {:?}\n  got: {:?}\n  all: {}\n  url: {}",
                exp,
                got,
                format_pairs(&pairs),
                self.req.url
            );
        }
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        self.req
            .url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

pub trait IntoHeaderName {
    fn into_header_name(self) -> HeaderName;
}

impl IntoHeaderName for HeaderName {
    fn into_header_name(self) -> HeaderName {
        self
    }
}

impl IntoHeaderName for &'static HeaderName {
    fn into_header_name(self) -> HeaderName {
        self.clone()
    }
}

impl IntoHeaderName for &'static str {
    fn into_header_name(self) -> HeaderName {
        HeaderName::from_bytes(self.as_bytes()).unwrap_or_else(|_| {
            panic!("invalid header name literal: {:?}", self);
        })
    }
}

fn format_pairs(pairs: &[(String, String)]) -> String {
    let mut s = String::new();
    for (i, (k, v)) in pairs.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        let _ = write!(s, "{}={}", k, v);
    }
    s
}
