/// URL path builder (UTF-8, '/' separator).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlPath {
    inner: String,
}

impl UrlPath {
    pub fn new() -> Self {
        Self {
            inner: "/".to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        if self.inner.is_empty() {
            "/"
        } else {
            self.inner.as_str()
        }
    }

    /// Appends a static route literal. May contain '/'; never use it with
    /// caller data, use [`UrlPath::push_segment`] instead.
    pub fn push_raw(&mut self, piece: &str) {
        let piece = piece.trim();
        if piece.is_empty() || piece == "/" {
            return;
        }

        if self.inner.is_empty() {
            self.inner.push('/');
        } else if !self.inner.starts_with('/') {
            self.inner.insert(0, '/');
        }

        let left_slash = self.inner.ends_with('/');
        let right_slash = piece.starts_with('/');

        match (left_slash, right_slash) {
            (true, true) => {
                self.inner.pop();
                self.inner.push_str(piece);
            }
            (false, false) => {
                self.inner.push('/');
                self.inner.push_str(piece);
            }
            _ => {
                self.inner.push_str(piece);
            }
        }

        if self.inner.len() > 1 && self.inner.ends_with('/') {
            self.inner.pop();
        }
    }

    /// Encodes everything outside RFC 3986 `pchar`. Identifiers made of
    /// unreserved characters, sub-delims, ':' and '@' (URNs in particular)
    /// come out unchanged.
    fn percent_encode_path_segment(seg: &str) -> String {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let bytes = seg.as_bytes();
        let mut out = String::with_capacity(bytes.len());
        for &b in bytes {
            let pchar = matches!(
              b,
              b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
                | b'-' | b'.' | b'_' | b'~'
                | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
                | b':' | b'@'
            );
            if pchar {
                out.push(b as char);
            } else {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0F) as usize] as char);
            }
        }
        out
    }

    /// Appends one dynamic segment; a '/' inside `seg` is encoded, never a separator.
    /// A segment of only `.` or `..` has its dots encoded as `%2E`.
    pub fn push_segment(&mut self, seg: &str) {
        if seg.is_empty() {
            return;
        }
        let enc = if is_dot_segment(seg) {
            seg.replace('.', "%2E")
        } else {
            Self::percent_encode_path_segment(seg)
        };
        self.push_raw(&enc);
    }

    #[inline]
    pub fn with_raw(mut self, piece: &str) -> Self {
        self.push_raw(piece);
        self
    }

    #[inline]
    pub fn with_segment(mut self, seg: &str) -> Self {
        self.push_segment(seg);
        self
    }

    pub fn into_string(self) -> String {
        if self.inner.is_empty() {
            "/".to_string()
        } else {
            self.inner
        }
    }
}

fn is_dot_segment(seg: &str) -> bool {
    seg == "." || seg == ".."
}

/// True when a URL parser would drop or collapse a segment of `path`.
/// Percent-encoded dots count, as they do for WHATWG URL parsing.
pub(crate) fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|seg| {
        let seg = seg.to_ascii_lowercase().replace("%2e", ".");
        is_dot_segment(&seg)
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_url_path_push() {
        let mut p = UrlPath::new();
        assert_eq!(p.as_str(), "/");

        p.push_raw("1/artifacts");
        assert_eq!(p.as_str(), "/1/artifacts");

        p.push_raw("/abc");
        assert_eq!(p.as_str(), "/1/artifacts/abc");

        p.push_raw(".collections/");
        assert_eq!(p.as_str(), "/1/artifacts/abc/.collections");
    }

    #[test]
    fn urns_are_left_literal() {
        let p = UrlPath::new()
            .with_raw("1/artifacts")
            .with_segment("urn:ivcap:artifact:0b2c-11@x");
        assert_eq!(p.as_str(), "/1/artifacts/urn:ivcap:artifact:0b2c-11@x");
    }

    #[test]
    fn separators_and_spaces_are_encoded() {
        let p = UrlPath::new()
            .with_raw("1/orders")
            .with_segment("a/b c?d#e%f");
        assert_eq!(p.as_str(), "/1/orders/a%2Fb%20c%3Fd%23e%25f");
    }

    #[test]
    fn non_ascii_is_encoded_per_byte() {
        let p = UrlPath::new().with_segment("é");
        assert_eq!(p.into_string(), "/%C3%A9");
    }

    #[test]
    fn dot_segments_stay_one_segment() {
        let p = UrlPath::new()
            .with_raw("1/artifacts")
            .with_segment("a1")
            .with_raw(".collections")
            .with_segment("..");
        assert_eq!(p.as_str(), "/1/artifacts/a1/.collections/%2E%2E");
        assert_eq!(UrlPath::new().with_segment(".").into_string(), "/%2E");
    }

    #[test]
    fn detects_dot_segments() {
        assert!(has_dot_segment("/1/artifacts/.."));
        assert!(has_dot_segment("/1/artifacts/%2E%2E"));
        assert!(has_dot_segment("/1/%2e/x"));
        assert!(!has_dot_segment("/1/artifacts/a1/.collections"));
        assert!(!has_dot_segment("/1/artifacts/a..b"));
        assert!(!has_dot_segment("/"));
    }
}
