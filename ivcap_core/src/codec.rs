use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use bytes::Bytes;

pub(crate) mod json;
pub(crate) mod text;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Binary,
    Text,
}

pub trait FormatType {
    const FORMAT_TYPE: Format;
}

/// Preview of a body for debug output: text is shown lossily, binary as base64.
pub(crate) fn format_bytes_for_debug(format: Format, bytes: &[u8], max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let (s0, slice_len) = match format {
        Format::Text => {
            // A char is at most 4 UTF-8 bytes.
            let slice_len = bytes.len().min(max_chars.saturating_mul(4).max(1));
            (String::from_utf8_lossy(&bytes[..slice_len]).to_string(), slice_len)
        }
        Format::Binary => {
            // base64: 3 bytes -> 4 chars.
            let slice_len = bytes.len().min(max_chars.saturating_mul(3).div_ceil(4).max(1));
            (STANDARD_NO_PAD.encode(&bytes[..slice_len]), slice_len)
        }
    };
    let mut s = truncate_for_debug(&s0, max_chars);
    if slice_len < bytes.len() && !s.ends_with('…') {
        s.push('…');
    }
    s
}

pub(crate) fn truncate_for_debug(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let mut it = s.chars();
    let mut out = String::new();
    for _ in 0..max_chars {
        match it.next() {
            Some(c) => out.push(c),
            None => return out,
        }
    }
    if it.next().is_some() {
        out.push('…');
    }
    out
}

pub trait ContentType {
    /// "" means no relevant Content-Type/Accept.
    const CONTENT_TYPE: &'static str;
}

pub trait Decodes<T>: ContentType + FormatType {
    type Error: std::error::Error + Send + Sync + 'static;
    fn decode(bytes: &Bytes) -> Result<T, Self::Error>;
}

pub trait Encodes<T>: ContentType + FormatType {
    type Error: std::error::Error + Send + Sync + 'static;
    fn encode(output: &T) -> Result<Bytes, Self::Error>;
}

pub struct NoContent;

impl ContentType for NoContent {
    const CONTENT_TYPE: &'static str = "";
}

impl FormatType for NoContent {
    const FORMAT_TYPE: Format = Format::Text;
}

impl Decodes<()> for NoContent {
    type Error = std::convert::Infallible;
    fn decode(_bytes: &Bytes) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_preview_is_truncated_with_ellipsis() {
        let s = format_bytes_for_debug(Format::Text, b"hello world", 5);
        assert_eq!(s, "hello…");
        assert_eq!(format_bytes_for_debug(Format::Text, b"hi", 5), "hi");
    }

    #[test]
    fn binary_preview_is_base64() {
        assert_eq!(format_bytes_for_debug(Format::Binary, &[0, 1, 2], 64), "AAEC");
        assert_eq!(format_bytes_for_debug(Format::Binary, &[0, 1, 2], 0), "");
    }
}
