use crate::codec::{ContentType, Decodes, Format, FormatType};
use bytes::Bytes;
use std::str::Utf8Error;

pub struct Text;

impl ContentType for Text {
    const CONTENT_TYPE: &'static str = "text/plain";
}

impl FormatType for Text {
    const FORMAT_TYPE: Format = Format::Text;
}

impl Decodes<String> for Text {
    type Error = Utf8Error;
    fn decode(bytes: &Bytes) -> Result<String, Self::Error> {
        Ok(std::str::from_utf8(bytes)?.to_string())
    }
}
