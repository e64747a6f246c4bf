use crate::codec::Format;
use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, Stream, StreamExt, TryStreamExt};
use http::{HeaderMap, Method, StatusCode};
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use url::Url;

#[derive(Clone, Debug)]
pub struct RequestMeta {
    /// Gateway service (`artifact`, `order`, ...).
    pub service: &'static str,
    /// Operation within the service (`list`, `upload`, ...).
    pub operation: &'static str,
    pub method: Method,
}

impl fmt::Display for RequestMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.operation)
    }
}

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, io::Error>> + Send + 'static>>;

/// Request payload handed to the transport without buffering.
pub struct BodyStream {
    inner: ByteStream,
}

impl BodyStream {
    pub fn new<S>(s: S) -> Self
    where
        S: Stream<Item = Result<Bytes, io::Error>> + Send + 'static,
    {
        Self { inner: Box::pin(s) }
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self::new(stream::once(async move { Ok(bytes) }))
    }

    /// Reads `r` in chunks of at most 64 KiB until EOF.
    pub fn from_reader<R>(r: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        const CHUNK: usize = 64 * 1024;
        Self::new(stream::unfold(Some(r), |state| async move {
            let mut r = state?;
            let mut buf = BytesMut::with_capacity(CHUNK);
            match r.read_buf(&mut buf).await {
                Ok(0) => None,
                Ok(_) => Some((Ok(buf.freeze()), Some(r))),
                // Stop after the first error.
                Err(e) => Some((Err(e), None)),
            }
        }))
    }

    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = tokio::fs::File::open(path).await?;
        Ok(Self::from_reader(file))
    }

    pub fn into_inner(self) -> ByteStream {
        self.inner
    }

    /// Drains the stream into memory.
    pub async fn collect(self) -> io::Result<Bytes> {
        let buf = self
            .inner
            .try_fold(BytesMut::new(), |mut acc, chunk| async move {
                acc.extend_from_slice(&chunk);
                Ok(acc)
            })
            .await?;
        Ok(buf.freeze())
    }

    pub async fn next_chunk(&mut self) -> Option<io::Result<Bytes>> {
        self.inner.next().await
    }
}

impl fmt::Debug for BodyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BodyStream")
    }
}

#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Bytes {
        bytes: Bytes,
        content_type: &'static str,
        format: Format,
    },
    Stream(BodyStream),
}

impl RequestBody {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

#[derive(Debug)]
pub struct BuiltRequest {
    pub meta: RequestMeta,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct DecodedResponse<T> {
    pub meta: RequestMeta,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub value: T,
    /// Raw response body, kept only when the client restores bodies.
    pub raw_body: Option<Bytes>,
}

#[derive(Debug)]
pub struct TransportError(crate::error::FxError);

impl TransportError {
    #[inline]
    pub fn new(e: impl Error + Send + Sync + 'static) -> Self {
        Self(Box::new(e))
    }

    pub fn msg(msg: impl Into<String>) -> Self {
        Self(msg.into().into())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e)
    }
}

impl From<io::Error> for TransportError {
    fn from(e: io::Error) -> Self {
        Self::new(e)
    }
}

pub trait TransportBody: Send + 'static {
    fn next_chunk<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Bytes>, TransportError>> + Send + 'a>>;
}

pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Box<dyn TransportBody>,
}

/// Injectable transport layer.
///
/// Takes the request by value: a streamed body can only be sent once.
/// Timeouts and cancellation are the transport's business.
pub trait Transport: Send + Sync + 'static {
    fn send<'a>(
        &'a self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[inline]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    #[inline]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

struct ReqwestBody {
    resp: reqwest::Response,
}

impl TransportBody for ReqwestBody {
    fn next_chunk<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Bytes>, TransportError>> + Send + 'a>> {
        Box::pin(async move { self.resp.chunk().await.map_err(TransportError::from) })
    }
}

impl Transport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            let BuiltRequest {
                meta,
                url,
                headers,
                body,
                timeout,
            } = req;
            let mut rb = self.client.request(meta.method, url).headers(headers);
            match body {
                RequestBody::Empty => {}
                RequestBody::Bytes { bytes, .. } => rb = rb.body(bytes),
                RequestBody::Stream(s) => rb = rb.body(reqwest::Body::wrap_stream(s.into_inner())),
            }
            if let Some(t) = timeout {
                rb = rb.timeout(t);
            }
            let resp = rb.send().await?;
            let status = resp.status();
            let headers = resp.headers().clone();
            Ok(TransportResponse {
                status,
                headers,
                body: Box::new(ReqwestBody { resp }),
            })
        })
    }
}

pub(crate) async fn read_body_all(body: &mut dyn TransportBody) -> Result<Bytes, TransportError> {
    let mut buf = BytesMut::with_capacity(8 * 1024);
    while let Some(chunk) = body.next_chunk().await? {
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn reader_stream_yields_all_bytes() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let s = BodyStream::from_reader(std::io::Cursor::new(data.clone()));
        assert_eq!(s.collect().await.unwrap(), Bytes::from(data));
    }

    #[tokio::test]
    async fn reader_stream_is_chunked() {
        let data = vec![7u8; 150 * 1024];
        let mut s = BodyStream::from_reader(std::io::Cursor::new(data));
        let mut sizes = Vec::new();
        while let Some(chunk) = s.next_chunk().await {
            sizes.push(chunk.unwrap().len());
        }
        assert!(sizes.len() >= 3);
        assert!(sizes.iter().all(|n| *n <= 64 * 1024));
        assert_eq!(sizes.iter().sum::<usize>(), 150 * 1024);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = BodyStream::from_path("/definitely/not/here.bin")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
