use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use ivcap_core::transport::*;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub meta: RequestMeta,
    pub url: url::Url,
    pub headers: HeaderMap,
    /// Streamed bodies are drained into memory when recorded.
    pub body: Option<Bytes>,
    pub streamed: bool,
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct MockReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// When set, `send` fails with this message instead of answering.
    pub transport_error: Option<String>,
}

impl MockReply {
    pub fn json(status: StatusCode, body: Bytes) -> Self {
        Self::status(status).with_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )
        .with_body(body)
    }

    pub fn ok_json(body: Bytes) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn ok_text(body: Bytes) -> Self {
        Self::status(StatusCode::OK)
            .with_header(http::header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .with_body(body)
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            transport_error: None,
        }
    }

    /// A gateway error response carrying the `goa-error` discriminator.
    pub fn goa_error(status: StatusCode, name: &'static str, body: Bytes) -> Self {
        Self::json(status, body).with_header(
            http::header::HeaderName::from_static("goa-error"),
            HeaderValue::from_static(name),
        )
    }

    pub fn transport_error(msg: impl Into<String>) -> Self {
        Self {
            transport_error: Some(msg.into()),
            ..Self::status(StatusCode::OK)
        }
    }

    pub fn with_header(mut self, name: http::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

struct OneShotBody {
    chunk: Option<Bytes>,
    reads: Arc<AtomicUsize>,
}

impl TransportBody for OneShotBody {
    fn next_chunk<'a>(
        &'a mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Bytes>, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            if self.chunk.is_some() {
                self.reads.fetch_add(1, Ordering::SeqCst);
            }
            Ok(self.chunk.take())
        })
    }
}

#[derive(Debug)]
struct MockState {
    recorded: Mutex<Vec<RecordedRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
    body_reads: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub struct MockTransport {
    st: Arc<MockState>,
}

pub struct MockHandle {
    st: Arc<MockState>,
    finished: bool,
}

#[derive(Default)]
pub struct MockBuilder {
    replies: Vec<MockReply>,
}

impl MockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, r: MockReply) -> Self {
        self.replies.push(r);
        self
    }

    pub fn replies(mut self, rs: impl IntoIterator<Item = MockReply>) -> Self {
        self.replies.extend(rs);
        self
    }

    pub fn build(self) -> (MockTransport, MockHandle) {
        let st = Arc::new(MockState {
            recorded: Mutex::new(Vec::new()),
            replies: Mutex::new(self.replies.into_iter().collect()),
            body_reads: Arc::new(AtomicUsize::new(0)),
        });
        (
            MockTransport { st: st.clone() },
            MockHandle {
                st,
                finished: false,
            },
        )
    }
}

pub fn mock() -> MockBuilder {
    MockBuilder::new()
}

impl MockHandle {
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.st.recorded.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.st
            .recorded
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    pub fn recorded_len(&self) -> usize {
        self.st.recorded.lock().unwrap().len()
    }

    pub fn assert_recorded_len(&self, expected: usize) {
        let got = self.recorded_len();
        if got != expected {
            let reqs = self.recorded();
            panic!(
                "recorded request count mismatch\n  expected: {expected}\n  got: {got}\n  recorded:\n{:#?}",
                reqs
            );
        }
    }

    /// Number of non-empty reply bodies the client actually read.
    pub fn body_reads(&self) -> usize {
        self.st.body_reads.load(Ordering::SeqCst)
    }

    pub fn assert_no_remaining_replies(&self) {
        let left = self.st.replies.lock().unwrap().len();
        if left != 0 {
            panic!("mock replies not fully consumed: remaining={left}");
        }
    }

    pub fn finish(mut self) {
        self.assert_no_remaining_replies();
        self.finished = true;
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        if self.finished || std::thread::panicking() {
            return;
        }
        let left = self.st.replies.lock().unwrap().len();
        if left != 0 {
            panic!("mock replies not fully consumed (drop): remaining={left}");
        }
    }
}

impl Transport for MockTransport {
    fn send<'a>(
        &'a self,
        req: BuiltRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>> {
        let st = self.st.clone();
        Box::pin(async move {
            let BuiltRequest {
                meta,
                url,
                headers,
                body,
                timeout,
            } = req;
            let (body, streamed) = match body {
                RequestBody::Empty => (None, false),
                RequestBody::Bytes { bytes, .. } => (Some(bytes), false),
                RequestBody::Stream(s) => (Some(s.collect().await?), true),
            };
            st.recorded.lock().unwrap().push(RecordedRequest {
                meta,
                url,
                headers,
                body,
                streamed,
                timeout,
            });

            let reply = {
                let mut g = st.replies.lock().unwrap();
                g.pop_front().unwrap_or_else(|| {
                    let last = st.recorded.lock().unwrap().last().cloned();
                    panic!(
                        "MockTransport: no more scripted replies, but send() was called.\nlast_request={:#?}",
                        last
                    );
                })
            };
            if let Some(msg) = reply.transport_error {
                return Err(TransportError::msg(msg));
            }

            Ok(TransportResponse {
                status: reply.status,
                headers: reply.headers,
                body: Box::new(OneShotBody {
                    chunk: (!reply.body.is_empty()).then_some(reply.body),
                    reads: st.body_reads.clone(),
                }),
            })
        })
    }
}
