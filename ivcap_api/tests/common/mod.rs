use http::uri::Scheme;
use ivcap_api::IvcapClient;
use ivcap_core::prelude::{ClientConfig, NoopDebugSink};
use ivcap_test_support::{MockHandle, MockReply, MockTransport, mock};

pub const JWT: &str = "eyJhbGciOiJSUzI1NiJ9.test.sig";

#[allow(unused)]
pub fn config() -> ClientConfig {
    ClientConfig::new(Scheme::HTTP, "gw.test:8080")
}

#[allow(unused)]
pub fn client_with(
    config: ClientConfig,
    replies: impl IntoIterator<Item = MockReply>,
) -> (IvcapClient<MockTransport>, MockHandle) {
    let (transport, handle) = mock().replies(replies).build();
    let client = IvcapClient::with_transport(config, transport).with_debug_sink(NoopDebugSink);
    (client, handle)
}

#[allow(unused)]
pub fn client(
    replies: impl IntoIterator<Item = MockReply>,
) -> (IvcapClient<MockTransport>, MockHandle) {
    client_with(config(), replies)
}
