use crate::client::ApiClient;
use crate::debug::DebugLevel;
use crate::endpoint::{Endpoint, ResponseSpec};
use crate::error::ApiClientError;
use crate::policy::Policy;
use crate::transport::{DecodedResponse, Transport};
use core::future::IntoFuture;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Per-request timeout override.
///
/// - `Inherit`: keep the timeout from the client configuration.
/// - `Clear`: no timeout for this request.
/// - `Set(d)`: force `d` for this request.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TimeoutOverride {
    #[default]
    Inherit,
    Clear,
    Set(Duration),
}

impl TimeoutOverride {
    pub(crate) fn apply(self, policy: &mut Policy) {
        match self {
            TimeoutOverride::Inherit => {}
            TimeoutOverride::Clear => policy.set_timeout(None),
            TimeoutOverride::Set(d) => policy.set_timeout(Some(d)),
        }
    }
}

pub struct PendingRequest<'a, E: Endpoint, T: Transport> {
    client: &'a ApiClient<T>,
    ep: E,
    debug_level: Option<DebugLevel>,
    timeout_override: TimeoutOverride,
}

impl<'a, E: Endpoint, T: Transport> PendingRequest<'a, E, T> {
    #[inline]
    pub(crate) fn new(client: &'a ApiClient<T>, ep: E) -> Self {
        Self {
            client,
            ep,
            debug_level: None,
            timeout_override: TimeoutOverride::Inherit,
        }
    }

    #[inline]
    pub fn debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_level = Some(level);
        self
    }

    #[inline]
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout_override = TimeoutOverride::Set(d);
        self
    }

    #[inline]
    pub fn clear_timeout(mut self) -> Self {
        self.timeout_override = TimeoutOverride::Clear;
        self
    }

    #[inline]
    pub async fn execute(self) -> Result<<E::Response as ResponseSpec>::Output, ApiClientError> {
        Ok(self.execute_decoded().await?.value)
    }

    /// Like [`PendingRequest::execute`], keeping status, headers and (when
    /// the client restores bodies) the raw body.
    pub async fn execute_decoded(
        self,
    ) -> Result<DecodedResponse<<E::Response as ResponseSpec>::Output>, ApiClientError> {
        let dbg = self.debug_level.unwrap_or(self.client.debug_level());
        self.client
            .execute_decoded_with(self.ep, dbg, self.timeout_override)
            .await
    }
}

impl<'a, E, T> IntoFuture for PendingRequest<'a, E, T>
where
    E: Endpoint,
    T: Transport,
{
    type Output = Result<<E::Response as ResponseSpec>::Output, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.execute().await })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timeout_override_applies_to_policy() {
        let mut p = Policy::new();
        p.set_timeout(Some(Duration::from_secs(30)));

        TimeoutOverride::Inherit.apply(&mut p);
        assert_eq!(p.timeout(), Some(Duration::from_secs(30)));

        TimeoutOverride::Set(Duration::from_secs(2)).apply(&mut p);
        assert_eq!(p.timeout(), Some(Duration::from_secs(2)));

        TimeoutOverride::Clear.apply(&mut p);
        assert_eq!(p.timeout(), None);
    }
}
