//! Transport primitives for signed market data requests.
//!
//! The module exposes [`ApiHttpClient`] so downstream crates can plug in their own HTTP stack.
//! The executor only needs one capability from a transport: send a `GET` with a bearer
//! credential and hand back the status plus the complete body. Status interpretation and JSON
//! decoding stay in the executor so every transport classifies failures the same way.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, auth::BearerToken, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`ApiHttpClient::get`].
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Outbound `GET` request.
#[derive(Clone)]
pub struct HttpRequest {
	/// Fully resolved URL including the query string.
	pub url: Url,
	/// Credential sent as `Authorization: Bearer <token>`.
	pub credential: BearerToken,
}
impl Debug for HttpRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HttpRequest")
			.field("url", &self.url.as_str())
			.field("credential", &"<redacted>")
			.finish()
	}
}

/// Status and fully-read body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports able to issue authenticated `GET` requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by many
/// clients behind an [`Arc`]. Any status, including non-2xx, is a successful exchange at this
/// layer; only failures to obtain a complete response map to [`TransportError`].
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves once the full body has been read.
	fn get(&self, request: HttpRequest) -> HttpFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	///
	/// The caller owns timeout and TLS configuration of the wrapped client.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose overall per-request timeout is `timeout`.
	pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn get(&self, request: HttpRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			let response = self
				.0
				.get(request.url)
				.bearer_auth(request.credential.expose())
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(|e| {
				if e.is_timeout() { TransportError::timeout(e) } else { TransportError::body(e) }
			})?;

			Ok(HttpResponse { status, body: body.to_vec() })
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_debug_redacts_credential() {
		let request = HttpRequest {
			url: Url::parse("https://example.com/md/1.0/types").expect("URL should parse."),
			credential: BearerToken::new("header.claims.tag".into()),
		};
		let rendered = format!("{request:?}");

		assert!(rendered.contains("https://example.com/md/1.0/types"));
		assert!(!rendered.contains("header.claims.tag"));
	}

	#[test]
	fn with_timeout_builds_client() {
		assert!(ReqwestHttpClient::with_timeout(std::time::Duration::from_secs(1)).is_ok());
	}
}
