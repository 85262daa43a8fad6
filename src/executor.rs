//! Signed request execution and response classification.
//!
//! [`RequestExecutor::call`] is the single path every endpoint goes through:
//!
//! 1. Resolve the endpoint URL from the configured base, the percent-encoded path segments, and
//!    the query parameters. Empty, `.` and `..` segments are rejected here.
//! 2. Mint a fresh credential for the request's scope. A failure in either step returns before
//!    any network traffic.
//! 3. Issue one `GET` with `Authorization: Bearer <token>` through the [`ApiHttpClient`].
//! 4. Status 200 decodes the body as JSON into the caller's type; any other status returns
//!    [`ApiError`] with the body text verbatim.
//!
//! There are no retries, redirects beyond what the transport performs, or caching.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::TokenSigner,
	config::ApiConfig,
	error::{ApiError, DecodeError},
	http::{ApiHttpClient, HttpRequest},
	obs::{self, CallOutcome, CallSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Endpoint address plus the scope its credential must carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	scope: String,
	segments: Vec<String>,
	query: BTreeMap<String, String>,
}
impl ApiRequest {
	/// Starts a request whose credential audience is `scope`.
	pub fn new(scope: impl AsRef<str>) -> Self {
		Self { scope: scope.as_ref().to_owned(), segments: Vec::new(), query: BTreeMap::new() }
	}

	/// Appends one path segment; reserved characters are percent-encoded when the URL is built.
	pub fn segment(mut self, segment: impl Into<String>) -> Self {
		self.segments.push(segment.into());

		self
	}

	/// Adds one query parameter.
	pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(key.into(), value.into());

		self
	}

	/// Merges a set of query parameters.
	pub fn params(mut self, params: BTreeMap<String, String>) -> Self {
		self.query.extend(params);

		self
	}

	/// Scope the credential is bound to.
	pub fn scope(&self) -> &str {
		&self.scope
	}

	/// Unencoded path segments.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Query parameters in wire order.
	pub fn query_params(&self) -> &BTreeMap<String, String> {
		&self.query
	}

	/// Human-readable path label used for spans, e.g. `/symbols/AAPL.NASDAQ`.
	pub fn path(&self) -> String {
		let mut path = String::new();

		for segment in &self.segments {
			path.push('/');
			path.push_str(segment);
		}

		if path.is_empty() { "/".into() } else { path }
	}
}

#[cfg(feature = "reqwest")]
/// Executor specialized for the crate's default reqwest transport.
pub type ReqwestExecutor = RequestExecutor<ReqwestHttpClient>;

/// Executes signed `GET` requests against one configured API origin.
pub struct RequestExecutor<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Endpoint configuration.
	pub config: Arc<ApiConfig>,
	/// Credential minting state.
	pub signer: Arc<TokenSigner>,
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
}
impl<C> RequestExecutor<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates an executor over the caller-provided transport.
	pub fn new(
		config: impl Into<Arc<ApiConfig>>,
		signer: impl Into<Arc<TokenSigner>>,
		http_client: Arc<C>,
	) -> Self {
		Self { config: config.into(), signer: signer.into(), http_client }
	}

	/// Performs one signed `GET` and decodes a 200 body into `T`.
	pub async fn call<T>(&self, request: &ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let scope = request.scope();
		let span = CallSpan::new(scope, &request.path());

		obs::record_call_outcome(scope, CallOutcome::Attempt);

		let result: Result<T> = span
			.instrument(async {
				let url = self.config.endpoint_url(request.segments(), request.query_params())?;
				let credential = self.signer.sign(scope)?;
				let response = self
					.http_client
					.get(HttpRequest { url, credential: credential.token })
					.await?;

				span.record_status(response.status);

				if response.status != 200 {
					return Err(ApiError {
						status: response.status,
						body: String::from_utf8_lossy(&response.body).into_owned(),
					}
					.into());
				}

				decode(&response.body).map_err(Error::from)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(scope, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(scope, CallOutcome::Failure),
		}

		result
	}
}
impl<C> Clone for RequestExecutor<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			signer: self.signer.clone(),
			http_client: self.http_client.clone(),
		}
	}
}
impl<C> Debug for RequestExecutor<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestExecutor")
			.field("base_url", &self.config.base_url.as_str())
			.field("client_id", self.signer.client_id())
			.finish()
	}
}

/// Decodes a complete JSON document into `T`, reporting the path of the first mismatch.
///
/// Trailing non-whitespace after the document is rejected.
pub fn decode<T>(body: &[u8]) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);
	let value = serde_path_to_error::deserialize(&mut de)?;

	de.end().map_err(|source| DecodeError::Shape { path: ".".into(), source })?;

	Ok(value)
}
