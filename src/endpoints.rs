//! Typed endpoint wrappers over the request executor.
//!
//! Each wrapper names its path and scope explicitly and returns the decoded domain entity; the
//! wrappers add no behavior of their own beyond routing.

mod exchanges;
mod groups;
mod ohlc;
mod symbols;
mod types;

// self
use crate::{
	_prelude::*,
	auth::TokenSigner,
	config::ApiConfig,
	executor::RequestExecutor,
	http::ApiHttpClient,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestMarketDataClient = MarketDataClient<ReqwestHttpClient>;

/// Read-only market data client.
///
/// Cloning is cheap; clones share configuration, signer, and transport.
pub struct MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	executor: RequestExecutor<C>,
}
impl<C> MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// The transport owns its timeout; [`ApiConfig::request_timeout`] is only applied by
	/// [`MarketDataClient::new`].
	pub fn with_http_client(
		config: impl Into<Arc<ApiConfig>>,
		signer: impl Into<Arc<TokenSigner>>,
		http_client: Arc<C>,
	) -> Self {
		Self { executor: RequestExecutor::new(config, signer, http_client) }
	}

	/// Wraps an existing executor.
	pub fn from_executor(executor: RequestExecutor<C>) -> Self {
		Self { executor }
	}

	/// Executor backing this client, for endpoints without a typed wrapper.
	pub fn executor(&self) -> &RequestExecutor<C> {
		&self.executor
	}
}
#[cfg(feature = "reqwest")]
impl MarketDataClient<ReqwestHttpClient> {
	/// Creates a client with its own reqwest transport bounded by the configured timeout.
	pub fn new(config: ApiConfig, signer: TokenSigner) -> Result<Self> {
		let http_client = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout)?);

		Ok(Self::with_http_client(config, signer, http_client))
	}
}
impl<C> Clone for MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self { executor: self.executor.clone() }
	}
}
impl<C> Debug for MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MarketDataClient").field("executor", &self.executor).finish()
	}
}
