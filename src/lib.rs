//! Typed client for the EXANTE market data REST API: per-call HS256 credentials, one signed GET
//! per operation, and millisecond timestamps decoded into whole-second instants.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod executor;
pub mod http;
pub mod model;
pub mod obs;
pub mod timestamp;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::TokenSigner,
		config::ApiConfig,
		endpoints::{MarketDataClient, ReqwestMarketDataClient},
		http::ReqwestHttpClient,
	};

	/// Client identifier used by test signers.
	pub const TEST_CLIENT_ID: &str = "test-client";
	/// Application identifier used by test signers.
	pub const TEST_APPLICATION_ID: &str = "test-application";
	/// Shared key used by test signers.
	pub const TEST_SHARED_KEY: &str = "test-shared-key";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.timeout(std::time::Duration::from_secs(5))
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Signer built from the fixed test credentials.
	pub fn test_signer() -> TokenSigner {
		TokenSigner::new(TEST_CLIENT_ID, TEST_APPLICATION_ID, TEST_SHARED_KEY)
			.expect("Test signer should build.")
	}

	/// Constructs a [`MarketDataClient`] whose base URL points at `base_url` (typically
	/// `server.url("/md/1.0")` from an `httpmock` server) using the insecure test transport.
	pub fn build_reqwest_test_client(base_url: impl Into<String>) -> ReqwestMarketDataClient {
		let config = ApiConfig::builder()
			.base_url(base_url)
			.build()
			.expect("Test configuration should validate.");

		MarketDataClient::with_http_client(
			config,
			test_signer(),
			Arc::new(test_reqwest_http_client()),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))]
use {color_eyre as _, csv as _, httpmock as _, parking_lot as _, tokio as _};
