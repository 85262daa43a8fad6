//! Validated, immutable endpoint configuration.
//!
//! [`ApiConfig`] pins the HTTPS origin plus versioned path prefix and the overall request
//! timeout for the lifetime of a client. Values are checked once by [`ApiConfigBuilder::build`]
//! so the executor never sees an insecure or opaque base URL.

// self
use crate::{_prelude::*, error::ConfigError};

/// Demo environment origin.
pub const DEMO_BASE_URL: &str = "https://api-demo.exante.eu/md/1.0";
/// Live environment origin.
pub const LIVE_BASE_URL: &str = "https://api-live.exante.eu/md/1.0";

/// Immutable configuration consumed by the request executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Origin plus versioned prefix every endpoint path is appended to.
	pub base_url: Url,
	/// Upper bound on one request, from connect to the last body byte.
	pub request_timeout: std::time::Duration,
}
impl ApiConfig {
	/// Default overall request timeout.
	pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

	/// Creates a builder seeded with the demo origin and default timeout.
	pub fn builder() -> ApiConfigBuilder {
		ApiConfigBuilder::default()
	}

	/// Appends percent-encoded `segments` and the query `params` to the base URL.
	///
	/// Empty, `.` and `..` segments are rejected since they would address a different resource.
	pub fn endpoint_url<I, S>(
		&self,
		segments: I,
		params: &BTreeMap<String, String>,
	) -> Result<Url, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let segments = segments
			.into_iter()
			.map(|segment| {
				if matches!(segment.as_ref(), "" | "." | "..") {
					Err(ConfigError::InvalidPathSegment { segment: segment.as_ref().to_owned() })
				} else {
					Ok(segment)
				}
			})
			.collect::<Result<Vec<_>, _>>()?;
		let mut url = self.base_url.clone();

		url.path_segments_mut()
			.map_err(|_| ConfigError::OpaqueBaseUrl { url: self.base_url.to_string() })?
			.pop_if_empty()
			.extend(segments);

		if !params.is_empty() {
			url.query_pairs_mut().extend_pairs(params.iter());
		}

		Ok(url)
	}
}

/// Builder for [`ApiConfig`] values.
#[derive(Clone, Debug)]
pub struct ApiConfigBuilder {
	base_url: Option<String>,
	request_timeout: std::time::Duration,
}
impl ApiConfigBuilder {
	/// Sets the base URL (origin plus versioned prefix).
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());

		self
	}

	/// Overrides the overall request timeout.
	pub fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
		self.request_timeout = timeout;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ApiConfig, ConfigError> {
		let raw = self.base_url.as_deref().unwrap_or(DEMO_BASE_URL);
		let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		if base_url.scheme() != "https" {
			return Err(ConfigError::InsecureBaseUrl { url: base_url.to_string() });
		}
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::OpaqueBaseUrl { url: base_url.to_string() });
		}
		if self.request_timeout.is_zero() {
			return Err(ConfigError::NonPositiveTimeout);
		}

		Ok(ApiConfig { base_url, request_timeout: self.request_timeout })
	}
}
impl Default for ApiConfigBuilder {
	fn default() -> Self {
		Self { base_url: None, request_timeout: ApiConfig::DEFAULT_TIMEOUT }
	}
}
