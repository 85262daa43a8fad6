//! Client-level error types shared by the signer, executor, and endpoint wrappers.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Every call resolves to exactly one of these kinds; nothing is retried or swallowed.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem detected while building the client.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credential could not be minted; the request was never sent.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Transport failure (DNS, TCP, TLS, timeout, body read).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Upstream answered with a non-200 status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Response body did not match the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}
impl Error {
	/// Returns the HTTP status when the failure came from a non-200 response.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(err) => Some(err.status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised at construction time.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Client or application identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// Shared signing key was empty.
	#[error("Shared signing key cannot be empty.")]
	EmptySharedKey,
	/// Token lifetime must be strictly positive.
	#[error("Token TTL must be positive.")]
	NonPositiveTokenTtl,
	/// Request timeout must be strictly positive.
	#[error("Request timeout must be positive.")]
	NonPositiveTimeout,
	/// Base URL could not be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL cannot carry path segments (e.g. `data:` URLs).
	#[error("Base URL cannot be used as a base for endpoint paths: {url}.")]
	OpaqueBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Base URL must use HTTPS.
	#[error("Base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Path segment is empty or a dot segment the URL resolver would collapse.
	#[error("Path segment {segment:?} cannot address an endpoint.")]
	InvalidPathSegment {
		/// Offending segment.
		segment: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures raised while minting a credential.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// Scope was empty or contained whitespace.
	#[error("Scope `{scope}` is not a valid audience.")]
	InvalidScope {
		/// The rejected scope string.
		scope: String,
	},
	/// Claim set or header could not be serialized.
	#[error("Token claims could not be encoded.")]
	Encode(#[from] serde_json::Error),
	/// Issued-at plus TTL overflowed the supported range.
	#[error("Token expiry exceeds the supported range.")]
	ExpiryOutOfRange,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the market data API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request exceeded the configured overall timeout.
	#[error("Request to the market data API timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Response body could not be read in full.
	#[error("Failed to read the market data API response body.")]
	Body {
		/// Transport-specific read error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the market data API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}

	/// Wraps a transport-specific body read error.
	pub fn body(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Body { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}

/// Non-200 response carrying the raw status and body text.
///
/// The upstream service documents no structured error schema, so the body is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Market data API responded with HTTP {status}: {body}")]
pub struct ApiError {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body, decoded as lossy UTF-8.
	pub body: String,
}

/// Response body could not be decoded into the requested shape.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body was malformed JSON or mismatched the target type at `path`.
	#[error("Response body did not match the expected shape at `{path}`.")]
	Shape {
		/// JSON path of the failing value (`.` when the root failed).
		path: String,
		/// Underlying parse failure.
		#[source]
		source: serde_json::Error,
	},
}
impl DecodeError {
	/// JSON path where decoding failed.
	pub fn path(&self) -> &str {
		match self {
			Self::Shape { path, .. } => path,
		}
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Shape { path, source: e.into_inner() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn api_error_keeps_raw_body() {
		let err = Error::from(ApiError { status: 404, body: "not found".into() });

		assert_eq!(err.status(), Some(404));
		assert_eq!(err.to_string(), "Market data API responded with HTTP 404: not found");
	}

	#[test]
	fn decode_error_reports_path() {
		let mut de = serde_json::Deserializer::from_str("{\"items\":[1,\"x\"]}");
		let err = serde_path_to_error::deserialize::<_, BTreeMap<String, Vec<u8>>>(&mut de)
			.expect_err("A string element must not decode as u8.");
		let err = DecodeError::from(err);

		assert_eq!(err.path(), "items[1]");
	}
}
