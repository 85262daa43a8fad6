//! Per-call credential minting (HS256 compact tokens).
//!
//! [`TokenSigner`] owns the client/application identifiers and the shared key for the lifetime
//! of a client. Every call to [`TokenSigner::sign`] builds a fresh claim set bound to one scope,
//! signs `base64url(header).base64url(claims)` with HMAC-SHA-256, and appends the unpadded
//! base64url tag. Nothing is cached between calls.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use ring::hmac;
// self
use crate::{
	_prelude::*,
	auth::{
		ApplicationId, BearerToken, Claims, ClientId, Credential, SharedKey, scope::is_valid_audience,
	},
	error::{ConfigError, SigningError},
};

const ALGORITHM: &str = "HS256";

/// Errors raised while verifying a compact token.
#[derive(Debug, ThisError)]
pub enum VerifyError {
	/// Token does not have exactly three dot-separated segments.
	#[error("Token is not a three-part compact encoding.")]
	Malformed,
	/// A segment was not valid unpadded base64url.
	#[error("Token segment is not valid base64url.")]
	Base64(#[from] base64::DecodeError),
	/// Header or claims were not the expected JSON.
	#[error("Token header or claims could not be decoded.")]
	Json(#[from] serde_json::Error),
	/// Header names an algorithm other than HS256.
	#[error("Token uses unsupported algorithm `{alg}`.")]
	UnsupportedAlgorithm {
		/// Algorithm named by the header.
		alg: String,
	},
	/// MAC did not match the shared key.
	#[error("Token signature does not match.")]
	SignatureMismatch,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
	alg: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	typ: Option<String>,
}

/// Mints short-lived credentials scoped to a single resource family.
#[derive(Clone, Debug)]
pub struct TokenSigner {
	client_id: ClientId,
	application_id: ApplicationId,
	key: hmac::Key,
	ttl: Duration,
}
impl TokenSigner {
	/// Lifetime applied to every credential unless overridden.
	pub const DEFAULT_TTL: Duration = Duration::seconds(10);

	/// Creates a signer after validating identifiers and key material.
	///
	/// An empty shared key would still produce syntactically valid tokens, so it is rejected
	/// here instead of at the first call.
	pub fn new(
		client_id: impl AsRef<str>,
		application_id: impl AsRef<str>,
		shared_key: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let shared_key = SharedKey::new(shared_key);

		if shared_key.is_empty() {
			return Err(ConfigError::EmptySharedKey);
		}

		Ok(Self {
			client_id: ClientId::new(client_id)?,
			application_id: ApplicationId::new(application_id)?,
			key: hmac::Key::new(hmac::HMAC_SHA256, shared_key.expose()),
			ttl: Self::DEFAULT_TTL,
		})
	}

	/// Overrides the credential lifetime; must be at least one whole second.
	pub fn with_ttl(mut self, ttl: Duration) -> Result<Self, ConfigError> {
		if ttl.whole_seconds() < 1 {
			return Err(ConfigError::NonPositiveTokenTtl);
		}

		self.ttl = ttl;

		Ok(self)
	}

	/// Client identifier placed in `iss`.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// Application identifier placed in `sub`.
	pub fn application_id(&self) -> &ApplicationId {
		&self.application_id
	}

	/// Credential lifetime.
	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Mints a credential for `scope` using the current clock.
	pub fn sign(&self, scope: impl AsRef<str>) -> Result<Credential, SigningError> {
		self.sign_at(scope, OffsetDateTime::now_utc())
	}

	/// Mints a credential for `scope` as if issued at `now`.
	pub fn sign_at(
		&self,
		scope: impl AsRef<str>,
		now: OffsetDateTime,
	) -> Result<Credential, SigningError> {
		let scope = scope.as_ref();

		if !is_valid_audience(scope) {
			return Err(SigningError::InvalidScope { scope: scope.to_owned() });
		}

		let iat = now.unix_timestamp();
		let exp = iat.checked_add(self.ttl.whole_seconds()).ok_or(SigningError::ExpiryOutOfRange)?;
		let claims = Claims {
			iss: self.client_id.to_string(),
			sub: self.application_id.to_string(),
			aud: vec![scope.to_owned()],
			iat,
			exp,
		};
		let header = serde_json::to_vec(&Header { alg: ALGORITHM.into(), typ: Some("JWT".into()) })?;
		let payload = serde_json::to_vec(&claims)?;
		let signing_input =
			format!("{}.{}", URL_SAFE_NO_PAD.encode(header), URL_SAFE_NO_PAD.encode(payload));
		let tag = URL_SAFE_NO_PAD.encode(hmac::sign(&self.key, signing_input.as_bytes()));

		Ok(Credential { token: BearerToken::new(format!("{signing_input}.{tag}")), claims })
	}

	/// Verifies a compact token minted with this signer's key and returns its claims.
	///
	/// Expiry is not enforced here; compare [`Claims::expires_at`] against the clock when
	/// freshness matters.
	pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
		let mut parts = token.split('.');
		let (Some(header), Some(payload), Some(tag), None) =
			(parts.next(), parts.next(), parts.next(), parts.next())
		else {
			return Err(VerifyError::Malformed);
		};
		let header_bytes = URL_SAFE_NO_PAD.decode(header)?;
		let decoded: Header = serde_json::from_slice(&header_bytes)?;

		if decoded.alg != ALGORITHM {
			return Err(VerifyError::UnsupportedAlgorithm { alg: decoded.alg });
		}

		let tag = URL_SAFE_NO_PAD.decode(tag)?;
		let signing_input = &token[..header.len() + 1 + payload.len()];

		hmac::verify(&self.key, signing_input.as_bytes(), &tag)
			.map_err(|_| VerifyError::SignatureMismatch)?;

		Ok(serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload)?)?)
	}
}
