//! Claim sets and the short-lived credentials built from them.

// self
use crate::{_prelude::*, auth::BearerToken};

/// Registered claims carried by every credential.
///
/// Instants are whole Unix seconds, matching the compact token encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
	/// Issuer; the client identifier.
	pub iss: String,
	/// Subject; the application identifier.
	pub sub: String,
	/// Audience; exactly one scope name for credentials minted by this crate.
	pub aud: Vec<String>,
	/// Issued-at, Unix seconds.
	pub iat: i64,
	/// Expiry, Unix seconds.
	pub exp: i64,
}
impl Claims {
	/// Lifetime encoded in the claim set.
	pub fn ttl(&self) -> Duration {
		Duration::seconds(self.exp - self.iat)
	}

	/// Issued-at as an instant, if representable.
	pub fn issued_at(&self) -> Option<OffsetDateTime> {
		OffsetDateTime::from_unix_timestamp(self.iat).ok()
	}

	/// Expiry as an instant, if representable.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		OffsetDateTime::from_unix_timestamp(self.exp).ok()
	}
}

/// Signed, scope-bound credential minted for a single call.
///
/// Never cached and never persisted; the executor drops it once the request is sent.
#[derive(Clone)]
pub struct Credential {
	/// Compact signed token; callers must avoid logging it.
	pub token: BearerToken,
	/// Claims the token was signed over.
	pub claims: Claims,
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("token", &"<redacted>")
			.field("claims", &self.claims)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn claim_instants_follow_seconds() {
		let claims = Claims {
			iss: "client".into(),
			sub: "app".into(),
			aud: vec!["symbols".into()],
			iat: 1_529_013_600,
			exp: 1_529_013_610,
		};

		assert_eq!(claims.ttl(), Duration::seconds(10));
		assert_eq!(claims.issued_at().map(OffsetDateTime::unix_timestamp), Some(1_529_013_600));
		assert_eq!(claims.expires_at().map(OffsetDateTime::unix_timestamp), Some(1_529_013_610));
		assert_eq!(Claims { exp: i64::MAX, ..claims }.expires_at(), None);
	}

	#[test]
	fn debug_redacts_token() {
		let credential = Credential {
			token: BearerToken::new("h.c.s".into()),
			claims: Claims {
				iss: "client".into(),
				sub: "app".into(),
				aud: vec!["symbols".into()],
				iat: 0,
				exp: 10,
			},
		};
		let rendered = format!("{credential:?}");

		assert!(!rendered.contains("h.c.s"));
		assert!(rendered.contains("<redacted>"));
	}
}
