//! Secret wrappers that redact sensitive material.

// self
use crate::_prelude::*;

/// Redacted HMAC key shared with the market data API.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedKey(String);
impl SharedKey {
	/// Wraps a new key string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns true if the key holds no material.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the raw key bytes. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		self.0.as_bytes()
	}
}
impl Debug for SharedKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SharedKey").field(&"<redacted>").finish()
	}
}
impl Display for SharedKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Redacted compact token keeping signed credentials out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);
impl BearerToken {
	pub(crate) fn new(value: String) -> Self {
		Self(value)
	}

	/// Returns the compact token. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for BearerToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
