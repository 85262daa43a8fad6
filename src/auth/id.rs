//! Identifiers carried in every credential.

// self
use crate::_prelude::*;

/// Error returned when an identifier is empty.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{kind} identifier cannot be empty.")]
pub struct IdentifierError {
	/// Kind of identifier (client, application).
	pub kind: &'static str,
}

/// Client identifier placed in the `iss` claim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId(String);
impl ClientId {
	/// Wraps a non-empty client identifier.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		non_empty("Client", value.as_ref()).map(Self)
	}

	/// Identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ClientId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Display for ClientId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Application identifier placed in the `sub` claim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApplicationId(String);
impl ApplicationId {
	/// Wraps a non-empty application identifier.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		non_empty("Application", value.as_ref()).map(Self)
	}

	/// Identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApplicationId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Display for ApplicationId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn non_empty(kind: &'static str, value: &str) -> Result<String, IdentifierError> {
	if value.is_empty() { Err(IdentifierError { kind }) } else { Ok(value.to_owned()) }
}
