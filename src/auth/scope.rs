//! Resource scopes a credential can be minted for.

// self
use crate::_prelude::*;

/// Error returned when parsing an unknown scope name.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown scope: {value}.")]
pub struct ScopeParseError {
	/// The unrecognized input.
	pub value: String,
}

/// Closed set of resource families exposed by the market data API.
///
/// Each endpoint wrapper names the scope it needs; scopes are never derived from the request
/// path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
	/// Instrument, exchange, type, group, and schedule lookups.
	Symbols,
	/// Historical candles.
	Ohlc,
}
impl Scope {
	/// Every scope, in declaration order.
	pub const ALL: [Self; 2] = [Self::Symbols, Self::Ohlc];

	/// Returns the audience string placed in the `aud` claim.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Symbols => "symbols",
			Self::Ohlc => "ohlc",
		}
	}
}
impl AsRef<str> for Scope {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Scope {
	type Err = ScopeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|scope| scope.as_str() == s)
			.ok_or_else(|| ScopeParseError { value: s.to_owned() })
	}
}

/// Checks that `scope` can be used as a single audience entry.
pub(crate) fn is_valid_audience(scope: &str) -> bool {
	!scope.is_empty() && !scope.chars().any(char::is_whitespace)
}
