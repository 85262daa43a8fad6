//! Millisecond-epoch wire timestamps.
//!
//! The API encodes every instant as an unquoted integer count of milliseconds since the Unix
//! epoch. [`WireTimestamp`] keeps whole seconds only: decoding divides by 1000 with truncation
//! toward zero, and encoding multiplies back, so sub-second input never round-trips.

// std
use std::num::ParseIntError;
// crates.io
use serde::{Deserializer, Serializer, de::Visitor};
use time::UtcOffset;
// self
use crate::_prelude::*;

const MILLIS_PER_SECOND: i64 = 1_000;
const MAX_SECONDS: i64 = i64::MAX / MILLIS_PER_SECOND;

/// Errors raised by the timestamp codec.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum TimestampError {
	/// Input was not a base-10 integer literal.
	#[error("Timestamp `{value}` is not an integer millisecond count.")]
	Format {
		/// Rejected input.
		value: String,
		/// Underlying integer parsing failure.
		#[source]
		source: ParseIntError,
	},
	/// Seconds value cannot be encoded as milliseconds, or lies beyond the calendar range.
	#[error("Timestamp {seconds}s is outside the supported range.")]
	OutOfRange {
		/// Offending epoch seconds.
		seconds: i64,
	},
}

/// Whole-second instant exchanged as integer milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireTimestamp(i64);
impl WireTimestamp {
	/// The Unix epoch.
	pub const UNIX_EPOCH: Self = Self(0);

	/// Builds a timestamp from whole epoch seconds.
	pub fn from_unix_seconds(seconds: i64) -> Result<Self, TimestampError> {
		if seconds.unsigned_abs() > MAX_SECONDS.unsigned_abs() {
			return Err(TimestampError::OutOfRange { seconds });
		}

		Ok(Self(seconds))
	}

	/// Builds a timestamp from epoch milliseconds, discarding the sub-second remainder.
	pub const fn from_unix_millis(millis: i64) -> Self {
		Self(millis / MILLIS_PER_SECOND)
	}

	/// Current instant truncated to whole seconds.
	pub fn now() -> Self {
		Self::from(OffsetDateTime::now_utc())
	}

	/// Whole seconds since the Unix epoch.
	pub const fn unix_seconds(self) -> i64 {
		self.0
	}

	/// Milliseconds since the Unix epoch; always a multiple of 1000.
	pub const fn unix_millis(self) -> i64 {
		self.0 * MILLIS_PER_SECOND
	}

	/// Converts to a UTC calendar instant.
	pub fn to_offset_datetime(self) -> Result<OffsetDateTime, TimestampError> {
		OffsetDateTime::from_unix_timestamp(self.0)
			.map_err(|_| TimestampError::OutOfRange { seconds: self.0 })
	}
}
impl From<OffsetDateTime> for WireTimestamp {
	fn from(value: OffsetDateTime) -> Self {
		Self(value.to_offset(UtcOffset::UTC).unix_timestamp())
	}
}
impl TryFrom<WireTimestamp> for OffsetDateTime {
	type Error = TimestampError;

	fn try_from(value: WireTimestamp) -> Result<Self, Self::Error> {
		value.to_offset_datetime()
	}
}
impl Display for WireTimestamp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}", self.unix_millis())
	}
}
impl FromStr for WireTimestamp {
	type Err = TimestampError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse::<i64>()
			.map(Self::from_unix_millis)
			.map_err(|source| TimestampError::Format { value: s.to_owned(), source })
	}
}
impl Serialize for WireTimestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_i64(self.unix_millis())
	}
}
impl<'de> Deserialize<'de> for WireTimestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_i64(MillisVisitor)
	}
}

struct MillisVisitor;
impl Visitor<'_> for MillisVisitor {
	type Value = WireTimestamp;

	fn expecting(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("an integer count of milliseconds since the Unix epoch")
	}

	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		Ok(WireTimestamp::from_unix_millis(v))
	}

	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		i64::try_from(v)
			.map(WireTimestamp::from_unix_millis)
			.map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(v), &self))
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn decodes_reference_expiration() {
		let parsed: WireTimestamp =
			"1529028000000".parse().expect("Reference literal should parse.");
		let from_json: WireTimestamp =
			serde_json::from_str("1529028000000").expect("Reference JSON should decode.");

		assert_eq!(parsed.unix_seconds(), 1_529_028_000);
		assert_eq!(from_json, parsed);
		assert_eq!(
			parsed.to_offset_datetime().expect("Reference instant is representable."),
			macros::datetime!(2018-06-15 02:00:00 UTC)
		);
	}

	#[test]
	fn decode_truncates_toward_zero() {
		assert_eq!(WireTimestamp::from_unix_millis(1_529_028_000_999).unix_seconds(), 1_529_028_000);
		assert_eq!(WireTimestamp::from_unix_millis(-1_500).unix_seconds(), -1);
		assert_eq!(WireTimestamp::from_unix_millis(999).unix_seconds(), 0);
	}

	#[test]
	fn encode_drops_sub_second_precision() {
		let instant = macros::datetime!(2017-06-16 15:15:00.987 UTC);
		let wire = WireTimestamp::from(instant);

		assert_eq!(wire.to_string(), "1497626100000");
		assert_eq!(serde_json::to_string(&wire).expect("Timestamp should serialize."), "1497626100000");
	}

	#[test]
	fn offsets_normalize_to_utc() {
		let local = macros::datetime!(2018-06-15 05:00:00 +03:00);

		assert_eq!(WireTimestamp::from(local).unix_seconds(), 1_529_028_000);
	}

	#[test]
	fn round_trips_at_whole_second_resolution() {
		for seconds in [0_i64, 1, 1_529_028_000, (1_i64 << 53) - 1] {
			let wire = WireTimestamp::from_unix_seconds(seconds).expect("Seconds are in range.");
			let decoded: WireTimestamp = wire.to_string().parse().expect("Encoded form parses.");

			assert_eq!(decoded.unix_seconds(), seconds);
		}

		let lossy: WireTimestamp = "1529028000123".parse().expect("Literal should parse.");

		assert_eq!(lossy.to_string(), "1529028000000");
	}

	#[test]
	fn rejects_non_integer_input() {
		assert!(matches!("abc".parse::<WireTimestamp>(), Err(TimestampError::Format { .. })));
		assert!(matches!("1.5e12".parse::<WireTimestamp>(), Err(TimestampError::Format { .. })));
		assert!(serde_json::from_str::<WireTimestamp>("\"abc\"").is_err());
		assert!(serde_json::from_str::<WireTimestamp>("\"1529028000000\"").is_err());
		assert!(serde_json::from_str::<WireTimestamp>("1529028000000.0").is_err());
		assert!(serde_json::from_str::<WireTimestamp>("18446744073709551615").is_err());
	}

	#[test]
	fn range_checks_seconds_and_calendar() {
		assert!(WireTimestamp::from_unix_seconds(MAX_SECONDS).is_ok());
		assert!(matches!(
			WireTimestamp::from_unix_seconds(MAX_SECONDS + 1),
			Err(TimestampError::OutOfRange { .. })
		));
		assert!(
			WireTimestamp::from_unix_seconds(1_i64 << 53)
				.expect("Seconds are in range.")
				.to_offset_datetime()
				.is_err(),
			"Instants beyond year 9999 have no calendar form.",
		);
	}
}
