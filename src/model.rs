//! Immutable value records decoded from market data responses.
//!
//! Field names follow the API's lower camelCase, unknown fields are ignored, and absent or `null`
//! fields fall back to empty values so older payloads keep decoding. Records only decode from
//! JSON objects; a positional array never fills a record. Timestamps are
//! [`WireTimestamp`](crate::timestamp::WireTimestamp) values.

// Declares a record whose `Deserialize` impl accepts objects only. The field list is mirrored
// into a local struct carrying the derived impl, which is driven through `deserialize_map`.
macro_rules! def_record {
	(
		$(#[doc = $doc:literal])*
		#[derive $derive:tt]
		$(#[serde $container:tt])?
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident: $ty:ty,
			)*
		}
	) => {
		$(#[doc = $doc])*
		#[derive $derive]
		$(#[serde $container])?
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $ty,
			)*
		}
		impl<'de> serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
			where
				D: serde::Deserializer<'de>,
			{
				#[derive(Default, serde::Deserialize)]
				$(#[serde $container])?
				struct Fields {
					$(
						$(#[$field_meta])*
						#[serde(deserialize_with = "crate::model::null_as_default")]
						$field: $ty,
					)*
				}

				struct ObjectVisitor;
				impl<'de> serde::de::Visitor<'de> for ObjectVisitor {
					type Value = $name;

					fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
						f.write_str(concat!("a JSON object for ", stringify!($name)))
					}

					fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
					where
						A: serde::de::MapAccess<'de>,
					{
						let fields = <Fields as serde::Deserialize>::deserialize(
							serde::de::value::MapAccessDeserializer::new(map),
						)?;

						Ok($name { $($field: fields.$field),* })
					}
				}

				deserializer.deserialize_map(ObjectVisitor)
			}
		}
	};
}

pub mod candle;
pub mod instrument;
pub mod schedule;
pub mod venue;

pub use candle::*;
pub use instrument::*;
pub use schedule::*;
pub use venue::*;

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Reads `null` as the field type's empty value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::executor::decode;

	#[test]
	fn records_reject_positional_arrays() {
		let err = decode::<Instrument>(br#"["AAPL.NASDAQ","Apple"]"#)
			.expect_err("Arrays must not fill instrument fields.");

		assert_eq!(err.path(), ".");
		assert!(decode::<Instrument>(b"[]").is_err());
		assert!(decode::<TradingVenue>(br#"["NYSE","NYSE","US"]"#).is_err());
		assert!(decode::<InstrumentSpecification>(b"[0.1,1000,1,\"Contracts\",1]").is_err());
		assert!(decode::<Candle>(b"[1529020800000,1,2,0.5,1.5]").is_err());
		assert!(decode::<Instrument>(b"\"AAPL.NASDAQ\"").is_err());
	}

	#[test]
	fn nested_records_reject_positional_arrays() {
		let err = decode::<Vec<Instrument>>(br#"[{"id":"SPX","optionData":["PUT",2250]}]"#)
			.expect_err("Option terms must be an object.");

		assert_eq!(err.path(), "[0].optionData");

		let err = decode::<Vec<ScheduleInterval>>(br#"[{"name":"Main","period":[0,1]}]"#)
			.expect_err("Periods must be objects.");

		assert_eq!(err.path(), "[0].period");
	}

	#[test]
	fn null_fields_read_as_empty_values() {
		let instruments = decode::<Vec<Instrument>>(
			br#"[{"id":"AAPL.NASDAQ","name":null,"group":null,"mpi":null,"expiration":null,"optionData":null}]"#,
		)
		.expect("Null fields should decode.");
		let apple = &instruments[0];

		assert_eq!(apple.id, "AAPL.NASDAQ");
		assert_eq!(apple.name, "");
		assert_eq!(apple.group, "");
		assert_eq!(apple.mpi, 0.0);
		assert_eq!(apple.expiration, None);
		assert_eq!(apple.option_data, None);

		let group = decode::<InstrumentGroup>(br#"{"group":"6R","types":null}"#)
			.expect("Null lists should decode.");

		assert!(group.types.is_empty());

		let specification =
			decode::<InstrumentSpecification>(br#"{"leverage":null,"units":null}"#)
				.expect("Null specification fields should decode.");

		assert_eq!(specification, InstrumentSpecification::default());
	}
}
