//! Instruments and their trading specifications.

// self
use crate::{_prelude::*, timestamp::WireTimestamp};

def_record! {
	/// Tradable instrument (the API calls these symbols).
	#[derive(Clone, Debug, Default, PartialEq, Serialize)]
	#[serde(default, rename_all = "camelCase")]
	pub struct Instrument {
		/// Unique instrument identifier, e.g. `AAPL.NASDAQ`.
		pub id: String,
		/// Display name.
		pub name: String,
		/// Long description.
		pub description: String,
		/// Exchange ticker.
		pub ticker: String,
		/// Instrument type id, e.g. `STOCK`, `FUTURE`, `OPTION`, `CURRENCY`.
		#[serde(rename = "type")]
		pub instrument_type: String,
		/// Listing exchange id.
		pub exchange: String,
		/// Country code of the listing.
		pub country: String,
		/// Quote currency.
		pub currency: String,
		/// Minimum price increment.
		pub mpi: f64,
		/// Instrument group id for derivatives.
		pub group: String,
		/// Expiration instant for derivatives.
		#[serde(skip_serializing_if = "Option::is_none")]
		pub expiration: Option<WireTimestamp>,
		/// Option contract details.
		#[serde(skip_serializing_if = "Option::is_none")]
		pub option_data: Option<OptionData>,
	}
}

def_record! {
	/// Option-specific contract terms.
	#[derive(Clone, Debug, Default, PartialEq, Serialize)]
	#[serde(default, rename_all = "camelCase")]
	pub struct OptionData {
		/// `CALL` or `PUT`.
		pub right: String,
		/// Strike price.
		pub strike_price: f64,
	}
}

def_record! {
	/// Trading specification of a single instrument.
	#[derive(Clone, Debug, Default, PartialEq, Serialize)]
	#[serde(default, rename_all = "camelCase")]
	pub struct InstrumentSpecification {
		/// Margin leverage ratio.
		pub leverage: f64,
		/// Contract multiplier.
		pub contract_multiplier: f64,
		/// Price unit.
		pub price_unit: f64,
		/// Quantity units label, e.g. `Shares`.
		pub units: String,
		/// Lot size.
		pub lot_size: f64,
	}
}

def_record! {
	/// Instrument type listed by the type catalogue.
	#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
	#[serde(default)]
	pub struct InstrumentType {
		/// Type id, e.g. `STOCK`.
		pub id: String,
	}
}

def_record! {
	/// Group of related derivative instruments sharing an underlying.
	#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
	#[serde(default)]
	pub struct InstrumentGroup {
		/// Group id, e.g. `6R`.
		pub group: String,
		/// Display name.
		pub name: String,
		/// Instrument types present in the group.
		pub types: Vec<String>,
		/// Listing exchange id.
		pub exchange: String,
	}
}
