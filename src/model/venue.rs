//! Exchanges (trading venues).

// self
use crate::_prelude::*;

def_record! {
	/// Exchange listing instruments.
	#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
	#[serde(default)]
	pub struct TradingVenue {
		/// Exchange id, e.g. `NYSE ARCA`.
		pub id: String,
		/// Display name.
		pub name: String,
		/// Country code.
		pub country: String,
	}
}
