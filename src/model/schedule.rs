//! Trading session schedules.

// self
use crate::{_prelude::*, timestamp::WireTimestamp};

def_record! {
	/// Half-open session window.
	#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
	#[serde(default)]
	pub struct Period {
		/// Session start.
		pub start: WireTimestamp,
		/// Session end.
		pub end: WireTimestamp,
	}
}
impl Period {
	/// Returns true if `instant` falls inside `[start, end)`.
	pub fn contains(&self, instant: WireTimestamp) -> bool {
		self.start <= instant && instant < self.end
	}
}

def_record! {
	/// Named trading session of an instrument.
	#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
	#[serde(default)]
	pub struct ScheduleInterval {
		/// Session name, e.g. `PreMarket`, `MainSession`.
		pub name: String,
		/// Session window.
		pub period: Period,
	}
}

def_record! {
	/// Body of the schedule endpoint.
	#[derive(Clone, Debug, Default, Serialize)]
	#[serde(default)]
	pub(crate) struct Schedule {
		pub(crate) intervals: Vec<ScheduleInterval>,
	}
}
