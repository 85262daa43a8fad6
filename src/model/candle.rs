//! Historical OHLC candles and their sampling durations.

// self
use crate::{_prelude::*, timestamp::WireTimestamp};

/// Error returned when a second-count is not a supported candle duration.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unsupported candle duration: {seconds}s.")]
pub struct CandleDurationError {
	/// Rejected second-count.
	pub seconds: u32,
}

/// Sampling period accepted by the candle endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CandleDuration {
	/// 60 seconds.
	OneMinute,
	/// 300 seconds.
	FiveMinutes,
	/// 600 seconds.
	TenMinutes,
	/// 900 seconds.
	FifteenMinutes,
	/// 3600 seconds.
	OneHour,
	/// 21600 seconds.
	SixHours,
	/// 86400 seconds.
	OneDay,
}
impl CandleDuration {
	/// Every supported duration, shortest first.
	pub const ALL: [Self; 7] = [
		Self::OneMinute,
		Self::FiveMinutes,
		Self::TenMinutes,
		Self::FifteenMinutes,
		Self::OneHour,
		Self::SixHours,
		Self::OneDay,
	];

	/// Length of one candle in seconds; this is the value placed in the request path.
	pub const fn as_secs(self) -> u32 {
		match self {
			Self::OneMinute => 60,
			Self::FiveMinutes => 300,
			Self::TenMinutes => 600,
			Self::FifteenMinutes => 900,
			Self::OneHour => 3_600,
			Self::SixHours => 21_600,
			Self::OneDay => 86_400,
		}
	}

	/// Length of one candle.
	pub const fn as_duration(self) -> Duration {
		Duration::seconds(self.as_secs() as i64)
	}
}
impl Display for CandleDuration {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}", self.as_secs())
	}
}
impl TryFrom<u32> for CandleDuration {
	type Error = CandleDurationError;

	fn try_from(seconds: u32) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|duration| duration.as_secs() == seconds)
			.ok_or(CandleDurationError { seconds })
	}
}
impl From<CandleDuration> for u32 {
	fn from(value: CandleDuration) -> Self {
		value.as_secs()
	}
}

def_record! {
	/// One OHLC bar.
	#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
	pub struct Candle {
		/// Bar open instant.
		pub timestamp: WireTimestamp,
		/// Opening price.
		#[serde(default)]
		pub open: f64,
		/// Highest price.
		#[serde(default)]
		pub high: f64,
		/// Lowest price.
		#[serde(default)]
		pub low: f64,
		/// Closing price.
		#[serde(default)]
		pub close: f64,
		/// Traded volume, when the venue reports it.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub volume: Option<f64>,
	}
}

/// Query parameters for the candle endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandleQuery {
	/// Sampling period.
	pub duration: CandleDuration,
	/// Inclusive range start.
	pub from: Option<WireTimestamp>,
	/// Range end.
	pub to: Option<WireTimestamp>,
	/// Maximum number of candles to return.
	pub size: Option<u32>,
}
impl CandleQuery {
	/// Creates a query for the given sampling period without range or size limits.
	pub fn new(duration: CandleDuration) -> Self {
		Self { duration, from: None, to: None, size: None }
	}

	/// Restricts the query to `[from, to]`.
	pub fn with_range(mut self, from: impl Into<WireTimestamp>, to: impl Into<WireTimestamp>) -> Self {
		self.from = Some(from.into());
		self.to = Some(to.into());

		self
	}

	/// Caps the number of returned candles.
	pub fn with_size(mut self, size: u32) -> Self {
		self.size = Some(size);

		self
	}

	/// Query parameters as sent on the wire; unset values are omitted.
	pub fn params(&self) -> BTreeMap<String, String> {
		let mut params = BTreeMap::new();

		if let Some(from) = self.from {
			params.insert("from".into(), from.to_string());
		}
		if let Some(to) = self.to {
			params.insert("to".into(), to.to_string());
		}
		if let Some(size) = self.size {
			params.insert("size".into(), size.to_string());
		}

		params
	}
}
