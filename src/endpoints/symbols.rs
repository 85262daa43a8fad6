// self
use crate::{
	_prelude::*,
	auth::Scope,
	endpoints::MarketDataClient,
	executor::ApiRequest,
	http::ApiHttpClient,
	model::{Instrument, InstrumentSpecification, Schedule, ScheduleInterval},
};

fn symbols() -> ApiRequest {
	ApiRequest::new(Scope::Symbols).segment("symbols")
}

impl<C> MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every instrument (`GET /symbols`).
	pub async fn instruments(&self) -> Result<Vec<Instrument>> {
		self.executor.call(&symbols()).await
	}

	/// Fetches one instrument by id (`GET /symbols/{id}`).
	pub async fn instrument(&self, id: &str) -> Result<Instrument> {
		self.executor.call(&symbols().segment(id)).await
	}

	/// Fetches the trading specification of one instrument.
	pub async fn instrument_specification(&self, id: &str) -> Result<InstrumentSpecification> {
		self.executor.call(&symbols().segment(id).segment("specification")).await
	}

	/// Fetches the trading sessions of one instrument; the `intervals` envelope is unwrapped.
	pub async fn instrument_schedule(&self, id: &str) -> Result<Vec<ScheduleInterval>> {
		let schedule: Schedule =
			self.executor.call(&symbols().segment(id).segment("schedule")).await?;

		Ok(schedule.intervals)
	}
}
