// self
use crate::{
	_prelude::*,
	auth::Scope,
	endpoints::MarketDataClient,
	executor::ApiRequest,
	http::ApiHttpClient,
	model::{Instrument, InstrumentGroup},
};

fn group(id: &str) -> ApiRequest {
	ApiRequest::new(Scope::Symbols).segment("groups").segment(id)
}

impl<C> MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every derivative group (`GET /groups`).
	pub async fn groups(&self) -> Result<Vec<InstrumentGroup>> {
		self.executor.call(&ApiRequest::new(Scope::Symbols).segment("groups")).await
	}

	/// Lists the instruments in group `id`.
	pub async fn instruments_by_group(&self, id: &str) -> Result<Vec<Instrument>> {
		self.executor.call(&group(id)).await
	}

	/// Fetches the instrument of group `id` with the nearest expiration.
	pub async fn nearest_in_group(&self, id: &str) -> Result<Instrument> {
		self.executor.call(&group(id).segment("nearest")).await
	}
}
