// self
use crate::{
	_prelude::*,
	auth::Scope,
	endpoints::MarketDataClient,
	executor::ApiRequest,
	http::ApiHttpClient,
	model::{Instrument, TradingVenue},
};

impl<C> MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every exchange (`GET /exchanges`).
	pub async fn exchanges(&self) -> Result<Vec<TradingVenue>> {
		self.executor.call(&ApiRequest::new(Scope::Symbols).segment("exchanges")).await
	}

	/// Lists the instruments traded on exchange `id`.
	pub async fn instruments_by_exchange(&self, id: &str) -> Result<Vec<Instrument>> {
		self.executor.call(&ApiRequest::new(Scope::Symbols).segment("exchanges").segment(id)).await
	}
}
