// self
use crate::{
	_prelude::*,
	auth::Scope,
	endpoints::MarketDataClient,
	executor::ApiRequest,
	http::ApiHttpClient,
	model::{Instrument, InstrumentType},
};

impl<C> MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the instrument type catalogue (`GET /types`).
	pub async fn instrument_types(&self) -> Result<Vec<InstrumentType>> {
		self.executor.call(&ApiRequest::new(Scope::Symbols).segment("types")).await
	}

	/// Lists the instruments of type `id`, e.g. `FUTURE`.
	pub async fn instruments_by_type(&self, id: &str) -> Result<Vec<Instrument>> {
		self.executor.call(&ApiRequest::new(Scope::Symbols).segment("types").segment(id)).await
	}
}
