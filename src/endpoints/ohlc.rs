// self
use crate::{
	_prelude::*,
	auth::Scope,
	endpoints::MarketDataClient,
	executor::ApiRequest,
	http::ApiHttpClient,
	model::{Candle, CandleQuery},
};

impl<C> MarketDataClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches historical candles of instrument `id` (`GET /ohlc/{id}/{duration}`).
	///
	/// Unset range or size fields of `query` are left out of the query string.
	pub async fn candles(&self, id: &str, query: &CandleQuery) -> Result<Vec<Candle>> {
		let request = ApiRequest::new(Scope::Ohlc)
			.segment("ohlc")
			.segment(id)
			.segment(query.duration.to_string())
			.params(query.params());

		self.executor.call(&request).await
	}
}
