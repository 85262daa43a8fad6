//! Lists instruments from a local mock of the market data API using the default reqwest
//! transport and a per-call signed credential.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use exante_md::{
	auth::TokenSigner,
	config::ApiConfig,
	endpoints::ReqwestMarketDataClient,
	http::ReqwestHttpClient,
	reqwest::Client,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let symbols_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/md/1.0/symbols").header_exists("authorization");
			then.status(200).header("content-type", "application/json").body(
				r#"[
					{"id":"AAPL.NASDAQ","name":"Apple","type":"STOCK","exchange":"NASDAQ","mpi":0.01},
					{"id":"6R.CME.M2018","name":"RUB/USD","type":"FUTURE","exchange":"CME","mpi":5e-06,"expiration":1529028000000}
				]"#,
			);
		})
		.await;
	let config = ApiConfig::builder().base_url(server.url("/md/1.0")).build()?;
	let signer = TokenSigner::new("demo-client", "demo-application", "demo-shared-key")?;
	let http_client = Arc::new(ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.timeout(config.request_timeout)
			.build()?,
	));
	let client = ReqwestMarketDataClient::with_http_client(config, signer, http_client);

	for instrument in client.instruments().await? {
		match instrument.expiration {
			Some(expiration) => println!(
				"{} ({}) expires {}.",
				instrument.id,
				instrument.instrument_type,
				expiration.to_offset_datetime()?
			),
			None => println!("{} ({}).", instrument.id, instrument.instrument_type),
		}
	}

	symbols_mock.assert_async().await;

	Ok(())
}
