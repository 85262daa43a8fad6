//! Exports exchanges and the instruments listed on one of them as CSV on stdout.
//!
//! Credentials come from `EXANTE_CLIENT_ID`, `EXANTE_APPLICATION_ID`, and
//! `EXANTE_SHARED_KEY`; the exchange defaults to `NASDAQ` and may be passed as the first
//! argument.

// std
use std::{env, io};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use exante_md::{auth::TokenSigner, config::ApiConfig, endpoints::ReqwestMarketDataClient};

fn required_var(name: &str) -> Result<String> {
	env::var(name).wrap_err_with(|| format!("Environment variable `{name}` must be set."))
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let exchange = env::args().nth(1).unwrap_or_else(|| "NASDAQ".into());
	let signer = TokenSigner::new(
		required_var("EXANTE_CLIENT_ID")?,
		required_var("EXANTE_APPLICATION_ID")?,
		required_var("EXANTE_SHARED_KEY")?,
	)?;
	let client = ReqwestMarketDataClient::new(ApiConfig::builder().build()?, signer)?;
	let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(io::stdout());

	writer.write_record(["exchange_id", "exchange_name", "country"])?;

	for venue in client.exchanges().await? {
		writer.serialize((&venue.id, &venue.name, &venue.country))?;
	}

	writer.write_record(["instrument_id", "type", "currency", "mpi", "expiration_ms"])?;

	for instrument in client.instruments_by_exchange(&exchange).await? {
		writer.serialize((
			&instrument.id,
			&instrument.instrument_type,
			&instrument.currency,
			instrument.mpi,
			instrument.expiration.map(|t| t.unix_millis()),
		))?;
	}

	writer.flush()?;

	Ok(())
}
