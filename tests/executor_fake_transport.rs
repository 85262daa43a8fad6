// std
use std::sync::Arc;
// crates.io
use parking_lot::Mutex;
// self
use exante_md::{
	auth::{Scope, TokenSigner},
	config::ApiConfig,
	endpoints::MarketDataClient,
	error::{ConfigError, Error, SigningError, TransportError},
	executor::{ApiRequest, RequestExecutor},
	http::{ApiHttpClient, HttpFuture, HttpRequest, HttpResponse},
	model::{CandleDuration, CandleQuery, TradingVenue},
	timestamp::WireTimestamp,
};

#[derive(Default)]
struct RecordingHttpClient {
	requests: Mutex<Vec<HttpRequest>>,
	response: Option<HttpResponse>,
}
impl RecordingHttpClient {
	fn replying(status: u16, body: &[u8]) -> Self {
		Self {
			requests: Mutex::new(Vec::new()),
			response: Some(HttpResponse { status, body: body.to_vec() }),
		}
	}

	fn requests(&self) -> Vec<HttpRequest> {
		self.requests.lock().clone()
	}
}
impl ApiHttpClient for RecordingHttpClient {
	fn get(&self, request: HttpRequest) -> HttpFuture<'_> {
		self.requests.lock().push(request);

		let response = self.response.clone();

		Box::pin(async move {
			response.ok_or_else(|| {
				TransportError::Io(std::io::Error::new(
					std::io::ErrorKind::ConnectionRefused,
					"No response configured.",
				))
			})
		})
	}
}

fn signer() -> TokenSigner {
	TokenSigner::new("client-fake", "application-fake", "shared-key-fake")
		.expect("Signer should build.")
}

fn config() -> ApiConfig {
	ApiConfig::builder().build().expect("Default configuration should validate.")
}

#[tokio::test]
async fn empty_scope_sends_nothing() {
	let http = Arc::new(RecordingHttpClient::replying(200, b"[]"));
	let executor = RequestExecutor::new(config(), signer(), http.clone());

	for scope in ["", "  ", "sym bols"] {
		let err = executor
			.call::<Vec<TradingVenue>>(&ApiRequest::new(scope).segment("exchanges"))
			.await
			.expect_err("Invalid scopes must not be signed.");

		assert!(matches!(err, Error::Signing(SigningError::InvalidScope { .. })), "{err:?}");
	}

	assert!(http.requests().is_empty());
}

#[tokio::test]
async fn credential_carries_endpoint_scope() {
	let http = Arc::new(RecordingHttpClient::replying(200, b"[]"));
	let signer = signer();
	let client = MarketDataClient::with_http_client(config(), signer.clone(), http.clone());

	client.exchanges().await.expect("Exchange listing should succeed.");
	client
		.candles("AAPL.NASDAQ", &CandleQuery::new(CandleDuration::OneMinute))
		.await
		.expect("Candle listing should succeed.");

	let requests = http.requests();

	assert_eq!(requests.len(), 2);

	let symbols = signer.verify(requests[0].credential.expose()).expect("Token should verify.");
	let ohlc = signer.verify(requests[1].credential.expose()).expect("Token should verify.");

	assert_eq!(symbols.aud, [Scope::Symbols.as_str()]);
	assert_eq!(symbols.iss, "client-fake");
	assert_eq!(symbols.sub, "application-fake");
	assert_eq!(symbols.exp - symbols.iat, 10);
	assert_eq!(ohlc.aud, [Scope::Ohlc.as_str()]);
	assert_eq!(requests[1].url.as_str(), "https://api-demo.exante.eu/md/1.0/ohlc/AAPL.NASDAQ/60");
}

#[tokio::test]
async fn identifiers_are_percent_encoded() {
	let http = Arc::new(RecordingHttpClient::replying(200, b"{}"));
	let client = MarketDataClient::with_http_client(config(), signer(), http.clone());
	let query = CandleQuery::new(CandleDuration::OneDay).with_range(
		WireTimestamp::from_unix_millis(1_528_934_400_000),
		WireTimestamp::from_unix_millis(1_529_020_800_000),
	);

	client.instrument("USD/RUB.EXANTE").await.expect("Instrument should decode.");
	client.nearest_in_group("SPX.CBOE").await.expect("Instrument should decode.");

	let urls = http.requests().into_iter().map(|r| r.url.to_string()).collect::<Vec<_>>();

	assert_eq!(
		urls,
		[
			"https://api-demo.exante.eu/md/1.0/symbols/USD%2FRUB.EXANTE",
			"https://api-demo.exante.eu/md/1.0/groups/SPX.CBOE/nearest",
		]
	);

	let url = client
		.executor()
		.config
		.endpoint_url(["ohlc", "USD/RUB.EXANTE", "86400"], &query.params())
		.expect("Endpoint URL should build.");

	assert_eq!(
		url.as_str(),
		"https://api-demo.exante.eu/md/1.0/ohlc/USD%2FRUB.EXANTE/86400?from=1528934400000&to=1529020800000"
	);
}

#[tokio::test]
async fn error_body_is_decoded_lossily() {
	let http = Arc::new(RecordingHttpClient::replying(401, b"bad \xFF token"));
	let client = MarketDataClient::with_http_client(config(), signer(), http);
	let err = client.groups().await.expect_err("A 401 must surface as an error.");

	assert_eq!(err.status(), Some(401));

	match err {
		Error::Api(api) => assert_eq!(api.body, "bad \u{FFFD} token"),
		other => panic!("Expected an API error, got {other:?}."),
	}
}

#[tokio::test]
async fn transport_failure_propagates() {
	let http = Arc::new(RecordingHttpClient::default());
	let client = MarketDataClient::with_http_client(config(), signer(), http.clone());
	let err = client.instrument_types().await.expect_err("No response is configured.");

	assert!(matches!(err, Error::Transport(TransportError::Io(_))), "{err:?}");
	assert_eq!(http.requests().len(), 1);
}

#[tokio::test]
async fn dot_and_empty_identifiers_are_rejected_before_sending() {
	let http = Arc::new(RecordingHttpClient::replying(200, b"[]"));
	let client = MarketDataClient::with_http_client(config(), signer(), http.clone());

	for result in [
		client.instrument("..").await.map(drop),
		client.instrument("").await.map(drop),
		client.instruments_by_exchange(".").await.map(drop),
		client.candles("..", &CandleQuery::new(CandleDuration::OneMinute)).await.map(drop),
	] {
		let err = result.expect_err("Dot segments must not be sent.");

		assert!(
			matches!(err, Error::Config(ConfigError::InvalidPathSegment { .. })),
			"Unexpected error: {err:?}."
		);
	}

	assert!(http.requests().is_empty());

	client.instrument("...").await.expect_err("An empty array is not an instrument.");

	assert_eq!(
		http.requests()[0].url.as_str(),
		"https://api-demo.exante.eu/md/1.0/symbols/..."
	);
}

#[tokio::test]
async fn single_record_rejects_array_body() {
	let http = Arc::new(RecordingHttpClient::replying(200, br#"["AAPL.NASDAQ","Apple"]"#));
	let client = MarketDataClient::with_http_client(config(), signer(), http.clone());

	for err in [
		client.instrument("AAPL.NASDAQ").await.map(drop).expect_err("Arrays are not records."),
		client.nearest_in_group("6R").await.map(drop).expect_err("Arrays are not records."),
		client
			.instrument_specification("AAPL.NASDAQ")
			.await
			.map(drop)
			.expect_err("Arrays are not records."),
	] {
		assert!(matches!(err, Error::Decode(_)), "Unexpected error: {err:?}.");
	}

	let empty = Arc::new(RecordingHttpClient::replying(200, b"[]"));
	let client = MarketDataClient::with_http_client(config(), signer(), empty);
	let err = client.instrument("AAPL.NASDAQ").await.expect_err("An empty array is not a record.");

	assert!(matches!(err, Error::Decode(_)), "Unexpected error: {err:?}.");
}

#[tokio::test]
async fn list_elements_must_be_objects() {
	let http = Arc::new(RecordingHttpClient::replying(200, br#"[["NYSE","NYSE","US"]]"#));
	let client = MarketDataClient::with_http_client(config(), signer(), http);
	let err = client.exchanges().await.expect_err("Positional venues must be rejected.");

	match err {
		Error::Decode(decode) => assert_eq!(decode.path(), "[0]"),
		other => panic!("Expected a decode error, got {other:?}."),
	}
}
