//! Demonstrates delivering a signed header to a marketplace-shaped endpoint with the
//! bundled reqwest adapter and a local mock server.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use oauth1_signer::{
	ext::{AttachAuthorization, MarketplaceHeaders},
	reqwest::Client,
	signer::{Method, SignatureEngine},
	source,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let account_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/ws/v2.0/account").header_exists("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"account\":{\"username\":\"demo\"}}");
		})
		.await;
	let engine = SignatureEngine::new("demo-consumer-key", "demo-access-token")?
		.with_consumer_secret("demo-consumer-secret")
		.with_access_token_secret("demo-token-secret");
	let url = server.url("/ws/v2.0/account");
	let signed = engine.build_authorization_header(
		Method::Get,
		&url,
		&[],
		&source::random_nonce(),
		source::unix_timestamp(),
	)?;
	let request = MarketplaceHeaders
		.attach_authorization(Client::new().get(&url), &signed)
		.expect("Header attachment is infallible for reqwest builders.");
	let response = request.send().await?;

	println!("Marketplace responded with status {}.", response.status());

	account_mock.assert_async().await;

	Ok(())
}
