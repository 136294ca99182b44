//! Demonstrates signing a marketplace request description and printing the resulting
//! header artifacts.

// crates.io
use color_eyre::Result;
// self
use oauth1_signer::{
	params::OAuthParameter,
	signer::{Method, SignatureEngine},
	source,
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let engine = SignatureEngine::new("demo-consumer-key", "demo-access-token")?
		.with_consumer_secret("demo-consumer-secret")
		.with_access_token_secret("demo-token-secret");
	let signed = engine.build_authorization_header(
		Method::Get,
		"https://api.example.com/ws/v2.0/expansions/1469/singles",
		&[OAuthParameter::new("idLanguage", 1)],
		&source::random_nonce(),
		source::unix_timestamp(),
	)?;

	println!("Base string: {}", signed.base_string);
	println!("Signature: {}", signed.signature);
	println!("Authorization: {}", signed.authorization_header);

	Ok(())
}
