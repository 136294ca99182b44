//! Immutable consumer/token credential pairs validated at construction.

// self
use crate::{_prelude::*, auth::CredentialSecret, error::ConfigError};

/// Consumer and token credentials for one marketplace account.
///
/// The consumer key and access token are required and validated exactly once, when
/// the value is constructed; signing operations never re-validate them. Secrets are
/// present-but-blank by default because OAuth 1.0 permits zero-length shared
/// secrets. The value is immutable for the lifetime of the engine that holds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCredentials", into = "RawCredentials")]
pub struct Credentials {
	consumer_key: String,
	consumer_secret: CredentialSecret,
	access_token: String,
	access_token_secret: CredentialSecret,
}
impl Credentials {
	/// Creates credentials from the two required identifiers, leaving both secrets
	/// blank.
	pub fn new(
		consumer_key: impl Into<String>,
		access_token: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let consumer_key = consumer_key.into();

		if consumer_key.is_empty() {
			return Err(ConfigError::EmptyConsumerKey);
		}

		let access_token = access_token.into();

		if access_token.is_empty() {
			return Err(ConfigError::EmptyAccessToken);
		}

		Ok(Self {
			consumer_key,
			consumer_secret: CredentialSecret::default(),
			access_token,
			access_token_secret: CredentialSecret::default(),
		})
	}

	/// Sets or replaces the consumer secret.
	pub fn with_consumer_secret(mut self, secret: impl Into<CredentialSecret>) -> Self {
		self.consumer_secret = secret.into();

		self
	}

	/// Sets or replaces the access token secret.
	pub fn with_access_token_secret(mut self, secret: impl Into<CredentialSecret>) -> Self {
		self.access_token_secret = secret.into();

		self
	}

	/// The non-empty consumer key.
	pub fn consumer_key(&self) -> &str {
		&self.consumer_key
	}

	/// The consumer secret (possibly blank).
	pub fn consumer_secret(&self) -> &CredentialSecret {
		&self.consumer_secret
	}

	/// The non-empty access token.
	pub fn access_token(&self) -> &str {
		&self.access_token
	}

	/// The access token secret (possibly blank).
	pub fn access_token_secret(&self) -> &CredentialSecret {
		&self.access_token_secret
	}
}
impl TryFrom<RawCredentials> for Credentials {
	type Error = ConfigError;

	fn try_from(value: RawCredentials) -> Result<Self, Self::Error> {
		Ok(Self::new(value.consumer_key, value.access_token)?
			.with_consumer_secret(value.consumer_secret)
			.with_access_token_secret(value.access_token_secret))
	}
}

/// Serde surface for [`Credentials`]; deserialization funnels through the same
/// validation as [`Credentials::new`].
#[derive(Serialize, Deserialize)]
struct RawCredentials {
	consumer_key: String,
	#[serde(default)]
	consumer_secret: CredentialSecret,
	access_token: String,
	#[serde(default)]
	access_token_secret: CredentialSecret,
}
impl From<Credentials> for RawCredentials {
	fn from(value: Credentials) -> Self {
		Self {
			consumer_key: value.consumer_key,
			consumer_secret: value.consumer_secret,
			access_token: value.access_token,
			access_token_secret: value.access_token_secret,
		}
	}
}
