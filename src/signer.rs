//! The signing engine: base-string construction, HMAC-SHA1 digests, and
//! `Authorization` header assembly.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	encode::oauth_encode,
	error::{ConfigError, EncodingError},
	obs::{SignOutcome, SignSpan, record_sign_outcome},
	params::{OAuthParameter, ParameterSet},
};

type HmacSha1 = Hmac<Sha1>;

/// Protocol version carried in the `oauth_version` field.
pub const OAUTH_VERSION: &str = "1.0";
/// Signature method carried in the `oauth_signature_method` field.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// HTTP methods accepted by the signing engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Returns the uppercase wire form used in the base string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Output artifact of one signing operation.
///
/// Returned by value and never cached; every field derives from the same input
/// snapshot, so the signature always matches the values the header claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignedRequest {
	/// The canonical OAuth base string that was signed.
	pub base_string: String,
	/// Base64-encoded HMAC-SHA1 digest of the base string.
	pub signature: String,
	/// Fully formatted `Authorization` header value.
	pub authorization_header: String,
}

/// Produces OAuth 1.0 `Authorization` headers for marketplace API requests.
///
/// The engine owns an immutable [`Credentials`] value validated once at
/// construction and nothing else; signing is a pure function of its inputs
/// (including the caller-supplied nonce and timestamp), so an engine can be shared
/// across any number of threads without synchronization.
#[derive(Clone, Debug)]
pub struct SignatureEngine {
	credentials: Credentials,
}
impl SignatureEngine {
	/// Creates an engine from the two required identifiers, leaving both secrets
	/// blank.
	pub fn new(
		consumer_key: impl Into<String>,
		access_token: impl Into<String>,
	) -> Result<Self, ConfigError> {
		Ok(Self { credentials: Credentials::new(consumer_key, access_token)? })
	}

	/// Creates an engine around an already-validated credential set.
	pub fn from_credentials(credentials: Credentials) -> Self {
		Self { credentials }
	}

	/// Sets or replaces the consumer secret.
	pub fn with_consumer_secret(mut self, secret: impl Into<String>) -> Self {
		self.credentials = self.credentials.with_consumer_secret(secret.into());

		self
	}

	/// Sets or replaces the access token secret.
	pub fn with_access_token_secret(mut self, secret: impl Into<String>) -> Self {
		self.credentials = self.credentials.with_access_token_secret(secret.into());

		self
	}

	/// The credential set this engine signs with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Signs one request description and assembles its `Authorization` header.
	///
	/// `nonce` and `timestamp` are explicit inputs rather than hidden reads of a
	/// random generator or the wall clock; the same snapshot of method, nonce, and
	/// timestamp feeds both the base string and the rendered header. Identical
	/// inputs always yield an identical [`SignedRequest`].
	pub fn build_authorization_header(
		&self,
		method: Method,
		url: &str,
		extra_params: &[OAuthParameter],
		nonce: &str,
		timestamp: i64,
	) -> Result<SignedRequest> {
		record_sign_outcome(SignOutcome::Attempt);

		let url = Url::parse(url).map_err(|source| {
			record_sign_outcome(SignOutcome::Failure);

			Error::from(EncodingError::InvalidUrl { source })
		})?;
		let _span = SignSpan::new(method, url.host_str().unwrap_or_default()).entered();
		let params = self.collect_parameters(nonce, timestamp, extra_params);
		let parameter_string = params.canonical_string();
		let base_string = build_base_string(method, &url, &parameter_string);
		let signature = sign_base_string(&self.signing_key(), &base_string);
		let authorization_header = self.render_header(&url, nonce, timestamp, &signature);

		record_sign_outcome(SignOutcome::Success);

		Ok(SignedRequest { base_string, signature, authorization_header })
	}

	/// Assembles the six fixed `oauth_*` fields plus the caller's extra parameters.
	fn collect_parameters(
		&self,
		nonce: &str,
		timestamp: i64,
		extra_params: &[OAuthParameter],
	) -> ParameterSet {
		let mut params = ParameterSet::default();

		params.push(OAuthParameter::new("oauth_consumer_key", self.credentials.consumer_key()));
		params.push(OAuthParameter::new("oauth_nonce", nonce));
		params.push(OAuthParameter::new("oauth_signature_method", SIGNATURE_METHOD));
		params.push(OAuthParameter::new("oauth_timestamp", timestamp));
		params.push(OAuthParameter::new("oauth_token", self.credentials.access_token()));
		params.push(OAuthParameter::new("oauth_version", OAUTH_VERSION));
		params.extend_from_slice(extra_params);

		params
	}

	/// Signing key: encoded consumer secret and encoded token secret joined by `&`.
	///
	/// Both secrets may be blank; the lone `&` is a valid zero-length HMAC key.
	fn signing_key(&self) -> String {
		format!(
			"{}&{}",
			oauth_encode(self.credentials.consumer_secret().expose()),
			oauth_encode(self.credentials.access_token_secret().expose()),
		)
	}

	/// Renders the header value in the fixed field order the marketplace expects.
	fn render_header(&self, url: &Url, nonce: &str, timestamp: i64, signature: &str) -> String {
		format!(
			"OAuth realm=\"{url}\", oauth_version=\"{OAUTH_VERSION}\", \
			 oauth_timestamp=\"{timestamp}\", oauth_nonce=\"{nonce}\", \
			 oauth_consumer_key=\"{}\", oauth_token=\"{}\", \
			 oauth_signature_method=\"{SIGNATURE_METHOD}\", oauth_signature=\"{signature}\"",
			self.credentials.consumer_key(),
			self.credentials.access_token(),
		)
	}
}

/// Base string: uppercase method, encoded URL, and encoded parameter string joined
/// by literal `&` separators (three segments, two separators).
fn build_base_string(method: Method, url: &Url, parameter_string: &str) -> String {
	format!("{}&{}&{}", method.as_str(), oauth_encode(url.as_str()), oauth_encode(parameter_string))
}

/// HMAC-SHA1 digest of the base string, base64-encoded with padding.
fn sign_base_string(signing_key: &str, base_string: &str) -> String {
	let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
		.expect("HMAC accepts keys of any length.");

	mac.update(base_string.as_bytes());

	STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn engine() -> SignatureEngine {
		SignatureEngine::new("key", "token")
			.expect("Engine fixture should be valid.")
			.with_consumer_secret("secret")
			.with_access_token_secret("tokensecret")
	}

	#[test]
	fn construction_requires_key_and_token() {
		assert_eq!(SignatureEngine::new("", "token").unwrap_err(), ConfigError::EmptyConsumerKey);
		assert_eq!(SignatureEngine::new("key", "").unwrap_err(), ConfigError::EmptyAccessToken);
		assert!(SignatureEngine::new("key", "token").is_ok(), "Blank secrets are permitted.");
	}

	#[test]
	fn method_labels_are_uppercase() {
		assert_eq!(Method::Get.as_str(), "GET");
		assert_eq!(Method::Post.as_str(), "POST");
		assert_eq!(Method::Put.as_str(), "PUT");
		assert_eq!(Method::Delete.as_str(), "DELETE");
		assert_eq!(Method::Delete.to_string(), "DELETE");
	}

	#[test]
	fn malformed_url_raises_encoding_error() {
		let err = engine()
			.build_authorization_header(Method::Get, "not a url", &[], "abc123", 1_000_000_000)
			.expect_err("Unparsable URLs must be rejected.");

		assert!(matches!(err, Error::Encoding(EncodingError::InvalidUrl { .. })));
	}

	#[test]
	fn header_and_base_string_share_one_snapshot() {
		let signed = engine()
			.build_authorization_header(
				Method::Get,
				"https://api.example.com/res",
				&[],
				"abc123",
				1_000_000_000,
			)
			.expect("Signing fixture should succeed.");

		assert!(signed.base_string.contains("oauth_timestamp%3D1000000000"));
		assert!(signed.base_string.contains("oauth_nonce%3Dabc123"));
		assert!(signed.authorization_header.contains("oauth_timestamp=\"1000000000\""));
		assert!(signed.authorization_header.contains("oauth_nonce=\"abc123\""));
	}

	#[test]
	fn signing_key_encodes_both_secrets() {
		assert_eq!(engine().signing_key(), "secret&tokensecret");

		let blank = SignatureEngine::new("key", "token").expect("Engine fixture should be valid.");

		assert_eq!(blank.signing_key(), "&");

		let reserved = SignatureEngine::new("key", "token")
			.expect("Engine fixture should be valid.")
			.with_consumer_secret("se&cret");

		assert_eq!(reserved.signing_key(), "se%26cret&");
	}

	#[test]
	fn debug_output_redacts_credentials() {
		let rendered = format!("{:?}", engine());

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("tokensecret"));
	}
}
