//! Signer-level error types shared across credentials, encoding, and header assembly.

// self
use crate::_prelude::*;

/// Signer-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical signer error exposed by public APIs.
///
/// Every failure in the signing core is a programming or input error; nothing here is
/// transient, so callers should treat these as immediately fatal to the operation
/// rather than retrying.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local credential configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Input could not be parsed or percent-encoded.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
}

/// Credential validation failures raised at engine construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum ConfigError {
	/// The consumer key was empty.
	#[error("Consumer key cannot be empty.")]
	EmptyConsumerKey,
	/// The access token was empty.
	#[error("Access token cannot be empty.")]
	EmptyAccessToken,
}

/// Failures raised while preparing inputs for the base string.
#[derive(Debug, ThisError)]
pub enum EncodingError {
	/// The request URL could not be parsed as an absolute URL.
	#[error("Request URL is invalid.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
