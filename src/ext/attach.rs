//! Header attachment contracts that let downstream crates send a [`SignedRequest`]
//! through arbitrary HTTP clients.

// self
use crate::signer::SignedRequest;

/// Describes how to attach a [`SignedRequest`] to an outbound request without
/// constraining the HTTP client type.
///
/// The trait is intentionally generic over both the request and error types so
/// implementers can integrate with any client builder (`reqwest`, `surf`, a
/// bespoke SDK, etc.) while keeping the signing core free of those dependencies.
pub trait AttachAuthorization<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes (or clones) the provided request and injects the `Authorization`
	/// header derived from the [`SignedRequest`].
	fn attach_authorization(
		&self,
		request: Request,
		signed: &SignedRequest,
	) -> Result<Request, Error>;
}

/// Attaches the marketplace's expected header triple to a [`reqwest::RequestBuilder`]:
/// the signed `Authorization` value plus `Content-Type: application/xml` and
/// `Accept: application/json`.
#[cfg(feature = "reqwest")]
#[derive(Clone, Copy, Debug, Default)]
pub struct MarketplaceHeaders;
#[cfg(feature = "reqwest")]
impl AttachAuthorization<reqwest::RequestBuilder, std::convert::Infallible> for MarketplaceHeaders {
	fn attach_authorization(
		&self,
		request: reqwest::RequestBuilder,
		signed: &SignedRequest,
	) -> Result<reqwest::RequestBuilder, std::convert::Infallible> {
		use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

		Ok(request
			.header(AUTHORIZATION, &signed.authorization_header)
			.header(CONTENT_TYPE, "application/xml")
			.header(ACCEPT, "application/json"))
	}
}
