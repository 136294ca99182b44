//! OAuth 1.0 request signing for marketplace APIs—deterministic parameter normalization,
//! HMAC-SHA1 base strings, and ready-to-send `Authorization` headers.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod encode;
pub mod error;
pub mod ext;
pub mod obs;
pub mod params;
pub mod signer;
pub mod source;

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
