//! Optional observability helpers for signing operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_signer.sign` with the
//!   `method` and `host` fields.
//! - Enable `metrics` to increment the `oauth1_signer_sign_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.
//!
//! Both hooks compile to no-ops when their features are disabled, so the signing
//! core stays a pure computation with no hidden output channel.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each signing attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignOutcome {
	/// Entry to the signing operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SignOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignOutcome::Attempt => "attempt",
			SignOutcome::Success => "success",
			SignOutcome::Failure => "failure",
		}
	}
}
impl Display for SignOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
