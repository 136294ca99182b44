//! Default nonce and timestamp sources for production callers.
//!
//! The signing engine never reads the system clock or a random generator itself;
//! both values arrive as explicit parameters so signatures stay reproducible in
//! tests. Non-test callers can plug these helpers in at the call site.

// crates.io
use rand::{Rng, distr::Alphanumeric};
use time::OffsetDateTime;

/// Number of alphanumeric characters in a generated nonce.
pub const NONCE_LEN: usize = 32;

/// Generates a random single-use nonce of [`NONCE_LEN`] alphanumeric characters.
pub fn random_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}

/// Current wall-clock time as Unix seconds.
pub fn unix_timestamp() -> i64 {
	OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn nonces_are_alphanumeric_and_unique() {
		let first = random_nonce();
		let second = random_nonce();

		assert_eq!(first.len(), NONCE_LEN);
		assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
		assert_ne!(first, second, "Consecutive nonces should differ.");
	}

	#[test]
	fn timestamps_are_recent_unix_seconds() {
		let stamp = unix_timestamp();

		// 2020-01-01T00:00:00Z; anything earlier means the clock source regressed.
		assert!(stamp > 1_577_836_800);
	}
}
