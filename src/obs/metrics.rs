// self
use crate::obs::SignOutcome;

/// Records a signing outcome via the global metrics recorder (when enabled).
pub fn record_sign_outcome(outcome: SignOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth1_signer_sign_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
