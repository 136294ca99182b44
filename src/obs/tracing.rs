// self
use crate::{_prelude::*, signer::Method};

/// A span builder wrapping one signing operation.
#[derive(Clone, Debug)]
pub struct SignSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SignSpan {
	/// Creates a new span tagged with the request method + target host.
	pub fn new(method: Method, host: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth1_signer.sign", method = method.as_str(), host);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (method, host);

			Self {}
		}
	}

	/// Enters the span for the duration of the synchronous signing computation.
	pub fn entered(self) -> SignSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SignSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SignSpanGuard {}
		}
	}
}

/// RAII guard returned by [`SignSpan::entered`].
pub struct SignSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SignSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SignSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sign_span_noop_without_tracing() {
		let _guard = SignSpan::new(Method::Get, "api.example.com").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}
}
