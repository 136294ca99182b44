//! Secure credential secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted credential secret wrapper keeping shared-secret material out of logs.
///
/// OAuth 1.0 allows a secret to be present but blank, so the default value is the
/// empty string rather than an absent one. The empty secret still participates in
/// the signing key.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSecret(String);
impl CredentialSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns true when the secret is present-but-blank.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for CredentialSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for CredentialSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for CredentialSecret {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
impl Debug for CredentialSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("CredentialSecret").field(&"<redacted>").finish()
	}
}
impl Display for CredentialSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = CredentialSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "CredentialSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn default_secret_is_blank() {
		let secret = CredentialSecret::default();

		assert!(secret.is_empty());
		assert_eq!(secret.expose(), "");
	}
}
