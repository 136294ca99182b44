//! Canonical OAuth parameter normalization (assembly, sorting, encoding).

// self
use crate::{_prelude::*, encode::oauth_encode};

/// A single name/value pair destined for the signature base string.
///
/// Parameters are an unordered bag until normalization; both OAuth control fields
/// and request query parameters travel through the same type. Values are captured
/// as strings up front so numbers and strings normalize identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthParameter {
	/// Parameter name as it appears on the wire (pre-encoding).
	pub name: String,
	/// Parameter value rendered to its string form (pre-encoding).
	pub value: String,
}
impl OAuthParameter {
	/// Creates a parameter from any displayable value (strings, integers, ...).
	pub fn new(name: impl Into<String>, value: impl Display) -> Self {
		Self { name: name.into(), value: value.to_string() }
	}
}

/// Unordered collection of parameters with a deterministic canonical rendering.
///
/// The set is constructed fresh for every signing operation and consumed
/// immediately; normalization never mutates the insertion order, so rendering the
/// canonical string twice yields identical output.
#[derive(Clone, Debug, Default)]
pub struct ParameterSet {
	entries: Vec<OAuthParameter>,
}
impl ParameterSet {
	/// Adds one parameter to the bag.
	pub fn push(&mut self, parameter: OAuthParameter) {
		self.entries.push(parameter);
	}

	/// Adds every parameter from the provided slice.
	pub fn extend_from_slice(&mut self, parameters: &[OAuthParameter]) {
		self.entries.extend_from_slice(parameters);
	}

	/// Number of parameters collected so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when the bag holds no parameters.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Renders the canonical parameter string.
	///
	/// Names and values are percent-encoded first, then sorted by byte-wise
	/// ascending comparison of the encoded name with ties broken by the encoded
	/// value, and finally joined as `name=value` pairs with `&` and no trailing
	/// separator.
	pub fn canonical_string(&self) -> String {
		let mut encoded = self
			.entries
			.iter()
			.map(|parameter| {
				let name = oauth_encode(&parameter.name).into_owned();
				let value = oauth_encode(&parameter.value).into_owned();

				(name, value)
			})
			.collect::<Vec<_>>();

		encoded.sort();

		let mut buf = String::new();

		for (idx, (name, value)) in encoded.iter().enumerate() {
			if idx > 0 {
				buf.push('&');
			}

			buf.push_str(name);
			buf.push('=');
			buf.push_str(value);
		}

		buf
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use percent_encoding::percent_decode_str;
	// self
	use super::*;

	fn set_of(pairs: &[(&str, &str)]) -> ParameterSet {
		let mut set = ParameterSet::default();

		for (name, value) in pairs {
			set.push(OAuthParameter::new(*name, value));
		}

		set
	}

	#[test]
	fn canonical_order_ignores_insertion_order() {
		let forward = set_of(&[
			("oauth_consumer_key", "key"),
			("oauth_nonce", "abc123"),
			("oauth_signature_method", "HMAC-SHA1"),
			("oauth_timestamp", "1000000000"),
			("oauth_token", "token"),
			("oauth_version", "1.0"),
		]);
		let shuffled = set_of(&[
			("oauth_version", "1.0"),
			("oauth_timestamp", "1000000000"),
			("oauth_token", "token"),
			("oauth_signature_method", "HMAC-SHA1"),
			("oauth_nonce", "abc123"),
			("oauth_consumer_key", "key"),
		]);

		assert_eq!(forward.canonical_string(), shuffled.canonical_string());
		assert_eq!(
			forward.canonical_string(),
			"oauth_consumer_key=key&oauth_nonce=abc123&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1000000000&oauth_token=token&oauth_version=1.0",
		);
	}

	#[test]
	fn shared_names_tie_break_on_value() {
		let set = set_of(&[("tag", "zeta"), ("tag", "alpha")]);

		assert_eq!(set.canonical_string(), "tag=alpha&tag=zeta");
	}

	#[test]
	fn values_encode_per_rfc3986() {
		let set = set_of(&[("search", "Llanowar Elves"), ("idGame", "1")]);

		assert_eq!(set.canonical_string(), "idGame=1&search=Llanowar%20Elves");
	}

	#[test]
	fn numeric_values_render_as_strings() {
		let mut set = ParameterSet::default();

		set.push(OAuthParameter::new("oauth_timestamp", 1_000_000_000_i64));

		assert_eq!(set.canonical_string(), "oauth_timestamp=1000000000");
	}

	#[test]
	fn canonical_string_round_trips() {
		let pairs = [("a b", "c&d"), ("x=y", "1"), ("plain", "value")];
		let set = set_of(&pairs);
		let canonical = set.canonical_string();
		let mut recovered = canonical
			.split('&')
			.map(|pair| {
				let (name, value) =
					pair.split_once('=').expect("Every canonical pair should contain a separator.");
				let name = percent_decode_str(name)
					.decode_utf8()
					.expect("Encoded names should decode as UTF-8.")
					.into_owned();
				let value = percent_decode_str(value)
					.decode_utf8()
					.expect("Encoded values should decode as UTF-8.")
					.into_owned();

				(name, value)
			})
			.collect::<Vec<_>>();
		let mut expected = pairs
			.iter()
			.map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
			.collect::<Vec<_>>();

		recovered.sort();
		expected.sort();

		assert_eq!(recovered, expected);
	}

	#[test]
	fn empty_set_renders_empty_string() {
		let set = ParameterSet::default();

		assert!(set.is_empty());
		assert_eq!(set.len(), 0);
		assert_eq!(set.canonical_string(), "");
	}
}
