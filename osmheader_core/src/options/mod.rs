//! An insertion-ordered store of string options.

use anyhow::{Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt;

/// Ordered key/value string store.
///
/// Keys are unique. Setting an existing key replaces its value but keeps its
/// position, so iteration always follows the order in which keys were first set.
///
/// # Examples
/// ```
/// use osmheader_core::Options;
///
/// let mut options = Options::from([("generator", "toolX")]);
/// options.set("pbf_dense_nodes", "true");
/// options.set("generator", "toolY");
///
/// assert_eq!(options.get("generator"), Some("toolY"));
/// assert!(options.is_true("pbf_dense_nodes"));
/// assert_eq!(options.to_string(), "generator=toolY,pbf_dense_nodes=true");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options(IndexMap<String, String>);

impl Options {
	pub fn new() -> Options {
		Options::default()
	}

	/// Inserts `value` under `key`, overwriting any previous value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	/// Stores a boolean as `"true"` or `"false"`.
	pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
		self.set(key, if value { "true" } else { "false" });
	}

	/// Sets an option from a `"key=value"` string. A string without `=` sets
	/// the key to `"true"`. Only the first `=` separates key and value.
	///
	/// ```
	/// use osmheader_core::Options;
	///
	/// let mut options = Options::new();
	/// options.set_from_str("filter=a=b").unwrap();
	/// options.set_from_str("history").unwrap();
	/// assert_eq!(options.get("filter"), Some("a=b"));
	/// assert_eq!(options.get("history"), Some("true"));
	/// ```
	pub fn set_from_str(&mut self, data: &str) -> Result<()> {
		let (key, value) = data.split_once('=').unwrap_or((data, "true"));
		ensure!(!key.is_empty(), "option '{data}' has an empty key");
		log::trace!("set option {key}={value}");
		self.set(key, value);
		Ok(())
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns the value of `key`, or `default` if it is not set.
	pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.get(key).unwrap_or(default)
	}

	/// The value is `"true"` or `"yes"`.
	pub fn is_true(&self, key: &str) -> bool {
		matches!(self.get(key), Some("true" | "yes"))
	}

	/// The value is `"false"` or `"no"`.
	pub fn is_false(&self, key: &str) -> bool {
		matches!(self.get(key), Some("false" | "no"))
	}

	/// The key is missing or not set to a false value.
	pub fn is_not_false(&self, key: &str) -> bool {
		!self.is_false(key)
	}

	/// Removes `key` and returns its value. The remaining keys keep their order.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.0.shift_remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over all `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.into_iter()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut options = Options::new();
		options.extend(iter);
		options
	}
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Options {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.set(key, value);
		}
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Options {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

type StrPair<'a> = (&'a str, &'a str);
type StrPairs<'a> = std::iter::Map<indexmap::map::Iter<'a, String, String>, fn((&'a String, &'a String)) -> StrPair<'a>>;

fn as_str_pair<'a>((key, value): (&'a String, &'a String)) -> StrPair<'a> {
	(key.as_str(), value.as_str())
}

impl<'a> IntoIterator for &'a Options {
	type Item = StrPair<'a>;
	type IntoIter = StrPairs<'a>;

	fn into_iter(self) -> Self::IntoIter {
		let convert: fn((&'a String, &'a String)) -> StrPair<'a> = as_str_pair;
		self.0.iter().map(convert)
	}
}

impl fmt::Display for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.iter().map(|(k, v)| format!("{k}={v}")).join(","))
	}
}
