//! Ordered property maps.

use crate::value::StyleValue;

/// Ordered mapping from property name to [`StyleValue`].
///
/// Entries keep insertion order. Inserting a property that is already present
/// replaces its value in place, so each property appears at most once. Names
/// compare the way `CSSStyleDeclaration` does: ASCII case-insensitive and
/// trimmed, except custom properties (`--*`), which are case-sensitive.
///
/// `K` is any `AsRef<str>`: string keys, or [`CssProperty`](crate::CssProperty)
/// for compile-time checked names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap<K = String> {
	entries: Vec<(K, StyleValue)>,
}

impl<K> StyleMap<K> {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when the map holds no properties.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the entries in order.
	pub fn iter(&self) -> std::slice::Iter<'_, (K, StyleValue)> {
		self.entries.iter()
	}
}

impl<K: AsRef<str>> StyleMap<K> {
	/// Sets `property` to `value`, keeping the position of an existing entry.
	pub fn insert(&mut self, property: K, value: impl Into<StyleValue>) -> &mut Self {
		let value = value.into();
		match self.position(property.as_ref()) {
			Some(index) => self.entries[index].1 = value,
			None => self.entries.push((property, value)),
		}
		self
	}

	/// Marks `property` for removal.
	pub fn clear_property(&mut self, property: K) -> &mut Self {
		self.insert(property, StyleValue::Clear)
	}

	/// Returns the value recorded for `property`.
	pub fn get(&self, property: &str) -> Option<&StyleValue> {
		self.position(property).map(|index| &self.entries[index].1)
	}

	/// Property names in order.
	pub fn properties(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(property, _)| property.as_ref())
	}

	fn position(&self, property: &str) -> Option<usize> {
		self.entries
			.iter()
			.position(|(existing, _)| same_property(existing.as_ref(), property))
	}
}

fn same_property(a: &str, b: &str) -> bool {
	let (a, b) = (a.trim(), b.trim());
	if a.starts_with("--") || b.starts_with("--") {
		a == b
	} else {
		a.eq_ignore_ascii_case(b)
	}
}

impl<K> Default for StyleMap<K> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: AsRef<str>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap<K> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<K: AsRef<str>, V: Into<StyleValue>> Extend<(K, V)> for StyleMap<K> {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (property, value) in iter {
			self.insert(property, value);
		}
	}
}

impl<K: AsRef<str>, V: Into<StyleValue>, const N: usize> From<[(K, V); N]> for StyleMap<K> {
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

impl<K> IntoIterator for StyleMap<K> {
	type Item = (K, StyleValue);
	type IntoIter = std::vec::IntoIter<(K, StyleValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'m, K> IntoIterator for &'m StyleMap<K> {
	type Item = &'m (K, StyleValue);
	type IntoIter = std::slice::Iter<'m, (K, StyleValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
