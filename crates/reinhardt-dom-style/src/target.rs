//! Host style capability
//!
//! [`StyleTarget`] is the per-node inline style access the patcher needs:
//! read a property, assign it, remove it. Methods take `&self` because the
//! underlying declaration block is shared, mutable host state (the browser's
//! `CSSStyleDeclaration`, or [`InlineStyle`](crate::InlineStyle)).

use crate::value::StyleValue;

/// Inline style access for one node.
///
/// Property names are hyphenated CSS names (`background-color`, `--accent`).
pub trait StyleTarget {
	/// Current inline value of `property`, or `""` when it is not set.
	fn property_value(&self, property: &str) -> String;

	/// Assigns `value` to `property`.
	fn set_property(&self, property: &str, value: &str);

	/// Removes `property` from the inline style.
	fn remove_property(&self, property: &str);

	/// Priority of `property` (`"important"` or `""`).
	///
	/// Targets that keep the priority inside the value return `""`.
	fn property_priority(&self, _property: &str) -> String {
		String::new()
	}

	/// Assigns `value` to `property` with the given priority.
	fn set_property_with_priority(&self, property: &str, value: &str, _priority: &str) {
		self.set_property(property, value)
	}

	/// Applies a [`StyleValue`]: assigns `Set` values and removes the
	/// property for `Clear` or an empty string.
	fn apply(&self, property: &str, value: &StyleValue) {
		match value {
			StyleValue::Set(value) if !value.is_empty() => self.set_property(property, value),
			_ => self.remove_property(property),
		}
	}
}

impl<T: StyleTarget + ?Sized> StyleTarget for &T {
	fn property_value(&self, property: &str) -> String {
		(**self).property_value(property)
	}

	fn set_property(&self, property: &str, value: &str) {
		(**self).set_property(property, value)
	}

	fn remove_property(&self, property: &str) {
		(**self).remove_property(property)
	}

	fn property_priority(&self, property: &str) -> String {
		(**self).property_priority(property)
	}

	fn set_property_with_priority(&self, property: &str, value: &str, priority: &str) {
		(**self).set_property_with_priority(property, value, priority)
	}
}
