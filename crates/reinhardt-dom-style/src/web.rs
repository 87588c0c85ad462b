//! Browser backend (WASM only).
//!
//! Setter failures reported by `CSSStyleDeclaration` are ignored: a patch
//! never fails, an invalid value simply leaves the property unchanged.

use crate::patch::{RevertHandle, patch_style};
use crate::target::StyleTarget;
use crate::value::StyleValue;
use web_sys::{CssStyleDeclaration, HtmlElement};

impl StyleTarget for CssStyleDeclaration {
	fn property_value(&self, property: &str) -> String {
		CssStyleDeclaration::get_property_value(self, property).unwrap_or_default()
	}

	fn set_property(&self, property: &str, value: &str) {
		let _ = CssStyleDeclaration::set_property(self, property, value);
	}

	fn remove_property(&self, property: &str) {
		let _ = CssStyleDeclaration::remove_property(self, property);
	}

	fn property_priority(&self, property: &str) -> String {
		CssStyleDeclaration::get_property_priority(self, property)
	}

	fn set_property_with_priority(&self, property: &str, value: &str, priority: &str) {
		let _ = CssStyleDeclaration::set_property_with_priority(self, property, value, priority);
	}
}

impl StyleTarget for HtmlElement {
	fn property_value(&self, property: &str) -> String {
		self.style().property_value(property)
	}

	fn set_property(&self, property: &str, value: &str) {
		StyleTarget::set_property(&self.style(), property, value)
	}

	fn remove_property(&self, property: &str) {
		StyleTarget::remove_property(&self.style(), property)
	}

	fn property_priority(&self, property: &str) -> String {
		self.style().property_priority(property)
	}

	fn set_property_with_priority(&self, property: &str, value: &str, priority: &str) {
		self.style().set_property_with_priority(property, value, priority)
	}
}

/// [`patch_style`] on an element's inline `style`.
pub fn patch_element_style<I, K, V>(element: &HtmlElement, styles: I) -> RevertHandle<HtmlElement>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: Into<StyleValue>,
{
	patch_style(element, styles)
}
