//! In-memory inline style declarations.
//!
//! [`InlineStyle`] behaves like an element's `style` object outside the
//! browser: clones share one declaration block, assigning an existing property
//! updates it in place, assigning a new one appends it, and assigning the
//! empty string removes it. It backs SSR code paths and native tests.

use crate::target::StyleTarget;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared, ordered inline style declaration block.
///
/// Non-custom property names are ASCII-lowercased; custom properties (`--*`)
/// keep their case.
#[derive(Clone, Default)]
pub struct InlineStyle {
	declarations: Rc<RefCell<Vec<(String, String)>>>,
}

fn normalize(property: &str) -> String {
	let property = property.trim();
	if property.starts_with("--") {
		property.to_string()
	} else {
		property.to_ascii_lowercase()
	}
}

/// Splits a declaration list on the `;` separators outside quotes and
/// parentheses.
fn split_declarations(css_text: &str) -> Vec<&str> {
	let mut declarations = Vec::new();
	let mut start = 0;
	let mut depth = 0usize;
	let mut quote = None;
	let mut escaped = false;
	for (index, c) in css_text.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match (quote, c) {
			(_, '\\') => escaped = true,
			(Some(open), c) if c == open => quote = None,
			(Some(_), _) => {}
			(None, '"' | '\'') => quote = Some(c),
			(None, '(') => depth += 1,
			(None, ')') => depth = depth.saturating_sub(1),
			(None, ';') if depth == 0 => {
				declarations.push(&css_text[start..index]);
				start = index + 1;
			}
			_ => {}
		}
	}
	declarations.push(&css_text[start..]);
	declarations
}

impl InlineStyle {
	/// Creates an empty declaration block.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a `style` attribute value such as `"color: red; width: 1px"`.
	///
	/// Declarations without a `:` or with an empty name or value are skipped.
	/// A `;` inside quotes or parentheses belongs to the value, as in
	/// `url("data:image/png;base64,...")`.
	pub fn parse(css_text: &str) -> Self {
		let style = Self::new();
		for declaration in split_declarations(css_text) {
			if let Some((property, value)) = declaration.split_once(':')
				&& !property.trim().is_empty()
			{
				style.set_property(property, value.trim());
			}
		}
		style
	}

	/// Serializes the declarations, e.g. `"color: red; width: 1px;"`.
	pub fn css_text(&self) -> String {
		self.declarations
			.borrow()
			.iter()
			.map(|(property, value)| format!("{}: {};", property, value))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Returns `true` when `property` is declared.
	pub fn has_property(&self, property: &str) -> bool {
		let property = normalize(property);
		self.declarations
			.borrow()
			.iter()
			.any(|(existing, _)| *existing == property)
	}

	/// Copy of the declarations in order.
	pub fn declarations(&self) -> Vec<(String, String)> {
		self.declarations.borrow().clone()
	}

	/// Number of declarations.
	pub fn len(&self) -> usize {
		self.declarations.borrow().len()
	}

	/// Returns `true` when nothing is declared.
	pub fn is_empty(&self) -> bool {
		self.declarations.borrow().is_empty()
	}

	/// Returns `true` when both handles share one declaration block.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.declarations, &other.declarations)
	}
}

impl StyleTarget for InlineStyle {
	fn property_value(&self, property: &str) -> String {
		let property = normalize(property);
		self.declarations
			.borrow()
			.iter()
			.find(|(existing, _)| *existing == property)
			.map(|(_, value)| value.clone())
			.unwrap_or_default()
	}

	fn set_property(&self, property: &str, value: &str) {
		if value.is_empty() {
			self.remove_property(property);
			return;
		}
		let property = normalize(property);
		let mut declarations = self.declarations.borrow_mut();
		match declarations.iter_mut().find(|(existing, _)| *existing == property) {
			Some((_, existing)) => *existing = value.to_string(),
			None => declarations.push((property, value.to_string())),
		}
	}

	fn remove_property(&self, property: &str) {
		let property = normalize(property);
		self.declarations
			.borrow_mut()
			.retain(|(existing, _)| *existing != property);
	}
}

impl PartialEq for InlineStyle {
	fn eq(&self, other: &Self) -> bool {
		*self.declarations.borrow() == *other.declarations.borrow()
	}
}

impl Eq for InlineStyle {}

impl fmt::Debug for InlineStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("InlineStyle").field(&self.css_text()).finish()
	}
}
