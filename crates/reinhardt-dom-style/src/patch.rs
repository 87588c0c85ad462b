//! Revertible style patches
//!
//! [`patch_style`] applies a set of inline style properties to one target and
//! returns a [`RevertHandle`] holding the values it overwrote. Reverting puts
//! every touched property back, including removing properties that did not
//! exist before the patch.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom_style::{StyleValue, patch_style};
//!
//! let restore = patch_style(&element, [
//!     ("overflow", StyleValue::from("hidden")),
//!     ("padding-right", StyleValue::from("15px")),
//!     ("transition", StyleValue::Clear),
//! ]);
//!
//! // ... modal closes
//! restore.revert();
//! ```
//!
//! There is no locking: when two patches overlap on one element, only the
//! most recent handle reflects a coherent snapshot.

use crate::map::StyleMap;
use crate::target::StyleTarget;
use crate::value::StyleValue;

/// Restores the inline properties a [`patch_style`] call overwrote.
///
/// Calling [`revert`](Self::revert) more than once reassigns the same
/// snapshot each time. Priorities (`!important`) are captured along with the
/// values and restored with them.
#[must_use = "dropping the handle discards the captured styles"]
#[derive(Debug, Clone)]
pub struct RevertHandle<T> {
	target: T,
	snapshot: Vec<(String, String)>,
	// Indexed like `snapshot`.
	priorities: Vec<String>,
}

impl<T: StyleTarget> RevertHandle<T> {
	/// Reassigns every captured property to its pre-patch value.
	///
	/// A property that was absent before the patch is removed again. Captures
	/// are replayed last to first, so when two names address one property the
	/// earliest capture wins.
	pub fn revert(&self) {
		for ((property, prior), priority) in self.snapshot.iter().zip(&self.priorities).rev() {
			if prior.is_empty() {
				self.target.remove_property(property);
			} else {
				self.target.set_property_with_priority(property, prior, priority);
			}
		}
		#[cfg(not(target_arch = "wasm32"))]
		tracing::trace!(
			target: "reinhardt_dom::style",
			properties = self.snapshot.len(),
			"reverted inline style patch"
		);
	}

	/// Captured `(property, pre-patch value)` pairs in patch order.
	///
	/// An empty value means the property was not set.
	pub fn snapshot(&self) -> &[(String, String)] {
		&self.snapshot
	}

	/// The patched target.
	pub fn target(&self) -> &T {
		&self.target
	}

	/// Turns the handle into a plain callback, for APIs that take `Fn()`.
	pub fn into_callback(self) -> impl Fn() {
		move || self.revert()
	}
}

/// Applies `styles` to `target` in order and returns a handle restoring the
/// previous values.
///
/// For each property the current inline value is captured before the new one
/// is applied. [`StyleValue::Clear`] and empty strings remove the property.
/// Properties not named in `styles` are never touched. Repeated property names
/// collapse to the last value, keeping the first position.
pub fn patch_style<T, I, K, V>(target: &T, styles: I) -> RevertHandle<T>
where
	T: StyleTarget + Clone,
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: Into<StyleValue>,
{
	let styles: StyleMap<K> = styles.into_iter().collect();
	let mut snapshot = Vec::with_capacity(styles.len());
	let mut priorities = Vec::with_capacity(styles.len());
	for (property, value) in &styles {
		let property: &str = property.as_ref();
		snapshot.push((property.to_string(), target.property_value(property)));
		priorities.push(target.property_priority(property));
		target.apply(property, value);
	}
	#[cfg(not(target_arch = "wasm32"))]
	tracing::trace!(
		target: "reinhardt_dom::style",
		properties = snapshot.len(),
		"applied inline style patch"
	);
	RevertHandle {
		target: target.clone(),
		snapshot,
		priorities,
	}
}
